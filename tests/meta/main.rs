//! Repository layout checks keeping unit tests in step with sources
