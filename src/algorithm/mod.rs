/// Seeded random level generation
pub mod generation;
/// Flood-fill region search and grid partitioning
pub mod region;
