//! Tests for command-line parsing and the inspection driver

#[cfg(test)]
mod tests {
    use clap::Parser;
    use fillgrid::Point;
    use fillgrid::io::cli::{Cli, Inspector};
    use fillgrid::io::configuration::{DEFAULT_COLOR_COUNT, DEFAULT_SEED, DEFAULT_WIDTH};
    use std::ffi::OsString;
    use std::fs;
    use std::path::PathBuf;

    // Tests CLI parsing with no arguments uses defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program"]);

        assert!(cli.target.is_none());
        assert_eq!(cli.start(), Point::new(0, 0));
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.width, DEFAULT_WIDTH);
        assert_eq!(cli.colors, DEFAULT_COLOR_COUNT);
        assert!(!cli.regions);
        assert!(cli.export_path().is_none());
    }

    // Tests CLI parsing with all available arguments
    // Verified by swapping the short flags of x and y
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "level.txt",
            "-x",
            "3",
            "-y",
            "-1",
            "--width",
            "5",
            "-H",
            "6",
            "--colors",
            "2",
            "--seed",
            "9",
            "--regions",
            "--verbose",
            "--output",
            "out/region.png",
        ]);

        assert_eq!(cli.target, Some(PathBuf::from("level.txt")));
        assert_eq!(cli.start(), Point::new(3, -1));
        assert_eq!((cli.width, cli.height, cli.colors, cli.seed), (5, 6, 2, 9));
        assert!(cli.regions && cli.verbose);
        assert_eq!(cli.export_path(), Some(PathBuf::from("out/region.png")));
    }

    // Tests --export derives the image path from the level path
    // Verified by keeping the level's own extension
    #[test]
    fn test_export_path_derivation() {
        let cli = Cli::parse_from(["program", "levels/one.txt", "--export"]);
        assert_eq!(
            cli.export_path(),
            Some(PathBuf::from("levels/one_region.png"))
        );

        let cli = Cli::parse_from(["program", "--export"]);
        assert_eq!(cli.export_path(), Some(PathBuf::from("random_region.png")));
    }

    // Tests the report for a loaded text level
    // Verified by reporting neighbor positions instead of colors
    #[test]
    fn test_run_reports_region_and_neighbors() {
        let dir = tempfile::tempdir();
        assert!(dir.is_ok());
        let Ok(dir) = dir else { return };
        let level_path = dir.path().join("level.txt");
        assert!(fs::write(&level_path, "aab\nabb\nccb\n").is_ok());

        let args: Vec<OsString> = vec![
            "program".into(),
            level_path.clone().into_os_string(),
            "-x".into(),
            "1".into(),
            "-y".into(),
            "1".into(),
            "--regions".into(),
            "--export".into(),
        ];
        let cli = Cli::parse_from(args);
        let inspector = Inspector::new(cli);

        let mut out = Vec::new();
        let result = inspector.run(&mut out);
        assert!(result.is_ok());

        let Ok(report) = result else { return };
        // (1, 1) is the b in the middle row; a=0, b=1, c=2
        assert_eq!(report.region.len(), 4);
        assert_eq!(report.neighbors, [Some(0), Some(0), Some(1), Some(2)]);
        assert_eq!(report.region_count, Some(3));

        let text = String::from_utf8(out).unwrap_or_default();
        assert!(text.contains("level: 3x3"));
        assert!(text.contains("region at (1, 1): 4 cells"));
        assert!(text.contains("neighbors: left=0 up=0 right=1 down=2"));
        assert!(text.contains("regions: 3"));
        assert!(dir.path().join("level_region.png").exists());
    }

    // Tests generated levels report missing neighbors at a corner
    // Verified by clamping neighbor coordinates to the grid
    #[test]
    fn test_run_random_level_corner() {
        let cli = Cli::parse_from(["program", "-w", "4", "-H", "4", "-c", "1"]);
        let inspector = Inspector::new(cli);

        let mut out = Vec::new();
        let result = inspector.run(&mut out);
        assert!(result.is_ok());
        let Ok(report) = result else { return };

        assert_eq!(report.dimensions, (4, 4));
        assert_eq!(report.region.len(), 16);
        assert_eq!(report.neighbors, [None, Some(0), Some(0), None]);
        assert!(report.region_count.is_none());

        let text = String::from_utf8(out).unwrap_or_default();
        assert!(text.contains("left=- up=0 right=0 down=-"));
        assert!(!text.contains("regions:"));
    }

    // Tests loading errors propagate from run
    // Verified by falling back to a random level on load failure
    #[test]
    fn test_run_missing_level() {
        let cli = Cli::parse_from(["program", "missing/level.txt"]);
        let inspector = Inspector::new(cli);
        assert!(inspector.run(&mut Vec::new()).is_err());
    }
}
