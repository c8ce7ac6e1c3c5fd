//! Seed configuration tests: validation and JSON loading.

use tui_life::core::{PatternSpec, Placement, SeedConfig};
use tui_life::error::ConfigError;

#[test]
fn test_unknown_pattern_rejected() {
    let seed = SeedConfig {
        patterns: vec![PatternSpec::new("dot", 1, 1, &["*"])],
        placements: vec![Placement::new("ghost", 0, 0)],
    };
    match seed.live_cells() {
        Err(ConfigError::UnknownPattern { name }) => assert_eq!(name, "ghost"),
        other => panic!("expected UnknownPattern, got {:?}", other),
    }
}

#[test]
fn test_duplicate_pattern_rejected() {
    let seed = SeedConfig {
        patterns: vec![
            PatternSpec::new("dot", 1, 1, &["*"]),
            PatternSpec::new("dot", 1, 1, &["*"]),
        ],
        placements: vec![],
    };
    assert!(matches!(
        seed.live_cells(),
        Err(ConfigError::DuplicatePattern { .. })
    ));
}

#[test]
fn test_size_mismatch_reports_counts() {
    let seed = SeedConfig {
        patterns: vec![PatternSpec::new("broken", 3, 2, &["***"])],
        placements: vec![],
    };
    match seed.live_cells() {
        Err(ConfigError::PatternSizeMismatch {
            name,
            expected,
            found,
        }) => {
            assert_eq!(name, "broken");
            assert_eq!(expected, 6);
            assert_eq!(found, 3);
        }
        other => panic!("expected PatternSizeMismatch, got {:?}", other),
    }
}

#[test]
fn test_seed_config_from_json() {
    let json = r#"{
        "patterns": [
            { "name": "blinker", "width": 3, "height": 1, "rows": ["***"] }
        ],
        "placements": [
            { "pattern": "blinker", "x": 5, "y": 5 }
        ]
    }"#;

    let seed = SeedConfig::from_json(json).unwrap();
    let cells = seed.live_cells().unwrap();
    assert_eq!(cells, vec![(4, 5), (5, 5), (6, 5)]);
}

#[test]
fn test_seed_config_json_roundtrip() {
    let seed = SeedConfig::reference();
    let json = serde_json::to_string(&seed).unwrap();
    let back = SeedConfig::from_json(&json).unwrap();
    assert_eq!(back, seed);
}

#[test]
fn test_seed_config_load_from_file() {
    let path = std::env::temp_dir().join("tui_life_seed_test.json");
    let seed = SeedConfig {
        patterns: vec![PatternSpec::new("dot", 1, 1, &["*"])],
        placements: vec![Placement::new("dot", 3, 3)],
    };
    std::fs::write(&path, serde_json::to_string(&seed).unwrap()).unwrap();

    let loaded = SeedConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, seed);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = SeedConfig::load("/nonexistent/tui_life_seed.json");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_malformed_json_is_json_error() {
    assert!(matches!(
        SeedConfig::from_json("{ not json"),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn test_reference_table_matches_deployment_counts() {
    let seed = SeedConfig::reference();
    assert_eq!(seed.patterns.len(), 5);
    assert_eq!(seed.placements.len(), 18);
    assert_eq!(seed.live_cells().unwrap().len(), 388);
}
