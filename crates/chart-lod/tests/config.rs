// File: crates/chart-lod/tests/config.rs
// Purpose: Optimizer config defaults, JSON overrides and validation.

use chart_lod::config::{
    DEFAULT_LARGE_DATASET_THRESHOLD, DEFAULT_LARGE_THRESHOLD, DEFAULT_PROGRESSIVE_CHUNK,
    DEFAULT_PROGRESSIVE_THRESHOLD,
};
use chart_lod::{Error, OptimizerConfig};

#[test]
fn defaults_match_tuned_policy() {
    let cfg = OptimizerConfig::default();
    assert_eq!(cfg.large_dataset_threshold, DEFAULT_LARGE_DATASET_THRESHOLD);
    assert_eq!(cfg.progressive_threshold, DEFAULT_PROGRESSIVE_THRESHOLD);
    assert_eq!(cfg.progressive_chunk, DEFAULT_PROGRESSIVE_CHUNK);
    assert_eq!(cfg.large_threshold, DEFAULT_LARGE_THRESHOLD);
    assert_eq!((2000, 3000, 1000, 2000), (cfg.large_dataset_threshold, cfg.progressive_threshold, cfg.progressive_chunk, cfg.large_threshold));
    cfg.validate().expect("defaults are valid");
}

#[test]
fn partial_json_keeps_other_defaults() {
    let cfg = OptimizerConfig::from_json_str(r#"{ "progressiveChunk": 500 }"#).unwrap();
    assert_eq!(cfg.progressive_chunk, 500);
    assert_eq!(cfg.progressive_threshold, DEFAULT_PROGRESSIVE_THRESHOLD);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = OptimizerConfig::from_json_str(r#"{ "progresive": 500 }"#).unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn invalid_values_are_rejected() {
    for text in [
        r#"{ "progressiveChunk": 0 }"#,
        r#"{ "largeThreshold": 0 }"#,
        r#"{ "largeDatasetThreshold": 5000, "progressiveThreshold": 3000 }"#,
    ] {
        let err = OptimizerConfig::from_json_str(text).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)), "{text}: {err}");
    }
}

#[test]
fn missing_file_reports_path() {
    let err = OptimizerConfig::from_path("target/does-not-exist/optimizer.json").unwrap_err();
    assert!(matches!(err, Error::ConfigIo { .. }));
    assert!(err.to_string().contains("optimizer.json"));
}

#[test]
fn loads_from_file() {
    let dir = std::path::PathBuf::from("target/test_out");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("optimizer.json");
    std::fs::write(&path, r#"{ "largeDatasetThreshold": 100, "progressiveThreshold": 200 }"#).unwrap();
    let cfg = OptimizerConfig::from_path(&path).unwrap();
    assert_eq!(cfg.large_dataset_threshold, 100);
    assert_eq!(cfg.progressive_threshold, 200);
}
