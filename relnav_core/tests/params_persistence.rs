use relnav_core::{NavError, RuntimeParams};
use std::fs;

#[test]
fn test_save_and_reload_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config").join("params.yaml");

    let params = RuntimeParams::from_path(&path).unwrap();
    params.set("movement_multiple", 1.95).unwrap();
    params.save_to_disk().unwrap();

    let reloaded = RuntimeParams::from_path(&path).unwrap();
    assert_eq!(reloaded.get_f64("movement_multiple", 0.0), 1.95);
    assert_eq!(reloaded.get_f64("increment_amount", 0.0), 0.1);
}

#[test]
fn test_malformed_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("params.yaml");
    fs::write(&path, "increment_amount: [unterminated").unwrap();

    let params = RuntimeParams::from_path(&path).unwrap();
    assert_eq!(params.get_f64("increment_amount", 0.0), 0.1);
}

#[test]
fn test_load_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let params = RuntimeParams::with_defaults();

    let err = params
        .load_from_disk(&dir.path().join("absent.yaml"))
        .unwrap_err();
    assert!(matches!(err, NavError::Config(_)));
}

#[test]
fn test_load_replaces_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("robot.yaml");
    fs::write(&path, "left_turn_velocity: 2.4\nright_turn_velocity: -2.45\n").unwrap();

    let params = RuntimeParams::with_defaults();
    params.load_from_disk(&path).unwrap();
    assert_eq!(params.get_f64("left_turn_velocity", 0.0), 2.4);
    assert!(!params.has("increment_amount"));
}
