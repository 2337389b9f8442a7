//! Configuration loading and pipeline construction

use hand_gesture_control::config::{Config, EXAMPLE_CONFIG};
use hand_gesture_control::landmarks::DetectionFrame;
use hand_gesture_control::{Error, TrackingStatus};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("hand_gesture_control_{}_{name}", std::process::id()))
}

#[test]
fn test_file_round_trip() {
    let path = temp_path("round_trip.yaml");

    let mut config = Config::default();
    config.stabilizer.capacity = 20;
    config.stabilizer.min_samples = 6;
    config.cursor.ease = false;
    config.depth.exponent = 1.0;
    config.to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_example_config_builds_pipeline() {
    let config = Config::from_yaml(EXAMPLE_CONFIG).unwrap();
    let mut pipeline = config.create_pipeline().unwrap();

    let result = pipeline.process_frame(&DetectionFrame::new(Vec::new(), 1280, 720));
    assert_eq!(result.status, TrackingStatus::NoHands);
}

#[test]
fn test_missing_file() {
    let result = Config::from_file(temp_path("does_not_exist.yaml"));
    assert!(matches!(result, Err(Error::IoError(_))));
}

#[test]
fn test_invalid_config_refuses_pipeline() {
    let config = Config::from_yaml("stabilizer:\n  capacity: 5\n  min_samples: 10\n  majority: 0.8\n").unwrap();
    let result = config.create_pipeline();
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_custom_stabilizer_is_used() {
    let config = Config::from_yaml("stabilizer:\n  capacity: 4\n  min_samples: 1\n  majority: 0.5\n").unwrap();
    assert_eq!(config.stabilizer.capacity, 4);
    assert!(config.create_pipeline().is_ok());
}
