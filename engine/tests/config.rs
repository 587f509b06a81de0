//! FILENAME: engine/tests/config.rs
//! PURPOSE: Loading engine settings from JSON.

mod common;

use common::assert_close;
use scicalc_engine::{AngleMode, ConfigError, EngineConfig, MathEngine};
use serde_json::json;

#[test]
fn test_config_from_json_document() {
    let document = json!({
        "angle_mode": "radians",
        "integral_subintervals": 200,
        "max_summation_terms": 50
    });

    let config = EngineConfig::from_json(&document.to_string()).unwrap();
    assert_eq!(config.angle_mode, AngleMode::Radians);
    assert_eq!(config.integral_subintervals, 200);
    assert_eq!(config.max_summation_terms, 50);
    // Unspecified fields keep their defaults
    assert_eq!(config.derivative_step, EngineConfig::default().derivative_step);

    let mut engine = MathEngine::with_config(config).unwrap();
    assert_close(engine.evaluate("sin(pi/2)"), 1.0, 1e-12);
    assert_close(engine.evaluate("int(x, 0, 1)"), 0.5, 1e-9);
}

#[test]
fn test_invalid_config_rejected() {
    let document = json!({ "integral_subintervals": 7 });
    match EngineConfig::from_json(&document.to_string()) {
        Err(ConfigError::InvalidSetting { field, .. }) => {
            assert_eq!(field, "integral_subintervals")
        }
        other => panic!("expected InvalidSetting, got {:?}", other),
    }

    let config = EngineConfig::default().with_max_summation_terms(0);
    assert!(MathEngine::with_config(config).is_err());
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        EngineConfig::from_json("{ not json"),
        Err(ConfigError::Malformed(_))
    ));
}
