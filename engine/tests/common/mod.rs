//! FILENAME: engine/tests/common/mod.rs
//! PURPOSE: Shared helpers for the engine integration tests.

#![allow(dead_code)]

use scicalc_engine::{AngleMode, EngineConfig, EvalContext, EvalResult, MathEngine};

pub const TOLERANCE: f64 = 1e-9;

/// Asserts `actual` is within `tolerance` of `expected`.
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} (+/- {}), got {}",
        expected,
        tolerance,
        actual
    );
}

pub fn engine() -> MathEngine {
    MathEngine::new()
}

pub fn radian_engine() -> MathEngine {
    let config = EngineConfig::default().with_angle_mode(AngleMode::Radians);
    match MathEngine::with_config(config) {
        Ok(engine) => engine,
        Err(e) => panic!("radian config rejected: {}", e),
    }
}

/// Evaluates under default settings through the native API.
pub fn eval(expression: &str, x: f64) -> EvalResult<f64> {
    let config = EngineConfig::default();
    scicalc_engine::evaluate(expression, &EvalContext::new(&config, x))
}
