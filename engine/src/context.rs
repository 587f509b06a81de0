//! FILENAME: engine/src/context.rs
//! PURPOSE: Per-call evaluation state threaded through the evaluator.
//! CONTEXT: A context is a small `Copy` value passed down by value. Calculus
//! forms derive a child context for each sample point, so a nested evaluation
//! can never change the binding its caller sees after it returns.

use crate::config::EngineConfig;
use crate::math::AngleMode;

#[derive(Debug, Clone, Copy)]
pub struct EvalContext<'a> {
    /// Current value of the free variable `x`.
    pub variable: f64,
    /// Unit for trig arguments at this level.
    pub angle_mode: AngleMode,
    pub config: &'a EngineConfig,
}

impl<'a> EvalContext<'a> {
    /// Top-level context: binds `x` and takes the angle mode from the settings.
    pub fn new(config: &'a EngineConfig, variable: f64) -> Self {
        EvalContext {
            variable,
            angle_mode: config.angle_mode,
            config,
        }
    }

    /// Context for sampling a calculus sub-expression at `x`.
    /// Calculus always works in radians.
    pub fn for_calculus(self, variable: f64) -> Self {
        EvalContext {
            variable,
            angle_mode: AngleMode::Radians,
            ..self
        }
    }
}
