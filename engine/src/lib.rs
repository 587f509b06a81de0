//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the calculator math engine.
//! CONTEXT: Re-exports the evaluation API and hosts `MathEngine`, the stateful
//! facade that owns the settings, the memory register and the last-error slot.
//!
//! Two surfaces are offered over the same evaluator:
//! - `evaluate` / `MathEngine::try_evaluate` return `EvalResult<f64>`.
//! - The legacy calls (`MathEngine::evaluate`, `factorial`, `integral`, ...)
//!   return a plain `f64`, with `0.0` and a recorded error on failure. Each
//!   legacy call clears the slot first, so a success always leaves it empty.

pub mod calculus;
pub mod config;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod logging;
pub mod math;
pub mod memory;
pub mod syntax;

// Re-export commonly used types at the crate root
pub use config::EngineConfig;
pub use context::EvalContext;
pub use error::{ConfigError, ErrorKind, EvalError, EvalResult};
pub use evaluator::{evaluate, evaluate_tokens, Evaluator};
pub use functions::{lookup, BuiltinFunction, Callable, CalculusForm};
pub use math::AngleMode;
pub use memory::Memory;

use scicalc_parser::tokenize;

/// Calculator engine with the legacy value-plus-error-slot interface.
///
/// Every legacy call takes `&mut self`; share an instance across threads
/// behind a lock.
#[derive(Debug, Clone, Default)]
pub struct MathEngine {
    config: EngineConfig,
    memory: Memory,
    last_error: Option<EvalError>,
}

impl MathEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an engine with custom settings, rejecting invalid ones.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log_info!(
            "ENGINE",
            "configured angle_mode={:?} subintervals={} max_terms={}",
            config.angle_mode,
            config.integral_subintervals,
            config.max_summation_terms
        );
        Ok(MathEngine {
            config,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ========================================================================
    // Native API
    // ========================================================================

    /// Evaluates `expression` with `x` bound to `variable` (or 0).
    /// Does not touch the error slot.
    pub fn try_evaluate(&self, expression: &str, variable: Option<f64>) -> EvalResult<f64> {
        let ctx = EvalContext::new(&self.config, variable.unwrap_or(0.0));
        evaluator::evaluate(expression, &ctx)
    }

    // ========================================================================
    // Legacy API: value or 0.0, with the failure kept in the error slot
    // ========================================================================

    /// Evaluates `expression` with `x` bound to 0.
    pub fn evaluate(&mut self, expression: &str) -> f64 {
        self.evaluate_with(expression, 0.0)
    }

    pub fn evaluate_with(&mut self, expression: &str, variable: f64) -> f64 {
        self.last_error = None;
        let result = self.try_evaluate(expression, Some(variable));
        self.record(result)
    }

    pub fn has_error(&self) -> bool {
        self.last_error.is_some()
    }

    /// Message of the most recent failure, or an empty string.
    pub fn last_error(&self) -> String {
        self.last_error
            .as_ref()
            .map(|e| e.to_string())
            .unwrap_or_default()
    }

    pub fn last_error_kind(&self) -> Option<ErrorKind> {
        self.last_error.as_ref().map(EvalError::kind)
    }

    fn record(&mut self, result: EvalResult<f64>) -> f64 {
        match result {
            Ok(value) => {
                self.last_error = None;
                value
            }
            Err(e) => {
                self.last_error = Some(e);
                0.0
            }
        }
    }

    // ------------------------------------------------------------------------
    // Scalar wrappers
    // ------------------------------------------------------------------------

    pub fn divide(&mut self, a: f64, b: f64) -> f64 {
        self.record(math::divide(a, b))
    }

    pub fn modulo(&mut self, a: f64, b: f64) -> f64 {
        self.record(math::modulo(a, b))
    }

    pub fn power(&mut self, base: f64, exponent: f64) -> f64 {
        self.record(math::power(base, exponent))
    }

    pub fn square_root(&mut self, x: f64) -> f64 {
        self.record(math::square_root(x))
    }

    pub fn nth_root(&mut self, x: f64, n: f64) -> f64 {
        self.record(math::nth_root(x, n))
    }

    pub fn logarithm(&mut self, x: f64) -> f64 {
        self.record(math::logarithm(x))
    }

    pub fn natural_log(&mut self, x: f64) -> f64 {
        self.record(math::natural_log(x))
    }

    pub fn log_base(&mut self, x: f64, base: f64) -> f64 {
        self.record(math::log_base(x, base))
    }

    pub fn arcsine(&mut self, x: f64) -> f64 {
        let mode = self.config.angle_mode;
        self.record(math::arcsine(x, mode))
    }

    pub fn arccosine(&mut self, x: f64) -> f64 {
        let mode = self.config.angle_mode;
        self.record(math::arccosine(x, mode))
    }

    pub fn factorial(&mut self, n: f64) -> f64 {
        self.record(math::factorial(n))
    }

    pub fn permutation(&mut self, n: f64, r: f64) -> f64 {
        self.record(math::permutation(n, r))
    }

    pub fn combination(&mut self, n: f64, r: f64) -> f64 {
        self.record(math::combination(n, r))
    }

    // ------------------------------------------------------------------------
    // Calculus wrappers: `expression` is a function of x
    // ------------------------------------------------------------------------

    pub fn derivative(&mut self, expression: &str, point: f64) -> f64 {
        let step = self.config.derivative_step;
        let result = self.sample_with(expression, |f| calculus::derivative(f, point, step));
        self.record(result)
    }

    pub fn integral(&mut self, expression: &str, lower: f64, upper: f64) -> f64 {
        let n = self.config.integral_subintervals;
        let result = self.sample_with(expression, |f| calculus::integral(f, lower, upper, n));
        self.record(result)
    }

    pub fn limit(&mut self, expression: &str, point: f64, from_right: bool) -> f64 {
        let offset = self.config.limit_offset;
        let result =
            self.sample_with(expression, |f| calculus::limit(f, point, from_right, offset));
        self.record(result)
    }

    pub fn summation(&mut self, expression: &str, start: f64, end: f64) -> f64 {
        let max_terms = self.config.max_summation_terms;
        let result =
            self.sample_with(expression, |f| calculus::summation(f, start, end, max_terms));
        self.record(result)
    }

    /// Tokenizes and syntax-checks `expression` once, then hands `run` a
    /// sampler over it.
    fn sample_with<R>(&mut self, expression: &str, run: R) -> EvalResult<f64>
    where
        R: FnOnce(&mut dyn FnMut(f64) -> EvalResult<f64>) -> EvalResult<f64>,
    {
        self.last_error = None;

        let tokens = tokenize(expression);
        syntax::check(&tokens)?;

        let ctx = EvalContext::new(&self.config, 0.0);
        let mut sample = |x: f64| evaluate_tokens(&tokens, ctx.for_calculus(x));
        run(&mut sample)
    }

    // ------------------------------------------------------------------------
    // Memory register
    // ------------------------------------------------------------------------

    pub fn memory_store(&mut self, value: f64) {
        self.memory.store(value);
    }

    pub fn memory_recall(&self) -> f64 {
        self.memory.recall()
    }

    pub fn memory_add(&mut self, value: f64) {
        self.memory.add(value);
    }

    pub fn memory_subtract(&mut self, value: f64) {
        self.memory.subtract(value);
    }

    pub fn memory_clear(&mut self) {
        self.memory.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_evaluates_and_clears_errors() {
        let mut engine = MathEngine::new();

        assert_eq!(engine.evaluate("5/0"), 0.0);
        assert!(engine.has_error());
        assert_eq!(engine.last_error(), "Division by zero");
        assert_eq!(engine.last_error_kind(), Some(ErrorKind::ArithmeticError));

        assert_eq!(engine.evaluate("1+1"), 2.0);
        assert!(!engine.has_error());
        assert_eq!(engine.last_error(), "");
        assert_eq!(engine.last_error_kind(), None);
    }

    #[test]
    fn try_evaluate_leaves_slot_alone() {
        let mut engine = MathEngine::new();
        engine.evaluate("sqrt(-1)");

        assert!(engine.try_evaluate("2*x", Some(3.0)) == Ok(6.0));
        assert!(engine.has_error());
    }

    #[test]
    fn scalar_wrappers_record_errors() {
        let mut engine = MathEngine::new();

        assert_eq!(engine.factorial(5.0), 120.0);
        assert!(!engine.has_error());

        assert_eq!(engine.factorial(-1.0), 0.0);
        assert_eq!(engine.last_error_kind(), Some(ErrorKind::ArithmeticError));

        assert_eq!(engine.combination(5.0, 2.0), 10.0);
        assert!(!engine.has_error());

        assert_eq!(engine.nth_root(8.0, 0.0), 0.0);
        assert!(engine.has_error());
    }

    #[test]
    fn calculus_wrappers() {
        let mut engine = MathEngine::new();

        assert!((engine.derivative("x^2", 3.0) - 6.0).abs() < 1e-4);
        assert!((engine.integral("x", 0.0, 1.0) - 0.5).abs() < 1e-9);
        assert_eq!(engine.summation("x", 1.0, 5.0), 15.0);
        assert!((engine.limit("sin(x)/x", 0.0, true) - 1.0).abs() < 1e-9);
        assert!(!engine.has_error());

        assert_eq!(engine.integral("", 0.0, 1.0), 0.0);
        assert_eq!(engine.last_error_kind(), Some(ErrorKind::MalformedInput));

        assert_eq!(engine.summation("1/x", -2.0, 2.0), 0.0);
        assert_eq!(engine.last_error_kind(), Some(ErrorKind::ArithmeticError));

        // Malformed bodies fail even when the range takes no samples
        assert_eq!(engine.summation("1+", 5.0, 1.0), 0.0);
        assert_eq!(engine.last_error_kind(), Some(ErrorKind::MalformedInput));
    }

    #[test]
    fn memory_is_independent_of_evaluation() {
        let mut engine = MathEngine::new();
        engine.memory_store(7.0);

        engine.evaluate("5/0");
        engine.evaluate("1+2");
        assert_eq!(engine.memory_recall(), 7.0);

        engine.memory_add(3.0);
        engine.memory_subtract(1.0);
        assert_eq!(engine.memory_recall(), 9.0);

        engine.memory_clear();
        assert_eq!(engine.memory_recall(), 0.0);
    }

    #[test]
    fn with_config_rejects_invalid_settings() {
        let config = EngineConfig::default().with_integral_subintervals(3);
        assert!(MathEngine::with_config(config).is_err());

        let config = EngineConfig::default().with_angle_mode(AngleMode::Radians);
        let mut engine = MathEngine::with_config(config).unwrap();
        assert!((engine.evaluate("sin(pi/2)") - 1.0).abs() < 1e-12);
    }
}
