//! FILENAME: engine/src/math.rs
//! PURPOSE: Stateless scalar math library.
//! CONTEXT: Every function the expression grammar can reach lives here, with
//! its real-domain checks. A violated domain is reported as an `EvalError`
//! instead of a NaN or infinite value; infallible functions return plain f64.
//!
//! SUPPORTED FUNCTIONS:
//! - Arithmetic: add, subtract, multiply, divide, modulo, absolute
//! - Power/roots: power, square_root, cube_root, nth_root, exponential
//! - Trig (angle-mode aware): sine, cosine, tangent, arcsine, arccosine, arctangent
//! - Hyperbolic: sinh, cosh, tanh, asinh, acosh, atanh
//! - Logarithms: logarithm (base 10), natural_log, log_base
//! - Counting: factorial, permutation, combination

use serde::{Deserialize, Serialize};

use crate::error::{EvalError, EvalResult};

pub const PI: f64 = std::f64::consts::PI;
pub const E: f64 = std::f64::consts::E;

/// Largest n whose factorial is a finite f64 (170! ~ 7.257e306).
pub const MAX_FACTORIAL: i64 = 170;

/// Unit used for trig arguments and inverse-trig results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    /// Converts an angle in this unit to radians.
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleMode::Degrees => angle * PI / 180.0,
            AngleMode::Radians => angle,
        }
    }

    /// Converts an angle in radians to this unit.
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            AngleMode::Degrees => radians * 180.0 / PI,
            AngleMode::Radians => radians,
        }
    }
}

/// Rejects a non-finite result: infinity is an overflow, NaN has no real value.
pub(crate) fn finite(value: f64, what: &str) -> EvalResult<f64> {
    if value.is_infinite() {
        Err(EvalError::arithmetic(format!("{} overflow", what)))
    } else if value.is_nan() {
        Err(EvalError::domain(format!("{} is not a real number", what)))
    } else {
        Ok(value)
    }
}

/// Truncates a real argument to the integer the counting functions work on.
fn to_integer(value: f64, what: &str) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(EvalError::domain(format!("{} requires a finite argument", what)));
    }
    Ok(value.trunc() as i64)
}

// ============================================================================
// Arithmetic
// ============================================================================

pub fn add(a: f64, b: f64) -> EvalResult<f64> {
    finite(a + b, "addition")
}

pub fn subtract(a: f64, b: f64) -> EvalResult<f64> {
    finite(a - b, "subtraction")
}

pub fn multiply(a: f64, b: f64) -> EvalResult<f64> {
    finite(a * b, "multiplication")
}

pub fn divide(a: f64, b: f64) -> EvalResult<f64> {
    if b == 0.0 {
        return Err(EvalError::arithmetic("Division by zero"));
    }
    finite(a / b, "division")
}

/// Truncated remainder: the result takes the sign of the dividend.
pub fn modulo(a: f64, b: f64) -> EvalResult<f64> {
    if b == 0.0 {
        return Err(EvalError::arithmetic("Modulo by zero"));
    }
    finite(a % b, "modulo")
}

pub fn absolute(x: f64) -> f64 {
    x.abs()
}

// ============================================================================
// Powers and roots
// ============================================================================

pub fn power(base: f64, exponent: f64) -> EvalResult<f64> {
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::arithmetic("Division by zero in power"));
    }
    let result = base.powf(exponent);
    if result.is_nan() {
        return Err(EvalError::domain(format!(
            "{}^{} is not a real number",
            base, exponent
        )));
    }
    finite(result, "power")
}

pub fn square_root(x: f64) -> EvalResult<f64> {
    if x < 0.0 {
        return Err(EvalError::domain("sqrt of negative number"));
    }
    Ok(x.sqrt())
}

pub fn cube_root(x: f64) -> f64 {
    x.cbrt()
}

/// `x^(1/n)`; a negative radicand is outside the real domain for every `n`.
pub fn nth_root(x: f64, n: f64) -> EvalResult<f64> {
    if n == 0.0 {
        return Err(EvalError::arithmetic("0th root undefined"));
    }
    let result = x.powf(1.0 / n);
    if result.is_nan() {
        return Err(EvalError::domain(format!("root {} of {} is not real", n, x)));
    }
    finite(result, "root")
}

pub fn exponential(x: f64) -> EvalResult<f64> {
    finite(x.exp(), "exp")
}

// ============================================================================
// Trigonometry
// ============================================================================

pub fn sine(x: f64, mode: AngleMode) -> f64 {
    mode.to_radians(x).sin()
}

pub fn cosine(x: f64, mode: AngleMode) -> f64 {
    mode.to_radians(x).cos()
}

pub fn tangent(x: f64, mode: AngleMode) -> f64 {
    mode.to_radians(x).tan()
}

pub fn arcsine(x: f64, mode: AngleMode) -> EvalResult<f64> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(EvalError::domain("arcsin domain error"));
    }
    Ok(mode.from_radians(x.asin()))
}

pub fn arccosine(x: f64, mode: AngleMode) -> EvalResult<f64> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(EvalError::domain("arccos domain error"));
    }
    Ok(mode.from_radians(x.acos()))
}

pub fn arctangent(x: f64, mode: AngleMode) -> f64 {
    mode.from_radians(x.atan())
}

// ============================================================================
// Hyperbolic
// ============================================================================

pub fn sinh(x: f64) -> EvalResult<f64> {
    finite(x.sinh(), "sinh")
}

pub fn cosh(x: f64) -> EvalResult<f64> {
    finite(x.cosh(), "cosh")
}

pub fn tanh(x: f64) -> f64 {
    x.tanh()
}

pub fn asinh(x: f64) -> f64 {
    x.asinh()
}

pub fn acosh(x: f64) -> EvalResult<f64> {
    if x < 1.0 {
        return Err(EvalError::domain("acosh domain error"));
    }
    Ok(x.acosh())
}

pub fn atanh(x: f64) -> EvalResult<f64> {
    if x <= -1.0 || x >= 1.0 {
        return Err(EvalError::domain("atanh domain error"));
    }
    Ok(x.atanh())
}

// ============================================================================
// Logarithms
// ============================================================================

pub fn logarithm(x: f64) -> EvalResult<f64> {
    if x <= 0.0 {
        return Err(EvalError::domain("log domain error"));
    }
    Ok(x.log10())
}

pub fn natural_log(x: f64) -> EvalResult<f64> {
    if x <= 0.0 {
        return Err(EvalError::domain("ln domain error"));
    }
    Ok(x.ln())
}

pub fn log_base(x: f64, base: f64) -> EvalResult<f64> {
    if x <= 0.0 || base <= 0.0 || base == 1.0 {
        return Err(EvalError::domain("log base domain error"));
    }
    Ok(x.ln() / base.ln())
}

// ============================================================================
// Counting
// ============================================================================

/// Iterative factorial of the truncated argument.
pub fn factorial(n: f64) -> EvalResult<f64> {
    let n = to_integer(n, "factorial")?;
    if n < 0 {
        return Err(EvalError::arithmetic("factorial of negative number"));
    }
    if n > MAX_FACTORIAL {
        return Err(EvalError::arithmetic("factorial overflow"));
    }
    Ok((2..=n).fold(1.0, |acc, i| acc * i as f64))
}

/// nPr = n! / (n - r)!
pub fn permutation(n: f64, r: f64) -> EvalResult<f64> {
    let n = to_integer(n, "permutation")?;
    let r = to_integer(r, "permutation")?;
    if n < 0 || r < 0 || r > n {
        return Err(EvalError::domain("Invalid permutation parameters"));
    }
    Ok(factorial(n as f64)? / factorial((n - r) as f64)?)
}

/// nCr = n! / (r! (n - r)!)
pub fn combination(n: f64, r: f64) -> EvalResult<f64> {
    let n = to_integer(n, "combination")?;
    let r = to_integer(r, "combination")?;
    if n < 0 || r < 0 || r > n {
        return Err(EvalError::domain("Invalid combination parameters"));
    }
    Ok(factorial(n as f64)? / (factorial(r as f64)? * factorial((n - r) as f64)?))
}
