//! FILENAME: engine/src/calculus.rs
//! PURPOSE: Numeric derivative, definite integral, one-sided limit and summation.
//! CONTEXT: Each routine samples a function of one variable through a closure.
//! The evaluator supplies closures that re-run the grammar over the
//! sub-expression's tokens at a fresh binding. The first failed sample aborts
//! the whole computation; no partial result is ever returned.

use crate::error::{EvalError, EvalResult};
use crate::log_debug;
use crate::math::finite;

/// Central finite difference: `(f(p + h) - f(p - h)) / 2h`.
pub fn derivative<F>(mut f: F, point: f64, h: f64) -> EvalResult<f64>
where
    F: FnMut(f64) -> EvalResult<f64>,
{
    let forward = f(point + h)?;
    let backward = f(point - h)?;
    let result = (forward - backward) / (2.0 * h);
    log_debug!("CALCULUS", "diff point={} h={} result={}", point, h, result);
    finite(result, "derivative")
}

/// Composite Simpson's rule over `n` subintervals (`n` even).
pub fn integral<F>(mut f: F, lower: f64, upper: f64, n: u32) -> EvalResult<f64>
where
    F: FnMut(f64) -> EvalResult<f64>,
{
    if n == 0 || n % 2 != 0 {
        return Err(EvalError::domain(format!(
            "Simpson's rule needs an even, non-zero subinterval count, got {}",
            n
        )));
    }

    let h = (upper - lower) / n as f64;
    let mut sum = f(lower)? + f(upper)?;

    for i in 1..n {
        let value = f(lower + i as f64 * h)?;
        sum += if i % 2 == 0 { 2.0 * value } else { 4.0 * value };
    }

    let result = sum * h / 3.0;
    log_debug!(
        "CALCULUS",
        "int [{}, {}] n={} result={}",
        lower,
        upper,
        n,
        result
    );
    finite(result, "integral")
}

/// A single sample at `point ± offset`.
///
/// This approximates a one-sided limit; it does not check convergence or
/// agreement between the two sides.
pub fn limit<F>(mut f: F, point: f64, from_right: bool, offset: f64) -> EvalResult<f64>
where
    F: FnMut(f64) -> EvalResult<f64>,
{
    let at = if from_right { point + offset } else { point - offset };
    f(at)
}

/// `f(start) + f(start + 1) + ... + f(end)` with both bounds truncated to
/// integers. An empty range (`end < start`) sums to 0.
///
/// Ranges longer than `max_terms` are rejected before any sample is taken.
pub fn summation<F>(mut f: F, start: f64, end: f64, max_terms: u64) -> EvalResult<f64>
where
    F: FnMut(f64) -> EvalResult<f64>,
{
    if !start.is_finite() || !end.is_finite() {
        return Err(EvalError::domain("summation bounds must be finite"));
    }

    let start = start.trunc() as i64;
    let end = end.trunc() as i64;
    if end < start {
        return Ok(0.0);
    }

    let terms = (end as i128 - start as i128 + 1) as u128;
    if terms > max_terms as u128 {
        return Err(EvalError::domain(format!(
            "summation over {} terms exceeds the limit of {}",
            terms, max_terms
        )));
    }

    let mut total = 0.0;
    for i in start..=end {
        total += f(i as f64)?;
    }

    log_debug!("CALCULUS", "sum [{}, {}] terms={} result={}", start, end, terms, total);
    finite(total, "summation")
}
