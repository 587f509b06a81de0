//! FILENAME: engine/src/functions.rs
//! PURPOSE: Function dispatcher: maps an identifier to one scalar-library call.
//! CONTEXT: Names arrive lowercased from the lexer. Calculus forms are looked
//! up here too but are evaluated by the evaluator, since their first argument
//! is an unevaluated sub-expression.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{EvalError, EvalResult};
use crate::math::{self, AngleMode};

/// Functions whose arguments are evaluated before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinFunction {
    // Trigonometric (angle-mode aware)
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,

    // Hyperbolic
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,

    // Logarithmic, powers and roots
    Log,
    Ln,
    Sqrt,
    Cbrt,
    Exp,
    Abs,
    Factorial,

    // Two-argument forms
    Root,
    LogBase,
    Permutation,
    Combination,
    Pow,
    Mod,
}

/// Calculus forms: the first argument is re-evaluated at varying `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculusForm {
    /// diff(expr, point)
    Derivative,
    /// int(expr, lower, upper)
    Integral,
    /// sum(expr, start, end)
    Summation,
    /// lim(expr, point[, fromRight])
    Limit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Callable {
    Function(BuiltinFunction),
    Calculus(CalculusForm),
}

static CALLABLES: Lazy<HashMap<&'static str, Callable>> = Lazy::new(|| {
    use BuiltinFunction::*;
    use CalculusForm::*;

    let functions = [
        ("sin", Sin),
        ("cos", Cos),
        ("tan", Tan),
        ("asin", Asin),
        ("acos", Acos),
        ("atan", Atan),
        ("sinh", Sinh),
        ("cosh", Cosh),
        ("tanh", Tanh),
        ("asinh", Asinh),
        ("acosh", Acosh),
        ("atanh", Atanh),
        ("log", Log),
        ("ln", Ln),
        ("sqrt", Sqrt),
        ("cbrt", Cbrt),
        ("exp", Exp),
        ("abs", Abs),
        ("fact", Factorial),
        ("factorial", Factorial),
        ("root", Root),
        ("logb", LogBase),
        ("npr", Permutation),
        ("ncr", Combination),
        ("pow", Pow),
        ("mod", Mod),
    ];
    let calculus = [
        ("diff", Derivative),
        ("int", Integral),
        ("sum", Summation),
        ("lim", Limit),
    ];

    functions
        .into_iter()
        .map(|(name, f)| (name, Callable::Function(f)))
        .chain(calculus.into_iter().map(|(name, c)| (name, Callable::Calculus(c))))
        .collect()
});

/// Resolves a function name, case-insensitively.
pub fn lookup(name: &str) -> Option<Callable> {
    CALLABLES.get(name.to_ascii_lowercase().as_str()).copied()
}

impl BuiltinFunction {
    pub fn name(self) -> &'static str {
        use BuiltinFunction::*;
        match self {
            Sin => "sin",
            Cos => "cos",
            Tan => "tan",
            Asin => "asin",
            Acos => "acos",
            Atan => "atan",
            Sinh => "sinh",
            Cosh => "cosh",
            Tanh => "tanh",
            Asinh => "asinh",
            Acosh => "acosh",
            Atanh => "atanh",
            Log => "log",
            Ln => "ln",
            Sqrt => "sqrt",
            Cbrt => "cbrt",
            Exp => "exp",
            Abs => "abs",
            Factorial => "fact",
            Root => "root",
            LogBase => "logb",
            Permutation => "npr",
            Combination => "ncr",
            Pow => "pow",
            Mod => "mod",
        }
    }

    pub fn arity(self) -> usize {
        use BuiltinFunction::*;
        match self {
            Root | LogBase | Permutation | Combination | Pow | Mod => 2,
            _ => 1,
        }
    }

    /// Rejects a call with the wrong number of arguments.
    pub fn check_arity(self, count: usize) -> EvalResult<()> {
        if count != self.arity() {
            return Err(EvalError::malformed(format!(
                "{}() expects {} argument(s), got {}",
                self.name(),
                self.arity(),
                count
            )));
        }
        Ok(())
    }

    /// Applies the function to already-evaluated arguments.
    pub fn apply(self, args: &[f64], mode: AngleMode) -> EvalResult<f64> {
        use BuiltinFunction::*;

        self.check_arity(args.len())?;

        let x = args[0];
        match self {
            Sin => Ok(math::sine(x, mode)),
            Cos => Ok(math::cosine(x, mode)),
            Tan => Ok(math::tangent(x, mode)),
            Asin => math::arcsine(x, mode),
            Acos => math::arccosine(x, mode),
            Atan => Ok(math::arctangent(x, mode)),

            Sinh => math::sinh(x),
            Cosh => math::cosh(x),
            Tanh => Ok(math::tanh(x)),
            Asinh => Ok(math::asinh(x)),
            Acosh => math::acosh(x),
            Atanh => math::atanh(x),

            Log => math::logarithm(x),
            Ln => math::natural_log(x),
            Sqrt => math::square_root(x),
            Cbrt => Ok(math::cube_root(x)),
            Exp => math::exponential(x),
            Abs => Ok(math::absolute(x)),
            Factorial => math::factorial(x),

            Root => math::nth_root(x, args[1]),
            LogBase => math::log_base(x, args[1]),
            Permutation => math::permutation(x, args[1]),
            Combination => math::combination(x, args[1]),
            Pow => math::power(x, args[1]),
            Mod => math::modulo(x, args[1]),
        }
    }
}

impl CalculusForm {
    pub fn name(self) -> &'static str {
        match self {
            CalculusForm::Derivative => "diff",
            CalculusForm::Integral => "int",
            CalculusForm::Summation => "sum",
            CalculusForm::Limit => "lim",
        }
    }

    /// Accepted argument counts, expression argument included.
    pub fn arity(self) -> std::ops::RangeInclusive<usize> {
        match self {
            CalculusForm::Derivative => 2..=2,
            CalculusForm::Integral | CalculusForm::Summation => 3..=3,
            CalculusForm::Limit => 2..=3,
        }
    }

    /// Rejects an argument list whose length is outside `arity()`.
    pub fn check_arity(self, count: usize) -> EvalResult<()> {
        let arity = self.arity();
        if count < *arity.start() {
            return Err(EvalError::malformed(format!(
                "Expected ',' between {}() arguments: {} needed, found {}",
                self.name(),
                arity.start(),
                count
            )));
        }
        if count > *arity.end() {
            return Err(EvalError::malformed(format!(
                "Too many arguments to {}(): at most {}, found {}",
                self.name(),
                arity.end(),
                count
            )));
        }
        Ok(())
    }
}
