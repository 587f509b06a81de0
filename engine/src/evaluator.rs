//! FILENAME: engine/src/evaluator.rs
//! PURPOSE: Grammar-driven evaluation of expression tokens.
//! CONTEXT: Each grammar production is one method that consumes tokens and
//! returns the value it denotes, so parsing and evaluation happen in one pass
//! with no tree in between. The expression is tokenized once; parenthesized
//! groups and calculus arguments are walked in place (groups) or through a
//! fresh cursor over their token range (calculus arguments).
//!
//! NOTES:
//! - `*`, `/`, `%` and `^` share one level and associate left to right, so
//!   `2^3^2` is `(2^3)^2 = 64`.
//! - A sign is only part of a numeric literal: `2*-3` is valid, `-x` is not.
//! - Function arguments are full expressions, wider than a single factor:
//!   `sqrt(2+2)` is accepted.
//! - The first argument of a calculus form is syntax-checked once, then
//!   re-evaluated at each sample point in radians; the remaining arguments
//!   are evaluated once under the caller's context.

use scicalc_parser::{tokenize, ParseError, Parser, Token};

use crate::calculus;
use crate::context::EvalContext;
use crate::error::{EvalError, EvalResult};
use crate::functions::{self, BuiltinFunction, Callable, CalculusForm};
use crate::math;
use crate::syntax;
use crate::{log_enter, log_exit, log_warn};

/// Tokenizes and evaluates an expression under `ctx`.
pub fn evaluate(expression: &str, ctx: &EvalContext) -> EvalResult<f64> {
    log_enter!("EVAL", "evaluate", "expr={:?} x={}", expression, ctx.variable);

    let tokens = tokenize(expression);
    let result = evaluate_tokens(&tokens, *ctx);

    match &result {
        Ok(value) => log_exit!("EVAL", "evaluate", "result={}", value),
        Err(e) => log_warn!("EVAL", "evaluate failed expr={:?} error={}", expression, e),
    }
    result
}

/// Evaluates a complete token slice. Every token must be consumed.
pub fn evaluate_tokens(tokens: &[Token], ctx: EvalContext) -> EvalResult<f64> {
    Evaluator::new(tokens, ctx).evaluate()
}

/// The recursive-descent evaluator.
/// Holds the token cursor and the context the slice is evaluated under.
pub struct Evaluator<'t, 'c> {
    parser: Parser<'t>,
    ctx: EvalContext<'c>,
}

impl<'t, 'c> Evaluator<'t, 'c> {
    pub fn new(tokens: &'t [Token], ctx: EvalContext<'c>) -> Self {
        Evaluator {
            parser: Parser::new(tokens),
            ctx,
        }
    }

    /// Evaluates the whole slice and returns its value.
    pub fn evaluate(mut self) -> EvalResult<f64> {
        if self.parser.is_at_end() {
            return Err(EvalError::malformed("Empty expression"));
        }

        let value = self.parse_expression()?;

        if !self.parser.is_at_end() {
            return Err(EvalError::malformed(format!(
                "Unexpected token after expression: '{}'",
                self.parser.current()
            )));
        }

        // The bound variable itself may be non-finite
        math::finite(value, "result")
    }

    /// expression --> term ( ("+" | "-") term )*
    fn parse_expression(&mut self) -> EvalResult<f64> {
        let mut left = self.parse_term()?;

        loop {
            let op = self.parser.current();
            if !op.is_additive_operator() {
                break;
            }

            self.parser.advance();
            let right = self.parse_term()?;

            left = match op {
                Token::Plus => math::add(left, right)?,
                _ => math::subtract(left, right)?,
            };
        }

        Ok(left)
    }

    /// term --> factor ( ("*" | "/" | "%" | "^") factor )*
    fn parse_term(&mut self) -> EvalResult<f64> {
        let mut left = self.parse_factor()?;

        loop {
            let op = self.parser.current();
            if !op.is_term_operator() {
                break;
            }

            self.parser.advance();
            let right = self.parse_factor()?;

            left = match op {
                Token::Asterisk => math::multiply(left, right)?,
                Token::Slash => math::divide(left, right)?,
                Token::Percent => math::modulo(left, right)?,
                _ => math::power(left, right)?,
            };
        }

        Ok(left)
    }

    /// factor --> number | "(" expression ")" | IDENTIFIER [ "(" arguments ")" ]
    fn parse_factor(&mut self) -> EvalResult<f64> {
        match self.parser.current() {
            Token::Number(n) => {
                self.parser.advance();
                math::finite(*n, "number")
            }

            Token::Plus | Token::Minus => self.parse_signed_number(),

            Token::LParen => {
                self.parser.advance();
                let value = self.parse_expression()?;
                self.parser.expect(Token::RParen)?;
                Ok(value)
            }

            Token::Identifier(name) => {
                self.parser.advance();
                self.parse_identifier(name)
            }

            token => Err(ParseError::unexpected(token).into()),
        }
    }

    /// number --> ("+" | "-") NUMBER
    fn parse_signed_number(&mut self) -> EvalResult<f64> {
        let negative = *self.parser.current() == Token::Minus;
        self.parser.advance();

        match self.parser.current() {
            Token::Number(n) => {
                self.parser.advance();
                math::finite(if negative { -*n } else { *n }, "number")
            }
            _ => Err(EvalError::malformed("Invalid number format")),
        }
    }

    /// Resolves a name: the variable, a call, or a constant.
    fn parse_identifier(&mut self, name: &str) -> EvalResult<f64> {
        if name == "x" {
            return Ok(self.ctx.variable);
        }

        if *self.parser.current() == Token::LParen {
            return match functions::lookup(name) {
                Some(Callable::Function(function)) => self.eval_function(function),
                Some(Callable::Calculus(form)) => self.eval_calculus(form),
                None => Err(EvalError::malformed(format!("Unknown function: {}", name))),
            };
        }

        match name {
            "pi" => Ok(math::PI),
            "e" => Ok(math::E),
            _ => Err(EvalError::malformed(format!(
                "Expected '(' after function name '{}'",
                name
            ))),
        }
    }

    /// Evaluates each argument in place, then dispatches.
    fn eval_function(&mut self, function: BuiltinFunction) -> EvalResult<f64> {
        self.parser.expect(Token::LParen)?;

        let mut args = Vec::with_capacity(function.arity());
        args.push(self.parse_expression()?);
        while *self.parser.current() == Token::Comma {
            self.parser.advance();
            args.push(self.parse_expression()?);
        }

        self.parser.expect(Token::RParen)?;
        function.apply(&args, self.ctx.angle_mode)
    }

    /// Splits the argument list into token ranges, evaluates the bounds once,
    /// then samples the body through a fresh evaluator per point.
    fn eval_calculus(&mut self, form: CalculusForm) -> EvalResult<f64> {
        let ranges = self.parser.call_arguments()?;
        form.check_arity(ranges.len())?;

        let body = self.parser.slice(ranges[0].clone());
        if body.is_empty() {
            return Err(EvalError::malformed(format!(
                "{}() is missing its expression argument",
                form.name()
            )));
        }
        // The body may never be sampled (an empty sum range)
        syntax::check(body)?;

        let ctx = self.ctx;
        let args = ranges[1..]
            .iter()
            .map(|range| evaluate_tokens(self.parser.slice(range.clone()), ctx))
            .collect::<EvalResult<Vec<f64>>>()?;

        let sample = |x: f64| evaluate_tokens(body, ctx.for_calculus(x));
        let config = ctx.config;

        match form {
            CalculusForm::Derivative => {
                calculus::derivative(sample, args[0], config.derivative_step)
            }
            CalculusForm::Integral => {
                calculus::integral(sample, args[0], args[1], config.integral_subintervals)
            }
            CalculusForm::Summation => {
                calculus::summation(sample, args[0], args[1], config.max_summation_terms)
            }
            CalculusForm::Limit => {
                let from_right = args.get(1).map_or(true, |side| *side != 0.0);
                calculus::limit(sample, args[0], from_right, config.limit_offset)
            }
        }
    }
}
