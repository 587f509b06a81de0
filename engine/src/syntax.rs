//! FILENAME: engine/src/syntax.rs
//! PURPOSE: Structural check of an expression's tokens, without evaluating them.
//! CONTEXT: Calculus bodies are only evaluated at sample points, and a form may
//! take no samples at all (`sum` over an empty range). Walking the body once up
//! front makes malformed input fail the same way whatever the bounds are.
//! Only the grammar, function names and argument counts are checked; domain
//! and arithmetic errors still surface when the body is sampled.

use scicalc_parser::{ParseError, Parser, Token};

use crate::error::{EvalError, EvalResult};
use crate::functions::{self, BuiltinFunction, Callable, CalculusForm};

/// Checks that `tokens` form exactly one well-formed expression.
pub fn check(tokens: &[Token]) -> EvalResult<()> {
    SyntaxChecker {
        parser: Parser::new(tokens),
    }
    .check()
}

struct SyntaxChecker<'t> {
    parser: Parser<'t>,
}

impl<'t> SyntaxChecker<'t> {
    fn check(mut self) -> EvalResult<()> {
        if self.parser.is_at_end() {
            return Err(EvalError::malformed("Empty expression"));
        }

        self.expression()?;

        if !self.parser.is_at_end() {
            return Err(EvalError::malformed(format!(
                "Unexpected token after expression: '{}'",
                self.parser.current()
            )));
        }
        Ok(())
    }

    fn expression(&mut self) -> EvalResult<()> {
        self.term()?;
        while self.parser.current().is_additive_operator() {
            self.parser.advance();
            self.term()?;
        }
        Ok(())
    }

    fn term(&mut self) -> EvalResult<()> {
        self.factor()?;
        while self.parser.current().is_term_operator() {
            self.parser.advance();
            self.factor()?;
        }
        Ok(())
    }

    fn factor(&mut self) -> EvalResult<()> {
        match self.parser.current() {
            Token::Number(_) => {
                self.parser.advance();
                Ok(())
            }

            Token::Plus | Token::Minus => {
                self.parser.advance();
                match self.parser.current() {
                    Token::Number(_) => {
                        self.parser.advance();
                        Ok(())
                    }
                    _ => Err(EvalError::malformed("Invalid number format")),
                }
            }

            Token::LParen => {
                self.parser.advance();
                self.expression()?;
                self.parser.expect(Token::RParen)?;
                Ok(())
            }

            Token::Identifier(name) => {
                self.parser.advance();
                self.identifier(name)
            }

            token => Err(ParseError::unexpected(token).into()),
        }
    }

    fn identifier(&mut self, name: &str) -> EvalResult<()> {
        if name == "x" {
            return Ok(());
        }

        if *self.parser.current() == Token::LParen {
            return match functions::lookup(name) {
                Some(Callable::Function(function)) => self.function(function),
                Some(Callable::Calculus(form)) => self.calculus(form),
                None => Err(EvalError::malformed(format!("Unknown function: {}", name))),
            };
        }

        match name {
            "pi" | "e" => Ok(()),
            _ => Err(EvalError::malformed(format!(
                "Expected '(' after function name '{}'",
                name
            ))),
        }
    }

    fn function(&mut self, function: BuiltinFunction) -> EvalResult<()> {
        self.parser.expect(Token::LParen)?;

        let mut count = 1;
        self.expression()?;
        while *self.parser.current() == Token::Comma {
            self.parser.advance();
            self.expression()?;
            count += 1;
        }

        self.parser.expect(Token::RParen)?;
        function.check_arity(count)
    }

    fn calculus(&mut self, form: CalculusForm) -> EvalResult<()> {
        let ranges = self.parser.call_arguments()?;
        form.check_arity(ranges.len())?;

        for range in ranges {
            check(self.parser.slice(range))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use scicalc_parser::tokenize;

    fn check_str(expression: &str) -> EvalResult<()> {
        check(&tokenize(expression))
    }

    #[test]
    fn accepts_well_formed_expressions() {
        for expression in [
            "x",
            "-2.5*x^2 + 3",
            "sqrt(x) / (1 + e)",
            "ncr(5, 2) % 3",
            "ln(-1)",
            "1/0",
            "sum(diff(x^2, x), 1, 3)",
            "lim(sin(x)/x, 0, 0)",
        ] {
            assert!(check_str(expression).is_ok(), "{}", expression);
        }
    }

    #[test]
    fn rejects_malformed_expressions() {
        for expression in [
            "",
            "1+",
            "(1",
            "2 3",
            "-x",
            "foo(1)",
            "sin",
            "root(8)",
            "sqrt(1, 2)",
            "int(x, 0)",
            "sum(x, 1, )",
            "diff(1+, 2)",
        ] {
            let err = check_str(expression).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedInput, "{}", expression);
        }
    }

    #[test]
    fn checks_sub_slices_without_eof() {
        let tokens = tokenize("(x + 1) * 2");
        // Tokens 1..4 are "x + 1"
        assert!(check(&tokens[1..4]).is_ok());
        // Tokens 1..3 are "x +"
        assert!(check(&tokens[1..3]).is_err());
    }
}
