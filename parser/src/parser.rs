//! FILENAME: parser/src/parser.rs
//! PURPOSE: Token cursor that drives recursive-descent evaluation.
//! CONTEXT: This is the second stage of the pipeline. The engine walks the
//! grammar below over a token slice, computing values as it goes; this
//! module owns the cursor bookkeeping so the grammar code only deals with
//! productions.
//!
//! GRAMMAR (precedence low --> high, all binary levels left-associative):
//!   expression --> term ( ("+" | "-") term )*
//!   term       --> factor ( ("*" | "/" | "%" | "^") factor )*
//!   factor     --> number | "(" expression ")" | IDENTIFIER [ "(" arguments ")" ]
//!   number     --> [ "+" | "-" ] NUMBER
//!   arguments  --> argument ( "," argument )*
//!
//! Calculus calls need their arguments as raw token ranges rather than values,
//! which is what `call_arguments` provides.

use crate::token::Token;
use std::ops::Range;

/// Parser errors with descriptive messages.
#[derive(Debug, PartialEq, Clone)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
        }
    }

    /// Error for a token the grammar cannot accept at this point.
    pub fn unexpected(token: &Token) -> Self {
        match token {
            Token::EOF => ParseError::new("Unexpected end of expression"),
            Token::Illegal(ch) => ParseError::new(format!("Illegal character: {}", ch)),
            other => ParseError::new(format!("Unexpected token: {}", other)),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

/// Returned by `current` once the cursor runs past the slice.
static END: Token = Token::EOF;

/// Cursor over a token slice.
/// The end of the slice reads as `Token::EOF`, so a sub-slice holding a
/// calculus argument parses exactly like a complete expression.
#[derive(Debug, Clone)]
pub struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// The token under the cursor.
    pub fn current(&self) -> &'t Token {
        self.tokens.get(self.pos).unwrap_or(&END)
    }

    /// Advances to the next token. Never moves past the end.
    pub fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Checks if the current token matches the expected token.
    /// If it matches, advances and returns Ok. Otherwise returns an error.
    pub fn expect(&mut self, expected: Token) -> ParseResult<()> {
        if *self.current() == expected {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::new(format!(
                "Expected '{}', found '{}'",
                expected,
                self.current()
            )))
        }
    }

    pub fn is_at_end(&self) -> bool {
        *self.current() == Token::EOF
    }

    /// Returns the tokens of an argument range produced by `call_arguments`.
    pub fn slice(&self, range: Range<usize>) -> &'t [Token] {
        &self.tokens[range]
    }

    /// Splits a call's argument list into token ranges without evaluating it.
    ///
    /// The cursor must sit on the opening '('. Only commas at depth 0 relative
    /// to the call separate arguments. On success the cursor is left just past
    /// the matching ')'. An empty argument list yields one empty range.
    pub fn call_arguments(&mut self) -> ParseResult<Vec<Range<usize>>> {
        self.expect(Token::LParen)?;

        let mut args = Vec::new();
        let mut start = self.pos;
        let mut depth = 0usize;

        loop {
            match self.current() {
                Token::LParen => depth += 1,
                Token::RParen if depth == 0 => {
                    args.push(start..self.pos);
                    self.advance();
                    return Ok(args);
                }
                Token::RParen => depth -= 1,
                Token::Comma if depth == 0 => {
                    args.push(start..self.pos);
                    start = self.pos + 1;
                }
                Token::EOF => {
                    return Err(ParseError::new("Expected ')' to close function call"));
                }
                _ => {}
            }
            self.advance();
        }
    }
}
