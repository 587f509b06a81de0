//! FILENAME: parser/src/lib.rs
//! PURPOSE: Library root for the scicalc expression parser.
//! CONTEXT: This module exposes the lexer, tokens and the token cursor the
//! engine uses to walk the expression grammar.
//!
//! PIPELINE: Expression String --> Lexer --> Tokens --> Parser cursor --> Evaluator
//!
//! SUPPORTED FEATURES:
//! - Arithmetic: +, -, *, /, % (modulo), ^ (power)
//! - Signed numeric literals: -2.5, +3
//! - Identifiers: the variable x, constants pi and e, function names
//! - Function calls: sqrt(2), diff(x^2, 3), int(x, 0, 1)
//! - Parentheses for grouping

pub mod lexer;
pub mod parser;
pub mod token;


// Re-export commonly used types for convenience
pub use lexer::{tokenize, Lexer};
pub use parser::{ParseError, ParseResult, Parser};
pub use token::Token;
