//! FILENAME: engine/src/error.rs
//! PURPOSE: Error taxonomy shared by the scalar library, evaluator and calculus.

use scicalc_parser::ParseError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Broad classification of an evaluation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Bad numeric token, unbalanced parenthesis, missing separator,
    /// unknown function, premature end of input.
    MalformedInput,
    /// Argument outside the function's real-valued domain.
    DomainError,
    /// Division or modulo by zero, zeroth root, overflow.
    ArithmeticError,
}

#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EvalError {
    #[error("{0}")]
    MalformedInput(String),

    #[error("{0}")]
    Domain(String),

    #[error("{0}")]
    Arithmetic(String),
}

impl EvalError {
    pub fn malformed(message: impl Into<String>) -> Self {
        EvalError::MalformedInput(message.into())
    }

    pub fn domain(message: impl Into<String>) -> Self {
        EvalError::Domain(message.into())
    }

    pub fn arithmetic(message: impl Into<String>) -> Self {
        EvalError::Arithmetic(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::MalformedInput(_) => ErrorKind::MalformedInput,
            EvalError::Domain(_) => ErrorKind::DomainError,
            EvalError::Arithmetic(_) => ErrorKind::ArithmeticError,
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(err: ParseError) -> Self {
        EvalError::MalformedInput(err.message)
    }
}

pub type EvalResult<T> = Result<T, EvalError>;

/// Rejected engine settings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid setting {field}: {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    #[error("Malformed configuration: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_variants() {
        assert_eq!(EvalError::malformed("x").kind(), ErrorKind::MalformedInput);
        assert_eq!(EvalError::domain("x").kind(), ErrorKind::DomainError);
        assert_eq!(EvalError::arithmetic("x").kind(), ErrorKind::ArithmeticError);
    }

    #[test]
    fn display_is_the_bare_message() {
        assert_eq!(EvalError::arithmetic("Division by zero").to_string(), "Division by zero");
    }

    #[test]
    fn parse_errors_become_malformed_input() {
        let err: EvalError = ParseError::new("Expected ')'").into();
        assert_eq!(err, EvalError::MalformedInput("Expected ')'".to_string()));
    }
}
