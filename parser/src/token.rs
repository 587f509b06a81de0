//! FILENAME: parser/src/token.rs
//! PURPOSE: Token definitions for the expression lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by
//! the evaluator's token cursor.

/// Tokens recognized by the expression lexer.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    // Literals
    Number(f64),
    /// Function, constant or variable name, normalized to lowercase.
    Identifier(String),

    // Operators
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
    Caret,

    // Delimiters
    LParen,
    RParen,
    Comma,

    // Special
    EOF,
    Illegal(char),
}

impl Token {
    /// Returns true for the operators that share the multiplicative level:
    /// `*`, `/`, `%` and `^`.
    pub fn is_term_operator(&self) -> bool {
        matches!(
            self,
            Token::Asterisk | Token::Slash | Token::Percent | Token::Caret
        )
    }

    /// Returns true for `+` and `-`.
    pub fn is_additive_operator(&self) -> bool {
        matches!(self, Token::Plus | Token::Minus)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Identifier(s) => write!(f, "{}", s),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Percent => write!(f, "%"),
            Token::Caret => write!(f, "^"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::EOF => write!(f, "end of input"),
            Token::Illegal(c) => write!(f, "ILLEGAL({})", c),
        }
    }
}
