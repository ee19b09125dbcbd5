//! FILENAME: core/parser/src/error.rs
//! PURPOSE: Error taxonomy for tokenizing and evaluating an expression.
//! CONTEXT: Every failure aborts the current line and surfaces one of these
//! variants from `parse`. Callers branch on the variant, never on the message.

use crate::token::TokenKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unexpected character '{ch}' at position {offset}")]
    Lexical { ch: char, offset: usize },

    #[error("Invalid number literal: {literal}")]
    NumberFormat { literal: String },

    #[error("Expected {}, found {found} at position {offset}", describe_expected(.expected))]
    UnexpectedToken {
        expected: &'static [TokenKind],
        found: String,
        offset: usize,
    },

    #[error("Expected ')' to close '(' at position {open_offset}, found {found}")]
    UnmatchedParen { open_offset: usize, found: String },

    #[error("Unexpected {found} after expression at position {offset}")]
    TrailingInput { found: String, offset: usize },

    #[error("Division by zero")]
    DivisionByZero,
}

impl ParseError {
    /// Stable short name of the variant, used as a log category.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParseError::Lexical { .. } => "lexical",
            ParseError::NumberFormat { .. } => "number-format",
            ParseError::UnexpectedToken { .. } => "unexpected-token",
            ParseError::UnmatchedParen { .. } => "unmatched-paren",
            ParseError::TrailingInput { .. } => "trailing-input",
            ParseError::DivisionByZero => "division-by-zero",
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Joins the expected alternatives as "a, b or c".
fn describe_expected(expected: &[TokenKind]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let head: Vec<String> = init.iter().map(|k| k.to_string()).collect();
            format!("{} or {}", head.join(", "), last)
        }
    }
}
