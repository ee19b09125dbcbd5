//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the arithmetic expression evaluator.
//! CONTEXT: This module exposes the lexer, parser, and error types needed to
//! turn one line of text into a number.
//!
//! PIPELINE: Expression String --> Lexer --> Tokens --> Parser --> f64
//!
//! SUPPORTED FEATURES:
//! - Arithmetic: +, -, *, / with the usual precedence, left-associative
//! - Non-negative integer literals (evaluated as f64)
//! - Parentheses for grouping
//!
//! Each call builds its own lexer and parser; nothing is shared between calls.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;


// Re-export commonly used types for convenience
pub use error::{ParseError, ParseResult};
pub use lexer::{Lexer, tokenize};
pub use parser::{Parser, parse};
pub use token::{Token, TokenKind};
