//! FILENAME: core/parser/src/parser.rs
//! PURPOSE: Recursive descent parser that evaluates a stream of Tokens.
//! CONTEXT: This is the second stage of the pipeline. Parsing and evaluation
//! are fused: every grammar rule returns the numeric value of the text it
//! consumed, so no syntax tree is built.
//!
//! GRAMMAR:
//!   expression --> term ( ("+" | "-") term )*
//!   term       --> factor ( ("*" | "/") factor )*
//!   factor     --> NUMBER | "(" expression ")"
//!
//! All binary operators are left-associative. All arithmetic is f64.

use crate::error::{ParseError, ParseResult};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Alternatives accepted at the start of a factor.
const FACTOR_START: &[TokenKind] = &[TokenKind::Number, TokenKind::LeftParen];

/// The Parser struct holds the lexer and the single lookahead token.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
}

impl<'a> Parser<'a> {
    /// Creates a new parser from an input string.
    /// Automatically advances to the first token, so a lexical error in the
    /// first token is reported here.
    pub fn new(input: &'a str) -> ParseResult<Self> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Parser { lexer, current })
    }

    /// Evaluates the entire input. The parser is consumed either way.
    pub fn parse(mut self) -> ParseResult<f64> {
        let value = self.parse_expression()?;

        // Ensure we consumed all tokens
        if !self.current.is(TokenKind::EndOfInput) {
            return Err(ParseError::TrailingInput {
                found: self.current.to_string(),
                offset: self.current.offset,
            });
        }

        Ok(value)
    }

    /// Discards the lookahead and pulls the next token.
    fn advance(&mut self) -> ParseResult<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Parses additive expressions (+ and -).
    fn parse_expression(&mut self) -> ParseResult<f64> {
        let mut result = self.parse_term()?;

        loop {
            let op = match self.current.kind {
                TokenKind::Plus | TokenKind::Minus => self.current.kind,
                _ => break,
            };

            self.advance()?;
            let right = self.parse_term()?;

            if op == TokenKind::Plus {
                result += right;
            } else {
                result -= right;
            }
        }

        Ok(result)
    }

    /// Parses multiplicative expressions (* and /).
    fn parse_term(&mut self) -> ParseResult<f64> {
        let mut result = self.parse_factor()?;

        loop {
            let op = match self.current.kind {
                TokenKind::Multiply | TokenKind::Divide => self.current.kind,
                _ => break,
            };

            self.advance()?;
            let right = self.parse_factor()?;

            if op == TokenKind::Multiply {
                result *= right;
            } else {
                // -0.0 == 0.0, so a negative zero divisor is rejected too
                if right == 0.0 {
                    return Err(ParseError::DivisionByZero);
                }
                result /= right;
            }
        }

        Ok(result)
    }

    /// Parses a number literal or a parenthesized expression.
    fn parse_factor(&mut self) -> ParseResult<f64> {
        match self.current.kind {
            TokenKind::Number => {
                let value = parse_literal(self.current.text)?;
                self.advance()?;
                Ok(value)
            }

            TokenKind::LeftParen => {
                let open_offset = self.current.offset;
                self.advance()?;
                let value = self.parse_expression()?;

                if !self.current.is(TokenKind::RightParen) {
                    return Err(ParseError::UnmatchedParen {
                        open_offset,
                        found: self.current.to_string(),
                    });
                }
                self.advance()?;
                Ok(value)
            }

            _ => Err(ParseError::UnexpectedToken {
                expected: FACTOR_START,
                found: self.current.to_string(),
                offset: self.current.offset,
            }),
        }
    }
}

/// Converts a digit run to a finite f64.
fn parse_literal(text: &str) -> ParseResult<f64> {
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ParseError::NumberFormat {
            literal: text.to_string(),
        }),
    }
}

/// Convenience function to evaluate an expression string directly.
pub fn parse(input: &str) -> ParseResult<f64> {
    let result = Parser::new(input).and_then(Parser::parse);
    match &result {
        Ok(value) => log::debug!("evaluated {:?} = {}", input, value),
        Err(e) => log::debug!("rejected {:?}: {}", input, e),
    }
    result
}
