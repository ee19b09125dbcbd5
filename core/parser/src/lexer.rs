//! FILENAME: core/parser/src/lexer.rs
//! PURPOSE: Scans a raw expression string and produces a stream of Tokens.
//! CONTEXT: This is the first stage of the pipeline. Tokens are pulled on
//! demand by the parser, one at a time, so a lexical error is only reported
//! once the parser reaches it.
//!
//! SUPPORTED TOKENS:
//! - Numbers: maximal runs of ASCII digits (no decimal point, no sign)
//! - Single char: + - * / ( )
//! - Whitespace between tokens is skipped

use crate::error::{ParseError, ParseResult};
use crate::token::{Token, TokenKind};

pub struct Lexer<'a> {
    input: &'a str,
    /// Byte offset of the next unread character. Never moves backwards.
    pos: usize,
    /// Set once the iterator has yielded an error.
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            failed: false,
        }
    }

    /// Current cursor position in bytes.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Advances the lexer and returns the next token.
    /// Keeps returning `EndOfInput` once the input is exhausted.
    pub fn next_token(&mut self) -> ParseResult<Token<'a>> {
        self.skip_whitespace();

        let start = self.pos;
        let token = match self.peek() {
            // End of input
            None => Token::end_of_input(start),

            // Numbers
            Some(ch) if ch.is_ascii_digit() => self.read_number(),

            // Operators and parentheses
            Some(ch) => match TokenKind::from_symbol(ch) {
                Some(kind) => {
                    self.pos += ch.len_utf8();
                    Token::new(kind, &self.input[start..self.pos], start)
                }
                None => return Err(ParseError::Lexical { ch, offset: start }),
            },
        };

        log::trace!("token {:?} {:?} at {}", token.kind, token.text, token.offset);
        Ok(token)
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    fn read_number(&mut self) -> Token<'a> {
        let start = self.pos;
        let digits = self.input[start..]
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        self.pos += digits;
        Token::new(TokenKind::Number, &self.input[start..self.pos], start)
    }
}

/// Yields every token before `EndOfInput`. An error is yielded once, then the
/// iterator is exhausted.
impl<'a> Iterator for Lexer<'a> {
    type Item = ParseResult<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is(TokenKind::EndOfInput) => None,
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Collects all tokens of `input`, excluding the trailing `EndOfInput`.
pub fn tokenize(input: &str) -> ParseResult<Vec<Token<'_>>> {
    Lexer::new(input).collect()
}
