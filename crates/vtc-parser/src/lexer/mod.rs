//! Logos-based lexer for timecode strings.
//!
//! This module provides tokenization using the [logos](https://docs.rs/logos) crate,
//! which generates a fast lexer from regex patterns at compile time.

mod token;
pub use token::Token;

use logos::Logos;
use std::ops::Range;

use crate::error::ParseError;

/// A lexer that tokenizes timecode-like strings using Logos.
///
/// Unlike a free-text tokenizer, an unknown character anywhere in the input
/// fails the whole input: `01:00:00x00` is not a timecode.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    tokens: Vec<(Token<'src>, Range<usize>)>,
    input: &'src str,
}

impl<'src> Lexer<'src> {
    /// Tokenize the input, ignoring leading and trailing whitespace.
    pub fn new(input: &'src str) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        let mut tokens = Vec::new();
        for (token, span) in Token::lexer(trimmed).spanned() {
            match token {
                Ok(token) => tokens.push((token, span)),
                Err(()) => {
                    return Err(ParseError::InvalidCharacter {
                        input: input.to_string(),
                        position: span.start,
                    })
                }
            }
        }
        if tokens.is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(Self {
            tokens,
            input: trimmed,
        })
    }

    /// Get all tokens with their spans.
    pub fn tokens(&self) -> &[(Token<'src>, Range<usize>)] {
        &self.tokens
    }

    /// Get the (trimmed) input string.
    pub fn input(&self) -> &'src str {
        self.input
    }

    /// A cursor over the token stream.
    pub(crate) fn cursor(&self) -> Cursor<'_, 'src> {
        Cursor {
            tokens: &self.tokens,
            pos: 0,
        }
    }
}

/// Forward-only cursor used by the format recognizers.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a, 'src> {
    tokens: &'a [(Token<'src>, Range<usize>)],
    pos: usize,
}

impl<'src> Cursor<'_, 'src> {
    /// Look at the next token without consuming it.
    pub fn peek(&self) -> Option<Token<'src>> {
        self.tokens.get(self.pos).map(|(t, _)| *t)
    }

    /// Consume the next token if it equals `expected`.
    pub fn eat(&mut self, expected: Token<'src>) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume a leading minus sign, reporting whether one was present.
    pub fn sign(&mut self) -> bool {
        self.eat(Token::Minus)
    }

    /// Consume a digits token.
    pub fn digits(&mut self) -> Option<&'src str> {
        match self.peek() {
            Some(Token::Digits(text)) => {
                self.pos += 1;
                Some(text)
            }
            _ => None,
        }
    }

    /// Consume a `:` or `;` separator, returning it.
    pub fn separator(&mut self) -> Option<Token<'src>> {
        match self.peek() {
            Some(token) if token.is_section_separator() => {
                self.pos += 1;
                Some(token)
            }
            _ => None,
        }
    }

    /// Whether every token has been consumed.
    pub fn is_done(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_lexer_timecode() {
        let lexer = Lexer::new("01:00:00;00").unwrap();
        let kinds: Vec<_> = lexer.tokens().iter().map(|(t, _)| *t).collect();
        assert_eq!(
            kinds,
            vec![
                Token::Digits("01"),
                Token::Colon,
                Token::Digits("00"),
                Token::Colon,
                Token::Digits("00"),
                Token::Semicolon,
                Token::Digits("00"),
            ]
        );
    }

    #[test]
    fn test_lexer_trims_whitespace() {
        let lexer = Lexer::new("  5400+00\n").unwrap();
        assert_eq!(lexer.input(), "5400+00");
        assert_eq!(lexer.tokens().len(), 3);
    }

    #[test]
    fn test_lexer_rejects_unknown_characters() {
        assert_matches!(
            Lexer::new("01:00x00"),
            Err(ParseError::InvalidCharacter { position: 5, .. })
        );
        assert_matches!(Lexer::new("01 00"), Err(ParseError::InvalidCharacter { .. }));
    }

    #[test]
    fn test_lexer_empty() {
        assert_matches!(Lexer::new("   "), Err(ParseError::Empty));
    }

    #[test]
    fn test_cursor() {
        let lexer = Lexer::new("-12/5").unwrap();
        let mut cursor = lexer.cursor();
        assert!(cursor.sign());
        assert_eq!(cursor.digits(), Some("12"));
        assert!(cursor.eat(Token::Slash));
        assert_eq!(cursor.separator(), None);
        assert_eq!(cursor.digits(), Some("5"));
        assert!(cursor.is_done());
    }
}
