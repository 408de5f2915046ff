//! Token types for the Logos-based lexer.

use logos::Logos;

/// Token types recognized by the lexer.
///
/// Timecode-like strings are made of runs of digits and a handful of
/// punctuation marks; anything else is a lexing error.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    /// A run of ASCII digits (e.g., `01`, `86400`)
    #[regex(r"[0-9]+")]
    Digits(&'src str),

    /// Non-drop section separator
    #[token(":")]
    Colon,

    /// Drop-frame section separator
    #[token(";")]
    Semicolon,

    /// Feet/frames separator
    #[token("+")]
    Plus,

    /// Leading negative sign
    #[token("-")]
    Minus,

    /// Decimal point
    #[token(".")]
    Dot,

    /// Ratio separator
    #[token("/")]
    Slash,
}

impl Token<'_> {
    /// Whether this token separates timecode sections.
    pub fn is_section_separator(&self) -> bool {
        matches!(self, Token::Colon | Token::Semicolon)
    }
}
