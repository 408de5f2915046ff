//! Format recognizers over the token stream.
//!
//! Each submodule accepts exactly one [`Format`]. [`recognize`] tries them in
//! order of specificity so that a bare `"24"` is an integer rather than a
//! one-section timecode.

mod feet;
mod number;
mod runtime;
mod timecode;

pub use feet::parse_feet_and_frames;
pub use number::parse_number;
pub use runtime::parse_runtime;
pub use timecode::parse_timecode;

use crate::error::ParseError;
use crate::lexer::Lexer;
use crate::model::Format;

/// Detect which format a string is written in.
///
/// Returns `None` when no recognizer accepts the input.
pub fn recognize(input: &str) -> Option<Format> {
    let format = if let Ok(number) = parse_number(input) {
        Some(number.format())
    } else if parse_timecode(input).is_ok() {
        Some(Format::Timecode)
    } else if parse_feet_and_frames(input).is_ok() {
        Some(Format::FeetAndFrames)
    } else if parse_runtime(input).is_ok() {
        Some(Format::Runtime)
    } else {
        None
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(input, ?format, "recognized input format");

    format
}

/// Parse a digits token into a section value.
fn section(text: &str) -> Result<i64, ParseError> {
    text.parse::<i64>()
        .map_err(|_| ParseError::OutOfRange(text.to_string()))
}

/// Tokenize, mapping lexing failures onto the attempted format.
fn lex(input: &str, format: Format) -> Result<Lexer<'_>, ParseError> {
    match Lexer::new(input) {
        Ok(lexer) => Ok(lexer),
        Err(ParseError::Empty) => Err(ParseError::Empty),
        Err(_) => Err(ParseError::unrecognized(input, format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognize() {
        assert_eq!(recognize("86400"), Some(Format::Integer));
        assert_eq!(recognize("-12"), Some(Format::Integer));
        assert_eq!(recognize("23.976"), Some(Format::Decimal));
        assert_eq!(recognize("24000/1001"), Some(Format::Ratio));
        assert_eq!(recognize("01:00:00:00"), Some(Format::Timecode));
        assert_eq!(recognize("01:00:00;00"), Some(Format::Timecode));
        assert_eq!(recognize("5400+00"), Some(Format::FeetAndFrames));
        assert_eq!(recognize("01:00:03.6036"), Some(Format::Runtime));
        assert_eq!(recognize("abc"), None);
        assert_eq!(recognize(""), None);
    }

    #[test]
    fn test_section_out_of_range() {
        assert!(section("99999999999999999999").is_err());
        assert_eq!(section("0042").unwrap(), 42);
    }
}
