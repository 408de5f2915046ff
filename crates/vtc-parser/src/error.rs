//! Error type for the format recognizers.

use vtc_common::RationalError;

use crate::model::Format;

/// Error returned when a string does not match the requested format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input was empty or only whitespace.
    #[error("Empty input")]
    Empty,

    /// The input contained a character no format uses.
    #[error("Invalid character in {input:?} at byte {position}")]
    InvalidCharacter {
        /// The original input.
        input: String,
        /// Byte offset of the offending character.
        position: usize,
    },

    /// The tokens did not form the requested format.
    #[error("{input:?} is not a valid {format} string")]
    Unrecognized {
        /// The original input.
        input: String,
        /// The format that was attempted.
        format: Format,
    },

    /// A numeric section did not fit a 64-bit integer.
    #[error("Numeric section out of range: {0}")]
    OutOfRange(String),

    /// Building the exact value failed.
    #[error(transparent)]
    Rational(#[from] RationalError),
}

impl ParseError {
    /// Create a new Unrecognized error.
    pub fn unrecognized<S: Into<String>>(input: S, format: Format) -> Self {
        Self::Unrecognized {
            input: input.into(),
            format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParseError::unrecognized("1:2:3:4:5", Format::Timecode);
        assert_eq!(err.to_string(), "\"1:2:3:4:5\" is not a valid timecode string");

        let err = ParseError::InvalidCharacter {
            input: "01x".into(),
            position: 2,
        };
        assert_eq!(err.to_string(), "Invalid character in \"01x\" at byte 2");

        let err = ParseError::from(RationalError::DivideByZero);
        assert_eq!(err.to_string(), "Division by zero");
    }
}
