//! Unified error type for the vtc crate.
//!
//! Rational and parser failures are wrapped via `#[from]`; everything else
//! is a domain failure raised while building or combining rates, framestamps
//! and ranges.

use std::fmt;

use vtc_common::RationalError;
use vtc_parser::ParseError;

use crate::framerate::Framerate;

/// Unified error type covering all failure modes in vtc.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Exact arithmetic failed (division by zero, overflow, non-integer).
    #[error(transparent)]
    Rational(#[from] RationalError),

    /// A number string was well formed but its value did not fit.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A framerate was zero or negative.
    #[error("Framerate must be positive: {0}")]
    NonPositiveRate(String),

    /// An NTSC framerate was requested for a value that is not one.
    #[error("Not a valid NTSC rate: {0}")]
    InvalidNtscRate(String),

    /// Drop-frame was requested for a timebase not divisible by 30.
    #[error("Drop-frame requires a timebase divisible by 30: {0}")]
    BadDropRate(String),

    /// A non-NTSC rate was given as an inexact float or decimal.
    #[error("Imprecise framerate {0}: pass a rational or mark it NTSC")]
    ImpreciseInput(String),

    /// NTSC coercion was requested without an NTSC setting.
    #[error("NTSC coercion requires drop or non-drop framing")]
    CoerceRequiresNtsc,

    /// An NTSC tag string was not one of the known tags.
    #[error("Invalid NTSC tag: {0}")]
    InvalidNtscTag(String),

    /// A string matched none of the supported formats.
    #[error("Unrecognized format: {0}")]
    UnrecognizedFormat(String),

    /// A drop-frame timecode named a frame number that is skipped.
    #[error("Drop-frame timecode names a skipped frame: {0}")]
    BadDropFrames(String),

    /// Seconds did not land on a frame and rounding was disabled.
    #[error("{seconds} seconds is not on a frame boundary at {rate}")]
    PartialFrame {
        /// The seconds value as a rational string.
        seconds: String,
        /// The framerate the value was checked against.
        rate: Framerate,
    },

    /// Two operands had different framerates and no policy was given.
    #[error("Mixed framerates: {left} and {right}")]
    MixedRate {
        /// Rate of the left operand.
        left: Framerate,
        /// Rate of the right operand.
        right: Framerate,
    },

    /// Two ranges had different out types and no policy was given.
    #[error("Mixed range out types")]
    MixedOutType,

    /// A range out point came before its in point.
    #[error("Range out {out_point} is before in {in_point}")]
    RangeOrder {
        /// Timecode of the in point.
        in_point: String,
        /// Timecode of the out point.
        out_point: String,
    },

    /// A range duration was zero or negative.
    #[error("Range duration must be positive: {0}")]
    InvalidDuration(String),

    /// Two ranges share no frames.
    #[error("Ranges do not overlap")]
    NoOverlap,

    /// Two ranges overlap where a gap was required.
    #[error("Ranges overlap")]
    Overlap,

    /// An encoded record could not be turned back into a value.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl Error {
    /// Convenience constructor for [`Error::UnrecognizedFormat`].
    pub fn unrecognized(input: impl fmt::Display) -> Self {
        Error::UnrecognizedFormat(input.to_string())
    }

    /// Convenience constructor for [`Error::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Error::Decode(message.into())
    }

    /// Convenience constructor for [`Error::MixedRate`].
    pub fn mixed_rate(left: Framerate, right: Framerate) -> Self {
        Error::MixedRate { left, right }
    }

    /// Whether this is a divide-by-zero failure.
    pub fn is_divide_by_zero(&self) -> bool {
        matches!(self, Error::Rational(RationalError::DivideByZero))
    }

    /// Whether this is an arithmetic overflow.
    pub fn is_overflow(&self) -> bool {
        matches!(
            self,
            Error::Rational(RationalError::Overflow)
                | Error::Parse(ParseError::Rational(RationalError::Overflow))
        )
    }

    /// Whether this failure came from combining mismatched operands.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Error::MixedRate { .. } | Error::MixedOutType)
    }

    /// Whether this failure came from an invalid framerate request.
    pub fn is_rate_error(&self) -> bool {
        matches!(
            self,
            Error::NonPositiveRate(_)
                | Error::InvalidNtscRate(_)
                | Error::BadDropRate(_)
                | Error::ImpreciseInput(_)
                | Error::CoerceRequiresNtsc
                | Error::InvalidNtscTag(_)
        )
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates;

    #[test]
    fn rational_from_common() {
        let err = Error::from(RationalError::DivideByZero);
        assert!(err.is_divide_by_zero());
        assert_eq!(err.to_string(), RationalError::DivideByZero.to_string());
    }

    #[test]
    fn parse_from_parser() {
        let err = Error::from(ParseError::Empty);
        assert!(matches!(err, Error::Parse(ParseError::Empty)));
    }

    #[test]
    fn mixed_rate_display() {
        let err = Error::mixed_rate(rates::f24(), rates::f23_98());
        assert_eq!(err.to_string(), "Mixed framerates: <24.0 fps> and <23.98 NTSC>");
        assert!(err.is_mismatch());
    }

    #[test]
    fn partial_frame_display() {
        let err = Error::PartialFrame {
            seconds: "1/48".into(),
            rate: rates::f24(),
        };
        assert_eq!(
            err.to_string(),
            "1/48 seconds is not on a frame boundary at <24.0 fps>"
        );
    }

    #[test]
    fn rate_errors_grouped() {
        assert!(Error::CoerceRequiresNtsc.is_rate_error());
        assert!(Error::BadDropRate("24".into()).is_rate_error());
        assert!(!Error::NoOverlap.is_rate_error());
    }

    #[test]
    fn unrecognized_display() {
        let err = Error::unrecognized("one hour");
        assert_eq!(err.to_string(), "Unrecognized format: one hour");
    }
}
