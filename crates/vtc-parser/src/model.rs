//! Parsed representations of each recognized string format.
//!
//! These are raw, unvalidated sections: frame counts are not checked against
//! any timebase and out-of-range components are kept as written. Rolling
//! them over is the caller's job since it depends on the framerate.

use std::fmt;

use vtc_common::{Rational, RationalError};

/// A string format the recognizers understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Format {
    /// A bare whole number (`86400`).
    Integer,
    /// A decimal number (`23.976`).
    Decimal,
    /// A ratio (`24000/1001`).
    Ratio,
    /// SMPTE timecode (`01:00:00:00`, `01:00:00;00`).
    Timecode,
    /// Runtime (`01:00:03.6036`).
    Runtime,
    /// Feet and frames (`5400+00`).
    FeetAndFrames,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Decimal => write!(f, "decimal"),
            Self::Ratio => write!(f, "ratio"),
            Self::Timecode => write!(f, "timecode"),
            Self::Runtime => write!(f, "runtime"),
            Self::FeetAndFrames => write!(f, "feet+frames"),
        }
    }
}

/// Sections of an SMPTE timecode string.
///
/// Missing leading sections are zero: `"04"` has only `frames` set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimecodeSections {
    /// Whether the string started with `-`.
    pub negative: bool,
    /// Hours section.
    pub hours: i64,
    /// Minutes section.
    pub minutes: i64,
    /// Seconds section.
    pub seconds: i64,
    /// Frames section.
    pub frames: i64,
    /// Whether a `;` separator was used anywhere.
    pub drop_separator: bool,
}

/// Feet and frames as written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeetAndFramesParts {
    /// Whether the string started with `-`.
    pub negative: bool,
    /// Feet section.
    pub feet: i64,
    /// Frames section.
    pub frames: i64,
}

/// Sections of a runtime string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuntimeParts {
    /// Whether the string started with `-`.
    pub negative: bool,
    /// Hours section.
    pub hours: i64,
    /// Minutes section.
    pub minutes: i64,
    /// Seconds section, possibly fractional.
    pub seconds: Rational,
}

impl RuntimeParts {
    /// Total signed seconds.
    pub fn to_seconds(&self) -> Result<Rational, RationalError> {
        let whole = self
            .hours
            .checked_mul(3600)
            .and_then(|h| self.minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
            .ok_or(RationalError::Overflow)?;
        let total = Rational::from_integer(whole).checked_add(self.seconds)?;
        if self.negative {
            total.checked_neg()
        } else {
            Ok(total)
        }
    }
}

/// A number recognized from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParsedNumber {
    /// A whole number.
    Integer(i64),
    /// A decimal; exact only when whole, like a float.
    Decimal(Rational),
    /// A ratio; always exact.
    Ratio(Rational),
}

impl ParsedNumber {
    /// The exact value as written.
    pub fn value(&self) -> Rational {
        match *self {
            Self::Integer(n) => Rational::from_integer(n),
            Self::Decimal(r) | Self::Ratio(r) => r,
        }
    }

    /// Whether the text is unambiguous without further framing.
    ///
    /// A decimal like `23.98` is a rounded rendering of some true value, so
    /// it is treated as imprecise unless it is whole.
    pub fn is_exact(&self) -> bool {
        match self {
            Self::Integer(_) | Self::Ratio(_) => true,
            Self::Decimal(r) => r.is_integer(),
        }
    }

    /// The format this number was written in.
    pub fn format(&self) -> Format {
        match self {
            Self::Integer(_) => Format::Integer,
            Self::Decimal(_) => Format::Decimal,
            Self::Ratio(_) => Format::Ratio,
        }
    }
}
