//! Inputs accepted by the framestamp constructors.

use vtc_common::{Number, Rational};
use vtc_parser::{parse_number, parse_runtime, parse_timecode, ParseError};

use super::feet::{FeetAndFrames, FilmFormat};
use super::smpte::{self, Sections};
use crate::error::{Error, Result};
use crate::framerate::Framerate;

/// Anything that names a frame: a count, timecode, or footage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FramesSource {
    /// A signed frame count.
    Frames(i64),
    /// A timecode (`01:00:00:00`, `01:00:00;00`, `-04`) or feet+frames
    /// (`5400+00`, read as 35mm 4-perf) string.
    Text(String),
    /// Timecode sections.
    Sections(Sections),
    /// A footage count in any gauge.
    Feet(FeetAndFrames),
}

impl FramesSource {
    pub(crate) fn resolve(&self, rate: &Framerate) -> Result<i64> {
        match self {
            Self::Frames(frames) => Ok(*frames),
            Self::Text(text) => frames_from_text(text, rate, FilmFormat::default()),
            Self::Sections(sections) => smpte::frames_from_sections(sections, rate),
            Self::Feet(feet) => feet.to_frames(),
        }
    }
}

/// Frames for a timecode or feet+frames string.
pub(crate) fn frames_from_text(text: &str, rate: &Framerate, film: FilmFormat) -> Result<i64> {
    if let Ok(tc) = parse_timecode(text) {
        if tc.drop_separator && !rate.is_drop() {
            tracing::debug!(text, %rate, "drop-frame separator at a non-drop rate");
        }
        return smpte::frames_from_sections(&Sections::from(tc), rate);
    }
    FeetAndFrames::parse(text, film)?.to_frames()
}

impl From<i64> for FramesSource {
    fn from(frames: i64) -> Self {
        Self::Frames(frames)
    }
}

impl From<i32> for FramesSource {
    fn from(frames: i32) -> Self {
        Self::Frames(i64::from(frames))
    }
}

impl From<&str> for FramesSource {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FramesSource {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Sections> for FramesSource {
    fn from(sections: Sections) -> Self {
        Self::Sections(sections)
    }
}

impl From<FeetAndFrames> for FramesSource {
    fn from(feet: FeetAndFrames) -> Self {
        Self::Feet(feet)
    }
}

/// Anything that names a position in seconds.
#[derive(Debug, Clone, PartialEq)]
pub enum SecondsSource {
    /// An integer, float or rational.
    Number(Number),
    /// A number (`3600`, `3603.6`, `18018/5`) or runtime (`01:00:03.6`) string.
    Text(String),
}

impl SecondsSource {
    pub(crate) fn resolve(&self) -> Result<Rational> {
        match self {
            Self::Number(n) => Ok(n.to_rational()?),
            Self::Text(text) => seconds_from_text(text),
        }
    }
}

/// Seconds for a number or runtime string.
pub(crate) fn seconds_from_text(text: &str) -> Result<Rational> {
    match parse_number(text) {
        Ok(number) => return Ok(number.value()),
        Err(err) if out_of_range(&err) => return Err(err.into()),
        Err(_) => {}
    }
    match parse_runtime(text) {
        Ok(runtime) => Ok(runtime.to_seconds()?),
        Err(_) => Err(Error::unrecognized(text)),
    }
}

/// The error for text shaped like a number whose value does not fit.
pub(crate) fn number_error(text: &str) -> Option<Error> {
    match parse_number(text) {
        Err(err) if out_of_range(&err) => Some(err.into()),
        _ => None,
    }
}

fn out_of_range(err: &ParseError) -> bool {
    matches!(err, ParseError::OutOfRange(_) | ParseError::Rational(_))
}

impl From<Number> for SecondsSource {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for SecondsSource {
    fn from(n: i64) -> Self {
        Self::Number(Number::Int(n))
    }
}

impl From<i32> for SecondsSource {
    fn from(n: i32) -> Self {
        Self::Number(Number::Int(i64::from(n)))
    }
}

impl From<f64> for SecondsSource {
    fn from(f: f64) -> Self {
        Self::Number(Number::Float(f))
    }
}

impl From<Rational> for SecondsSource {
    fn from(r: Rational) -> Self {
        Self::Number(Number::Rational(r))
    }
}

impl From<&str> for SecondsSource {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for SecondsSource {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
