//! Feet+frames film footage notation.

use std::fmt;
use std::str::FromStr;

use vtc_common::RationalError;
use vtc_parser::parse_feet_and_frames;

use crate::error::{Error, Result};

/// Film gauge and perforation, which fixes the frames per foot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FilmFormat {
    /// 35mm, 4 perforations per frame: 16 frames per foot.
    #[default]
    Ff35mm4Perf,
    /// 35mm, 2 perforations per frame: 32 frames per foot.
    Ff35mm2Perf,
    /// 16mm: 40 frames per foot.
    Ff16mm,
}

impl FilmFormat {
    /// Frames in one foot of film.
    pub const fn frames_per_foot(&self) -> i64 {
        match self {
            Self::Ff35mm4Perf => 16,
            Self::Ff35mm2Perf => 32,
            Self::Ff16mm => 40,
        }
    }
}

impl fmt::Display for FilmFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ff35mm4Perf => write!(f, "35mm 4-perf"),
            Self::Ff35mm2Perf => write!(f, "35mm 2-perf"),
            Self::Ff16mm => write!(f, "16mm"),
        }
    }
}

/// A footage count such as `5400+00`.
///
/// Frames at or above the frames per foot carry into feet when converted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeetAndFrames {
    /// Whether the count is before zero.
    pub negative: bool,
    /// Whole feet.
    pub feet: i64,
    /// Frames past the last whole foot.
    pub frames: i64,
    /// Gauge the count is measured in.
    pub film_format: FilmFormat,
}

impl FeetAndFrames {
    /// Split a signed frame count into feet and frames.
    pub fn from_frames(frames: i64, film_format: FilmFormat) -> Self {
        let per_foot = film_format.frames_per_foot();
        let magnitude = frames.unsigned_abs();
        // per_foot > 1, so both quotient and remainder fit i64.
        Self {
            negative: frames < 0,
            feet: (magnitude / per_foot as u64) as i64,
            frames: (magnitude % per_foot as u64) as i64,
            film_format,
        }
    }

    /// Total signed frame count.
    pub fn to_frames(&self) -> Result<i64> {
        let count = self
            .feet
            .checked_mul(self.film_format.frames_per_foot())
            .and_then(|f| f.checked_add(self.frames))
            .ok_or(RationalError::Overflow)?;
        Ok(if self.negative { -count } else { count })
    }

    /// Parse a `FEET+FF` string in the given gauge.
    pub fn parse(input: &str, film_format: FilmFormat) -> Result<Self> {
        let parts = parse_feet_and_frames(input).map_err(|_| Error::unrecognized(input))?;
        Ok(Self {
            negative: parts.negative,
            feet: parts.feet,
            frames: parts.frames,
            film_format,
        })
    }
}

impl fmt::Display for FeetAndFrames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(f, "{}{}+{:02}", sign, self.feet, self.frames)
    }
}

impl FromStr for FeetAndFrames {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, FilmFormat::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_from_frames() {
        let ff = FeetAndFrames::from_frames(86400, FilmFormat::Ff35mm4Perf);
        assert_eq!((ff.feet, ff.frames), (5400, 0));
        assert_eq!(ff.to_string(), "5400+00");

        let ff = FeetAndFrames::from_frames(-17, FilmFormat::Ff35mm4Perf);
        assert_eq!(ff.to_string(), "-1+01");
    }

    #[test]
    fn test_gauges() {
        assert_eq!(
            FeetAndFrames::from_frames(86400, FilmFormat::Ff35mm2Perf).to_string(),
            "2700+00"
        );
        assert_eq!(
            FeetAndFrames::from_frames(86400, FilmFormat::Ff16mm).to_string(),
            "2160+00"
        );
    }

    #[test]
    fn test_parse_carries_frames() {
        let ff: FeetAndFrames = "10+20".parse().unwrap();
        assert_eq!(ff.to_frames().unwrap(), 180);
        let ff = FeetAndFrames::parse("-1+08", FilmFormat::Ff16mm).unwrap();
        assert_eq!(ff.to_frames().unwrap(), -48);
    }

    #[test]
    fn test_parse_rejects_timecode() {
        assert_matches!(
            "01:00:00:00".parse::<FeetAndFrames>(),
            Err(Error::UnrecognizedFormat(_))
        );
    }
}
