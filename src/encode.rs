//! Flat records for storage layers.
//!
//! A [`FramestampRecord`] keeps the exact seconds and rate as integer pairs
//! plus NTSC tags; a [`RangeRecord`] is the range-type shape databases use,
//! with an always-inclusive lower bound.
//!
//! ```
//! use vtc::encode::FramestampRecord;
//! use vtc::{rates, Framestamp};
//!
//! let stamp = Framestamp::with_frames("01:00:00;00", rates::f29_97_df()).unwrap();
//! let record = stamp.encode();
//! assert_eq!(record.rate_tags, vec!["drop".to_string()]);
//! assert_eq!(Framestamp::decode(&record).unwrap(), stamp);
//! ```

use vtc_common::{Rational, Round};

use crate::error::{Error, Result};
use crate::framerate::{CoerceNtsc, Framerate, Ntsc};
use crate::framestamp::Framestamp;
use crate::range::{OutType, Range};

/// Storage form of a [`Framestamp`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FramestampRecord {
    /// Seconds numerator.
    pub numerator: i64,
    /// Seconds denominator.
    pub denominator: i64,
    /// Playback rate numerator.
    pub rate_numerator: i64,
    /// Playback rate denominator.
    pub rate_denominator: i64,
    /// `"drop"` or `"non_drop"` for NTSC rates, empty otherwise.
    pub rate_tags: Vec<String>,
}

/// Storage form of a [`Range`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeRecord {
    /// The in point.
    pub lower: FramestampRecord,
    /// Always `true`.
    pub lower_inclusive: bool,
    /// The out point.
    pub upper: FramestampRecord,
    /// Whether the out point is inclusive.
    pub upper_inclusive: bool,
}

fn ratio(numerator: i64, denominator: i64, what: &str) -> Result<Rational> {
    if denominator <= 0 {
        return Err(Error::decode(format!(
            "{what} denominator must be positive, got {denominator}"
        )));
    }
    Ok(Rational::new(numerator, denominator)?)
}

fn ntsc_from_tags(tags: &[String]) -> Result<Ntsc> {
    let mut ntsc = Ntsc::None;
    for tag in tags {
        let parsed = match tag.as_str() {
            "drop" => Ntsc::Drop,
            "non_drop" => Ntsc::NonDrop,
            other => return Err(Error::decode(format!("unknown rate tag {other:?}"))),
        };
        if ntsc.is_ntsc() {
            return Err(Error::decode("at most one rate tag is allowed"));
        }
        ntsc = parsed;
    }
    Ok(ntsc)
}

impl Framestamp {
    /// Flatten into a storage record.
    pub fn encode(&self) -> FramestampRecord {
        let seconds = self.seconds();
        let rate = self.rate();
        FramestampRecord {
            numerator: seconds.numer(),
            denominator: seconds.denom(),
            rate_numerator: rate.playback().numer(),
            rate_denominator: rate.playback().denom(),
            rate_tags: rate.ntsc().tag().map(String::from).into_iter().collect(),
        }
    }

    /// Rebuild from a storage record, validating every field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] for unknown or conflicting tags,
    /// non-positive denominators, invalid rates, or seconds that are not on
    /// a frame boundary.
    pub fn decode(record: &FramestampRecord) -> Result<Self> {
        let seconds = ratio(record.numerator, record.denominator, "seconds")?;
        let playback = ratio(record.rate_numerator, record.rate_denominator, "rate")?;
        let ntsc = ntsc_from_tags(&record.rate_tags)?;

        let rate = Framerate::new(playback, ntsc, CoerceNtsc::Never)
            .map_err(|err| Error::decode(format!("invalid rate: {err}")))?;
        // A whole rate with an NTSC tag would otherwise be read as a timebase.
        if rate.playback() != playback {
            return Err(Error::decode(format!(
                "rate {playback} does not match its {ntsc} tag"
            )));
        }
        Framestamp::with_seconds(seconds, rate, Round::Off)
            .map_err(|err| Error::decode(format!("invalid framestamp: {err}")))
    }
}

impl From<Framestamp> for FramestampRecord {
    fn from(stamp: Framestamp) -> Self {
        stamp.encode()
    }
}

impl TryFrom<FramestampRecord> for Framestamp {
    type Error = Error;

    fn try_from(record: FramestampRecord) -> Result<Self> {
        Framestamp::decode(&record)
    }
}

impl Range {
    /// Flatten into a storage record.
    pub fn encode(&self) -> RangeRecord {
        RangeRecord {
            lower: self.in_point().encode(),
            lower_inclusive: true,
            upper: self.out_point().encode(),
            upper_inclusive: self.out_type() == OutType::Inclusive,
        }
    }

    /// Rebuild from a storage record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] for an exclusive lower bound, mismatched
    /// rates, an out point before the in point, or any invalid bound.
    pub fn decode(record: &RangeRecord) -> Result<Self> {
        if !record.lower_inclusive {
            return Err(Error::decode("lower bound must be inclusive"));
        }
        let in_point = Framestamp::decode(&record.lower)?;
        let out_point = Framestamp::decode(&record.upper)?;
        let out_type = if record.upper_inclusive {
            OutType::Inclusive
        } else {
            OutType::Exclusive
        };
        Range::new(in_point, out_point, out_type)
            .map_err(|err| Error::decode(format!("invalid range: {err}")))
    }
}

impl From<Range> for RangeRecord {
    fn from(range: Range) -> Self {
        range.encode()
    }
}

impl TryFrom<RangeRecord> for Range {
    type Error = Error;

    fn try_from(record: RangeRecord) -> Result<Self> {
        Range::decode(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates;
    use assert_matches::assert_matches;

    fn record(numerator: i64, denominator: i64, tags: &[&str]) -> FramestampRecord {
        FramestampRecord {
            numerator,
            denominator,
            rate_numerator: 30000,
            rate_denominator: 1001,
            rate_tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_encode_hour_at_23_98() {
        let stamp = Framestamp::with_frames(86400, rates::f23_98()).unwrap();
        let encoded = stamp.encode();
        assert_eq!((encoded.numerator, encoded.denominator), (18018, 5));
        assert_eq!((encoded.rate_numerator, encoded.rate_denominator), (24000, 1001));
        assert_eq!(encoded.rate_tags, vec!["non_drop".to_string()]);
        assert_eq!(Framestamp::try_from(encoded).unwrap(), stamp);
    }

    #[test]
    fn test_plain_rate_has_no_tags() {
        let stamp = Framestamp::with_frames(24, rates::f24()).unwrap();
        assert!(stamp.encode().rate_tags.is_empty());
    }

    #[test]
    fn test_decode_rejects_bad_tags() {
        assert_matches!(
            Framestamp::decode(&record(0, 1, &["dropish"])),
            Err(Error::Decode(_))
        );
        assert_matches!(
            Framestamp::decode(&record(0, 1, &["drop", "non_drop"])),
            Err(Error::Decode(_))
        );
    }

    #[test]
    fn test_decode_rejects_bad_denominator() {
        assert_matches!(Framestamp::decode(&record(1, 0, &[])), Err(Error::Decode(_)));
        assert_matches!(Framestamp::decode(&record(1, -5, &[])), Err(Error::Decode(_)));
    }

    #[test]
    fn test_decode_rejects_partial_frame() {
        assert_matches!(
            Framestamp::decode(&record(1, 7, &["non_drop"])),
            Err(Error::Decode(_))
        );
    }

    #[test]
    fn test_range_round_trip() {
        let in_point = Framestamp::with_frames("01:00:00:00", rates::f24()).unwrap();
        let out_point = Framestamp::with_frames("02:00:00:00", rates::f24()).unwrap();
        let range = Range::new(in_point, out_point, OutType::Inclusive).unwrap();

        let encoded = range.encode();
        assert!(encoded.lower_inclusive);
        assert!(encoded.upper_inclusive);
        assert_eq!(Range::decode(&encoded).unwrap(), range);
    }

    #[test]
    fn test_range_decode_rejects() {
        let in_point = Framestamp::with_frames(0, rates::f24()).unwrap();
        let range = Range::new(in_point, in_point, OutType::Exclusive).unwrap();

        let mut exclusive_lower = range.encode();
        exclusive_lower.lower_inclusive = false;
        assert_matches!(Range::decode(&exclusive_lower), Err(Error::Decode(_)));

        let mut mixed = range.encode();
        mixed.upper = Framestamp::with_frames(0, rates::f48()).unwrap().encode();
        assert_matches!(Range::decode(&mixed), Err(Error::Decode(_)));
    }
}
