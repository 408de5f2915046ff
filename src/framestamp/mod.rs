//! Frame-accurate positions.
//!
//! A [`Framestamp`] is an exact number of seconds that always lands on a
//! frame boundary of its [`Framerate`]. Every representation (frame count,
//! SMPTE timecode, runtime, feet+frames, Premiere ticks) is derived from
//! those seconds.
//!
//! ```
//! use vtc::{rates, Framestamp};
//!
//! let stamp = Framestamp::with_frames("01:00:00:00", rates::f23_98()).unwrap();
//! assert_eq!(stamp.frames(), 86400);
//! assert_eq!(stamp.runtime(9), "01:00:03.6");
//! ```

mod feet;
mod runtime;
mod smpte;
mod source;
mod ticks;

pub use feet::{FeetAndFrames, FilmFormat};
pub use smpte::Sections;
pub use source::{FramesSource, SecondsSource};
pub use ticks::PREMIERE_TICKS_PER_SECOND;

use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

use vtc_common::{Number, Rational, RationalError, Round};
use vtc_parser::{parse_number, recognize, Format, ParsedNumber};

use crate::config::VtcConfig;
use crate::error::{Error, Result};
use crate::framerate::Framerate;

/// Which operand's framerate a mixed-rate operation keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Inherit {
    /// Keep the left operand's value.
    Left,
    /// Keep the right operand's value.
    Right,
}

impl Inherit {
    /// Pick `left` or `right`.
    pub fn pick<T>(self, left: T, right: T) -> T {
        match self {
            Self::Left => left,
            Self::Right => right,
        }
    }
}

/// An exact, frame-aligned position at a framerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "crate::encode::FramestampRecord",
        into = "crate::encode::FramestampRecord"
    )
)]
pub struct Framestamp {
    seconds: Rational,
    rate: Framerate,
}

impl Framestamp {
    /// Build from a frame count, timecode, feet+frames or sections.
    ///
    /// Timecode sections roll over before drop-frame validation, so
    /// `"00:00:59:24"` at 24 fps is `00:01:00:00`.
    ///
    /// # Errors
    ///
    /// - [`Error::BadDropFrames`] for a skipped drop-frame number
    /// - [`Error::UnrecognizedFormat`] for strings that are neither timecode
    ///   nor feet+frames
    pub fn with_frames(input: impl Into<FramesSource>, rate: Framerate) -> Result<Self> {
        let frames = input.into().resolve(&rate)?;
        Self::from_frame_count(frames, rate)
    }

    /// Build from seconds, snapping to a frame with `round`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PartialFrame`] when `round` is [`Round::Off`] and the
    /// value is not on a frame boundary.
    pub fn with_seconds(
        input: impl Into<SecondsSource>,
        rate: Framerate,
        round: Round,
    ) -> Result<Self> {
        let seconds = input.into().resolve()?;
        Self::snap(seconds, rate, round)
    }

    /// Build from a Premiere Pro tick count, snapping to a frame with `round`.
    pub fn with_premiere_ticks(ticks: i64, rate: Framerate, round: Round) -> Result<Self> {
        Self::snap(ticks::ticks_to_seconds(ticks)?, rate, round)
    }

    /// Parse any supported string, detecting its format.
    ///
    /// Integers and timecode are frames, feet+frames uses the configured
    /// film format, and decimals, ratios and runtimes are seconds snapped
    /// with the configured rounding mode.
    pub fn parse(input: &str, rate: Framerate, config: &VtcConfig) -> Result<Self> {
        let Some(format) = recognize(input) else {
            return Err(source::number_error(input).unwrap_or_else(|| Error::unrecognized(input)));
        };
        tracing::trace!(input, %format, "recognized framestamp string");

        match format {
            Format::Integer => match parse_number(input)? {
                ParsedNumber::Integer(frames) => Self::from_frame_count(frames, rate),
                _ => Err(Error::unrecognized(input)),
            },
            Format::Timecode | Format::FeetAndFrames => {
                let frames = source::frames_from_text(input, &rate, config.film_format)?;
                Self::from_frame_count(frames, rate)
            }
            Format::Decimal | Format::Ratio | Format::Runtime => {
                let seconds = source::seconds_from_text(input)?;
                Self::snap(seconds, rate, config.round)
            }
        }
    }

    fn from_frame_count(frames: i64, rate: Framerate) -> Result<Self> {
        let seconds = Rational::from_integer(frames).checked_div(rate.playback())?;
        Ok(Self { seconds, rate })
    }

    fn snap(seconds: Rational, rate: Framerate, round: Round) -> Result<Self> {
        let exact = seconds.checked_mul(rate.playback())?;
        let frames = match exact.round(round) {
            Ok(frames) => frames,
            Err(RationalError::NotInteger(_)) => {
                return Err(Error::PartialFrame {
                    seconds: seconds.to_string(),
                    rate,
                })
            }
            Err(err) => return Err(err.into()),
        };
        if !exact.is_integer() {
            tracing::debug!(%seconds, frames, %round, "snapped seconds to frame");
        }
        Self::from_frame_count(frames, rate)
    }

    /// Exact seconds from zero.
    pub fn seconds(&self) -> Rational {
        self.seconds
    }

    /// The framerate.
    pub fn rate(&self) -> Framerate {
        self.rate
    }

    /// Signed frame count from zero.
    pub fn frames(&self) -> i64 {
        let playback = self.rate.playback();
        let num = i128::from(self.seconds.numer()) * i128::from(playback.numer());
        let den = i128::from(self.seconds.denom()) * i128::from(playback.denom());
        // Every constructor starts from an i64 frame count, so this is exact
        // and fits.
        (num / den) as i64
    }

    /// SMPTE sections, with drop-frame numbering for drop rates.
    pub fn sections(&self) -> Sections {
        smpte::sections_from_frames(self.frames(), &self.rate)
    }

    /// SMPTE timecode: `01:00:00:00`, or `01:00:00;00` at drop rates.
    pub fn timecode(&self) -> String {
        smpte::format_timecode(&self.sections(), &self.rate)
    }

    /// Real elapsed time as `HH:MM:SS.fff`, rounded to `precision` places.
    pub fn runtime(&self, precision: usize) -> String {
        runtime::format_runtime(self.seconds, precision)
    }

    /// [`Framestamp::runtime`] with the configured precision.
    pub fn runtime_with(&self, config: &VtcConfig) -> String {
        self.runtime(config.runtime_precision)
    }

    /// Footage in the given film format.
    pub fn feet_and_frames(&self, film_format: FilmFormat) -> FeetAndFrames {
        FeetAndFrames::from_frames(self.frames(), film_format)
    }

    /// [`Framestamp::feet_and_frames`] with the configured film format.
    pub fn feet_and_frames_with(&self, config: &VtcConfig) -> FeetAndFrames {
        self.feet_and_frames(config.film_format)
    }

    /// Premiere Pro ticks, rounded to the nearest tick.
    pub fn premiere_ticks(&self) -> Result<i64> {
        ticks::seconds_to_ticks(self.seconds)
    }

    /// Order by position in time. Defined across framerates.
    pub fn compare(&self, other: &Framestamp) -> Ordering {
        self.seconds.cmp(&other.seconds)
    }

    /// Whether both name the same instant, regardless of framerate.
    pub fn eq_seconds(&self, other: &Framestamp) -> bool {
        self.seconds == other.seconds
    }

    fn require_same_rate(&self, other: &Framestamp) -> Result<()> {
        if self.rate == other.rate {
            Ok(())
        } else {
            Err(Error::mixed_rate(self.rate, other.rate))
        }
    }

    /// Add two framestamps at the same rate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MixedRate`] when the rates differ; use
    /// [`Framestamp::add_inherit`] to pick one.
    pub fn add(&self, other: &Framestamp) -> Result<Self> {
        self.require_same_rate(other)?;
        let frames = self
            .frames()
            .checked_add(other.frames())
            .ok_or(RationalError::Overflow)?;
        Self::from_frame_count(frames, self.rate)
    }

    /// Subtract `other` at the same rate.
    pub fn sub(&self, other: &Framestamp) -> Result<Self> {
        self.require_same_rate(other)?;
        let frames = self
            .frames()
            .checked_sub(other.frames())
            .ok_or(RationalError::Overflow)?;
        Self::from_frame_count(frames, self.rate)
    }

    /// Add across rates, keeping the rate `inherit` names and snapping the
    /// exact sum with `round`.
    pub fn add_inherit(&self, other: &Framestamp, inherit: Inherit, round: Round) -> Result<Self> {
        let rate = self.inherited_rate(other, inherit);
        Self::snap(self.seconds.checked_add(other.seconds)?, rate, round)
    }

    /// Subtract across rates, keeping the rate `inherit` names.
    pub fn sub_inherit(&self, other: &Framestamp, inherit: Inherit, round: Round) -> Result<Self> {
        let rate = self.inherited_rate(other, inherit);
        Self::snap(self.seconds.checked_sub(other.seconds)?, rate, round)
    }

    fn inherited_rate(&self, other: &Framestamp, inherit: Inherit) -> Framerate {
        let rate = inherit.pick(self.rate, other.rate);
        if self.rate != other.rate {
            tracing::debug!(left = %self.rate, right = %other.rate, kept = %rate, "mixed-rate arithmetic");
        }
        rate
    }

    /// Scale by any number, snapping to a frame with `round`.
    pub fn mult(&self, by: impl Into<Number>, round: Round) -> Result<Self> {
        let by = by.into().to_rational()?;
        Self::snap(self.seconds.checked_mul(by)?, self.rate, round)
    }

    /// Divide by any number, snapping to a frame with `round`.
    ///
    /// # Errors
    ///
    /// Division by zero fails with `DivideByZero`.
    pub fn div(&self, by: impl Into<Number>, round: Round) -> Result<Self> {
        let by = by.into().to_rational()?;
        Self::snap(self.seconds.checked_div(by)?, self.rate, round)
    }

    /// Split into `divisor` whole-frame parts.
    ///
    /// Returns the floored quotient and the frames left over, so that
    /// `quotient * divisor + remainder == self`.
    pub fn div_rem(&self, divisor: i64) -> Result<(Self, Self)> {
        if divisor == 0 {
            return Err(RationalError::DivideByZero.into());
        }
        let frames = self.frames();
        let quotient = frames.div_euclid(divisor);
        let remainder = frames.rem_euclid(divisor);
        Ok((
            Self::from_frame_count(quotient, self.rate)?,
            Self::from_frame_count(remainder, self.rate)?,
        ))
    }

    /// Distance from zero.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Overflow`] when the frame count is
    /// `i64::MIN`.
    pub fn abs(&self) -> Result<Self> {
        if self.seconds.is_negative() {
            self.checked_neg()
        } else {
            Ok(*self)
        }
    }

    /// The same distance on the other side of zero.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Overflow`] when the frame count is
    /// `i64::MIN`.
    pub fn checked_neg(&self) -> Result<Self> {
        Ok(Self {
            seconds: self.seconds.checked_neg()?,
            rate: self.rate,
        })
    }

    /// Same frame count at a new rate.
    ///
    /// The position in seconds changes unless the rates are equal.
    pub fn rebase(&self, rate: Framerate) -> Result<Self> {
        Self::from_frame_count(self.frames(), rate)
    }
}

/// # Panics
///
/// Panics when the frame count is `i64::MIN`; use
/// [`Framestamp::checked_neg`] to handle that case.
impl Neg for Framestamp {
    type Output = Framestamp;

    fn neg(self) -> Framestamp {
        Framestamp {
            seconds: -self.seconds,
            rate: self.rate,
        }
    }
}

impl fmt::Display for Framestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} {}>", self.timecode(), self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framerate::{CoerceNtsc, Ntsc};
    use crate::rates;
    use assert_matches::assert_matches;
    use vtc_parser::ParseError;

    fn ratio(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn test_hour_at_23_98() {
        let stamp = Framestamp::with_frames(86400, rates::f23_98()).unwrap();
        assert_eq!(stamp.seconds(), ratio(18018, 5));
        assert_eq!(stamp.timecode(), "01:00:00:00");
        assert_eq!(stamp.premiere_ticks().unwrap(), 915_372_057_600_000);
        assert_eq!(stamp.runtime(9), "01:00:03.6");
        assert_eq!(stamp.feet_and_frames(FilmFormat::default()).to_string(), "5400+00");
    }

    #[test]
    fn test_with_seconds_rounding() {
        let rate = rates::f24();
        let half = ratio(1, 48);
        assert_eq!(Framestamp::with_seconds(half, rate, Round::Closest).unwrap().frames(), 1);
        assert_eq!(Framestamp::with_seconds(half, rate, Round::Floor).unwrap().frames(), 0);
        assert_matches!(
            Framestamp::with_seconds(half, rate, Round::Off),
            Err(Error::PartialFrame { .. })
        );
    }

    #[test]
    fn test_with_seconds_float() {
        let stamp = Framestamp::with_seconds(1.5, rates::f24(), Round::Off).unwrap();
        assert_eq!(stamp.frames(), 36);
    }

    #[test]
    fn test_with_premiere_ticks() {
        let stamp =
            Framestamp::with_premiere_ticks(915_372_057_600_000, rates::f23_98(), Round::Off)
                .unwrap();
        assert_eq!(stamp.frames(), 86400);
    }

    #[test]
    fn test_parse_detects_format() {
        let config = VtcConfig::default();
        let rate = rates::f23_98();
        for input in ["01:00:00:00", "86400", "5400+00", "3603.6", "18018/5", "01:00:03.6"] {
            let stamp = Framestamp::parse(input, rate, &config).unwrap();
            assert_eq!(stamp.frames(), 86400, "{input}");
        }
        assert_matches!(
            Framestamp::parse("one hour", rate, &config),
            Err(Error::UnrecognizedFormat(_))
        );
    }

    #[test]
    fn test_parse_integer_is_frame_count_at_drop_rate() {
        let config = VtcConfig::default();
        let rate = rates::f29_97_df();

        let stamp = Framestamp::parse("17982", rate, &config).unwrap();
        assert_eq!(stamp.frames(), 17982);
        assert_eq!(stamp.timecode(), "00:10:00;00");

        let stamp = Framestamp::parse("1800", rate, &config).unwrap();
        assert_eq!(stamp.frames(), 1800);
        assert_eq!(stamp.timecode(), "00:01:00;02");

        let stamp = Framestamp::parse("-30", rate, &config).unwrap();
        assert_eq!(stamp.frames(), -30);
    }

    #[test]
    fn test_parse_oversized_number() {
        let config = VtcConfig::default();
        assert_matches!(
            Framestamp::parse("99999999999999999999", rates::f24(), &config),
            Err(Error::Parse(ParseError::OutOfRange(_)))
        );
    }

    #[test]
    fn test_parse_uses_config() {
        let config = VtcConfig::builder()
            .round(Round::Off)
            .film_format(FilmFormat::Ff16mm)
            .build();
        let stamp = Framestamp::parse("1+00", rates::f24(), &config).unwrap();
        assert_eq!(stamp.frames(), 40);
        assert_matches!(
            Framestamp::parse("0.01", rates::f24(), &config),
            Err(Error::PartialFrame { .. })
        );
    }

    #[test]
    fn test_add_requires_same_rate() {
        let a = Framestamp::with_frames(24, rates::f24()).unwrap();
        let b = Framestamp::with_frames(24, rates::f23_98()).unwrap();
        assert_matches!(a.add(&b), Err(Error::MixedRate { .. }));
        assert_eq!(a.add(&a).unwrap().frames(), 48);
        assert_eq!(a.sub(&a).unwrap().frames(), 0);
    }

    #[test]
    fn test_add_inherit() {
        let a = Framestamp::with_frames(24, rates::f24()).unwrap();
        let b = Framestamp::with_frames(24, rates::f48()).unwrap();
        let left = a.add_inherit(&b, Inherit::Left, Round::Closest).unwrap();
        assert_eq!(left.rate(), rates::f24());
        assert_eq!(left.frames(), 36);
        let right = a.add_inherit(&b, Inherit::Right, Round::Closest).unwrap();
        assert_eq!(right.rate(), rates::f48());
        assert_eq!(right.frames(), 72);
    }

    #[test]
    fn test_mult_and_div() {
        let stamp = Framestamp::with_frames(10, rates::f24()).unwrap();
        assert_eq!(stamp.mult(2, Round::Off).unwrap().frames(), 20);
        assert_eq!(stamp.mult(0.5, Round::Off).unwrap().frames(), 5);
        assert_eq!(stamp.div(3, Round::Closest).unwrap().frames(), 3);
        assert_eq!(stamp.div(4, Round::Ceil).unwrap().frames(), 3);
        assert!(stamp.div(0, Round::Closest).unwrap_err().is_divide_by_zero());
    }

    #[test]
    fn test_div_rem() {
        let stamp = Framestamp::with_frames(10, rates::f24()).unwrap();
        let (q, r) = stamp.div_rem(3).unwrap();
        assert_eq!((q.frames(), r.frames()), (3, 1));

        let negative = Framestamp::with_frames(-10, rates::f24()).unwrap();
        let (q, r) = negative.div_rem(3).unwrap();
        assert_eq!((q.frames(), r.frames()), (-4, 2));
    }

    #[test]
    fn test_abs_neg() {
        let stamp = Framestamp::with_frames(-24, rates::f24()).unwrap();
        assert_eq!(stamp.abs().unwrap().frames(), 24);
        assert_eq!((-stamp).frames(), 24);
        assert_eq!(stamp.timecode(), "-00:00:01:00");
    }

    #[test]
    fn test_abs_at_frame_count_limit() {
        let rate = Framerate::new(1, Ntsc::None, CoerceNtsc::Never).unwrap();
        let lowest = Framestamp::with_frames(i64::MIN, rate).unwrap();
        assert!(lowest.abs().unwrap_err().is_overflow());
        assert!(lowest.checked_neg().unwrap_err().is_overflow());

        let highest = Framestamp::with_frames(i64::MAX, rate).unwrap();
        assert_eq!(highest.abs().unwrap(), highest);
        assert_eq!(highest.checked_neg().unwrap().frames(), -i64::MAX);
    }

    #[test]
    fn test_rebase() {
        let stamp = Framestamp::with_frames("01:00:00:00", rates::f24()).unwrap();
        let rebased = stamp.rebase(rates::f23_98()).unwrap();
        assert_eq!(rebased.frames(), 86400);
        assert_eq!(rebased.timecode(), "01:00:00:00");
        assert!(rebased.compare(&stamp).is_gt());
    }

    #[test]
    fn test_compare_across_rates() {
        let a = Framestamp::with_frames(24, rates::f24()).unwrap();
        let b = Framestamp::with_frames(48, rates::f48()).unwrap();
        assert!(a.eq_seconds(&b));
        assert_eq!(a.compare(&b), Ordering::Equal);
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        let stamp = Framestamp::with_frames(86400, rates::f23_98()).unwrap();
        assert_eq!(stamp.to_string(), "<01:00:00:00 <23.98 NTSC>>");
    }
}
