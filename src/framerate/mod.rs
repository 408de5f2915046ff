//! Playback rates and NTSC framing.
//!
//! A [`Framerate`] is an exact playback rate plus an [`Ntsc`] framing flag.
//! NTSC rates are always `timebase * 1000/1001` for a whole timebase, and
//! drop-frame rates additionally need a timebase divisible by 30.

pub mod rates;

use std::fmt;
use std::str::FromStr;

use vtc_common::{Number, Rational};
use vtc_parser::parse_number;

use crate::config::VtcConfig;
use crate::error::{Error, Result};

/// NTSC framing of a rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Ntsc {
    /// Not an NTSC rate.
    #[default]
    None,
    /// NTSC with continuously counted frame numbers.
    NonDrop,
    /// NTSC with drop-frame timecode numbering.
    Drop,
}

impl Ntsc {
    /// Whether this is any NTSC framing.
    pub fn is_ntsc(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// The tag used in encoded records, if any.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::NonDrop => Some("non_drop"),
            Self::Drop => Some("drop"),
        }
    }
}

impl fmt::Display for Ntsc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().unwrap_or("none"))
    }
}

impl FromStr for Ntsc {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "non_drop" | "ndf" => Ok(Self::NonDrop),
            "drop" | "df" => Ok(Self::Drop),
            _ => Err(Error::InvalidNtscTag(s.to_string())),
        }
    }
}

/// Whether an NTSC request may snap a nearby value to the true NTSC rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CoerceNtsc {
    /// Non-whole values must already be exact NTSC rates.
    #[default]
    Never,
    /// Always snap to `round(value) * 1000/1001`.
    Always,
    /// Snap only when the whole part of the value matches the whole part of
    /// the NTSC candidate; otherwise keep the value as a non-NTSC rate.
    IfTrunc,
}

/// Any value a [`Framerate`] can be built from.
#[derive(Debug, Clone, PartialEq)]
pub enum RateSource {
    /// An integer, float or rational.
    Number(Number),
    /// A string such as `"24"`, `"23.98"` or `"24000/1001"`.
    Text(String),
}

impl RateSource {
    /// The exact value and whether it was given without float imprecision.
    fn resolve(&self) -> Result<(Rational, bool)> {
        match self {
            Self::Number(n) => Ok((n.to_rational()?, n.is_exact())),
            Self::Text(s) => {
                let parsed = parse_number(s).map_err(|_| Error::unrecognized(s))?;
                Ok((parsed.value(), parsed.is_exact()))
            }
        }
    }
}

impl fmt::Display for RateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<Number> for RateSource {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for RateSource {
    fn from(n: i64) -> Self {
        Self::Number(Number::Int(n))
    }
}

impl From<i32> for RateSource {
    fn from(n: i32) -> Self {
        Self::Number(Number::Int(i64::from(n)))
    }
}

impl From<f64> for RateSource {
    fn from(f: f64) -> Self {
        Self::Number(Number::Float(f))
    }
}

impl From<Rational> for RateSource {
    fn from(r: Rational) -> Self {
        Self::Number(Number::Rational(r))
    }
}

impl From<&str> for RateSource {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RateSource {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// An exact playback rate with NTSC framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "FramerateParts", into = "FramerateParts")
)]
pub struct Framerate {
    playback: Rational,
    ntsc: Ntsc,
}

/// Serialized form of a [`Framerate`], validated on the way back in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct FramerateParts {
    playback: Rational,
    ntsc: Ntsc,
}

#[cfg(feature = "serde")]
impl TryFrom<FramerateParts> for Framerate {
    type Error = Error;

    fn try_from(parts: FramerateParts) -> Result<Self> {
        let rate = Self::new(parts.playback, parts.ntsc, CoerceNtsc::Never)?;
        // A whole playback with an NTSC tag would otherwise be read as a timebase.
        if rate.playback != parts.playback {
            return Err(Error::InvalidNtscRate(format!(
                "{} tagged {}",
                parts.playback, parts.ntsc
            )));
        }
        Ok(rate)
    }
}

#[cfg(feature = "serde")]
impl From<Framerate> for FramerateParts {
    fn from(rate: Framerate) -> Self {
        Self {
            playback: rate.playback,
            ntsc: rate.ntsc,
        }
    }
}

impl Framerate {
    /// Build a framerate from a number or string.
    ///
    /// With `ntsc` set, a whole input is read as the timebase (`24` becomes
    /// `24000/1001`). Non-whole inputs must be exact NTSC values unless
    /// `coerce` allows snapping.
    ///
    /// # Errors
    ///
    /// - [`Error::CoerceRequiresNtsc`] for [`CoerceNtsc::Always`] without NTSC
    /// - [`Error::NonPositiveRate`] for zero or negative values
    /// - [`Error::InvalidNtscRate`] when the value is not an NTSC rate
    /// - [`Error::BadDropRate`] when drop-frame is requested for a timebase
    ///   not divisible by 30
    /// - [`Error::ImpreciseInput`] for a non-whole float without NTSC
    /// - [`Error::UnrecognizedFormat`] for strings that are not numbers
    pub fn new(input: impl Into<RateSource>, ntsc: Ntsc, coerce: CoerceNtsc) -> Result<Self> {
        let input = input.into();
        if coerce == CoerceNtsc::Always && ntsc == Ntsc::None {
            return Err(Error::CoerceRequiresNtsc);
        }

        let (value, exact) = input.resolve()?;
        if !value.is_positive() {
            return Err(Error::NonPositiveRate(input.to_string()));
        }

        if ntsc.is_ntsc() {
            if let Some(rate) = Self::resolve_ntsc(value, ntsc, coerce, &input)? {
                return Ok(rate);
            }
        }

        if !exact {
            return Err(Error::ImpreciseInput(input.to_string()));
        }
        Ok(Self {
            playback: value,
            ntsc: Ntsc::None,
        })
    }

    /// Shorthand for an exact non-NTSC rate.
    pub fn exact(playback: Rational) -> Result<Self> {
        Self::new(playback, Ntsc::None, CoerceNtsc::Never)
    }

    /// Shorthand for a rate from its whole timebase.
    ///
    /// `from_timebase(30, Ntsc::Drop)` is 29.97 drop-frame.
    pub fn from_timebase(timebase: i64, ntsc: Ntsc) -> Result<Self> {
        Self::new(timebase, ntsc, CoerceNtsc::Never)
    }

    /// Parse a rate string using the coercion setting from `config`.
    ///
    /// Accepts plain numbers as well as the rendered form:
    /// `"24"`, `"<24.0 fps>"`, `"23.98 NTSC"`, `"<29.97 NTSC DF>"`.
    pub fn parse(input: &str, config: &VtcConfig) -> Result<Self> {
        let body = input.trim().trim_start_matches('<').trim_end_matches('>');
        let mut words = body.split_whitespace();
        let value = words.next().ok_or_else(|| Error::unrecognized(input))?;

        let mut ntsc = Ntsc::None;
        for word in words {
            ntsc = match (word.to_ascii_uppercase().as_str(), ntsc) {
                ("FPS", Ntsc::None) => Ntsc::None,
                ("NTSC", Ntsc::None) => Ntsc::NonDrop,
                ("NDF", Ntsc::NonDrop) => Ntsc::NonDrop,
                ("DF", Ntsc::NonDrop) => Ntsc::Drop,
                _ => return Err(Error::unrecognized(input)),
            };
        }

        let coerce = if ntsc.is_ntsc() {
            config.coerce_ntsc
        } else {
            CoerceNtsc::Never
        };
        Self::new(value, ntsc, coerce)
    }

    /// Returns `Ok(None)` when [`CoerceNtsc::IfTrunc`] declines to snap and
    /// the value should be kept as a plain rate.
    fn resolve_ntsc(
        value: Rational,
        ntsc: Ntsc,
        coerce: CoerceNtsc,
        input: &RateSource,
    ) -> Result<Option<Self>> {
        let timebase = value.round_closest();
        if timebase <= 0 {
            return Err(Error::InvalidNtscRate(input.to_string()));
        }
        let candidate = Rational::from_integer(timebase)
            .checked_mul(Rational::new(1000, 1001)?)?;

        if !value.is_integer() && value != candidate {
            match coerce {
                CoerceNtsc::Always => {}
                CoerceNtsc::IfTrunc if value.trunc() == candidate.trunc() => {}
                CoerceNtsc::IfTrunc => {
                    tracing::debug!(%input, "value kept as a non-NTSC rate");
                    return Ok(None);
                }
                CoerceNtsc::Never => return Err(Error::InvalidNtscRate(input.to_string())),
            }
            tracing::debug!(%input, playback = %candidate, "coerced to NTSC rate");
        }

        if ntsc == Ntsc::Drop && timebase % 30 != 0 {
            return Err(Error::BadDropRate(input.to_string()));
        }

        Ok(Some(Self {
            playback: candidate,
            ntsc,
        }))
    }

    /// Exact frames per second.
    pub fn playback(&self) -> Rational {
        self.playback
    }

    /// NTSC framing of this rate.
    pub fn ntsc(&self) -> Ntsc {
        self.ntsc
    }

    /// Whether this is an NTSC rate.
    pub fn is_ntsc(&self) -> bool {
        self.ntsc.is_ntsc()
    }

    /// Whether this rate uses drop-frame timecode.
    pub fn is_drop(&self) -> bool {
        self.ntsc == Ntsc::Drop
    }

    /// The rate timecode counts frames at.
    ///
    /// NTSC rates count at their rounded whole rate; other rates count at
    /// their exact playback rate.
    pub fn smpte_timebase(&self) -> Rational {
        if self.is_ntsc() {
            Rational::from_integer(self.playback.round_closest())
        } else {
            self.playback
        }
    }

    /// Whole frames per timecode second, used for `HH:MM:SS:FF` sections.
    ///
    /// Non-whole non-NTSC rates count at their nearest whole rate.
    pub(crate) fn timecode_frames(&self) -> i64 {
        self.smpte_timebase().round_closest().max(1)
    }

    /// Exact duration of one frame in seconds.
    pub fn frame_duration(&self) -> Result<Rational> {
        Ok(self.playback.recip()?)
    }

    /// Frame numbers skipped at the start of each non-tenth minute.
    ///
    /// `None` for non-drop rates.
    pub fn drop_frames_per_minute(&self) -> Option<i64> {
        if self.is_drop() {
            Some(self.timecode_frames() / 30 * 2)
        } else {
            None
        }
    }
}

impl fmt::Display for Framerate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fps = self.playback.to_f64();
        match self.ntsc {
            Ntsc::None => write!(f, "<{:?} fps>", fps),
            Ntsc::NonDrop if f.alternate() => write!(f, "<{:.2} NTSC NDF>", fps),
            Ntsc::NonDrop => write!(f, "<{:.2} NTSC>", fps),
            Ntsc::Drop => write!(f, "<{:.2} NTSC DF>", fps),
        }
    }
}

impl FromStr for Framerate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, &VtcConfig::default())
    }
}

impl TryFrom<Rational> for Framerate {
    type Error = Error;

    fn try_from(playback: Rational) -> Result<Self> {
        Self::exact(playback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn ratio(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn test_whole_rate() {
        let rate = Framerate::new(24, Ntsc::None, CoerceNtsc::Never).unwrap();
        assert_eq!(rate.playback(), Rational::from_integer(24));
        assert!(!rate.is_ntsc());
        assert_eq!(rate.smpte_timebase(), Rational::from_integer(24));
    }

    #[test]
    fn test_ntsc_from_timebase() {
        let rate = Framerate::new(24, Ntsc::NonDrop, CoerceNtsc::Never).unwrap();
        assert_eq!(rate.playback(), ratio(24000, 1001));
        assert_eq!(rate.smpte_timebase(), Rational::from_integer(24));
    }

    #[test]
    fn test_ntsc_exact_value_accepted() {
        let rate = Framerate::new("30000/1001", Ntsc::Drop, CoerceNtsc::Never).unwrap();
        assert_eq!(rate.playback(), ratio(30000, 1001));
        assert_eq!(rate.drop_frames_per_minute(), Some(2));
    }

    #[test]
    fn test_float_coerced_to_ntsc() {
        let rate = Framerate::new(23.98, Ntsc::NonDrop, CoerceNtsc::Always).unwrap();
        assert_eq!(rate.playback(), ratio(24000, 1001));

        let rate = Framerate::new("29.97", Ntsc::Drop, CoerceNtsc::IfTrunc).unwrap();
        assert_eq!(rate.playback(), ratio(30000, 1001));
    }

    #[test]
    fn test_float_without_coercion_rejected() {
        assert_matches!(
            Framerate::new(23.98, Ntsc::NonDrop, CoerceNtsc::Never),
            Err(Error::InvalidNtscRate(_))
        );
    }

    #[test]
    fn test_if_trunc_passes_through_exact_value() {
        // 23.4 rounds to 23, whose NTSC rate is 22.977: whole parts differ.
        let rate = Framerate::new("117/5", Ntsc::NonDrop, CoerceNtsc::IfTrunc).unwrap();
        assert!(!rate.is_ntsc());
        assert_eq!(rate.playback(), ratio(117, 5));

        assert_matches!(
            Framerate::new(23.4, Ntsc::NonDrop, CoerceNtsc::IfTrunc),
            Err(Error::ImpreciseInput(_))
        );
    }

    #[test]
    fn test_coerce_requires_ntsc() {
        assert_matches!(
            Framerate::new(24, Ntsc::None, CoerceNtsc::Always),
            Err(Error::CoerceRequiresNtsc)
        );
    }

    #[test]
    fn test_non_positive() {
        assert_matches!(
            Framerate::new(0, Ntsc::None, CoerceNtsc::Never),
            Err(Error::NonPositiveRate(_))
        );
        assert_matches!(
            Framerate::new("-24", Ntsc::NonDrop, CoerceNtsc::Never),
            Err(Error::NonPositiveRate(_))
        );
    }

    #[test]
    fn test_bad_drop_rate() {
        assert_matches!(
            Framerate::new(24, Ntsc::Drop, CoerceNtsc::Never),
            Err(Error::BadDropRate(_))
        );
    }

    #[test]
    fn test_imprecise_float() {
        assert_matches!(
            Framerate::new(23.98, Ntsc::None, CoerceNtsc::Never),
            Err(Error::ImpreciseInput(_))
        );
        assert_matches!(
            Framerate::new("23.98", Ntsc::None, CoerceNtsc::Never),
            Err(Error::ImpreciseInput(_))
        );
        // Whole floats are exact.
        assert!(Framerate::new(24.0, Ntsc::None, CoerceNtsc::Never).is_ok());
    }

    #[test]
    fn test_unrecognized_string() {
        assert_matches!(
            Framerate::new("fast", Ntsc::None, CoerceNtsc::Never),
            Err(Error::UnrecognizedFormat(_))
        );
    }

    #[test]
    fn test_ntsc_tag_parse() {
        assert_eq!("drop".parse::<Ntsc>().unwrap(), Ntsc::Drop);
        assert_eq!("non_drop".parse::<Ntsc>().unwrap(), Ntsc::NonDrop);
        assert_matches!("dropish".parse::<Ntsc>(), Err(Error::InvalidNtscTag(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(rates::f24().to_string(), "<24.0 fps>");
        assert_eq!(rates::f23_98().to_string(), "<23.98 NTSC>");
        assert_eq!(format!("{:#}", rates::f23_98()), "<23.98 NTSC NDF>");
        assert_eq!(rates::f29_97_df().to_string(), "<29.97 NTSC DF>");
        assert_eq!(rates::f59_94_ndf().to_string(), "<59.94 NTSC>");
    }

    #[test]
    fn test_parse_rendered_form() {
        let config = VtcConfig::default();
        assert_eq!(Framerate::parse("<24.0 fps>", &config).unwrap(), rates::f24());
        assert_eq!(Framerate::parse("23.98 NTSC", &config).unwrap(), rates::f23_98());
        assert_eq!(
            "<29.97 NTSC DF>".parse::<Framerate>().unwrap(),
            rates::f29_97_df()
        );
        assert_eq!(
            "<23.98 NTSC NDF>".parse::<Framerate>().unwrap(),
            rates::f23_98()
        );
        assert_matches!(
            Framerate::parse("24 DF", &config),
            Err(Error::UnrecognizedFormat(_))
        );
    }

    #[test]
    fn test_drop_frames_scale_with_timebase() {
        assert_eq!(rates::f29_97_df().drop_frames_per_minute(), Some(2));
        assert_eq!(rates::f59_94_df().drop_frames_per_minute(), Some(4));
        assert_eq!(rates::f119_88_df().drop_frames_per_minute(), Some(8));
        assert_eq!(rates::f29_97_ndf().drop_frames_per_minute(), None);
    }

    #[test]
    fn test_frame_duration() {
        assert_eq!(rates::f23_98().frame_duration().unwrap(), ratio(1001, 24000));
        assert_eq!(rates::f25().frame_duration().unwrap(), ratio(1, 25));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let json = serde_json::to_string(&rates::f29_97_df()).unwrap();
        assert_eq!(
            serde_json::from_str::<Framerate>(&json).unwrap(),
            rates::f29_97_df()
        );

        let whole_with_tag = r#"{"playback":[24,1],"ntsc":"non_drop"}"#;
        assert!(serde_json::from_str::<Framerate>(whole_with_tag).is_err());

        let bad_drop = r#"{"playback":[24000,1001],"ntsc":"drop"}"#;
        assert!(serde_json::from_str::<Framerate>(bad_drop).is_err());
    }
}
