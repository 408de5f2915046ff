//! Defaults for string parsing and formatting.

use vtc_common::Round;

use crate::framerate::CoerceNtsc;
use crate::framestamp::FilmFormat;

/// Default runtime precision: nanoseconds.
pub const DEFAULT_RUNTIME_PRECISION: usize = 9;

/// Largest supported runtime precision.
pub const MAX_RUNTIME_PRECISION: usize = 18;

/// Configuration for parsing and formatting.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use vtc::config::VtcConfig;
/// use vtc::{FilmFormat, Round};
///
/// let config = VtcConfig::builder()
///     .round(Round::Floor)
///     .film_format(FilmFormat::Ff16mm)
///     .build();
/// assert_eq!(config.runtime_precision, 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VtcConfig {
    /// How seconds-like strings snap to a frame.
    /// Default: Closest
    pub round: Round,

    /// Film gauge for feet+frames strings.
    /// Default: 35mm 4-perf
    pub film_format: FilmFormat,

    /// Decimal places kept by runtime strings.
    /// Default: 9
    pub runtime_precision: usize,

    /// NTSC coercion applied when parsing a rate string tagged NTSC.
    /// Default: IfTrunc, so `"23.98 NTSC"` is read as 24000/1001.
    pub coerce_ntsc: CoerceNtsc,
}

impl Default for VtcConfig {
    fn default() -> Self {
        Self {
            round: Round::default(),
            film_format: FilmFormat::default(),
            runtime_precision: DEFAULT_RUNTIME_PRECISION,
            coerce_ntsc: CoerceNtsc::IfTrunc,
        }
    }
}

impl VtcConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> VtcConfigBuilder {
        VtcConfigBuilder::default()
    }
}

/// Builder for `VtcConfig`.
#[derive(Debug, Clone, Default)]
pub struct VtcConfigBuilder {
    round: Option<Round>,
    film_format: Option<FilmFormat>,
    runtime_precision: Option<usize>,
    coerce_ntsc: Option<CoerceNtsc>,
}

impl VtcConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rounding mode for seconds-like input.
    ///
    /// `Round::Off` makes off-frame values an error instead of snapping.
    pub fn round(mut self, round: Round) -> Self {
        self.round = Some(round);
        self
    }

    /// Set the film gauge used for feet+frames.
    pub fn film_format(mut self, format: FilmFormat) -> Self {
        self.film_format = Some(format);
        self
    }

    /// Set the runtime precision, clamped to 18 places.
    pub fn runtime_precision(mut self, places: usize) -> Self {
        self.runtime_precision = Some(places.min(MAX_RUNTIME_PRECISION));
        self
    }

    /// Set the NTSC coercion used for NTSC-tagged rate strings.
    pub fn coerce_ntsc(mut self, coerce: CoerceNtsc) -> Self {
        self.coerce_ntsc = Some(coerce);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> VtcConfig {
        VtcConfig {
            round: self.round.unwrap_or_default(),
            film_format: self.film_format.unwrap_or_default(),
            runtime_precision: self
                .runtime_precision
                .unwrap_or(DEFAULT_RUNTIME_PRECISION),
            coerce_ntsc: self.coerce_ntsc.unwrap_or(CoerceNtsc::IfTrunc),
        }
    }
}
