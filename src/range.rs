//! Frame ranges with an explicit out-point convention.
//!
//! An exclusive range's `out` is the first frame after the range; an
//! inclusive range's `out` is its last frame. Containment and overlap are
//! always computed on the exclusive basis, so `[00:00:00:00, 00:00:01:00)`
//! and `[00:00:00:00, 00:00:00:23]` at 24 fps are the same 24 frames.

use std::fmt;

use vtc_common::{Rational, Round};

use crate::error::{Error, Result};
use crate::framerate::Framerate;
use crate::framestamp::{FramesSource, Framestamp, Inherit};

/// Whether a range's out point is its last frame or the frame after it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OutType {
    /// `out` is the last frame in the range.
    Inclusive,
    /// `out` is the first frame after the range.
    #[default]
    Exclusive,
}

impl fmt::Display for OutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inclusive => write!(f, "inclusive"),
            Self::Exclusive => write!(f, "exclusive"),
        }
    }
}

/// A span of frames at one framerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "crate::encode::RangeRecord",
        into = "crate::encode::RangeRecord"
    )
)]
pub struct Range {
    in_point: Framestamp,
    out_point: Framestamp,
    out_type: OutType,
    /// `out_point` on the exclusive basis, computed once at construction.
    end: Framestamp,
}

fn one_frame(rate: Framerate) -> Result<Framestamp> {
    Framestamp::with_frames(1, rate)
}

/// Resolve a field both operands carry, using `policy` when they differ.
fn pick<T: PartialEq>(left: T, right: T, policy: Option<Inherit>, mismatch: Error) -> Result<T> {
    if left == right {
        return Ok(left);
    }
    match policy {
        Some(inherit) => Ok(inherit.pick(left, right)),
        None => Err(mismatch),
    }
}

impl Range {
    /// Create a range from two framestamps.
    ///
    /// # Errors
    ///
    /// - [`Error::MixedRate`] when the framestamps have different rates
    /// - [`Error::RangeOrder`] when the out point, taken as exclusive, is
    ///   before the in point
    pub fn new(in_point: Framestamp, out_point: Framestamp, out_type: OutType) -> Result<Self> {
        if in_point.rate() != out_point.rate() {
            return Err(Error::mixed_rate(in_point.rate(), out_point.rate()));
        }
        let end = match out_type {
            OutType::Exclusive => out_point,
            OutType::Inclusive => out_point.add(&one_frame(out_point.rate())?)?,
        };
        if end.seconds() < in_point.seconds() {
            return Err(Error::RangeOrder {
                in_point: in_point.timecode(),
                out_point: out_point.timecode(),
            });
        }
        Ok(Self {
            in_point,
            out_point,
            out_type,
            end,
        })
    }

    /// Create a range with the out point given as frames or a string at the
    /// in point's rate.
    pub fn with_out(
        in_point: Framestamp,
        out_point: impl Into<FramesSource>,
        out_type: OutType,
    ) -> Result<Self> {
        let out_point = Framestamp::with_frames(out_point, in_point.rate())?;
        Self::new(in_point, out_point, out_type)
    }

    /// Create a range from a start and a positive duration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDuration`] when `duration` is zero or negative.
    pub fn with_duration(
        start: Framestamp,
        duration: Framestamp,
        out_type: OutType,
    ) -> Result<Self> {
        if !duration.seconds().is_positive() {
            return Err(Error::InvalidDuration(duration.timecode()));
        }
        let end = start.add(&duration)?;
        Self::from_end(start, end, out_type)
    }

    /// Build from an exclusive end, converting to the requested out type.
    fn from_end(start: Framestamp, end: Framestamp, out_type: OutType) -> Result<Self> {
        let out_point = match out_type {
            OutType::Exclusive => end,
            OutType::Inclusive => end.sub(&one_frame(end.rate())?)?,
        };
        Self::new(start, out_point, out_type)
    }

    /// The first frame.
    pub fn in_point(&self) -> Framestamp {
        self.in_point
    }

    /// The out point, read according to [`Range::out_type`].
    pub fn out_point(&self) -> Framestamp {
        self.out_point
    }

    /// How the out point is read.
    pub fn out_type(&self) -> OutType {
        self.out_type
    }

    /// The first frame after the range.
    pub fn exclusive_out(&self) -> Framestamp {
        self.end
    }

    /// The framerate of both ends.
    pub fn rate(&self) -> Framerate {
        self.in_point.rate()
    }

    /// The same frames with an inclusive out point.
    pub fn with_inclusive_out(&self) -> Result<Self> {
        Self::from_end(self.in_point, self.end, OutType::Inclusive)
    }

    /// The same frames with an exclusive out point.
    pub fn with_exclusive_out(&self) -> Result<Self> {
        Self::from_end(self.in_point, self.end, OutType::Exclusive)
    }

    /// Length of the range.
    pub fn duration(&self) -> Result<Framestamp> {
        self.end.sub(&self.in_point)
    }

    /// Whether `stamp` falls inside the range. Works across framerates.
    pub fn contains(&self, stamp: &Framestamp) -> bool {
        let seconds = stamp.seconds();
        self.in_point.seconds() <= seconds && seconds < self.end.seconds()
    }

    /// Whether the ranges share any time. Touching ranges do not overlap.
    pub fn overlaps(&self, other: &Range) -> bool {
        self.in_point.seconds() < other.end.seconds()
            && other.in_point.seconds() < self.end.seconds()
    }

    /// The time both ranges cover.
    ///
    /// Ranges that touch intersect in a zero-length range at the touch
    /// point. `None` policies require the operands to agree.
    ///
    /// # Errors
    ///
    /// - [`Error::NoOverlap`] when there is a gap between the ranges
    /// - [`Error::MixedRate`] / [`Error::MixedOutType`] when the operands
    ///   differ and no policy was given
    pub fn intersection(
        &self,
        other: &Range,
        inherit_rate: Option<Inherit>,
        inherit_out_type: Option<Inherit>,
    ) -> Result<Self> {
        let (rate, out_type) = self.resolve_policies(other, inherit_rate, inherit_out_type)?;
        let start = self.in_point.seconds().max(other.in_point.seconds());
        let end = self.end.seconds().min(other.end.seconds());
        if end < start {
            return Err(Error::NoOverlap);
        }
        Self::from_seconds(start, end, rate, out_type)
    }

    /// The gap between two ranges.
    ///
    /// Ranges that touch are separated by a zero-length range.
    ///
    /// # Errors
    ///
    /// - [`Error::Overlap`] when the ranges share any time
    /// - [`Error::MixedRate`] / [`Error::MixedOutType`] when the operands
    ///   differ and no policy was given
    pub fn separation(
        &self,
        other: &Range,
        inherit_rate: Option<Inherit>,
        inherit_out_type: Option<Inherit>,
    ) -> Result<Self> {
        let (rate, out_type) = self.resolve_policies(other, inherit_rate, inherit_out_type)?;
        if self.overlaps(other) {
            return Err(Error::Overlap);
        }
        let (start, end) = if self.end.seconds() <= other.in_point.seconds() {
            (self.end.seconds(), other.in_point.seconds())
        } else {
            (other.end.seconds(), self.in_point.seconds())
        };
        Self::from_seconds(start, end, rate, out_type)
    }

    fn resolve_policies(
        &self,
        other: &Range,
        inherit_rate: Option<Inherit>,
        inherit_out_type: Option<Inherit>,
    ) -> Result<(Framerate, OutType)> {
        let rate = pick(
            self.rate(),
            other.rate(),
            inherit_rate,
            Error::mixed_rate(self.rate(), other.rate()),
        )?;
        let out_type = pick(
            self.out_type,
            other.out_type,
            inherit_out_type,
            Error::MixedOutType,
        )?;
        if self.rate() != other.rate() {
            tracing::debug!(left = %self.rate(), right = %other.rate(), kept = %rate, "mixed-rate range operation");
        }
        Ok((rate, out_type))
    }

    /// Snap exact bounds to frames at `rate`.
    fn from_seconds(
        start: Rational,
        end: Rational,
        rate: Framerate,
        out_type: OutType,
    ) -> Result<Self> {
        let start = Framestamp::with_seconds(start, rate, Round::Closest)?;
        let end = Framestamp::with_seconds(end, rate, Round::Closest)?;
        Self::from_end(start, end, out_type)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{} - {} :{} {}>",
            self.in_point.timecode(),
            self.out_point.timecode(),
            self.out_type,
            self.rate()
        )
    }
}
