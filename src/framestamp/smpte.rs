//! SMPTE timecode sections and drop-frame numbering.
//!
//! Drop-frame timecode skips frame numbers, not frames: the first
//! `drop` numbers of every minute are missing except on minutes divisible
//! by ten. `drop` is 2 per 30 fps of timebase (2 at 29.97, 4 at 59.94).

use std::fmt;

use vtc_parser::TimecodeSections;

use crate::error::{Error, Result};
use crate::framerate::Framerate;

/// The SMPTE components of a framestamp.
///
/// `hours` is not wrapped at 24.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sections {
    /// Whether the position is before zero.
    pub negative: bool,
    /// Hours.
    pub hours: i64,
    /// Minutes, 0-59 once normalized.
    pub minutes: i64,
    /// Seconds, 0-59 once normalized.
    pub seconds: i64,
    /// Frames, 0 to timebase-1 once normalized.
    pub frames: i64,
}

impl Sections {
    /// Sections from `HH:MM:SS:FF` values.
    pub fn new(hours: i64, minutes: i64, seconds: i64, frames: i64) -> Self {
        Self {
            negative: false,
            hours,
            minutes,
            seconds,
            frames,
        }
    }

    /// Flip the sign.
    pub fn negated(self) -> Self {
        Self {
            negative: !self.negative,
            ..self
        }
    }
}

impl From<TimecodeSections> for Sections {
    fn from(tc: TimecodeSections) -> Self {
        Self {
            negative: tc.negative,
            hours: tc.hours,
            minutes: tc.minutes,
            seconds: tc.seconds,
            frames: tc.frames,
        }
    }
}

impl fmt::Display for Sections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(
            f,
            "{}{:02}:{:02}:{:02}:{:02}",
            sign, self.hours, self.minutes, self.seconds, self.frames
        )
    }
}

fn narrow(value: i128) -> Result<i64> {
    i64::try_from(value).map_err(|_| vtc_common::RationalError::Overflow.into())
}

/// Frames per ten-minute block at a drop rate: `round(playback * 600)`.
fn frames_per_ten_minutes(rate: &Framerate) -> i128 {
    let playback = rate.playback();
    let num = i128::from(playback.numer()) * 600;
    let den = i128::from(playback.denom());
    (2 * num + den) / (2 * den)
}

/// Carry out-of-range sections upward, e.g. `00:00:59:30` at 30 fps
/// becomes `00:01:00:00`.
fn normalize(sections: &Sections, timebase: i64) -> Result<Sections> {
    let timebase = i128::from(timebase);
    let total = ((i128::from(sections.hours) * 60 + i128::from(sections.minutes)) * 60
        + i128::from(sections.seconds))
        * timebase
        + i128::from(sections.frames);

    let whole_seconds = total / timebase;
    Ok(Sections {
        negative: sections.negative,
        hours: narrow(whole_seconds / 3600)?,
        minutes: narrow(whole_seconds / 60 % 60)?,
        seconds: narrow(whole_seconds % 60)?,
        frames: narrow(total % timebase)?,
    })
}

/// Signed frame count for a set of sections at `rate`.
///
/// # Errors
///
/// Returns [`Error::BadDropFrames`] when a drop-frame timecode names a
/// skipped frame number.
pub(crate) fn frames_from_sections(sections: &Sections, rate: &Framerate) -> Result<i64> {
    let timebase = rate.timecode_frames();
    let normalized = normalize(sections, timebase)?;
    let Sections {
        hours,
        minutes,
        seconds,
        frames,
        ..
    } = normalized;

    let mut count = ((i128::from(hours) * 60 + i128::from(minutes)) * 60 + i128::from(seconds))
        * i128::from(timebase)
        + i128::from(frames);

    if let Some(drop) = rate.drop_frames_per_minute() {
        if seconds == 0 && minutes % 10 != 0 && frames < drop {
            return Err(Error::BadDropFrames(sections.to_string()));
        }
        let total_minutes = i128::from(hours) * 60 + i128::from(minutes);
        count -= i128::from(drop) * (total_minutes - total_minutes / 10);
    }

    narrow(if sections.negative { -count } else { count })
}

/// Sections for a signed frame count at `rate`.
pub(crate) fn sections_from_frames(frames: i64, rate: &Framerate) -> Sections {
    let timebase = i128::from(rate.timecode_frames());
    let mut count = i128::from(frames).abs();

    if let Some(drop) = rate.drop_frames_per_minute() {
        let drop = i128::from(drop);
        let per_ten = frames_per_ten_minutes(rate);
        let per_minute = timebase * 60 - drop;
        let blocks = count / per_ten;
        let rest = count % per_ten;
        count += drop * 9 * blocks;
        if rest > drop {
            count += drop * ((rest - drop) / per_minute);
        }
    }

    let whole_seconds = count / timebase;
    // |i64| frames fit comfortably once divided by a timebase >= 1.
    Sections {
        negative: frames < 0,
        hours: (whole_seconds / 3600) as i64,
        minutes: (whole_seconds / 60 % 60) as i64,
        seconds: (whole_seconds % 60) as i64,
        frames: (count % timebase) as i64,
    }
}

/// Render sections as `[-]HH:MM:SS:FF`, with `;` before the frames for
/// drop-frame rates.
pub(crate) fn format_timecode(sections: &Sections, rate: &Framerate) -> String {
    let sign = if sections.negative { "-" } else { "" };
    let separator = if rate.is_drop() { ';' } else { ':' };
    let width = (rate.timecode_frames() - 1).max(0).to_string().len().max(2);
    format!(
        "{}{:02}:{:02}:{:02}{}{:0width$}",
        sign,
        sections.hours,
        sections.minutes,
        sections.seconds,
        separator,
        sections.frames,
        width = width
    )
}
