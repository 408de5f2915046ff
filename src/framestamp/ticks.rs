//! Adobe Premiere Pro ticks.

use vtc_common::Rational;

use crate::error::Result;

/// Premiere Pro ticks in one second.
pub const PREMIERE_TICKS_PER_SECOND: i64 = 254_016_000_000;

/// Seconds for a tick count.
pub(crate) fn ticks_to_seconds(ticks: i64) -> Result<Rational> {
    Ok(Rational::new(ticks, PREMIERE_TICKS_PER_SECOND)?)
}

/// Nearest whole tick count for `seconds`.
pub(crate) fn seconds_to_ticks(seconds: Rational) -> Result<i64> {
    let ticks = seconds.checked_mul(Rational::from_integer(PREMIERE_TICKS_PER_SECOND))?;
    Ok(ticks.round_closest())
}
