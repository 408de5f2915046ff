//! Runtime strings (`HH:MM:SS.fff`): real elapsed time, not frame numbers.

use vtc_common::Rational;

use crate::config::MAX_RUNTIME_PRECISION;

/// Render `seconds` as `[-]HH:MM:SS.f`, rounded to `precision` places.
///
/// Trailing zeros are trimmed but at least one fractional digit is kept.
pub(crate) fn format_runtime(seconds: Rational, precision: usize) -> String {
    let precision = precision.min(MAX_RUNTIME_PRECISION);
    // precision <= 18, so the scale fits i64 and the products fit i128.
    let scale = 10_i128.pow(precision as u32);

    let num = i128::from(seconds.numer()).abs() * scale;
    let den = i128::from(seconds.denom());
    let scaled = (2 * num + den) / (2 * den);

    let whole = scaled / scale;
    let fraction = format!("{:0width$}", scaled % scale, width = precision);
    let fraction = fraction.trim_end_matches('0');
    let fraction = if fraction.is_empty() { "0" } else { fraction };

    let sign = if seconds.is_negative() { "-" } else { "" };
    format!(
        "{}{:02}:{:02}:{:02}.{}",
        sign,
        whole / 3600,
        whole / 60 % 60,
        whole % 60,
        fraction
    )
}
