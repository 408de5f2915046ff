//! SMPTE timecode recognizer.
//!
//! Accepts one to four digit sections separated by `:` or `;`, with an
//! optional leading `-`. Sections fill from the right, so `"1:02"` is one
//! second and two frames.

use super::{lex, section};
use crate::error::ParseError;
use crate::lexer::Token;
use crate::model::{Format, TimecodeSections};

/// Maximum number of sections: hours, minutes, seconds, frames.
const MAX_SECTIONS: usize = 4;

/// Parse a (possibly partial) SMPTE timecode string.
pub fn parse_timecode(input: &str) -> Result<TimecodeSections, ParseError> {
    let lexer = lex(input, Format::Timecode)?;
    let mut cursor = lexer.cursor();
    let unrecognized = || ParseError::unrecognized(input, Format::Timecode);

    let negative = cursor.sign();
    let mut values = Vec::with_capacity(MAX_SECTIONS);
    let mut drop_separator = false;

    values.push(section(cursor.digits().ok_or_else(unrecognized)?)?);
    while let Some(separator) = cursor.separator() {
        drop_separator |= separator == Token::Semicolon;
        values.push(section(cursor.digits().ok_or_else(unrecognized)?)?);
    }

    if !cursor.is_done() || values.len() > MAX_SECTIONS {
        return Err(unrecognized());
    }

    // Right-align into [hours, minutes, seconds, frames].
    let mut aligned = [0_i64; MAX_SECTIONS];
    aligned[MAX_SECTIONS - values.len()..].copy_from_slice(&values);
    let [hours, minutes, seconds, frames] = aligned;

    Ok(TimecodeSections {
        negative,
        hours,
        minutes,
        seconds,
        frames,
        drop_separator,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_full_timecode() {
        let tc = parse_timecode("01:02:03:04").unwrap();
        assert_eq!(
            tc,
            TimecodeSections {
                negative: false,
                hours: 1,
                minutes: 2,
                seconds: 3,
                frames: 4,
                drop_separator: false,
            }
        );
    }

    #[test]
    fn test_drop_separator() {
        let tc = parse_timecode("01:00:00;00").unwrap();
        assert!(tc.drop_separator);
        assert_eq!(tc.hours, 1);
    }

    #[test]
    fn test_partial_timecode() {
        let tc = parse_timecode("04").unwrap();
        assert_eq!((tc.hours, tc.minutes, tc.seconds, tc.frames), (0, 0, 0, 4));

        let tc = parse_timecode("1:02").unwrap();
        assert_eq!((tc.hours, tc.minutes, tc.seconds, tc.frames), (0, 0, 1, 2));

        let tc = parse_timecode("3:01:02").unwrap();
        assert_eq!((tc.hours, tc.minutes, tc.seconds, tc.frames), (0, 3, 1, 2));
    }

    #[test]
    fn test_negative_timecode() {
        let tc = parse_timecode("-01:00:00:00").unwrap();
        assert!(tc.negative);
        assert_eq!(tc.hours, 1);
    }

    #[test]
    fn test_out_of_range_sections_kept() {
        let tc = parse_timecode("00:59:59:24").unwrap();
        assert_eq!(tc.frames, 24);
        let tc = parse_timecode("00:00:75:00").unwrap();
        assert_eq!(tc.seconds, 75);
    }

    #[test]
    fn test_large_hours() {
        let tc = parse_timecode("120:00:00:00").unwrap();
        assert_eq!(tc.hours, 120);
    }

    #[test]
    fn test_rejects_malformed() {
        for input in [
            "01:00:00:00:00",
            "01::00",
            "01:00:",
            ":01",
            "01:00.5",
            "5400+00",
            "-",
        ] {
            assert_matches!(
                parse_timecode(input),
                Err(ParseError::Unrecognized { .. }),
                "{input} should not parse as timecode"
            );
        }
    }
}
