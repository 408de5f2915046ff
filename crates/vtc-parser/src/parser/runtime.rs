//! Runtime recognizer (`HH:MM:SS.fff`).

use vtc_common::Rational;

use super::{lex, section};
use crate::error::ParseError;
use crate::lexer::Token;
use crate::model::{Format, RuntimeParts};

const MAX_SECTIONS: usize = 3;

/// Parse a runtime string such as `"01:00:03.6036"` or `"-03.5"`.
///
/// Only the seconds section may carry a fraction.
pub fn parse_runtime(input: &str) -> Result<RuntimeParts, ParseError> {
    let lexer = lex(input, Format::Runtime)?;
    let mut cursor = lexer.cursor();
    let unrecognized = || ParseError::unrecognized(input, Format::Runtime);

    let negative = cursor.sign();
    let mut whole_sections = vec![cursor.digits().ok_or_else(unrecognized)?];
    while cursor.eat(Token::Colon) {
        whole_sections.push(cursor.digits().ok_or_else(unrecognized)?);
    }
    let fraction = if cursor.eat(Token::Dot) {
        Some(cursor.digits().ok_or_else(unrecognized)?)
    } else {
        None
    };

    if !cursor.is_done() || whole_sections.len() > MAX_SECTIONS {
        return Err(unrecognized());
    }

    let seconds_text = whole_sections.pop().ok_or_else(unrecognized)?;
    let seconds = match fraction {
        Some(frac) => Rational::from_decimal_str(&format!("{seconds_text}.{frac}"))?,
        None => Rational::from_integer(section(seconds_text)?),
    };
    let minutes = whole_sections.pop().map(section).transpose()?.unwrap_or(0);
    let hours = whole_sections.pop().map(section).transpose()?.unwrap_or(0);

    Ok(RuntimeParts {
        negative,
        hours,
        minutes,
        seconds,
    })
}
