//! Numeric string recognizer: integers, decimals and ratios.

use vtc_common::Rational;

use super::{lex, section};
use crate::error::ParseError;
use crate::lexer::Token;
use crate::model::{Format, ParsedNumber};

/// Parse `"24"`, `"-23.976"`, `".5"` or `"24000/1001"`.
pub fn parse_number(input: &str) -> Result<ParsedNumber, ParseError> {
    let lexer = lex(input, Format::Decimal)?;
    let mut cursor = lexer.cursor();
    let unrecognized = || ParseError::unrecognized(input, Format::Decimal);

    let negative = cursor.sign();
    let whole = cursor.digits();

    let number = if whole.is_some() && cursor.eat(Token::Slash) {
        let den_negative = cursor.sign();
        let den = cursor.digits().ok_or_else(unrecognized)?;
        let num = signed(section(whole.unwrap_or_default())?, negative);
        let den = signed(section(den)?, den_negative);
        ParsedNumber::Ratio(Rational::new(num, den)?)
    } else if cursor.eat(Token::Dot) {
        let frac = cursor.digits().ok_or_else(unrecognized)?;
        let sign = if negative { "-" } else { "" };
        let text = format!("{sign}{}.{frac}", whole.unwrap_or("0"));
        ParsedNumber::Decimal(Rational::from_decimal_str(&text)?)
    } else {
        let whole = whole.ok_or_else(unrecognized)?;
        ParsedNumber::Integer(signed(section(whole)?, negative))
    };

    if !cursor.is_done() {
        return Err(unrecognized());
    }
    Ok(number)
}

fn signed(value: i64, negative: bool) -> i64 {
    if negative {
        -value
    } else {
        value
    }
}
