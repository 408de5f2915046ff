//! Feet+frames recognizer (`5400+00`).

use super::{lex, section};
use crate::error::ParseError;
use crate::lexer::Token;
use crate::model::{FeetAndFramesParts, Format};

/// Parse a feet+frames string such as `"5400+00"` or `"-12+15"`.
pub fn parse_feet_and_frames(input: &str) -> Result<FeetAndFramesParts, ParseError> {
    let lexer = lex(input, Format::FeetAndFrames)?;
    let mut cursor = lexer.cursor();
    let unrecognized = || ParseError::unrecognized(input, Format::FeetAndFrames);

    let negative = cursor.sign();
    let feet = cursor.digits().ok_or_else(unrecognized)?;
    if !cursor.eat(Token::Plus) {
        return Err(unrecognized());
    }
    let frames = cursor.digits().ok_or_else(unrecognized)?;
    if !cursor.is_done() {
        return Err(unrecognized());
    }

    Ok(FeetAndFramesParts {
        negative,
        feet: section(feet)?,
        frames: section(frames)?,
    })
}
