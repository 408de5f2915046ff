//! # vtc-parser
//!
//! Recognizers for the text formats used in editorial timecode work.
//!
//! Each recognizer turns a string into raw sections without knowing the
//! framerate; turning sections into an exact position is done by `vtc`.
//!
//! | Format | Example | Function |
//! |--------|---------|----------|
//! | Integer / decimal / ratio | `86400`, `23.976`, `24000/1001` | [`parse_number`] |
//! | SMPTE timecode | `01:00:00:00`, `01:00:00;00` | [`parse_timecode`] |
//! | Runtime | `01:00:03.6036` | [`parse_runtime`] |
//! | Feet+frames | `5400+00` | [`parse_feet_and_frames`] |
//!
//! ## Quick Start
//!
//! ```
//! use vtc_parser::{parse_timecode, recognize, Format};
//!
//! let tc = parse_timecode("01:00:00;00").unwrap();
//! assert_eq!(tc.hours, 1);
//! assert!(tc.drop_separator);
//!
//! assert_eq!(recognize("5400+00"), Some(Format::FeetAndFrames));
//! ```

pub mod error;
pub mod lexer;
pub mod model;
mod parser;

pub use error::ParseError;
pub use model::{FeetAndFramesParts, Format, ParsedNumber, RuntimeParts, TimecodeSections};
pub use parser::{parse_feet_and_frames, parse_number, parse_runtime, parse_timecode, recognize};
