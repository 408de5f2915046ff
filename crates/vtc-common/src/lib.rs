//! vtc-common: exact arithmetic shared across vtc.
//!
//! This crate provides the value types every other vtc crate builds on:
//!
//! - **Rational**: a reduced 64-bit fraction with overflow-checked arithmetic
//! - **Number**: an integer/float/rational input union
//! - **Round**: rounding modes for turning exact values into whole numbers
//! - **Error Handling**: [`RationalError`] and a result alias
//!
//! # Examples
//!
//! ```
//! use vtc_common::{Rational, Round};
//!
//! let rate = Rational::new(24000, 1001)?;
//! let seconds = Rational::from_integer(86400).checked_div(rate)?;
//! assert_eq!(seconds, Rational::new(18018, 5)?);
//! assert_eq!(seconds.round(Round::Floor)?, 3603);
//! # Ok::<(), vtc_common::RationalError>(())
//! ```

pub mod error;
pub mod number;
pub mod rational;
pub mod round;

pub use error::{RationalError, Result};
pub use number::Number;
pub use rational::Rational;
pub use round::Round;
