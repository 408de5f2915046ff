//! # vtc
//!
//! Exact timecode arithmetic for video and film editorial work.
//!
//! Positions are stored as exact rational seconds, so converting between
//! frames, SMPTE timecode, runtime, feet+frames and Premiere ticks never
//! drifts, including at NTSC and drop-frame rates.
//!
//! ## Quick Start
//!
//! ```
//! use vtc::{rates, Framestamp, OutType, Range};
//!
//! let stamp = Framestamp::with_frames("01:00:00;00", rates::f29_97_df()).unwrap();
//! assert_eq!(stamp.frames(), 107892);
//! assert_eq!(stamp.runtime(9), "00:59:59.9964");
//!
//! let out = Framestamp::with_frames("01:00:10;00", rates::f29_97_df()).unwrap();
//! let range = Range::new(stamp, out, OutType::Exclusive).unwrap();
//! assert_eq!(range.duration().unwrap().timecode(), "00:00:10;00");
//! ```

pub mod config;
pub mod encode;
pub mod error;
pub mod framerate;
pub mod framestamp;
pub mod range;

pub use config::VtcConfig;
pub use encode::{FramestampRecord, RangeRecord};
pub use error::{Error, Result};
pub use framerate::{rates, CoerceNtsc, Framerate, Ntsc, RateSource};
pub use framestamp::{
    FeetAndFrames, FilmFormat, FramesSource, Framestamp, Inherit, SecondsSource, Sections,
    PREMIERE_TICKS_PER_SECOND,
};
pub use range::{OutType, Range};
pub use vtc_common::{Number, Rational, RationalError, Round};
pub use vtc_parser::{Format, ParseError};
