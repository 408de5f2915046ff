//! Shared helpers for integration tests.
//!
//! Installs a `tracing` subscriber once per test binary (filter with
//! `RUST_LOG=vtc=debug`) and provides short constructors for the values
//! most tests build.

#![allow(dead_code)]

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use vtc::{Framerate, Framestamp, OutType, Range};

static TRACING: Once = Once::new();

/// Install a test-writer subscriber, ignoring repeat calls.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A framestamp from a timecode or frame count.
pub fn stamp(input: impl Into<vtc::FramesSource>, rate: Framerate) -> Framestamp {
    init_tracing();
    Framestamp::with_frames(input, rate).expect("valid framestamp")
}

/// A range between two timecodes.
pub fn range(in_tc: &str, out_tc: &str, out_type: OutType, rate: Framerate) -> Range {
    Range::new(stamp(in_tc, rate), stamp(out_tc, rate), out_type).expect("valid range")
}
