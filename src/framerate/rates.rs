//! Common framerates.
//!
//! ```
//! use vtc::rates;
//!
//! assert_eq!(rates::f23_98().to_string(), "<23.98 NTSC>");
//! assert_eq!(rates::f29_97_df().drop_frames_per_minute(), Some(2));
//! ```

use vtc_common::Rational;

use super::{Framerate, Ntsc};

const fn whole(fps: i64) -> Framerate {
    Framerate {
        playback: Rational::from_integer(fps),
        ntsc: Ntsc::None,
    }
}

const fn ntsc(timebase: i64, framing: Ntsc) -> Framerate {
    Framerate {
        playback: Rational::new_const(timebase * 1000, 1001),
        ntsc: framing,
    }
}

/// 23.98 NTSC (24000/1001), the standard HD film rate.
pub const fn f23_98() -> Framerate {
    ntsc(24, Ntsc::NonDrop)
}

/// 24 fps, true film rate.
pub const fn f24() -> Framerate {
    whole(24)
}

/// 25 fps, PAL.
pub const fn f25() -> Framerate {
    whole(25)
}

/// 29.97 NTSC non-drop.
pub const fn f29_97_ndf() -> Framerate {
    ntsc(30, Ntsc::NonDrop)
}

/// 29.97 NTSC drop-frame.
pub const fn f29_97_df() -> Framerate {
    ntsc(30, Ntsc::Drop)
}

/// 30 fps.
pub const fn f30() -> Framerate {
    whole(30)
}

/// 47.95 NTSC.
pub const fn f47_95() -> Framerate {
    ntsc(48, Ntsc::NonDrop)
}

/// 48 fps.
pub const fn f48() -> Framerate {
    whole(48)
}

/// 50 fps.
pub const fn f50() -> Framerate {
    whole(50)
}

/// 59.94 NTSC non-drop.
pub const fn f59_94_ndf() -> Framerate {
    ntsc(60, Ntsc::NonDrop)
}

/// 59.94 NTSC drop-frame.
pub const fn f59_94_df() -> Framerate {
    ntsc(60, Ntsc::Drop)
}

/// 60 fps.
pub const fn f60() -> Framerate {
    whole(60)
}

/// 119.88 NTSC non-drop.
pub const fn f119_88_ndf() -> Framerate {
    ntsc(120, Ntsc::NonDrop)
}

/// 119.88 NTSC drop-frame.
pub const fn f119_88_df() -> Framerate {
    ntsc(120, Ntsc::Drop)
}

/// 120 fps.
pub const fn f120() -> Framerate {
    whole(120)
}

/// Every named rate, slowest first.
pub fn all() -> [Framerate; 15] {
    [
        f23_98(),
        f24(),
        f25(),
        f29_97_ndf(),
        f29_97_df(),
        f30(),
        f47_95(),
        f48(),
        f50(),
        f59_94_ndf(),
        f59_94_df(),
        f60(),
        f119_88_ndf(),
        f119_88_df(),
        f120(),
    ]
}
