//! Frame timing.
//!
//! # Design
//!
//! The host drives the simulator from a real-time rendering loop, so ticks
//! arrive at irregular intervals.  Every time-phased term in the motion models
//! is a function of the absolute timestamp, never of the frame count, which
//! keeps motion continuous whatever the frame rate.
//!
//! `FrameClock` only bookkeeps: it counts frames and remembers the previous
//! timestamp so observers and drift-style models can see the delta.

use std::fmt;

/// Timing information for one tick, handed to motion models.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameTime {
    /// 0-based count of ticks processed before this one.
    pub frame:        u64,
    /// Host-supplied monotonic timestamp in milliseconds.
    pub now_millis:   f64,
    /// Milliseconds since the previous tick; 0 on the first tick or if the
    /// host clock stepped backwards.
    pub delta_millis: f64,
}

impl FrameTime {
    /// Absolute time in seconds, the unit all oscillators are tuned in.
    #[inline]
    pub fn secs(&self) -> f64 {
        self.now_millis * 0.001
    }

    /// A standalone frame at `now_millis`, for tests and one-off evaluation.
    pub fn at(now_millis: f64) -> Self {
        Self { frame: 0, now_millis, delta_millis: 0.0 }
    }
}

impl fmt::Display for FrameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{} @{:.1}ms", self.frame, self.now_millis)
    }
}

/// Counts frames and tracks the previous timestamp.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    frames:       u64,
    first_millis: Option<f64>,
    last_millis:  Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tick at `now_millis` and return its [`FrameTime`].
    pub fn advance(&mut self, now_millis: f64) -> FrameTime {
        let delta_millis = match self.last_millis {
            Some(last) if now_millis > last => now_millis - last,
            _ => 0.0,
        };
        let frame = FrameTime { frame: self.frames, now_millis, delta_millis };

        self.first_millis.get_or_insert(now_millis);
        self.last_millis = Some(now_millis);
        self.frames += 1;
        frame
    }

    /// Number of ticks recorded so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Timestamp of the most recent tick.
    #[inline]
    pub fn last_millis(&self) -> Option<f64> {
        self.last_millis
    }

    /// Milliseconds between the first and the most recent tick.
    pub fn elapsed_millis(&self) -> f64 {
        match (self.first_millis, self.last_millis) {
            (Some(first), Some(last)) => (last - first).max(0.0),
            _ => 0.0,
        }
    }

    /// Mean frames per second over the recorded span, if it is non-empty.
    pub fn mean_fps(&self) -> Option<f64> {
        let elapsed = self.elapsed_millis();
        (self.frames > 1 && elapsed > 0.0).then(|| (self.frames - 1) as f64 * 1000.0 / elapsed)
    }
}
