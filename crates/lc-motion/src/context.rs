//! Per-tick read-only inputs passed to every `MotionModel` call.

use lc_core::{Field, FrameTime, Level, base_speed};

/// Everything a model may read while advancing one agent.
///
/// Built once per tick by the simulator; all agents in that tick see the same
/// context.
#[derive(Copy, Clone, Debug)]
pub struct StepContext {
    pub field:       Field,
    pub speed_level: Level,
    pub frame:       FrameTime,
}

impl StepContext {
    pub fn new(field: Field, speed_level: Level, frame: FrameTime) -> Self {
        Self { field, speed_level, frame }
    }

    /// Absolute time in seconds.
    #[inline]
    pub fn secs(&self) -> f64 {
        self.frame.secs()
    }

    #[inline]
    pub fn base_speed(&self) -> f64 {
        base_speed(self.speed_level)
    }
}
