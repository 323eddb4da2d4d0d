//! User-tunable levels and the simulation configuration.
//!
//! # Clamping
//!
//! Every knob the host exposes is a [`Level`] in `1..=5`.  Out-of-range input
//! is clamped, never rejected: a slider or text box can hand over whatever it
//! likes and the simulator keeps running.

use std::fmt;

// ── Level ─────────────────────────────────────────────────────────────────────

/// An integer setting clamped to `[Level::MIN, Level::MAX]`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "i64", into = "i64"))]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(1);
    pub const MAX: Level = Level(5);

    /// Clamp any integer into range.
    #[inline]
    pub fn clamped(value: i64) -> Level {
        Level(value.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8)
    }

    /// Normalise a raw numeric input the way a form field would: truncate
    /// toward zero, treat NaN as the minimum, then clamp.
    pub fn from_input(value: f64) -> Level {
        if value.is_nan() {
            return Self::MIN;
        }
        // `as` saturates at the i64 bounds, so infinities clamp cleanly.
        Self::clamped(value.trunc() as i64)
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl Default for Level {
    /// The middle setting, which is what the game starts with.
    fn default() -> Self {
        Level(3)
    }
}

impl From<i64> for Level {
    fn from(value: i64) -> Self {
        Level::clamped(value)
    }
}

impl From<Level> for i64 {
    fn from(level: Level) -> i64 {
        level.0 as i64
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-tick displacement before variation: `floor(level^1.5) + 2`.
///
/// | level | 1 | 2 | 3 | 4  | 5  |
/// |-------|---|---|---|----|----|
/// | speed | 3 | 5 | 8 | 12 | 17 |
#[inline]
pub fn base_speed(level: Level) -> f64 {
    (level.get() as f64).powf(1.5).floor() + 2.0
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// The three host-facing knobs.
///
/// `size_level` only matters to renderers; the simulator stores it so a host
/// can round-trip its whole settings panel through one value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    pub agent_count: Level,
    pub speed_level: Level,
    pub size_level:  Level,
}

impl SimConfig {
    /// Build from raw integers, clamping each.
    pub fn new(agent_count: i64, speed_level: i64, size_level: i64) -> Self {
        Self {
            agent_count: Level::clamped(agent_count),
            speed_level: Level::clamped(speed_level),
            size_level:  Level::clamped(size_level),
        }
    }

    #[inline]
    pub fn base_speed(&self) -> f64 {
        base_speed(self.speed_level)
    }

    /// Rendered pointer diameter in pixels, `size * 6 + 3`.
    #[inline]
    pub fn marker_diameter_px(&self) -> u32 {
        self.size_level.get() as u32 * 6 + 3
    }
}
