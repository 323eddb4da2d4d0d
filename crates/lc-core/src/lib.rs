//! `lc-core`: foundational types for the `laser_chase` motion simulator.
//!
//! This crate is a dependency of every other `lc-*` crate.  It has no `lc-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `Point`, `Field` (toroidal bounds and wrap)           |
//! | [`config`]      | `Level`, `SimConfig`, the speed curve                 |
//! | [`time`]        | `FrameClock`, `FrameTime`                             |
//! | [`rng`]         | `RandomSource` trait, `SimRng`                        |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Level, SimConfig, base_speed};
pub use error::{CoreError, CoreResult};
pub use geo::{FIELD_SCALE, Field, Point};
pub use ids::AgentId;
pub use rng::{RandomSource, SimRng};
pub use time::{FrameClock, FrameTime};
