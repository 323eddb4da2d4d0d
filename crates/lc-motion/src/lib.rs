//! `lc-motion`: how a single agent moves.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`agent`]   | `AgentState` (mutable per-agent record), `AgentSnapshot`        |
//! | [`context`] | `StepContext`, read-only per-tick inputs shared by all agents  |
//! | [`model`]   | `MotionModel` trait, `StepOutcome`                              |
//! | [`seek`]    | `TargetSeek`, wander toward random targets with layered sines  |
//! | [`drift`]   | `RandomDrift`, heading random walk with edge return            |
//!
//! # Design notes
//!
//! A model never owns agents.  The simulator keeps the `Vec<AgentState>` and
//! hands each record to [`MotionModel::advance`] together with a
//! [`StepContext`] and the simulator's random source.  Models are therefore
//! plain values holding tuning constants, and swapping one for another needs
//! no change to agent storage.

pub mod agent;
pub mod context;
pub mod drift;
pub mod model;
pub mod seek;


pub use agent::{AgentSnapshot, AgentState};
pub use context::StepContext;
pub use drift::RandomDrift;
pub use model::{MotionModel, StepOutcome};
pub use seek::TargetSeek;
