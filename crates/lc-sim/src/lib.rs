//! `lc-sim`: the frame-driven motion simulator.
//!
//! # Host loop
//!
//! ```text
//! on settings change:  sim.configure(count, speed)   reconcile population
//! on window resize:    sim.resize_viewport(w, h)     field = viewport × 1.2
//! every frame:         sim.tick(now_ms)              one step per agent
//!                        ① record frame time
//!                        ② MotionModel::advance for each agent, id ascending
//!                        ③ return (id, x, y, heading) for every agent
//! ```
//!
//! The simulator owns no timers and no I/O.  A host stops it by no longer
//! calling `tick`.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lc_sim::SimBuilder;
//!
//! let mut sim = SimBuilder::new().viewport(1280.0, 720.0).build()?;
//! sim.configure(3, 3);
//! for frame in 0..600 {
//!     for a in sim.tick(frame as f64 * 16.7) {
//!         draw(a.id, a.x, a.y, a.heading);
//!     }
//! }
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Reconciliation, Simulator};

pub use lc_core::{AgentId, Field, Level, SimConfig};
pub use lc_motion::{AgentSnapshot, RandomDrift, TargetSeek};
