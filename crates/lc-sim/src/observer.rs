//! Simulation observer trait for instrumentation and data collection.

use lc_core::{AgentId, FrameTime};
use lc_motion::{AgentSnapshot, StepOutcome};

/// Callbacks invoked by [`Simulator::tick_observed`][crate::Simulator::tick_observed].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: retarget counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct Retargets(usize);
///
/// impl SimObserver for Retargets {
///     fn on_step(&mut self, _agent: AgentId, outcome: StepOutcome) {
///         if outcome == StepOutcome::Retargeted {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before any agent moves.
    fn on_tick_start(&mut self, _frame: &FrameTime) {}

    /// Called after each agent's step.
    fn on_step(&mut self, _agent: AgentId, _outcome: StepOutcome) {}

    /// Called once all agents have moved, with the snapshot the tick returns.
    fn on_tick_end(&mut self, _frame: &FrameTime, _snapshot: &[AgentSnapshot]) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
