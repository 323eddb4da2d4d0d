//! The `MotionModel` trait, the extension point for wander algorithms.

use lc_core::{AgentId, Field, RandomSource};

use crate::{AgentState, StepContext};

/// What happened to an agent during one [`MotionModel::advance`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved along its computed heading.
    Moved,
    /// Reached its target; a fresh one was chosen and the agent held position.
    Retargeted,
    /// Moved, then had its heading pointed back toward the field centre.
    TurnedInward,
}

/// Pluggable wander algorithm.
///
/// # Required methods
///
/// - [`spawn`][Self::spawn] builds the initial state for a newly added agent.
/// - [`advance`][Self::advance] performs one step in place.
///
/// # Contract
///
/// After `advance` returns, `agent.position` must lie inside `ctx.field`
/// (use [`Field::wrap`]) and `agent.heading` must be the heading the agent
/// moved along.  Implementations draw all randomness from `rng`.
///
/// # Example
///
/// ```rust,ignore
/// struct Straight;
///
/// impl MotionModel for Straight {
///     fn spawn<R: RandomSource + ?Sized>(&self, id: AgentId, field: &Field, rng: &mut R) -> AgentState {
///         AgentState::new(id, field.random_point(rng), rng.angle(), None)
///     }
///
///     fn advance<R: RandomSource + ?Sized>(&self, agent: &mut AgentState, ctx: &StepContext, _rng: &mut R) -> StepOutcome {
///         let next = agent.position.advanced(agent.heading, ctx.base_speed());
///         agent.position = ctx.field.wrap(next);
///         StepOutcome::Moved
///     }
/// }
/// ```
pub trait MotionModel {
    /// Create the state for agent `id` appearing in `field`.
    fn spawn<R: RandomSource + ?Sized>(&self, id: AgentId, field: &Field, rng: &mut R) -> AgentState;

    /// Advance `agent` by one tick.
    fn advance<R: RandomSource + ?Sized>(
        &self,
        agent: &mut AgentState,
        ctx:   &StepContext,
        rng:   &mut R,
    ) -> StepOutcome;
}
