//! Random-walk wander with a soft pull back from the edges.
//!
//! Unlike [`TargetSeek`](crate::TargetSeek), the heading here is the agent's
//! real state: each tick nudges it a little, occasionally throws it away, and
//! near the field border sometimes points it back at the centre.

use std::f64::consts::FRAC_PI_4;

use lc_core::{AgentId, Field, RandomSource};

use crate::{AgentState, MotionModel, StepContext, StepOutcome};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RandomDrift;

impl RandomDrift {
    /// Full width of the per-tick heading nudge, radians.
    pub const TURN_JITTER: f64 = 0.5;
    /// Chance per tick of picking a brand new heading.
    pub const REORIENT_CHANCE: f64 = 0.05;
    pub const SPEED_MIN: f64 = 0.8;
    pub const SPEED_MAX: f64 = 1.2;
    /// Distance from a border that counts as "near the edge".
    pub const EDGE_MARGIN: f64 = 50.0;
    /// Chance per tick near an edge of turning toward the centre.
    pub const INWARD_CHANCE: f64 = 0.2;
    /// Half-width of the cone around the centre bearing.
    pub const INWARD_SPREAD: f64 = FRAC_PI_4;
}

impl MotionModel for RandomDrift {
    fn spawn<R: RandomSource + ?Sized>(&self, id: AgentId, field: &Field, rng: &mut R) -> AgentState {
        let position = field.random_point(rng);
        AgentState::new(id, position, rng.angle(), None)
    }

    fn advance<R: RandomSource + ?Sized>(
        &self,
        agent: &mut AgentState,
        ctx:   &StepContext,
        rng:   &mut R,
    ) -> StepOutcome {
        let field = &ctx.field;

        let nudge = rng.symmetric(Self::TURN_JITTER * 0.5);
        let heading = if rng.chance(Self::REORIENT_CHANCE) {
            rng.angle()
        } else {
            agent.heading + nudge
        };
        let speed = ctx.base_speed() * rng.range(Self::SPEED_MIN, Self::SPEED_MAX);

        let position = field.wrap(agent.position.advanced(heading, speed));
        agent.position = position;

        if field.near_edge(position, Self::EDGE_MARGIN) && rng.chance(Self::INWARD_CHANCE) {
            agent.heading =
                position.bearing_to(field.center()) + rng.symmetric(Self::INWARD_SPREAD);
            return StepOutcome::TurnedInward;
        }

        agent.heading = heading;
        StepOutcome::Moved
    }
}
