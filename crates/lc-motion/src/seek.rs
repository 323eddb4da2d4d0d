//! Target-seeking wander.
//!
//! Each agent drifts toward a private random target.  The straight bearing is
//! bent by three layered "wiggle" sines, a `sin(tan(..))` chaos term, and a
//! small random deviation, so paths snake instead of running on rails.  Speed
//! breathes with its own three sines.  Every oscillator is phase-shifted by
//! the agent id, so no two agents move in lockstep.
//!
//! All oscillators read absolute time in seconds (`now_millis / 1000`), not
//! the frame counter.

use lc_core::{AgentId, Field, Point, RandomSource};

use crate::{AgentState, MotionModel, StepContext, StepOutcome};

/// Draws allowed when the fresh target happens to equal the captured one.
const RETARGET_ATTEMPTS: usize = 4;

/// Target-seeking motion model.
///
/// The capture radius is `capture_radius + capture_swing · sin(t·0.5 + id)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TargetSeek {
    /// Mean distance at which a target counts as reached.
    pub capture_radius: f64,
    /// Amplitude of the slow oscillation around `capture_radius`.
    pub capture_swing:  f64,
}

impl Default for TargetSeek {
    fn default() -> Self {
        Self { capture_radius: 10.0, capture_swing: 5.0 }
    }
}

impl TargetSeek {
    /// Upper bound on the random steering deviation.
    pub const MAX_DEVIATION: f64 = 0.2;

    /// Distance at which the deviation reaches [`Self::MAX_DEVIATION`].
    pub const DEVIATION_FALLOFF: f64 = 100.0;

    /// Capture radius for agent `phase` at time `t` (seconds).
    #[inline]
    pub fn capture_radius_at(&self, t: f64, phase: f64) -> f64 {
        self.capture_radius + self.capture_swing * (t * 0.5 + phase).sin()
    }

    /// Replace `agent`'s target with a fresh uniform point.
    fn retarget<R: RandomSource + ?Sized>(agent: &mut AgentState, field: &Field, rng: &mut R) {
        let stale = agent.target;
        let mut fresh = field.random_point(rng);
        for _ in 1..RETARGET_ATTEMPTS {
            if Some(fresh) != stale {
                break;
            }
            fresh = field.random_point(rng);
        }
        agent.target = Some(fresh);
    }
}

/// Multiplier on base speed: `0.8` plus three harmonics of amplitude
/// `0.1 / 0.05 / 0.025` at rising frequency.
#[inline]
pub fn speed_variation(t: f64, phase: f64) -> f64 {
    0.8 + 0.1 * (t * 1.3 + phase).sin()
        + 0.05 * (t * 2.7 + phase * 1.5).sin()
        + 0.025 * (t * 5.1 + phase * 2.2).sin()
}

/// Serpentine offset added to the bearing, radians.
#[inline]
pub fn wiggle(t: f64, phase: f64) -> f64 {
    0.3 * (t * 0.9 + phase).sin()
        + 0.2 * (t * 2.1 + phase * 1.7).sin()
        + 0.1 * (t * 4.3 + phase * 2.9).sin()
}

/// `sin(tan(t·0.1 + id)) · 0.1`.
///
/// Near the poles of `tan` the inner value explodes and the sine flips sign
/// erratically from frame to frame.  Those spikes are part of the look.
#[inline]
pub fn chaos(t: f64, phase: f64) -> f64 {
    (t * 0.1 + phase).tan().sin() * 0.1
}

/// Magnitude of the uniform steering jitter at `distance` from the target.
#[inline]
pub fn deviation_magnitude(distance: f64) -> f64 {
    (distance / TargetSeek::DEVIATION_FALLOFF).min(TargetSeek::MAX_DEVIATION)
}

impl MotionModel for TargetSeek {
    fn spawn<R: RandomSource + ?Sized>(&self, id: AgentId, field: &Field, rng: &mut R) -> AgentState {
        let position = field.random_point(rng);
        let target = field.random_point(rng);
        AgentState::new(id, position, position.bearing_to(target), Some(target))
    }

    fn advance<R: RandomSource + ?Sized>(
        &self,
        agent: &mut AgentState,
        ctx:   &StepContext,
        rng:   &mut R,
    ) -> StepOutcome {
        let field = &ctx.field;
        let t = ctx.secs();
        let phase = agent.id.phase();

        // The field may have shrunk since the last step.  A stale target
        // outside it could never be reached from a wrapped position.
        agent.position = field.wrap(agent.position);
        let target: Point = match agent.target {
            Some(target) if field.contains(target) => target,
            _ => *agent.target.insert(field.random_point(rng)),
        };

        let (dx, dy) = agent.position.delta_to(target);
        let distance = dx.hypot(dy);

        if distance < self.capture_radius_at(t, phase) {
            Self::retarget(agent, field, rng);
            return StepOutcome::Retargeted;
        }

        let speed = ctx.base_speed() * speed_variation(t, phase);
        let heading = dy.atan2(dx)
            + wiggle(t, phase)
            + chaos(t, phase)
            + rng.symmetric(deviation_magnitude(distance));

        agent.position = field.wrap(agent.position.advanced(heading, speed));
        agent.heading = heading;
        StepOutcome::Moved
    }
}
