//! The `Simulator` struct and its tick.

use lc_core::{AgentId, Field, FrameClock, Level, RandomSource, SimConfig, SimRng};
use lc_motion::{AgentSnapshot, AgentState, MotionModel, StepContext, TargetSeek};
use tracing::{debug, trace, warn};

use crate::{NoopObserver, SimObserver, SimResult};

/// Population change made by one reconciliation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub added:   usize,
    pub removed: usize,
}

impl Reconciliation {
    #[inline]
    pub fn is_unchanged(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

// ── Simulator ─────────────────────────────────────────────────────────────────

/// Owns the agents and advances them once per host frame.
///
/// Generic over the wander algorithm `M` and the random source `R`; the
/// defaults are [`TargetSeek`] and an entropy-seeded [`SimRng`].
///
/// Until the first [`configure`](Self::configure) the population is empty and
/// [`tick`](Self::tick) returns an empty snapshot.
///
/// Create via [`SimBuilder`][crate::SimBuilder] or [`Simulator::new`].
pub struct Simulator<M: MotionModel = TargetSeek, R: RandomSource = SimRng> {
    /// Active levels; `None` until configured.
    config: Option<SimConfig>,

    /// Toroidal bounds.  Always valid; bad resizes are refused.
    field: Field,

    /// Agent records, index == id.
    agents: Vec<AgentState>,

    clock: FrameClock,
    model: M,
    rng:   R,
}

impl Simulator {
    /// Target-seeking simulator over `field` with an entropy-seeded RNG.
    pub fn new(field: Field) -> Self {
        Self::with_parts(field, TargetSeek::default(), SimRng::from_entropy())
    }
}

impl<M: MotionModel, R: RandomSource> Simulator<M, R> {
    /// Assemble from explicit parts.  No agents exist yet.
    pub fn with_parts(field: Field, model: M, rng: R) -> Self {
        Self {
            config: None,
            field,
            agents: Vec::new(),
            clock: FrameClock::new(),
            model,
            rng,
        }
    }

    // ── Configuration ─────────────────────────────────────────────────────

    /// Set agent count and speed, both clamped to `1..=5`.
    ///
    /// Agents whose ids survive keep their position and target.  Calling
    /// again with the same values changes nothing.
    pub fn configure(&mut self, agent_count: i64, speed_level: i64) -> Reconciliation {
        let size_level = self.config.map(|c| c.size_level).unwrap_or_default();
        self.apply_config(SimConfig {
            agent_count: Level::clamped(agent_count),
            speed_level: Level::clamped(speed_level),
            size_level,
        })
    }

    /// Apply a full configuration, reconciling the population to
    /// `config.agent_count`.
    pub fn apply_config(&mut self, config: SimConfig) -> Reconciliation {
        if self.config.as_ref() != Some(&config) {
            debug!(
                agents = config.agent_count.get(),
                speed = config.speed_level.get(),
                size = config.size_level.get(),
                "applying configuration"
            );
        }
        self.config = Some(config);
        self.reconcile(config.agent_count)
    }

    /// Grow or shrink to `count` agents.  New ids are appended; removal
    /// starts from the highest id.
    fn reconcile(&mut self, count: Level) -> Reconciliation {
        let current = self.agents.len();
        let wanted = count.as_usize();

        let change = if wanted < current {
            self.agents.truncate(wanted);
            Reconciliation { added: 0, removed: current - wanted }
        } else {
            for index in current..wanted {
                let id = AgentId(index as u32);
                let agent = self.model.spawn(id, &self.field, &mut self.rng);
                self.agents.push(agent);
            }
            Reconciliation { added: wanted - current, removed: 0 }
        };

        if !change.is_unchanged() {
            debug!(added = change.added, removed = change.removed, total = wanted, "reconciled agents");
        }
        change
    }

    /// Replace the field bounds.  Agents are not moved; they wrap into the
    /// new bounds on their next step.
    ///
    /// Zero, negative or non-finite sizes are refused and the previous field
    /// stays in effect.
    pub fn resize_field(&mut self, width: f64, height: f64) -> SimResult<()> {
        let field = Field::new(width, height).inspect_err(|err| {
            warn!(%err, current = %self.field, "keeping previous field");
        })?;
        self.set_field(field);
        Ok(())
    }

    /// Resize for a new viewport: the field is the viewport scaled by
    /// [`lc_core::FIELD_SCALE`].
    pub fn resize_viewport(&mut self, viewport_width: f64, viewport_height: f64) -> SimResult<()> {
        let field = Field::from_viewport(viewport_width, viewport_height).inspect_err(|err| {
            warn!(%err, current = %self.field, "keeping previous field");
        })?;
        self.set_field(field);
        Ok(())
    }

    fn set_field(&mut self, field: Field) {
        if field != self.field {
            debug!(from = %self.field, to = %field, "field resized");
        }
        self.field = field;
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance every agent one step at host time `now_millis` and return the
    /// new positions, ordered by id.
    pub fn tick(&mut self, now_millis: f64) -> Vec<AgentSnapshot> {
        self.tick_observed(now_millis, &mut NoopObserver)
    }

    /// [`tick`](Self::tick) with observer callbacks.
    ///
    /// Before the first `configure` this is a no-op: no observer calls, no
    /// clock advance, empty result.  A non-finite `now_millis` is skipped the
    /// same way, except the current positions are still returned.
    pub fn tick_observed<O: SimObserver>(&mut self, now_millis: f64, observer: &mut O) -> Vec<AgentSnapshot> {
        let Some(config) = self.config else {
            return Vec::new();
        };
        if !now_millis.is_finite() {
            warn!(now_millis, frame = self.clock.frames(), "skipping tick with non-finite timestamp");
            return self.snapshot();
        }

        let frame = self.clock.advance(now_millis);
        let ctx = StepContext::new(self.field, config.speed_level, frame);
        observer.on_tick_start(&frame);

        for agent in self.agents.iter_mut() {
            let outcome = self.model.advance(agent, &ctx, &mut self.rng);
            observer.on_step(agent.id, outcome);
        }

        let snapshot = self.snapshot();
        observer.on_tick_end(&frame, &snapshot);
        trace!(%frame, agents = snapshot.len(), "tick");
        snapshot
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Current positions without advancing.
    pub fn snapshot(&self) -> Vec<AgentSnapshot> {
        self.agents.iter().map(AgentState::snapshot).collect()
    }

    #[inline]
    pub fn agents(&self) -> &[AgentState] {
        &self.agents
    }

    #[inline]
    pub fn agent(&self, id: AgentId) -> Option<&AgentState> {
        self.agents.get(id.index())
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn config(&self) -> Option<&SimConfig> {
        self.config.as_ref()
    }

    #[inline]
    pub fn field(&self) -> Field {
        self.field
    }

    #[inline]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Mutable access to agent records (positions, targets).  Ids must not be
    /// changed.
    #[inline]
    pub fn agents_mut(&mut self) -> &mut [AgentState] {
        &mut self.agents
    }
}
