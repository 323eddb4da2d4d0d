//! Fluent builder for constructing a [`Simulator`].

use lc_core::{Field, RandomSource, SimConfig, SimRng};
use lc_motion::{MotionModel, TargetSeek};

use crate::{SimResult, Simulator};

/// Viewport assumed when the host does not supply one.
pub const DEFAULT_VIEWPORT: (f64, f64) = (1280.0, 720.0);

#[derive(Copy, Clone, Debug)]
enum Geometry {
    Viewport(f64, f64),
    Field(f64, f64),
}

/// Fluent builder for [`Simulator<M, R>`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                   |
/// |---------------------|-------------------------------------------|
/// | `.viewport(w, h)`   | [`DEFAULT_VIEWPORT`], field = viewport × 1.2 |
/// | `.field(w, h)`      | overrides `.viewport`; last call wins     |
/// | `.model(m)`         | `TargetSeek::default()`                   |
/// | `.seed(s)` / `.rng(r)` | entropy-seeded `SimRng`                |
/// | `.config(c)`        | none; population stays empty until `configure` |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new()
///     .viewport(1920.0, 1080.0)
///     .model(RandomDrift)
///     .seed(42)
///     .config(SimConfig::new(5, 2, 3))
///     .build()?;
/// ```
pub struct SimBuilder<M: MotionModel = TargetSeek, R: RandomSource = SimRng> {
    geometry: Geometry,
    config:   Option<SimConfig>,
    model:    M,
    rng:      R,
}

impl SimBuilder {
    pub fn new() -> Self {
        Self {
            geometry: Geometry::Viewport(DEFAULT_VIEWPORT.0, DEFAULT_VIEWPORT.1),
            config:   None,
            model:    TargetSeek::default(),
            rng:      SimRng::from_entropy(),
        }
    }
}

impl Default for SimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MotionModel, R: RandomSource> SimBuilder<M, R> {
    /// Size the field from a viewport (each side × 1.2).
    pub fn viewport(mut self, width: f64, height: f64) -> Self {
        self.geometry = Geometry::Viewport(width, height);
        self
    }

    /// Size the field directly.
    pub fn field(mut self, width: f64, height: f64) -> Self {
        self.geometry = Geometry::Field(width, height);
        self
    }

    /// Apply `config` at build time, spawning its agents.
    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Swap the wander algorithm.
    pub fn model<M2: MotionModel>(self, model: M2) -> SimBuilder<M2, R> {
        SimBuilder {
            geometry: self.geometry,
            config:   self.config,
            model,
            rng:      self.rng,
        }
    }

    /// Swap the random source.
    pub fn rng<R2: RandomSource>(self, rng: R2) -> SimBuilder<M, R2> {
        SimBuilder {
            geometry: self.geometry,
            config:   self.config,
            model:    self.model,
            rng,
        }
    }

    /// Use a deterministically seeded [`SimRng`].
    pub fn seed(self, seed: u64) -> SimBuilder<M, SimRng> {
        self.rng(SimRng::new(seed))
    }

    /// Validate geometry and return a ready [`Simulator`].
    pub fn build(self) -> SimResult<Simulator<M, R>> {
        let field = match self.geometry {
            Geometry::Viewport(w, h) => Field::from_viewport(w, h)?,
            Geometry::Field(w, h) => Field::new(w, h)?,
        };

        let mut sim = Simulator::with_parts(field, self.model, self.rng);
        if let Some(config) = self.config {
            sim.apply_config(config);
        }
        Ok(sim)
    }
}
