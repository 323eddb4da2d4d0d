//! headless: drives the laser_chase simulator without a renderer.
//!
//! Plays the role of a browser host: a synthetic 60 fps frame clock calls
//! `tick`, the settings panel changes mid-run, the window is resized once, and
//! every `print_every` frames the snapshot is written to stdout as one JSON
//! line.  Pipe it into a plotting script to eyeball the wander paths.
//!
//! ```text
//! headless [config.json]
//! RUST_LOG=lc_sim=debug headless
//! ```

use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use lc_core::{AgentId, FrameTime, RandomSource, SimConfig};
use lc_motion::{AgentSnapshot, MotionModel, StepOutcome};
use lc_sim::{RandomDrift, SimBuilder, SimObserver, Simulator, TargetSeek};

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
enum ModelKind {
    #[default]
    Seek,
    Drift,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
struct DemoConfig {
    viewport_width:  f64,
    viewport_height: f64,
    frames:          u64,
    frame_ms:        f64,
    print_every:     u64,
    seed:            Option<u64>,
    model:           ModelKind,
    levels:          SimConfig,
    /// Settings applied halfway through, as if the user moved the sliders.
    midway_levels:   Option<SimConfig>,
    /// Viewport applied at the three-quarter mark.
    late_viewport:   Option<(f64, f64)>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            viewport_width:  1280.0,
            viewport_height: 720.0,
            frames:          600,
            frame_ms:        1000.0 / 60.0,
            print_every:     10,
            seed:            None,
            model:           ModelKind::Seek,
            levels:          SimConfig::default(),
            midway_levels:   Some(SimConfig::new(5, 5, 3)),
            late_viewport:   Some((800.0, 600.0)),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── Output ────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct FrameLine<'a> {
    frame:     u64,
    now_ms:    f64,
    marker_px: u32,
    agents:    &'a [AgentSnapshot],
}

/// Counts step outcomes and writes periodic JSON lines.
struct JsonLines<W: Write> {
    out:          W,
    print_every:  u64,
    marker_px:    u32,
    retargets:    u64,
    inward_turns: u64,
    error:        Option<io::Error>,
}

impl<W: Write> SimObserver for JsonLines<W> {
    fn on_step(&mut self, _agent: AgentId, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Retargeted => self.retargets += 1,
            StepOutcome::TurnedInward => self.inward_turns += 1,
            StepOutcome::Moved => {}
        }
    }

    fn on_tick_end(&mut self, frame: &FrameTime, snapshot: &[AgentSnapshot]) {
        if self.error.is_some() || !frame.frame.is_multiple_of(self.print_every) {
            return;
        }
        let line = FrameLine {
            frame:     frame.frame,
            now_ms:    frame.now_millis,
            marker_px: self.marker_px,
            agents:    snapshot,
        };
        let written = serde_json::to_writer(&mut self.out, &line)
            .map_err(io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"));
        if let Err(err) = written {
            self.error = Some(err);
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let path = std::env::args().nth(1);
    let config = load_config(path.as_deref().map(Path::new))?;
    info!(?config, "starting headless run");

    let builder = SimBuilder::new()
        .viewport(config.viewport_width, config.viewport_height)
        .config(config.levels);
    let builder = match config.seed {
        Some(seed) => builder.seed(seed),
        None => builder,
    };

    match config.model {
        ModelKind::Seek => run(builder.model(TargetSeek::default()).build()?, &config),
        ModelKind::Drift => run(builder.model(RandomDrift).build()?, &config),
    }
}

fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
    if let Err(err) = installed {
        eprintln!("headless: keeping existing tracing subscriber: {err}");
    }
}

fn run<M: MotionModel, R: RandomSource>(mut sim: Simulator<M, R>, config: &DemoConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut observer = JsonLines {
        out:          BufWriter::new(stdout.lock()),
        print_every:  config.print_every.max(1),
        marker_px:    config.levels.marker_diameter_px(),
        retargets:    0,
        inward_turns: 0,
        error:        None,
    };

    let midway = config.frames / 2;
    let late = config.frames * 3 / 4;

    for frame in 0..config.frames {
        if frame == midway {
            if let Some(levels) = config.midway_levels {
                let change = sim.apply_config(levels);
                observer.marker_px = levels.marker_diameter_px();
                info!(frame, added = change.added, removed = change.removed, "settings changed");
            }
        }
        if frame == late {
            if let Some((w, h)) = config.late_viewport {
                if let Err(err) = sim.resize_viewport(w, h) {
                    warn!(%err, "viewport change ignored");
                }
            }
        }

        sim.tick_observed(frame as f64 * config.frame_ms, &mut observer);
        if let Some(err) = observer.error.take() {
            return Err(err).context("writing snapshot");
        }
    }
    observer.out.flush().context("flushing snapshots")?;

    info!(
        frames = sim.clock().frames(),
        agents = sim.agent_count(),
        field = %sim.field(),
        retargets = observer.retargets,
        inward_turns = observer.inward_turns,
        fps = sim.clock().mean_fps().unwrap_or_default(),
        "run complete"
    );
    Ok(())
}
