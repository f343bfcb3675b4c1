//! Dashboard session: one demo source feeding the strip chart and the scene.

use mv_config::{DisplayConfig, Preset};
use mv_core::Span;
use mv_render::{MultiPanelPlotter, RetainedRegion, SceneRenderer};
use tracing::{debug, warn};

use crate::demo::DemoMotor;
use crate::error::{AppError, AppResult};

/// What happened to the strip-chart frame of one step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Rendered,
    /// The frame was dropped; history and panels are unchanged.
    Rejected { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelSummary {
    pub group: String,
    pub lines: usize,
    pub points: usize,
    pub y_range: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub frames: usize,
    pub rejected: usize,
    pub time: f64,
    pub panels: Vec<PanelSummary>,
    pub scene_title: String,
}

/// Reject time steps that are not positive and finite.
pub fn check_time_step(dt: f64) -> AppResult<f64> {
    if dt.is_finite() && dt > 0.0 {
        Ok(dt)
    } else {
        Err(AppError::InvalidInput(format!(
            "time step must be positive and finite, got {dt}"
        )))
    }
}

/// Strip chart plus motor schematic driven by [`DemoMotor`].
#[derive(Debug)]
pub struct DashboardSession {
    config: DisplayConfig,
    plotter: MultiPanelPlotter<RetainedRegion>,
    scene: SceneRenderer<RetainedRegion>,
    source: DemoMotor,
    steps: usize,
    rejected: usize,
}

impl DashboardSession {
    pub fn new(config: DisplayConfig) -> AppResult<Self> {
        mv_config::validate_config(&config)?;
        let plotter = MultiPanelPlotter::from_config(&config)?;
        let scene = SceneRenderer::new(RetainedRegion::new(), config.scene)?;

        debug!(name = %config.name, groups = config.groups.len(), "dashboard session created");
        Ok(Self {
            config,
            plotter,
            scene,
            source: DemoMotor::new(),
            steps: 0,
            rejected: 0,
        })
    }

    pub fn from_preset(preset: Preset) -> AppResult<Self> {
        Self::new(preset.config())
    }

    /// Advance the source by `dt` seconds and render one frame everywhere.
    ///
    /// A strip-chart frame rejected by the plotter is logged and counted;
    /// the scene is still updated.
    pub fn step(&mut self, dt: f64) -> AppResult<StepOutcome> {
        let dt = check_time_step(dt)?;
        let frame = self.source.step(dt);
        self.steps += 1;

        let outcome = match self.plotter.update(frame.t, frame.signals.iter().copied()) {
            Ok(()) => StepOutcome::Rendered,
            Err(err) => {
                warn!(t = frame.t, error = %err, "strip chart frame rejected");
                self.rejected += 1;
                StepOutcome::Rejected {
                    reason: err.to_string(),
                }
            }
        };

        let scene = frame.scene;
        self.scene.update(scene.theta, scene.omega, scene.torque)?;
        Ok(outcome)
    }

    /// Drop all history and primitives and restart the source.
    pub fn reset(&mut self) -> AppResult<()> {
        *self = Self::new(self.config.clone())?;
        Ok(())
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn plotter(&self) -> &MultiPanelPlotter<RetainedRegion> {
        &self.plotter
    }

    pub fn scene(&self) -> &SceneRenderer<RetainedRegion> {
        &self.scene
    }

    /// Source time of the next frame.
    pub fn time(&self) -> f64 {
        self.source.time()
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn summary(&self) -> SessionSummary {
        let panels = self
            .plotter
            .panels()
            .iter()
            .map(|panel| {
                let lines = panel.region().lines();
                PanelSummary {
                    group: panel.group_id().to_string(),
                    lines: lines.len(),
                    points: lines.first().map_or(0, |l| l.len()),
                    y_range: Span::enclosing(lines.iter().flat_map(|l| l.ys.iter().copied())),
                }
            })
            .collect();

        SessionSummary {
            frames: self.plotter.frame_count(),
            rejected: self.rejected,
            time: self.time(),
            panels,
            scene_title: self.scene.region().decorations().title.clone(),
        }
    }
}
