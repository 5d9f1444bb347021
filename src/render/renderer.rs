use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::animation::clock::{AnimationClock, ClockTick, RunId};
use crate::animation::reveal::{ProgressiveRevealer, RevealFrame, RevealState};
use crate::foundation::config::RendererConfig;
use crate::foundation::core::{BezPath, Point, Viewport};
use crate::foundation::error::SketchResult;
use crate::geo::route::{Route, RoutePoint};
use crate::render::stroke::StrokeSpec;
use crate::sketch::path::VectorPath;
use crate::sketch::projector::Projector;
use crate::sketch::synth::PathSynthesizer;
use crate::style::route_style::RouteStyle;

/// Everything the host UI hands to the renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderInput {
    pub points: Vec<RoutePoint>,
    #[serde(default)]
    pub style: RouteStyle,
    pub width: f64,
    pub height: f64,
}

/// What [`StylizedRouteRenderer::set_input`] recomputed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputChange {
    /// Identical input; nothing recomputed.
    Unchanged,
    /// Only stroke color/width changed.
    Stroke,
    /// Hand-drawn toggle changed: path re-synthesized, progress kept.
    Effect,
    /// Viewport changed: projection and path rebuilt, progress kept.
    Viewport,
    /// New route: everything rebuilt and a new animation run started.
    Route(RunId),
}

/// Drawable output for one tick.
#[derive(Clone, Debug)]
pub struct RenderFrame {
    pub run: RunId,
    pub progress: f64,
    pub visible_commands: usize,
    pub total_commands: usize,
    /// Visible prefix of the synthesized path.
    pub path: BezPath,
    pub stroke: StrokeSpec,
}

impl RenderFrame {
    fn new(frame: RevealFrame, stroke: StrokeSpec) -> Self {
        Self {
            run: frame.run,
            progress: frame.progress,
            visible_commands: frame.visible_commands,
            total_commands: frame.total_commands,
            path: frame.path.to_bezpath(),
            stroke,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Projection, wobble synthesis and progressive reveal behind one entry point.
///
/// The host calls [`set_input`](Self::set_input) whenever route, style or size change and
/// [`tick`](Self::tick) once per frame; each tick while animating (and one final tick at
/// completion) yields a [`RenderFrame`] to draw.
#[derive(Debug)]
pub struct StylizedRouteRenderer<R = Pcg64> {
    config: RendererConfig,
    rng: R,
    clock: AnimationClock,
    revealer: ProgressiveRevealer,
    input: Option<RenderInput>,
    screen_points: Vec<Point>,
}

impl StylizedRouteRenderer<Pcg64> {
    /// Renderer seeded from `config.seed`, or from OS entropy when unset.
    pub fn new(config: RendererConfig) -> SketchResult<Self> {
        let rng = match config.seed {
            Some(seed) => Pcg64::seed_from_u64(seed),
            None => Pcg64::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> StylizedRouteRenderer<R> {
    /// Renderer drawing wobble offsets from `rng`.
    pub fn with_rng(config: RendererConfig, rng: R) -> SketchResult<Self> {
        config.validate()?;
        Ok(Self {
            clock: AnimationClock::from_config(&config)?,
            config,
            rng,
            revealer: ProgressiveRevealer::new(),
            input: None,
            screen_points: Vec::new(),
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Last accepted input, if any.
    pub fn input(&self) -> Option<&RenderInput> {
        self.input.as_ref()
    }

    /// Reveal state of the current run.
    pub fn state(&self) -> RevealState {
        self.revealer.state()
    }

    /// Current reveal progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.revealer.progress()
    }

    /// Projected points for the current input.
    pub fn screen_points(&self) -> &[Point] {
        &self.screen_points
    }

    /// The complete synthesized path, independent of progress.
    pub fn full_path(&self) -> &VectorPath {
        self.revealer.source()
    }

    /// Stroke derived from the current style.
    pub fn stroke(&self) -> Option<StrokeSpec> {
        self.input
            .as_ref()
            .map(|i| StrokeSpec::from_style(&i.style, self.config.soft_edge))
    }

    /// Whether ticks are still expected to produce frames.
    pub fn is_animating(&self) -> bool {
        self.clock.is_running()
    }

    /// Accept new input at time `now`, recomputing only what the change requires.
    ///
    /// Fails for zero/negative viewports, invalid styles and out-of-range coordinates; the
    /// previous input stays in effect on error.
    #[tracing::instrument(skip(self, input), fields(points = input.points.len()))]
    pub fn set_input(&mut self, input: RenderInput, now: f64) -> SketchResult<InputChange> {
        let viewport = Viewport::new(input.width, input.height)?;
        input.style.validate()?;
        let route = Route::new(input.points.clone());
        route.validate()?;

        let change = match &self.input {
            None => None,
            Some(prev) if prev.points != input.points => None,
            Some(prev) if (prev.width, prev.height) != (input.width, input.height) => {
                Some(InputChange::Viewport)
            }
            Some(prev) if prev.style.hand_drawn_effect != input.style.hand_drawn_effect => {
                Some(InputChange::Effect)
            }
            Some(prev) if prev.style != input.style => Some(InputChange::Stroke),
            Some(_) => Some(InputChange::Unchanged),
        };

        let projector = Projector::new(viewport, &self.config);
        let synth = PathSynthesizer::new(&self.config, input.style.hand_drawn_effect);
        let change = match change {
            Some(c @ (InputChange::Unchanged | InputChange::Stroke)) => c,
            Some(c) => {
                if c == InputChange::Viewport {
                    self.screen_points = projector.project(route.points());
                }
                let path = synth.synthesize(&self.screen_points, &mut self.rng);
                self.revealer.replace_path(Arc::new(path));
                tracing::debug!(change = ?c, "path rebuilt without restarting animation");
                c
            }
            None => {
                self.screen_points = projector.project(route.points());
                let path = synth.synthesize(&self.screen_points, &mut self.rng);
                let run = self.clock.start(now);
                self.revealer.restart(Arc::new(path), run);
                InputChange::Route(run)
            }
        };

        self.input = Some(input);
        Ok(change)
    }

    /// Restart the reveal of the current route from zero.
    pub fn replay(&mut self, now: f64) -> Option<RunId> {
        self.input.as_ref()?;
        let run = self.clock.start(now);
        let path = Arc::clone(self.revealer.source());
        self.revealer.restart(path, run);
        Some(run)
    }

    /// Advance the built-in clock to `now`.
    pub fn tick(&mut self, now: f64) -> Option<RenderFrame> {
        let tick = self.clock.sample(now)?;
        self.deliver(tick)
    }

    /// Apply a tick from an external clock. Stale runs are ignored.
    pub fn deliver(&mut self, tick: ClockTick) -> Option<RenderFrame> {
        let frame = self.revealer.on_tick(tick)?;
        Some(RenderFrame::new(frame, self.stroke()?))
    }

    /// Frame for the current progress without advancing time (e.g. for a redraw).
    pub fn current_frame(&self) -> Option<RenderFrame> {
        let frame = self.revealer.frame()?;
        Some(RenderFrame::new(frame, self.stroke()?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
