use std::sync::Arc;

use crate::animation::clock::{ClockTick, RunId};
use crate::sketch::path::VectorPath;

/// Lifecycle of the reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum RevealState {
    /// No run has started; nothing is drawn.
    Idle,
    /// A run is in flight (progress below 1).
    Animating,
    /// The current run reached progress 1; the full path is visible.
    Complete,
}

/// Partial path for one tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RevealFrame {
    pub run: RunId,
    pub progress: f64,
    pub visible_commands: usize,
    pub total_commands: usize,
    pub path: VectorPath,
}

/// Number of leading commands visible at `progress`: `floor(total * progress)`.
///
/// Whole commands only; long segments appear in one step.
pub fn visible_budget(total: usize, progress: f64) -> usize {
    let progress = progress.clamp(0.0, 1.0);
    ((total as f64) * progress).floor().min(total as f64) as usize
}

/// Exposes a growing prefix of a [`VectorPath`] as progress advances.
///
/// Owns the progress value. Ticks from any run other than the current one are dropped, and
/// progress is clamped so it never moves backwards within a run.
#[derive(Clone, Debug)]
pub struct ProgressiveRevealer {
    path: Arc<VectorPath>,
    run: Option<RunId>,
    progress: f64,
}

impl Default for ProgressiveRevealer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressiveRevealer {
    pub fn new() -> Self {
        Self {
            path: Arc::new(VectorPath::empty()),
            run: None,
            progress: 0.0,
        }
    }

    pub fn state(&self) -> RevealState {
        match self.run {
            None => RevealState::Idle,
            Some(_) if self.progress >= 1.0 => RevealState::Complete,
            Some(_) => RevealState::Animating,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn run(&self) -> Option<RunId> {
        self.run
    }

    pub fn source(&self) -> &Arc<VectorPath> {
        &self.path
    }

    /// Begin `run` over `path` from progress 0, discarding whatever was visible before.
    pub fn restart(&mut self, path: Arc<VectorPath>, run: RunId) {
        tracing::debug!(run = run.0, commands = path.len(), "reveal restarted");
        self.path = path;
        self.run = Some(run);
        self.progress = 0.0;
    }

    /// Swap the source path (same route, new viewport) while keeping progress.
    pub fn replace_path(&mut self, path: Arc<VectorPath>) {
        self.path = path;
    }

    /// Stop without a completed run.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn visible_commands(&self) -> usize {
        visible_budget(self.path.len(), self.progress)
    }

    /// Rebuild the partial path from scratch for the current progress.
    pub fn partial_path(&self) -> VectorPath {
        self.path.prefix(self.visible_commands())
    }

    pub fn frame(&self) -> Option<RevealFrame> {
        let run = self.run?;
        Some(RevealFrame {
            run,
            progress: self.progress,
            visible_commands: self.visible_commands(),
            total_commands: self.path.len(),
            path: self.partial_path(),
        })
    }

    /// Apply a clock tick.
    ///
    /// Returns the new frame, or `None` for stale runs, non-finite progress, and ticks arriving
    /// after completion.
    pub fn on_tick(&mut self, tick: ClockTick) -> Option<RevealFrame> {
        if self.run != Some(tick.run) {
            tracing::trace!(
                tick_run = tick.run.0,
                current = ?self.run.map(|r| r.0),
                "dropping stale tick"
            );
            return None;
        }
        if !tick.progress.is_finite() || self.state() == RevealState::Complete {
            return None;
        }

        self.progress = tick.progress.clamp(0.0, 1.0).max(self.progress);
        self.frame()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/reveal.rs"]
mod tests;
