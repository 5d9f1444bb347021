use crate::animation::ease::Ease;
use crate::foundation::config::RendererConfig;
use crate::foundation::error::{SketchError, SketchResult};

/// Identifies one animation run. Every [`AnimationClock::start`] issues a fresh, larger id.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RunId(pub u64);

/// Progress value delivered to the revealer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ClockTick {
    pub run: RunId,
    /// Eased progress in `[0, 1]`.
    pub progress: f64,
}

#[derive(Clone, Copy, Debug)]
struct ActiveRun {
    id: RunId,
    started_at: f64,
    last_progress: f64,
    finished: bool,
}

/// Fixed-duration scalar animator driving reveal progress from 0 to 1.
///
/// Time is an abstract monotonic unit (milliseconds in a UI host). Starting a run supersedes
/// the previous one; ticks carry their [`RunId`] so consumers can drop stale deliveries.
#[derive(Clone, Debug)]
pub struct AnimationClock {
    duration: f64,
    ease: Ease,
    next_run: u64,
    active: Option<ActiveRun>,
}

impl AnimationClock {
    pub fn new(duration: f64, ease: Ease) -> SketchResult<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(SketchError::validation("animation duration must be > 0"));
        }
        Ok(Self {
            duration,
            ease,
            next_run: 0,
            active: None,
        })
    }

    pub fn from_config(config: &RendererConfig) -> SketchResult<Self> {
        Self::new(config.duration, config.ease)
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Begin a new run at `now`, superseding any run in flight.
    pub fn start(&mut self, now: f64) -> RunId {
        self.next_run += 1;
        let id = RunId(self.next_run);
        if let Some(prev) = self.active.filter(|r| !r.finished) {
            tracing::debug!(superseded = prev.id.0, run = id.0, "animation run superseded");
        }
        self.active = Some(ActiveRun {
            id,
            started_at: now,
            last_progress: 0.0,
            finished: false,
        });
        id
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn current_run(&self) -> Option<RunId> {
        self.active.map(|r| r.id)
    }

    /// Whether a run is active and has not delivered its final tick.
    pub fn is_running(&self) -> bool {
        self.active.is_some_and(|r| !r.finished)
    }

    /// Eased progress after `elapsed` time units; exactly 1 once the duration has passed.
    pub fn progress_at(&self, elapsed: f64) -> f64 {
        eased_progress(self.duration, self.ease, elapsed)
    }

    /// Produce the tick for time `now`.
    ///
    /// Returns `None` when no run is active or the run already delivered progress 1. Within a
    /// run the delivered progress never decreases, even if `now` moves backwards.
    pub fn sample(&mut self, now: f64) -> Option<ClockTick> {
        let (duration, ease) = (self.duration, self.ease);
        let run = self.active.as_mut().filter(|r| !r.finished)?;

        let progress =
            eased_progress(duration, ease, now - run.started_at).max(run.last_progress);
        run.last_progress = progress;
        if progress >= 1.0 {
            run.finished = true;
            tracing::debug!(run = run.id.0, "animation run complete");
        }
        Some(ClockTick {
            run: run.id,
            progress,
        })
    }
}

fn eased_progress(duration: f64, ease: Ease, elapsed: f64) -> f64 {
    if elapsed >= duration {
        return 1.0;
    }
    ease.apply(elapsed.max(0.0) / duration)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
