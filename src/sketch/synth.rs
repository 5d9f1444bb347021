use rand::Rng;

use crate::foundation::config::RendererConfig;
use crate::foundation::core::Point;
use crate::sketch::path::{PathCommand, VectorPath};

/// Turns projected points into a chain of quadratic curves with a freehand wobble.
///
/// Each segment `(prev, curr)` becomes a `QuadTo` ending at `curr` whose control point is the
/// segment midpoint nudged on each axis by a uniform offset in `[-m/2, m/2]`, where
/// `m = min(len * wobble_ratio, wobble_cap_px)`. The generator is supplied by the caller, so
/// output is reproducible only when the caller seeds it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSynthesizer {
    wobble_ratio: f64,
    wobble_cap_px: f64,
    hand_drawn: bool,
}

impl PathSynthesizer {
    pub fn new(config: &RendererConfig, hand_drawn: bool) -> Self {
        Self {
            wobble_ratio: config.wobble_ratio,
            wobble_cap_px: config.wobble_cap_px,
            hand_drawn,
        }
    }

    /// Wobble magnitude for a segment of length `distance`; zero when the effect is off.
    pub fn wobble_magnitude(&self, distance: f64) -> f64 {
        if !self.hand_drawn {
            return 0.0;
        }
        (distance * self.wobble_ratio).min(self.wobble_cap_px)
    }

    #[tracing::instrument(level = "trace", skip(self, points, rng), fields(n = points.len()))]
    pub fn synthesize<R: Rng + ?Sized>(&self, points: &[Point], rng: &mut R) -> VectorPath {
        let [first, rest @ ..] = points else {
            return VectorPath::empty();
        };
        if rest.is_empty() {
            return VectorPath::empty();
        }

        let mut commands = Vec::with_capacity(points.len());
        commands.push(PathCommand::MoveTo { to: *first });

        for pair in points.windows(2) {
            let (prev, curr) = (pair[0], pair[1]);
            let mid = prev.midpoint(curr);
            let magnitude = self.wobble_magnitude(prev.distance(curr));
            let ctrl = if magnitude > 0.0 {
                Point::new(
                    mid.x + (rng.r#gen::<f64>() - 0.5) * magnitude,
                    mid.y + (rng.r#gen::<f64>() - 0.5) * magnitude,
                )
            } else {
                mid
            };
            commands.push(PathCommand::QuadTo { ctrl, to: curr });
        }

        VectorPath::from_commands(commands)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/synth.rs"]
mod tests;
