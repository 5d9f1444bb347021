use std::path::Path;

use anyhow::Context as _;

use crate::animation::ease::Ease;
use crate::foundation::error::{SketchError, SketchResult};

/// Largest accepted soft-edge blur, in pixels.
pub const MAX_SOFT_EDGE: f64 = 64.0;

/// Tunables for the whole renderer pipeline.
///
/// Every field has a default, so a partial JSON document (or `{}`) is a valid config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererConfig {
    /// Fraction of each axis range added on both sides before fitting.
    pub padding_ratio: f64,
    /// Padded range (degrees) used when every point shares a coordinate on an axis.
    pub min_range_deg: f64,
    /// Wobble magnitude as a fraction of segment length.
    pub wobble_ratio: f64,
    /// Upper bound of the wobble magnitude, in pixels.
    pub wobble_cap_px: f64,
    /// Reveal duration in clock time units.
    pub duration: f64,
    /// Timing curve for the reveal.
    pub ease: Ease,
    /// Soft-edge blur radius applied to the stroke, in pixels.
    pub soft_edge: f64,
    /// Seed for the wobble generator; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            padding_ratio: 0.15,
            min_range_deg: 0.001,
            wobble_ratio: 0.15,
            wobble_cap_px: 3.0,
            duration: 1000.0,
            ease: Ease::default(),
            soft_edge: 0.5,
            seed: None,
        }
    }
}

impl RendererConfig {
    /// Reject values that would break projection or animation.
    pub fn validate(&self) -> SketchResult<()> {
        fn non_negative(name: &str, v: f64) -> SketchResult<()> {
            if !v.is_finite() || v < 0.0 {
                return Err(SketchError::validation(format!(
                    "{name} must be finite and >= 0 (got {v})"
                )));
            }
            Ok(())
        }

        non_negative("padding_ratio", self.padding_ratio)?;
        non_negative("wobble_ratio", self.wobble_ratio)?;
        non_negative("wobble_cap_px", self.wobble_cap_px)?;
        non_negative("soft_edge", self.soft_edge)?;
        if self.soft_edge > MAX_SOFT_EDGE {
            return Err(SketchError::validation(format!(
                "soft_edge must be <= {MAX_SOFT_EDGE} (got {})",
                self.soft_edge
            )));
        }
        if !self.min_range_deg.is_finite() || self.min_range_deg <= 0.0 {
            return Err(SketchError::validation("min_range_deg must be > 0"));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(SketchError::validation("duration must be > 0"));
        }
        Ok(())
    }

    /// Load and validate a JSON config file.
    pub fn from_json_file(path: &Path) -> SketchResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_slice(&bytes)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
