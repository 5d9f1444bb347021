use std::ops::RangeInclusive;

use crate::foundation::error::{SketchError, SketchResult};
use crate::style::color::RouteColor;

/// Swatches offered by the style picker, in display order.
pub const PALETTE: [RouteColor; 8] = [
    RouteColor::rgb(0xFF, 0x57, 0x33),
    RouteColor::rgb(0x33, 0xFF, 0x57),
    RouteColor::rgb(0x33, 0x57, 0xFF),
    RouteColor::rgb(0xFF, 0x33, 0xF5),
    RouteColor::rgb(0x33, 0xFF, 0xF5),
    RouteColor::rgb(0xF5, 0xFF, 0x33),
    RouteColor::rgb(0x8B, 0x33, 0xFF),
    RouteColor::rgb(0xFF, 0x8B, 0x33),
];

/// Stroke widths selectable in the style picker, in pixels.
pub const STROKE_WIDTH_RANGE: RangeInclusive<f64> = 1.0..=10.0;

/// How a route stroke should look. Owned by the caller and read-only to the renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStyle {
    pub color: RouteColor,
    /// Pixels.
    pub stroke_width: f64,
    /// Perturb curve control points for a sketched look.
    pub hand_drawn_effect: bool,
}

impl Default for RouteStyle {
    fn default() -> Self {
        Self {
            color: PALETTE[0],
            stroke_width: 3.0,
            hand_drawn_effect: true,
        }
    }
}

impl RouteStyle {
    /// Copy with a stroke width clamped into [`STROKE_WIDTH_RANGE`].
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = if width.is_nan() {
            *STROKE_WIDTH_RANGE.start()
        } else {
            width.clamp(*STROKE_WIDTH_RANGE.start(), *STROKE_WIDTH_RANGE.end())
        };
        self
    }

    pub fn with_color(mut self, color: RouteColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_hand_drawn_effect(mut self, on: bool) -> Self {
        self.hand_drawn_effect = on;
        self
    }

    pub fn validate(&self) -> SketchResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(SketchError::validation(format!(
                "strokeWidth must be finite and > 0 (got {})",
                self.stroke_width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/route_style.rs"]
mod tests;
