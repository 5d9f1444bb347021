use crate::style::color::RouteColor;
use crate::style::route_style::RouteStyle;

pub use kurbo::{Cap, Join};

/// How the visible path is stroked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeSpec {
    /// Pixels.
    pub width: f64,
    pub color: RouteColor,
    pub join: Join,
    pub cap: Cap,
    /// Blur radius of the soft edge in pixels; the stroke core stays solid.
    pub soft_edge: f64,
}

impl StrokeSpec {
    /// Round joins and caps with the style's width and color.
    pub fn from_style(style: &RouteStyle, soft_edge: f64) -> Self {
        Self {
            width: style.stroke_width,
            color: style.color,
            join: Join::Round,
            cap: Cap::Round,
            soft_edge,
        }
    }
}
