use crate::foundation::config::RendererConfig;
use crate::foundation::core::{Point, Viewport};
use crate::geo::route::{BoundingBox, RoutePoint};

/// Fits geographic coordinates into a viewport.
///
/// Both axis ranges are padded by `padding_ratio` on each side, then one uniform scale is chosen
/// (the smaller of the width-fit and height-fit candidates) so the route keeps its shape.
/// Latitude grows upward, screen `y` grows downward, so the vertical axis is flipped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    viewport: Viewport,
    padding_ratio: f64,
    min_range_deg: f64,
}

/// Affine mapping produced by [`Projector::fit`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Projection {
    /// Pixels per degree on both axes.
    pub scale: f64,
    /// Geographic point that lands on the viewport center.
    pub center: RoutePoint,
    pub padded_lat_range: f64,
    pub padded_lng_range: f64,
    viewport_center: Point,
}

impl Projection {
    pub fn project(&self, p: RoutePoint) -> Point {
        Point::new(
            self.viewport_center.x + (p.longitude - self.center.longitude) * self.scale,
            self.viewport_center.y - (p.latitude - self.center.latitude) * self.scale,
        )
    }
}

impl Projector {
    pub fn new(viewport: Viewport, config: &RendererConfig) -> Self {
        Self {
            viewport,
            padding_ratio: config.padding_ratio,
            min_range_deg: config.min_range_deg,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn padded(&self, range: f64) -> f64 {
        if range == 0.0 {
            self.min_range_deg
        } else {
            range * (1.0 + 2.0 * self.padding_ratio)
        }
    }

    /// Compute the projection for `bounds`.
    ///
    /// A zero-range axis does not constrain the scale while the other axis has extent; only a
    /// route collapsed to a single point is fitted to `min_range_deg`.
    pub fn fit(&self, bounds: &BoundingBox) -> Projection {
        let (lat_range, lng_range) = (bounds.lat_range(), bounds.lng_range());
        let padded_lat_range = self.padded(lat_range);
        let padded_lng_range = self.padded(lng_range);

        let single_point = lat_range == 0.0 && lng_range == 0.0;
        let candidate = |extent: f64, range: f64, padded: f64| {
            if range == 0.0 && !single_point {
                f64::INFINITY
            } else {
                extent / padded
            }
        };
        let scale_x = candidate(self.viewport.width(), lng_range, padded_lng_range);
        let scale_y = candidate(self.viewport.height(), lat_range, padded_lat_range);

        Projection {
            scale: scale_x.min(scale_y),
            center: bounds.center(),
            padded_lat_range,
            padded_lng_range,
            viewport_center: self.viewport.center(),
        }
    }

    /// Project every point. Fewer than two points produce nothing.
    #[tracing::instrument(level = "trace", skip(points), fields(n = points.len()))]
    pub fn project(&self, points: &[RoutePoint]) -> Vec<Point> {
        if points.len() < 2 {
            return Vec::new();
        }
        let Some(bounds) = BoundingBox::from_points(points) else {
            return Vec::new();
        };
        if bounds.is_degenerate() {
            tracing::trace!(?bounds, "degenerate bounds, using minimum range fallback");
        }
        let projection = self.fit(&bounds);
        points.iter().map(|&p| projection.project(p)).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/projector.rs"]
mod tests;
