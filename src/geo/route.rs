use crate::foundation::error::{SketchError, SketchResult};

/// A geographic coordinate in degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoutePoint {
    /// Degrees north, `[-90, 90]`.
    pub latitude: f64,
    /// Degrees east, `[-180, 180]`.
    pub longitude: f64,
}

impl RoutePoint {
    /// Build a point from latitude/longitude degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether the coordinate is finite and inside the WGS84 ranges.
    pub fn is_valid(self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Axis-aligned extent of a route in degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Scan `points` once. `None` for an empty slice.
    pub fn from_points(points: &[RoutePoint]) -> Option<Self> {
        let first = points.first()?;
        let seed = Self {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_lng: first.longitude,
            max_lng: first.longitude,
        };
        Some(points[1..].iter().fold(seed, |acc, p| Self {
            min_lat: acc.min_lat.min(p.latitude),
            max_lat: acc.max_lat.max(p.latitude),
            min_lng: acc.min_lng.min(p.longitude),
            max_lng: acc.max_lng.max(p.longitude),
        }))
    }

    pub fn lat_range(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lng_range(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    /// Midpoint of both ranges.
    pub fn center(&self) -> RoutePoint {
        RoutePoint::new(
            (self.max_lat + self.min_lat) / 2.0,
            (self.max_lng + self.min_lng) / 2.0,
        )
    }

    /// True when either axis has zero extent.
    pub fn is_degenerate(&self) -> bool {
        self.lat_range() == 0.0 || self.lng_range() == 0.0
    }
}

/// An ordered, immutable sequence of coordinates.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Route {
    points: Vec<RoutePoint>,
}

impl Route {
    /// Wrap points without validating them.
    pub fn new(points: Vec<RoutePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[RoutePoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<RoutePoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// At least two points are needed to draw anything.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }

    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.points)
    }

    /// Reject the first non-finite or out-of-range coordinate.
    pub fn validate(&self) -> SketchResult<()> {
        match self.points.iter().position(|p| !p.is_valid()) {
            None => Ok(()),
            Some(idx) => {
                let p = self.points[idx];
                Err(SketchError::validation(format!(
                    "invalid coordinates at index {idx}: ({}, {})",
                    p.latitude, p.longitude
                )))
            }
        }
    }
}

impl From<Vec<RoutePoint>> for Route {
    fn from(points: Vec<RoutePoint>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geo/route.rs"]
mod tests;
