use crate::foundation::error::{SketchError, SketchResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Drawing surface size in pixels.
///
/// Construction rejects zero, negative and non-finite dimensions, so every `Viewport` in the
/// pipeline is usable as a divisor.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Validate and build a viewport.
    pub fn new(width: f64, height: f64) -> SketchResult<Self> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if !ok(width) || !ok(height) {
            return Err(SketchError::invalid_viewport(width, height));
        }
        Ok(Self { width, height })
    }

    /// Surface width.
    pub fn width(self) -> f64 {
        self.width
    }

    /// Surface height.
    pub fn height(self) -> f64 {
        self.height
    }

    /// Center of the surface.
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Full surface rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Pixel dimensions for raster surfaces (rounded up).
    pub fn pixel_size(self) -> SketchResult<(u16, u16)> {
        let to_px = |v: f64| -> SketchResult<u16> {
            let px = v.ceil();
            if px > f64::from(u16::MAX) {
                return Err(SketchError::render(format!(
                    "viewport dimension {v} exceeds raster limit"
                )));
            }
            Ok(px as u16)
        };
        Ok((to_px(self.width)?, to_px(self.height)?))
    }
}

impl<'de> serde::Deserialize<'de> for Viewport {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            width: f64,
            height: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.width, raw.height).map_err(serde::de::Error::custom)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Premultiply a straight-alpha color.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Byte array in RGBA order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
