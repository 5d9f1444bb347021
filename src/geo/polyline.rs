//! Route geometry as delivered by the route API: either an encoded polyline string or a
//! GeoJSON `LineString`.

use crate::foundation::error::{SketchError, SketchResult};
use crate::geo::route::{Route, RoutePoint};

const POLYLINE_FACTOR: f64 = 1e5;

/// Decode a polyline in the common 5-digit precision encoding.
pub fn decode_polyline(encoded: &str) -> SketchResult<Vec<RoutePoint>> {
    let bytes = encoded.as_bytes();
    let mut pos = 0usize;
    let mut lat = 0i64;
    let mut lng = 0i64;
    let mut out = Vec::new();

    while pos < bytes.len() {
        lat += next_delta(bytes, &mut pos)?;
        if pos >= bytes.len() {
            return Err(SketchError::geometry(
                "polyline ends after a latitude without its longitude",
            ));
        }
        lng += next_delta(bytes, &mut pos)?;
        out.push(RoutePoint::new(
            lat as f64 / POLYLINE_FACTOR,
            lng as f64 / POLYLINE_FACTOR,
        ));
    }
    Ok(out)
}

fn next_delta(bytes: &[u8], pos: &mut usize) -> SketchResult<i64> {
    let mut result = 0i64;
    let mut shift = 0u32;
    loop {
        let Some(&byte) = bytes.get(*pos) else {
            return Err(SketchError::geometry("truncated polyline chunk"));
        };
        *pos += 1;
        let chunk = i64::from(byte)
            .checked_sub(63)
            .filter(|c| (0..64).contains(c))
            .ok_or_else(|| {
                SketchError::geometry(format!(
                    "invalid polyline byte {byte:#04x} at offset {}",
                    *pos - 1
                ))
            })?;
        if shift > 55 {
            return Err(SketchError::geometry("polyline value overflows 64 bits"));
        }
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        if chunk < 0x20 {
            break;
        }
    }
    Ok(if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

/// Encode points with 5-digit precision.
pub fn encode_polyline(points: &[RoutePoint]) -> String {
    let mut out = String::new();
    let mut prev = (0i64, 0i64);
    for p in points {
        let lat = (p.latitude * POLYLINE_FACTOR).round() as i64;
        let lng = (p.longitude * POLYLINE_FACTOR).round() as i64;
        push_value(&mut out, lat - prev.0);
        push_value(&mut out, lng - prev.1);
        prev = (lat, lng);
    }
    out
}

fn push_value(out: &mut String, delta: i64) {
    let mut v = if delta < 0 { !(delta << 1) } else { delta << 1 };
    while v >= 0x20 {
        out.push(char::from((0x20 | (v & 0x1f)) as u8 + 63));
        v >>= 5;
    }
    out.push(char::from(v as u8 + 63));
}

#[derive(serde::Deserialize)]
#[serde(tag = "type")]
enum GeoJson {
    LineString { coordinates: Vec<Vec<f64>> },
    Feature { geometry: Box<GeoJson> },
}

/// Parsed route geometry.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteGeometry {
    /// Decoded encoded-polyline string.
    Polyline(Vec<RoutePoint>),
    /// Decoded GeoJSON `LineString` (positions are `[lng, lat]` on the wire).
    LineString(Vec<RoutePoint>),
}

impl RouteGeometry {
    /// Sniff the representation: JSON objects are GeoJSON, anything else is an encoded polyline.
    pub fn parse(raw: &str) -> SketchResult<Self> {
        let trimmed = raw.trim();
        if trimmed.starts_with('{') {
            let gj: GeoJson = serde_json::from_str(trimmed)
                .map_err(|e| SketchError::geometry(format!("parse GeoJSON geometry: {e}")))?;
            return Ok(Self::LineString(line_string_points(gj)?));
        }
        Ok(Self::Polyline(decode_polyline(trimmed)?))
    }

    /// Decoded points in travel order.
    pub fn points(&self) -> &[RoutePoint] {
        match self {
            Self::Polyline(p) | Self::LineString(p) => p,
        }
    }

    pub fn into_route(self) -> Route {
        match self {
            Self::Polyline(p) | Self::LineString(p) => Route::new(p),
        }
    }
}

fn line_string_points(gj: GeoJson) -> SketchResult<Vec<RoutePoint>> {
    match gj {
        GeoJson::Feature { geometry } => line_string_points(*geometry),
        GeoJson::LineString { coordinates } => coordinates
            .iter()
            .enumerate()
            .map(|(i, pos)| match pos.as_slice() {
                [lng, lat, ..] => Ok(RoutePoint::new(*lat, *lng)),
                _ => Err(SketchError::geometry(format!(
                    "GeoJSON position {i} needs at least two values"
                ))),
            })
            .collect(),
    }
}

/// Route payload returned by the route API.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteData {
    /// Explicit coordinates, when the API sends them.
    #[serde(default)]
    pub points: Vec<RoutePoint>,
    /// Metres.
    #[serde(default)]
    pub distance: f64,
    /// Seconds.
    #[serde(default)]
    pub duration: f64,
    /// Encoded polyline or GeoJSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<String>,
}

impl RouteData {
    /// Explicit points when present, otherwise the decoded geometry.
    ///
    /// The result is validated against coordinate ranges.
    pub fn route(&self) -> SketchResult<Route> {
        let route = match (&self.points, &self.geometry) {
            (points, _) if !points.is_empty() => Route::new(points.clone()),
            (_, Some(geometry)) => RouteGeometry::parse(geometry)?.into_route(),
            (_, None) => Route::default(),
        };
        route.validate()?;
        Ok(route)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geo/polyline.rs"]
mod tests;
