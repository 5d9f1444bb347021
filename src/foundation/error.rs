/// Convenience result type used across routesketch.
pub type SketchResult<T> = Result<T, SketchError>;

/// Top-level error taxonomy used by renderer APIs.
///
/// Degenerate geometry (fewer than two points, zero-width bounds) is never reported here; those
/// cases have silent fallbacks inside the pipeline.
#[derive(thiserror::Error, Debug)]
pub enum SketchError {
    /// Invalid user-provided data (style, config, coordinates).
    #[error("validation error: {0}")]
    Validation(String),

    /// Zero, negative or non-finite drawing surface dimensions.
    #[error("invalid viewport: {width}x{height}")]
    InvalidViewport {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },

    /// Malformed route geometry (encoded polyline or GeoJSON).
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Errors while rasterizing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SketchError {
    /// Build a [`SketchError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SketchError::InvalidViewport`] value.
    pub fn invalid_viewport(width: f64, height: f64) -> Self {
        Self::InvalidViewport { width, height }
    }

    /// Build a [`SketchError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`SketchError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SketchError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SketchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
