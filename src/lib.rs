//! routesketch renders travel routes as animated, hand-drawn strokes.
//!
//! # Pipeline overview
//!
//! 1. **Project**: `RoutePoint[] + Viewport -> Point[]` (padded, aspect-preserving fit, north up)
//! 2. **Synthesize**: `Point[] -> VectorPath` (quadratic curves with a bounded random wobble)
//! 3. **Reveal**: `VectorPath + progress -> partial path` (whole commands, `floor(n * progress)`)
//! 4. **Rasterize** (optional): `RenderFrame -> FrameRGBA` via the `vello_cpu` backend
//!
//! [`StylizedRouteRenderer`] ties the stages together behind a single `set_input` / `tick`
//! interface. It is single-threaded and frame-driven; every new route starts a new animation
//! run, and ticks from superseded runs are ignored.
//!
//! Route calculation, geocoding and persistence live in an external service; the
//! [`RouteData`] type only decodes what that service returns.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod geo;
mod render;
mod sketch;
mod style;

pub use animation::clock::{AnimationClock, ClockTick, RunId};
pub use animation::ease::Ease;
pub use animation::reveal::{ProgressiveRevealer, RevealFrame, RevealState, visible_budget};
pub use foundation::config::{MAX_SOFT_EDGE, RendererConfig};
pub use foundation::core::{Affine, BezPath, Point, Rect, Rgba8Premul, Vec2, Viewport};
pub use foundation::error::{SketchError, SketchResult};
pub use geo::polyline::{RouteData, RouteGeometry, decode_polyline, encode_polyline};
pub use geo::route::{BoundingBox, Route, RoutePoint};
pub use render::cpu::{CpuSurface, CpuSurfaceOpts};
pub use render::frame::FrameRGBA;
pub use render::renderer::{InputChange, RenderFrame, RenderInput, StylizedRouteRenderer};
pub use render::stroke::{Cap, Join, StrokeSpec};
pub use sketch::path::{PathCommand, VectorPath};
pub use sketch::projector::{Projection, Projector};
pub use sketch::synth::PathSynthesizer;
pub use style::color::RouteColor;
pub use style::route_style::{PALETTE, RouteStyle, STROKE_WIDTH_RANGE};
