use crate::foundation::config::MAX_SOFT_EDGE;
use crate::foundation::core::{BezPath, Rgba8Premul, Viewport};
use crate::foundation::error::{SketchError, SketchResult};
use crate::render::blur::{blur_rgba8_premul, radius_for_sigma};
use crate::render::frame::FrameRGBA;
use crate::render::renderer::RenderFrame;
use crate::render::stroke::StrokeSpec;

/// Options for [`CpuSurface`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuSurfaceOpts {
    pub(crate) clear_rgba: Option<[u8; 4]>,
}

impl CpuSurfaceOpts {
    /// Return options with a straight-alpha background color; `None` keeps it transparent.
    pub fn with_clear_rgba(mut self, clear: Option<[u8; 4]>) -> Self {
        self.clear_rgba = clear;
        self
    }
}

/// Rasterizes [`RenderFrame`]s with `vello_cpu`.
///
/// The stroke is drawn on its own layer, softened with a "solid" blur (the blurred halo is
/// merged under the untouched stroke) and composited over the background.
#[derive(Debug)]
pub struct CpuSurface {
    width: u16,
    height: u16,
    opts: CpuSurfaceOpts,
}

impl CpuSurface {
    pub fn new(viewport: Viewport, opts: CpuSurfaceOpts) -> SketchResult<Self> {
        let (width, height) = viewport.pixel_size()?;
        Ok(Self {
            width,
            height,
            opts,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (u32::from(self.width), u32::from(self.height))
    }

    #[tracing::instrument(level = "trace", skip(self, frame), fields(visible = frame.visible_commands))]
    pub fn draw(&self, frame: &RenderFrame) -> SketchResult<FrameRGBA> {
        self.draw_path(&frame.path, &frame.stroke)
    }

    /// Stroke an arbitrary path; an empty path yields the background only.
    pub fn draw_path(&self, path: &BezPath, stroke: &StrokeSpec) -> SketchResult<FrameRGBA> {
        if !(0.0..=MAX_SOFT_EDGE).contains(&stroke.soft_edge) {
            return Err(SketchError::validation(format!(
                "soft_edge must be within [0, {MAX_SOFT_EDGE}] (got {})",
                stroke.soft_edge
            )));
        }

        let (w, h) = self.size();
        let mut layer = vello_cpu::Pixmap::new(self.width, self.height);

        if !path.elements().is_empty() && stroke.width > 0.0 {
            let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
            let c = stroke.color;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
            ctx.set_stroke(stroke_to_cpu(stroke));
            ctx.stroke_path(&bezpath_to_cpu(path));
            ctx.flush();
            ctx.render_to_pixmap(&mut layer);
        }

        let mut stroke_px = layer.data_as_u8_slice().to_vec();
        let radius = radius_for_sigma(stroke.soft_edge);
        if radius > 0 {
            let halo = blur_rgba8_premul(&stroke_px, w, h, radius, stroke.soft_edge)?;
            merge_solid(&mut stroke_px, &halo);
        }

        let mut data = match self.opts.clear_rgba {
            Some([r, g, b, a]) => Rgba8Premul::from_straight_rgba(r, g, b, a)
                .to_array()
                .repeat((w as usize) * (h as usize)),
            None => vec![0u8; (w as usize) * (h as usize) * 4],
        };
        if data.len() != stroke_px.len() {
            return Err(SketchError::render("stroke layer size mismatch"));
        }
        composite_over(&mut data, &stroke_px);

        Ok(FrameRGBA {
            width: w,
            height: h,
            data,
        })
    }
}

/// Keep the sharper of stroke and halo per pixel, so blur only adds an outer fringe.
fn merge_solid(stroke: &mut [u8], halo: &[u8]) {
    for (s, b) in stroke.chunks_exact_mut(4).zip(halo.chunks_exact(4)) {
        if b[3] > s[3] {
            s.copy_from_slice(b);
        }
    }
}

fn composite_over(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let inv = 255 - u16::from(s[3]);
        for c in 0..4 {
            let v = u16::from(s[c]) + ((u16::from(d[c]) * inv + 127) / 255);
            d[c] = v.min(255) as u8;
        }
    }
}

fn stroke_to_cpu(stroke: &StrokeSpec) -> vello_cpu::kurbo::Stroke {
    use kurbo::{Cap, Join};

    let join = match stroke.join {
        Join::Bevel => vello_cpu::kurbo::Join::Bevel,
        Join::Miter => vello_cpu::kurbo::Join::Miter,
        Join::Round => vello_cpu::kurbo::Join::Round,
    };
    let cap = match stroke.cap {
        Cap::Butt => vello_cpu::kurbo::Cap::Butt,
        Cap::Square => vello_cpu::kurbo::Cap::Square,
        Cap::Round => vello_cpu::kurbo::Cap::Round,
    };
    vello_cpu::kurbo::Stroke::new(stroke.width)
        .with_join(join)
        .with_caps(cap)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
