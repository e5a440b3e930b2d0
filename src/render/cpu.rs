use crate::foundation::core::{BezPath, Canvas};
use crate::foundation::error::{WavesError, WavesResult};
use crate::render::backend::FrameRGBA;
use crate::render::overlay::TextOverlay;
use crate::render::scene::FrameScene;

/// Options for [`CpuRenderer`].
#[derive(Clone, Debug)]
pub struct CpuRendererOpts {
    /// Output size.
    pub canvas: Canvas,
    /// Background fill (straight RGBA8).
    pub clear_rgba: [u8; 4],
    /// Waveform stroke width in pixels.
    pub line_width_px: f32,
}

/// CPU raster backend powered by `vello_cpu` for strokes and `resvg` for text.
pub struct CpuRenderer {
    opts: CpuRendererOpts,
    width: u16,
    height: u16,
    ctx: Option<vello_cpu::RenderContext>,
    pixmap: Option<vello_cpu::Pixmap>,
    overlay: TextOverlay,
}

impl CpuRenderer {
    /// Create a renderer; fails when the canvas does not fit a `u16` raster.
    pub fn new(opts: CpuRendererOpts, overlay: TextOverlay) -> WavesResult<Self> {
        let width: u16 = opts
            .canvas
            .width
            .try_into()
            .map_err(|_| WavesError::validation("canvas width exceeds u16"))?;
        let height: u16 = opts
            .canvas
            .height
            .try_into()
            .map_err(|_| WavesError::validation("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(WavesError::validation("canvas width/height must be non-zero"));
        }
        if !opts.line_width_px.is_finite() || opts.line_width_px <= 0.0 {
            return Err(WavesError::validation(
                "line width must be finite and > 0",
            ));
        }
        Ok(Self {
            opts,
            width,
            height,
            ctx: None,
            pixmap: None,
            overlay,
        })
    }

    /// Rasterize `scene` into premultiplied RGBA8.
    pub fn render(&mut self, scene: &FrameScene) -> WavesResult<FrameRGBA> {
        let (w, h) = (self.width, self.height);
        let mut ctx = self
            .ctx
            .take()
            .unwrap_or_else(|| vello_cpu::RenderContext::new(w, h));
        ctx.reset();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        let [r, g, b, a] = self.opts.clear_rgba;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(w),
            f64::from(h),
        ));

        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(f64::from(
            self.opts.line_width_px,
        )));
        for line in &scene.lines {
            let path = scene.space.polyline(&line.wave);
            if path.elements().len() < 2 {
                continue;
            }
            let [r, g, b] = line.color;
            let alpha = (line.alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, alpha));
            ctx.stroke_path(&bezpath_to_cpu(&path));
        }

        let mut pixmap = self
            .pixmap
            .take()
            .unwrap_or_else(|| vello_cpu::Pixmap::new(w, h));
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        let mut data = pixmap.data_as_u8_slice().to_vec();
        self.ctx = Some(ctx);
        self.pixmap = Some(pixmap);

        self.overlay.draw(
            &scene.labels,
            &scene.space,
            &mut data,
            u32::from(w),
            u32::from(h),
        )?;

        Ok(FrameRGBA {
            width: u32::from(w),
            height: u32::from(h),
            data,
            premultiplied: true,
        })
    }
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
