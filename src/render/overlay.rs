use std::fmt::Write as _;
use std::sync::Arc;

use crate::foundation::error::{WavesError, WavesResult};
use crate::foundation::math::premul_over_px;
use crate::render::scene::{PlotSpace, TextLabel};

/// Rasterizes text labels through an SVG document using system fonts.
pub struct TextOverlay {
    opts: usvg::Options<'static>,
    font_family: String,
}

impl TextOverlay {
    /// Overlay that resolves `font_family` against the fonts installed on the system.
    pub fn with_system_fonts(font_family: impl Into<String>) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts for text overlays");
        Self::with_fontdb(font_family, db)
    }

    /// Overlay backed by an explicit font database.
    pub fn with_fontdb(font_family: impl Into<String>, db: usvg::fontdb::Database) -> Self {
        let mut opts = usvg::Options::default();
        opts.fontdb = Arc::new(db);
        Self {
            opts,
            font_family: font_family.into(),
        }
    }

    /// Number of font faces available for text.
    pub fn font_faces(&self) -> usize {
        self.opts.fontdb.len()
    }

    /// SVG document holding `labels` on a `width`×`height` canvas.
    pub fn svg_document(&self, labels: &[TextLabel], space: &PlotSpace) -> String {
        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = space.width,
            h = space.height,
        );
        for label in labels {
            let p = space.to_px(label.x, label.y);
            let [r, g, b] = label.color;
            let _ = write!(
                svg,
                r#"<text x="{x:.2}" y="{y:.2}" font-family="{family}" font-size="{size:.2}" fill="rgb({r},{g},{b})" fill-opacity="{alpha:.3}" text-anchor="{anchor}">{text}</text>"#,
                x = p.x,
                y = p.y,
                family = escape_xml(&self.font_family),
                size = label.size_px,
                alpha = label.alpha.clamp(0.0, 1.0),
                anchor = label.anchor.as_svg(),
                text = escape_xml(&label.text),
            );
        }
        svg.push_str("</svg>");
        svg
    }

    /// Draw `labels` over premultiplied RGBA8 `dst`.
    pub fn draw(
        &self,
        labels: &[TextLabel],
        space: &PlotSpace,
        dst: &mut [u8],
        width: u32,
        height: u32,
    ) -> WavesResult<()> {
        if labels.is_empty() {
            return Ok(());
        }
        if dst.len() != (width as usize) * (height as usize) * 4 {
            return Err(WavesError::evaluation(
                "overlay target size mismatch with width*height*4",
            ));
        }

        let svg = self.svg_document(labels, space);
        let tree = usvg::Tree::from_str(&svg, &self.opts)
            .map_err(|e| WavesError::evaluation(format!("parse overlay svg: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| WavesError::evaluation("failed to allocate overlay pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        // tiny-skia pixmaps are premultiplied RGBA8, same as the frame.
        for (d, s) in dst.chunks_exact_mut(4).zip(pixmap.data().chunks_exact(4)) {
            if s[3] == 0 {
                continue;
            }
            let out = premul_over_px([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
            d.copy_from_slice(&out);
        }
        Ok(())
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/overlay.rs"]
mod tests;
