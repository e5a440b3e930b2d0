use crate::foundation::core::{BezPath, Point};
use crate::mapping::gradient::Rgb8;
use crate::synth::waveform::Waveform;

/// Affine mapping from plot coordinates (y up) onto a pixel canvas (y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotSpace {
    /// Plot x range `[min, max]`.
    pub x_range: [f64; 2],
    /// Plot y range `[min, max]`.
    pub y_range: [f64; 2],
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
}

impl PlotSpace {
    /// Pixel position of plot point `(x, y)`.
    pub fn to_px(&self, x: f64, y: f64) -> Point {
        let [x0, x1] = self.x_range;
        let [y0, y1] = self.y_range;
        Point::new(
            (x - x0) / (x1 - x0) * self.width,
            (y1 - y) / (y1 - y0) * self.height,
        )
    }

    /// Polyline through the finite samples of `wave`, in pixels.
    pub fn polyline(&self, wave: &Waveform) -> BezPath {
        let mut path = BezPath::new();
        let mut started = false;
        for (x, y) in wave.points() {
            if !x.is_finite() || !y.is_finite() {
                started = false;
                continue;
            }
            let p = self.to_px(x, y);
            if started {
                path.line_to(p);
            } else {
                path.move_to(p);
                started = true;
            }
        }
        path
    }
}

/// A waveform with its stroke color.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledLine {
    /// Samples in plot space.
    pub wave: Waveform,
    /// Straight RGB color.
    pub color: Rgb8,
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the anchor.
    Start,
    /// Text is centered on the anchor.
    Middle,
    /// Text ends at the anchor.
    End,
}

impl TextAnchor {
    pub(crate) fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Text overlay anchored at a plot-space baseline point.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    /// Content.
    pub text: String,
    /// Anchor x in plot space.
    pub x: f64,
    /// Baseline y in plot space.
    pub y: f64,
    /// Alignment around `x`.
    pub anchor: TextAnchor,
    /// Font size in pixels.
    pub size_px: f32,
    /// Straight RGB color.
    pub color: Rgb8,
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
}

/// Everything drawn for one frame, back to front.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameScene {
    /// Mapping used by lines and labels.
    pub space: PlotSpace,
    /// Waveforms, drawn in order.
    pub lines: Vec<StyledLine>,
    /// Labels, drawn over the lines.
    pub labels: Vec<TextLabel>,
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
