use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{WavesError, WavesResult};

/// Default cold-to-warm temperature palette.
pub const DEFAULT_GRADIENT: [&str; 5] = ["#2E3192", "#1BFFFF", "#FFFFFF", "#FFD700", "#FF4500"];

/// Points-to-pixels factor at the default 100 dpi.
const PT_TO_PX: f32 = 100.0 / 72.0;

/// Visualizer configuration.
///
/// Every field has a default matching the stock animation, so a JSON config only needs to list
/// the fields it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisualizerConfig {
    /// Output size in pixels.
    pub canvas: Canvas,
    /// Export frame rate.
    pub fps: Fps,
    /// Preview tick interval in milliseconds.
    pub interval_ms: u64,
    /// Number of synthetic days.
    pub series_len: usize,
    /// How many times the series is played per animation.
    pub cycles: u32,
    /// Number of overlapping waveform lines.
    pub lines: usize,
    /// Sample count per waveform.
    pub samples: usize,
    /// Plot-space x range `[min, max]`.
    pub x_range: [f64; 2],
    /// Plot-space y range `[min, max]`.
    pub y_range: [f64; 2],
    /// Waveform stroke width in pixels.
    pub line_width_px: f32,
    /// Background color (straight RGBA8).
    pub background: [u8; 4],
    /// Gradient stops as `#RRGGBB`, evenly spaced from cold to warm.
    pub gradient: Vec<String>,
    /// Title overlay text.
    pub title: String,
    /// CSS-style font family list for overlays.
    pub font_family: String,
    /// RNG seed. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Keep the preview looping after the last frame.
    pub repeat: bool,
    /// Directory receiving exported files.
    pub out_dir: PathBuf,
    /// File stem of the exported animation (extension chosen by the encoder).
    pub out_stem: String,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 1200,
                height: 800,
            },
            fps: Fps { num: 5, den: 1 },
            interval_ms: 300,
            series_len: 30,
            cycles: 2,
            lines: 5,
            samples: 1000,
            x_range: [0.0, 10.0],
            y_range: [-3.0, 3.0],
            line_width_px: 2.5 * PT_TO_PX,
            background: [0, 0, 0, 255],
            gradient: DEFAULT_GRADIENT.iter().map(|s| (*s).to_owned()).collect(),
            title: "Weather Data Art".to_owned(),
            font_family: "DejaVu Sans, Arial, sans-serif".to_owned(),
            seed: None,
            repeat: true,
            out_dir: PathBuf::from("output"),
            out_stem: "weather_visualization".to_owned(),
        }
    }
}

impl VisualizerConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> WavesResult<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path)
            .with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(std::io::BufReader::new(f))
            .map_err(|e| WavesError::serde(format!("parse config '{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check ranges and sizes.
    pub fn validate(&self) -> WavesResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(WavesError::validation("canvas width/height must be non-zero"));
        }
        if self.canvas.width > u32::from(u16::MAX) || self.canvas.height > u32::from(u16::MAX) {
            return Err(WavesError::validation(format!(
                "canvas {}x{} exceeds the {}px raster limit",
                self.canvas.width,
                self.canvas.height,
                u16::MAX
            )));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        if self.interval_ms == 0 {
            return Err(WavesError::validation("interval_ms must be > 0"));
        }
        if self.series_len == 0 {
            return Err(WavesError::validation("series_len must be > 0"));
        }
        if self.cycles == 0 {
            return Err(WavesError::validation("cycles must be > 0"));
        }
        if self.lines == 0 {
            return Err(WavesError::validation("lines must be > 0"));
        }
        if self.samples < 2 {
            return Err(WavesError::validation("samples must be >= 2"));
        }
        check_range("x_range", self.x_range)?;
        check_range("y_range", self.y_range)?;
        if !self.line_width_px.is_finite() || self.line_width_px <= 0.0 {
            return Err(WavesError::validation(
                "line_width_px must be finite and > 0",
            ));
        }
        if self.gradient.len() < 2 {
            return Err(WavesError::validation("gradient needs at least two stops"));
        }
        if self.out_stem.trim().is_empty() {
            return Err(WavesError::validation("out_stem must be non-empty"));
        }
        Ok(())
    }

    /// Frames in one full animation (`series_len × cycles`).
    pub fn total_frames(&self) -> u64 {
        (self.series_len as u64) * u64::from(self.cycles)
    }

    /// Primary (MP4) export path.
    pub fn video_path(&self) -> PathBuf {
        self.out_dir.join(format!("{}.mp4", self.out_stem))
    }

    /// Fallback (GIF) export path: same stem, different extension.
    pub fn gif_path(&self) -> PathBuf {
        self.out_dir.join(format!("{}.gif", self.out_stem))
    }

    /// Default preview file path.
    pub fn preview_path(&self) -> PathBuf {
        self.out_dir.join(format!("{}_preview.png", self.out_stem))
    }

    /// Preview tick interval.
    pub fn interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.interval_ms)
    }
}

/// Font size in pixels for a size given in points at the default 100 dpi.
pub fn pt_to_px(pt: f32) -> f32 {
    pt * PT_TO_PX
}

fn check_range(name: &str, r: [f64; 2]) -> WavesResult<()> {
    if !r[0].is_finite() || !r[1].is_finite() || r[0] >= r[1] {
        return Err(WavesError::validation(format!(
            "{name} must be finite with min < max (got [{}, {}])",
            r[0], r[1]
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
