use std::path::{Path, PathBuf};

use crate::encode::ffmpeg::ensure_parent_dir;
use crate::encode::sink::{FrameSink, SinkConfig, check_config, check_frame};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{WavesError, WavesResult};
use crate::render::backend::FrameRGBA;

/// Write one frame as an opaque RGBA PNG, flattening alpha over `bg_rgba`.
pub fn save_png(path: &Path, frame: &FrameRGBA, bg_rgba: [u8; 4]) -> WavesResult<()> {
    ensure_parent_dir(path)?;
    let rgba = frame.to_opaque_rgba8(bg_rgba)?;
    image::save_buffer_with_format(
        path,
        &rgba,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| WavesError::encode(format!("write png '{}': {e}", path.display())))
}

/// Sink that keeps a single PNG file showing the most recent frame.
///
/// Each frame is written to a sibling temp file and renamed over the target, so viewers watching
/// the file never observe a half-written image.
#[derive(Debug)]
pub struct PngPreviewSink {
    path: PathBuf,
    bg_rgba: [u8; 4],
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
    written: u64,
}

impl PngPreviewSink {
    /// Preview sink writing to `path` over a black background.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            bg_rgba: [0, 0, 0, 255],
            cfg: None,
            last_idx: None,
            written: 0,
        }
    }

    /// Override the background used for alpha flattening.
    pub fn with_background(mut self, bg_rgba: [u8; 4]) -> Self {
        self.bg_rgba = bg_rgba;
        self
    }

    /// Target path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Frames written since the sink was created.
    pub fn frames_written(&self) -> u64 {
        self.written
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl FrameSink for PngPreviewSink {
    fn begin(&mut self, cfg: SinkConfig) -> WavesResult<()> {
        check_config(&cfg)?;
        ensure_parent_dir(&self.path)?;
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> WavesResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| WavesError::encode("preview sink not started"))?;
        check_frame(&cfg, &mut self.last_idx, idx, frame)?;

        let tmp = self.temp_path();
        save_png(&tmp, frame, self.bg_rgba)?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            WavesError::encode(format!(
                "replace preview '{}': {e}",
                self.path.display()
            ))
        })?;
        self.written += 1;
        tracing::trace!(frame = idx.0, path = %self.path.display(), "preview updated");
        Ok(())
    }

    fn end(&mut self) -> WavesResult<()> {
        self.cfg = None;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("preview '{}'", self.path.display())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
