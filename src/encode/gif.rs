use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use image::codecs::gif::{GifEncoder, Repeat};

use crate::encode::ffmpeg::{ensure_parent_dir, flatten_to_opaque_rgba8};
use crate::encode::sink::{FrameSink, SinkConfig, check_config, check_frame};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{WavesError, WavesResult};
use crate::render::backend::FrameRGBA;

/// Options for [`GifSink`].
#[derive(Clone, Debug)]
pub struct GifSinkOpts {
    /// Output GIF path.
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
    /// Background color used to flatten alpha (RGBA8, straight alpha).
    pub bg_rgba: [u8; 4],
    /// Loop the animation forever in viewers.
    pub repeat: bool,
}

impl GifSinkOpts {
    /// Looping GIF at `out_path` over a black background.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            bg_rgba: [0, 0, 0, 255],
            repeat: true,
        }
    }
}

/// NeuQuant sampling factor (1 is slowest and best, 30 fastest).
const QUANTIZE_SPEED: i32 = 10;

/// In-memory encoder target, shared so `end` can take the bytes back once the encoder is dropped.
#[derive(Clone, Debug, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn take(&self) -> WavesResult<Vec<u8>> {
        let mut bytes = self
            .0
            .lock()
            .map_err(|_| WavesError::encode("gif buffer lock poisoned"))?;
        Ok(std::mem::take(&mut *bytes))
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| std::io::Error::other("gif buffer lock poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Animated GIF sink built on the `image` crate's encoder.
///
/// Frames are encoded into memory and the file is written in `end`, so a failed write is
/// reported instead of leaving a truncated GIF behind.
pub struct GifSink {
    opts: GifSinkOpts,
    buf: SharedBuf,
    encoder: Option<GifEncoder<SharedBuf>>,
    delay: image::Delay,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

impl GifSink {
    /// Create a sink writing to `opts.out_path`.
    pub fn new(opts: GifSinkOpts) -> Self {
        Self {
            opts,
            buf: SharedBuf::default(),
            encoder: None,
            delay: image::Delay::from_numer_denom_ms(0, 1),
            cfg: None,
            last_idx: None,
        }
    }

    /// Output path.
    pub fn out_path(&self) -> &Path {
        &self.opts.out_path
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> WavesResult<()> {
        check_config(&cfg)?;
        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(WavesError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }

        self.buf = SharedBuf::default();
        let mut encoder = GifEncoder::new_with_speed(self.buf.clone(), QUANTIZE_SPEED);
        if self.opts.repeat {
            encoder
                .set_repeat(Repeat::Infinite)
                .map_err(|e| WavesError::encode(format!("gif repeat: {e}")))?;
        }

        let frame_time = Duration::from_secs_f64(cfg.fps.frame_duration_secs());
        self.delay = image::Delay::from_saturating_duration(frame_time);
        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> WavesResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| WavesError::encode("gif sink not started"))?;
        check_frame(&cfg, &mut self.last_idx, idx, frame)?;

        let mut rgba = vec![0u8; frame.data.len()];
        flatten_to_opaque_rgba8(&mut rgba, &frame.data, frame.premultiplied, self.opts.bg_rgba)?;
        let img = image::RgbaImage::from_raw(frame.width, frame.height, rgba)
            .ok_or_else(|| WavesError::encode("gif frame buffer has the wrong length"))?;

        let encoder = self
            .encoder
            .as_mut()
            .ok_or_else(|| WavesError::encode("gif sink is already finalized"))?;
        encoder
            .encode_frame(image::Frame::from_parts(img, 0, 0, self.delay))
            .map_err(|e| WavesError::encode(format!("failed to encode gif frame: {e}")))?;
        Ok(())
    }

    fn end(&mut self) -> WavesResult<()> {
        let encoder = self
            .encoder
            .take()
            .ok_or_else(|| WavesError::encode("gif sink not started"))?;
        // Dropping the encoder writes the trailer into the buffer.
        drop(encoder);
        self.cfg = None;

        let bytes = self.buf.take()?;
        std::fs::write(&self.opts.out_path, bytes).map_err(|e| {
            WavesError::encode(format!(
                "failed to write '{}': {e}",
                self.opts.out_path.display()
            ))
        })
    }

    fn abort(&mut self) {
        self.encoder = None;
        self.cfg = None;
        let _ = self.buf.take();
    }

    fn describe(&self) -> String {
        format!("GIF '{}'", self.opts.out_path.display())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
