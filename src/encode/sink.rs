use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::WavesResult;
use crate::render::backend::FrameRGBA;

/// Configuration provided to a [`FrameSink`] at the start of a range render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
}

/// Sink contract for consuming rendered frames in timeline order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order between
/// one `begin` and the matching `end`.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> WavesResult<()>;
    /// Push one frame in strictly increasing timeline order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> WavesResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> WavesResult<()>;

    /// Abandon a stream that failed after `begin`: release resources and discard partial output.
    fn abort(&mut self) {}

    /// Short human-readable description used in logs.
    fn describe(&self) -> String {
        "frame sink".to_owned()
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    /// Whether `end` was called after the last `begin`.
    pub fn ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> WavesResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> WavesResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> WavesResult<()> {
        self.ended = true;
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory".to_owned()
    }
}

/// Reject non-increasing indices and frames that do not match the configured size.
pub(crate) fn check_frame(
    cfg: &SinkConfig,
    last_idx: &mut Option<FrameIndex>,
    idx: FrameIndex,
    frame: &FrameRGBA,
) -> WavesResult<()> {
    use crate::foundation::error::WavesError;

    if let Some(last) = *last_idx
        && idx.0 <= last.0
    {
        return Err(WavesError::encode(format!(
            "out-of-order frame index {} after {}",
            idx.0, last.0
        )));
    }
    if frame.width != cfg.width || frame.height != cfg.height {
        return Err(WavesError::validation(format!(
            "frame size mismatch: got {}x{}, expected {}x{}",
            frame.width, frame.height, cfg.width, cfg.height
        )));
    }
    if frame.data.len() != (cfg.width as usize) * (cfg.height as usize) * 4 {
        return Err(WavesError::validation(
            "frame.data size mismatch with width*height*4",
        ));
    }
    *last_idx = Some(idx);
    Ok(())
}

/// Validate dimensions shared by every file sink.
pub(crate) fn check_config(cfg: &SinkConfig) -> WavesResult<()> {
    use crate::foundation::error::WavesError;

    if cfg.fps.num == 0 || cfg.fps.den == 0 {
        return Err(WavesError::validation("fps must be non-zero"));
    }
    if cfg.width == 0 || cfg.height == 0 {
        return Err(WavesError::validation(
            "sink width/height must be non-zero",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
