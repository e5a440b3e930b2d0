//! Paced playback: one rendered frame per tick, optionally looping.

use std::time::{Duration, Instant};

use crate::config::VisualizerConfig;
use crate::encode::sink::FrameSink;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{WavesError, WavesResult};
use crate::session::visualizer::Visualizer;

/// Playback loop settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackOpts {
    /// Time between ticks.
    pub interval: Duration,
    /// Frames per pass (`0..frames`).
    pub frames: u64,
    /// Start another pass at frame 0 after the last frame.
    pub repeat: bool,
    /// Stop after this many passes when repeating. `None` repeats until interrupted.
    pub max_loops: Option<u64>,
}

impl PlaybackOpts {
    /// Interval and repeat flag from `config`, one pass of `frames` frames.
    pub fn from_config(config: &VisualizerConfig, frames: u64) -> Self {
        Self {
            interval: config.interval(),
            frames,
            repeat: config.repeat,
            max_loops: None,
        }
    }

    fn validate(&self) -> WavesResult<()> {
        if self.frames == 0 {
            return Err(WavesError::validation("playback needs at least one frame"));
        }
        if self.max_loops == Some(0) {
            return Err(WavesError::validation("max_loops must be > 0"));
        }
        Ok(())
    }

    fn is_last_pass(&self, passes_done: u64) -> bool {
        !self.repeat || self.max_loops.is_some_and(|n| passes_done >= n)
    }
}

/// Counters reported when playback stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackStats {
    /// Frames rendered and pushed.
    pub ticks: u64,
    /// Completed passes.
    pub passes: u64,
}

/// Waits for the next tick.
pub trait Ticker {
    /// Block until the next tick is due.
    fn wait(&mut self, interval: Duration);
}

/// Wall-clock ticker. Ticks are spaced `interval` apart measured from the previous tick, so
/// slow frames are not followed by a burst of catch-up frames.
#[derive(Debug, Default)]
pub struct SleepTicker {
    last: Option<Instant>,
}

impl SleepTicker {
    /// Ticker whose first tick fires immediately.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ticker for SleepTicker {
    fn wait(&mut self, interval: Duration) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < interval {
                std::thread::sleep(interval - elapsed);
            } else {
                tracing::trace!(
                    late_ms = (elapsed - interval).as_millis() as u64,
                    "playback tick late"
                );
            }
        }
        self.last = Some(Instant::now());
    }
}

/// Ticker that never waits. Counts how often it was asked to.
#[derive(Debug, Default)]
pub struct ImmediateTicker {
    /// Number of `wait` calls.
    pub waits: u64,
}

impl Ticker for ImmediateTicker {
    fn wait(&mut self, _interval: Duration) {
        self.waits += 1;
    }
}

/// Play `opts.frames` frames per pass into `sink`, one per tick.
///
/// Each pass is bracketed by `sink.begin`/`sink.end` and restarts at frame 0.
#[tracing::instrument(skip(viz, sink, ticker), fields(output = %sink.describe()))]
pub fn play(
    viz: &mut Visualizer,
    sink: &mut dyn FrameSink,
    ticker: &mut dyn Ticker,
    opts: PlaybackOpts,
) -> WavesResult<PlaybackStats> {
    opts.validate()?;
    let cfg = viz.sink_config();
    let mut stats = PlaybackStats::default();

    loop {
        sink.begin(cfg)?;
        for f in 0..opts.frames {
            ticker.wait(opts.interval);
            let idx = FrameIndex(f);
            let frame = viz.render_frame(idx)?;
            sink.push_frame(idx, &frame)?;
            stats.ticks += 1;
        }
        sink.end()?;
        stats.passes += 1;
        tracing::debug!(pass = stats.passes, ticks = stats.ticks, "playback pass complete");

        if opts.is_last_pass(stats.passes) {
            break;
        }
    }
    Ok(stats)
}

#[cfg(test)]
#[path = "../tests/unit/playback.rs"]
mod tests;
