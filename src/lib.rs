//! Weather-driven waveform animation.
//!
//! A synthetic month of daily weather readings drives a set of overlapping sine waveforms:
//! temperature sets the frequency and color, humidity the amplitude, wind speed the number of
//! harmonics and the amount of jitter. Frames are rasterized on the CPU and streamed into a
//! [`FrameSink`]: an MP4 via the system `ffmpeg`, an animated GIF, a live PNG preview or memory.
//!
//! - Build a [`Visualizer`] from a [`VisualizerConfig`]
//! - Render single frames or stream a range into a sink
//! - [`Visualizer::export`] writes the animation with a fallback sink
//! - [`play`] drives a paced, optionally looping preview
#![forbid(unsafe_code)]

mod foundation;

/// Visualizer configuration.
pub mod config;
pub(crate) mod data;
/// Frame sinks and the export fallback policy.
pub mod encode;
pub(crate) mod mapping;
/// Paced playback loop.
pub mod playback;
pub(crate) mod render;
pub(crate) mod session;
pub(crate) mod synth;

pub use crate::foundation::core::{BezPath, Canvas, Fps, FrameIndex, FrameRange, Point};
pub use crate::foundation::error::{WavesError, WavesResult};
pub use crate::foundation::math::{linspace, min_max, normalize_min_max};

pub use crate::config::{DEFAULT_GRADIENT, VisualizerConfig, pt_to_px};
pub use crate::data::generator::{FieldProfile, SeriesGenerator};
pub use crate::data::reading::{DEGENERATE_NORM_TEMPERATURE, Reading, ReadingSeries};
pub use crate::encode::export::{ExportOutcome, export_with_fallback};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::gif::{GifSink, GifSinkOpts};
pub use crate::encode::png::{PngPreviewSink, save_png};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::mapping::frame::{FrameState, MAX_HARMONICS, harmonic_count, map_frame};
pub use crate::mapping::gradient::{ColorGradient, Rgb8};
pub use crate::playback::{ImmediateTicker, PlaybackOpts, PlaybackStats, SleepTicker, Ticker, play};
pub use crate::render::backend::FrameRGBA;
pub use crate::render::cpu::{CpuRenderer, CpuRendererOpts};
pub use crate::render::overlay::TextOverlay;
pub use crate::render::scene::{FrameScene, PlotSpace, StyledLine, TextAnchor, TextLabel};
pub use crate::session::visualizer::{RenderStats, Visualizer};
pub use crate::synth::waveform::{WaveDomain, Waveform, clean_value, synthesize};
