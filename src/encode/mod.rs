//! Frame sinks.
//!
//! Sinks consume rendered frames in timeline order and are driven by
//! [`crate::Visualizer::render_range`] and the playback loop.

/// Export with primary/secondary fallback.
pub mod export;
/// `ffmpeg`-based MP4 sink (system `ffmpeg` binary).
pub mod ffmpeg;
/// Animated GIF sink.
pub mod gif;
/// PNG stills and the live preview sink.
pub mod png;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;
