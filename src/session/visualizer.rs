use rand::SeedableRng as _;
use rand::rngs::StdRng;

use crate::config::{VisualizerConfig, pt_to_px};
use crate::data::generator::SeriesGenerator;
use crate::data::reading::ReadingSeries;
use crate::encode::export::{ExportOutcome, export_with_fallback};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{WavesError, WavesResult};
use crate::mapping::frame::{FrameState, map_frame};
use crate::mapping::gradient::ColorGradient;
use crate::render::backend::FrameRGBA;
use crate::render::cpu::{CpuRenderer, CpuRendererOpts};
use crate::render::overlay::TextOverlay;
use crate::render::scene::{FrameScene, PlotSpace, StyledLine, TextAnchor, TextLabel};
use crate::synth::waveform::{WaveDomain, synthesize};

const LABEL_COLOR: [u8; 3] = [255, 255, 255];

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Total frames in the requested range.
    pub frames_total: u64,
    /// Frames rendered and pushed to the sink.
    pub frames_rendered: u64,
}

/// Owns everything needed to turn frame counters into pictures.
///
/// The series and gradient are fixed at construction. The RNG advances with every rendered frame
/// (waveform noise), so two visualizers built with the same seed produce the same frames as long
/// as they are asked for the same frames in the same order.
pub struct Visualizer {
    config: VisualizerConfig,
    series: ReadingSeries,
    rng: StdRng,
    gradient: ColorGradient,
    domain: WaveDomain,
    space: PlotSpace,
    renderer: CpuRenderer,
}

impl Visualizer {
    /// Validate `config`, generate a fresh series ending today and load system fonts.
    pub fn new(config: VisualizerConfig) -> WavesResult<Self> {
        config.validate()?;
        let mut rng = seeded_rng(config.seed);
        let today = chrono::Local::now().date_naive();
        let series = SeriesGenerator::new(today)
            .with_len(config.series_len)
            .generate(&mut rng)?;
        tracing::info!(
            days = series.len(),
            newest = %today,
            seed = ?config.seed,
            "generated weather series"
        );
        let overlay = TextOverlay::with_system_fonts(config.font_family.clone());
        Self::build(config, series, rng, overlay)
    }

    /// Use an existing series instead of generating one.
    pub fn with_series(config: VisualizerConfig, series: ReadingSeries) -> WavesResult<Self> {
        let overlay = TextOverlay::with_system_fonts(config.font_family.clone());
        Self::from_parts(config, series, overlay)
    }

    /// Use an existing series and text overlay.
    pub fn from_parts(
        config: VisualizerConfig,
        series: ReadingSeries,
        overlay: TextOverlay,
    ) -> WavesResult<Self> {
        config.validate()?;
        let rng = seeded_rng(config.seed);
        Self::build(config, series, rng, overlay)
    }

    fn build(
        config: VisualizerConfig,
        series: ReadingSeries,
        rng: StdRng,
        overlay: TextOverlay,
    ) -> WavesResult<Self> {
        let gradient = ColorGradient::from_hex(&config.gradient)?;
        let domain = WaveDomain::new(config.x_range[0], config.x_range[1], config.samples)?;
        let space = PlotSpace {
            x_range: config.x_range,
            y_range: config.y_range,
            width: f64::from(config.canvas.width),
            height: f64::from(config.canvas.height),
        };
        let renderer = CpuRenderer::new(
            CpuRendererOpts {
                canvas: config.canvas,
                clear_rgba: config.background,
                line_width_px: config.line_width_px,
            },
            overlay,
        )?;
        Ok(Self {
            config,
            series,
            rng,
            gradient,
            domain,
            space,
            renderer,
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// The reading series being animated.
    pub fn series(&self) -> &ReadingSeries {
        &self.series
    }

    /// Frames in one full animation (`series.len() × cycles`).
    pub fn total_frames(&self) -> u64 {
        (self.series.len() as u64) * u64::from(self.config.cycles)
    }

    /// Waveform parameters for `frame`.
    pub fn frame_state(&self, frame: FrameIndex) -> FrameState {
        map_frame(&self.series, frame)
    }

    /// Build the draw list for `frame`. Consumes RNG state for waveform noise.
    pub fn scene_for(&mut self, frame: FrameIndex) -> WavesResult<FrameScene> {
        let state = self.frame_state(frame);
        let color = self.gradient.sample(state.norm_temperature);
        let lines_n = self.config.lines;

        let mut lines = Vec::with_capacity(lines_n);
        for k in 0..lines_n {
            let wave = synthesize(&state, k, &self.domain, &mut self.rng)?;
            lines.push(StyledLine {
                wave,
                color,
                alpha: 0.5 + 0.5 * (k as f32) / (lines_n as f32),
            });
        }

        let reading = self.series.reading_for_frame(frame);
        let labels = vec![
            TextLabel {
                text: self.config.title.clone(),
                x: 5.0,
                y: 2.5,
                anchor: TextAnchor::Middle,
                size_px: pt_to_px(16.0),
                color: LABEL_COLOR,
                alpha: 0.8,
            },
            TextLabel {
                text: format!("Date: {}", reading.date.format("%Y-%m-%d")),
                x: 0.5,
                y: -2.5,
                anchor: TextAnchor::Middle,
                size_px: pt_to_px(12.0),
                color: LABEL_COLOR,
                alpha: 0.7,
            },
            TextLabel {
                text: format!(
                    "Temperature: {:.1}°C, Humidity: {:.1}%, Wind: {:.1} m/s",
                    reading.temperature, reading.humidity, reading.wind_speed
                ),
                x: 9.5,
                y: -2.5,
                anchor: TextAnchor::End,
                size_px: pt_to_px(10.0),
                color: LABEL_COLOR,
                alpha: 0.6,
            },
        ];

        Ok(FrameScene {
            space: self.space,
            lines,
            labels,
        })
    }

    /// Render one frame (premultiplied RGBA8).
    pub fn render_frame(&mut self, frame: FrameIndex) -> WavesResult<FrameRGBA> {
        let scene = self.scene_for(frame)?;
        self.renderer.render(&scene)
    }

    /// Sink configuration matching this visualizer's canvas and frame rate.
    pub fn sink_config(&self) -> SinkConfig {
        SinkConfig {
            width: self.config.canvas.width,
            height: self.config.canvas.height,
            fps: self.config.fps,
        }
    }

    /// Render `range` and stream it into `sink` (begin, frames in order, end).
    ///
    /// Any failure aborts the sink before the error is returned.
    #[tracing::instrument(skip(self, sink), fields(output = %sink.describe()))]
    pub fn render_range(
        &mut self,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> WavesResult<RenderStats> {
        if range.is_empty() {
            return Err(WavesError::validation(
                "render_range range must be non-empty",
            ));
        }

        let res = self.stream_range(range, sink);
        if let Err(e) = &res {
            tracing::debug!(error = %e, "aborting sink");
            sink.abort();
        }
        res
    }

    fn stream_range(
        &mut self,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> WavesResult<RenderStats> {
        sink.begin(self.sink_config())?;
        let mut stats = RenderStats {
            frames_total: range.len_frames(),
            frames_rendered: 0,
        };
        for f in range.iter() {
            let frame = self.render_frame(f)?;
            sink.push_frame(f, &frame)?;
            stats.frames_rendered += 1;
        }
        sink.end()?;
        Ok(stats)
    }

    /// Render the full animation into `primary`, falling back to `secondary` on failure.
    pub fn export(
        &mut self,
        primary: &mut dyn FrameSink,
        secondary: &mut dyn FrameSink,
    ) -> ExportOutcome {
        let range = FrameRange::first(self.total_frames());
        tracing::info!(
            frames = range.len_frames(),
            fps = self.config.fps.as_f64(),
            "exporting animation"
        );
        export_with_fallback(
            |sink| self.render_range(range, sink).map(|_| ()),
            primary,
            secondary,
        )
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/visualizer.rs"]
mod tests;
