use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing::Level;

use weather_waves::{
    ExportOutcome, FfmpegSink, FfmpegSinkOpts, FrameIndex, GifSink, GifSinkOpts, PlaybackOpts,
    PngPreviewSink, SleepTicker, Visualizer, VisualizerConfig,
};

#[derive(Parser, Debug)]
#[command(
    name = "weather-waves",
    version,
    about = "Animate synthetic weather data as overlapping waveforms"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Visualizer config JSON. Missing fields take their defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// RNG seed for data and waveform noise.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output directory for exported files.
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,

    /// Log debug output.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export the animation as MP4, falling back to GIF (default).
    Render(RenderArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Play the animation into a continuously replaced PNG file.
    Preview(PreviewArgs),
    /// Print the generated weather series as JSON.
    Data,
}

#[derive(Args, Debug, Default)]
struct RenderArgs {
    /// Start the live preview after exporting.
    #[arg(long)]
    preview: bool,

    /// ffmpeg executable used for MP4 output.
    #[arg(long, default_value = "ffmpeg")]
    ffmpeg: PathBuf,
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Frame index (0-based, wraps around the series).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug, Default)]
struct PreviewArgs {
    /// Stop after this many passes.
    #[arg(long)]
    loops: Option<u64>,

    /// Play a single pass.
    #[arg(long)]
    no_repeat: bool,

    /// Preview PNG path (defaults to `<out-dir>/<stem>_preview.png`).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let config = load_config(&cli.global)?;
    match cli.cmd {
        None => cmd_render(config, RenderArgs {
            ffmpeg: PathBuf::from("ffmpeg"),
            ..Default::default()
        }),
        Some(Command::Render(args)) => cmd_render(config, args),
        Some(Command::Frame(args)) => cmd_frame(config, args),
        Some(Command::Preview(args)) => cmd_preview(config, args),
        Some(Command::Data) => cmd_data(config),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(global: &GlobalArgs) -> anyhow::Result<VisualizerConfig> {
    let mut config = match &global.config {
        Some(path) => VisualizerConfig::from_path(path)?,
        None => VisualizerConfig::default(),
    };
    if let Some(seed) = global.seed {
        config.seed = Some(seed);
    }
    if let Some(dir) = &global.out_dir {
        config.out_dir = dir.clone();
    }
    config.validate()?;
    Ok(config)
}

fn cmd_render(config: VisualizerConfig, args: RenderArgs) -> anyhow::Result<()> {
    let mut viz = Visualizer::new(config)?;
    let cfg = viz.config().clone();

    let mut mp4 = FfmpegSink::new(FfmpegSinkOpts {
        bg_rgba: cfg.background,
        program: args.ffmpeg,
        ..FfmpegSinkOpts::new(cfg.video_path())
    });
    let mut gif = GifSink::new(GifSinkOpts {
        bg_rgba: cfg.background,
        ..GifSinkOpts::new(cfg.gif_path())
    });

    match viz.export(&mut mp4, &mut gif) {
        ExportOutcome::Primary => eprintln!("wrote {}", cfg.video_path().display()),
        ExportOutcome::Secondary { .. } => eprintln!("wrote {}", cfg.gif_path().display()),
        // Already logged; the preview can still run.
        ExportOutcome::Failed { .. } => {}
    }

    if args.preview {
        run_preview(&mut viz, PreviewArgs::default())?;
    }
    Ok(())
}

fn cmd_frame(config: VisualizerConfig, args: FrameArgs) -> anyhow::Result<()> {
    let mut viz = Visualizer::new(config)?;
    let frame = viz.render_frame(FrameIndex(args.frame))?;
    weather_waves::save_png(&args.out, &frame, viz.config().background)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_preview(config: VisualizerConfig, args: PreviewArgs) -> anyhow::Result<()> {
    let mut viz = Visualizer::new(config)?;
    run_preview(&mut viz, args)
}

fn run_preview(viz: &mut Visualizer, args: PreviewArgs) -> anyhow::Result<()> {
    let cfg = viz.config().clone();
    let path = args.out.unwrap_or_else(|| cfg.preview_path());
    let mut opts = PlaybackOpts::from_config(&cfg, viz.total_frames());
    if args.no_repeat {
        opts.repeat = false;
    }
    opts.max_loops = args.loops;

    let mut sink = PngPreviewSink::new(&path).with_background(cfg.background);
    tracing::info!(
        path = %path.display(),
        interval_ms = cfg.interval_ms,
        repeat = opts.repeat,
        "preview running, open the file in an auto-reloading viewer (Ctrl-C to stop)"
    );
    let stats = weather_waves::play(viz, &mut sink, &mut SleepTicker::new(), opts)?;
    tracing::info!(ticks = stats.ticks, passes = stats.passes, "preview finished");
    Ok(())
}

fn cmd_data(config: VisualizerConfig) -> anyhow::Result<()> {
    let viz = Visualizer::new(config)?;
    let json = serde_json::to_string_pretty(viz.series()).context("serialize series")?;
    println!("{json}");
    Ok(())
}
