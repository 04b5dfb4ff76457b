use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use crossrot::{
    CpuCanvas, ManualClock, PngSequenceSink, RecordingContext, Renderer, Screen, Stage,
    StageConfig,
};

#[derive(Parser, Debug)]
#[command(name = "crossrot", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the state after some taps as a single PNG.
    Frame(FrameArgs),
    /// Tap through the chain and write every animation frame as a PNG sequence.
    Play(PlayArgs),
    /// Dump the draw calls for the state after some taps as JSON.
    Trace(TraceArgs),
}

#[derive(Args, Debug)]
struct Common {
    /// Stage configuration JSON (all fields optional).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of taps to run to completion first.
    #[arg(long, default_value_t = 0)]
    taps: u32,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    common: Common,

    /// Extra ticks into the step started by one more tap (0 = resting state).
    #[arg(long, default_value_t = 0)]
    ticks: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct PlayArgs {
    #[command(flatten)]
    common: Common,

    /// Output directory for `frame_00000.png`, `frame_00001.png`, ...
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct TraceArgs {
    #[command(flatten)]
    common: Common,

    /// Extra ticks into the step started by one more tap (0 = resting state).
    #[arg(long, default_value_t = 0)]
    ticks: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Play(args) => cmd_play(args),
        Command::Trace(args) => cmd_trace(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config(path: Option<&Path>) -> anyhow::Result<StageConfig> {
    match path {
        Some(p) => StageConfig::load(p).with_context(|| format!("load config '{}'", p.display())),
        None => Ok(StageConfig::default()),
    }
}

/// Screen for runs that only need the final state.
struct Offscreen;

impl Screen for Offscreen {
    fn redraw(&mut self, _renderer: &Renderer) -> crossrot::CrossRotResult<()> {
        Ok(())
    }
}

/// Run `taps` full steps, then start one more and deliver `ticks` of it.
fn drive_headless(cfg: StageConfig, taps: u32, ticks: u32) -> anyhow::Result<Renderer> {
    let mut renderer = Renderer::new(cfg)?;
    let mut clock = ManualClock::new();

    for _ in 0..taps {
        renderer.pointer_down(&mut clock);
        renderer.drain(&mut clock, &mut Offscreen, Duration::MAX)?;
    }

    if ticks > 0 {
        renderer.pointer_down(&mut clock);
        let span = renderer.animator().period().saturating_mul(ticks);
        let until = clock.now().saturating_add(span);
        renderer.drain(&mut clock, &mut Offscreen, until)?;
    }
    Ok(renderer)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.common.config.as_deref())?;
    let canvas = cfg.canvas;
    let renderer = drive_headless(cfg, args.common.taps, args.ticks)?;

    let mut ctx = CpuCanvas::new(canvas)?;
    renderer.draw(&mut ctx);
    let frame = ctx.finish();
    crossrot::write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.common.config.as_deref())?;
    let mut stage = Stage::new(cfg, PngSequenceSink::new(&args.out))?;
    for tap in 0..args.common.taps {
        let outcome = stage.tap_and_settle()?;
        tracing::info!(tap, ?outcome, "tap settled");
    }
    let frames = stage.frames_pushed();
    stage.finish()?;

    eprintln!("wrote {frames} frames to {}", args.out.display());
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.common.config.as_deref())?;
    let renderer = drive_headless(cfg, args.common.taps, args.ticks)?;

    let mut ctx = RecordingContext::new();
    renderer.draw(&mut ctx);

    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), ctx.calls()).context("write trace JSON")?;
    println!();
    Ok(())
}
