mod app;
mod canvas;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use clockface_dial::style::ClockStyle;
use clockface_dial::ClockFace;
use clockface_engine::coords::Viewport;
use clockface_engine::logging::{init_logging, LoggingConfig};
use clockface_engine::paint::Color;
use clockface_engine::runtime::{Runtime, RuntimeConfig};
use clockface_engine::time::{FixedClock, LocalClock, TimeSample, WallClock};

use crate::app::StudioApp;
use crate::canvas::Canvas;

#[derive(Parser, Debug)]
#[command(name = "clockface-studio", about = "Render the analog clock face to PNG")]
struct Cli {
    /// Log filter in `env_logger` syntax, e.g. `debug` or `clockface_dial=debug`.
    #[arg(long, global = true, env = "CLOCKFACE_LOG")]
    log: Option<String>,

    /// TrueType/OpenType font for the numerals. Defaults to a system font.
    #[arg(long, global = true)]
    font: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame and exit.
    Snapshot(SnapshotArgs),
    /// Redraw about once a second, overwriting the output each frame.
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Surface size as `WIDTHxHEIGHT` in pixels.
    #[arg(long, default_value = "512x512", value_parser = parse_size)]
    size: Viewport,

    #[arg(short, long, default_value = "clock.png")]
    output: PathBuf,
}

#[derive(Args, Debug)]
struct SnapshotArgs {
    /// Time to show as `H:MM[:SS]`; the local time if omitted.
    #[arg(long)]
    at: Option<TimeSample>,

    #[command(flatten)]
    frame: FrameArgs,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Stop after this many frames.
    #[arg(long)]
    frames: Option<u64>,

    /// Start from this time as `H:MM[:SS]` and advance a second per frame,
    /// instead of reading the local time.
    #[arg(long)]
    at: Option<TimeSample>,

    #[command(flatten)]
    frame: FrameArgs,
}

fn parse_size(s: &str) -> Result<Viewport, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u32>()
            .map_err(|_| format!("invalid dimension '{v}' in '{s}'"))
    };
    Ok(Viewport::new(parse(w)? as f32, parse(h)? as f32))
}

fn load_font(path: Option<&Path>) -> Result<Vec<u8>> {
    if let Some(path) = path {
        return std::fs::read(path).with_context(|| format!("failed to read font {}", path.display()));
    }

    Ok([
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
    .unwrap_or_default())
}

fn snapshot(args: SnapshotArgs, font: &[u8]) -> Result<()> {
    let FrameArgs { size, output } = args.frame;

    let mut face = ClockFace::new(ClockStyle::default());
    face.on_size_changed(size.width, size.height);

    let time = match args.at {
        Some(t) => t,
        None => LocalClock.now(),
    };

    let mut canvas = Canvas::new(font, Color::black());
    canvas.record(|surface| face.render_frame(surface, time));
    canvas.write_png(size, &output)?;

    log::info!("snapshot of {time} written to {}", output.display());
    Ok(())
}

fn run_live<C: WallClock>(args: RunArgs, clock: C, font: &[u8]) -> Result<()> {
    let FrameArgs { size, output } = args.frame;

    let face = ClockFace::new(ClockStyle::default());
    let canvas = Canvas::new(font, Color::black());
    let mut app = StudioApp::new(face, canvas, clock, output, args.frames);

    let config = RuntimeConfig { title: "clockface-studio".to_string(), viewport: size };
    Runtime::run(config, &mut app)?;

    let frames = app.finish()?;
    log::info!("{frames} frame(s) written");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = cli.log {
        logging = logging.filter(filter);
    }
    init_logging(logging);

    let font = load_font(cli.font.as_deref())?;

    match cli.command {
        Command::Snapshot(args) => snapshot(args, &font),
        Command::Run(args) => match args.at {
            Some(at) => run_live(args, FixedClock::ticking(at), &font),
            None => run_live(args, LocalClock, &font),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_size_accepts_both_separators() {
        assert_eq!(parse_size("200x100").unwrap(), Viewport::new(200.0, 100.0));
        assert_eq!(parse_size("64X64").unwrap(), Viewport::new(64.0, 64.0));
    }

    #[test]
    fn parse_size_rejects_garbage() {
        assert!(parse_size("200").is_err());
        assert!(parse_size("ax1").is_err());
        assert!(parse_size("-3x4").is_err());
    }

    #[test]
    fn cli_parses_snapshot_time() {
        let cli = Cli::try_parse_from(["clockface-studio", "snapshot", "--at", "15:00", "-o", "x.png"]).unwrap();
        let Command::Snapshot(args) = cli.command else { panic!("expected snapshot") };
        assert_eq!(args.at, TimeSample::new(3, 0, 0));
        assert_eq!(args.frame.output, PathBuf::from("x.png"));
        assert_eq!(args.frame.size, Viewport::new(512.0, 512.0));
    }

    #[test]
    fn cli_parses_run_limits() {
        let cli = Cli::try_parse_from(["clockface-studio", "--log", "debug", "run", "--frames", "5"]).unwrap();
        assert_eq!(cli.log.as_deref(), Some("debug"));
        let Command::Run(args) = cli.command else { panic!("expected run") };
        assert_eq!(args.frames, Some(5));
        assert!(args.at.is_none());
    }

    #[test]
    fn missing_font_path_is_an_error() {
        let err = load_font(Some(Path::new("/definitely/not/here.ttf"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read font"));
    }

    #[test]
    fn snapshot_writes_png() {
        let out = std::env::temp_dir().join(format!("clockface-snapshot-{}.png", std::process::id()));
        let args = SnapshotArgs {
            at: TimeSample::new(10, 10, 30),
            frame: FrameArgs { size: Viewport::new(96.0, 96.0), output: out.clone() },
        };
        snapshot(args, &[]).unwrap();
        assert!(out.exists());
        let _ = std::fs::remove_file(out);
    }
}
