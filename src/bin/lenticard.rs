use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lenticard", version)]
struct Cli {
    /// Log debug-level events to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show which frame a tilt reading maps to.
    Map(MapArgs),
    /// Preload a frame directory and list the cache.
    Preload(PreloadArgs),
    /// Replay a recorded motion trace and print the report as JSON.
    Replay(ReplayArgs),
}

#[derive(Parser, Debug)]
struct MapArgs {
    /// Number of frames in the cache.
    #[arg(long, default_value_t = lenticard::DEFAULT_FRAMES_COUNT)]
    frames: usize,

    /// Signed tilt reading.
    #[arg(long, allow_hyphen_values = true)]
    tilt: i64,

    /// Frame currently on screen (0-based).
    #[arg(long)]
    last: Option<usize>,
}

#[derive(Args, Debug)]
struct CardSourceArgs {
    /// Directory holding `frame-1.jpg`, `frame-2.jpg`, ...
    #[arg(long)]
    assets: PathBuf,

    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// URL-style startup parameters, e.g. `?frames-count=8`.
    #[arg(long)]
    query: Option<String>,
}

#[derive(Parser, Debug)]
struct PreloadArgs {
    #[command(flatten)]
    source: CardSourceArgs,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    #[command(flatten)]
    source: CardSourceArgs,

    /// Motion trace JSON.
    #[arg(long)]
    trace: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Map(args) => cmd_map(args),
        Command::Preload(args) => cmd_preload(args),
        Command::Replay(args) => cmd_replay(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &CardSourceArgs) -> anyhow::Result<lenticard::CardConfig> {
    let mut cfg = match &args.config {
        Some(path) => lenticard::CardConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => lenticard::CardConfig::default(),
    };
    if let Some(q) = &args.query {
        cfg.apply_query(q)?;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn ensure_dir(path: &Path) -> anyhow::Result<()> {
    anyhow::ensure!(
        path.is_dir(),
        "assets directory '{}' does not exist",
        path.display()
    );
    Ok(())
}

fn cmd_map(args: MapArgs) -> anyhow::Result<()> {
    let tilt = lenticard::TiltReading(args.tilt);
    let last = args.last.map(lenticard::FrameIndex);
    match lenticard::select_frame(tilt, args.frames, last) {
        Ok(idx) => println!("frame {} (center {})", idx.0, center_label(args.frames)),
        Err(reject) => println!("rejected: {reject:?}"),
    }
    Ok(())
}

fn center_label(frames: usize) -> String {
    if frames == 0 {
        "none".to_owned()
    } else {
        lenticard::center_index(frames).to_string()
    }
}

fn cmd_preload(args: PreloadArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.source)?;
    ensure_dir(&args.source.assets)?;
    let source = lenticard::DirSource::new(&args.source.assets);

    let cache = lenticard::FrameCache::preload(&cfg, &source)?;
    for (idx, frame) in cache.iter() {
        println!(
            "{:>3}  {}  {}x{}  {} bytes",
            idx.0,
            frame.name,
            frame.width,
            frame.height,
            frame.jpeg.len()
        );
    }
    eprintln!("cached {} frames from {}", cache.len(), source.root().display());
    Ok(())
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.source)?;
    ensure_dir(&args.source.assets)?;
    let source = lenticard::DirSource::new(&args.source.assets);
    let trace = lenticard::MotionTrace::from_path(&args.trace)
        .with_context(|| format!("load trace '{}'", args.trace.display()))?;

    let report = lenticard::replay(&cfg, &source, &trace)?;
    let json = serde_json::to_string_pretty(&report).context("serialize replay report")?;
    println!("{json}");
    Ok(())
}
