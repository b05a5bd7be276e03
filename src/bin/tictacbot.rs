//! tictacbot CLI - screen-playing Tic-Tac-Toe bot
//!
//! Subcommands:
//! - `replay`: drive the full perception and decision loop over a directory
//!   of recorded PNG frames, printing the actions the bot would take. The
//!   same `Session` accepts a live screen/pointer adapter pair downstream.
//! - `stats`: show the persisted score record.

use std::{path::PathBuf, time::Duration};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tictacbot::{
    adapters::{JsonStatsRepository, RecordingPointer, ReplayScreen},
    ports::StatsRepository,
    vision::templates::TemplateSet,
    Session, Settings,
};

#[derive(Parser)]
#[command(name = "tictacbot")]
#[command(version, about = "Screen-playing Tic-Tac-Toe bot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay recorded frames through the perception and decision loop
    Replay(ReplayArgs),

    /// Show the persisted score record
    Stats(StatsArgs),
}

#[derive(Args)]
struct ReplayArgs {
    /// Directory of PNG frames, replayed in file-name order
    #[arg(long)]
    frames: PathBuf,

    /// Directory holding the template assets
    #[arg(long, default_value = "templates")]
    assets: PathBuf,

    /// Path of the persisted stats record
    #[arg(long, default_value = "game_stats.json")]
    stats: PathBuf,

    /// Match-confidence threshold for every template-matching call
    #[arg(long, default_value_t = tictacbot::config::DEFAULT_CONFIDENCE_THRESHOLD)]
    threshold: f64,

    /// Delay between cycles in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Number of cycles to run (defaults to one per frame)
    #[arg(long)]
    cycles: Option<usize>,
}

#[derive(Args)]
struct StatsArgs {
    /// Path of the persisted stats record
    #[arg(long, default_value = "game_stats.json")]
    file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Replay(args) => replay(args),
        Commands::Stats(args) => stats(args),
    }
}

fn replay(args: ReplayArgs) -> Result<()> {
    let frames = load_frames(&args.frames)?;
    if frames.is_empty() {
        bail!("no PNG frames found in {:?}", args.frames);
    }
    let cycles = args.cycles.unwrap_or(frames.len());

    let templates = TemplateSet::load(&args.assets)?;
    let settings = Settings::default()
        .with_confidence_threshold(args.threshold)
        .with_cycle_delay(Duration::from_millis(args.delay_ms));

    let pointer = RecordingPointer::new();
    let mut session = Session::new(
        settings,
        templates,
        ReplayScreen::new(frames),
        pointer.clone(),
        JsonStatsRepository::new(),
        args.stats,
    )?;

    session.run_for(cycles)?;

    let record = session.stats();
    println!(
        "replayed {cycles} cycles: {} pointer actions, {} wins / {} losses / {} draws, {} moves played",
        pointer.actions().len(),
        record.wins,
        record.losses,
        record.draws,
        record.moves_played,
    );
    Ok(())
}

fn stats(args: StatsArgs) -> Result<()> {
    let record = JsonStatsRepository::new()
        .load(&args.file)
        .with_context(|| format!("failed to read stats from {:?}", args.file))?;

    println!("wins:         {}", record.wins);
    println!("losses:       {}", record.losses);
    println!("draws:        {}", record.draws);
    println!("moves played: {}", record.moves_played);
    println!("games played: {}", record.games_played());
    Ok(())
}

fn load_frames(dir: &std::path::Path) -> Result<Vec<image::RgbaImage>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read frames directory {dir:?}"))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "png"))
        .collect();
    paths.sort();

    paths
        .iter()
        .map(|path| {
            Ok(image::open(path)
                .with_context(|| format!("failed to decode frame {path:?}"))?
                .to_rgba8())
        })
        .collect()
}
