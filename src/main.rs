//! Tile Runner entry point
//!
//! Headless native runner: loads a level, drives a session with scripted
//! input and reports how the runs went.
//!
//! Usage: `tile-runner [LEVEL] [--tuning FILE] [--frames N] [--realtime]`

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use serde::Serialize;
use thiserror::Error;

use tile_runner::platform::{Action, FrameClock, KeyboardInput};
use tile_runner::{DEMO_LEVEL, Level, LevelError, Session, StepOutcome, Tuning};
use tile_runner::tuning::TuningError;

/// Fixed step used when not running against the wall clock
const FIXED_DT: f32 = 1.0 / 60.0;
/// Largest delta handed to the simulation in realtime mode
const MAX_DT: f32 = 0.1;
/// Frames between scripted jumps
const JUMP_EVERY: u64 = 45;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Level(#[from] LevelError),

    #[error(transparent)]
    Tuning(#[from] TuningError),
}

#[derive(Debug, Parser)]
#[command(name = "tile-runner")]
#[command(about = "Run a tile platformer level headless with scripted input")]
struct Cli {
    /// Level file; the built-in demo level when omitted
    level: Option<PathBuf>,

    /// JSON tuning overrides
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Pace frames against the wall clock instead of a fixed step
    #[arg(long)]
    realtime: bool,
}

#[derive(Debug, Serialize)]
struct Summary {
    frames: u64,
    runs: u32,
    wins: u32,
    deaths: u32,
    score: f32,
    entities: usize,
}

/// Hold right the whole time and tap jump on a fixed rhythm
fn script_input(input: &mut KeyboardInput, frame: u64) {
    if frame == 0 {
        input.press(Action::MoveRight);
    }
    match frame % JUMP_EVERY {
        0 => input.press(Action::Jump),
        5 => input.release(Action::Jump),
        _ => {}
    }
}

fn run(cli: &Cli) -> Result<Summary, AppError> {
    let level = match &cli.level {
        Some(path) => Level::load(path)?,
        None => Level::parse(DEMO_LEVEL)?,
    };
    let tuning = match &cli.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    let mut session = Session::new(level, tuning);
    let mut input = KeyboardInput::default();
    let mut clock = FrameClock::new().with_max_delta(MAX_DT);

    for frame in 0..cli.frames {
        script_input(&mut input, frame);

        let dt = if cli.realtime {
            std::thread::sleep(Duration::from_secs_f32(FIXED_DT));
            clock.tick()
        } else {
            FIXED_DT
        };

        if let StepOutcome::Restarted(status) = session.step(&mut input, dt) {
            log::info!("Run {} ended at frame {}: {:?}", session.runs, frame, status);
        }
    }

    let view = session.view();
    Ok(Summary {
        frames: cli.frames,
        runs: session.runs,
        wins: session.wins,
        deaths: session.deaths,
        score: view.score,
        entities: view.drawables.len(),
    })
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Tile Runner (headless) starting...");

    let cli = Cli::parse();
    match run(&cli) {
        Ok(summary) => {
            match serde_json::to_string_pretty(&summary) {
                Ok(json) => println!("{json}"),
                Err(e) => log::warn!("Failed to encode summary: {e}"),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("tile-runner: {e}");
            ExitCode::FAILURE
        }
    }
}
