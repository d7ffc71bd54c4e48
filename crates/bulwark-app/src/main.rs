use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bulwark_app::autopilot::Autopilot;
use bulwark_app::game_loop::{self, LoopConfig};
use bulwark_app::persistence;
use bulwark_app::state::{AppState, SharedSnapshot};
use bulwark_sim::SimConfig;

/// How often the autopilot looks at the board.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Parser, Debug)]
#[command(name = "bulwark")]
#[command(about = "Headless tower-defense session driven by a scripted player")]
struct Args {
    /// RNG seed for spawn rolls and drops.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Wall-clock seconds to run before stopping.
    #[arg(long, default_value_t = 60.0)]
    seconds: f64,
    /// Start at double speed.
    #[arg(long)]
    fast: bool,
    /// Number of waves the autopilot sends.
    #[arg(long, default_value_t = 5)]
    waves: u32,
    /// Write the final save record here.
    #[arg(long)]
    save: Option<PathBuf>,
    /// Resume from a save record.
    #[arg(long)]
    load: Option<PathBuf>,
    /// Game loop frames per second.
    #[arg(long, default_value_t = 60)]
    tick_hz: u32,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let save = args
        .load
        .as_deref()
        .map(persistence::load_record)
        .transpose()
        .context("could not resume")?;
    if let Some(record) = &save {
        info!(?record, "resuming saved run");
    }

    let config = LoopConfig {
        sim: SimConfig {
            seed: args.seed,
            time_scale: if args.fast { 2.0 } else { 1.0 },
            save,
        },
        tick_hz: args.tick_hz,
    };
    let latest: SharedSnapshot = Arc::new(Mutex::new(None));
    let (command_tx, handle) = game_loop::spawn_game_loop(config, Arc::clone(&latest))
        .context("failed to spawn game loop thread")?;
    let state = AppState::new(command_tx, latest);

    let mut autopilot = Autopilot::new(args.waves);
    let deadline = Instant::now() + Duration::from_secs_f64(args.seconds.max(0.0));
    while Instant::now() < deadline {
        std::thread::sleep(POLL_INTERVAL);
        let Some(snapshot) = state.latest() else {
            continue;
        };
        if autopilot.is_finished(&snapshot) {
            break;
        }
        for command in autopilot.plan(&snapshot) {
            if !state.send(command) {
                warn!("game loop exited early");
                break;
            }
        }
    }

    state.shutdown();
    let record = handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;
    info!(
        gold = record.gold,
        wave = record.wave,
        lives = record.lives,
        score = record.score,
        "session over"
    );

    if let Some(path) = &args.save {
        persistence::save_record(path, &record)?;
        info!(path = %path.display(), "saved run");
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
