//! Game loop thread: ticks the simulation engine and publishes snapshots.
//!
//! The engine is created inside this thread so it never crosses a thread
//! boundary. Commands arrive via `mpsc` channel. Each frame's delta is the
//! wall-clock time since the previous frame, clamped so a stalled thread
//! does not teleport enemies down the path.

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use bulwark_core::state::SaveRecord;
use bulwark_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{GameLoopCommand, SharedSnapshot};

/// Upper bound on one frame's delta.
pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// How the loop thread should run.
#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub sim: SimConfig,
    /// Target frames per second.
    pub tick_hz: u32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            tick_hz: 60,
        }
    }
}

impl LoopConfig {
    /// Nominal duration of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.tick_hz.max(1)))
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle that yields the final save
/// record once the loop stops.
pub fn spawn_game_loop(
    config: LoopConfig,
    latest_snapshot: SharedSnapshot,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<SaveRecord>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("bulwark-game-loop".into())
        .spawn(move || {
            let frame = config.frame_duration();
            let mut engine = SimulationEngine::new(config.sim);
            run_game_loop(&mut engine, &cmd_rx, &latest_snapshot, frame);
            engine.save_record()
        })?;

    Ok((cmd_tx, handle))
}

/// Clamp a measured frame delta to seconds the engine can take.
pub fn frame_delta(elapsed: Duration) -> f64 {
    elapsed.min(MAX_FRAME_DELTA).as_secs_f64()
}

/// Drain every pending command. Returns `false` on shutdown or disconnect.
fn drain_commands(engine: &mut SimulationEngine, cmd_rx: &mpsc::Receiver<GameLoopCommand>) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                debug!(?cmd, "command received");
                engine.queue_command(cmd);
            }
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    engine: &mut SimulationEngine,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
    frame: Duration,
) {
    let mut last_frame = Instant::now();
    let mut next_frame = last_frame + frame;

    info!(frame_ms = frame.as_secs_f64() * 1000.0, "game loop started");

    loop {
        // 1. Drain all pending commands
        if !drain_commands(engine, cmd_rx) {
            break;
        }

        // 2. Advance by the real time since the last frame
        let now = Instant::now();
        let snapshot = engine.tick(frame_delta(now - last_frame));
        last_frame = now;

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next frame
        let now = Instant::now();
        if next_frame > now {
            std::thread::sleep(next_frame - now);
            next_frame += frame;
        } else {
            // Too far behind: resync instead of spinning to catch up
            next_frame = now + frame;
        }
    }

    info!(tick = engine.time().tick, "game loop stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulwark_core::commands::PlayerCommand;
    use bulwark_core::enums::TowerKind;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::SpawnWave))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::SpawnWave)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_drain_stops_on_shutdown() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::SpawnWave))
            .unwrap();
        assert!(drain_commands(&mut engine, &rx));
        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert!(!drain_commands(&mut engine, &rx));
        drop(tx);
        assert!(!drain_commands(&mut engine, &rx));
    }

    #[test]
    fn test_frame_delta_is_clamped() {
        assert_eq!(frame_delta(Duration::from_millis(16)), 0.016);
        assert_eq!(frame_delta(Duration::from_secs(3)), 0.25);
    }

    #[test]
    fn test_frame_duration() {
        let config = LoopConfig::default();
        assert_eq!(config.frame_duration().as_nanos(), 1_000_000_000u128 / 60);
        let zero = LoopConfig {
            tick_hz: 0,
            ..Default::default()
        };
        assert_eq!(zero.frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_loop_applies_commands_and_returns_record() {
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(LoopConfig::default(), latest.clone()).unwrap();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::PlaceTower {
            x: 60.0,
            y: 190.0,
            tower: Some(TowerKind::Basic),
        }))
        .unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut placed = false;
        while Instant::now() < deadline && !placed {
            std::thread::sleep(Duration::from_millis(10));
            placed = latest
                .lock()
                .unwrap()
                .as_ref()
                .is_some_and(|s| s.towers.len() == 1);
        }
        assert!(placed, "tower never showed up in a snapshot");

        tx.send(GameLoopCommand::Shutdown).unwrap();
        let record = handle.join().unwrap();
        assert_eq!(record.gold, 140);
        assert_eq!(record.lives, 20);
    }

    #[test]
    fn test_snapshot_serialization_is_fast() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::SendWaves { count: 3 });

        for _ in 0..300 {
            engine.tick(1.0 / 60.0);
        }

        let snapshot = engine.tick(1.0 / 60.0);
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(10),
            "Snapshot serialization took {:?}, should be <10ms",
            elapsed
        );
        assert!(!json.is_empty());
    }
}
