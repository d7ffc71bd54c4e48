//! State shared between the driver thread and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use bulwark_core::commands::PlayerCommand;
use bulwark_core::state::GameStateSnapshot;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the game loop after every tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Driver-side handle onto a running game loop.
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    /// Latest snapshot for polling. `None` until the first tick.
    pub latest_snapshot: SharedSnapshot,
}

impl AppState {
    pub fn new(command_tx: mpsc::Sender<GameLoopCommand>, latest_snapshot: SharedSnapshot) -> Self {
        Self {
            command_tx,
            latest_snapshot,
        }
    }

    /// Forward a player command. Returns `false` once the loop has exited.
    pub fn send(&self, command: PlayerCommand) -> bool {
        self.command_tx
            .send(GameLoopCommand::PlayerCommand(command))
            .is_ok()
    }

    /// Ask the loop to stop. Harmless if it already has.
    pub fn shutdown(&self) {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
    }

    /// Clone of the most recent snapshot.
    pub fn latest(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }
}
