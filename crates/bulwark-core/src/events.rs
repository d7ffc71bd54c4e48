//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::error::{PlacementError, UpgradeError};

/// Feedback for the UI message line and sound hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    TowerPlaced { tower: TowerKind, x: f64, y: f64 },
    PlacementRejected { reason: PlacementError },
    TowerUpgraded { tower: TowerKind, level: u32, cost: u32 },
    UpgradeRejected { reason: UpgradeError },
    PowerUpCollected { kind: PowerUpKind },
    SpeedBoostExpired,
    WaveStarted { wave: u32, enemies: u32 },
    WaveCleared { wave: u32, bonus: u32 },
    EnemyKilled { kind: EnemyKind, gold: u32, score: u64 },
    /// An enemy reached the end of the path.
    EnemyLeaked { kind: EnemyKind, lives: i32 },
    GameOver { wave: u32, score: u64 },
    TimeScaleChanged { scale: f64 },
}
