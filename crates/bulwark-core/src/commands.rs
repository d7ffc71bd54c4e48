//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, so they
//! never interleave with a running tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Building ---
    /// Place a tower. Uses the current selection when `tower` is omitted.
    PlaceTower {
        x: f64,
        y: f64,
        #[serde(default)]
        tower: Option<TowerKind>,
    },
    /// Upgrade the tower under the cursor, if any.
    UpgradeTowerAt { x: f64, y: f64 },
    /// Change the advisory tower selection.
    SelectTowerType { tower: TowerKind },

    // --- Power-ups ---
    /// Collect the power-up under the cursor, if any.
    CollectPowerUpAt { x: f64, y: f64 },
    /// Collect every power-up on the field.
    CollectAllPowerUps,

    // --- Waves ---
    /// Start the next wave immediately.
    SpawnWave,
    /// Queue several waves, spaced apart.
    SendWaves { count: u32 },

    // --- Simulation control ---
    /// Flip between 1x and 2x speed.
    ToggleTimeScale,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
