//! Game state snapshot: the complete visible state handed to the UI each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{ColorTag, Position, SimTime};

/// Complete read-only view of the simulation after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub run: RunView,
    pub selected_tower: TowerKind,
    pub towers: Vec<TowerView>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub powerups: Vec<PowerUpView>,
    pub particles: Vec<ParticleView>,
    pub events: Vec<GameEvent>,
}

/// Economy and run status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunView {
    pub gold: u32,
    pub lives: i32,
    pub wave: u32,
    pub score: u64,
    pub playing: bool,
    pub paused: bool,
    pub wave_active: bool,
    pub time_scale: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub position: Position,
    pub kind: TowerKind,
    pub level: u32,
    pub range: f64,
    pub damage: f64,
    pub fire_rate: f64,
    pub color: ColorTag,
    /// Gold needed for the next upgrade.
    pub upgrade_cost: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Position,
    pub kind: EnemyKind,
    pub radius: f64,
    pub color: ColorTag,
    /// `hp / max_hp`, clamped to `0.0..=1.0`.
    pub health_fraction: f64,
    pub path_index: usize,
    pub slowed: bool,
    pub poisoned: bool,
    pub flying: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub radius: f64,
    pub color: ColorTag,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpView {
    pub position: Position,
    pub kind: PowerUpKind,
    pub label: char,
    pub radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Position,
    pub color: ColorTag,
    pub size: f64,
}

/// Minimal persisted progress. The simulation can be initialized from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub gold: u32,
    pub wave: u32,
    pub lives: i32,
    pub score: u64,
}
