//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::catalog::TowerDefinition;
use crate::enums::*;
use crate::types::ColorTag;

/// A placed tower. Owns a mutable copy of its catalog definition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tower {
    /// Per-tower stat block, upgraded in place.
    pub stats: TowerDefinition,
    /// Catalog entry the stats were copied from.
    pub base: TowerKind,
    pub level: u32,
    /// Frames until the next shot; at or below zero means ready.
    pub cooldown: f64,
}

/// A live enemy walking the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub hp: f64,
    pub max_hp: f64,
    /// Base speed in units per frame.
    pub speed: f64,
    pub radius: f64,
    pub color: ColorTag,
    pub score_value: u64,
    pub flying: bool,
    /// Index of the last waypoint passed.
    pub path_index: usize,
    pub reached_end: bool,
    /// Frames of slow remaining.
    pub slow_timer: f64,
    /// Damage-over-time magnitude.
    pub dot_accumulator: f64,
    /// Frames of damage-over-time remaining.
    pub dot_timer: f64,
}

/// Attack resolved when a projectile reaches its target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProjectileBehavior {
    Direct,
    Poison,
    Slow,
    Area { blast_radius: f64 },
    Chain { hops: u32, radius: f64, falloff: f64 },
}

/// A homing projectile.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    /// Enemy being chased. Non-owning: it may be despawned at any time.
    pub target: hecs::Entity,
    /// Units per frame.
    pub speed: f64,
    pub damage: f64,
    pub radius: f64,
    pub color: ColorTag,
    pub behavior: ProjectileBehavior,
}

/// A collectible dropped by a killed enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub radius: f64,
    /// Frames until the pickup disappears.
    pub ttl: f64,
}

/// Cosmetic particle. Carries a `Velocity` alongside.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub color: ColorTag,
    /// Frames of life remaining.
    pub life: f64,
    pub size: f64,
}
