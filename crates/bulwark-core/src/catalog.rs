//! Static catalogs: tower archetypes and enemy presets.
//!
//! Both are immutable. Towers copy their definition by value on placement so
//! upgrades never reach back into the catalog.

use serde::{Deserialize, Serialize};

use crate::enums::{AttackKind, EnemyKind, TowerKind};
use crate::types::ColorTag;

/// Catalog entry for a tower archetype.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerDefinition {
    pub kind: TowerKind,
    pub cost: u32,
    /// Targeting radius.
    pub range: f64,
    /// Cooldown between shots, in frames.
    pub fire_rate: f64,
    pub damage: f64,
    pub color: ColorTag,
    pub attack: AttackKind,
}

/// Catalog entry for an enemy type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyPreset {
    pub kind: EnemyKind,
    pub hp: f64,
    /// Units per frame.
    pub speed: f64,
    pub color: ColorTag,
    pub radius: f64,
    pub score_value: u64,
    pub flying: bool,
}

/// Look up the definition for a tower archetype.
pub fn tower_definition(kind: TowerKind) -> TowerDefinition {
    let (cost, range, fire_rate, damage, color, attack) = match kind {
        TowerKind::Basic => (60, 120.0, 40.0, 8.0, 0x4a90e2, AttackKind::Direct),
        TowerKind::Sniper => (140, 320.0, 100.0, 48.0, 0x8a54ff, AttackKind::Direct),
        TowerKind::Rapid => (100, 100.0, 10.0, 3.0, 0xff9f43, AttackKind::Direct),
        TowerKind::Heavy => (220, 90.0, 110.0, 120.0, 0x2b6ba3, AttackKind::Direct),
        TowerKind::Poison => (150, 110.0, 36.0, 6.0, 0x4caf50, AttackKind::Poison),
        TowerKind::Frost => (150, 110.0, 50.0, 2.0, 0x39a0ed, AttackKind::Slow),
        TowerKind::Tesla => (200, 140.0, 30.0, 18.0, 0xffd54f, AttackKind::Chain),
        TowerKind::Mortar => (260, 250.0, 140.0, 90.0, 0xa16eff, AttackKind::Area),
    };
    TowerDefinition {
        kind,
        cost,
        range,
        fire_rate,
        damage,
        color: ColorTag::rgb(color),
        attack,
    }
}

/// Look up the preset for an enemy type.
pub fn enemy_preset(kind: EnemyKind) -> EnemyPreset {
    let (hp, speed, color, radius, score_value, flying) = match kind {
        EnemyKind::Grunt => (40.0, 1.2, 0xff6b6b, 12.0, 10, false),
        EnemyKind::Shield => (140.0, 0.7, 0xffd86b, 16.0, 30, false),
        EnemyKind::Fast => (24.0, 2.2, 0x7ee787, 9.0, 12, false),
        EnemyKind::Flyer => (30.0, 2.0, 0x7fb0ff, 10.0, 14, true),
        EnemyKind::Boss => (1200.0, 0.45, 0x8a54ff, 30.0, 500, false),
    };
    EnemyPreset {
        kind,
        hp,
        speed,
        color: ColorTag::rgb(color),
        radius,
        score_value,
        flying,
    }
}
