//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Tower archetype, in hotkey order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TowerKind {
    #[default]
    Basic,
    Sniper,
    Rapid,
    Heavy,
    Poison,
    Frost,
    Tesla,
    Mortar,
}

/// How a tower's projectile resolves on impact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackKind {
    /// Single-target hit.
    #[default]
    Direct,
    /// Hit plus stacking damage over time.
    Poison,
    /// Hit plus movement slow.
    Slow,
    /// Hit everything inside a blast radius around the target.
    Area,
    /// Hit the target, then hop to nearby enemies with falloff.
    Chain,
}

/// Enemy preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    Grunt,
    Shield,
    Fast,
    Flyer,
    Boss,
}

/// Power-up dropped by killed enemies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerUpKind {
    /// Instant gold.
    Gold,
    /// Temporary fire-rate boost for every tower.
    Speed,
    /// Extra lives.
    Shield,
    /// Kill every live enemy.
    Nuke,
}

impl TowerKind {
    pub const ALL: [TowerKind; 8] = [
        TowerKind::Basic,
        TowerKind::Sniper,
        TowerKind::Rapid,
        TowerKind::Heavy,
        TowerKind::Poison,
        TowerKind::Frost,
        TowerKind::Tesla,
        TowerKind::Mortar,
    ];

    /// Tower bound to number key `1..=8`.
    pub fn from_hotkey(key: u8) -> Option<Self> {
        Self::ALL.get(usize::from(key).checked_sub(1)?).copied()
    }

    pub fn id(self) -> &'static str {
        match self {
            TowerKind::Basic => "basic",
            TowerKind::Sniper => "sniper",
            TowerKind::Rapid => "rapid",
            TowerKind::Heavy => "heavy",
            TowerKind::Poison => "poison",
            TowerKind::Frost => "frost",
            TowerKind::Tesla => "tesla",
            TowerKind::Mortar => "mortar",
        }
    }

    /// Display name for buttons and tooltips.
    pub fn name(self) -> &'static str {
        match self {
            TowerKind::Basic => "Basic",
            TowerKind::Sniper => "Sniper",
            TowerKind::Rapid => "Rapid",
            TowerKind::Heavy => "Heavy",
            TowerKind::Poison => "Poison",
            TowerKind::Frost => "Frost",
            TowerKind::Tesla => "Tesla",
            TowerKind::Mortar => "Mortar",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Gold,
        PowerUpKind::Speed,
        PowerUpKind::Shield,
        PowerUpKind::Nuke,
    ];

    /// One-letter badge drawn on the pickup.
    pub fn label(self) -> char {
        match self {
            PowerUpKind::Gold => 'G',
            PowerUpKind::Speed => 'S',
            PowerUpKind::Shield => 'H',
            PowerUpKind::Nuke => 'N',
        }
    }
}
