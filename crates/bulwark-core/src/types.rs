//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position on the play field (canvas units, y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in units per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks that ran systems.
    pub tick: u64,
    /// Elapsed wall-clock seconds across those ticks (unscaled).
    pub elapsed_secs: f64,
}

/// Display color carried by entities, packed as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorTag(pub u32);

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        self.as_vec().distance(other.as_vec())
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn from_vec(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }

    /// Step toward `target` by at most `step` units.
    ///
    /// Returns `true` when the remaining distance was shorter than `step`;
    /// the position is then left unchanged so the caller decides whether to
    /// snap or resolve an arrival.
    pub fn step_toward(&mut self, target: &Position, step: f64) -> bool {
        let delta = target.as_vec() - self.as_vec();
        let distance = delta.length();
        if distance < step || distance <= f64::EPSILON {
            return true;
        }
        *self = Self::from_vec(self.as_vec() + delta / distance * step);
        false
    }
}

impl Velocity {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl SimTime {
    /// Advance by one tick covering `dt_secs` of wall-clock time.
    pub fn advance(&mut self, dt_secs: f64) {
        self.tick += 1;
        self.elapsed_secs += dt_secs;
    }
}

impl ColorTag {
    pub const fn rgb(hex: u32) -> Self {
        Self(hex & 0x00ff_ffff)
    }

    /// CSS-style `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0)
    }
}
