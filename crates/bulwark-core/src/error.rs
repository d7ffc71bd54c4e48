//! Rejection reasons returned by fallible simulation operations.
//!
//! None of these are fatal: callers surface them as user feedback.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a tower could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlacementError {
    #[error("not enough gold: tower costs {cost}, have {gold}")]
    InsufficientFunds { cost: u32, gold: u32 },
    #[error("too close to path ({distance:.1} units from centerline)")]
    TooCloseToPath { distance: f64 },
}

/// Why a tower could not be upgraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UpgradeError {
    #[error("not enough gold: upgrade costs {cost}, have {gold}")]
    InsufficientFunds { cost: u32, gold: u32 },
}

/// Invalid path construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("a path needs at least 2 waypoints, got {len}")]
    TooFewWaypoints { len: usize },
}
