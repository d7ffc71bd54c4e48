//! BULWARK headless runner.
//!
//! Drives the simulation engine on a game-loop thread, feeds it player
//! commands from a scripted autopilot, and persists the save record.

pub mod autopilot;
pub mod game_loop;
pub mod persistence;
pub mod state;

pub use bulwark_core as core;
