//! Simulation engine for BULWARK.
//!
//! Owns the hecs ECS world, runs systems once per rendered frame,
//! and produces GameStateSnapshots for the frontend.

pub mod combat;
pub mod economy;
pub mod engine;
pub mod path;
pub mod scheduler;
pub mod systems;
pub mod world_setup;

pub use bulwark_core as core;
pub use engine::{SimConfig, SimulationEngine};
