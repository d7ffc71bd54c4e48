//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` or a `SimContext`.
//! They do not own state: entity state lives in components, run state in
//! `RunState`.

pub mod enemies;
pub mod particles;
pub mod powerups;
pub mod projectiles;
pub mod snapshot;
pub mod timers;
pub mod towers;
pub mod waves;
