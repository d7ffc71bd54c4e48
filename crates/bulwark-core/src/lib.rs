//! Core types and definitions for the BULWARK tower-defense simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, catalogs, commands, state snapshots, events, errors and
//! constants. It depends on hecs only for the `Entity` handle and on no
//! runtime framework.

pub mod catalog;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
