//! Simulation engine for Steelstorm.
//!
//! Owns all mutable game state (player slots, enemies, object pools,
//! score, RNG), advances it one tick at a time, and produces
//! `GameSnapshot`s for the host renderer. Completely headless.

pub mod engine;
pub mod pool;
pub mod runtime;
pub mod systems;
pub mod world_setup;

pub use engine::{GameEngine, SimConfig};
pub use steelstorm_core as core;

#[cfg(test)]
mod tests;
