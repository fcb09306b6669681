//! Per-tick systems.
//!
//! Systems are free functions over slices of engine state. They do not
//! own anything — all state lives on `GameEngine` — and they run in a
//! fixed order (see `GameEngine::run_systems`).

pub mod collision;
pub mod effects;
pub mod enemy;
pub mod player;
pub mod powerup;
pub mod progression;
pub mod projectile;
pub mod snapshot;
pub mod spawner;
