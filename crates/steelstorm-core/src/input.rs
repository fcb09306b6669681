//! Input snapshot — the per-tick contract from the host's input
//! collector to the simulation.
//!
//! Held keys are level-triggered (true while held); fire flags are
//! edge-triggered and consumed by the engine on the tick they arrive.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Abstract input state for one player slot, consumed once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Drive forward along the hull facing.
    pub forward: bool,
    /// Drive backward along the hull facing.
    pub reverse: bool,
    /// Rotate the hull counter-clockwise.
    pub turn_left: bool,
    /// Rotate the hull clockwise.
    pub turn_right: bool,
    /// Aim target in playfield coordinates (cursor position).
    pub aim: Vec2,
    /// Fire the primary weapon this tick (cooldown permitting).
    pub fire: bool,
    /// Fire a rocket this tick (cooldown permitting).
    pub fire_rocket: bool,
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self {
            forward: false,
            reverse: false,
            turn_left: false,
            turn_right: false,
            aim: Vec2::new(
                crate::constants::BOARD_WIDTH / 2.0,
                crate::constants::BOARD_HEIGHT / 2.0,
            ),
            fire: false,
            fire_rocket: false,
        }
    }
}

impl InputSnapshot {
    /// True when any movement or rotation key is held.
    pub fn wants_movement(&self) -> bool {
        self.forward || self.reverse || self.turn_left || self.turn_right
    }
}
