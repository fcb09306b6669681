//! Fundamental simulation types and angle helpers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each processed tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the nominal tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Normalize an angle into `(-PI, PI]`.
pub fn wrap_angle(angle: f32) -> f32 {
    let mut a = angle % std::f32::consts::TAU;
    if a > std::f32::consts::PI {
        a -= std::f32::consts::TAU;
    } else if a <= -std::f32::consts::PI {
        a += std::f32::consts::TAU;
    }
    a
}

/// Bearing from `from` to `to` in radians, screen convention
/// (0 = +x, positive toward +y). Returns `None` when the points are
/// close enough that the direction is undefined.
pub fn bearing(from: Vec2, to: Vec2) -> Option<f32> {
    let delta = to - from;
    if delta.length_squared() < crate::constants::AIM_EPSILON {
        return None;
    }
    Some(delta.y.atan2(delta.x))
}

/// Circle-vs-circle overlap test on collision diameters.
/// Squared-distance comparison, no square root.
pub fn circles_overlap(a: Vec2, size_a: f32, b: Vec2, size_b: f32) -> bool {
    let min_distance = (size_a + size_b) / 2.0;
    a.distance_squared(b) < min_distance * min_distance
}
