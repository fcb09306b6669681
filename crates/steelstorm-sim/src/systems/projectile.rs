//! Projectile integration.
//!
//! Explicit Euler, no acceleration: position += velocity each tick.
//! The trail keeps the last few positions for the renderer's fading
//! tail. Projectiles despawn once they leave the board rectangle plus
//! a margin, so they never pop out at the literal edge.

use steelstorm_core::constants::{OFF_BOARD_MARGIN, TRAIL_LENGTH};
use steelstorm_core::entities::Projectile;

use crate::engine::SimConfig;
use crate::pool::{Pool, PoolSlot};

/// Advance every live projectile by one tick.
pub fn run(projectiles: &mut Pool<Projectile>, config: &SimConfig) {
    for projectile in projectiles.iter_mut() {
        projectile.position += projectile.velocity;

        projectile.trail.push(projectile.position);
        if projectile.trail.len() > TRAIL_LENGTH {
            projectile.trail.remove(0);
        }

        let p = projectile.position;
        let off_board = p.x < -OFF_BOARD_MARGIN
            || p.x > config.board_width + OFF_BOARD_MARGIN
            || p.y < -OFF_BOARD_MARGIN
            || p.y > config.board_height + OFF_BOARD_MARGIN;
        if off_board {
            projectile.release();
        }
    }
}
