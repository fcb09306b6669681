//! Enemy steering and fire.
//!
//! Each enemy steers its hull toward the nearest living player with
//! proportional correction (no instant snap), advances along its own
//! facing, snaps its turret to the bearing, and fires when in range.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use steelstorm_core::constants::*;
use steelstorm_core::entities::Tank;
use steelstorm_core::enums::{Owner, ProjectileKind};
use steelstorm_core::types::{bearing, wrap_angle};

use crate::engine::PlayerSlot;
use crate::pool::Pools;
use crate::systems::{effects, player::fire_projectile};

/// Advance every enemy by one tick.
pub fn run(
    enemies: &mut [Tank],
    players: &[PlayerSlot],
    pools: &mut Pools,
    rng: &mut ChaCha8Rng,
    tick: u64,
) {
    for enemy in enemies.iter_mut() {
        let Some(target) = nearest_player(enemy.position, players) else {
            continue;
        };

        // Degenerate geometry: target exactly on the hull. Skip the
        // steering and fire updates for this tick.
        let Some(target_angle) = bearing(enemy.position, target) else {
            continue;
        };

        let correction = wrap_angle(target_angle - enemy.body_angle);
        enemy.body_angle += correction * ENEMY_TURN_RATE;

        let before = enemy.position;
        enemy.position += Vec2::from_angle(enemy.body_angle) * enemy.speed;
        enemy.moving = before.distance_squared(enemy.position) > 0.01;

        if enemy.moving && rng.gen_bool(SMOKE_CHANCE_ENEMY) {
            let exhaust = enemy.position - Vec2::from_angle(enemy.body_angle) * TANK_SIZE * 0.4;
            effects::spawn_smoke(&mut pools.smoke, rng, exhaust);
        }

        // Turret tracks the target with no lag.
        enemy.turret_angle = target_angle;

        let range_sq = enemy.position.distance_squared(target);
        if range_sq < ENEMY_FIRE_RANGE * ENEMY_FIRE_RANGE && enemy.can_shoot(tick) {
            let tip = enemy.barrel_tip();
            let angle = bearing(tip, target).unwrap_or(enemy.turret_angle);
            fire_projectile(
                pools,
                tip,
                Vec2::from_angle(angle) * BULLET_SPEED,
                Owner::Enemy,
                enemy.damage,
                ProjectileKind::Bullet,
            );
            enemy.last_shot = Some(tick);
        }
    }
}

/// Position of the closest non-defeated player, if any.
fn nearest_player(from: Vec2, players: &[PlayerSlot]) -> Option<Vec2> {
    players
        .iter()
        .filter(|slot| !slot.defeated)
        .map(|slot| slot.tank.position)
        .min_by(|a, b| {
            from.distance_squared(*a)
                .total_cmp(&from.distance_squared(*b))
        })
}
