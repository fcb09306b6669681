//! Input application for one player slot.
//!
//! Movement with per-axis board clamping, hull rotation, independent
//! turret aiming, and cooldown-gated firing. Fire flags are edges and
//! are consumed here.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use steelstorm_core::constants::*;
use steelstorm_core::enums::{Owner, ProjectileKind};
use steelstorm_core::events::GameEvent;
use steelstorm_core::types::bearing;

use crate::engine::{PlayerSlot, SimConfig};
use crate::pool::Pools;
use crate::systems::effects;

/// Apply one slot's input snapshot for this tick.
pub fn run(
    slot: &mut PlayerSlot,
    pools: &mut Pools,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    tick: u64,
    events: &mut Vec<GameEvent>,
) {
    if slot.defeated {
        return;
    }

    apply_movement(slot, pools, rng, config);
    aim_turret(slot);
    apply_fire(slot, pools, tick, events);

    // Fire flags are edge-triggered: consumed once.
    slot.input.fire = false;
    slot.input.fire_rocket = false;
}

/// Drive and rotate the hull. Both axes clamp independently, so a tank
/// sliding along a wall keeps the unblocked component of its motion.
fn apply_movement(
    slot: &mut PlayerSlot,
    pools: &mut Pools,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
) {
    let tank = &mut slot.tank;
    let speed_mult = if slot.power_ups.speed_boost_active() {
        SPEED_BOOST_FACTOR
    } else {
        1.0
    };

    let mut moved = false;
    let step = Vec2::from_angle(tank.body_angle) * tank.speed * speed_mult;

    if slot.input.forward {
        let candidate = tank.position + step;
        clamp_axes(&mut tank.position, candidate, config);
        moved = true;
    }
    if slot.input.reverse {
        let candidate = tank.position - step;
        clamp_axes(&mut tank.position, candidate, config);
        moved = true;
    }
    if slot.input.turn_left {
        tank.body_angle -= ROTATION_STEP;
        moved = true;
    }
    if slot.input.turn_right {
        tank.body_angle += ROTATION_STEP;
        moved = true;
    }

    tank.moving = moved;
    if moved && rng.gen_bool(SMOKE_CHANCE_PLAYER) {
        let exhaust = tank.position - Vec2::from_angle(tank.body_angle) * TANK_SIZE * 0.4;
        effects::spawn_smoke(&mut pools.smoke, rng, exhaust);
    }
}

/// Accept each axis of `candidate` only while it keeps the hull fully
/// on the board.
fn clamp_axes(position: &mut Vec2, candidate: Vec2, config: &SimConfig) {
    let half = TANK_SIZE / 2.0;
    if candidate.x >= half && candidate.x <= config.board_width - half {
        position.x = candidate.x;
    }
    if candidate.y >= half && candidate.y <= config.board_height - half {
        position.y = candidate.y;
    }
}

/// Track the aim target every tick, independent of hull rotation.
/// Skipped when the target sits on the tank (undefined direction).
fn aim_turret(slot: &mut PlayerSlot) {
    if let Some(angle) = bearing(slot.tank.position, slot.input.aim) {
        slot.tank.turret_angle = angle;
    }
}

/// Handle primary and rocket fire edges, cooldown permitting.
fn apply_fire(slot: &mut PlayerSlot, pools: &mut Pools, tick: u64, events: &mut Vec<GameEvent>) {
    let damage_mult = if slot.power_ups.damage_boost_active() {
        DAMAGE_BOOST_FACTOR
    } else {
        1.0
    };

    if slot.input.fire && slot.tank.can_shoot(tick) {
        let tip = slot.tank.barrel_tip();
        let damage = (slot.tank.damage * damage_mult).floor();

        if slot.power_ups.multishot_active() {
            // Fan of three along the turret, fixed angular spread.
            for offset in [-MULTISHOT_SPREAD, 0.0, MULTISHOT_SPREAD] {
                let angle = slot.tank.turret_angle + offset;
                fire_projectile(
                    pools,
                    tip,
                    Vec2::from_angle(angle) * BULLET_SPEED,
                    Owner::Player(slot.id),
                    damage,
                    ProjectileKind::Bullet,
                );
            }
        } else {
            let angle = bearing(tip, slot.input.aim).unwrap_or(slot.tank.turret_angle);
            fire_projectile(
                pools,
                tip,
                Vec2::from_angle(angle) * BULLET_SPEED,
                Owner::Player(slot.id),
                damage,
                ProjectileKind::Bullet,
            );
        }
        slot.tank.last_shot = Some(tick);
    }

    if slot.input.fire_rocket && slot.tank.can_fire_rocket(tick) {
        let tip = slot.tank.barrel_tip();
        let angle = bearing(tip, slot.input.aim).unwrap_or(slot.tank.turret_angle);
        let damage = (slot.tank.rocket_damage * damage_mult).floor();
        fire_projectile(
            pools,
            tip,
            Vec2::from_angle(angle) * ROCKET_SPEED,
            Owner::Player(slot.id),
            damage,
            ProjectileKind::Rocket,
        );
        slot.tank.last_rocket = Some(tick);
        events.push(GameEvent::RocketFired { player: slot.id });
    }
}

/// Acquire and launch one projectile.
pub(crate) fn fire_projectile(
    pools: &mut Pools,
    position: Vec2,
    velocity: Vec2,
    owner: Owner,
    damage: f32,
    kind: ProjectileKind,
) {
    let projectile = pools.projectiles.acquire();
    projectile.position = position;
    projectile.velocity = velocity;
    projectile.owner = owner;
    projectile.damage = damage;
    projectile.kind = kind;
}
