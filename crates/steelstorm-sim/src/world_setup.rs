//! Entity spawn factories.
//!
//! Builds player and enemy tanks with the stats their level or the
//! current wave dictates. Spawn admission policy lives in the spawner
//! system; these only construct records.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use steelstorm_core::classes::{experience_threshold, profile_for_level};
use steelstorm_core::constants::*;
use steelstorm_core::entities::Tank;

use crate::engine::SimConfig;

/// Build the player tank at its fixed start position.
pub fn player_tank(id: u32, config: &SimConfig) -> Tank {
    Tank {
        id,
        position: Vec2::new(
            config.board_width / 2.0,
            config.board_height - PLAYER_START_OFFSET_Y,
        ),
        body_angle: -std::f32::consts::FRAC_PI_2,
        turret_angle: -std::f32::consts::FRAC_PI_2,
        health: PLAYER_MAX_HEALTH,
        max_health: PLAYER_MAX_HEALTH,
        last_shot: None,
        last_rocket: None,
        speed: BASE_PLAYER_SPEED,
        moving: false,
        level: 1,
        experience: 0,
        experience_to_next: experience_threshold(1),
        class: profile_for_level(1).class,
        damage: PLAYER_BASE_DAMAGE,
        rocket_damage: PLAYER_BASE_ROCKET_DAMAGE,
        shot_cooldown: ticks_from_ms(BASE_SHOT_COOLDOWN_MS),
        rocket_cooldown: ticks_from_ms(BASE_ROCKET_COOLDOWN_MS),
    }
}

/// Enemy level for a wave: `min(wave / 3 + 1, 8)`.
pub fn enemy_level_for_wave(wave: u32) -> u32 {
    (wave / ENEMY_LEVEL_WAVE_DIVISOR + 1).min(MAX_ENEMY_LEVEL)
}

/// Build an enemy tank just off a random board edge, stats scaled to
/// the current wave. The facing angle is random; steering corrects it
/// within the first few ticks.
pub fn enemy_tank(id: u32, wave: u32, rng: &mut ChaCha8Rng, config: &SimConfig) -> Tank {
    let position = edge_spawn_position(rng, config);
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    let level = enemy_level_for_wave(wave);
    let class = profile_for_level(level).class;

    Tank {
        id,
        position,
        body_angle: angle,
        turret_angle: angle,
        health: ENEMY_BASE_HEALTH + ENEMY_HEALTH_PER_LEVEL * level as f32,
        max_health: ENEMY_BASE_HEALTH + ENEMY_HEALTH_PER_LEVEL * level as f32,
        last_shot: None,
        last_rocket: None,
        speed: BASE_ENEMY_SPEED + ENEMY_SPEED_PER_LEVEL * level as f32,
        moving: false,
        level,
        experience: 0,
        experience_to_next: 0,
        class,
        damage: ENEMY_BASE_DAMAGE + ENEMY_DAMAGE_PER_LEVEL * level as f32,
        rocket_damage: ENEMY_BASE_ROCKET_DAMAGE + ENEMY_ROCKET_DAMAGE_PER_LEVEL * level as f32,
        shot_cooldown: ticks_from_ms(ENEMY_SHOT_COOLDOWN_MS),
        rocket_cooldown: 0,
    }
}

/// Pick a spawn position one tank-size outside a random board edge,
/// jittered along that edge away from the corners.
fn edge_spawn_position(rng: &mut ChaCha8Rng, config: &SimConfig) -> Vec2 {
    let along_x = rng.gen_range(0.0..config.board_width - 2.0 * SPAWN_EDGE_INSET) + SPAWN_EDGE_INSET;
    let along_y =
        rng.gen_range(0.0..config.board_height - 2.0 * SPAWN_EDGE_INSET) + SPAWN_EDGE_INSET;

    match rng.gen_range(0..4u8) {
        0 => Vec2::new(along_x, -TANK_SIZE),
        1 => Vec2::new(config.board_width + TANK_SIZE, along_y),
        2 => Vec2::new(along_x, config.board_height + TANK_SIZE),
        _ => Vec2::new(-TANK_SIZE, along_y),
    }
}
