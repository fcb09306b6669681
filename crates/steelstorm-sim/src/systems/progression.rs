//! Experience and leveling.
//!
//! Kills and experience items feed one accumulator per player slot.
//! Crossing the threshold advances the level, recomputes the stat
//! block from the class table, partially heals, and triggers the
//! cosmetic upgrade transition. Overflow experience carries forward,
//! so one large grant can cross several levels.

use rand_chacha::ChaCha8Rng;

use steelstorm_core::classes::{experience_threshold, profile_for_level, MAX_LEVEL};
use steelstorm_core::constants::*;
use steelstorm_core::entities::{FloatingText, UpgradeParticle};
use steelstorm_core::events::GameEvent;

use crate::engine::PlayerSlot;
use crate::pool::Pool;
use crate::systems::effects;

/// Grant experience to a slot, resolving any level-ups it causes.
pub fn grant_experience(
    slot: &mut PlayerSlot,
    amount: u32,
    texts: &mut Pool<FloatingText>,
    sparks: &mut Pool<UpgradeParticle>,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    let tank = &mut slot.tank;
    tank.experience += amount;

    while tank.level < MAX_LEVEL && tank.experience >= tank.experience_to_next {
        tank.experience -= tank.experience_to_next;
        tank.level += 1;
        tank.experience_to_next = experience_threshold(tank.level);

        let profile = profile_for_level(tank.level);
        tank.class = profile.class;
        tank.speed = BASE_PLAYER_SPEED + profile.speed_bonus;
        tank.damage = PLAYER_BASE_DAMAGE + profile.damage_bonus;
        tank.rocket_damage = PLAYER_BASE_ROCKET_DAMAGE + 2.0 * profile.damage_bonus;
        tank.max_health = PLAYER_MAX_HEALTH + profile.health_bonus;
        tank.health = (tank.health + LEVEL_UP_HEAL).min(tank.max_health);
        tank.shot_cooldown = ticks_from_ms(
            BASE_SHOT_COOLDOWN_MS
                .saturating_sub(SHOT_COOLDOWN_STEP_MS * tank.level as u64)
                .max(MIN_SHOT_COOLDOWN_MS),
        );
        tank.rocket_cooldown = ticks_from_ms(
            BASE_ROCKET_COOLDOWN_MS
                .saturating_sub(ROCKET_COOLDOWN_STEP_MS * tank.level as u64)
                .max(MIN_ROCKET_COOLDOWN_MS),
        );

        slot.upgrade_animation = UPGRADE_ANIMATION_TICKS;

        let position = tank.position;
        let class = tank.class;
        let level = tank.level;
        effects::spawn_sparks(
            sparks,
            rng,
            position,
            LEVEL_UP_SPARKS,
            100.0,
            8.0,
            class.glow_color(),
        );
        effects::spawn_text(
            texts,
            position - glam::Vec2::new(0.0, 60.0),
            &format!("LEVEL {level}!"),
            "#ffff00",
            28.0,
        );
        effects::spawn_text(
            texts,
            position - glam::Vec2::new(0.0, 90.0),
            &format!("{class:?}").to_uppercase(),
            class.glow_color(),
            24.0,
        );

        log::info!("player {} reached level {level} ({class:?})", slot.id);
        events.push(GameEvent::LevelUp {
            player: slot.id,
            level,
            class,
        });
    }
}
