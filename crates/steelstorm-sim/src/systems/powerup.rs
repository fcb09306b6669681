//! Power-up timers and item pickup effects.
//!
//! Every nonzero countdown drops by exactly one per tick; a category
//! is active while its counter is positive. Picking up a matching item
//! SETS the counter to the category's duration — reapplying refreshes,
//! it never stacks. Health, experience, and rocket items apply once at
//! collection time and have no timer.

use glam::Vec2;
use rand_chacha::ChaCha8Rng;

use steelstorm_core::constants::*;
use steelstorm_core::enums::{ExplosionKind, ItemKind};
use steelstorm_core::events::GameEvent;

use crate::engine::{PlayerSlot, ScoreState};
use crate::pool::Pools;
use crate::systems::{effects, progression};

/// Count down this slot's power-ups and upgrade animation by one tick.
pub fn tick_timers(slot: &mut PlayerSlot) {
    let timers = &mut slot.power_ups;
    timers.shield = timers.shield.saturating_sub(1);
    timers.multishot = timers.multishot.saturating_sub(1);
    timers.damage_boost = timers.damage_boost.saturating_sub(1);
    timers.speed_boost = timers.speed_boost.saturating_sub(1);

    slot.upgrade_animation = slot.upgrade_animation.saturating_sub(1);
}

/// Apply a collected item's effect to a slot.
pub fn collect_item(
    slot: &mut PlayerSlot,
    kind: ItemKind,
    position: Vec2,
    pools: &mut Pools,
    score: &mut ScoreState,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    score.items_collected += 1;
    effects::spawn_explosion(&mut pools.explosions, position, ExplosionKind::Upgrade);

    match kind {
        ItemKind::Health => {
            let tank = &mut slot.tank;
            let gain = HEALTH_PACK_AMOUNT.min(tank.max_health - tank.health);
            tank.health = (tank.health + HEALTH_PACK_AMOUNT).min(tank.max_health);
            effects::spawn_text(
                &mut pools.texts,
                position,
                &format!("+{gain:.0} HEALTH"),
                "#22ff22",
                20.0,
            );
        }
        ItemKind::Damage => {
            slot.power_ups.damage_boost = DAMAGE_BOOST_DURATION;
            effects::spawn_text(&mut pools.texts, position, "DAMAGE BOOST!", "#ff4444", 22.0);
        }
        ItemKind::Speed => {
            slot.power_ups.speed_boost = SPEED_BOOST_DURATION;
            effects::spawn_text(&mut pools.texts, position, "SPEED BOOST!", "#4444ff", 22.0);
        }
        ItemKind::Experience => {
            let xp = ITEM_XP_BASE + ITEM_XP_PER_WAVE * score.wave;
            effects::spawn_text(
                &mut pools.texts,
                position,
                &format!("+{xp} EXP"),
                "#aa44ff",
                24.0,
            );
            progression::grant_experience(
                slot,
                xp,
                &mut pools.texts,
                &mut pools.sparks,
                rng,
                events,
            );
        }
        ItemKind::Rocket => {
            // Clearing the stamp makes the launcher immediately ready.
            slot.tank.last_rocket = None;
            effects::spawn_text(&mut pools.texts, position, "ROCKET READY!", "#ff8800", 20.0);
        }
        ItemKind::Shield => {
            slot.power_ups.shield = SHIELD_DURATION;
            effects::spawn_text(&mut pools.texts, position, "SHIELD ACTIVE!", "#00ffff", 22.0);
        }
        ItemKind::Multishot => {
            slot.power_ups.multishot = MULTISHOT_DURATION;
            effects::spawn_text(&mut pools.texts, position, "MULTI-SHOT!", "#ffff00", 22.0);
        }
    }

    effects::spawn_sparks(
        &mut pools.sparks,
        rng,
        position,
        ITEM_PICKUP_SPARKS,
        60.0,
        6.0,
        kind.glow_color(),
    );

    log::debug!("player {} collected {kind:?}", slot.id);
    events.push(GameEvent::ItemCollected {
        player: slot.id,
        kind,
    });
}
