//! Spawn admission — decides when new enemies and items enter play.
//!
//! Both checks are probabilistic per tick and gated by a live-count
//! cap. When a cap is reached the spawner silently skips; it is
//! re-evaluated next tick, so no retry bookkeeping exists.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use steelstorm_core::constants::*;
use steelstorm_core::entities::{Item, Tank};
use steelstorm_core::enums::ItemKind;

use crate::engine::SimConfig;
use crate::pool::Pool;
use crate::world_setup;

/// Run spawn admission for this tick.
pub fn run(
    enemies: &mut Vec<Tank>,
    items: &mut Pool<Item>,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    wave: u32,
    next_enemy_id: &mut u32,
) {
    let cap = (ENEMY_CAP_BASE + wave / ENEMY_CAP_WAVE_DIVISOR).min(ENEMY_CAP_HARD) as usize;
    if enemies.len() < cap && rng.gen_bool(config.enemy_spawn_chance) {
        let id = *next_enemy_id;
        *next_enemy_id += 1;
        enemies.push(world_setup::enemy_tank(id, wave, rng, config));
    }

    if items.live_count() < MAX_UNCOLLECTED_ITEMS && rng.gen_bool(config.item_spawn_chance) {
        stock_item(items, rng, config);
    }
}

/// Place a random item inside the playfield margin.
fn stock_item(items: &mut Pool<Item>, rng: &mut ChaCha8Rng, config: &SimConfig) {
    let kind = ItemKind::ALL[rng.gen_range(0..ItemKind::ALL.len())];
    let x = rng.gen_range(0.0..config.board_width - 2.0 * ITEM_EDGE_INSET) + ITEM_EDGE_INSET;
    let y = rng.gen_range(0.0..config.board_height - 2.0 * ITEM_EDGE_INSET) + ITEM_EDGE_INSET;
    let pulse = rng.gen_range(0.0..std::f32::consts::TAU);

    let item = items.acquire();
    item.kind = kind;
    item.position = glam::Vec2::new(x, y);
    item.life = item.max_life;
    item.pulse_phase = pulse;
}
