//! Cosmetic effect lifecycle and shared effect constructors.
//!
//! Explosions grow toward a kind-specific cap, texts rise, smoke
//! drifts and thins, sparks drift with drag. Everything deactivates
//! back into its pool when its life reaches zero. Items also age here;
//! pickup itself is resolved by the collision system.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use steelstorm_core::constants::*;
use steelstorm_core::entities::{Explosion, FloatingText, SmokeParticle, UpgradeParticle};
use steelstorm_core::enums::ExplosionKind;

use crate::pool::{Pool, PoolSlot, Pools};

/// Advance every cosmetic effect and item by one tick.
pub fn run(pools: &mut Pools) {
    for explosion in pools.explosions.iter_mut() {
        let (growth, cap) = match explosion.kind {
            ExplosionKind::Rocket => (ROCKET_EXPLOSION_GROWTH, ROCKET_EXPLOSION_MAX_SIZE),
            _ => (EXPLOSION_GROWTH, EXPLOSION_MAX_SIZE),
        };
        explosion.size = (explosion.size + growth).min(cap);
        explosion.life -= 1;
        if explosion.life == 0 {
            explosion.release();
        }
    }

    for text in pools.texts.iter_mut() {
        text.position.y -= TEXT_RISE;
        text.life -= 1;
        if text.life == 0 {
            text.release();
        }
    }

    for smoke in pools.smoke.iter_mut() {
        smoke.position += smoke.velocity;
        smoke.size += SMOKE_GROWTH;
        smoke.life -= 1;
        if smoke.life == 0 {
            smoke.release();
        }
    }

    for spark in pools.sparks.iter_mut() {
        spark.position += spark.velocity;
        spark.velocity *= SPARK_DRAG;
        spark.size += SPARK_GROWTH;
        spark.life -= 1;
        if spark.life == 0 {
            spark.release();
        }
    }

    // Uncollected items age out after their lifetime.
    for item in pools.items.iter_mut() {
        item.pulse_phase += ITEM_PULSE_STEP;
        item.life = item.life.saturating_sub(1);
        if item.life == 0 {
            item.release();
        }
    }
}

/// Start an explosion of the given kind at `position`.
pub fn spawn_explosion(pool: &mut Pool<Explosion>, position: Vec2, kind: ExplosionKind) {
    let explosion = pool.acquire();
    explosion.position = position;
    explosion.kind = kind;
    explosion.life = explosion.max_life;
}

/// Start a rising floating text at `position`.
pub fn spawn_text(
    pool: &mut Pool<FloatingText>,
    position: Vec2,
    text: &str,
    color: &str,
    font_size: f32,
) {
    let record = pool.acquire();
    record.position = position;
    record.text.push_str(text);
    record.color.clear();
    record.color.push_str(color);
    record.font_size = font_size;
    record.life = record.max_life;
}

/// Emit one exhaust puff behind a hull at `exhaust` with small jitter.
pub fn spawn_smoke(pool: &mut Pool<SmokeParticle>, rng: &mut ChaCha8Rng, exhaust: Vec2) {
    let smoke = pool.acquire();
    smoke.position = exhaust
        + Vec2::new(
            (rng.gen::<f32>() - 0.5) * 20.0,
            (rng.gen::<f32>() - 0.5) * 20.0,
        );
    smoke.velocity = Vec2::new(
        (rng.gen::<f32>() - 0.5) * 2.0,
        (rng.gen::<f32>() - 0.5) * 2.0 - 1.0,
    );
    smoke.life = smoke.max_life;
    smoke.size = 8.0 + rng.gen::<f32>() * 12.0;
}

/// Burst of celebration sparks scattered around `center`.
///
/// `scatter` is the placement spread, `kick` the velocity spread; spark
/// size scales with the kick.
pub fn spawn_sparks(
    pool: &mut Pool<UpgradeParticle>,
    rng: &mut ChaCha8Rng,
    center: Vec2,
    count: usize,
    scatter: f32,
    kick: f32,
    color: &str,
) {
    for _ in 0..count {
        let spark = pool.acquire();
        spark.position = center
            + Vec2::new(
                (rng.gen::<f32>() - 0.5) * scatter,
                (rng.gen::<f32>() - 0.5) * scatter,
            );
        spark.velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * kick,
            (rng.gen::<f32>() - 0.5) * kick,
        );
        spark.life = spark.max_life;
        spark.size = kick / 2.0 + rng.gen::<f32>() * kick;
        spark.color.clear();
        spark.color.push_str(color);
    }
}
