//! Collision detection and damage resolution.
//!
//! All tests are circle-vs-circle on squared distances. Evaluation
//! order per tick: projectiles against opposing tanks, then hull
//! contact damage, then item pickup. A projectile deactivates on its
//! first hit and never damages two targets; a tank accumulates every
//! hit landed this tick before its death check runs once.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use steelstorm_core::constants::*;
use steelstorm_core::entities::Tank;
use steelstorm_core::enums::{ExplosionKind, Owner, PlayerId, ProjectileKind};
use steelstorm_core::events::GameEvent;
use steelstorm_core::types::circles_overlap;

use crate::engine::{PlayerSlot, ScoreState, SimConfig};
use crate::pool::{Pools, PoolSlot};
use crate::systems::{effects, powerup, progression};

/// Resolve all collisions and their consequences for this tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    players: &mut [PlayerSlot],
    enemies: &mut Vec<Tank>,
    pools: &mut Pools,
    score: &mut ScoreState,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    game_over: &mut bool,
    config: &SimConfig,
) {
    // Which player's projectile landed the hit, per enemy index.
    let mut credit: Vec<Option<PlayerId>> = vec![None; enemies.len()];

    resolve_projectiles(players, enemies, pools, &mut credit, events);
    resolve_kills(players, enemies, &credit, pools, score, rng, events, config);
    resolve_contact(players, enemies, pools, rng);
    resolve_defeats(players, events, game_over);
    resolve_pickups(players, pools, score, rng, events);
}

/// Projectiles vs opposing tanks. Damage is applied immediately; death
/// checks are deferred to `resolve_kills` / `resolve_defeats`.
fn resolve_projectiles(
    players: &mut [PlayerSlot],
    enemies: &mut [Tank],
    pools: &mut Pools,
    credit: &mut [Option<PlayerId>],
    events: &mut Vec<GameEvent>,
) {
    let Pools {
        projectiles,
        explosions,
        texts,
        ..
    } = pools;

    for projectile in projectiles.iter_mut() {
        let explosion_kind = match projectile.kind {
            ProjectileKind::Rocket => ExplosionKind::Rocket,
            ProjectileKind::Bullet => ExplosionKind::Normal,
        };

        match projectile.owner {
            Owner::Enemy => {
                for slot in players.iter_mut() {
                    if slot.defeated {
                        continue;
                    }
                    if !circles_overlap(
                        projectile.position,
                        projectile.kind.size(),
                        slot.tank.position,
                        TANK_SIZE,
                    ) {
                        continue;
                    }

                    projectile.release();
                    let blocked = slot.power_ups.shield_active();
                    let damage = if blocked {
                        (projectile.damage * SHIELD_DAMAGE_FACTOR).floor()
                    } else {
                        projectile.damage
                    };
                    slot.tank.health -= damage;

                    effects::spawn_explosion(explosions, projectile.position, explosion_kind);
                    let (text, color) = if blocked {
                        (format!("BLOCKED -{damage:.0}"), "#00ffff")
                    } else {
                        (format!("-{damage:.0}"), "#ff4444")
                    };
                    effects::spawn_text(texts, projectile.position, &text, color, 18.0);
                    events.push(GameEvent::PlayerHit {
                        player: slot.id,
                        damage,
                        blocked,
                    });
                    break; // first matching target only
                }
            }
            Owner::Player(pid) => {
                for (index, enemy) in enemies.iter_mut().enumerate() {
                    if !circles_overlap(
                        projectile.position,
                        projectile.kind.size(),
                        enemy.position,
                        TANK_SIZE,
                    ) {
                        continue;
                    }

                    projectile.release();
                    enemy.health -= projectile.damage;
                    credit[index] = Some(pid);

                    effects::spawn_explosion(explosions, projectile.position, explosion_kind);
                    effects::spawn_text(
                        texts,
                        projectile.position,
                        &format!("-{:.0}", projectile.damage),
                        "#44ff44",
                        18.0,
                    );
                    break;
                }
            }
        }
    }
}

/// Score, experience, and wave advancement for enemies whose health
/// dropped to zero this tick, then remove them from play.
#[allow(clippy::too_many_arguments)]
fn resolve_kills(
    players: &mut [PlayerSlot],
    enemies: &mut Vec<Tank>,
    credit: &[Option<PlayerId>],
    pools: &mut Pools,
    score: &mut ScoreState,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    config: &SimConfig,
) {
    for (index, enemy) in enemies.iter().enumerate() {
        if enemy.health > 0.0 {
            continue;
        }

        let awarded = KILL_SCORE_BASE
            + KILL_SCORE_PER_WAVE * score.wave as u64
            + KILL_SCORE_PER_LEVEL * enemy.level as u64;
        score.score += awarded;
        score.kills_this_wave += 1;
        score.total_kills += 1;

        effects::spawn_explosion(&mut pools.explosions, enemy.position, ExplosionKind::Rocket);
        effects::spawn_text(
            &mut pools.texts,
            enemy.position - glam::Vec2::new(0.0, 30.0),
            &format!("+{awarded}"),
            "#ffff44",
            18.0,
        );
        effects::spawn_text(
            &mut pools.texts,
            enemy.position - glam::Vec2::new(0.0, 70.0),
            "DESTROYED!",
            "#ff4444",
            24.0,
        );
        events.push(GameEvent::EnemyDestroyed {
            position: enemy.position,
            enemy_level: enemy.level,
            score_awarded: awarded,
        });

        let xp = KILL_XP_BASE + KILL_XP_PER_LEVEL * enemy.level;
        if let Some(pid) = credit[index] {
            effects::spawn_text(
                &mut pools.texts,
                enemy.position - glam::Vec2::new(0.0, 50.0),
                &format!("+{xp} EXP"),
                "#44ffff",
                18.0,
            );
            progression::grant_experience(
                &mut players[pid as usize],
                xp,
                &mut pools.texts,
                &mut pools.sparks,
                rng,
                events,
            );
        }

        if score.kills_this_wave >= score.wave * KILLS_PER_WAVE_FACTOR {
            score.wave += 1;
            score.kills_this_wave = 0;
            log::info!("wave {} begins", score.wave);
            effects::spawn_text(
                &mut pools.texts,
                glam::Vec2::new(config.board_width / 2.0, 100.0),
                &format!("WAVE {}!", score.wave),
                "#00ffff",
                32.0,
            );
            events.push(GameEvent::WaveStarted { wave: score.wave });
        }
    }

    enemies.retain(|enemy| enemy.health > 0.0);
}

/// Continuous hull-contact damage while a player and an enemy overlap.
fn resolve_contact(
    players: &mut [PlayerSlot],
    enemies: &[Tank],
    pools: &mut Pools,
    rng: &mut ChaCha8Rng,
) {
    for enemy in enemies {
        for slot in players.iter_mut() {
            if slot.defeated {
                continue;
            }
            if !circles_overlap(enemy.position, TANK_SIZE, slot.tank.position, TANK_SIZE) {
                continue;
            }

            let damage = if slot.power_ups.shield_active() {
                CONTACT_DAMAGE_SHIELDED
            } else {
                CONTACT_DAMAGE
            };
            slot.tank.health -= damage;

            if rng.gen_bool(CONTACT_EXPLOSION_CHANCE) {
                let jitter = glam::Vec2::new(
                    rng.gen::<f32>() * 30.0 - 15.0,
                    rng.gen::<f32>() * 30.0 - 15.0,
                );
                effects::spawn_explosion(
                    &mut pools.explosions,
                    enemy.position + jitter,
                    ExplosionKind::Normal,
                );
            }
        }
    }
}

/// Death check, applied once per slot after all damage this tick.
/// The session ends when every slot is defeated.
fn resolve_defeats(players: &mut [PlayerSlot], events: &mut Vec<GameEvent>, game_over: &mut bool) {
    for slot in players.iter_mut() {
        if !slot.defeated && slot.tank.health <= 0.0 {
            slot.defeated = true;
            log::info!("player {} defeated", slot.id);
            events.push(GameEvent::PlayerDefeated { player: slot.id });
        }
    }

    if !*game_over && players.iter().all(|slot| slot.defeated) {
        *game_over = true;
        log::info!("game over");
        events.push(GameEvent::GameOver);
    }
}

/// Item pickup: first overlapping living player collects the item.
fn resolve_pickups(
    players: &mut [PlayerSlot],
    pools: &mut Pools,
    score: &mut ScoreState,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    for index in 0..pools.items.slots_mut().len() {
        let (kind, position) = {
            let item = &pools.items.slots_mut()[index];
            if item.collected {
                continue;
            }
            (item.kind, item.position)
        };

        let collector = players.iter().position(|slot| {
            !slot.defeated
                && circles_overlap(position, ITEM_SIZE, slot.tank.position, TANK_SIZE)
        });

        if let Some(slot_index) = collector {
            pools.items.slots_mut()[index].release();
            powerup::collect_item(
                &mut players[slot_index],
                kind,
                position,
                pools,
                score,
                rng,
                events,
            );
        }
    }
}
