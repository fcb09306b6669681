//! Tests for the simulation engine: determinism, movement bounds,
//! collision and damage resolution, progression, power-ups, spawning,
//! pooling, and pause/game-over freeze semantics.

use glam::Vec2;

use steelstorm_core::constants::*;
use steelstorm_core::enums::{ItemKind, Owner, PlayerIdentity, ProjectileKind, TankClass};
use steelstorm_core::events::GameEvent;
use steelstorm_core::input::InputSnapshot;

use crate::engine::{GameEngine, SimConfig};
use crate::systems::{effects, powerup, progression, spawner};
use crate::world_setup;

/// Config with random spawning disabled, for controlled scenarios.
fn quiet_config() -> SimConfig {
    SimConfig {
        enemy_spawn_chance: 0.0,
        item_spawn_chance: 0.0,
        ..SimConfig::default()
    }
}

fn player_position(engine: &GameEngine) -> Vec2 {
    engine.players()[0].tank.position
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = GameEngine::new(SimConfig {
        seed: 12345,
        ..SimConfig::default()
    });
    let mut engine_b = GameEngine::new(SimConfig {
        seed: 12345,
        ..SimConfig::default()
    });

    for _ in 0..300 {
        let snap_a = engine_a.tick();
        let snap_b = engine_b.tick();

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = GameEngine::new(SimConfig {
        seed: 111,
        ..SimConfig::default()
    });
    let mut engine_b = GameEngine::new(SimConfig {
        seed: 222,
        ..SimConfig::default()
    });

    // Spawn admission is the only randomness with no input; at ~0.6%
    // per tick the first admitted enemy lands on different ticks (or
    // different edges) for different seeds well within this window.
    let mut diverged = false;
    for _ in 0..2000 {
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce divergent output");
}

#[test]
fn test_reset_replays_identically() {
    let config = SimConfig::default();
    let mut engine = GameEngine::new(config.clone());
    for _ in 0..200 {
        engine.tick();
    }
    engine.reset();

    let mut fresh = GameEngine::new(config);
    for _ in 0..100 {
        let json_reset = serde_json::to_string(&engine.tick()).unwrap();
        let json_fresh = serde_json::to_string(&fresh.tick()).unwrap();
        assert_eq!(json_reset, json_fresh, "Reset run should replay the seed");
    }
}

// ---- Bounds invariant ----

#[test]
fn test_player_stays_on_board() {
    let mut engine = GameEngine::new(quiet_config());
    let half = TANK_SIZE / 2.0;

    // Spiral into every wall: hold forward and turn for a long time.
    engine.set_input(
        0,
        InputSnapshot {
            forward: true,
            turn_right: true,
            ..InputSnapshot::default()
        },
    );
    for _ in 0..3000 {
        let snapshot = engine.tick();
        let position = snapshot.players[0].tank.position;
        assert!(
            position.x >= half && position.x <= BOARD_WIDTH - half,
            "x out of bounds: {}",
            position.x
        );
        assert!(
            position.y >= half && position.y <= BOARD_HEIGHT - half,
            "y out of bounds: {}",
            position.y
        );
    }
}

#[test]
fn test_wall_slide_keeps_unblocked_axis() {
    let mut engine = GameEngine::new(quiet_config());
    // Face up-left at 45 degrees, drive into the top wall.
    engine.players[0].tank.body_angle = -3.0 * std::f32::consts::FRAC_PI_4;
    engine.set_input(
        0,
        InputSnapshot {
            forward: true,
            ..InputSnapshot::default()
        },
    );

    let mut previous = player_position(&engine);
    let mut slid_along_top = false;
    for _ in 0..400 {
        engine.tick();
        let position = player_position(&engine);
        // Blocked y axis (unchanged, near the wall) with x still moving.
        if position.y == previous.y && position.x < previous.x && position.y < TANK_SIZE {
            slid_along_top = true;
        }
        previous = position;
    }
    assert!(
        slid_along_top,
        "Blocked y must not stop x movement along the wall"
    );
}

// ---- Turret independence ----

#[test]
fn test_turret_ignores_body_rotation() {
    let mut engine = GameEngine::new(quiet_config());
    let aim = Vec2::new(300.0, 200.0);
    let start_body = engine.players()[0].tank.body_angle;

    engine.set_input(
        0,
        InputSnapshot {
            turn_right: true,
            aim,
            ..InputSnapshot::default()
        },
    );

    let ticks = 50;
    for _ in 0..ticks {
        engine.tick();
    }

    let tank = &engine.players()[0].tank;
    let delta = aim - tank.position;
    let expected_turret = delta.y.atan2(delta.x);
    assert!(
        (tank.turret_angle - expected_turret).abs() < 1e-6,
        "Turret should track the aim target exactly: {} vs {expected_turret}",
        tank.turret_angle
    );
    assert!(
        (tank.body_angle - (start_body + ticks as f32 * ROTATION_STEP)).abs() < 1e-4,
        "Body should have rotated by ticks * step"
    );
}

// ---- Projectile collision ----

#[test]
fn test_projectile_hits_only_first_target() {
    let mut engine = GameEngine::new(quiet_config());
    // Two enemies stacked on one spot, out of their 500px fire range.
    let spot = Vec2::new(200.0, 200.0);
    engine.spawn_test_enemy(spot);
    engine.spawn_test_enemy(spot);
    let full_health = engine.enemies()[0].health;

    engine.spawn_test_projectile(spot, Vec2::ZERO, Owner::Player(0), 40.0, ProjectileKind::Bullet);
    engine.tick();

    let enemies = engine.enemies();
    assert_eq!(enemies.len(), 2);
    assert!(
        (enemies[0].health - (full_health - 40.0)).abs() < 1e-3,
        "First evaluated enemy takes the damage"
    );
    assert!(
        (enemies[1].health - full_health).abs() < 1e-3,
        "A projectile never damages two targets in one tick"
    );
    assert_eq!(
        engine.pools().projectiles.live_count(),
        0,
        "Projectile deactivates on first hit"
    );
}

#[test]
fn test_same_tick_hits_accumulate_into_one_kill() {
    let mut engine = GameEngine::new(quiet_config());
    let spot = Vec2::new(200.0, 200.0);
    engine.spawn_test_enemy(spot);
    engine.enemies[0].health = 50.0;

    // Two bullets land on the same tick; together they are lethal.
    engine.spawn_test_projectile(spot, Vec2::ZERO, Owner::Player(0), 30.0, ProjectileKind::Bullet);
    engine.spawn_test_projectile(spot, Vec2::ZERO, Owner::Player(0), 30.0, ProjectileKind::Bullet);
    let snapshot = engine.tick();

    assert!(engine.enemies().is_empty(), "Enemy dies once");
    assert_eq!(engine.score().total_kills, 1, "Exactly one kill scored");
    let destroyed = snapshot
        .events
        .iter()
        .filter(|event| matches!(event, GameEvent::EnemyDestroyed { .. }))
        .count();
    assert_eq!(destroyed, 1);
}

#[test]
fn test_off_board_projectile_despawns() {
    let mut engine = GameEngine::new(quiet_config());
    engine.spawn_test_projectile(
        Vec2::new(BOARD_WIDTH - 10.0, 400.0),
        Vec2::new(BULLET_SPEED, 0.0),
        Owner::Player(0),
        40.0,
        ProjectileKind::Bullet,
    );

    // Needs to clear the 100px margin past the edge first.
    for _ in 0..5 {
        engine.tick();
        assert_eq!(engine.pools().projectiles.live_count(), 1);
    }
    for _ in 0..10 {
        engine.tick();
    }
    assert_eq!(engine.pools().projectiles.live_count(), 0);
}

// ---- Shield mitigation ----

#[test]
fn test_shield_mitigates_projectile_damage() {
    let mut engine = GameEngine::new(quiet_config());
    engine.players[0].power_ups.shield = SHIELD_DURATION;
    let raw_damage = 45.0f32;
    let expected = (raw_damage * SHIELD_DAMAGE_FACTOR).floor();
    assert!(expected < raw_damage);

    engine.spawn_test_projectile(
        player_position(&engine),
        Vec2::ZERO,
        Owner::Enemy,
        raw_damage,
        ProjectileKind::Bullet,
    );
    let snapshot = engine.tick();

    let health = engine.players()[0].tank.health;
    assert!(
        (health - (PLAYER_MAX_HEALTH - expected)).abs() < 1e-3,
        "Shielded damage should be floor(raw * factor): took {}",
        PLAYER_MAX_HEALTH - health
    );
    assert!(snapshot.events.iter().any(|event| matches!(
        event,
        GameEvent::PlayerHit { blocked: true, .. }
    )));
}

#[test]
fn test_unshielded_damage_applies_in_full() {
    let mut engine = GameEngine::new(quiet_config());
    engine.spawn_test_projectile(
        player_position(&engine),
        Vec2::ZERO,
        Owner::Enemy,
        45.0,
        ProjectileKind::Bullet,
    );
    engine.tick();
    let health = engine.players()[0].tank.health;
    assert!((health - (PLAYER_MAX_HEALTH - 45.0)).abs() < 1e-3);
}

// ---- Progression ----

#[test]
fn test_level_up_threshold_and_stats() {
    let mut engine = GameEngine::new(quiet_config());
    let engine = &mut engine;
    progression::grant_experience(
        &mut engine.players[0],
        100,
        &mut engine.pools.texts,
        &mut engine.pools.sparks,
        &mut engine.rng,
        &mut engine.events,
    );

    let tank = &engine.players[0].tank;
    assert_eq!(tank.level, 2);
    assert_eq!(tank.experience, 0, "Exactly-threshold grant leaves no remainder");
    assert_eq!(tank.experience_to_next, 150);
    assert_eq!(tank.class, TankClass::Desert);
    assert!((tank.speed - 4.2).abs() < 1e-6);
    assert!((tank.damage - 45.0).abs() < 1e-6);
    assert!((tank.rocket_damage - 90.0).abs() < 1e-6);
    assert!((tank.max_health - 140.0).abs() < 1e-6);
    assert!(
        (tank.health - 140.0).abs() < 1e-6,
        "Heal of +50 caps at the new max health"
    );
    assert_eq!(tank.shot_cooldown, ticks_from_ms(110));
    assert_eq!(tank.rocket_cooldown, ticks_from_ms(3800));
    assert_eq!(engine.players[0].upgrade_animation, UPGRADE_ANIMATION_TICKS);
}

#[test]
fn test_experience_overflow_carries_forward() {
    let mut engine = GameEngine::new(quiet_config());
    let engine = &mut engine;
    // 100 + 150 = 250 crosses two thresholds in one grant.
    progression::grant_experience(
        &mut engine.players[0],
        250,
        &mut engine.pools.texts,
        &mut engine.pools.sparks,
        &mut engine.rng,
        &mut engine.events,
    );
    assert_eq!(engine.players[0].tank.level, 3);
    assert_eq!(engine.players[0].tank.experience, 0);

    progression::grant_experience(
        &mut engine.players[0],
        250,
        &mut engine.pools.texts,
        &mut engine.pools.sparks,
        &mut engine.rng,
        &mut engine.events,
    );
    // Threshold at level 3 is 225; 25 carries into level 4.
    assert_eq!(engine.players[0].tank.level, 4);
    assert_eq!(engine.players[0].tank.experience, 25);
}

#[test]
fn test_upgrade_animation_counts_down() {
    let mut engine = GameEngine::new(quiet_config());
    {
        let engine = &mut engine;
        progression::grant_experience(
            &mut engine.players[0],
            100,
            &mut engine.pools.texts,
            &mut engine.pools.sparks,
            &mut engine.rng,
            &mut engine.events,
        );
    }
    let snapshot = engine.tick();
    assert!(snapshot.players[0].upgrading);
    assert_eq!(
        snapshot.players[0].upgrade_animation,
        UPGRADE_ANIMATION_TICKS - 1
    );
}

// ---- Power-ups ----

#[test]
fn test_power_up_refreshes_instead_of_stacking() {
    let mut engine = GameEngine::new(quiet_config());
    let engine = &mut engine;
    let position = engine.players[0].tank.position;

    for _ in 0..2 {
        powerup::collect_item(
            &mut engine.players[0],
            ItemKind::Shield,
            position,
            &mut engine.pools,
            &mut engine.score,
            &mut engine.rng,
            &mut engine.events,
        );
    }

    assert_eq!(
        engine.players[0].power_ups.shield, SHIELD_DURATION,
        "Second pickup refreshes to the fixed duration, not double"
    );
    assert_eq!(engine.score.items_collected, 2);
}

#[test]
fn test_power_up_timers_count_down_to_zero() {
    let mut engine = GameEngine::new(quiet_config());
    engine.players[0].power_ups.multishot = 3;
    engine.tick();
    assert_eq!(engine.players()[0].power_ups.multishot, 2);
    engine.tick();
    engine.tick();
    assert_eq!(engine.players()[0].power_ups.multishot, 0);
    engine.tick();
    assert_eq!(
        engine.players()[0].power_ups.multishot, 0,
        "Expired timers stay at zero"
    );
}

#[test]
fn test_multishot_fires_three_bullet_fan() {
    let mut engine = GameEngine::new(quiet_config());
    engine.players[0].power_ups.multishot = MULTISHOT_DURATION;
    engine.set_input(
        0,
        InputSnapshot {
            fire: true,
            ..InputSnapshot::default()
        },
    );
    engine.tick();

    let projectiles: Vec<_> = engine.pools().projectiles.iter().collect();
    assert_eq!(projectiles.len(), 3, "Multishot fires a three-bullet fan");

    let turret = engine.players()[0].tank.turret_angle;
    let mut angles: Vec<f32> = projectiles
        .iter()
        .map(|p| p.velocity.y.atan2(p.velocity.x))
        .collect();
    angles.sort_by(f32::total_cmp);
    for (angle, expected) in angles.iter().zip([
        turret - MULTISHOT_SPREAD,
        turret,
        turret + MULTISHOT_SPREAD,
    ]) {
        assert!((angle - expected).abs() < 1e-4, "{angle} vs {expected}");
    }
    for projectile in &projectiles {
        assert!((projectile.velocity.length() - BULLET_SPEED).abs() < 1e-3);
    }
}

#[test]
fn test_damage_boost_multiplies_shot_damage() {
    let mut engine = GameEngine::new(quiet_config());
    engine.players[0].power_ups.damage_boost = DAMAGE_BOOST_DURATION;
    engine.set_input(
        0,
        InputSnapshot {
            fire: true,
            ..InputSnapshot::default()
        },
    );
    engine.tick();

    let projectile = engine.pools().projectiles.iter().next().unwrap();
    assert_eq!(
        projectile.damage,
        (PLAYER_BASE_DAMAGE * DAMAGE_BOOST_FACTOR).floor()
    );
}

#[test]
fn test_rocket_fire_and_ammo_pickup() {
    let mut engine = GameEngine::new(quiet_config());
    engine.set_input(
        0,
        InputSnapshot {
            fire_rocket: true,
            ..InputSnapshot::default()
        },
    );
    let snapshot = engine.tick();

    let rocket = engine.pools().projectiles.iter().next().unwrap();
    assert_eq!(rocket.kind, ProjectileKind::Rocket);
    assert_eq!(rocket.damage, PLAYER_BASE_ROCKET_DAMAGE);
    assert!((rocket.velocity.length() - ROCKET_SPEED).abs() < 1e-3);
    assert!(snapshot
        .events
        .iter()
        .any(|event| matches!(event, GameEvent::RocketFired { player: 0 })));

    let tick = engine.time().tick;
    assert!(
        !engine.players()[0].tank.can_fire_rocket(tick),
        "Rocket cooldown engaged"
    );

    // Rocket ammo pickup clears the cooldown stamp.
    let engine = &mut engine;
    let position = engine.players[0].tank.position;
    powerup::collect_item(
        &mut engine.players[0],
        ItemKind::Rocket,
        position,
        &mut engine.pools,
        &mut engine.score,
        &mut engine.rng,
        &mut engine.events,
    );
    assert!(engine.players[0].tank.can_fire_rocket(tick));
}

#[test]
fn test_health_pack_caps_at_max() {
    let mut engine = GameEngine::new(quiet_config());
    engine.players[0].tank.health = 100.0;
    let engine = &mut engine;
    let position = engine.players[0].tank.position;
    powerup::collect_item(
        &mut engine.players[0],
        ItemKind::Health,
        position,
        &mut engine.pools,
        &mut engine.score,
        &mut engine.rng,
        &mut engine.events,
    );
    assert_eq!(engine.players[0].tank.health, PLAYER_MAX_HEALTH);
}

// ---- End-to-end scenarios ----

#[test]
fn test_scenario_idle_game_stays_empty() {
    let mut engine = GameEngine::new(quiet_config());
    for _ in 0..300 {
        engine.tick();
    }
    let snapshot = engine.tick();
    assert_eq!(snapshot.score.score, 0);
    assert_eq!(snapshot.score.wave, 1);
    assert_eq!(snapshot.players[0].tank.health, PLAYER_MAX_HEALTH);
    assert!(snapshot.enemies.is_empty());
    assert!(snapshot.items.is_empty());
    assert!(snapshot.projectiles.is_empty());
    assert!(!snapshot.game_over);
}

#[test]
fn test_scenario_contact_damage_per_tick() {
    let mut engine = GameEngine::new(quiet_config());
    // An enemy exactly on the player's position cannot resolve a
    // direction (degenerate geometry) so it neither moves nor fires;
    // only hull contact applies.
    engine.spawn_test_enemy(player_position(&engine));

    let ticks = 50;
    let mut previous = PLAYER_MAX_HEALTH;
    for _ in 0..ticks {
        engine.tick();
        let health = engine.players()[0].tank.health;
        assert!(health < previous, "Health must decrease every contact tick");
        previous = health;
    }
    let expected = PLAYER_MAX_HEALTH - ticks as f32 * CONTACT_DAMAGE;
    assert!(
        (engine.players()[0].tank.health - expected).abs() < 1e-2,
        "Contact damage is the fixed constant per tick"
    );
}

#[test]
fn test_scenario_contact_damage_shielded() {
    let mut engine = GameEngine::new(quiet_config());
    engine.spawn_test_enemy(player_position(&engine));
    engine.players[0].power_ups.shield = 10_000;

    for _ in 0..50 {
        engine.tick();
    }
    let expected = PLAYER_MAX_HEALTH - 50.0 * CONTACT_DAMAGE_SHIELDED;
    assert!((engine.players()[0].tank.health - expected).abs() < 1e-2);
}

#[test]
fn test_scenario_exact_damage_kill_scores() {
    let mut engine = GameEngine::new(quiet_config());
    let target = Vec2::new(800.0, 500.0);
    engine.spawn_test_enemy(target);
    // Health exactly equal to one shot; hold the enemy's fire so the
    // only projectile in play is ours.
    engine.enemies[0].health = PLAYER_BASE_DAMAGE;
    engine.enemies[0].last_shot = Some(0);
    engine.enemies[0].shot_cooldown = u64::MAX;
    let enemy_level = engine.enemies[0].level;

    engine.set_input(
        0,
        InputSnapshot {
            aim: target,
            fire: true,
            ..InputSnapshot::default()
        },
    );

    let mut killed_at = None;
    for _ in 0..40 {
        let snapshot = engine.tick();
        if snapshot.score.total_kills == 1 {
            killed_at = Some(snapshot);
            break;
        }
    }
    let snapshot = killed_at.expect("Bullet should kill the enemy within 40 ticks");

    assert!(engine.enemies().is_empty(), "Enemy removed on the kill tick");
    let expected_score = KILL_SCORE_BASE + KILL_SCORE_PER_WAVE + KILL_SCORE_PER_LEVEL * enemy_level as u64;
    assert_eq!(snapshot.score.score, expected_score);
    assert_eq!(snapshot.score.kills_this_wave, 1);
    assert_eq!(
        engine.players()[0].tank.experience,
        KILL_XP_BASE + KILL_XP_PER_LEVEL * enemy_level
    );
}

#[test]
fn test_wave_advances_after_enough_kills() {
    let mut engine = GameEngine::new(quiet_config());
    engine.score.kills_this_wave = KILLS_PER_WAVE_FACTOR - 1;

    let spot = Vec2::new(200.0, 200.0);
    engine.spawn_test_enemy(spot);
    engine.enemies[0].health = 1.0;
    engine.spawn_test_projectile(spot, Vec2::ZERO, Owner::Player(0), 40.0, ProjectileKind::Bullet);
    let snapshot = engine.tick();

    assert_eq!(snapshot.score.wave, 2, "Eighth kill of wave 1 advances");
    assert_eq!(snapshot.score.kills_this_wave, 0);
    assert!(snapshot
        .events
        .iter()
        .any(|event| matches!(event, GameEvent::WaveStarted { wave: 2 })));
}

// ---- Pause and game over ----

#[test]
fn test_pause_freezes_snapshots() {
    let mut engine = GameEngine::new(SimConfig::default());
    for _ in 0..10 {
        engine.tick();
    }
    let running_tick = engine.time().tick;

    engine.toggle_pause();
    let frozen_a = serde_json::to_string(&engine.tick()).unwrap();
    let frozen_b = serde_json::to_string(&engine.tick()).unwrap();
    assert_eq!(frozen_a, frozen_b, "Paused ticks are identical");
    assert_eq!(engine.time().tick, running_tick, "Time does not advance");

    engine.toggle_pause();
    engine.tick();
    assert_eq!(engine.time().tick, running_tick + 1);
}

#[test]
fn test_game_over_freezes_and_ignores_input() {
    let mut engine = GameEngine::new(quiet_config());
    engine.players[0].tank.health = 0.5;
    engine.spawn_test_enemy(player_position(&engine));

    let mut defeat_snapshot = None;
    for _ in 0..10 {
        let snapshot = engine.tick();
        if snapshot.game_over {
            defeat_snapshot = Some(snapshot);
            break;
        }
    }
    let snapshot = defeat_snapshot.expect("Contact damage should end the session");
    assert!(snapshot.players[0].defeated);
    assert_eq!(snapshot.players[0].tank.health, 0.0, "Display health clamps");
    assert!(snapshot
        .events
        .iter()
        .any(|event| matches!(event, GameEvent::PlayerDefeated { player: 0 })));
    assert!(snapshot
        .events
        .iter()
        .any(|event| matches!(event, GameEvent::GameOver)));

    // Frozen: time stops and input-driven mutation is disabled.
    let frozen_tick = engine.time().tick;
    engine.set_input(
        0,
        InputSnapshot {
            forward: true,
            ..InputSnapshot::default()
        },
    );
    let position_before = player_position(&engine);
    engine.tick();
    assert_eq!(engine.time().tick, frozen_tick);
    assert_eq!(player_position(&engine), position_before);
}

#[test]
fn test_reset_restores_starting_state() {
    let mut engine = GameEngine::new(SimConfig::default());
    engine.add_player(PlayerIdentity::Remote);
    for _ in 0..500 {
        engine.tick();
    }
    engine.reset();

    assert_eq!(engine.time().tick, 0);
    assert_eq!(engine.score().score, 0);
    assert_eq!(engine.score().wave, 1);
    assert!(engine.enemies().is_empty());
    assert!(!engine.game_over());
    assert!(!engine.paused());
    assert_eq!(engine.players().len(), 2, "Slots survive reset");
    assert_eq!(engine.players()[1].identity, PlayerIdentity::Remote);
    for slot in engine.players() {
        assert_eq!(slot.tank.level, 1);
        assert_eq!(slot.tank.health, PLAYER_MAX_HEALTH);
        assert!(!slot.defeated);
    }
    let pools = engine.pools();
    assert_eq!(pools.projectiles.live_count(), 0);
    assert_eq!(pools.explosions.live_count(), 0);
    assert_eq!(pools.items.live_count(), 0);
}

// ---- Enemy behavior ----

#[test]
fn test_enemy_steers_toward_player() {
    let mut engine = GameEngine::new(quiet_config());
    // Due west of the player, outside fire range, hull facing south.
    engine.spawn_test_enemy(Vec2::new(120.0, BOARD_HEIGHT - PLAYER_START_OFFSET_Y));
    engine.enemies[0].body_angle = std::f32::consts::FRAC_PI_2;

    engine.tick();
    let enemy = &engine.enemies()[0];
    let expected_body =
        std::f32::consts::FRAC_PI_2 + (0.0 - std::f32::consts::FRAC_PI_2) * ENEMY_TURN_RATE;
    assert!(
        (enemy.body_angle - expected_body).abs() < 1e-5,
        "Hull turns by the proportional correction, not a snap"
    );
    assert!(
        enemy.turret_angle.abs() < 0.05,
        "Turret snaps straight at the player"
    );
}

#[test]
fn test_enemy_fires_inside_range() {
    let mut engine = GameEngine::new(quiet_config());
    let player = player_position(&engine);
    engine.spawn_test_enemy(player - Vec2::new(0.0, 350.0));
    engine.tick();

    let enemy_shot = engine
        .pools()
        .projectiles
        .iter()
        .find(|p| p.owner == Owner::Enemy)
        .expect("Enemy inside 500px should fire immediately");
    assert_eq!(enemy_shot.damage, ENEMY_BASE_DAMAGE + ENEMY_DAMAGE_PER_LEVEL);
    assert_eq!(engine.enemies()[0].last_shot, Some(0));
}

#[test]
fn test_enemy_holds_fire_outside_range() {
    let mut engine = GameEngine::new(quiet_config());
    let player = player_position(&engine);
    engine.spawn_test_enemy(player - Vec2::new(0.0, 700.0));
    engine.tick();
    assert_eq!(engine.pools().projectiles.live_count(), 0);
}

// ---- Spawning ----

#[test]
fn test_enemy_spawns_off_board_edges() {
    use rand::SeedableRng;
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
    let config = SimConfig::default();

    for id in 0..50 {
        let enemy = world_setup::enemy_tank(id, 1, &mut rng, &config);
        let p = enemy.position;
        let off_edge = p.x == -TANK_SIZE
            || p.x == config.board_width + TANK_SIZE
            || p.y == -TANK_SIZE
            || p.y == config.board_height + TANK_SIZE;
        assert!(off_edge, "Spawn must sit one tank-size off an edge: {p:?}");

        // The jittered axis stays clear of the corners.
        if p.y == -TANK_SIZE || p.y == config.board_height + TANK_SIZE {
            assert!(p.x >= SPAWN_EDGE_INSET && p.x <= config.board_width - SPAWN_EDGE_INSET);
        } else {
            assert!(p.y >= SPAWN_EDGE_INSET && p.y <= config.board_height - SPAWN_EDGE_INSET);
        }
    }
}

#[test]
fn test_enemy_stats_scale_with_wave() {
    use rand::SeedableRng;
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
    let config = SimConfig::default();

    let wave1 = world_setup::enemy_tank(0, 1, &mut rng, &config);
    assert_eq!(wave1.level, 1);
    assert_eq!(wave1.health, 100.0);
    assert!((wave1.speed - 2.4).abs() < 1e-6);
    assert_eq!(wave1.damage, 35.0);

    let wave9 = world_setup::enemy_tank(1, 9, &mut rng, &config);
    assert_eq!(wave9.level, 4);
    assert_eq!(wave9.health, 160.0);

    let wave40 = world_setup::enemy_tank(2, 40, &mut rng, &config);
    assert_eq!(wave40.level, MAX_ENEMY_LEVEL, "Enemy level caps");
    assert_eq!(wave40.health, 240.0);
}

#[test]
fn test_spawn_caps_hold() {
    use rand::SeedableRng;
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
    let config = SimConfig {
        enemy_spawn_chance: 1.0,
        item_spawn_chance: 1.0,
        ..SimConfig::default()
    };

    let mut enemies = Vec::new();
    let mut items = crate::pool::Pool::default();
    let mut next_id = 0;
    for _ in 0..100 {
        spawner::run(&mut enemies, &mut items, &mut rng, &config, 1, &mut next_id);
    }
    assert_eq!(enemies.len(), 3, "Wave 1 live-enemy cap is 3");
    assert_eq!(items.live_count(), MAX_UNCOLLECTED_ITEMS);

    // A higher wave raises the cap, up to the hard limit.
    for _ in 0..100 {
        spawner::run(&mut enemies, &mut items, &mut rng, &config, 9, &mut next_id);
    }
    assert_eq!(enemies.len(), 7);
    for _ in 0..200 {
        spawner::run(&mut enemies, &mut items, &mut rng, &config, 99, &mut next_id);
    }
    assert_eq!(enemies.len(), ENEMY_CAP_HARD as usize, "Hard cap");
}

#[test]
fn test_items_expire_uncollected() {
    let mut pools = crate::pool::Pools::default();
    let item = pools.items.acquire();
    item.position = Vec2::new(400.0, 400.0);
    item.life = 3;

    for _ in 0..2 {
        effects::run(&mut pools);
    }
    assert_eq!(pools.items.live_count(), 1);
    effects::run(&mut pools);
    assert_eq!(pools.items.live_count(), 0, "Expired item returns to pool");
}

// ---- Pooling ----

#[test]
fn test_projectile_pool_reuses_records() {
    let mut engine = GameEngine::new(quiet_config());
    // Fire left continuously; each bullet exits the board and frees
    // its record, so capacity tracks peak in-flight count.
    for _ in 0..1500 {
        engine.set_input(
            0,
            InputSnapshot {
                aim: Vec2::new(0.0, BOARD_HEIGHT - PLAYER_START_OFFSET_Y),
                fire: true,
                ..InputSnapshot::default()
            },
        );
        engine.tick();
    }

    let pool = &engine.pools().projectiles;
    assert!(pool.capacity() > 0);
    assert!(
        pool.capacity() <= 12,
        "Pool must reuse freed records, not grow per shot: {}",
        pool.capacity()
    );
}

#[test]
fn test_explosion_lifecycle_growth_and_release() {
    let mut pools = crate::pool::Pools::default();
    effects::spawn_explosion(
        &mut pools.explosions,
        Vec2::ZERO,
        steelstorm_core::enums::ExplosionKind::Rocket,
    );

    for _ in 0..EXPLOSION_LIFETIME - 1 {
        effects::run(&mut pools);
    }
    {
        let explosion = pools.explosions.iter().next().unwrap();
        assert_eq!(explosion.size, ROCKET_EXPLOSION_MAX_SIZE, "Growth caps");
    }
    effects::run(&mut pools);
    assert_eq!(pools.explosions.live_count(), 0);
    assert_eq!(pools.explosions.capacity(), 1, "Record retained for reuse");
}

// ---- Multiplayer slots ----

#[test]
fn test_two_slots_drive_independent_tanks() {
    let mut engine = GameEngine::new(quiet_config());
    let remote = engine.add_player(PlayerIdentity::Remote);

    engine.set_input(
        remote,
        InputSnapshot {
            forward: true,
            ..InputSnapshot::default()
        },
    );
    let local_before = player_position(&engine);
    let remote_before = engine.players()[remote as usize].tank.position;
    engine.tick();

    assert_eq!(
        player_position(&engine),
        local_before,
        "Idle local slot does not move"
    );
    assert_ne!(
        engine.players()[remote as usize].tank.position,
        remote_before,
        "Driven remote slot moves"
    );
}

#[test]
fn test_session_survives_one_defeated_slot() {
    let mut engine = GameEngine::new(quiet_config());
    engine.add_player(PlayerIdentity::Remote);
    engine.players[0].tank.health = 0.1;
    engine.spawn_test_enemy(player_position(&engine));

    for _ in 0..5 {
        engine.tick();
    }
    assert!(engine.players()[0].defeated);
    assert!(
        !engine.game_over(),
        "Session continues while another slot lives"
    );
}
