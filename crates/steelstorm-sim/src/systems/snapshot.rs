//! Snapshot builder: reads the engine state and produces a complete
//! `GameSnapshot`. Never modifies anything.

use steelstorm_core::events::GameEvent;
use steelstorm_core::state::*;

use crate::engine::GameEngine;

/// Build a snapshot of the current state, attaching this tick's events.
pub fn build(engine: &GameEngine, events: Vec<GameEvent>) -> GameSnapshot {
    GameSnapshot {
        time: engine.time,
        players: engine
            .players
            .iter()
            .map(|slot| PlayerView {
                id: slot.id,
                identity: slot.identity,
                tank: TankView::from_tank(&slot.tank),
                power_ups: slot.power_ups,
                upgrade_animation: slot.upgrade_animation,
                upgrading: slot.upgrade_animation > 0,
                defeated: slot.defeated,
            })
            .collect(),
        enemies: engine.enemies.iter().map(TankView::from_tank).collect(),
        projectiles: engine
            .pools
            .projectiles
            .iter()
            .map(|projectile| ProjectileView {
                position: projectile.position,
                velocity: projectile.velocity,
                owner: projectile.owner,
                kind: projectile.kind,
                trail: projectile.trail.clone(),
            })
            .collect(),
        explosions: engine.pools.explosions.iter().cloned().collect(),
        floating_texts: engine.pools.texts.iter().cloned().collect(),
        smoke_particles: engine.pools.smoke.iter().cloned().collect(),
        upgrade_particles: engine.pools.sparks.iter().cloned().collect(),
        items: engine.pools.items.iter().cloned().collect(),
        score: ScoreView {
            score: engine.score.score,
            wave: engine.score.wave,
            kills_this_wave: engine.score.kills_this_wave,
            total_kills: engine.score.total_kills,
            items_collected: engine.score.items_collected,
        },
        paused: engine.paused,
        game_over: engine.game_over,
        events,
    }
}
