//! Events emitted by the simulation for the host's audio and UI layers.
//!
//! Drained into each snapshot; cosmetic floating texts stay in the
//! entity lists, these carry the semantic trigger.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{ItemKind, PlayerId, TankClass};

/// Discrete feedback events produced during one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// An enemy tank was destroyed.
    EnemyDestroyed {
        position: Vec2,
        enemy_level: u32,
        score_awarded: u64,
    },
    /// A new wave began (spawn difficulty increases).
    WaveStarted { wave: u32 },
    /// A player leveled up to a new class.
    LevelUp {
        player: PlayerId,
        level: u32,
        class: TankClass,
    },
    /// A player collected an item.
    ItemCollected { player: PlayerId, kind: ItemKind },
    /// A player took projectile damage (`blocked` = shield mitigated).
    PlayerHit {
        player: PlayerId,
        damage: f32,
        blocked: bool,
    },
    /// A player fired a rocket.
    RocketFired { player: PlayerId },
    /// A player's tank was destroyed.
    PlayerDefeated { player: PlayerId },
    /// Every player slot is defeated; the session is over.
    GameOver,
}
