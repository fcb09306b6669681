//! Game state snapshot — the complete visible state handed to the
//! renderer after each tick. Read-only from the renderer's perspective.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::entities::*;
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete simulation state produced by one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub players: Vec<PlayerView>,
    pub enemies: Vec<TankView>,
    pub projectiles: Vec<ProjectileView>,
    pub explosions: Vec<Explosion>,
    pub floating_texts: Vec<FloatingText>,
    pub smoke_particles: Vec<SmokeParticle>,
    pub upgrade_particles: Vec<UpgradeParticle>,
    pub items: Vec<Item>,
    pub score: ScoreView,
    pub paused: bool,
    pub game_over: bool,
    /// Feedback events produced this tick (empty on frozen ticks).
    pub events: Vec<GameEvent>,
}

/// One player slot as seen by the renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub identity: PlayerIdentity,
    pub tank: TankView,
    pub power_ups: PowerUpTimers,
    /// Level-up transition countdown; > 0 while the upgrade visual runs.
    pub upgrade_animation: u32,
    pub upgrading: bool,
    pub defeated: bool,
}

/// A tank as seen by the renderer. Health is clamped to >= 0 here;
/// the internal value may be negative between scan and death check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TankView {
    pub id: u32,
    pub position: Vec2,
    pub body_angle: f32,
    pub turret_angle: f32,
    pub health: f32,
    pub max_health: f32,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next: u32,
    pub class: TankClass,
    pub moving: bool,
}

impl TankView {
    /// Build a display view from an internal tank record.
    pub fn from_tank(tank: &Tank) -> Self {
        Self {
            id: tank.id,
            position: tank.position,
            body_angle: tank.body_angle,
            turret_angle: tank.turret_angle,
            health: tank.health.max(0.0),
            max_health: tank.max_health,
            level: tank.level,
            experience: tank.experience,
            experience_to_next: tank.experience_to_next,
            class: tank.class,
            moving: tank.moving,
        }
    }
}

/// A projectile in flight as seen by the renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec2,
    pub velocity: Vec2,
    pub owner: Owner,
    pub kind: ProjectileKind,
    pub trail: Vec<Vec2>,
}

/// Running score and wave progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u64,
    pub wave: u32,
    pub kills_this_wave: u32,
    pub total_kills: u32,
    pub items_collected: u32,
}
