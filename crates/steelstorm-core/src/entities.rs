//! Entity value structs.
//!
//! Plain data with no game logic — systems in the sim crate mutate
//! these. Pool-managed entities carry their own liveness flag.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// A combat unit, player- or enemy-controlled.
///
/// `body_angle` is the hull's movement facing; `turret_angle` is the
/// independent aim direction. Health may go negative internally between
/// the damage scan and the death check; views clamp it for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    pub id: u32,
    pub position: Vec2,
    pub body_angle: f32,
    pub turret_angle: f32,
    pub health: f32,
    pub max_health: f32,
    /// Tick of the last primary shot. `None` = never fired.
    pub last_shot: Option<u64>,
    /// Tick of the last rocket. `None` = never fired (or reset by pickup).
    pub last_rocket: Option<u64>,
    pub speed: f32,
    pub moving: bool,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next: u32,
    pub class: TankClass,
    pub damage: f32,
    pub rocket_damage: f32,
    /// Primary weapon cooldown in ticks.
    pub shot_cooldown: u64,
    /// Rocket cooldown in ticks.
    pub rocket_cooldown: u64,
}

impl Tank {
    /// Whether the primary weapon is off cooldown at `tick`.
    pub fn can_shoot(&self, tick: u64) -> bool {
        match self.last_shot {
            None => true,
            Some(last) => tick.saturating_sub(last) >= self.shot_cooldown,
        }
    }

    /// Whether the rocket launcher is off cooldown at `tick`.
    pub fn can_fire_rocket(&self, tick: u64) -> bool {
        match self.last_rocket {
            None => true,
            Some(last) => tick.saturating_sub(last) >= self.rocket_cooldown,
        }
    }

    /// Barrel tip position along the current turret direction.
    pub fn barrel_tip(&self) -> Vec2 {
        self.position
            + Vec2::from_angle(self.turret_angle)
                * (crate::constants::TANK_SIZE * crate::constants::BARREL_LENGTH_FACTOR)
    }
}

/// A bullet or rocket in flight. Pool-managed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Vec2,
    pub velocity: Vec2,
    pub owner: Owner,
    pub damage: f32,
    /// Recent positions, oldest first, bounded by `TRAIL_LENGTH`.
    pub trail: Vec<Vec2>,
    pub kind: ProjectileKind,
    pub active: bool,
}

/// A growing explosion visual. Pool-managed, purely cosmetic — damage
/// was applied when it was created.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Explosion {
    pub position: Vec2,
    pub size: f32,
    pub life: u32,
    pub max_life: u32,
    pub kind: ExplosionKind,
    pub active: bool,
}

/// A rising damage/score/announcement text. Pool-managed, cosmetic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FloatingText {
    pub position: Vec2,
    pub text: String,
    pub color: String,
    pub font_size: f32,
    pub life: u32,
    pub max_life: u32,
    pub active: bool,
}

/// Exhaust smoke puff. Pool-managed, cosmetic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SmokeParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub life: u32,
    pub max_life: u32,
    pub size: f32,
    pub active: bool,
}

/// Celebration spark emitted on level-ups and pickups. Pool-managed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpgradeParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub life: u32,
    pub max_life: u32,
    pub size: f32,
    pub color: String,
    pub active: bool,
}

/// A collectible pickup. Pool-managed; `collected` doubles as the
/// pool-free flag, so a collected item is invisible to collision and
/// spawn caps until reused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub position: Vec2,
    pub kind: ItemKind,
    pub life: u32,
    pub max_life: u32,
    pub pulse_phase: f32,
    pub collected: bool,
}

impl Default for Item {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            kind: ItemKind::default(),
            life: 0,
            max_life: crate::constants::ITEM_LIFETIME,
            pulse_phase: 0.0,
            collected: false,
        }
    }
}

/// Remaining duration, in ticks, of each timed power-up category.
/// Zero means inactive. Pickups SET these; they never accumulate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUpTimers {
    pub shield: u32,
    pub multishot: u32,
    pub damage_boost: u32,
    pub speed_boost: u32,
}

impl PowerUpTimers {
    pub fn shield_active(&self) -> bool {
        self.shield > 0
    }

    pub fn multishot_active(&self) -> bool {
        self.multishot > 0
    }

    pub fn damage_boost_active(&self) -> bool {
        self.damage_boost > 0
    }

    pub fn speed_boost_active(&self) -> bool {
        self.speed_boost > 0
    }
}
