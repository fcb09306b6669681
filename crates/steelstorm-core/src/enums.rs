//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Identifier for a player slot within the engine.
pub type PlayerId = u32;

/// Who fired a projectile. Friendly fire is excluded by tag: a
/// projectile only collides with tanks of the opposing owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "side", content = "player")]
pub enum Owner {
    Player(PlayerId),
    #[default]
    Enemy,
}

/// Projectile class — drives size, speed, and explosion visuals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    #[default]
    Bullet,
    Rocket,
}

impl ProjectileKind {
    /// Collision diameter for this projectile class.
    pub fn size(&self) -> f32 {
        match self {
            ProjectileKind::Bullet => crate::constants::BULLET_SIZE,
            ProjectileKind::Rocket => crate::constants::ROCKET_SIZE,
        }
    }
}

/// Explosion visual class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionKind {
    #[default]
    Normal,
    Rocket,
    Upgrade,
}

/// Pickup item categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    #[default]
    Health,
    Damage,
    Speed,
    Experience,
    Rocket,
    Shield,
    Multishot,
}

impl ItemKind {
    /// Every spawnable item kind, in catalog order.
    pub const ALL: [ItemKind; 7] = [
        ItemKind::Health,
        ItemKind::Damage,
        ItemKind::Speed,
        ItemKind::Experience,
        ItemKind::Rocket,
        ItemKind::Shield,
        ItemKind::Multishot,
    ];

    /// Glow color used for pickup spark particles.
    pub fn glow_color(&self) -> &'static str {
        match self {
            ItemKind::Health => "#4ade80",
            ItemKind::Damage => "#f87171",
            ItemKind::Speed => "#60a5fa",
            ItemKind::Experience => "#c084fc",
            ItemKind::Rocket => "#fb923c",
            ItemKind::Shield => "#22d3ee",
            ItemKind::Multishot => "#facc15",
        }
    }
}

/// Cosmetic tank class, one per player level. Replaces a string-keyed
/// style table so unknown classes cannot exist at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TankClass {
    #[default]
    Cyan,
    Desert,
    Frost,
    Jungle,
    Storm,
    Toxic,
    Inferno,
    Magma,
    Heavy,
    Cyber,
    Electric,
    Phantom,
    Cosmic,
    Plasma,
    Dragonsteel,
    Titan,
}

impl TankClass {
    /// Glow color used for level-up spark particles.
    pub fn glow_color(&self) -> &'static str {
        match self {
            TankClass::Cyan => "#22d3ee",
            TankClass::Desert => "#fb923c",
            TankClass::Frost => "#60a5fa",
            TankClass::Jungle => "#4ade80",
            TankClass::Storm => "#c084fc",
            TankClass::Toxic => "#a3e635",
            TankClass::Inferno => "#f87171",
            TankClass::Magma => "#f97316",
            TankClass::Heavy => "#6b7280",
            TankClass::Cyber => "#67e8f9",
            TankClass::Electric => "#fde047",
            TankClass::Phantom => "#d8b4fe",
            TankClass::Cosmic => "#818cf8",
            TankClass::Plasma => "#f9a8d4",
            TankClass::Dragonsteel => "#fca5a5",
            TankClass::Titan => "#facc15",
        }
    }
}

/// Where a player slot's inputs come from. A local slot is fed by the
/// host's input collector; a remote slot by the network relay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerIdentity {
    #[default]
    Local,
    Remote,
}
