//! Per-level tank class profiles.
//!
//! Consolidates the stat bonuses and cosmetic class unlocked at each
//! player level. Levels above the table cap stay on the final class.

use crate::enums::TankClass;

/// Highest player level (one class per level).
pub const MAX_LEVEL: u32 = 16;

/// Stat block associated with a player level.
pub struct ClassProfile {
    pub class: TankClass,
    /// Added to the base movement speed (px/tick).
    pub speed_bonus: f32,
    /// Added to base bullet damage; rockets gain double.
    pub damage_bonus: f32,
    /// Added to base maximum health.
    pub health_bonus: f32,
}

/// Get the class profile for a player level (1-based).
pub fn profile_for_level(level: u32) -> ClassProfile {
    let (class, speed_bonus, damage_bonus, health_bonus) = match level {
        0 | 1 => (TankClass::Cyan, 0.0, 0.0, 0.0),
        2 => (TankClass::Desert, 0.2, 5.0, 20.0),
        3 => (TankClass::Frost, 0.4, 10.0, 40.0),
        4 => (TankClass::Jungle, 0.6, 15.0, 60.0),
        5 => (TankClass::Storm, 0.8, 20.0, 80.0),
        6 => (TankClass::Toxic, 1.0, 25.0, 100.0),
        7 => (TankClass::Inferno, 1.2, 30.0, 120.0),
        8 => (TankClass::Magma, 1.4, 35.0, 140.0),
        9 => (TankClass::Heavy, 1.0, 50.0, 200.0),
        10 => (TankClass::Cyber, 2.0, 45.0, 160.0),
        11 => (TankClass::Electric, 2.2, 50.0, 180.0),
        12 => (TankClass::Phantom, 2.5, 55.0, 200.0),
        13 => (TankClass::Cosmic, 2.8, 60.0, 220.0),
        14 => (TankClass::Plasma, 3.0, 65.0, 240.0),
        15 => (TankClass::Dragonsteel, 3.2, 70.0, 260.0),
        _ => (TankClass::Titan, 3.5, 80.0, 300.0),
    };
    ClassProfile {
        class,
        speed_bonus,
        damage_bonus,
        health_bonus,
    }
}

/// Experience required to advance from `level` to the next.
pub fn experience_threshold(level: u32) -> u32 {
    let threshold = crate::constants::XP_BASE_THRESHOLD as f64
        * crate::constants::XP_GROWTH_RATE.powi(level.saturating_sub(1) as i32);
    threshold.floor() as u32
}
