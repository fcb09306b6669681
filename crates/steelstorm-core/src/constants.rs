//! Simulation constants and tuning parameters.
//!
//! Distances are in playfield pixels, speeds in pixels per tick, and
//! durations in ticks unless a name says otherwise.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Minimum wall-clock interval between processed ticks (milliseconds).
/// Hosts driving the loop from a display callback gate on this.
pub const MIN_TICK_INTERVAL_MS: f64 = 16.0;

/// Convert a millisecond duration into whole ticks at [`TICK_RATE`].
pub const fn ticks_from_ms(ms: u64) -> u64 {
    ms * TICK_RATE as u64 / 1000
}

// --- Board ---

/// Default playfield width.
pub const BOARD_WIDTH: f32 = 1600.0;

/// Default playfield height.
pub const BOARD_HEIGHT: f32 = 900.0;

/// Distance below the board's bottom edge where the player starts.
pub const PLAYER_START_OFFSET_Y: f32 = 150.0;

// --- Entity sizes (collision diameters) ---

pub const TANK_SIZE: f32 = 70.0;
pub const BULLET_SIZE: f32 = 14.0;
pub const ROCKET_SIZE: f32 = 18.0;
pub const ITEM_SIZE: f32 = 40.0;

// --- Kinematics ---

/// Bullet speed (px/tick).
pub const BULLET_SPEED: f32 = 18.0;

/// Rocket speed (px/tick).
pub const ROCKET_SPEED: f32 = 12.0;

/// Player base movement speed before class bonuses (px/tick).
pub const BASE_PLAYER_SPEED: f32 = 4.0;

/// Enemy base movement speed before level scaling (px/tick).
pub const BASE_ENEMY_SPEED: f32 = 2.2;

/// Body rotation per tick while a rotate key is held (radians).
pub const ROTATION_STEP: f32 = 0.05;

/// Proportional steering gain for enemy hull rotation.
pub const ENEMY_TURN_RATE: f32 = 0.02;

/// Barrel tip offset along the turret, as a fraction of [`TANK_SIZE`].
pub const BARREL_LENGTH_FACTOR: f32 = 0.7;

/// Minimum aim distance below which angle updates are skipped.
/// Guards direction normalization against a zero-length vector.
pub const AIM_EPSILON: f32 = 1e-3;

/// Projectiles despawn this far beyond the board rectangle.
pub const OFF_BOARD_MARGIN: f32 = 100.0;

/// Number of historical positions kept in a projectile trail.
pub const TRAIL_LENGTH: usize = 4;

// --- Weapons ---

/// Player primary cooldown at level 1 (milliseconds).
pub const BASE_SHOT_COOLDOWN_MS: u64 = 120;

/// Player rocket cooldown at level 1 (milliseconds).
pub const BASE_ROCKET_COOLDOWN_MS: u64 = 4000;

/// Primary cooldown floor (milliseconds).
pub const MIN_SHOT_COOLDOWN_MS: u64 = 60;

/// Rocket cooldown floor (milliseconds).
pub const MIN_ROCKET_COOLDOWN_MS: u64 = 2000;

/// Primary cooldown reduction per player level (milliseconds).
pub const SHOT_COOLDOWN_STEP_MS: u64 = 5;

/// Rocket cooldown reduction per player level (milliseconds).
pub const ROCKET_COOLDOWN_STEP_MS: u64 = 100;

/// Enemy primary cooldown (milliseconds).
pub const ENEMY_SHOT_COOLDOWN_MS: u64 = 1500;

/// Range within which an enemy opens fire on a player.
pub const ENEMY_FIRE_RANGE: f32 = 500.0;

/// Player base stats at level 1.
pub const PLAYER_MAX_HEALTH: f32 = 120.0;
pub const PLAYER_BASE_DAMAGE: f32 = 40.0;
pub const PLAYER_BASE_ROCKET_DAMAGE: f32 = 80.0;

// --- Enemy scaling (per enemy level) ---

pub const ENEMY_BASE_HEALTH: f32 = 80.0;
pub const ENEMY_HEALTH_PER_LEVEL: f32 = 20.0;
pub const ENEMY_SPEED_PER_LEVEL: f32 = 0.2;
pub const ENEMY_BASE_DAMAGE: f32 = 30.0;
pub const ENEMY_DAMAGE_PER_LEVEL: f32 = 5.0;
pub const ENEMY_BASE_ROCKET_DAMAGE: f32 = 60.0;
pub const ENEMY_ROCKET_DAMAGE_PER_LEVEL: f32 = 10.0;

/// Enemy level derived from the wave: `min(wave / divisor + 1, max)`.
pub const ENEMY_LEVEL_WAVE_DIVISOR: u32 = 3;
pub const MAX_ENEMY_LEVEL: u32 = 8;

// --- Spawning ---

/// Per-tick probability of admitting a new enemy (cap permitting).
pub const ENEMY_SPAWN_CHANCE: f64 = 0.006;

/// Live-enemy cap: `min(base + wave / divisor, hard)`.
pub const ENEMY_CAP_BASE: u32 = 3;
pub const ENEMY_CAP_WAVE_DIVISOR: u32 = 2;
pub const ENEMY_CAP_HARD: u32 = 12;

/// Edge spawn positions are jittered this far inside the board corners.
pub const SPAWN_EDGE_INSET: f32 = 100.0;

/// Per-tick probability of admitting a new item (cap permitting).
pub const ITEM_SPAWN_CHANCE: f64 = 0.002;

/// Maximum concurrent uncollected items.
pub const MAX_UNCOLLECTED_ITEMS: usize = 3;

/// Items are placed at least this far from every board edge.
pub const ITEM_EDGE_INSET: f32 = 100.0;

/// Uncollected item lifetime (30 seconds).
pub const ITEM_LIFETIME: u32 = 1800;

/// Item pulse-phase advance per tick (cosmetic animation driver).
pub const ITEM_PULSE_STEP: f32 = 0.1;

// --- Damage resolution ---

/// Incoming damage multiplier while the shield power-up is active.
pub const SHIELD_DAMAGE_FACTOR: f32 = 0.3;

/// Hull contact damage per tick of overlap.
pub const CONTACT_DAMAGE: f32 = 0.2;

/// Contact damage per tick while shielded.
pub const CONTACT_DAMAGE_SHIELDED: f32 = 0.06;

/// Chance per overlapping tick of a cosmetic contact explosion.
pub const CONTACT_EXPLOSION_CHANCE: f64 = 0.03;

// --- Score & waves ---

pub const KILL_SCORE_BASE: u64 = 300;
pub const KILL_SCORE_PER_WAVE: u64 = 100;
pub const KILL_SCORE_PER_LEVEL: u64 = 50;

/// Kills required to finish wave `w` is `w * KILLS_PER_WAVE_FACTOR`.
pub const KILLS_PER_WAVE_FACTOR: u32 = 8;

// --- Progression ---

/// Experience threshold for level `n` is `base * growth^(n-1)`, floored.
pub const XP_BASE_THRESHOLD: u32 = 100;
pub const XP_GROWTH_RATE: f64 = 1.5;

/// Experience for killing an enemy: `base + per_level * enemy_level`.
pub const KILL_XP_BASE: u32 = 20;
pub const KILL_XP_PER_LEVEL: u32 = 10;

/// Experience item grant: `base + per_wave * wave`.
pub const ITEM_XP_BASE: u32 = 50;
pub const ITEM_XP_PER_WAVE: u32 = 10;

/// Health restored on level-up, capped at the new maximum.
pub const LEVEL_UP_HEAL: f32 = 50.0;

/// Duration of the level-up transition animation.
pub const UPGRADE_ANIMATION_TICKS: u32 = 120;

// --- Power-ups ---

/// Shield duration (15 seconds).
pub const SHIELD_DURATION: u32 = 900;

/// Multishot duration (8 seconds).
pub const MULTISHOT_DURATION: u32 = 480;

/// Damage boost duration (10 seconds).
pub const DAMAGE_BOOST_DURATION: u32 = 600;

/// Speed boost duration (10 seconds).
pub const SPEED_BOOST_DURATION: u32 = 600;

pub const DAMAGE_BOOST_FACTOR: f32 = 1.5;
pub const SPEED_BOOST_FACTOR: f32 = 1.5;

/// Angular offset between bullets in the multishot fan (radians).
pub const MULTISHOT_SPREAD: f32 = 0.3;

/// Health restored by a health pack, capped at max health.
pub const HEALTH_PACK_AMOUNT: f32 = 50.0;

// --- Cosmetic effects ---

pub const EXPLOSION_LIFETIME: u32 = 60;
pub const EXPLOSION_GROWTH: f32 = 5.0;
pub const EXPLOSION_MAX_SIZE: f32 = 120.0;
pub const ROCKET_EXPLOSION_GROWTH: f32 = 8.0;
pub const ROCKET_EXPLOSION_MAX_SIZE: f32 = 200.0;

pub const TEXT_LIFETIME: u32 = 60;
pub const TEXT_RISE: f32 = 2.0;

pub const SMOKE_LIFETIME: u32 = 40;
pub const SMOKE_GROWTH: f32 = 0.4;
pub const SMOKE_CHANCE_PLAYER: f64 = 0.3;
pub const SMOKE_CHANCE_ENEMY: f64 = 0.2;

pub const SPARK_LIFETIME: u32 = 120;
pub const SPARK_GROWTH: f32 = 0.1;
pub const SPARK_DRAG: f32 = 0.98;

/// Celebration sparks emitted on level-up / item pickup.
pub const LEVEL_UP_SPARKS: usize = 30;
pub const ITEM_PICKUP_SPARKS: usize = 15;
