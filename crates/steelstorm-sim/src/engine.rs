//! Simulation engine — the core of the game.
//!
//! `GameEngine` owns every piece of mutable state (player slots, the
//! enemy list, object pools, score, RNG), applies input snapshots, runs
//! all systems once per tick, and produces `GameSnapshot`s. Completely
//! headless, enabling deterministic testing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use steelstorm_core::constants::{BOARD_HEIGHT, BOARD_WIDTH, ENEMY_SPAWN_CHANCE, ITEM_SPAWN_CHANCE};
use steelstorm_core::entities::{PowerUpTimers, Tank};
use steelstorm_core::enums::{PlayerId, PlayerIdentity};
use steelstorm_core::events::GameEvent;
use steelstorm_core::input::InputSnapshot;
use steelstorm_core::state::GameSnapshot;
use steelstorm_core::types::SimTime;

use crate::pool::Pools;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same run.
    pub seed: u64,
    /// Playfield width in pixels.
    pub board_width: f32,
    /// Playfield height in pixels.
    pub board_height: f32,
    /// Per-tick enemy spawn admission probability.
    pub enemy_spawn_chance: f64,
    /// Per-tick item spawn admission probability.
    pub item_spawn_chance: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            enemy_spawn_chance: ENEMY_SPAWN_CHANCE,
            item_spawn_chance: ITEM_SPAWN_CHANCE,
        }
    }
}

/// One player-controlled tank and everything scoped to it. The single
/// local slot is the solo game; the multiplayer variant runs N slots,
/// each fed by its own input source.
#[derive(Debug, Clone)]
pub struct PlayerSlot {
    pub id: PlayerId,
    pub identity: PlayerIdentity,
    pub tank: Tank,
    pub input: InputSnapshot,
    pub power_ups: PowerUpTimers,
    /// Level-up transition countdown (cosmetic).
    pub upgrade_animation: u32,
    pub defeated: bool,
}

/// Running score and wave progress.
#[derive(Debug, Clone, Copy)]
pub struct ScoreState {
    pub score: u64,
    pub wave: u32,
    pub kills_this_wave: u32,
    pub total_kills: u32,
    pub items_collected: u32,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self {
            score: 0,
            wave: 1,
            kills_this_wave: 0,
            total_kills: 0,
            items_collected: 0,
        }
    }
}

/// The simulation engine. Owns all sim state.
pub struct GameEngine {
    pub(crate) config: SimConfig,
    pub(crate) time: SimTime,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) players: Vec<PlayerSlot>,
    pub(crate) enemies: Vec<Tank>,
    pub(crate) pools: Pools,
    pub(crate) score: ScoreState,
    pub(crate) paused: bool,
    pub(crate) game_over: bool,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) next_enemy_id: u32,
}

impl GameEngine {
    /// Create a new engine with a single local player slot.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            time: SimTime::default(),
            players: Vec::new(),
            enemies: Vec::new(),
            pools: Pools::default(),
            score: ScoreState::default(),
            paused: false,
            game_over: false,
            events: Vec::new(),
            next_enemy_id: 0,
            config,
        };
        engine.add_player(PlayerIdentity::Local);
        engine
    }

    /// Add a player slot (multiplayer). Returns its id.
    pub fn add_player(&mut self, identity: PlayerIdentity) -> PlayerId {
        let id = self.players.len() as PlayerId;
        self.players.push(PlayerSlot {
            id,
            identity,
            tank: world_setup::player_tank(id, &self.config),
            input: InputSnapshot::default(),
            power_ups: PowerUpTimers::default(),
            upgrade_animation: 0,
            defeated: false,
        });
        id
    }

    /// Replace a slot's input snapshot. Ignored for unknown ids and
    /// while the session is over (input-driven mutation is disabled).
    pub fn set_input(&mut self, player: PlayerId, input: InputSnapshot) {
        if self.game_over {
            return;
        }
        if let Some(slot) = self.players.get_mut(player as usize) {
            slot.input = input;
        }
    }

    /// Flip the paused flag.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Reinitialize to the starting state: fresh tanks in the same
    /// slots, empty board, every pool record released, held input
    /// cleared, RNG reseeded.
    pub fn reset(&mut self) {
        log::info!("simulation reset");
        let identities: Vec<PlayerIdentity> =
            self.players.iter().map(|slot| slot.identity).collect();
        self.players.clear();
        for identity in identities {
            self.add_player(identity);
        }
        self.enemies.clear();
        self.pools.release_all();
        self.score = ScoreState::default();
        self.time = SimTime::default();
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.paused = false;
        self.game_over = false;
        self.events.clear();
        self.next_enemy_id = 0;
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. Paused and game-over ticks freeze everything: no
    /// movement, no timers, no spawns — the snapshot reflects the
    /// unchanged state and carries no events.
    pub fn tick(&mut self) -> GameSnapshot {
        if self.paused || self.game_over {
            return systems::snapshot::build(self, Vec::new());
        }

        self.run_systems();
        self.time.advance();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(self, events)
    }

    /// Current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn players(&self) -> &[PlayerSlot] {
        &self.players
    }

    pub fn enemies(&self) -> &[Tank] {
        &self.enemies
    }

    pub fn pools(&self) -> &Pools {
        &self.pools
    }

    /// Spawn a wave-scaled enemy at an explicit position (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, position: glam::Vec2) -> u32 {
        let id = self.next_enemy_id;
        self.next_enemy_id += 1;
        let mut enemy = world_setup::enemy_tank(id, self.score.wave, &mut self.rng, &self.config);
        enemy.position = position;
        self.enemies.push(enemy);
        id
    }

    /// Inject a projectile directly (for tests).
    #[cfg(test)]
    pub fn spawn_test_projectile(
        &mut self,
        position: glam::Vec2,
        velocity: glam::Vec2,
        owner: steelstorm_core::enums::Owner,
        damage: f32,
        kind: steelstorm_core::enums::ProjectileKind,
    ) {
        systems::player::fire_projectile(&mut self.pools, position, velocity, owner, damage, kind);
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Power-up and upgrade-animation countdowns
        for slot in &mut self.players {
            systems::powerup::tick_timers(slot);
        }
        // 2. Input application: movement, turret aim, firing
        for index in 0..self.players.len() {
            let slot = &mut self.players[index];
            systems::player::run(
                slot,
                &mut self.pools,
                &mut self.rng,
                &self.config,
                self.time.tick,
                &mut self.events,
            );
        }
        // 3. Enemy steering and fire
        systems::enemy::run(
            &mut self.enemies,
            &self.players,
            &mut self.pools,
            &mut self.rng,
            self.time.tick,
        );
        // 4. Spawn admission (enemies, items)
        systems::spawner::run(
            &mut self.enemies,
            &mut self.pools.items,
            &mut self.rng,
            &self.config,
            self.score.wave,
            &mut self.next_enemy_id,
        );
        // 5. Projectile integration and off-board despawn
        systems::projectile::run(&mut self.pools.projectiles, &self.config);
        // 6. Cosmetic effect and item lifecycles
        systems::effects::run(&mut self.pools);
        // 7. Collision and damage resolution
        systems::collision::run(
            &mut self.players,
            &mut self.enemies,
            &mut self.pools,
            &mut self.score,
            &mut self.rng,
            &mut self.events,
            &mut self.game_over,
            &self.config,
        );
    }
}
