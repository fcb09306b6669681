//! Object pools for short-lived entities.
//!
//! Pools never shrink: a released record stays allocated and is reused
//! by the next acquire, so steady-state ticks allocate nothing and pool
//! capacity tracks peak concurrency. Live entities are the non-free
//! records; systems iterate pools and filter on liveness.

use steelstorm_core::entities::{
    Explosion, FloatingText, Item, Projectile, SmokeParticle, UpgradeParticle,
};

/// A record that can live inside a [`Pool`].
pub trait PoolSlot: Default {
    /// Whether this record is free for reuse.
    fn is_free(&self) -> bool;
    /// Mark the record free without deallocating it.
    fn release(&mut self);
    /// Reactivate the record, clearing transient state from its
    /// previous life. Callers fill in the fresh fields afterwards.
    fn reset(&mut self);
}

/// A growable pool of reusable records.
#[derive(Debug, Default)]
pub struct Pool<T: PoolSlot> {
    slots: Vec<T>,
}

impl<T: PoolSlot> Pool<T> {
    /// Acquire a record: reuse the first free slot, or grow by one.
    pub fn acquire(&mut self) -> &mut T {
        if let Some(index) = self.slots.iter().position(T::is_free) {
            let slot = &mut self.slots[index];
            slot.reset();
            return slot;
        }
        let mut fresh = T::default();
        fresh.reset();
        self.slots.push(fresh);
        let last = self.slots.len() - 1;
        &mut self.slots[last]
    }

    /// Iterate live (non-free) records.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.iter().filter(|slot| !slot.is_free())
    }

    /// Iterate live records mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.slots.iter_mut().filter(|slot| !slot.is_free())
    }

    /// All records, live and free. For systems that flip liveness
    /// while scanning.
    pub fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Number of live records.
    pub fn live_count(&self) -> usize {
        self.iter().count()
    }

    /// Total allocated records (peak concurrency so far).
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Release every record (game reset).
    pub fn release_all(&mut self) {
        for slot in &mut self.slots {
            slot.release();
        }
    }
}

impl PoolSlot for Projectile {
    fn is_free(&self) -> bool {
        !self.active
    }

    fn release(&mut self) {
        self.active = false;
    }

    fn reset(&mut self) {
        self.trail.clear();
        self.active = true;
    }
}

impl PoolSlot for Explosion {
    fn is_free(&self) -> bool {
        !self.active
    }

    fn release(&mut self) {
        self.active = false;
    }

    fn reset(&mut self) {
        self.size = 0.0;
        self.max_life = steelstorm_core::constants::EXPLOSION_LIFETIME;
        self.active = true;
    }
}

impl PoolSlot for FloatingText {
    fn is_free(&self) -> bool {
        !self.active
    }

    fn release(&mut self) {
        self.active = false;
    }

    fn reset(&mut self) {
        self.text.clear();
        self.max_life = steelstorm_core::constants::TEXT_LIFETIME;
        self.font_size = 18.0;
        self.active = true;
    }
}

impl PoolSlot for SmokeParticle {
    fn is_free(&self) -> bool {
        !self.active
    }

    fn release(&mut self) {
        self.active = false;
    }

    fn reset(&mut self) {
        self.max_life = steelstorm_core::constants::SMOKE_LIFETIME;
        self.active = true;
    }
}

impl PoolSlot for UpgradeParticle {
    fn is_free(&self) -> bool {
        !self.active
    }

    fn release(&mut self) {
        self.active = false;
    }

    fn reset(&mut self) {
        self.max_life = steelstorm_core::constants::SPARK_LIFETIME;
        self.active = true;
    }
}

impl PoolSlot for Item {
    fn is_free(&self) -> bool {
        self.collected
    }

    fn release(&mut self) {
        self.collected = true;
    }

    fn reset(&mut self) {
        self.life = 0;
        self.pulse_phase = 0.0;
        self.collected = false;
    }
}

/// All entity pools, owned by the engine.
#[derive(Debug, Default)]
pub struct Pools {
    pub projectiles: Pool<Projectile>,
    pub explosions: Pool<Explosion>,
    pub texts: Pool<FloatingText>,
    pub smoke: Pool<SmokeParticle>,
    pub sparks: Pool<UpgradeParticle>,
    pub items: Pool<Item>,
}

impl Pools {
    /// Release every record in every pool (game reset).
    pub fn release_all(&mut self) {
        self.projectiles.release_all();
        self.explosions.release_all();
        self.texts.release_all();
        self.smoke.release_all();
        self.sparks.release_all();
        self.items.release_all();
    }
}
