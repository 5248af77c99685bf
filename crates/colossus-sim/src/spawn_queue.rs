//! Spawn queues handed to the director as its factories.
//!
//! The director runs while the engine holds the boss and player mutably, so
//! it cannot touch the ECS world directly. Requests are buffered here and
//! flushed into the world by `systems::spawning` right after the director tick.

use colossus_core::types::Vec2;
use colossus_director::{ActorFactory, AddHandle, HazardSink, ProjectileFactory, Shockwave};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileSpawn {
    pub origin: Vec2,
    pub velocity: Vec2,
    pub damage: f32,
}

#[derive(Debug)]
pub struct ProjectileQueue {
    pending: Vec<ProjectileSpawn>,
    live: usize,
    limit: usize,
}

impl ProjectileQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            pending: Vec::new(),
            live: 0,
            limit,
        }
    }

    /// Record how many projectiles are already in the world.
    pub fn set_live(&mut self, live: usize) {
        self.live = live;
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, ProjectileSpawn> {
        self.pending.drain(..)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl ProjectileFactory for ProjectileQueue {
    fn spawn(&mut self, origin: Vec2, direction: Vec2, speed: f32, damage: f32) -> Result<(), String> {
        if self.live + self.pending.len() >= self.limit {
            return Err(format!("projectile limit of {} reached", self.limit));
        }
        self.pending.push(ProjectileSpawn {
            origin,
            velocity: direction * speed,
            damage,
        });
        Ok(())
    }

    fn remaining_capacity(&self) -> Option<usize> {
        Some(self.limit.saturating_sub(self.live + self.pending.len()))
    }
}

/// A summoned add waiting to enter the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddSpawn {
    pub position: Vec2,
    pub hp_multiplier: f32,
    pub speed_multiplier: f32,
    pub ranged: bool,
}

/// Handles are indices into the pending list and are only valid until the
/// next flush.
#[derive(Debug)]
pub struct AddQueue {
    pending: Vec<AddSpawn>,
    live: usize,
    limit: usize,
}

impl AddQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            pending: Vec::new(),
            live: 0,
            limit,
        }
    }

    pub fn set_live(&mut self, live: usize) {
        self.live = live;
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, AddSpawn> {
        self.pending.drain(..)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl ActorFactory for AddQueue {
    fn spawn(&mut self, position: Vec2) -> Result<AddHandle, String> {
        if self.live + self.pending.len() >= self.limit {
            return Err(format!("add limit of {} reached", self.limit));
        }
        self.pending.push(AddSpawn {
            position,
            hp_multiplier: 1.0,
            speed_multiplier: 1.0,
            ranged: true,
        });
        Ok(AddHandle(self.pending.len() as u32 - 1))
    }

    fn apply_stat_multipliers(&mut self, handle: AddHandle, hp: f32, speed: f32) {
        if let Some(add) = self.pending.get_mut(handle.0 as usize) {
            add.hp_multiplier *= hp;
            add.speed_multiplier *= speed;
        }
    }

    fn disable_ranged_attack(&mut self, handle: AddHandle) {
        if let Some(add) = self.pending.get_mut(handle.0 as usize) {
            add.ranged = false;
        }
    }
}

#[derive(Debug, Default)]
pub struct HazardQueue {
    pending: Vec<Shockwave>,
}

impl HazardQueue {
    pub fn drain(&mut self) -> std::vec::Drain<'_, Shockwave> {
        self.pending.drain(..)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl HazardSink for HazardQueue {
    fn spawn_shockwave(&mut self, shockwave: Shockwave) {
        self.pending.push(shockwave);
    }
}
