//! Telegraph registry: timed warning markers with independent lifetimes.
//!
//! Markers are created by pattern executors and expire on their own clock,
//! regardless of what the director is doing. The director owns the registry
//! and clears it when it is stopped.

use colossus_core::types::{Countdown, TelegraphDescriptor};

/// Identifier of a live telegraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TelegraphId(pub u32);

/// A live marker and its expiry timer.
#[derive(Debug, Clone)]
pub struct ActiveTelegraph {
    pub id: TelegraphId,
    pub descriptor: TelegraphDescriptor,
    expiry: Countdown,
}

impl ActiveTelegraph {
    pub fn remaining_secs(&self) -> f32 {
        self.expiry.remaining()
    }
}

#[derive(Debug, Default)]
pub struct TelegraphRegistry {
    active: Vec<ActiveTelegraph>,
    next_id: u32,
}

impl TelegraphRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a marker. One with no lifetime is discarded on the spot
    /// and never becomes visible.
    pub fn spawn(&mut self, descriptor: TelegraphDescriptor) -> Option<TelegraphId> {
        if descriptor.lifetime <= 0.0 {
            return None;
        }
        let id = TelegraphId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.active.push(ActiveTelegraph {
            id,
            descriptor,
            expiry: Countdown::new(descriptor.lifetime),
        });
        Some(id)
    }

    /// Advance every marker's clock and drop the expired ones.
    pub fn tick(&mut self, dt: f32) {
        self.active.retain_mut(|t| !t.expiry.tick(dt));
    }

    /// Destroy every live marker.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn contains(&self, id: TelegraphId) -> bool {
        self.active.iter().any(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveTelegraph> {
        self.active.iter()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
