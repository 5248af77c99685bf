//! Shockwave hazard: an expanding ring that hits a target crossing its band.
//!
//! Once spawned, a shockwave belongs to the world. The host ticks it every
//! frame and removes it when `is_finished` reports true; the director never
//! touches it again.

use serde::{Deserialize, Serialize};

use colossus_core::types::Vec2;

use crate::geometry::direction_or_default;

/// Damage delivered by a shockwave on its single hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShockwaveHit {
    pub damage: f32,
    /// Knockback along the outward radial direction.
    pub direction: Vec2,
    pub knockback: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shockwave {
    pub center: Vec2,
    pub start_radius: f32,
    pub end_radius: f32,
    pub duration_secs: f32,
    /// Half-width of the band around the current radius that registers a hit.
    pub thickness: f32,
    pub damage: f32,
    pub knockback: f32,
    elapsed_secs: f32,
    has_hit: bool,
}

impl Shockwave {
    pub fn new(
        center: Vec2,
        start_radius: f32,
        end_radius: f32,
        duration_secs: f32,
        thickness: f32,
        damage: f32,
        knockback: f32,
    ) -> Self {
        Self {
            center,
            start_radius,
            end_radius: end_radius.max(start_radius),
            duration_secs: duration_secs.max(0.0),
            thickness,
            damage,
            knockback,
            elapsed_secs: 0.0,
            has_hit: false,
        }
    }

    /// Expansion progress in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration_secs <= 0.0 {
            1.0
        } else {
            (self.elapsed_secs / self.duration_secs).min(1.0)
        }
    }

    pub fn current_radius(&self) -> f32 {
        self.start_radius + (self.end_radius - self.start_radius) * self.progress()
    }

    /// Whether `point` lies within `thickness` of the current radius.
    pub fn in_band(&self, point: Vec2) -> bool {
        (point.distance(self.center) - self.current_radius()).abs() <= self.thickness
    }

    pub fn has_hit(&self) -> bool {
        self.has_hit
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Expand by `dt` and test the target against the new radius.
    /// Returns a hit at most once over the shockwave's lifetime.
    pub fn tick(&mut self, dt: f32, target: Option<Vec2>) -> Option<ShockwaveHit> {
        self.elapsed_secs += dt;

        if self.has_hit {
            return None;
        }
        let target = target?;
        if !self.in_band(target) {
            return None;
        }

        self.has_hit = true;
        Some(ShockwaveHit {
            damage: self.damage,
            direction: direction_or_default(target - self.center),
            knockback: self.knockback,
        })
    }
}
