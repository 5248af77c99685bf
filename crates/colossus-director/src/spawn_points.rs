//! Constrained-random placement of summon points around a center.

use std::f32::consts::TAU;

use rand::Rng;

use colossus_core::constants::{
    SPAWN_ATTEMPTS_PER_POINT, SPAWN_FALLBACK_REFERENCE_ANGLE, SPAWN_MIN_ATTEMPTS,
};
use colossus_core::types::Vec2;

use crate::geometry::point_on_circle;

/// Radial band and spacing rules for one batch.
#[derive(Debug, Clone, Copy)]
pub struct SpawnRing {
    pub min_radius: f32,
    pub max_radius: f32,
    pub min_spacing: f32,
    pub fallback_radius: f32,
}

/// Points produced for one batch.
#[derive(Debug, Clone, Default)]
pub struct SpawnPointSet {
    pub points: Vec<Vec2>,
    /// How many trailing points came from the even fallback ring.
    pub fallback_slots: usize,
}

impl SpawnPointSet {
    pub fn used_fallback(&self) -> bool {
        self.fallback_slots > 0
    }
}

/// Random draw budget for a batch of `count` points.
pub fn attempt_budget(count: usize) -> usize {
    SPAWN_MIN_ATTEMPTS.max(SPAWN_ATTEMPTS_PER_POINT * count)
}

/// Even-angle fallback position for `slot` out of `count`.
pub fn fallback_point(center: Vec2, slot: usize, count: usize, radius: f32) -> Vec2 {
    let step = TAU / count.max(1) as f32;
    point_on_circle(
        center,
        SPAWN_FALLBACK_REFERENCE_ANGLE + step * slot as f32,
        radius,
    )
}

/// Sample `count` points in the ring band around `center`, each at least
/// `min_spacing` from every other accepted point. Slots the attempt budget
/// cannot fill are taken from an evenly spaced ring with no spacing check.
pub fn sample_spawn_points<R: Rng + ?Sized>(
    rng: &mut R,
    center: Vec2,
    count: usize,
    ring: &SpawnRing,
) -> SpawnPointSet {
    let mut points: Vec<Vec2> = Vec::with_capacity(count);
    let budget = attempt_budget(count);
    let min_radius = ring.min_radius.min(ring.max_radius);
    let max_radius = ring.max_radius.max(min_radius);

    let mut attempts = 0;
    while points.len() < count && attempts < budget {
        attempts += 1;
        let angle: f32 = rng.gen_range(0.0..TAU);
        let radius: f32 = rng.gen_range(min_radius..=max_radius);
        let candidate = point_on_circle(center, angle, radius);

        if points
            .iter()
            .all(|p| p.distance(candidate) >= ring.min_spacing)
        {
            points.push(candidate);
        }
    }

    let accepted = points.len();
    for slot in accepted..count {
        points.push(fallback_point(center, slot, count, ring.fallback_radius));
    }

    SpawnPointSet {
        points,
        fallback_slots: count - accepted,
    }
}
