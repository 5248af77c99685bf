//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// Position and velocity of a moving entity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Kinematics {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// A hostile projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub damage: f32,
    /// Remaining flight time in seconds.
    pub ttl_secs: f32,
}

/// A summoned helper actor. Melee unless it also carries `RangedAttack`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SummonedAdd {
    pub id: u32,
    pub health: f32,
    pub max_health: f32,
    pub speed: f32,
    pub contact_damage: f32,
    /// Seconds until the next contact hit is allowed.
    pub contact_cooldown_secs: f32,
}

/// Periodic ranged fire for adds that keep it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RangedAttack {
    pub interval_secs: f32,
    pub cooldown_secs: f32,
    pub speed: f32,
    pub damage: f32,
}
