//! ECS systems that operate on the encounter world each tick.
//!
//! Systems are plain functions over `&mut World` plus the actors they touch.
//! They hold no state of their own.

pub mod adds;
pub mod ambient_movement;
pub mod cleanup;
pub mod player;
pub mod projectiles;
pub mod shockwaves;
pub mod snapshot;
pub mod spawning;
