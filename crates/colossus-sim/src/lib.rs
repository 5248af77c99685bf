//! Headless encounter simulation for COLOSSUS.
//!
//! Owns the hecs world and the boss/player actors, drives the attack
//! director at a fixed tick, and produces EncounterSnapshots for a frontend.

pub mod actors;
pub mod engine;
pub mod spawn_queue;
pub mod systems;

pub use colossus_core as core;
pub use engine::{EncounterEngine, SimConfig};

#[cfg(test)]
mod tests;
