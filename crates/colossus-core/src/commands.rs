//! Host commands sent to the encounter engine.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// All externally driven encounter actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EncounterCommand {
    // --- Encounter flow ---
    /// Spawn the actors and start the director.
    StartEncounter,
    Pause,
    Resume,
    /// Set time scale (1.0 = normal, 0.0 = frozen).
    SetTimeScale { scale: f32 },

    // --- Gameplay gate ---
    /// Toggle the gameplay-active flag the director polls every cycle.
    SetCombatActive { active: bool },

    // --- Actors ---
    /// Steer the player. A zero vector stops voluntary movement.
    MovePlayer { direction: Vec2 },
    /// Deal damage to the boss (stand-in for the player's weapons).
    DamageBoss { amount: f32 },
    /// Global multiplier applied to summoned adds.
    SetDifficulty { hp: f32, speed: f32 },

    // --- Director lifecycle ---
    StopDirector,
    RestartDirector,
}
