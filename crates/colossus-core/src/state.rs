//! Encounter snapshot: the complete visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::EncounterEvent;
use crate::types::{SimTime, TelegraphDescriptor, Vec2};

/// Complete encounter state after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    pub time: SimTime,
    pub phase: EncounterPhase,
    pub boss: BossView,
    pub player: PlayerView,
    pub director: DirectorView,
    pub telegraphs: Vec<TelegraphView>,
    pub projectiles: Vec<ProjectileView>,
    pub shockwaves: Vec<ShockwaveView>,
    pub adds: Vec<AddView>,
    pub events: Vec<EncounterEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BossView {
    pub position: Vec2,
    pub facing: Vec2,
    pub health: f32,
    pub max_health: f32,
    /// Whether the ambient chase is currently allowed.
    pub ambient_movement: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub velocity: Vec2,
    pub health: f32,
    pub max_health: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectorView {
    pub state: DirectorState,
    pub phase: Option<Phase>,
    pub last_pattern: Option<Pattern>,
}

/// An active warning marker with its remaining lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegraphView {
    pub id: u32,
    pub descriptor: TelegraphDescriptor,
    pub remaining_secs: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec2,
    pub velocity: Vec2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShockwaveView {
    pub center: Vec2,
    pub radius: f32,
    pub thickness: f32,
    /// Expansion progress, 0.0 to 1.0.
    pub progress: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddView {
    pub id: u32,
    pub position: Vec2,
    pub health: f32,
    pub ranged: bool,
}
