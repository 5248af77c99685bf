//! Events emitted by the director and the encounter for UI and logging.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Observable encounter events, drained once per tick into the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EncounterEvent {
    /// Director (re)started its decision loop.
    DirectorStarted,
    /// Director was stopped; owned telegraphs were cleared.
    DirectorStopped,
    /// Health ratio crossed into a new phase. `from` is None on the first cycle.
    PhaseChanged { from: Option<Phase>, to: Phase },
    /// A pattern was chosen and its executor began.
    PatternDispatched { pattern: Pattern, phase: Phase },
    /// A pattern finished and the director entered recovery.
    PatternCompleted { pattern: Pattern },
    /// A pattern could not run or failed part-way; treated as completed.
    PatternAborted { pattern: Pattern, reason: String },
    /// The target took damage.
    TargetHit { source: HitSource, damage: f32 },
    /// Helper actors entered the arena.
    AddsSummoned { count: u32 },
    BossDefeated,
    TargetDefeated,
}
