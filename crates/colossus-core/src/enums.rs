//! Enumeration types used throughout the encounter.

use serde::{Deserialize, Serialize};

use crate::constants::{ENRAGED_PHASE_RATIO, MID_PHASE_RATIO};

/// Boss escalation tier, derived from the health ratio every decision cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Above 60% health.
    #[default]
    Early,
    /// Above 25% and at most 60% health.
    Mid,
    /// At most 25% health.
    Enraged,
}

impl Phase {
    pub fn from_health_ratio(ratio: f32) -> Self {
        if ratio > MID_PHASE_RATIO {
            Phase::Early
        } else if ratio > ENRAGED_PHASE_RATIO {
            Phase::Mid
        } else {
            Phase::Enraged
        }
    }

    /// Phase for a current/max health pair. A non-positive max counts as empty.
    pub fn from_health(current: f32, max: f32) -> Self {
        let ratio = if max > 0.0 { current / max } else { 0.0 };
        Self::from_health_ratio(ratio)
    }
}

/// The five attack routines the director can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    FanBurst,
    AimedSnipe,
    LinearDash,
    ExpandingRing,
    SummonAdds,
}

impl Pattern {
    /// Fixed iteration order used by the cumulative-weight roll.
    pub const ALL: [Pattern; 5] = [
        Pattern::FanBurst,
        Pattern::AimedSnipe,
        Pattern::LinearDash,
        Pattern::ExpandingRing,
        Pattern::SummonAdds,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::FanBurst => "FanBurst",
            Pattern::AimedSnipe => "AimedSnipe",
            Pattern::LinearDash => "LinearDash",
            Pattern::ExpandingRing => "ExpandingRing",
            Pattern::SummonAdds => "SummonAdds",
        }
    }
}

/// Externally visible state of the attack director.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectorState {
    /// Not started, or stopped.
    #[default]
    Idle,
    /// Waiting out the startup delay.
    OpeningDelay,
    /// Ready to choose; also the state the director idles in while gated.
    Deciding,
    /// A pattern is showing its warning markers.
    Telegraphing,
    /// A pattern is delivering its effect.
    Executing,
    /// Post-pattern recovery wait.
    Recovering,
}

/// Top-level encounter state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterPhase {
    #[default]
    Setup,
    Active,
    Paused,
    Victory,
    Defeat,
}

/// What delivered a hit to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitSource {
    Projectile,
    Dash,
    Shockwave,
    AddContact,
}
