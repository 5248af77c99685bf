//! Pattern executors.
//!
//! Each executor is a short-lived, resumable routine: `begin` snapshots what
//! it needs (aim points, start positions, phase-scaled numbers) and places its
//! telegraphs, then `tick` is called once per frame until it reports
//! `Complete`. Executors hold no state beyond one invocation.

pub mod aimed_snipe;
pub mod expanding_ring;
pub mod fan_burst;
pub mod linear_dash;
pub mod summon_adds;

use rand_chacha::ChaCha8Rng;

use colossus_core::config::DirectorConfig;
use colossus_core::enums::{Pattern, Phase};
use colossus_core::events::EncounterEvent;
use colossus_core::types::Vec2;

use crate::host::{BossActor, DirectorLog, Host};
use crate::telegraph::TelegraphRegistry;

pub use aimed_snipe::AimedSnipe;
pub use expanding_ring::ExpandingRing;
pub use fan_burst::FanBurst;
pub use linear_dash::LinearDash;
pub use summon_adds::SummonAdds;

/// What an executor may use while it runs.
pub struct PatternCtx<'c, 'a> {
    pub phase: Phase,
    pub config: &'c DirectorConfig,
    pub rng: &'c mut ChaCha8Rng,
    pub telegraphs: &'c mut TelegraphRegistry,
    pub log: &'c mut dyn DirectorLog,
    pub events: &'c mut Vec<EncounterEvent>,
    pub host: &'c mut Host<'a>,
}

impl PatternCtx<'_, '_> {
    /// Position and last movement direction of the target, if there is one.
    pub fn target_snapshot(&self) -> Option<TargetSnapshot> {
        self.host.target.as_ref().map(|t| TargetSnapshot {
            position: t.position(),
            last_move: t.last_move_direction(),
        })
    }
}

/// Read-only copy of the target taken when a pattern begins.
#[derive(Debug, Clone, Copy)]
pub struct TargetSnapshot {
    pub position: Vec2,
    pub last_move: Vec2,
}

/// Result of advancing an executor by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PatternStep {
    Running,
    /// Finished. `recovery_secs` overrides the phase recovery range.
    Complete { recovery_secs: Option<f32> },
}

impl PatternStep {
    pub const DONE: PatternStep = PatternStep::Complete {
        recovery_secs: None,
    };
}

/// The one in-flight pattern of a director.
#[derive(Debug)]
pub enum ActivePattern {
    FanBurst(FanBurst),
    AimedSnipe(AimedSnipe),
    LinearDash(LinearDash),
    ExpandingRing(ExpandingRing),
    SummonAdds(SummonAdds),
}

impl ActivePattern {
    /// Start `pattern`. Fails without placing any telegraph when a required
    /// collaborator is missing.
    pub fn begin(pattern: Pattern, ctx: &mut PatternCtx<'_, '_>) -> Result<Self, String> {
        Ok(match pattern {
            Pattern::FanBurst => ActivePattern::FanBurst(FanBurst::begin(ctx)?),
            Pattern::AimedSnipe => ActivePattern::AimedSnipe(AimedSnipe::begin(ctx)?),
            Pattern::LinearDash => ActivePattern::LinearDash(LinearDash::begin(ctx)?),
            Pattern::ExpandingRing => ActivePattern::ExpandingRing(ExpandingRing::begin(ctx)?),
            Pattern::SummonAdds => ActivePattern::SummonAdds(SummonAdds::begin(ctx)?),
        })
    }

    pub fn tick(&mut self, dt: f32, ctx: &mut PatternCtx<'_, '_>) -> Result<PatternStep, String> {
        match self {
            ActivePattern::FanBurst(p) => p.tick(dt, ctx),
            ActivePattern::AimedSnipe(p) => p.tick(dt, ctx),
            ActivePattern::LinearDash(p) => p.tick(dt, ctx),
            ActivePattern::ExpandingRing(p) => p.tick(dt, ctx),
            ActivePattern::SummonAdds(p) => p.tick(dt, ctx),
        }
    }

    pub fn pattern(&self) -> Pattern {
        match self {
            ActivePattern::FanBurst(_) => Pattern::FanBurst,
            ActivePattern::AimedSnipe(_) => Pattern::AimedSnipe,
            ActivePattern::LinearDash(_) => Pattern::LinearDash,
            ActivePattern::ExpandingRing(_) => Pattern::ExpandingRing,
            ActivePattern::SummonAdds(_) => Pattern::SummonAdds,
        }
    }

    /// Whether the pattern is still in its warning window.
    pub fn is_telegraphing(&self) -> bool {
        match self {
            ActivePattern::FanBurst(p) => p.is_telegraphing(),
            ActivePattern::AimedSnipe(p) => p.is_telegraphing(),
            ActivePattern::LinearDash(p) => p.is_telegraphing(),
            ActivePattern::ExpandingRing(p) => p.is_telegraphing(),
            ActivePattern::SummonAdds(p) => p.is_telegraphing(),
        }
    }

    /// Undo any side effect the pattern left on the boss (cancel or failure).
    pub fn abort(&mut self, boss: &mut dyn BossActor) {
        if let ActivePattern::LinearDash(p) = self {
            p.abort(boss);
        }
    }
}
