//! Boss attack director for COLOSSUS.
//!
//! Implements the phase-aware decision loop, the five attack pattern
//! executors, telegraph lifetimes, shockwave hazards and summon placement.
//! No ECS dependency; the host supplies collaborators through `host::Host`.

pub mod director;
pub mod geometry;
pub mod host;
pub mod patterns;
pub mod selection;
pub mod shockwave;
pub mod spawn_points;
pub mod telegraph;

pub use colossus_core as core;
pub use director::{DecisionRecord, Director};
pub use host::{
    ActorFactory, AddHandle, BossActor, DirectorLog, HazardSink, Host, LogFacade,
    ProjectileFactory, Target,
};
pub use shockwave::Shockwave;
