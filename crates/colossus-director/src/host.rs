//! Collaborator interfaces the director drives.
//!
//! The host passes a `Host` bundle into every director tick. Factories are
//! optional: a pattern whose factory is missing is skipped for that cycle.

use colossus_core::types::{DifficultyMultiplier, Vec2};

use crate::shockwave::Shockwave;

/// The hostile actor the director controls.
pub trait BossActor {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);
    /// Current facing; may be zero-length.
    fn facing(&self) -> Vec2;
    fn health(&self) -> f32;
    fn max_health(&self) -> f32;
    /// Enable or suppress the actor's ambient (non-attack) movement.
    fn set_ambient_movement(&mut self, enabled: bool);
}

/// The entity the boss attacks.
pub trait Target {
    fn position(&self) -> Vec2;
    /// Direction of the target's most recent movement; may be zero-length.
    fn last_move_direction(&self) -> Vec2;
    fn apply_damage(&mut self, amount: f32);
    /// Apply a physical impulse. Returns false if the target has no impulse sink.
    fn apply_impulse(&mut self, _direction: Vec2, _magnitude: f32) -> bool {
        false
    }
    fn add_velocity(&mut self, delta: Vec2);
}

/// Push `target` along `direction`, falling back to a raw velocity change
/// when it has no impulse sink.
pub fn apply_knockback<T: Target + ?Sized>(target: &mut T, direction: Vec2, magnitude: f32) {
    if !target.apply_impulse(direction, magnitude) {
        target.add_velocity(direction * magnitude);
    }
}

pub trait ProjectileFactory {
    fn spawn(&mut self, origin: Vec2, direction: Vec2, speed: f32, damage: f32)
        -> Result<(), String>;

    /// Shots that can still be spawned, or `None` when unbounded.
    fn remaining_capacity(&self) -> Option<usize> {
        None
    }
}

/// Handle to a helper actor spawned through an `ActorFactory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddHandle(pub u32);

pub trait ActorFactory {
    fn spawn(&mut self, position: Vec2) -> Result<AddHandle, String>;
    fn apply_stat_multipliers(&mut self, handle: AddHandle, hp: f32, speed: f32);
    /// Strip the helper's ranged attack, if it has one.
    fn disable_ranged_attack(&mut self, handle: AddHandle);
}

/// Receives shockwaves; ownership moves to the world.
pub trait HazardSink {
    fn spawn_shockwave(&mut self, shockwave: Shockwave);
}

/// Single-line event/warning sink.
pub trait DirectorLog {
    fn event(&mut self, line: &str);
    fn warning(&mut self, line: &str);
}

/// Forwards director lines to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacade;

impl DirectorLog for LogFacade {
    fn event(&mut self, line: &str) {
        log::info!(target: "colossus::director", "{line}");
    }

    fn warning(&mut self, line: &str) {
        log::warn!(target: "colossus::director", "{line}");
    }
}

/// Everything the director may read or act on during one tick.
pub struct Host<'a> {
    /// Global gameplay-active flag; the director idles while false.
    pub gameplay_active: bool,
    pub boss: &'a mut dyn BossActor,
    pub target: Option<&'a mut dyn Target>,
    pub projectiles: Option<&'a mut dyn ProjectileFactory>,
    pub adds: Option<&'a mut dyn ActorFactory>,
    pub hazards: Option<&'a mut dyn HazardSink>,
    pub difficulty: Option<DifficultyMultiplier>,
}
