//! Encounter constants and tuning parameters.
//!
//! Per-pattern tuning that varies by phase lives in `config::DirectorConfig`;
//! the values here are fixed for the whole encounter.

use crate::types::{Rgba, Vec2};

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// A countdown is finished once its remaining time is within this many seconds of zero.
pub const TIMER_EPSILON: f32 = 1e-4;

// --- Phases ---

/// Health ratio above which the boss is in the Early phase.
pub const MID_PHASE_RATIO: f32 = 0.60;

/// Health ratio at or below which the boss is Enraged.
pub const ENRAGED_PHASE_RATIO: f32 = 0.25;

// --- Director ---

/// Attempts the selector makes to avoid repeating the previous pattern.
pub const MAX_SELECTION_ATTEMPTS: u32 = 4;

/// Axis substituted for any degenerate (zero-length) direction.
pub const DEFAULT_AXIS: Vec2 = Vec2::new(0.0, -1.0);

/// Squared length below which a direction is treated as degenerate.
pub const DEGENERATE_LENGTH_SQ: f32 = 1e-8;

/// Floor applied to configured speeds (units/s).
pub const MIN_CONFIG_SPEED: f32 = 0.1;

/// Floor applied to configured hit radii and ring thickness (units).
pub const MIN_CONFIG_EXTENT: f32 = 0.01;

// --- Spawn sampler ---

/// Lower bound on random placement attempts per batch.
pub const SPAWN_MIN_ATTEMPTS: usize = 12;

/// Random placement attempts per requested point.
pub const SPAWN_ATTEMPTS_PER_POINT: usize = 24;

/// Angle (radians) of the first slot in the even fallback ring.
pub const SPAWN_FALLBACK_REFERENCE_ANGLE: f32 = 0.0;

// --- Telegraph styling ---

pub const TELEGRAPH_FAN_COLOR: Rgba = Rgba::new(1.0, 0.55, 0.1, 0.6);
pub const TELEGRAPH_SNIPE_COLOR: Rgba = Rgba::new(1.0, 0.1, 0.1, 0.8);
pub const TELEGRAPH_DASH_COLOR: Rgba = Rgba::new(1.0, 0.25, 0.6, 0.55);
pub const TELEGRAPH_RING_COLOR: Rgba = Rgba::new(0.3, 0.7, 1.0, 0.6);
pub const TELEGRAPH_SUMMON_COLOR: Rgba = Rgba::new(0.6, 1.0, 0.3, 0.7);

pub const TELEGRAPH_LINE_WIDTH: f32 = 0.08;
pub const TELEGRAPH_THICK_LINE_WIDTH: f32 = 0.9;
pub const TELEGRAPH_CIRCLE_WIDTH: f32 = 0.06;

// --- Arena ---

/// Default arena radius; the player is kept inside it.
pub const ARENA_RADIUS: f32 = 24.0;

/// Projectiles are despawned once this far outside the arena radius.
pub const ARENA_CLEANUP_MARGIN: f32 = 2.0;

/// Boss spawn point.
pub const BOSS_SPAWN: Vec2 = Vec2::new(0.0, 4.0);

/// Player spawn point.
pub const PLAYER_SPAWN: Vec2 = Vec2::new(0.0, -6.0);

// --- Boss ---

pub const BOSS_MAX_HEALTH: f32 = 1500.0;

/// Ambient chase speed (units/s).
pub const BOSS_CHASE_SPEED: f32 = 2.2;

/// The boss stops closing in once within this distance of the player.
pub const BOSS_CHASE_STOP_DISTANCE: f32 = 3.0;

// --- Player ---

pub const PLAYER_MAX_HEALTH: f32 = 100.0;
pub const PLAYER_MOVE_SPEED: f32 = 5.0;
pub const PLAYER_MASS: f32 = 1.5;
pub const PLAYER_RADIUS: f32 = 0.4;

/// Fraction of knockback velocity retained per second.
pub const PLAYER_VELOCITY_DAMPING: f32 = 0.02;

// --- Projectiles ---

pub const PROJECTILE_RADIUS: f32 = 0.2;

/// Seconds before an unspent projectile despawns.
pub const PROJECTILE_LIFETIME_SECS: f32 = 4.0;

/// Live projectile cap; spawns beyond it are refused.
pub const MAX_PROJECTILES: usize = 512;

// --- Summoned adds ---

pub const ADD_BASE_HEALTH: f32 = 60.0;
pub const ADD_BASE_SPEED: f32 = 2.5;
pub const ADD_RADIUS: f32 = 0.45;
pub const ADD_CONTACT_DAMAGE: f32 = 6.0;
pub const ADD_CONTACT_COOLDOWN_SECS: f32 = 0.8;

/// Live add cap; summons beyond it are refused.
pub const MAX_ADDS: usize = 16;

/// Interval between shots for adds that keep their ranged attack.
pub const ADD_RANGED_INTERVAL_SECS: f32 = 2.0;
pub const ADD_RANGED_SPEED: f32 = 6.0;
pub const ADD_RANGED_DAMAGE: f32 = 4.0;
