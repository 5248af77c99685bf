//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

pub use glam::Vec2;

use crate::constants::TIMER_EPSILON;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each simulated tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds (time-scale applied).
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` scaled seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}

/// A resumable wait, stored as remaining seconds and advanced once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    remaining: f32,
}

impl Countdown {
    pub fn new(secs: f32) -> Self {
        Self {
            remaining: secs.max(0.0),
        }
    }

    /// Consume `dt` seconds. Returns true once the wait has run out.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.is_done()
    }

    pub fn is_done(&self) -> bool {
        self.remaining <= TIMER_EPSILON
    }

    pub fn remaining(&self) -> f32 {
        self.remaining.max(0.0)
    }
}

/// Linear RGBA color for telegraph markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Geometry of a telegraph marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum TelegraphShape {
    Line { from: Vec2, to: Vec2 },
    Circle { center: Vec2, radius: f32 },
}

/// Everything a rendering collaborator needs to draw one warning marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelegraphDescriptor {
    pub shape: TelegraphShape,
    pub color: Rgba,
    pub width: f32,
    /// Seconds the marker stays up. Zero or less means it is never shown.
    pub lifetime: f32,
}

impl TelegraphDescriptor {
    pub fn line(from: Vec2, to: Vec2, color: Rgba, width: f32, lifetime: f32) -> Self {
        Self {
            shape: TelegraphShape::Line { from, to },
            color,
            width,
            lifetime,
        }
    }

    pub fn circle(center: Vec2, radius: f32, color: Rgba, width: f32, lifetime: f32) -> Self {
        Self {
            shape: TelegraphShape::Circle { center, radius },
            color,
            width,
            lifetime,
        }
    }
}

/// Global (hp, speed) scaling applied on top of summoned-add multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyMultiplier {
    pub hp: f32,
    pub speed: f32,
}

impl Default for DifficultyMultiplier {
    fn default() -> Self {
        Self { hp: 1.0, speed: 1.0 }
    }
}
