//! Director tuning: per-phase parameter tables for every attack pattern.
//!
//! All sections deserialize with defaults, so a JSON override only needs the
//! fields it changes. `validate` clamps inconsistent ranges once, up front,
//! so the director never has to re-check them while deciding.

use serde::{Deserialize, Serialize};

use crate::constants::{MIN_CONFIG_EXTENT, MIN_CONFIG_SPEED};
use crate::enums::{Pattern, Phase};

/// One value per phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseTable<T> {
    pub early: T,
    pub mid: T,
    pub enraged: T,
}

impl<T: Copy> PhaseTable<T> {
    pub const fn new(early: T, mid: T, enraged: T) -> Self {
        Self { early, mid, enraged }
    }

    pub fn get(&self, phase: Phase) -> T {
        match phase {
            Phase::Early => self.early,
            Phase::Mid => self.mid,
            Phase::Enraged => self.enraged,
        }
    }

    fn values_mut(&mut self) -> [&mut T; 3] {
        [&mut self.early, &mut self.mid, &mut self.enraged]
    }
}

/// Inclusive uniform range of seconds or distances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

/// Inclusive uniform range of counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountSpan {
    pub min: u32,
    pub max: u32,
}

impl CountSpan {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Selection weight for each pattern in one phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternWeights {
    pub fan_burst: f32,
    pub aimed_snipe: f32,
    pub linear_dash: f32,
    pub expanding_ring: f32,
    pub summon_adds: f32,
}

impl PatternWeights {
    pub const fn new(
        fan_burst: f32,
        aimed_snipe: f32,
        linear_dash: f32,
        expanding_ring: f32,
        summon_adds: f32,
    ) -> Self {
        Self {
            fan_burst,
            aimed_snipe,
            linear_dash,
            expanding_ring,
            summon_adds,
        }
    }

    /// A table where only `pattern` can be chosen.
    pub fn only(pattern: Pattern) -> Self {
        let mut weights = Self::default();
        *weights.weight_mut(pattern) = 1.0;
        weights
    }

    pub fn weight(&self, pattern: Pattern) -> f32 {
        match pattern {
            Pattern::FanBurst => self.fan_burst,
            Pattern::AimedSnipe => self.aimed_snipe,
            Pattern::LinearDash => self.linear_dash,
            Pattern::ExpandingRing => self.expanding_ring,
            Pattern::SummonAdds => self.summon_adds,
        }
    }

    pub fn weight_mut(&mut self, pattern: Pattern) -> &mut f32 {
        match pattern {
            Pattern::FanBurst => &mut self.fan_burst,
            Pattern::AimedSnipe => &mut self.aimed_snipe,
            Pattern::LinearDash => &mut self.linear_dash,
            Pattern::ExpandingRing => &mut self.expanding_ring,
            Pattern::SummonAdds => &mut self.summon_adds,
        }
    }

    pub fn total(&self) -> f32 {
        Pattern::ALL.iter().map(|p| self.weight(*p).max(0.0)).sum()
    }

    /// Number of patterns that can actually be rolled.
    pub fn positive_count(&self) -> usize {
        Pattern::ALL
            .iter()
            .filter(|p| self.weight(**p) > 0.0)
            .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FanBurstConfig {
    pub shot_count: CountSpan,
    /// Full fan width in degrees.
    pub spread_deg: PhaseTable<f32>,
    pub projectile_speed: PhaseTable<f32>,
    pub damage: f32,
    pub telegraph_secs: f32,
    /// Length of each warning line.
    pub telegraph_length: f32,
}

impl Default for FanBurstConfig {
    fn default() -> Self {
        Self {
            shot_count: CountSpan::new(5, 7),
            spread_deg: PhaseTable::new(50.0, 65.0, 80.0),
            projectile_speed: PhaseTable::new(7.0, 8.5, 10.0),
            damage: 10.0,
            telegraph_secs: 0.55,
            telegraph_length: 6.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AimedSnipeConfig {
    pub burst_count: u32,
    /// Seconds between consecutive shots of the burst.
    pub shot_gap: PhaseTable<f32>,
    pub projectile_speed: PhaseTable<f32>,
    pub damage: f32,
    pub telegraph_secs: f32,
}

impl Default for AimedSnipeConfig {
    fn default() -> Self {
        Self {
            burst_count: 3,
            shot_gap: PhaseTable::new(0.22, 0.16, 0.11),
            projectile_speed: PhaseTable::new(11.0, 13.0, 15.0),
            damage: 12.0,
            telegraph_secs: 0.65,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearDashConfig {
    pub min_distance: f32,
    pub max_distance: f32,
    pub speed: PhaseTable<f32>,
    pub hit_radius: f32,
    pub damage: f32,
    pub knockback: f32,
    pub telegraph_secs: f32,
    /// Fixed recovery after the dash, used instead of the phase recovery range.
    pub recovery_secs: f32,
    /// Switch off the boss's ambient chase while dashing.
    pub suppress_ambient_movement: bool,
}

impl Default for LinearDashConfig {
    fn default() -> Self {
        Self {
            min_distance: 3.0,
            max_distance: 9.0,
            speed: PhaseTable::new(14.0, 17.0, 20.0),
            hit_radius: 0.9,
            damage: 18.0,
            knockback: 6.0,
            telegraph_secs: 0.7,
            recovery_secs: 0.9,
            suppress_ambient_movement: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandingRingConfig {
    /// Early fires `min` rings, Enraged fires `max`, Mid rolls between.
    pub ring_count: CountSpan,
    pub start_radius: f32,
    pub end_radius: f32,
    pub thickness: f32,
    pub expand_secs: PhaseTable<f32>,
    pub inter_ring_delay: PhaseTable<f32>,
    pub damage: f32,
    pub knockback: f32,
    pub telegraph_secs: f32,
}

impl Default for ExpandingRingConfig {
    fn default() -> Self {
        Self {
            ring_count: CountSpan::new(2, 3),
            start_radius: 0.5,
            end_radius: 7.5,
            thickness: 0.45,
            expand_secs: PhaseTable::new(1.6, 1.35, 1.1),
            inter_ring_delay: PhaseTable::new(0.55, 0.45, 0.35),
            damage: 14.0,
            knockback: 4.0,
            telegraph_secs: 0.8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummonAddsConfig {
    /// Enraged raises the floor by one.
    pub count: CountSpan,
    pub min_radius: f32,
    pub max_radius: f32,
    pub min_spacing: f32,
    pub fallback_radius: f32,
    pub marker_radius: f32,
    pub telegraph_secs: f32,
    pub hp_multiplier: f32,
    pub speed_multiplier: f32,
}

impl Default for SummonAddsConfig {
    fn default() -> Self {
        Self {
            count: CountSpan::new(2, 3),
            min_radius: 2.8,
            max_radius: 4.2,
            min_spacing: 1.2,
            fallback_radius: 3.5,
            marker_radius: 0.45,
            telegraph_secs: 0.9,
            hp_multiplier: 0.6,
            speed_multiplier: 1.15,
        }
    }
}

/// Complete tuning for one attack director.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectorConfig {
    /// Wait before the very first decision after a start.
    pub opening_delay_secs: f32,
    pub recovery: PhaseTable<Span>,
    pub weights: PhaseTable<PatternWeights>,
    pub fan_burst: FanBurstConfig,
    pub aimed_snipe: AimedSnipeConfig,
    pub linear_dash: LinearDashConfig,
    pub expanding_ring: ExpandingRingConfig,
    pub summon_adds: SummonAddsConfig,
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self {
            opening_delay_secs: 0.85,
            recovery: PhaseTable::new(
                Span::new(0.80, 1.05),
                Span::new(0.60, 0.85),
                Span::new(0.40, 0.60),
            ),
            weights: PhaseTable::new(
                PatternWeights::new(0.42, 0.33, 0.0, 0.25, 0.0),
                PatternWeights::new(0.26, 0.22, 0.20, 0.18, 0.14),
                PatternWeights::new(0.20, 0.20, 0.22, 0.20, 0.18),
            ),
            fan_burst: FanBurstConfig::default(),
            aimed_snipe: AimedSnipeConfig::default(),
            linear_dash: LinearDashConfig::default(),
            expanding_ring: ExpandingRingConfig::default(),
            summon_adds: SummonAddsConfig::default(),
        }
    }
}

impl DirectorConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid director config: {e}"))
    }

    /// Clamp inconsistent values in place. Returns one note per correction.
    pub fn validate(&mut self) -> Vec<String> {
        let mut notes = Vec::new();

        clamp_secs(&mut self.opening_delay_secs, "opening_delay_secs", &mut notes);

        for (label, span) in ["recovery.early", "recovery.mid", "recovery.enraged"]
            .into_iter()
            .zip(self.recovery.values_mut())
        {
            clamp_secs(&mut span.min, label, &mut notes);
            clamp_span(span, label, &mut notes);
        }

        for (label, weights) in ["weights.early", "weights.mid", "weights.enraged"]
            .into_iter()
            .zip(self.weights.values_mut())
        {
            for pattern in Pattern::ALL {
                let weight = weights.weight_mut(pattern);
                if *weight < 0.0 || weight.is_nan() {
                    notes.push(format!("{label}.{}: {} -> 0", pattern.name(), weight));
                    *weight = 0.0;
                }
            }
        }

        let fan = &mut self.fan_burst;
        clamp_count(&mut fan.shot_count, "fan_burst.shot_count", &mut notes);
        clamp_secs(&mut fan.telegraph_secs, "fan_burst.telegraph_secs", &mut notes);
        for speed in fan.projectile_speed.values_mut() {
            clamp_floor(speed, MIN_CONFIG_SPEED, "fan_burst.projectile_speed", &mut notes);
        }

        let snipe = &mut self.aimed_snipe;
        clamp_secs(&mut snipe.telegraph_secs, "aimed_snipe.telegraph_secs", &mut notes);
        for gap in snipe.shot_gap.values_mut() {
            clamp_secs(gap, "aimed_snipe.shot_gap", &mut notes);
        }
        for speed in snipe.projectile_speed.values_mut() {
            clamp_floor(speed, MIN_CONFIG_SPEED, "aimed_snipe.projectile_speed", &mut notes);
        }

        let dash = &mut self.linear_dash;
        clamp_secs(&mut dash.min_distance, "linear_dash.min_distance", &mut notes);
        if dash.max_distance < dash.min_distance {
            notes.push(format!(
                "linear_dash.max_distance: {} -> {}",
                dash.max_distance, dash.min_distance
            ));
            dash.max_distance = dash.min_distance;
        }
        for speed in dash.speed.values_mut() {
            clamp_floor(speed, MIN_CONFIG_SPEED, "linear_dash.speed", &mut notes);
        }
        clamp_floor(&mut dash.hit_radius, MIN_CONFIG_EXTENT, "linear_dash.hit_radius", &mut notes);
        clamp_secs(&mut dash.telegraph_secs, "linear_dash.telegraph_secs", &mut notes);
        clamp_secs(&mut dash.recovery_secs, "linear_dash.recovery_secs", &mut notes);

        let ring = &mut self.expanding_ring;
        clamp_count(&mut ring.ring_count, "expanding_ring.ring_count", &mut notes);
        if ring.end_radius < ring.start_radius {
            notes.push(format!(
                "expanding_ring.end_radius: {} -> {}",
                ring.end_radius, ring.start_radius
            ));
            ring.end_radius = ring.start_radius;
        }
        clamp_floor(&mut ring.thickness, MIN_CONFIG_EXTENT, "expanding_ring.thickness", &mut notes);
        clamp_secs(&mut ring.telegraph_secs, "expanding_ring.telegraph_secs", &mut notes);
        for delay in ring.inter_ring_delay.values_mut() {
            clamp_secs(delay, "expanding_ring.inter_ring_delay", &mut notes);
        }
        for secs in ring.expand_secs.values_mut() {
            clamp_secs(secs, "expanding_ring.expand_secs", &mut notes);
        }

        let adds = &mut self.summon_adds;
        clamp_count(&mut adds.count, "summon_adds.count", &mut notes);
        if adds.max_radius < adds.min_radius {
            notes.push(format!(
                "summon_adds.max_radius: {} -> {}",
                adds.max_radius, adds.min_radius
            ));
            adds.max_radius = adds.min_radius;
        }
        clamp_secs(&mut adds.telegraph_secs, "summon_adds.telegraph_secs", &mut notes);

        notes
    }
}

fn clamp_span(span: &mut Span, label: &str, notes: &mut Vec<String>) {
    if span.max < span.min {
        notes.push(format!("{label}.max: {} -> {}", span.max, span.min));
        span.max = span.min;
    }
}

fn clamp_count(span: &mut CountSpan, label: &str, notes: &mut Vec<String>) {
    if span.max < span.min {
        notes.push(format!("{label}.max: {} -> {}", span.max, span.min));
        span.max = span.min;
    }
}

fn clamp_secs(value: &mut f32, label: &str, notes: &mut Vec<String>) {
    if *value < 0.0 || value.is_nan() {
        notes.push(format!("{label}: {} -> 0", value));
        *value = 0.0;
    }
}

/// Raise anything below `floor` (or NaN) to `floor`.
fn clamp_floor(value: &mut f32, floor: f32, label: &str, notes: &mut Vec<String>) {
    if *value < floor || value.is_nan() {
        notes.push(format!("{label}: {} -> {floor}", value));
        *value = floor;
    }
}
