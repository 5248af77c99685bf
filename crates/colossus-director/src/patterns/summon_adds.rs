//! SummonAdds: melee helpers placed around the target.

use rand::Rng;

use colossus_core::config::CountSpan;
use colossus_core::constants::{TELEGRAPH_CIRCLE_WIDTH, TELEGRAPH_SUMMON_COLOR};
use colossus_core::enums::Phase;
use colossus_core::events::EncounterEvent;
use colossus_core::types::{Countdown, TelegraphDescriptor, Vec2};

use super::{PatternCtx, PatternStep};
use crate::spawn_points::{sample_spawn_points, SpawnRing};

/// Uniform count in [min, max]; Enraged raises the floor by one.
pub fn summon_count<R: Rng + ?Sized>(span: CountSpan, phase: Phase, rng: &mut R) -> u32 {
    let max = span.max.max(span.min);
    let min = match phase {
        Phase::Enraged => (span.min + 1).min(max),
        Phase::Early | Phase::Mid => span.min,
    };
    rng.gen_range(min..=max)
}

#[derive(Debug)]
pub struct SummonAdds {
    points: Vec<Vec2>,
    hp_multiplier: f32,
    speed_multiplier: f32,
    telegraph: Countdown,
}

impl SummonAdds {
    pub fn begin(ctx: &mut PatternCtx<'_, '_>) -> Result<Self, String> {
        if ctx.host.adds.is_none() {
            return Err("no actor factory".to_string());
        }
        let target = ctx.target_snapshot().ok_or("no target to surround")?;
        let cfg = &ctx.config.summon_adds;
        let count = summon_count(cfg.count, ctx.phase, &mut *ctx.rng);
        let ring = SpawnRing {
            min_radius: cfg.min_radius,
            max_radius: cfg.max_radius,
            min_spacing: cfg.min_spacing,
            fallback_radius: cfg.fallback_radius,
        };
        let set = sample_spawn_points(&mut *ctx.rng, target.position, count as usize, &ring);
        if set.used_fallback() {
            ctx.log.event(&format!(
                "summon placement fell back to even ring for {} of {} slots",
                set.fallback_slots, count
            ));
        }

        for point in &set.points {
            ctx.telegraphs.spawn(TelegraphDescriptor::circle(
                *point,
                cfg.marker_radius,
                TELEGRAPH_SUMMON_COLOR,
                TELEGRAPH_CIRCLE_WIDTH,
                cfg.telegraph_secs,
            ));
        }

        let difficulty = ctx.host.difficulty.unwrap_or_default();
        Ok(Self {
            points: set.points,
            hp_multiplier: cfg.hp_multiplier * difficulty.hp,
            speed_multiplier: cfg.speed_multiplier * difficulty.speed,
            telegraph: Countdown::new(cfg.telegraph_secs),
        })
    }

    pub fn is_telegraphing(&self) -> bool {
        !self.telegraph.is_done()
    }

    pub fn tick(&mut self, dt: f32, ctx: &mut PatternCtx<'_, '_>) -> Result<PatternStep, String> {
        if !self.telegraph.tick(dt) {
            return Ok(PatternStep::Running);
        }

        let factory = ctx.host.adds.as_deref_mut().ok_or("actor factory went away")?;
        let mut spawned = 0;
        for point in &self.points {
            match factory.spawn(*point) {
                Ok(handle) => {
                    factory.apply_stat_multipliers(handle, self.hp_multiplier, self.speed_multiplier);
                    factory.disable_ranged_attack(handle);
                    spawned += 1;
                }
                Err(e) => ctx.log.warning(&format!("add spawn at {point} failed: {e}")),
            }
        }

        if spawned > 0 {
            ctx.events.push(EncounterEvent::AddsSummoned { count: spawned });
        }
        Ok(PatternStep::DONE)
    }
}
