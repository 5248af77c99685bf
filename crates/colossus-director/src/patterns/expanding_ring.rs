//! ExpandingRing: a volley of shockwaves released from the boss.
//!
//! The executor only paces the releases. Each shockwave is handed to the
//! world and keeps expanding after the executor has returned.

use rand::Rng;

use colossus_core::config::CountSpan;
use colossus_core::constants::{TELEGRAPH_CIRCLE_WIDTH, TELEGRAPH_RING_COLOR};
use colossus_core::enums::Phase;
use colossus_core::types::{Countdown, TelegraphDescriptor};

use super::{PatternCtx, PatternStep};
use crate::shockwave::Shockwave;

/// Early fires the minimum, Enraged the maximum, Mid rolls in between.
pub fn ring_count<R: Rng + ?Sized>(span: CountSpan, phase: Phase, rng: &mut R) -> u32 {
    match phase {
        Phase::Early => span.min,
        Phase::Mid => rng.gen_range(span.min..=span.max.max(span.min)),
        Phase::Enraged => span.max.max(span.min),
    }
}

#[derive(Debug)]
enum Stage {
    Telegraph(Countdown),
    /// Waiting between releases.
    Spacing(Countdown),
}

#[derive(Debug)]
pub struct ExpandingRing {
    rings_left: u32,
    delay_secs: f32,
    expand_secs: f32,
    stage: Stage,
}

impl ExpandingRing {
    pub fn begin(ctx: &mut PatternCtx<'_, '_>) -> Result<Self, String> {
        if ctx.host.hazards.is_none() {
            return Err("no hazard sink".to_string());
        }
        let cfg = &ctx.config.expanding_ring;
        let rings = ring_count(cfg.ring_count, ctx.phase, &mut *ctx.rng);

        ctx.telegraphs.spawn(TelegraphDescriptor::circle(
            ctx.host.boss.position(),
            cfg.start_radius,
            TELEGRAPH_RING_COLOR,
            TELEGRAPH_CIRCLE_WIDTH,
            cfg.telegraph_secs,
        ));

        Ok(Self {
            rings_left: rings,
            delay_secs: cfg.inter_ring_delay.get(ctx.phase),
            expand_secs: cfg.expand_secs.get(ctx.phase),
            stage: Stage::Telegraph(Countdown::new(cfg.telegraph_secs)),
        })
    }

    pub fn is_telegraphing(&self) -> bool {
        matches!(&self.stage, Stage::Telegraph(t) if !t.is_done())
    }

    pub fn tick(&mut self, dt: f32, ctx: &mut PatternCtx<'_, '_>) -> Result<PatternStep, String> {
        let ready = match &mut self.stage {
            Stage::Telegraph(timer) | Stage::Spacing(timer) => timer.tick(dt),
        };
        if !ready {
            return Ok(PatternStep::Running);
        }

        if self.rings_left > 0 {
            self.release(ctx)?;
        }
        if self.rings_left == 0 {
            return Ok(PatternStep::DONE);
        }
        self.stage = Stage::Spacing(Countdown::new(self.delay_secs));
        Ok(PatternStep::Running)
    }

    fn release(&mut self, ctx: &mut PatternCtx<'_, '_>) -> Result<(), String> {
        let cfg = &ctx.config.expanding_ring;
        let shockwave = Shockwave::new(
            ctx.host.boss.position(),
            cfg.start_radius,
            cfg.end_radius,
            self.expand_secs,
            cfg.thickness,
            cfg.damage,
            cfg.knockback,
        );
        let sink = ctx
            .host
            .hazards
            .as_deref_mut()
            .ok_or("hazard sink went away")?;
        sink.spawn_shockwave(shockwave);
        self.rings_left -= 1;
        Ok(())
    }
}
