//! AimedSnipe: a short burst fired at a point locked when the telegraph starts.

use colossus_core::constants::{TELEGRAPH_LINE_WIDTH, TELEGRAPH_SNIPE_COLOR};
use colossus_core::types::{Countdown, TelegraphDescriptor, Vec2};

use super::{PatternCtx, PatternStep};
use crate::geometry::direction_or_default;

#[derive(Debug)]
enum Stage {
    Telegraph(Countdown),
    /// Waiting out the gap before the next shot.
    Burst(Countdown),
}

#[derive(Debug)]
pub struct AimedSnipe {
    locked_point: Vec2,
    shots_left: u32,
    gap_secs: f32,
    speed: f32,
    damage: f32,
    stage: Stage,
}

impl AimedSnipe {
    pub fn begin(ctx: &mut PatternCtx<'_, '_>) -> Result<Self, String> {
        if ctx.host.projectiles.is_none() {
            return Err("no projectile factory".to_string());
        }
        let target = ctx.target_snapshot().ok_or("no target to aim at")?;
        let cfg = &ctx.config.aimed_snipe;
        let origin = ctx.host.boss.position();

        ctx.telegraphs.spawn(TelegraphDescriptor::line(
            origin,
            target.position,
            TELEGRAPH_SNIPE_COLOR,
            TELEGRAPH_LINE_WIDTH,
            cfg.telegraph_secs,
        ));

        Ok(Self {
            locked_point: target.position,
            shots_left: cfg.burst_count,
            gap_secs: cfg.shot_gap.get(ctx.phase),
            speed: cfg.projectile_speed.get(ctx.phase),
            damage: cfg.damage,
            stage: Stage::Telegraph(Countdown::new(cfg.telegraph_secs)),
        })
    }

    pub fn is_telegraphing(&self) -> bool {
        matches!(&self.stage, Stage::Telegraph(t) if !t.is_done())
    }

    pub fn tick(&mut self, dt: f32, ctx: &mut PatternCtx<'_, '_>) -> Result<PatternStep, String> {
        let ready = match &mut self.stage {
            Stage::Telegraph(timer) | Stage::Burst(timer) => timer.tick(dt),
        };
        if !ready {
            return Ok(PatternStep::Running);
        }

        if self.shots_left > 0 {
            self.fire(ctx)?;
        }
        if self.shots_left == 0 {
            return Ok(PatternStep::DONE);
        }
        self.stage = Stage::Burst(Countdown::new(self.gap_secs));
        Ok(PatternStep::Running)
    }

    /// Each shot re-aims from the boss's current position at the locked point.
    fn fire(&mut self, ctx: &mut PatternCtx<'_, '_>) -> Result<(), String> {
        let origin = ctx.host.boss.position();
        let dir = direction_or_default(self.locked_point - origin);
        let factory = ctx
            .host
            .projectiles
            .as_deref_mut()
            .ok_or("projectile factory went away")?;
        factory.spawn(origin, dir, self.speed, self.damage)?;
        self.shots_left -= 1;
        Ok(())
    }
}
