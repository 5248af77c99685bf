//! FanBurst: an evenly spread fan of projectiles.

use rand::Rng;

use colossus_core::constants::{DEFAULT_AXIS, TELEGRAPH_FAN_COLOR, TELEGRAPH_LINE_WIDTH};
use colossus_core::types::{Countdown, TelegraphDescriptor, Vec2};

use super::{PatternCtx, PatternStep, TargetSnapshot};
use crate::geometry::{direction, fan_angles, rotate};

#[derive(Debug)]
pub struct FanBurst {
    directions: Vec<Vec2>,
    speed: f32,
    damage: f32,
    telegraph: Countdown,
}

/// Fan center line: the target's last movement, else the line from the boss
/// to the target, else the default axis.
pub fn fan_facing(target: Option<TargetSnapshot>, boss_position: Vec2) -> Vec2 {
    target
        .and_then(|t| direction(t.last_move).or_else(|| direction(t.position - boss_position)))
        .unwrap_or(DEFAULT_AXIS)
}

/// One unit direction per shot, rotated off `facing`.
pub fn fan_directions(facing: Vec2, count: u32, spread_deg: f32) -> Vec<Vec2> {
    fan_angles(count, spread_deg)
        .into_iter()
        .map(|angle| rotate(facing, angle))
        .collect()
}

impl FanBurst {
    pub fn begin(ctx: &mut PatternCtx<'_, '_>) -> Result<Self, String> {
        if ctx.host.projectiles.is_none() {
            return Err("no projectile factory".to_string());
        }
        let cfg = &ctx.config.fan_burst;
        let origin = ctx.host.boss.position();
        let facing = fan_facing(ctx.target_snapshot(), origin);
        let count = ctx.rng.gen_range(cfg.shot_count.min..=cfg.shot_count.max);
        let directions = fan_directions(facing, count, cfg.spread_deg.get(ctx.phase));

        for dir in &directions {
            ctx.telegraphs.spawn(TelegraphDescriptor::line(
                origin,
                origin + *dir * cfg.telegraph_length,
                TELEGRAPH_FAN_COLOR,
                TELEGRAPH_LINE_WIDTH,
                cfg.telegraph_secs,
            ));
        }

        Ok(Self {
            directions,
            speed: cfg.projectile_speed.get(ctx.phase),
            damage: cfg.damage,
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

        // Shots leave from where the boss is now, not where it telegraphed.
        let origin = ctx.host.boss.position();
        let factory = ctx
            .host
            .projectiles
            .as_deref_mut()
            .ok_or("projectile factory went away")?;
        // A fan fires whole or not at all.
        if let Some(room) = factory.remaining_capacity() {
            if room < self.directions.len() {
                return Err(format!(
                    "projectile capacity {room} too small for a {}-shot fan",
                    self.directions.len()
                ));
            }
        }
        for dir in &self.directions {
            factory.spawn(origin, *dir, self.speed, self.damage)?;
        }
        Ok(PatternStep::DONE)
    }
}
