//! LinearDash: a telegraphed straight charge with swept-segment hit detection.

use colossus_core::constants::{DEFAULT_AXIS, TELEGRAPH_DASH_COLOR, TELEGRAPH_THICK_LINE_WIDTH};
use colossus_core::enums::HitSource;
use colossus_core::events::EncounterEvent;
use colossus_core::types::{Countdown, TelegraphDescriptor, Vec2};

use super::{PatternCtx, PatternStep};
use crate::geometry::{direction, point_segment_distance};
use crate::host::{apply_knockback, BossActor};

/// Clamped straight path from the boss toward the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPath {
    pub start: Vec2,
    pub end: Vec2,
    pub direction: Vec2,
    pub distance: f32,
}

/// Path toward `target`, clamped to [min, max] length. A degenerate aim
/// falls back to `facing`, then to the default axis.
pub fn dash_path(start: Vec2, target: Vec2, facing: Vec2, min: f32, max: f32) -> DashPath {
    let to_target = target - start;
    let direction = direction(to_target)
        .or_else(|| direction(facing))
        .unwrap_or(DEFAULT_AXIS);
    let distance = to_target.length().clamp(min, max.max(min));
    DashPath {
        start,
        end: start + direction * distance,
        direction,
        distance,
    }
}

#[derive(Debug)]
enum Stage {
    Telegraph(Countdown),
    Dashing {
        elapsed: f32,
        duration: f32,
        previous: Vec2,
    },
}

#[derive(Debug)]
pub struct LinearDash {
    path: DashPath,
    speed: f32,
    hit_radius: f32,
    damage: f32,
    knockback: f32,
    recovery_secs: f32,
    suppress_movement: bool,
    movement_suppressed: bool,
    has_hit: bool,
    stage: Stage,
}

impl LinearDash {
    pub fn begin(ctx: &mut PatternCtx<'_, '_>) -> Result<Self, String> {
        let target = ctx.target_snapshot().ok_or("no target to dash at")?;
        let cfg = &ctx.config.linear_dash;
        let boss = &ctx.host.boss;
        let path = dash_path(
            boss.position(),
            target.position,
            boss.facing(),
            cfg.min_distance,
            cfg.max_distance,
        );

        ctx.telegraphs.spawn(TelegraphDescriptor::line(
            path.start,
            path.end,
            TELEGRAPH_DASH_COLOR,
            TELEGRAPH_THICK_LINE_WIDTH,
            cfg.telegraph_secs,
        ));

        Ok(Self {
            path,
            speed: cfg.speed.get(ctx.phase),
            hit_radius: cfg.hit_radius,
            damage: cfg.damage,
            knockback: cfg.knockback,
            recovery_secs: cfg.recovery_secs,
            suppress_movement: cfg.suppress_ambient_movement,
            movement_suppressed: false,
            has_hit: false,
            stage: Stage::Telegraph(Countdown::new(cfg.telegraph_secs)),
        })
    }

    pub fn is_telegraphing(&self) -> bool {
        matches!(&self.stage, Stage::Telegraph(t) if !t.is_done())
    }

    pub fn tick(&mut self, dt: f32, ctx: &mut PatternCtx<'_, '_>) -> Result<PatternStep, String> {
        match &mut self.stage {
            Stage::Telegraph(timer) => {
                // Ambient movement stays on through the telegraph, and the
                // dash always starts from `path.start`, so the boss snaps back
                // to where it was when the dash was aimed.
                if timer.tick(dt) {
                    if self.suppress_movement {
                        ctx.host.boss.set_ambient_movement(false);
                        self.movement_suppressed = true;
                    }
                    self.stage = Stage::Dashing {
                        elapsed: 0.0,
                        duration: self.path.distance / self.speed.max(f32::EPSILON),
                        previous: self.path.start,
                    };
                }
                Ok(PatternStep::Running)
            }
            Stage::Dashing {
                elapsed,
                duration,
                previous,
            } => {
                *elapsed += dt;
                let t = if *duration <= 0.0 {
                    1.0
                } else {
                    (*elapsed / *duration).min(1.0)
                };
                let position = self.path.start.lerp(self.path.end, t);
                ctx.host.boss.set_position(position);

                let swept_from = *previous;
                *previous = position;
                self.check_hit(swept_from, position, ctx);

                if t < 1.0 {
                    return Ok(PatternStep::Running);
                }
                self.restore_movement(ctx.host.boss);
                Ok(PatternStep::Complete {
                    recovery_secs: Some(self.recovery_secs),
                })
            }
        }
    }

    /// Test the target against the segment swept this frame, so a fast dash
    /// cannot step over it between frames.
    fn check_hit(&mut self, from: Vec2, to: Vec2, ctx: &mut PatternCtx<'_, '_>) {
        if self.has_hit {
            return;
        }
        let Some(target) = ctx.host.target.as_deref_mut() else {
            return;
        };
        if point_segment_distance(target.position(), from, to) > self.hit_radius {
            return;
        }

        self.has_hit = true;
        target.apply_damage(self.damage);
        apply_knockback(target, self.path.direction, self.knockback);
        ctx.events.push(EncounterEvent::TargetHit {
            source: HitSource::Dash,
            damage: self.damage,
        });
    }

    fn restore_movement(&mut self, boss: &mut dyn BossActor) {
        if self.movement_suppressed {
            boss.set_ambient_movement(true);
            self.movement_suppressed = false;
        }
    }

    pub fn abort(&mut self, boss: &mut dyn BossActor) {
        self.restore_movement(boss);
    }
}
