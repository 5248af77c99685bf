//! Spawn flush: moves queued director requests into the ECS world.

use hecs::World;

use colossus_core::components::{Kinematics, Projectile, RangedAttack, SummonedAdd};
use colossus_core::constants::*;

use crate::spawn_queue::{AddQueue, HazardQueue, ProjectileQueue};

/// Spawn everything the director queued this tick.
pub fn run(
    world: &mut World,
    projectiles: &mut ProjectileQueue,
    adds: &mut AddQueue,
    hazards: &mut HazardQueue,
    next_add_id: &mut u32,
) {
    for shot in projectiles.drain() {
        world.spawn((
            Kinematics {
                position: shot.origin,
                velocity: shot.velocity,
            },
            Projectile {
                damage: shot.damage,
                ttl_secs: PROJECTILE_LIFETIME_SECS,
            },
        ));
    }

    for shockwave in hazards.drain() {
        world.spawn((shockwave,));
    }

    for add in adds.drain() {
        let health = ADD_BASE_HEALTH * add.hp_multiplier.max(0.0);
        let body = (
            Kinematics {
                position: add.position,
                velocity: glam::Vec2::ZERO,
            },
            SummonedAdd {
                id: *next_add_id,
                health,
                max_health: health,
                speed: ADD_BASE_SPEED * add.speed_multiplier.max(0.0),
                contact_damage: ADD_CONTACT_DAMAGE,
                contact_cooldown_secs: 0.0,
            },
        );
        *next_add_id += 1;

        if add.ranged {
            let entity = world.spawn(body);
            let _ = world.insert_one(
                entity,
                RangedAttack {
                    interval_secs: ADD_RANGED_INTERVAL_SECS,
                    cooldown_secs: ADD_RANGED_INTERVAL_SECS,
                    speed: ADD_RANGED_SPEED,
                    damage: ADD_RANGED_DAMAGE,
                },
            );
        } else {
            world.spawn(body);
        }
    }
}
