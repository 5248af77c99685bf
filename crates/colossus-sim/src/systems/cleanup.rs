//! Cleanup system: removes spent projectiles, finished shockwaves and dead adds.

use hecs::{Entity, World};

use colossus_core::components::{Kinematics, Projectile, SummonedAdd};
use colossus_core::constants::ARENA_CLEANUP_MARGIN;
use colossus_director::Shockwave;

/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, arena_radius: f32, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let bound = arena_radius + ARENA_CLEANUP_MARGIN;
    let bound_sq = bound * bound;

    // Expired, spent, or out of the arena.
    for (entity, (kin, projectile)) in world.query_mut::<(&Kinematics, &Projectile)>() {
        if projectile.ttl_secs <= 0.0 || kin.position.length_squared() > bound_sq {
            despawn_buffer.push(entity);
        }
    }

    for (entity, shockwave) in world.query_mut::<&Shockwave>() {
        if shockwave.is_finished() {
            despawn_buffer.push(entity);
        }
    }

    for (entity, add) in world.query_mut::<&SummonedAdd>() {
        if add.health <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
