//! Projectile flight and player collision.
//!
//! A projectile that hits is spent in place (ttl zeroed) and removed by cleanup.

use hecs::World;

use colossus_core::components::{Kinematics, Projectile};
use colossus_core::constants::{PLAYER_RADIUS, PROJECTILE_RADIUS};
use colossus_core::enums::HitSource;
use colossus_core::events::EncounterEvent;
use colossus_director::Target;

use crate::actors::Player;

pub fn run(world: &mut World, player: &mut Player, dt: f32, events: &mut Vec<EncounterEvent>) {
    let hit_distance = PLAYER_RADIUS + PROJECTILE_RADIUS;

    for (_entity, (kin, projectile)) in world.query_mut::<(&mut Kinematics, &mut Projectile)>() {
        if projectile.ttl_secs <= 0.0 {
            continue;
        }
        kin.position += kin.velocity * dt;
        projectile.ttl_secs -= dt;

        if player.is_alive() && kin.position.distance(player.position) <= hit_distance {
            player.apply_damage(projectile.damage);
            events.push(EncounterEvent::TargetHit {
                source: HitSource::Projectile,
                damage: projectile.damage,
            });
            projectile.ttl_secs = 0.0;
        }
    }
}
