//! Summoned adds: chase the player, hit on contact, and fire if still ranged.

use hecs::World;

use colossus_core::components::{Kinematics, Projectile, RangedAttack, SummonedAdd};
use colossus_core::constants::*;
use colossus_core::enums::HitSource;
use colossus_core::events::EncounterEvent;
use colossus_director::geometry::direction_or_default;
use colossus_director::Target;

use crate::actors::Player;

pub fn run(world: &mut World, player: &mut Player, dt: f32, events: &mut Vec<EncounterEvent>) {
    let contact_distance = ADD_RADIUS + PLAYER_RADIUS;

    for (_entity, (kin, add)) in world.query_mut::<(&mut Kinematics, &mut SummonedAdd)>() {
        if add.health <= 0.0 {
            continue;
        }
        let to_player = player.position - kin.position;
        let distance = to_player.length();
        kin.velocity = if distance > contact_distance {
            to_player / distance * add.speed
        } else {
            glam::Vec2::ZERO
        };
        kin.position += kin.velocity * dt;

        add.contact_cooldown_secs = (add.contact_cooldown_secs - dt).max(0.0);
        if player.is_alive()
            && add.contact_cooldown_secs <= 0.0
            && kin.position.distance(player.position) <= contact_distance
        {
            player.apply_damage(add.contact_damage);
            add.contact_cooldown_secs = ADD_CONTACT_COOLDOWN_SECS;
            events.push(EncounterEvent::TargetHit {
                source: HitSource::AddContact,
                damage: add.contact_damage,
            });
        }
    }

    // Collect shots first; spawning inside the query would alias the world.
    let mut shots = Vec::new();
    for (_entity, (kin, add, ranged)) in
        world.query_mut::<(&Kinematics, &SummonedAdd, &mut RangedAttack)>()
    {
        if add.health <= 0.0 || !player.is_alive() {
            continue;
        }
        ranged.cooldown_secs -= dt;
        if ranged.cooldown_secs > 0.0 {
            continue;
        }
        ranged.cooldown_secs += ranged.interval_secs;
        let dir = direction_or_default(player.position - kin.position);
        shots.push((
            Kinematics {
                position: kin.position,
                velocity: dir * ranged.speed,
            },
            Projectile {
                damage: ranged.damage,
                ttl_secs: PROJECTILE_LIFETIME_SECS,
            },
        ));
    }
    for shot in shots {
        world.spawn(shot);
    }
}
