//! Shockwave expansion. Hazards live in the world and keep running after the
//! pattern that released them, or the whole director, has stopped.

use hecs::World;

use colossus_core::enums::HitSource;
use colossus_core::events::EncounterEvent;
use colossus_director::host::apply_knockback;
use colossus_director::{Shockwave, Target};

use crate::actors::Player;

pub fn run(world: &mut World, player: &mut Player, dt: f32, events: &mut Vec<EncounterEvent>) {
    for (_entity, shockwave) in world.query_mut::<&mut Shockwave>() {
        let target = player.is_alive().then_some(player.position);
        let Some(hit) = shockwave.tick(dt, target) else {
            continue;
        };
        player.apply_damage(hit.damage);
        apply_knockback(player, hit.direction, hit.knockback);
        events.push(EncounterEvent::TargetHit {
            source: HitSource::Shockwave,
            damage: hit.damage,
        });
    }
}
