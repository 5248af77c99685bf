//! Snapshot system: builds an EncounterSnapshot from the world and actors.
//!
//! Read-only; never modifies the world.

use hecs::World;

use colossus_core::components::{Kinematics, Projectile, RangedAttack, SummonedAdd};
use colossus_core::enums::EncounterPhase;
use colossus_core::events::EncounterEvent;
use colossus_core::state::*;
use colossus_core::types::SimTime;
use colossus_director::{Director, Shockwave};

use crate::actors::{Boss, Player};

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: EncounterPhase,
    boss: &Boss,
    player: &Player,
    director: &Director,
    events: Vec<EncounterEvent>,
) -> EncounterSnapshot {
    EncounterSnapshot {
        time: *time,
        phase,
        boss: boss.view(),
        player: player.view(),
        director: DirectorView {
            state: director.state(),
            phase: director.phase(),
            last_pattern: director.last_pattern(),
        },
        telegraphs: build_telegraphs(director),
        projectiles: build_projectiles(world),
        shockwaves: build_shockwaves(world),
        adds: build_adds(world),
        events,
    }
}

fn build_telegraphs(director: &Director) -> Vec<TelegraphView> {
    director
        .telegraphs()
        .iter()
        .map(|t| TelegraphView {
            id: t.id.0,
            descriptor: t.descriptor,
            remaining_secs: t.remaining_secs(),
        })
        .collect()
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Kinematics, &Projectile)>()
        .iter()
        .map(|(_, (kin, _))| ProjectileView {
            position: kin.position,
            velocity: kin.velocity,
        })
        .collect()
}

fn build_shockwaves(world: &World) -> Vec<ShockwaveView> {
    world
        .query::<&Shockwave>()
        .iter()
        .map(|(_, sw)| ShockwaveView {
            center: sw.center,
            radius: sw.current_radius(),
            thickness: sw.thickness,
            progress: sw.progress(),
        })
        .collect()
}

fn build_adds(world: &World) -> Vec<AddView> {
    let mut adds: Vec<AddView> = world
        .query::<(&Kinematics, &SummonedAdd, Option<&RangedAttack>)>()
        .iter()
        .map(|(_, (kin, add, ranged))| AddView {
            id: add.id,
            position: kin.position,
            health: add.health,
            ranged: ranged.is_some(),
        })
        .collect();

    adds.sort_by_key(|a| a.id);
    adds
}
