//! Tests for the encounter engine, its systems and the spawn queues.

use colossus_core::commands::EncounterCommand;
use colossus_core::components::{Kinematics, Projectile, RangedAttack, SummonedAdd};
use colossus_core::config::{DirectorConfig, PatternWeights, PhaseTable};
use colossus_core::constants::*;
use colossus_core::enums::*;
use colossus_core::events::EncounterEvent;
use colossus_core::state::EncounterSnapshot;
use colossus_core::types::Vec2;
use colossus_director::{ActorFactory, ProjectileFactory, Shockwave};

use crate::engine::{EncounterEngine, SimConfig};
use crate::spawn_queue::{AddQueue, ProjectileQueue};

fn only(pattern: Pattern) -> DirectorConfig {
    let weights = PatternWeights::only(pattern);
    DirectorConfig {
        weights: PhaseTable::new(weights, weights, weights),
        ..Default::default()
    }
}

fn started(config: SimConfig) -> EncounterEngine {
    let mut engine = EncounterEngine::new(config);
    engine.queue_command(EncounterCommand::StartEncounter);
    engine
}

/// An active encounter whose director never attacks.
fn quiet() -> EncounterEngine {
    let mut engine = EncounterEngine::new(SimConfig::default());
    engine.queue_commands([
        EncounterCommand::StartEncounter,
        EncounterCommand::SetCombatActive { active: false },
    ]);
    engine
}

fn has_event(snap: &EncounterSnapshot, pred: impl Fn(&EncounterEvent) -> bool) -> bool {
    snap.events.iter().any(pred)
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = started(SimConfig {
        seed: 12345,
        ..Default::default()
    });
    let mut engine_b = started(SimConfig {
        seed: 12345,
        ..Default::default()
    });
    engine_a.queue_command(EncounterCommand::MovePlayer {
        direction: Vec2::new(1.0, 0.0),
    });
    engine_b.queue_command(EncounterCommand::MovePlayer {
        direction: Vec2::new(1.0, 0.0),
    });

    for tick in 0..900 {
        if tick == 300 {
            engine_a.queue_command(EncounterCommand::DamageBoss { amount: 700.0 });
            engine_b.queue_command(EncounterCommand::DamageBoss { amount: 700.0 });
        }
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed at tick {tick}");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = started(SimConfig {
        seed: 111,
        ..Default::default()
    });
    let mut engine_b = started(SimConfig {
        seed: 222,
        ..Default::default()
    });

    let mut diverged = false;
    for _ in 0..1200 {
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce divergent output");
}

// ---- Config ----

#[test]
fn test_sim_config_partial_json() {
    let config = SimConfig::from_json(
        r#"{ "seed": 9, "director": { "opening_delay_secs": 0.1 } }"#,
    )
    .unwrap();
    assert_eq!(config.seed, 9);
    assert_eq!(config.arena_radius, ARENA_RADIUS);
    assert_eq!(config.director.opening_delay_secs, 0.1);
    assert_eq!(config.director.fan_burst, DirectorConfig::default().fan_burst);

    let err = SimConfig::from_json("{ \"seed\": \"nine\" }").unwrap_err();
    assert!(err.starts_with("invalid encounter config"));
}

#[test]
fn test_invalid_director_config_is_clamped() {
    let mut director = DirectorConfig::default();
    director.opening_delay_secs = -1.0;
    let mut engine = started(SimConfig {
        director,
        ..Default::default()
    });
    engine.tick();
    assert_eq!(engine.director().config().opening_delay_secs, 0.0);
}

// ---- Encounter flow ----

#[test]
fn test_setup_phase_is_inert() {
    let mut engine = EncounterEngine::new(SimConfig::default());
    for _ in 0..30 {
        let snap = engine.tick();
        assert_eq!(snap.phase, EncounterPhase::Setup);
        assert_eq!(snap.director.state, DirectorState::Idle);
    }
    assert_eq!(engine.time().tick, 0);
}

#[test]
fn test_start_encounter() {
    let mut engine = started(SimConfig::default());
    let snap = engine.tick();
    assert_eq!(snap.phase, EncounterPhase::Active);
    assert_eq!(snap.director.state, DirectorState::OpeningDelay);
    assert!(snap.events.contains(&EncounterEvent::DirectorStarted));
    assert_eq!(snap.boss.health, BOSS_MAX_HEALTH);
    assert_eq!(snap.player.health, PLAYER_MAX_HEALTH);

    // Events are drained once.
    let snap = engine.tick();
    assert!(!snap.events.contains(&EncounterEvent::DirectorStarted));
}

#[test]
fn test_pause_and_resume() {
    let mut engine = started(SimConfig::default());
    for _ in 0..10 {
        engine.tick();
    }
    engine.queue_command(EncounterCommand::Pause);
    let paused = engine.tick();
    assert_eq!(paused.phase, EncounterPhase::Paused);
    let tick_at_pause = engine.time().tick;

    for _ in 0..100 {
        engine.tick();
    }
    assert_eq!(engine.time().tick, tick_at_pause, "Time must not advance while paused");
    assert_eq!(engine.director().state(), DirectorState::OpeningDelay);

    engine.queue_command(EncounterCommand::Resume);
    engine.tick();
    assert_eq!(engine.phase(), EncounterPhase::Active);
    assert_eq!(engine.time().tick, tick_at_pause + 1);
}

#[test]
fn test_time_scale_clamped_and_applied() {
    let mut engine = quiet();
    engine.queue_command(EncounterCommand::SetTimeScale { scale: 10.0 });
    engine.tick();
    assert_eq!(engine.time_scale(), 4.0);
    assert!((engine.time().elapsed_secs - 4.0 * DT as f64).abs() < 1e-6);

    engine.queue_command(EncounterCommand::SetTimeScale { scale: 0.0 });
    let frozen_at = engine.time();
    for _ in 0..20 {
        engine.tick();
    }
    assert_eq!(engine.time(), frozen_at);

    engine.queue_command(EncounterCommand::SetTimeScale { scale: -3.0 });
    engine.tick();
    assert_eq!(engine.time_scale(), 0.0);
}

#[test]
fn test_one_second_is_sixty_ticks() {
    let mut engine = quiet();
    for _ in 0..60 {
        engine.tick();
    }
    assert_eq!(engine.time().tick, 60);
    assert!((engine.time().elapsed_secs - 1.0).abs() < 1e-4);
}

#[test]
fn test_combat_inactive_holds_director() {
    let mut engine = quiet();
    for _ in 0..600 {
        let snap = engine.tick();
        assert!(!has_event(&snap, |e| matches!(e, EncounterEvent::PatternDispatched { .. })));
    }
    assert_eq!(engine.director().state(), DirectorState::Deciding);

    engine.queue_command(EncounterCommand::SetCombatActive { active: true });
    let snap = engine.tick();
    assert!(has_event(&snap, |e| matches!(e, EncounterEvent::PatternDispatched { .. })));
}

#[test]
fn test_restart_director() {
    let mut engine = started(SimConfig::default());
    for _ in 0..200 {
        engine.tick();
    }
    engine.queue_command(EncounterCommand::RestartDirector);
    let snap = engine.tick();
    let stopped = snap.events.iter().position(|e| *e == EncounterEvent::DirectorStopped);
    let restarted = snap.events.iter().position(|e| *e == EncounterEvent::DirectorStarted);
    assert!(stopped.is_some() && restarted.is_some());
    assert!(stopped < restarted);
    assert_eq!(snap.director.last_pattern, None);
}

#[test]
fn test_restart_without_encounter_is_ignored() {
    let mut engine = EncounterEngine::new(SimConfig::default());
    engine.queue_command(EncounterCommand::RestartDirector);
    let snap = engine.tick();
    assert_eq!(snap.director.state, DirectorState::Idle);
    assert!(snap.events.is_empty());
}

// ---- Attacks through the engine ----

#[test]
fn test_fan_burst_telegraphs_then_fires() {
    let mut engine = started(SimConfig {
        director: only(Pattern::FanBurst),
        ..Default::default()
    });

    let mut dispatched_at = None;
    let mut fired_at = None;
    let mut previous: Option<EncounterSnapshot> = None;
    for tick in 0..200 {
        let snap = engine.tick();
        if dispatched_at.is_none()
            && has_event(&snap, |e| matches!(e, EncounterEvent::PatternDispatched { .. }))
        {
            dispatched_at = Some(tick);
            assert!(snap.telegraphs.len() >= 5);
            assert!(snap.projectiles.is_empty());
        }
        if !snap.projectiles.is_empty() {
            fired_at = Some(tick);
            let before = previous.unwrap();
            assert!(before.projectiles.is_empty());
            assert!(!before.telegraphs.is_empty());
            assert_eq!(snap.projectiles.len(), before.telegraphs.len());
            break;
        }
        previous = Some(snap);
    }

    // 0.55 s at 60 Hz.
    assert_eq!(fired_at.unwrap() - dispatched_at.unwrap(), 33);
}

#[test]
fn test_shockwaves_outlive_the_director() {
    let mut engine = started(SimConfig {
        director: only(Pattern::ExpandingRing),
        ..Default::default()
    });

    let mut snap = engine.tick();
    for _ in 0..300 {
        if !snap.shockwaves.is_empty() {
            break;
        }
        snap = engine.tick();
    }
    assert!(!snap.shockwaves.is_empty(), "No shockwave released");
    let radius_before = snap.shockwaves[0].radius;

    engine.queue_command(EncounterCommand::StopDirector);
    let snap = engine.tick();
    assert!(snap.events.contains(&EncounterEvent::DirectorStopped));
    assert_eq!(snap.director.state, DirectorState::Idle);
    assert!(snap.telegraphs.is_empty());
    assert!(!snap.shockwaves.is_empty(), "Stopping must not remove hazards");
    assert!(snap.shockwaves[0].radius > radius_before);

    let mut cleared = false;
    for _ in 0..200 {
        if engine.tick().shockwaves.is_empty() {
            cleared = true;
            break;
        }
    }
    assert!(cleared, "Finished shockwaves should be cleaned up");
}

#[test]
fn test_summoned_adds_are_melee_only() {
    let mut engine = started(SimConfig {
        director: only(Pattern::SummonAdds),
        ..Default::default()
    });
    engine.queue_command(EncounterCommand::SetDifficulty { hp: 2.0, speed: 1.0 });

    let mut adds = Vec::new();
    for _ in 0..300 {
        let snap = engine.tick();
        if let Some(EncounterEvent::AddsSummoned { count }) = snap
            .events
            .iter()
            .find(|e| matches!(e, EncounterEvent::AddsSummoned { .. }))
        {
            assert_eq!(*count as usize, snap.adds.len());
            adds = snap.adds;
            break;
        }
    }

    assert!((2..=3).contains(&adds.len()), "got {} adds", adds.len());
    for add in &adds {
        assert!(!add.ranged);
        // Base 60 x config 0.6 x difficulty 2.0.
        assert!((add.health - 72.0).abs() < 1e-3);
    }
    let ranged = engine.world().query::<&RangedAttack>().iter().count();
    assert_eq!(ranged, 0);
}

#[test]
fn test_dash_suppresses_ambient_chase() {
    let mut engine = started(SimConfig {
        director: only(Pattern::LinearDash),
        ..Default::default()
    });

    let mut suppressed = false;
    let mut restored = false;
    for _ in 0..400 {
        let snap = engine.tick();
        if !snap.boss.ambient_movement {
            suppressed = true;
        } else if suppressed {
            restored = true;
            break;
        }
    }
    assert!(suppressed && restored);
}

// ---- Systems ----

#[test]
fn test_player_movement_and_arena_bound() {
    let mut engine = quiet();
    engine.queue_command(EncounterCommand::MovePlayer {
        direction: Vec2::new(3.0, 0.0),
    });
    for _ in 0..60 {
        engine.tick();
    }
    let player = engine.player();
    assert!((player.position.x - PLAYER_MOVE_SPEED).abs() < 1e-2);
    assert_eq!(player.last_move, Vec2::X);

    for _ in 0..600 {
        engine.tick();
    }
    assert!(engine.player().position.length() <= ARENA_RADIUS + 1e-3);

    // Letting go keeps the last movement direction.
    engine.queue_command(EncounterCommand::MovePlayer { direction: Vec2::ZERO });
    engine.tick();
    assert_eq!(engine.player().last_move, Vec2::X);
}

#[test]
fn test_boss_chase_stops_short() {
    let mut engine = quiet();
    for _ in 0..600 {
        engine.tick();
    }
    let gap = engine.boss().position.distance(engine.player().position);
    assert!((gap - BOSS_CHASE_STOP_DISTANCE).abs() < 1e-2, "gap {gap}");
}

#[test]
fn test_shockwave_hit_applies_impulse() {
    let mut engine = quiet();
    engine.tick();
    let player_pos = engine.player().position;
    let center = player_pos + Vec2::new(2.0, 0.0);
    engine
        .world_mut()
        .spawn((Shockwave::new(center, 2.0, 2.0, 1.0, 0.3, 9.0, 3.0),));

    let snap = engine.tick();
    assert!(has_event(&snap, |e| matches!(
        e,
        EncounterEvent::TargetHit { source: HitSource::Shockwave, .. }
    )));
    assert_eq!(engine.player().health, PLAYER_MAX_HEALTH - 9.0);
    // Knockback 3 over mass 1.5, pointing away from the center.
    assert!((engine.player().velocity - Vec2::new(-2.0, 0.0)).length() < 1e-4);

    // Single hit for the wave's whole life.
    for _ in 0..80 {
        engine.tick();
    }
    assert_eq!(engine.player().health, PLAYER_MAX_HEALTH - 9.0);
}

#[test]
fn test_add_contact_damage_respects_cooldown() {
    let mut engine = quiet();
    engine.tick();
    let player_pos = engine.player().position;
    engine.world_mut().spawn((
        Kinematics {
            position: player_pos,
            velocity: Vec2::ZERO,
        },
        SummonedAdd {
            id: 99,
            health: 10.0,
            max_health: 10.0,
            speed: 0.0,
            contact_damage: 6.0,
            contact_cooldown_secs: 0.0,
        },
    ));

    let snap = engine.tick();
    assert!(has_event(&snap, |e| matches!(
        e,
        EncounterEvent::TargetHit { source: HitSource::AddContact, .. }
    )));
    assert_eq!(engine.player().health, PLAYER_MAX_HEALTH - 6.0);

    for _ in 0..20 {
        engine.tick();
    }
    assert_eq!(engine.player().health, PLAYER_MAX_HEALTH - 6.0);

    for _ in 0..40 {
        engine.tick();
    }
    assert_eq!(engine.player().health, PLAYER_MAX_HEALTH - 12.0);
}

#[test]
fn test_ranged_add_fires_at_player() {
    let mut engine = quiet();
    engine.tick();
    let player_pos = engine.player().position;
    engine.world_mut().spawn((
        Kinematics {
            position: player_pos + Vec2::new(8.0, 0.0),
            velocity: Vec2::ZERO,
        },
        SummonedAdd {
            id: 7,
            health: 10.0,
            max_health: 10.0,
            speed: 0.0,
            contact_damage: 6.0,
            contact_cooldown_secs: 0.0,
        },
        RangedAttack {
            interval_secs: ADD_RANGED_INTERVAL_SECS,
            cooldown_secs: 0.1,
            speed: ADD_RANGED_SPEED,
            damage: ADD_RANGED_DAMAGE,
        },
    ));

    let mut hit = false;
    for _ in 0..180 {
        let snap = engine.tick();
        if has_event(&snap, |e| matches!(
            e,
            EncounterEvent::TargetHit { source: HitSource::Projectile, .. }
        )) {
            hit = true;
            break;
        }
    }
    assert!(hit, "Ranged add never hit the player");
    assert_eq!(engine.player().health, PLAYER_MAX_HEALTH - ADD_RANGED_DAMAGE);
}

#[test]
fn test_expired_projectiles_are_cleaned_up() {
    let mut engine = quiet();
    engine.tick();
    engine.world_mut().spawn((
        Kinematics {
            position: Vec2::new(10.0, 10.0),
            velocity: Vec2::ZERO,
        },
        Projectile {
            damage: 1.0,
            ttl_secs: 0.05,
        },
    ));
    engine.world_mut().spawn((
        Kinematics {
            position: Vec2::new(ARENA_RADIUS + ARENA_CLEANUP_MARGIN + 1.0, 0.0),
            velocity: Vec2::ZERO,
        },
        Projectile {
            damage: 1.0,
            ttl_secs: 10.0,
        },
    ));

    let snap = engine.tick();
    assert_eq!(snap.projectiles.len(), 1, "Out-of-arena projectile should be gone");
    for _ in 0..5 {
        engine.tick();
    }
    let count = engine.world().query::<&Projectile>().iter().count();
    assert_eq!(count, 0);
}

// ---- Outcome ----

#[test]
fn test_boss_death_stops_director() {
    let mut engine = started(SimConfig::default());
    for _ in 0..120 {
        engine.tick();
    }
    engine.queue_command(EncounterCommand::DamageBoss {
        amount: BOSS_MAX_HEALTH + 50.0,
    });
    let snap = engine.tick();
    assert_eq!(snap.phase, EncounterPhase::Victory);
    assert_eq!(snap.boss.health, 0.0);
    assert_eq!(snap.director.state, DirectorState::Idle);
    assert!(snap.telegraphs.is_empty());
    assert!(snap.events.contains(&EncounterEvent::BossDefeated));
    assert!(snap.events.contains(&EncounterEvent::DirectorStopped));

    // A new attempt starts from scratch.
    engine.queue_command(EncounterCommand::StartEncounter);
    let snap = engine.tick();
    assert_eq!(snap.phase, EncounterPhase::Active);
    assert_eq!(snap.boss.health, BOSS_MAX_HEALTH);
}

#[test]
fn test_player_death_is_defeat() {
    let mut engine = quiet();
    engine.tick();
    engine.player_mut().health = 1.0;
    let player_pos = engine.player().position;
    engine.world_mut().spawn((
        Kinematics {
            position: player_pos,
            velocity: Vec2::ZERO,
        },
        Projectile {
            damage: 5.0,
            ttl_secs: 1.0,
        },
    ));

    let snap = engine.tick();
    assert_eq!(snap.phase, EncounterPhase::Defeat);
    assert_eq!(snap.player.health, 0.0);
    assert!(snap.events.contains(&EncounterEvent::TargetDefeated));
    assert!(!engine.director().is_running());
}

#[test]
fn test_damage_ignored_outside_encounter() {
    let mut engine = EncounterEngine::new(SimConfig::default());
    engine.queue_command(EncounterCommand::DamageBoss { amount: 100.0 });
    engine.tick();
    assert_eq!(engine.boss().health, BOSS_MAX_HEALTH);
}

// ---- Spawn queues ----

#[test]
fn test_projectile_queue_refuses_past_limit() {
    let mut queue = ProjectileQueue::new(3);
    queue.set_live(1);
    assert_eq!(queue.remaining_capacity(), Some(2));
    assert!(queue.spawn(Vec2::ZERO, Vec2::X, 2.0, 1.0).is_ok());
    assert!(queue.spawn(Vec2::ZERO, Vec2::X, 2.0, 1.0).is_ok());
    assert_eq!(queue.remaining_capacity(), Some(0));
    assert!(queue.spawn(Vec2::ZERO, Vec2::X, 2.0, 1.0).is_err());

    let drained: Vec<_> = queue.drain().collect();
    assert_eq!(drained.len(), 2);
    assert_eq!(drained[0].velocity, Vec2::new(2.0, 0.0));
}

#[test]
fn test_add_queue_handles_address_pending_adds() {
    let mut queue = AddQueue::new(MAX_ADDS);
    let a = queue.spawn(Vec2::ZERO).unwrap();
    let b = queue.spawn(Vec2::ONE).unwrap();
    queue.apply_stat_multipliers(b, 0.5, 2.0);
    queue.disable_ranged_attack(a);

    let pending: Vec<_> = queue.drain().collect();
    assert!(!pending[0].ranged);
    assert_eq!(pending[0].hp_multiplier, 1.0);
    assert!(pending[1].ranged);
    assert_eq!(pending[1].hp_multiplier, 0.5);
    assert_eq!(pending[1].speed_multiplier, 2.0);
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = started(SimConfig::default());
    for _ in 0..240 {
        engine.tick();
    }
    let snap = engine.tick();
    let json = serde_json::to_string(&snap).unwrap();
    assert!(json.contains("\"director\""));
    let back: EncounterSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.time.tick, snap.time.tick);
    assert_eq!(back.director.state, snap.director.state);
}
