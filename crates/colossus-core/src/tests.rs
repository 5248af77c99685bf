use crate::commands::EncounterCommand;
use crate::config::{CountSpan, DirectorConfig, PatternWeights, PhaseTable, Span};
use crate::constants::{MIN_CONFIG_EXTENT, MIN_CONFIG_SPEED};
use crate::enums::*;
use crate::events::EncounterEvent;
use crate::state::EncounterSnapshot;
use crate::types::{Countdown, SimTime, TelegraphDescriptor, TelegraphShape, Vec2};

// ---- Phase resolution ----

#[test]
fn test_phase_boundaries() {
    assert_eq!(Phase::from_health_ratio(0.61), Phase::Early);
    assert_eq!(Phase::from_health_ratio(0.60), Phase::Mid);
    assert_eq!(Phase::from_health_ratio(0.26), Phase::Mid);
    assert_eq!(Phase::from_health_ratio(0.25), Phase::Enraged);
    assert_eq!(Phase::from_health_ratio(0.0), Phase::Enraged);
    assert_eq!(Phase::from_health_ratio(1.0), Phase::Early);
}

#[test]
fn test_phase_from_health_handles_zero_max() {
    assert_eq!(Phase::from_health(50.0, 0.0), Phase::Enraged);
    assert_eq!(Phase::from_health(900.0, 1000.0), Phase::Early);
    assert_eq!(Phase::from_health(600.0, 1000.0), Phase::Mid);
}

#[test]
fn test_pattern_order_is_fixed() {
    assert_eq!(
        Pattern::ALL,
        [
            Pattern::FanBurst,
            Pattern::AimedSnipe,
            Pattern::LinearDash,
            Pattern::ExpandingRing,
            Pattern::SummonAdds,
        ]
    );
}

// ---- Countdown ----

#[test]
fn test_countdown_completes_after_exact_ticks() {
    let dt = 1.0 / 16.0;
    let mut timer = Countdown::new(0.5);
    let mut ticks = 0;
    while !timer.tick(dt) {
        ticks += 1;
        assert!(ticks < 100, "countdown never finished");
    }
    assert_eq!(ticks + 1, 8);
}

#[test]
fn test_countdown_zero_is_done_immediately() {
    assert!(Countdown::new(0.0).is_done());
    assert!(Countdown::new(-1.0).is_done());
    assert_eq!(Countdown::new(-1.0).remaining(), 0.0);
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    time.advance(0.25);
    time.advance(0.25);
    assert_eq!(time.tick, 2);
    assert!((time.elapsed_secs - 0.5).abs() < 1e-9);
}

// ---- Config ----

#[test]
fn test_default_config_validates_clean() {
    let mut config = DirectorConfig::default();
    let notes = config.validate();
    assert!(notes.is_empty(), "unexpected corrections: {notes:?}");
    assert_eq!(config, DirectorConfig::default());
}

#[test]
fn test_validate_raises_inverted_ranges() {
    let mut config = DirectorConfig::default();
    config.recovery.mid = Span::new(0.9, 0.3);
    config.fan_burst.shot_count = CountSpan::new(6, 2);
    config.linear_dash.min_distance = 5.0;
    config.linear_dash.max_distance = 1.0;
    config.expanding_ring.start_radius = 3.0;
    config.expanding_ring.end_radius = 1.0;
    config.summon_adds.min_radius = 4.0;
    config.summon_adds.max_radius = 2.0;
    config.weights.early.fan_burst = -1.0;

    let notes = config.validate();
    assert_eq!(notes.len(), 6, "notes: {notes:?}");
    assert_eq!(config.recovery.mid, Span::new(0.9, 0.9));
    assert_eq!(config.fan_burst.shot_count, CountSpan::new(6, 6));
    assert_eq!(config.linear_dash.max_distance, 5.0);
    assert_eq!(config.expanding_ring.end_radius, 3.0);
    assert_eq!(config.summon_adds.max_radius, 4.0);
    assert_eq!(config.weights.early.fan_burst, 0.0);
}

#[test]
fn test_validate_floors_speeds_and_extents() {
    let json = r#"{
        "linear_dash": { "speed": { "early": 0, "mid": -4, "enraged": 20 }, "hit_radius": -1 },
        "fan_burst": { "projectile_speed": { "early": 0, "mid": 8.5, "enraged": 10 } },
        "aimed_snipe": { "projectile_speed": { "early": 11, "mid": -13, "enraged": 15 } },
        "expanding_ring": { "thickness": 0 }
    }"#;
    let mut config = DirectorConfig::from_json(json).unwrap();
    let notes = config.validate();
    assert_eq!(notes.len(), 6, "notes: {notes:?}");
    assert_eq!(
        config.linear_dash.speed,
        PhaseTable::new(MIN_CONFIG_SPEED, MIN_CONFIG_SPEED, 20.0)
    );
    assert_eq!(config.linear_dash.hit_radius, MIN_CONFIG_EXTENT);
    assert_eq!(config.fan_burst.projectile_speed.early, MIN_CONFIG_SPEED);
    assert_eq!(config.aimed_snipe.projectile_speed.mid, MIN_CONFIG_SPEED);
    assert_eq!(config.expanding_ring.thickness, MIN_CONFIG_EXTENT);
    assert!(notes.iter().any(|n| n.starts_with("linear_dash.speed")));

    // A second pass has nothing left to fix.
    assert!(config.validate().is_empty());
}

#[test]
fn test_config_partial_json_override() {
    let json = r#"{
        "opening_delay_secs": 0.5,
        "linear_dash": { "max_distance": 12.0 }
    }"#;
    let config = DirectorConfig::from_json(json).unwrap();
    assert_eq!(config.opening_delay_secs, 0.5);
    assert_eq!(config.linear_dash.max_distance, 12.0);
    // Untouched fields keep their defaults.
    assert_eq!(config.linear_dash.min_distance, 3.0);
    assert_eq!(config.recovery.early, Span::new(0.80, 1.05));
}

#[test]
fn test_config_bad_json_is_an_error() {
    let err = DirectorConfig::from_json("{ not json").unwrap_err();
    assert!(err.starts_with("invalid director config"));
}

#[test]
fn test_early_weights_exclude_dash_and_adds() {
    let config = DirectorConfig::default();
    let early = config.weights.early;
    assert_eq!(early.weight(Pattern::LinearDash), 0.0);
    assert_eq!(early.weight(Pattern::SummonAdds), 0.0);
    assert_eq!(early.positive_count(), 3);
    assert!((early.total() - 1.0).abs() < 1e-6);
    assert_eq!(config.weights.mid.positive_count(), 5);
    assert_eq!(config.weights.enraged.positive_count(), 5);
}

#[test]
fn test_weights_only() {
    let weights = PatternWeights::only(Pattern::ExpandingRing);
    assert_eq!(weights.positive_count(), 1);
    assert_eq!(weights.weight(Pattern::ExpandingRing), 1.0);
}

// ---- Serialization ----

#[test]
fn test_command_serde_tagged() {
    let cmd = EncounterCommand::MovePlayer {
        direction: Vec2::new(1.0, 0.0),
    };
    let json = serde_json::to_string(&cmd).unwrap();
    assert!(json.contains("\"type\":\"MovePlayer\""), "json: {json}");
    let back: EncounterCommand = serde_json::from_str(&json).unwrap();
    match back {
        EncounterCommand::MovePlayer { direction } => assert_eq!(direction, Vec2::X),
        other => panic!("wrong command: {other:?}"),
    }
}

#[test]
fn test_event_serde() {
    let event = EncounterEvent::PhaseChanged {
        from: Some(Phase::Early),
        to: Phase::Mid,
    };
    let json = serde_json::to_string(&event).unwrap();
    let back: EncounterEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(event, back);
}

#[test]
fn test_telegraph_descriptor_shape_tag() {
    let desc = TelegraphDescriptor::circle(
        Vec2::ZERO,
        2.0,
        crate::constants::TELEGRAPH_RING_COLOR,
        0.1,
        0.8,
    );
    let json = serde_json::to_string(&desc).unwrap();
    assert!(json.contains("\"shape\":\"Circle\""), "json: {json}");
    assert!(matches!(desc.shape, TelegraphShape::Circle { radius, .. } if radius == 2.0));
}

#[test]
fn test_empty_snapshot_serializes() {
    let snap = EncounterSnapshot::default();
    let json = serde_json::to_string(&snap).unwrap();
    assert!(json.len() < 1024);
}
