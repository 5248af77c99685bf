//! encounter-harness: runs a scripted boss encounter headlessly and prints a summary.
//!
//! Usage:
//!   encounter-harness run --seed 7 --ticks 7200 --dps 12 --config tuning.json
//!   encounter-harness config > tuning.json
//!
//! Set RUST_LOG=info (or colossus::director=debug) to follow the director.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process;

use serde::Serialize;

use colossus_core::commands::EncounterCommand;
use colossus_core::constants::DT;
use colossus_core::enums::EncounterPhase;
use colossus_core::events::EncounterEvent;
use colossus_core::types::Vec2;
use colossus_sim::{EncounterEngine, SimConfig};

/// Ticks between changes of the scripted strafe direction.
const STRAFE_PERIOD_TICKS: u64 = 90;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "config" => cmd_config(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "encounter-harness: COLOSSUS boss encounter runner\n\
         \n\
         Commands:\n\
         \n\
         run       Simulate one encounter and print a JSON summary\n\
         \n\
           --seed <N>       RNG seed (overrides the config file; default: 42)\n\
           --ticks <N>      Maximum ticks to simulate (default: 7200)\n\
           --dps <X>        Damage per second dealt to the boss (default: 40)\n\
           --config <path>  Encounter config JSON; missing fields use defaults\n\
           --still          Keep the player in place instead of strafing\n\
         \n\
         config    Print the default encounter config as JSON\n"
    );
}

fn parse_value<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<T>() {
                return v;
            }
            eprintln!("Warning: ignoring unparsable {flag} {}", args[i + 1]);
        }
    }
    default
}

fn parse_path(args: &[String], flag: &str) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn load_config(path: &PathBuf) -> Result<SimConfig, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    SimConfig::from_json(&text)
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    seed: u64,
    ticks: u64,
    elapsed_secs: f64,
    outcome: EncounterPhase,
    boss_health: f32,
    player_health: f32,
    dispatched: BTreeMap<String, u32>,
    aborted: u32,
    phase_changes: Vec<String>,
    hits: BTreeMap<String, u32>,
    damage_taken: f32,
    adds_summoned: u32,
}

impl Summary {
    fn record(&mut self, event: &EncounterEvent) {
        match event {
            EncounterEvent::PatternDispatched { pattern, .. } => {
                *self.dispatched.entry(pattern.name().to_string()).or_default() += 1;
            }
            EncounterEvent::PatternAborted { .. } => self.aborted += 1,
            EncounterEvent::PhaseChanged { to, .. } => {
                self.phase_changes.push(format!("{to:?} @ {:.2}s", self.elapsed_secs));
            }
            EncounterEvent::TargetHit { source, damage } => {
                *self.hits.entry(format!("{source:?}")).or_default() += 1;
                self.damage_taken += damage;
            }
            EncounterEvent::AddsSummoned { count } => self.adds_summoned += count,
            _ => {}
        }
    }
}

fn cmd_run(args: &[String]) {
    let max_ticks: u64 = parse_value(args, "--ticks", 7200);
    let dps: f32 = parse_value(args, "--dps", 40.0);
    let still = args.iter().any(|a| a == "--still");

    let mut config = match parse_path(args, "--config") {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        None => SimConfig::default(),
    };
    config.seed = parse_value(args, "--seed", config.seed);
    let seed = config.seed;

    let mut engine = EncounterEngine::new(config);
    engine.queue_command(EncounterCommand::StartEncounter);

    let mut summary = Summary {
        seed,
        ..Default::default()
    };

    for tick in 0..max_ticks {
        if !still && tick % STRAFE_PERIOD_TICKS == 0 {
            let side = if (tick / STRAFE_PERIOD_TICKS) % 2 == 0 { 1.0 } else { -1.0 };
            engine.queue_command(EncounterCommand::MovePlayer {
                direction: Vec2::new(side, 0.0),
            });
        }
        if dps > 0.0 {
            engine.queue_command(EncounterCommand::DamageBoss { amount: dps * DT });
        }

        let snap = engine.tick();
        summary.elapsed_secs = snap.time.elapsed_secs;
        for event in &snap.events {
            summary.record(event);
        }
        if matches!(snap.phase, EncounterPhase::Victory | EncounterPhase::Defeat) {
            log::info!("encounter over after {} ticks: {:?}", tick + 1, snap.phase);
            break;
        }
    }

    summary.ticks = engine.time().tick;
    summary.outcome = engine.phase();
    summary.boss_health = engine.boss().health;
    summary.player_health = engine.player().health;

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: cannot serialize summary: {e}");
            process::exit(1);
        }
    }
}

fn cmd_config() {
    let mut config = SimConfig::default();
    for note in config.director.validate() {
        log::warn!("default director config corrected: {note}");
    }
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: cannot serialize config: {e}");
            process::exit(1);
        }
    }
}
