//! Encounter engine: a headless boss fight driven by the attack director.
//!
//! `EncounterEngine` owns the hecs world, the boss and player actors and the
//! director. It processes queued commands, runs every system in a fixed
//! order and produces an `EncounterSnapshot` per tick. Nothing here touches
//! wall-clock time, so a seed fully determines a run.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use colossus_core::commands::EncounterCommand;
use colossus_core::components::{Projectile, SummonedAdd};
use colossus_core::config::DirectorConfig;
use colossus_core::constants::{ARENA_RADIUS, DT, MAX_ADDS, MAX_PROJECTILES};
use colossus_core::enums::EncounterPhase;
use colossus_core::events::EncounterEvent;
use colossus_core::state::EncounterSnapshot;
use colossus_core::types::{DifficultyMultiplier, SimTime};
use colossus_director::{Director, Host, LogFacade, Target};

use crate::actors::{Boss, Player};
use crate::spawn_queue::{AddQueue, HazardQueue, ProjectileQueue};
use crate::systems;

/// Configuration for a new encounter. Deserializes with defaults, so a JSON
/// file only needs the fields it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same encounter.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f32,
    /// Unscaled seconds per tick.
    pub dt: f32,
    pub director: DirectorConfig,
    pub arena_radius: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            dt: DT,
            director: DirectorConfig::default(),
            arena_radius: ARENA_RADIUS,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid encounter config: {e}"))
    }
}

pub struct EncounterEngine {
    world: World,
    time: SimTime,
    phase: EncounterPhase,
    time_scale: f32,
    dt: f32,
    arena_radius: f32,
    combat_active: bool,
    difficulty: Option<DifficultyMultiplier>,
    director: Director,
    boss: Boss,
    player: Player,
    projectile_queue: ProjectileQueue,
    add_queue: AddQueue,
    hazard_queue: HazardQueue,
    next_add_id: u32,
    command_queue: VecDeque<EncounterCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<EncounterEvent>,
}

impl EncounterEngine {
    pub fn new(config: SimConfig) -> Self {
        let director = Director::new(
            config.director,
            ChaCha8Rng::seed_from_u64(config.seed),
            Box::new(LogFacade),
        );
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: EncounterPhase::default(),
            time_scale: config.time_scale.clamp(0.0, 4.0),
            dt: config.dt.max(0.0),
            arena_radius: config.arena_radius,
            combat_active: true,
            difficulty: None,
            director,
            boss: Boss::default(),
            player: Player::default(),
            projectile_queue: ProjectileQueue::new(MAX_PROJECTILES),
            add_queue: AddQueue::new(MAX_ADDS),
            hazard_queue: HazardQueue::default(),
            next_add_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: EncounterCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = EncounterCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the encounter by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> EncounterSnapshot {
        self.process_commands();

        if self.phase == EncounterPhase::Active {
            let dt = self.dt * self.time_scale;
            if dt > 0.0 {
                self.run_systems(dt);
                self.time.advance(dt);
            }
        }

        self.events.extend(self.director.drain_events());
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.boss,
            &self.player,
            &self.director,
            events,
        )
    }

    pub fn phase(&self) -> EncounterPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn director(&self) -> &Director {
        &self.director
    }

    pub fn boss(&self) -> &Boss {
        &self.boss
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: EncounterCommand) {
        match command {
            EncounterCommand::StartEncounter => {
                if matches!(
                    self.phase,
                    EncounterPhase::Setup | EncounterPhase::Victory | EncounterPhase::Defeat
                ) {
                    self.reset_encounter();
                    self.phase = EncounterPhase::Active;
                    self.director.start();
                    log::info!(target: "colossus::sim", "encounter started");
                }
            }
            EncounterCommand::Pause => {
                if self.phase == EncounterPhase::Active {
                    self.phase = EncounterPhase::Paused;
                }
            }
            EncounterCommand::Resume => {
                if self.phase == EncounterPhase::Paused {
                    self.phase = EncounterPhase::Active;
                }
            }
            EncounterCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            EncounterCommand::SetCombatActive { active } => {
                self.combat_active = active;
            }
            EncounterCommand::MovePlayer { direction } => {
                if direction.is_finite() {
                    self.player.move_input = direction.clamp_length_max(1.0);
                }
            }
            EncounterCommand::DamageBoss { amount } => {
                if self.in_progress() {
                    self.boss.take_damage(amount);
                    self.check_outcome();
                }
            }
            EncounterCommand::SetDifficulty { hp, speed } => {
                self.difficulty = Some(DifficultyMultiplier {
                    hp: hp.max(0.0),
                    speed: speed.max(0.0),
                });
            }
            EncounterCommand::StopDirector => {
                self.director.stop(&mut self.boss);
            }
            EncounterCommand::RestartDirector => {
                self.director.stop(&mut self.boss);
                if self.in_progress() && self.boss.is_alive() {
                    self.director.start();
                } else {
                    log::warn!(target: "colossus::sim", "restart ignored: no encounter in progress");
                }
            }
        }
    }

    fn in_progress(&self) -> bool {
        matches!(self.phase, EncounterPhase::Active | EncounterPhase::Paused)
    }

    /// Fresh actors and an empty world for a new attempt.
    fn reset_encounter(&mut self) {
        self.director.stop(&mut self.boss);
        self.world.clear();
        self.boss = Boss::default();
        self.player = Player::default();
        self.projectile_queue.clear();
        self.add_queue.clear();
        self.hazard_queue.clear();
        self.next_add_id = 0;
        self.time = SimTime::default();
        self.combat_active = true;
    }

    fn run_systems(&mut self, dt: f32) {
        // 1. Director
        self.projectile_queue
            .set_live(self.world.query_mut::<&Projectile>().into_iter().count());
        self.add_queue
            .set_live(self.world.query_mut::<&SummonedAdd>().into_iter().count());
        {
            let target: Option<&mut dyn Target> = if self.player.is_alive() {
                Some(&mut self.player)
            } else {
                None
            };
            let mut host = Host {
                gameplay_active: self.combat_active,
                boss: &mut self.boss,
                target,
                projectiles: Some(&mut self.projectile_queue),
                adds: Some(&mut self.add_queue),
                hazards: Some(&mut self.hazard_queue),
                difficulty: self.difficulty,
            };
            self.director.tick(dt, &mut host);
        }
        self.events.extend(self.director.drain_events());

        // 2. Spawn flush
        systems::spawning::run(
            &mut self.world,
            &mut self.projectile_queue,
            &mut self.add_queue,
            &mut self.hazard_queue,
            &mut self.next_add_id,
        );
        // 3. Boss ambient chase
        systems::ambient_movement::run(&mut self.boss, self.player.position, dt);
        // 4. Player integration
        systems::player::run(&mut self.player, dt, self.arena_radius);
        // 5. Projectiles
        systems::projectiles::run(&mut self.world, &mut self.player, dt, &mut self.events);
        // 6. Shockwaves
        systems::shockwaves::run(&mut self.world, &mut self.player, dt, &mut self.events);
        // 7. Adds
        systems::adds::run(&mut self.world, &mut self.player, dt, &mut self.events);
        // 8. Cleanup
        systems::cleanup::run(&mut self.world, self.arena_radius, &mut self.despawn_buffer);
        // 9. Outcome
        self.check_outcome();
    }

    /// Boss or player death ends the encounter and stops the director.
    fn check_outcome(&mut self) {
        if !self.boss.is_alive() {
            self.director.stop(&mut self.boss);
            self.phase = EncounterPhase::Victory;
            self.events.push(EncounterEvent::BossDefeated);
            log::info!(target: "colossus::sim", "boss defeated at tick {}", self.time.tick);
        } else if !self.player.is_alive() {
            self.director.stop(&mut self.boss);
            self.phase = EncounterPhase::Defeat;
            self.events.push(EncounterEvent::TargetDefeated);
            log::info!(target: "colossus::sim", "player defeated at tick {}", self.time.tick);
        }
    }
}
