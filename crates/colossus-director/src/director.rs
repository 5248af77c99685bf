//! Attack director: the boss's decision loop as an explicit state machine.
//!
//! Each `tick` advances at most one stage. Waits are stored as remaining
//! time, so the loop resumes exactly where it left off and nothing busy-polls:
//!
//! Idle → OpeningDelay → Deciding → pattern (Telegraphing/Executing) → Recovering → Deciding …
//!
//! The director owns its telegraph registry and decision record. Shockwaves
//! and summoned adds are handed to the host and never tracked here.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use colossus_core::config::{DirectorConfig, Span};
use colossus_core::enums::{DirectorState, Pattern, Phase};
use colossus_core::events::EncounterEvent;
use colossus_core::types::Countdown;

use crate::host::{BossActor, DirectorLog, Host, LogFacade};
use crate::patterns::{ActivePattern, PatternCtx, PatternStep};
use crate::selection;
use crate::telegraph::TelegraphRegistry;

/// Transient memory of recent decisions. Cleared on every start and stop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecisionRecord {
    pub last_pattern: Option<Pattern>,
    pub phase: Option<Phase>,
    /// Decision cycles run since the phase last changed.
    pub cycles_in_phase: u32,
}

#[derive(Debug)]
enum Stage {
    Idle,
    OpeningDelay(Countdown),
    Deciding,
    Running(ActivePattern),
    Recovering(Countdown),
}

pub struct Director {
    config: DirectorConfig,
    rng: ChaCha8Rng,
    log: Box<dyn DirectorLog>,
    telegraphs: TelegraphRegistry,
    record: DecisionRecord,
    stage: Stage,
    events: Vec<EncounterEvent>,
}

impl Director {
    /// Build a director. The config is validated here; every correction is
    /// reported to `log` as a warning.
    pub fn new(mut config: DirectorConfig, rng: ChaCha8Rng, mut log: Box<dyn DirectorLog>) -> Self {
        for note in config.validate() {
            log.warning(&format!("config corrected: {note}"));
        }
        Self {
            config,
            rng,
            log,
            telegraphs: TelegraphRegistry::new(),
            record: DecisionRecord::default(),
            stage: Stage::Idle,
            events: Vec::new(),
        }
    }

    /// Director with a seeded RNG that logs through the `log` facade.
    pub fn with_seed(config: DirectorConfig, seed: u64) -> Self {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed), Box::new(LogFacade))
    }

    /// Begin the decision loop from the opening delay with a clean record.
    /// Has no effect while already running.
    pub fn start(&mut self) {
        if !matches!(self.stage, Stage::Idle) {
            self.log.warning("start ignored: director already running");
            return;
        }
        self.record = DecisionRecord::default();
        self.stage = Stage::OpeningDelay(Countdown::new(self.config.opening_delay_secs));
        self.events.push(EncounterEvent::DirectorStarted);
        self.log.event("director started");
    }

    /// Halt the loop, clear every telegraph and undo any movement suppression.
    /// Hazards and adds already in the world are left alone. Idempotent.
    pub fn stop(&mut self, boss: &mut dyn BossActor) {
        if matches!(self.stage, Stage::Idle) && self.telegraphs.is_empty() {
            return;
        }
        if let Stage::Running(active) = &mut self.stage {
            active.abort(boss);
        }
        self.stage = Stage::Idle;
        self.telegraphs.clear();
        self.record = DecisionRecord::default();
        self.events.push(EncounterEvent::DirectorStopped);
        self.log.event("director stopped");
    }

    /// Advance by `dt` seconds of simulation time.
    pub fn tick(&mut self, dt: f32, host: &mut Host<'_>) {
        if matches!(self.stage, Stage::Idle) {
            return;
        }
        self.telegraphs.tick(dt);

        self.stage = match std::mem::replace(&mut self.stage, Stage::Idle) {
            Stage::Idle => Stage::Idle,
            Stage::OpeningDelay(mut timer) => {
                if timer.tick(dt) {
                    self.decide(host)
                } else {
                    Stage::OpeningDelay(timer)
                }
            }
            Stage::Deciding => self.decide(host),
            Stage::Running(active) => self.advance(active, dt, host),
            Stage::Recovering(mut timer) => {
                if timer.tick(dt) {
                    self.decide(host)
                } else {
                    Stage::Recovering(timer)
                }
            }
        };
    }

    pub fn state(&self) -> DirectorState {
        match &self.stage {
            Stage::Idle => DirectorState::Idle,
            Stage::OpeningDelay(_) => DirectorState::OpeningDelay,
            Stage::Deciding => DirectorState::Deciding,
            Stage::Running(active) if active.is_telegraphing() => DirectorState::Telegraphing,
            Stage::Running(_) => DirectorState::Executing,
            Stage::Recovering(_) => DirectorState::Recovering,
        }
    }

    pub fn is_running(&self) -> bool {
        !matches!(self.stage, Stage::Idle)
    }

    pub fn active_pattern(&self) -> Option<Pattern> {
        match &self.stage {
            Stage::Running(active) => Some(active.pattern()),
            _ => None,
        }
    }

    pub fn phase(&self) -> Option<Phase> {
        self.record.phase
    }

    pub fn last_pattern(&self) -> Option<Pattern> {
        self.record.last_pattern
    }

    pub fn record(&self) -> &DecisionRecord {
        &self.record
    }

    pub fn config(&self) -> &DirectorConfig {
        &self.config
    }

    pub fn telegraphs(&self) -> &TelegraphRegistry {
        &self.telegraphs
    }

    /// Take the events emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<EncounterEvent> {
        std::mem::take(&mut self.events)
    }

    /// Attack only while gameplay is live, the boss is alive and there is a target.
    fn gate_open(host: &Host<'_>) -> bool {
        host.gameplay_active && host.boss.health() > 0.0 && host.target.is_some()
    }

    /// One decision cycle: resolve the phase, pick a pattern and start it.
    fn decide(&mut self, host: &mut Host<'_>) -> Stage {
        if !Self::gate_open(host) {
            return Stage::Deciding;
        }

        let phase = Phase::from_health(host.boss.health(), host.boss.max_health());
        self.note_phase(phase);

        let weights = self.config.weights.get(phase);
        let pattern = selection::select(&weights, self.record.last_pattern, &mut self.rng);
        self.record.last_pattern = Some(pattern);
        self.events.push(EncounterEvent::PatternDispatched { pattern, phase });
        log::debug!(target: "colossus::director", "dispatch {} in {:?}", pattern.name(), phase);

        let mut ctx = PatternCtx {
            phase,
            config: &self.config,
            rng: &mut self.rng,
            telegraphs: &mut self.telegraphs,
            log: self.log.as_mut(),
            events: &mut self.events,
            host: &mut *host,
        };
        match ActivePattern::begin(pattern, &mut ctx) {
            Ok(active) => Stage::Running(active),
            Err(reason) => {
                self.report_abort(pattern, reason);
                self.recovery(phase)
            }
        }
    }

    fn advance(&mut self, mut active: ActivePattern, dt: f32, host: &mut Host<'_>) -> Stage {
        let phase = self.record.phase.unwrap_or_default();
        let pattern = active.pattern();

        let mut ctx = PatternCtx {
            phase,
            config: &self.config,
            rng: &mut self.rng,
            telegraphs: &mut self.telegraphs,
            log: self.log.as_mut(),
            events: &mut self.events,
            host: &mut *host,
        };
        match active.tick(dt, &mut ctx) {
            Ok(PatternStep::Running) => Stage::Running(active),
            Ok(PatternStep::Complete { recovery_secs }) => {
                self.events.push(EncounterEvent::PatternCompleted { pattern });
                match recovery_secs {
                    Some(secs) => Stage::Recovering(Countdown::new(secs)),
                    None => self.recovery(phase),
                }
            }
            Err(reason) => {
                active.abort(host.boss);
                self.report_abort(pattern, reason);
                self.recovery(phase)
            }
        }
    }

    fn note_phase(&mut self, phase: Phase) {
        if self.record.phase != Some(phase) {
            let from = self.record.phase;
            match from {
                Some(previous) => self
                    .log
                    .event(&format!("phase transition {previous:?} -> {phase:?}")),
                None => self.log.event(&format!("opening phase {phase:?}")),
            }
            self.events.push(EncounterEvent::PhaseChanged { from, to: phase });
            self.record.phase = Some(phase);
            self.record.cycles_in_phase = 0;
        }
        self.record.cycles_in_phase += 1;
    }

    fn report_abort(&mut self, pattern: Pattern, reason: String) {
        self.log
            .warning(&format!("pattern {} aborted: {reason}", pattern.name()));
        self.events
            .push(EncounterEvent::PatternAborted { pattern, reason });
    }

    /// Recovery wait sampled from the phase range.
    fn recovery(&mut self, phase: Phase) -> Stage {
        let secs = sample_span(&mut self.rng, self.config.recovery.get(phase));
        log::debug!(target: "colossus::director", "recovering {secs:.3}s");
        Stage::Recovering(Countdown::new(secs))
    }
}

/// Uniform value in an inclusive span; a collapsed span yields its minimum.
pub fn sample_span<R: Rng + ?Sized>(rng: &mut R, span: Span) -> f32 {
    if span.max <= span.min {
        span.min
    } else {
        rng.gen_range(span.min..=span.max)
    }
}
