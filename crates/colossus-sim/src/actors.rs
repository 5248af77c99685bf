//! The two singleton actors of an encounter: the boss and the player.
//!
//! They live outside the ECS world so the director can borrow them as
//! collaborators while systems iterate the world.

use colossus_core::constants::*;
use colossus_core::state::{BossView, PlayerView};
use colossus_core::types::Vec2;
use colossus_director::{BossActor, Target};

#[derive(Debug, Clone)]
pub struct Boss {
    pub position: Vec2,
    pub facing: Vec2,
    pub health: f32,
    pub max_health: f32,
    /// Ambient chase allowed; switched off by the director during a dash.
    pub ambient_movement: bool,
    pub chase_speed: f32,
}

impl Default for Boss {
    fn default() -> Self {
        Self {
            position: BOSS_SPAWN,
            facing: DEFAULT_AXIS,
            health: BOSS_MAX_HEALTH,
            max_health: BOSS_MAX_HEALTH,
            ambient_movement: true,
            chase_speed: BOSS_CHASE_SPEED,
        }
    }
}

impl Boss {
    pub fn take_damage(&mut self, amount: f32) {
        self.health = (self.health - amount.max(0.0)).max(0.0);
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn view(&self) -> BossView {
        BossView {
            position: self.position,
            facing: self.facing,
            health: self.health,
            max_health: self.max_health,
            ambient_movement: self.ambient_movement,
        }
    }
}

impl BossActor for Boss {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn facing(&self) -> Vec2 {
        self.facing
    }

    fn health(&self) -> f32 {
        self.health
    }

    fn max_health(&self) -> f32 {
        self.max_health
    }

    fn set_ambient_movement(&mut self, enabled: bool) {
        self.ambient_movement = enabled;
    }
}

/// The player-controlled target.
#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec2,
    /// External velocity from knockback; decays over time.
    pub velocity: Vec2,
    /// Steering input, length at most 1.
    pub move_input: Vec2,
    /// Unit direction of the most recent voluntary movement.
    pub last_move: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub mass: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: PLAYER_SPAWN,
            velocity: Vec2::ZERO,
            move_input: Vec2::ZERO,
            last_move: Vec2::ZERO,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            mass: PLAYER_MASS,
        }
    }
}

impl Player {
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Velocity actually applied this tick: steering plus knockback.
    pub fn effective_velocity(&self) -> Vec2 {
        self.move_input * PLAYER_MOVE_SPEED + self.velocity
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            position: self.position,
            velocity: self.effective_velocity(),
            health: self.health,
            max_health: self.max_health,
        }
    }
}

impl Target for Player {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn last_move_direction(&self) -> Vec2 {
        self.last_move
    }

    fn apply_damage(&mut self, amount: f32) {
        self.health = (self.health - amount.max(0.0)).max(0.0);
    }

    fn apply_impulse(&mut self, direction: Vec2, magnitude: f32) -> bool {
        if self.mass <= 0.0 {
            return false;
        }
        self.velocity += direction * (magnitude / self.mass);
        true
    }

    fn add_velocity(&mut self, delta: Vec2) {
        self.velocity += delta;
    }
}
