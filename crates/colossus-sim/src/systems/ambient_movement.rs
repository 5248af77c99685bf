//! Boss ambient movement: a slow chase toward the player between attacks.

use colossus_core::constants::BOSS_CHASE_STOP_DISTANCE;
use colossus_core::types::Vec2;

use crate::actors::Boss;

/// Close in on `player_position` unless the director has suppressed movement.
pub fn run(boss: &mut Boss, player_position: Vec2, dt: f32) {
    if !boss.ambient_movement || !boss.is_alive() {
        return;
    }

    let to_player = player_position - boss.position;
    let distance = to_player.length();
    if distance <= f32::EPSILON {
        return;
    }
    let dir = to_player / distance;
    boss.facing = dir;

    let step = (boss.chase_speed * dt).min(distance - BOSS_CHASE_STOP_DISTANCE);
    if step > 0.0 {
        boss.position += dir * step;
    }
}
