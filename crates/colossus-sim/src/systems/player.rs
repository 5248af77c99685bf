//! Player integration: steering plus decaying knockback, kept inside the arena.

use colossus_core::constants::PLAYER_VELOCITY_DAMPING;

use crate::actors::Player;

pub fn run(player: &mut Player, dt: f32, arena_radius: f32) {
    if !player.is_alive() {
        player.velocity = glam::Vec2::ZERO;
        return;
    }

    if let Some(dir) = player.move_input.try_normalize() {
        player.last_move = dir;
    }

    player.position += player.effective_velocity() * dt;
    player.velocity *= PLAYER_VELOCITY_DAMPING.powf(dt);

    if player.position.length() > arena_radius {
        player.position = player.position.clamp_length_max(arena_radius);
    }
}
