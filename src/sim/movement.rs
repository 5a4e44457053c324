//! Runner movement and sprint stamina

use glam::Vec2;

use super::state::Player;
use crate::clamp_to_field;
use crate::consts::MAX_SPRINT_ENERGY;
use crate::tuning::Tuning;

/// Held direction keys for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Steering {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Steering {
    /// Unit direction (zero when nothing, or only opposing keys, is held)
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir.normalize_or_zero()
    }
}

/// Move the runner one frame and update sprint energy
pub fn move_player(player: &mut Player, steering: Steering, sprint_held: bool, tuning: &Tuning) {
    player.sprinting = sprint_held && player.sprint_energy > 0.0;
    let speed = if player.sprinting {
        player.sprint_speed
    } else {
        player.speed
    };

    player.pos = clamp_to_field(player.pos + steering.direction() * speed, player.radius);

    if player.sprinting {
        player.sprint_energy = (player.sprint_energy - tuning.sprint_drain).max(0.0);
        if player.sprint_energy == 0.0 {
            player.sprint_cooldown = tuning.sprint_cooldown_frames;
        }
    } else if player.sprint_cooldown == 0 {
        player.sprint_energy = (player.sprint_energy + tuning.sprint_regen).min(MAX_SPRINT_ENERGY);
    }

    if player.sprint_cooldown > 0 && !player.sprinting {
        player.sprint_cooldown -= 1;
    }
}
