//! Defender pursuit AI
//!
//! Defenders don't chase the runner's current spot directly: each aims a little
//! to its favoured side and a little upfield, and that lead grows with
//! difficulty so later levels close off running lanes.

use glam::Vec2;

use super::state::Defender;
use crate::tuning::Tuning;

/// How far ahead defenders aim at a given difficulty
#[inline]
pub fn lead_factor(difficulty: u32, tuning: &Tuning) -> f32 {
    tuning.lead_base + difficulty as f32 * tuning.lead_per_difficulty
}

/// Point a defender with the given side bias steers toward
pub fn pursuit_target(runner: Vec2, angle_bias: f32, lead: f32, tuning: &Tuning) -> Vec2 {
    Vec2::new(
        runner.x + angle_bias * tuning.lateral_offset * lead,
        runner.y - tuning.upfield_offset * lead,
    )
}

/// Advance every defender one frame: recover if down, otherwise close in
pub fn update_defenders(defenders: &mut [Defender], runner: Vec2, difficulty: u32, tuning: &Tuning) {
    let lead = lead_factor(difficulty, tuning);
    for defender in defenders.iter_mut() {
        if defender.knocked_down {
            defender.recover_timer -= 1;
            if defender.recover_timer <= 0 {
                defender.knocked_down = false;
            }
            continue;
        }

        let target = pursuit_target(runner, defender.angle_bias, lead, tuning);
        let delta = target - defender.pos;
        let distance = delta.length();
        let distance = if distance == 0.0 { 1.0 } else { distance };
        defender.pos += delta / distance * defender.speed;
    }
}
