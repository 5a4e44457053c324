//! Power-up lifecycle: spawn, pickup, activation and expiry

use std::f32::consts::PI;

use super::state::{GameEvent, GameState, HurdleMode, Player, PowerKind, TruckMode};
use crate::circles_overlap;
use crate::tuning::Tuning;

/// Count idle frames toward a spawn, or hand the field pickup to the runner on overlap
pub fn update_power_up(state: &mut GameState, events: &mut Vec<GameEvent>) {
    match &state.power_up {
        None => {
            let player = &state.player;
            if player.pending_power.is_some() || player.truck_active() || player.hurdle_active() {
                return;
            }
            state.power_up_timer += 1;
            if state.power_up_timer > state.tuning.power_up_idle_frames {
                spawn_power_up(state, events);
            }
        }
        Some(power_up) => {
            let reach = state.player.radius + power_up.radius;
            if circles_overlap(state.player.pos, power_up.pos, reach) {
                let kind = power_up.kind;
                collect_power_up(state, kind, events);
            }
        }
    }
}

fn collect_power_up(state: &mut GameState, kind: PowerKind, events: &mut Vec<GameEvent>) {
    state.player.pending_power = Some(kind);
    state.power_up = None;
    state.power_up_timer = 0;
    state.status_text = format!("Grabbed {}!", kind.label());
    log::debug!("Collected {} power-up", kind.label());
    events.push(GameEvent::PowerUpCollected(kind));
}

/// Place a fresh power-up unless one is already on the field
pub fn spawn_power_up(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.power_up.is_some() {
        return;
    }
    let power_up = state.roll_power_up();
    log::debug!(
        "{} power-up spawned at ({:.0}, {:.0})",
        power_up.kind.label(),
        power_up.pos.x,
        power_up.pos.y
    );
    events.push(GameEvent::PowerUpSpawned(power_up.kind));
    state.power_up = Some(power_up);
    state.power_up_timer = 0;
}

/// Turn a pending truck into truck mode. No-op unless a truck is pending.
pub fn activate_truck(player: &mut Player, tuning: &Tuning) -> bool {
    if player.pending_power != Some(PowerKind::Truck) {
        return false;
    }
    player.truck = Some(TruckMode {
        frames_left: tuning.truck_frames as i32,
        charges: tuning.truck_charges,
    });
    player.pending_power = None;
    true
}

/// Turn a pending hurdle into a jump. No-op unless a hurdle is pending.
pub fn activate_hurdle(player: &mut Player, tuning: &Tuning) -> bool {
    if player.pending_power != Some(PowerKind::Hurdle) {
        return false;
    }
    player.hurdle = Some(HurdleMode {
        frames_left: tuning.hurdle_frames as i32,
        arc: 0.0,
    });
    player.pending_power = None;
    true
}

/// Start a spin move (makes the runner unstoppable). No-op while already spinning.
pub fn start_spin(player: &mut Player, tuning: &Tuning) -> bool {
    if player.spin.is_some() {
        return false;
    }
    player.spin = Some(tuning.spin_frames as i32);
    true
}

/// Flip the manual unstoppable switch, returning the new setting
pub fn toggle_unstoppable(player: &mut Player) -> bool {
    player.manual_unstoppable = !player.manual_unstoppable;
    player.manual_unstoppable
}

/// Hurdle height for the frames left in the jump (rises then falls)
#[inline]
pub fn hurdle_height(frames_left: i32, tuning: &Tuning) -> f32 {
    let total = tuning.hurdle_frames.max(1) as f32;
    (frames_left as f32 / total * PI).sin() * tuning.hurdle_peak
}

/// Tick down active powers; returns the status line of the last expiry, if any
pub fn update_power_timers(
    player: &mut Player,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) -> Option<&'static str> {
    let mut status = None;

    if let Some(truck) = player.truck.as_mut() {
        truck.frames_left -= 1;
        if truck.frames_left <= 0 {
            player.truck = None;
            events.push(GameEvent::TruckExpired);
            status = Some("Truck expired");
        }
    }

    if let Some(frames_left) = player.spin.as_mut() {
        *frames_left -= 1;
        if *frames_left <= 0 {
            player.spin = None;
            events.push(GameEvent::SpinSpent);
            status = Some("Spin spent");
        }
    }

    if let Some(hurdle) = player.hurdle.as_mut() {
        hurdle.frames_left -= 1;
        hurdle.arc = hurdle_height(hurdle.frames_left, tuning);
        if hurdle.frames_left <= 0 {
            player.hurdle = None;
            events.push(GameEvent::HurdleLanded);
            status = Some("Back down");
        }
    }

    status
}
