//! Fixed timestep simulation tick
//!
//! Core game loop that advances one frame of the run deterministically.

use super::collision::resolve_contacts;
use super::movement::{Steering, move_player};
use super::powerup::{
    activate_hurdle, activate_truck, start_spin, toggle_unstoppable, update_power_timers,
    update_power_up,
};
use super::progression::advance_run;
use super::pursuit::update_defenders;
use super::state::{GameEvent, GameState, Outcome};

pub const TACKLE_MESSAGE: &str = "Tackled! Game Over.";

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held direction keys
    pub steering: Steering,
    /// Sprint key held
    pub sprint: bool,
    /// Spend a pending truck power (one-shot)
    pub activate_truck: bool,
    /// Spend a pending hurdle power (one-shot)
    pub activate_hurdle: bool,
    /// Spin move (one-shot)
    pub spin: bool,
    /// Flip the unstoppable debug switch (one-shot)
    pub toggle_unstoppable: bool,
    /// Start over (one-shot, honoured even after the run ends)
    pub restart: bool,
}

impl TickInput {
    /// Same held keys with every one-shot action cleared
    pub fn held_only(&self) -> Self {
        Self {
            steering: self.steering,
            sprint: self.sprint,
            ..Default::default()
        }
    }
}

/// Advance the game state by one frame, returning what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.restart {
        state.reset();
        events.push(GameEvent::Restarted);
        return events;
    }

    // Keeps counting after the run ends so the field animations stay alive
    state.tick += 1;

    // Ended runs stay frozen until restarted
    if !state.running() {
        return events;
    }

    apply_actions(state, input, &mut events);

    move_player(&mut state.player, input.steering, input.sprint, &state.tuning);
    update_defenders(
        &mut state.defenders,
        state.player.pos,
        state.difficulty,
        &state.tuning,
    );

    if let Some(status) = update_power_timers(&mut state.player, &state.tuning, &mut events) {
        state.status_text = status.to_string();
    }

    let tackled = resolve_contacts(
        &mut state.player,
        &mut state.defenders,
        &state.tuning,
        &mut events,
    );
    if events.contains(&GameEvent::TruckSpent) {
        state.status_text = "Truck spent".to_string();
    }
    if tackled {
        state.end(Outcome::Loss, TACKLE_MESSAGE);
        return events;
    }

    update_power_up(state, &mut events);
    advance_run(state, &mut events);

    events
}

/// Handle the one-shot key actions before anything moves
fn apply_actions(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    let player = &mut state.player;
    let tuning = &state.tuning;

    if input.activate_truck && activate_truck(player, tuning) {
        state.status_text = "TRUCK MODE!".to_string();
        log::debug!("Truck mode on ({} charges)", player.truck_charges());
        events.push(GameEvent::TruckActivated);
    }
    if input.activate_hurdle && activate_hurdle(player, tuning) {
        state.status_text = "HURDLE!".to_string();
        log::debug!("Hurdle!");
        events.push(GameEvent::HurdleActivated);
    }
    if input.spin && start_spin(player, tuning) {
        state.status_text = "SPIN MOVE!".to_string();
        log::debug!("Spin move");
        events.push(GameEvent::SpinStarted);
    }
    if input.toggle_unstoppable {
        let on = toggle_unstoppable(player);
        state.status_text = if on { "UNSTOPPABLE MODE!" } else { "Back to normal" }.to_string();
        log::debug!("Manual unstoppable: {on}");
        events.push(GameEvent::UnstoppableToggled(on));
    }
}
