//! Game session: owns the run and turns frame time into fixed ticks
//!
//! The browser calls [`Session::step`] from its animation callback; tests and
//! the native binary call it directly with whatever dt they like.

use crate::consts::*;
use crate::platform::{HeldKeys, Key};
use crate::renderer::{DrawCommand, build_scene};
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::tuning::Tuning;
use crate::ui::HudView;

/// Output of one animation frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
    pub hud: HudView,
    /// Everything that happened across this frame's ticks, in order
    pub events: Vec<GameEvent>,
    /// Ticks simulated this frame
    pub ticks: u32,
}

/// One in-memory game session
pub struct Session {
    state: GameState,
    keys: HeldKeys,
    accumulator: f32,
}

impl Session {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: GameState::new(seed, tuning),
            keys: HeldKeys::new(),
            accumulator: 0.0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn key_down(&mut self, key: Key, repeat: bool) {
        self.keys.press(key, repeat);
    }

    pub fn key_up(&mut self, key: Key) {
        self.keys.release(key);
    }

    /// Restart on the next tick (restart button)
    pub fn request_restart(&mut self) {
        self.keys.request_restart();
    }

    /// Window lost focus: forget held keys so the runner doesn't drift
    pub fn release_all(&mut self) {
        self.keys.clear();
    }

    /// Advance by `dt` seconds of wall time and build the frame to draw
    pub fn step(&mut self, dt: f32) -> Frame {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut events = Vec::new();
        let mut ticks = 0;
        while self.accumulator >= SIM_DT && ticks < MAX_SUBSTEPS {
            events.extend(self.tick_once());
            self.accumulator -= SIM_DT;
            ticks += 1;
        }
        if ticks == MAX_SUBSTEPS {
            // Drop the backlog rather than fast-forwarding
            self.accumulator = self.accumulator.min(SIM_DT);
        }

        self.frame(events, ticks)
    }

    /// Exactly one tick regardless of wall time
    pub fn tick_once(&mut self) -> Vec<GameEvent> {
        let input = self.keys.take_tick_input();
        tick(&mut self.state, &input)
    }

    /// Run one tick with explicit input, bypassing held keys (scripted play)
    pub fn tick_with(&mut self, input: &TickInput) -> Vec<GameEvent> {
        tick(&mut self.state, input)
    }

    /// Build the draw list and HUD for the current state
    pub fn frame(&self, events: Vec<GameEvent>, ticks: u32) -> Frame {
        Frame {
            commands: build_scene(&self.state),
            hud: HudView::from_state(&self.state),
            events,
            ticks,
        }
    }
}
