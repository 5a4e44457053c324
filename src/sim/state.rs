//! Game state and core simulation types
//!
//! Everything a run needs lives in [`GameState`]; nothing here touches the
//! browser, so a session can be driven headless by tests or the native binary.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::player_start;
use crate::tuning::Tuning;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

/// Run lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Runner is on the field
    Active,
    /// Run is over; only a restart changes anything
    Ended(Outcome),
}

/// Collectible power types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerKind {
    Truck,
    Hurdle,
}

impl PowerKind {
    pub fn label(&self) -> &'static str {
        match self {
            PowerKind::Truck => "TRUCK",
            PowerKind::Hurdle => "HURDLE",
        }
    }

    /// Single-letter badge drawn on the pickup
    pub fn badge(&self) -> &'static str {
        match self {
            PowerKind::Truck => "T",
            PowerKind::Hurdle => "H",
        }
    }
}

/// Active truck mode: knocks defenders over until charges or time run out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruckMode {
    pub frames_left: i32,
    pub charges: u32,
}

/// Active hurdle: a short jump whose height follows a sine arc
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HurdleMode {
    pub frames_left: i32,
    /// Current height above the ground (pixels)
    pub arc: f32,
}

/// The ball carrier
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub sprint_speed: f32,
    /// 0..=100
    pub sprint_energy: f32,
    /// Frames until energy may regenerate again
    pub sprint_cooldown: u32,
    pub sprinting: bool,
    pub truck: Option<TruckMode>,
    pub hurdle: Option<HurdleMode>,
    /// Frames left on the spin move
    pub spin: Option<i32>,
    /// Debug toggle that makes every contact a knockdown
    pub manual_unstoppable: bool,
    /// Collected but not yet activated
    pub pending_power: Option<PowerKind>,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: player_start(),
            radius: tuning.player_radius,
            speed: tuning.player_speed,
            sprint_speed: tuning.sprint_speed,
            sprint_energy: MAX_SPRINT_ENERGY,
            sprint_cooldown: 0,
            sprinting: false,
            truck: None,
            hurdle: None,
            spin: None,
            manual_unstoppable: false,
            pending_power: None,
        }
    }

    /// Contact always knocks defenders over (manual toggle or mid-spin)
    pub fn unstoppable(&self) -> bool {
        self.manual_unstoppable || self.spin.is_some()
    }

    pub fn truck_active(&self) -> bool {
        self.truck.is_some()
    }

    pub fn hurdle_active(&self) -> bool {
        self.hurdle.is_some()
    }

    pub fn spin_active(&self) -> bool {
        self.spin.is_some()
    }

    /// Current jump height (0 when grounded)
    pub fn hurdle_arc(&self) -> f32 {
        self.hurdle.map_or(0.0, |h| h.arc)
    }

    /// Remaining truck charges (0 when truck mode is off)
    pub fn truck_charges(&self) -> u32 {
        self.truck.map_or(0, |t| t.charges)
    }
}

/// A pursuing defender
#[derive(Debug, Clone, PartialEq)]
pub struct Defender {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// -1.0 or 1.0: which side of the runner this defender aims for
    pub angle_bias: f32,
    pub knocked_down: bool,
    pub recover_timer: i32,
}

/// The single collectible on the field
#[derive(Debug, Clone, PartialEq)]
pub struct PowerUp {
    pub kind: PowerKind,
    pub pos: Vec2,
    pub radius: f32,
}

/// Something that happened during a tick, consumed by audio and logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    PowerUpSpawned(PowerKind),
    PowerUpCollected(PowerKind),
    TruckActivated,
    HurdleActivated,
    SpinStarted,
    UnstoppableToggled(bool),
    /// A defender was flattened (by truck or while unstoppable)
    DefenderKnockedDown,
    TruckSpent,
    TruckExpired,
    HurdleLanded,
    SpinSpent,
    /// Runner crossed the goal line
    Touchdown,
    LevelStarted(u32),
    WaveSpawned { count: usize },
    Tackled,
    Won,
    Restarted,
}

/// Status line shown before anything has happened
pub const READY_STATUS: &str = "Ready";

pub const START_MESSAGE: &str = "Run it in!";

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Restarts so far; mixed into the seed so every run differs
    pub restarts: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub status: RunStatus,
    /// Overlay text (shown once the run ends)
    pub message: String,
    /// Status label text
    pub status_text: String,
    pub player: Player,
    /// Iteration order matters: the first overlapping defender decides a tackle
    pub defenders: Vec<Defender>,
    pub power_up: Option<PowerUp>,
    /// Idle frames counted toward the next power-up
    pub power_up_timer: u32,
    pub difficulty: u32,
    pub level: u32,
    /// Fraction of the field covered, 0 at the bottom edge
    pub progress: f32,
    /// Extra waves already released (waves progression only)
    pub waves_spawned: usize,
    /// Simulation tick counter
    pub tick: u64,
}

impl GameState {
    /// Create a new run with the given seed and balance
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            restarts: 0,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(&tuning),
            tuning,
            status: RunStatus::Active,
            message: START_MESSAGE.to_string(),
            status_text: READY_STATUS.to_string(),
            defenders: Vec::new(),
            power_up: None,
            power_up_timer: 0,
            difficulty: 1,
            level: 1,
            progress: 0.0,
            waves_spawned: 0,
            tick: 0,
        };
        let count = state.tuning.starting_defenders;
        state.spawn_defenders(count);
        log::info!("New run (seed {seed}, {count} defenders)");
        state
    }

    /// Reinitialize every field to its starting value (tuning and seed survive)
    pub fn reset(&mut self) {
        self.restarts += 1;
        self.rng = Pcg32::seed_from_u64(self.seed.wrapping_add(self.restarts));
        self.player = Player::new(&self.tuning);
        self.status = RunStatus::Active;
        self.message = START_MESSAGE.to_string();
        self.status_text = READY_STATUS.to_string();
        self.defenders.clear();
        self.power_up = None;
        self.power_up_timer = 0;
        self.difficulty = 1;
        self.level = 1;
        self.progress = 0.0;
        self.waves_spawned = 0;
        self.tick = 0;
        let count = self.tuning.starting_defenders;
        self.spawn_defenders(count);
        log::info!("Run restarted ({count} defenders)");
    }

    pub fn running(&self) -> bool {
        self.status == RunStatus::Active
    }

    pub fn max_level(&self) -> u32 {
        self.tuning.max_level()
    }

    /// Stop the run; later ticks leave the state untouched
    pub fn end(&mut self, outcome: Outcome, message: &str) {
        self.status = RunStatus::Ended(outcome);
        self.message = message.to_string();
        self.status_text = message.to_string();
        log::info!("Run over: {message} (level {}, tick {})", self.level, self.tick);
    }

    /// Append `count` freshly rolled defenders at the far end of the field
    pub fn spawn_defenders(&mut self, count: usize) {
        for _ in 0..count {
            let defender = self.roll_defender();
            self.defenders.push(defender);
        }
    }

    fn roll_defender(&mut self) -> Defender {
        let t = &self.tuning;
        let x = self.rng.random::<f32>() * (FIELD_WIDTH - SIDELINES * 2.0) + SIDELINES;
        let y = self.rng.random::<f32>() * t.defender_spawn_y_span + t.defender_spawn_y_min;
        let speed = t.defender_base_speed
            + self.rng.random::<f32>() * t.defender_speed_jitter
            + self.difficulty as f32 * t.defender_speed_per_difficulty;
        let angle_bias = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        Defender {
            pos: Vec2::new(x, y),
            radius: t.defender_radius,
            speed,
            angle_bias,
            knocked_down: false,
            recover_timer: 0,
        }
    }

    /// Roll a power-up of random kind at a random in-bounds spot
    pub fn roll_power_up(&mut self) -> PowerUp {
        let kind = if self.rng.random_bool(0.5) {
            PowerKind::Truck
        } else {
            PowerKind::Hurdle
        };
        let t = &self.tuning;
        let x = self.rng.random::<f32>() * (FIELD_WIDTH - SIDELINES * 2.0) + SIDELINES;
        let span = (FIELD_HEIGHT - END_ZONE_HEIGHT - t.power_up_spawn_margin).max(0.0);
        let y = self.rng.random::<f32>() * span + t.power_up_spawn_y_min;
        PowerUp {
            kind,
            pos: Vec2::new(x, y),
            radius: t.power_up_radius,
        }
    }

    /// Defenders currently able to tackle
    pub fn active_defenders(&self) -> impl Iterator<Item = &Defender> {
        self.defenders.iter().filter(|d| !d.knocked_down)
    }
}
