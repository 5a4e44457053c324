//! Data-driven game balance
//!
//! Every gameplay number lives here so a page (or the native binary) can
//! override a subset through JSON. Missing fields fall back to the defaults,
//! which reproduce the classic arcade feel.

use serde::{Deserialize, Serialize};

/// How a run advances once the runner reaches the goal line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Progression {
    /// Each touchdown starts the next level until `max_level` is cleared
    Leveled {
        #[serde(default = "default_max_level")]
        max_level: u32,
        /// Most extra defenders a later level can add on top of the starting count
        #[serde(default = "default_max_extra_defenders")]
        max_extra_defenders: usize,
    },
    /// One long run; extra defender waves join as progress crosses each threshold
    Waves {
        #[serde(default = "default_wave_thresholds")]
        thresholds: Vec<f32>,
        #[serde(default = "default_wave_size")]
        wave_size: usize,
    },
}

fn default_wave_thresholds() -> Vec<f32> {
    vec![0.35, 0.7]
}

fn default_wave_size() -> usize {
    3
}

impl Default for Progression {
    fn default() -> Self {
        Progression::Leveled {
            max_level: default_max_level(),
            max_extra_defenders: default_max_extra_defenders(),
        }
    }
}

fn default_max_level() -> u32 {
    10
}

fn default_max_extra_defenders() -> usize {
    6
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Runner ===
    pub player_radius: f32,
    pub player_speed: f32,
    pub sprint_speed: f32,
    /// Energy spent per sprinting frame
    pub sprint_drain: f32,
    /// Energy regained per resting frame
    pub sprint_regen: f32,
    /// Frames of forced rest after emptying the tank
    pub sprint_cooldown_frames: u32,

    // === Defenders ===
    pub starting_defenders: usize,
    pub defender_radius: f32,
    pub defender_base_speed: f32,
    /// Random extra speed, uniform in [0, this)
    pub defender_speed_jitter: f32,
    pub defender_speed_per_difficulty: f32,
    /// Defenders spawn with y in [min, min + span)
    pub defender_spawn_y_min: f32,
    pub defender_spawn_y_span: f32,
    pub lead_base: f32,
    pub lead_per_difficulty: f32,
    /// Lateral aim offset (times lead factor)
    pub lateral_offset: f32,
    /// Upfield aim offset (times lead factor)
    pub upfield_offset: f32,

    // === Power-ups ===
    pub power_up_radius: f32,
    /// Idle frames before a power-up appears (spawns once the timer exceeds this)
    pub power_up_idle_frames: u32,
    pub power_up_spawn_y_min: f32,
    /// Power-ups keep this far from the bottom of the playable area
    pub power_up_spawn_margin: f32,
    pub truck_frames: u32,
    pub truck_charges: u32,
    pub hurdle_frames: u32,
    /// Peak hurdle height in pixels
    pub hurdle_peak: f32,
    /// Hurdle clears a defender only above this height
    pub hurdle_clear_height: f32,
    pub spin_frames: u32,

    // === Knockdowns ===
    pub unstoppable_recover_frames: i32,
    pub truck_recover_frames: i32,

    // === Progression ===
    pub progression: Progression,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_radius: 18.0,
            player_speed: 3.4,
            sprint_speed: 5.4,
            sprint_drain: 0.9,
            sprint_regen: 0.5,
            sprint_cooldown_frames: 120,

            starting_defenders: 6,
            defender_radius: 16.0,
            defender_base_speed: 1.6,
            defender_speed_jitter: 0.9,
            defender_speed_per_difficulty: 0.35,
            defender_spawn_y_min: 40.0,
            defender_spawn_y_span: 200.0,
            lead_base: 0.4,
            lead_per_difficulty: 0.05,
            lateral_offset: 30.0,
            upfield_offset: 10.0,

            power_up_radius: 12.0,
            power_up_idle_frames: 260,
            power_up_spawn_y_min: 140.0,
            power_up_spawn_margin: 200.0,
            truck_frames: 180,
            truck_charges: 2,
            hurdle_frames: 50,
            hurdle_peak: 10.0,
            hurdle_clear_height: 6.0,
            spin_frames: 72,

            unstoppable_recover_frames: 180,
            truck_recover_frames: 120,

            progression: Progression::default(),
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON; unspecified fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Parse overrides, logging and falling back to defaults on bad input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring invalid tuning ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Highest level of a run (waves mode is a single level)
    pub fn max_level(&self) -> u32 {
        match self.progression {
            Progression::Leveled { max_level, .. } => max_level.max(1),
            Progression::Waves { .. } => 1,
        }
    }

    /// Defenders lined up at the start of `level`
    pub fn defenders_for_level(&self, level: u32) -> usize {
        let extra = match self.progression {
            Progression::Leveled {
                max_extra_defenders,
                ..
            } => (level.saturating_sub(1) as usize).min(max_extra_defenders),
            Progression::Waves { .. } => 0,
        };
        self.starting_defenders + extra
    }
}
