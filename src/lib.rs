//! Endzone Dash - A single-screen arcade football run
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, pursuit, tackles, power-ups, progression)
//! - `session`: Fixed-timestep driver that turns frame time into ticks and frames
//! - `renderer`: Scene building into draw commands (Canvas 2D backend on wasm)
//! - `platform`: Browser key normalization and held-key tracking
//! - `tuning`: Data-driven game balance
//! - `ui`: HUD label values
//! - `audio`: Event-to-cue mapping (Web Audio beeper on wasm)

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use session::{Frame, Session};
pub use tuning::{Progression, Tuning};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one animation frame at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Largest frame delta accepted (tab switches, debugger pauses)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Field dimensions (canvas pixels)
    pub const FIELD_WIDTH: f32 = 520.0;
    pub const FIELD_HEIGHT: f32 = 760.0;
    pub const END_ZONE_HEIGHT: f32 = 80.0;
    pub const SIDELINES: f32 = 30.0;

    /// Player spawns this far above the bottom edge
    pub const PLAYER_START_OFFSET: f32 = 120.0;
    /// Sprint energy cap
    pub const MAX_SPRINT_ENERGY: f32 = 100.0;
}

/// Where the runner lines up at the start of every level
#[inline]
pub fn player_start() -> Vec2 {
    use consts::*;
    Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT - PLAYER_START_OFFSET)
}

/// Clamp a runner position of the given radius to the playable area
#[inline]
pub fn clamp_to_field(pos: Vec2, radius: f32) -> Vec2 {
    use consts::*;
    Vec2::new(
        pos.x.clamp(SIDELINES, FIELD_WIDTH - SIDELINES),
        pos.y.clamp(END_ZONE_HEIGHT + radius, FIELD_HEIGHT - SIDELINES),
    )
}

/// Two circles overlap (strictly) given a slack subtracted from the radius sum
#[inline]
pub fn circles_overlap(a: Vec2, b: Vec2, reach: f32) -> bool {
    a.distance(b) < reach
}

#[cfg(test)]
mod tests {
    use super::*;
    use consts::*;

    #[test]
    fn test_clamp_to_field() {
        let clamped = clamp_to_field(Vec2::new(-50.0, 10.0), 18.0);
        assert_eq!(clamped, Vec2::new(SIDELINES, END_ZONE_HEIGHT + 18.0));

        let clamped = clamp_to_field(Vec2::new(9999.0, 9999.0), 18.0);
        assert_eq!(
            clamped,
            Vec2::new(FIELD_WIDTH - SIDELINES, FIELD_HEIGHT - SIDELINES)
        );

        let inside = Vec2::new(200.0, 400.0);
        assert_eq!(clamp_to_field(inside, 18.0), inside);
    }

    #[test]
    fn test_circles_overlap_is_strict() {
        let a = Vec2::new(0.0, 0.0);
        assert!(circles_overlap(a, Vec2::new(33.9, 0.0), 34.0));
        assert!(!circles_overlap(a, Vec2::new(34.0, 0.0), 34.0));
    }
}
