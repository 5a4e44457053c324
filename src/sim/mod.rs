//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per 60 Hz frame)
//! - Seeded RNG only
//! - Stable iteration order (defender list order decides tackles)
//! - No rendering or platform dependencies

pub mod collision;
pub mod movement;
pub mod powerup;
pub mod progression;
pub mod pursuit;
pub mod state;
pub mod tick;

pub use collision::{Contact, in_contact, resolve_contacts, settle_contact};
pub use movement::{Steering, move_player};
pub use state::{
    Defender, GameEvent, GameState, HurdleMode, Outcome, Player, PowerKind, PowerUp, READY_STATUS,
    RunStatus, TruckMode,
};
pub use tick::{TickInput, tick};
