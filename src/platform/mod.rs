//! Platform abstraction layer
//!
//! Browser-facing details that the simulation should never see. Only input
//! lives here: keyboard names vary by browser and layout, the sim only knows
//! `TickInput`.

pub mod input;

pub use input::{HeldKeys, Key};
