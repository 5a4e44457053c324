//! Rendering module
//!
//! The scene builder is pure (state in, commands out) so it runs in tests;
//! only the Canvas 2D backend needs a browser.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod command;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use command::{Color, DrawCommand, palette};
pub use scene::build_scene;
