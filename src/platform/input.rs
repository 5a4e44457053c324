//! Keyboard input: browser key names to game keys, and held-key tracking

use std::collections::HashSet;

use crate::sim::{Steering, TickInput};

/// Keys the game responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Sprint,
    /// Spend a pending truck
    Truck,
    /// Spend a pending hurdle
    Hurdle,
    Spin,
    Unstoppable,
    Restart,
}

impl Key {
    /// Map a DOM `KeyboardEvent` (`key`, `code`) to a game key.
    ///
    /// Space is matched on `code` so it works regardless of layout; single
    /// characters are case-insensitive.
    pub fn from_browser(key: &str, code: &str) -> Option<Self> {
        if code == "Space" {
            return Some(Key::Restart);
        }
        let normalized = normalize_key(key);
        match normalized.as_str() {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "s" => Some(Key::Sprint),
            "d" => Some(Key::Truck),
            "a" => Some(Key::Hurdle),
            "e" => Some(Key::Spin),
            "n" => Some(Key::Unstoppable),
            _ => None,
        }
    }

    /// Fires once per press rather than acting while held
    pub fn is_action(&self) -> bool {
        matches!(
            self,
            Key::Truck | Key::Hurdle | Key::Spin | Key::Unstoppable | Key::Restart
        )
    }
}

/// Lowercase single characters, keep named keys as-is
pub fn normalize_key(key: &str) -> String {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_lowercase().collect(),
        _ => key.to_string(),
    }
}

/// Currently held keys plus one-shot actions waiting for the next tick
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    held: HashSet<Key>,
    pending: TickInput,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Auto-repeat presses never retrigger actions.
    pub fn press(&mut self, key: Key, repeat: bool) {
        self.held.insert(key);
        if repeat || !key.is_action() {
            return;
        }
        match key {
            Key::Truck => self.pending.activate_truck = true,
            Key::Hurdle => self.pending.activate_hurdle = true,
            Key::Spin => self.pending.spin = true,
            Key::Unstoppable => self.pending.toggle_unstoppable = true,
            Key::Restart => self.pending.restart = true,
            _ => {}
        }
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Queue a restart (restart button)
    pub fn request_restart(&mut self) {
        self.pending.restart = true;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Input for the next tick; pending actions are consumed
    pub fn take_tick_input(&mut self) -> TickInput {
        let mut input = std::mem::take(&mut self.pending);
        input.steering = Steering {
            up: self.is_held(Key::Up),
            down: self.is_held(Key::Down),
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
        };
        input.sprint = self.is_held(Key::Sprint);
        input
    }

    /// Drop everything (window lost focus, so key-ups may never arrive)
    pub fn clear(&mut self) {
        self.held.clear();
        self.pending = TickInput::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_key_mapping() {
        assert_eq!(Key::from_browser("ArrowUp", "ArrowUp"), Some(Key::Up));
        assert_eq!(Key::from_browser("S", "KeyS"), Some(Key::Sprint));
        assert_eq!(Key::from_browser("d", "KeyD"), Some(Key::Truck));
        assert_eq!(Key::from_browser(" ", "Space"), Some(Key::Restart));
        assert_eq!(Key::from_browser("Shift", "ShiftLeft"), None);
        assert_eq!(Key::from_browser("x", "KeyX"), None);
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("A"), "a");
        assert_eq!(normalize_key("ArrowLeft"), "ArrowLeft");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn test_held_keys_build_steering() {
        let mut keys = HeldKeys::new();
        keys.press(Key::Up, false);
        keys.press(Key::Sprint, false);
        let input = keys.take_tick_input();
        assert!(input.steering.up && input.sprint);
        assert!(!input.steering.down);

        keys.release(Key::Sprint);
        let input = keys.take_tick_input();
        assert!(input.steering.up && !input.sprint);
    }

    #[test]
    fn test_actions_fire_once() {
        let mut keys = HeldKeys::new();
        keys.press(Key::Spin, false);
        keys.press(Key::Spin, true);
        assert!(keys.take_tick_input().spin);
        assert!(!keys.take_tick_input().spin);

        keys.press(Key::Unstoppable, true);
        assert!(!keys.take_tick_input().toggle_unstoppable);
    }

    #[test]
    fn test_clear_drops_held_and_pending() {
        let mut keys = HeldKeys::new();
        keys.press(Key::Left, false);
        keys.request_restart();
        keys.clear();
        assert_eq!(keys.take_tick_input(), TickInput::default());
    }
}
