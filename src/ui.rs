//! HUD values mirrored into the page's status labels

use crate::sim::GameState;

/// Everything the DOM labels show for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct HudView {
    /// Sprint bar fill, 0-100
    pub sprint_percent: f32,
    /// `None` leaves the label untouched (a power-up is waiting on the field)
    pub power_label: Option<String>,
    pub status: String,
    /// "level/max"
    pub level_label: String,
}

impl HudView {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            sprint_percent: state.player.sprint_energy.clamp(0.0, 100.0),
            power_label: power_label(state),
            status: state.status_text.clone(),
            level_label: format!("{}/{}", state.level, state.max_level()),
        }
    }
}

/// Most important power first: active modes, then unstoppable, then pending
pub fn power_label(state: &GameState) -> Option<String> {
    let player = &state.player;
    if let Some(truck) = player.truck {
        Some(format!("TRUCK x{}", truck.charges))
    } else if player.hurdle_active() {
        Some("HURDLE".to_string())
    } else if player.spin_active() {
        Some("SPIN MOVE".to_string())
    } else if player.unstoppable() {
        Some("UNSTOPPABLE".to_string())
    } else if let Some(kind) = player.pending_power {
        Some(kind.label().to_string())
    } else if state.power_up.is_none() {
        Some("None".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{HurdleMode, PowerKind, TruckMode};
    use crate::tuning::Tuning;

    #[test]
    fn test_fresh_hud() {
        let state = GameState::new(1, Tuning::default());
        let hud = HudView::from_state(&state);
        assert_eq!(hud.sprint_percent, 100.0);
        assert_eq!(hud.power_label.as_deref(), Some("None"));
        assert_eq!(hud.level_label, "1/10");
        assert_eq!(hud.status, "Ready");
    }

    #[test]
    fn test_power_label_priority() {
        let mut state = GameState::new(1, Tuning::default());
        state.player.pending_power = Some(PowerKind::Hurdle);
        assert_eq!(power_label(&state).as_deref(), Some("HURDLE"));

        state.player.manual_unstoppable = true;
        assert_eq!(power_label(&state).as_deref(), Some("UNSTOPPABLE"));

        state.player.spin = Some(3);
        assert_eq!(power_label(&state).as_deref(), Some("SPIN MOVE"));

        state.player.hurdle = Some(HurdleMode {
            frames_left: 10,
            arc: 5.0,
        });
        assert_eq!(power_label(&state).as_deref(), Some("HURDLE"));

        state.player.truck = Some(TruckMode {
            frames_left: 10,
            charges: 1,
        });
        assert_eq!(power_label(&state).as_deref(), Some("TRUCK x1"));
    }

    #[test]
    fn test_label_left_alone_while_power_up_waits() {
        let mut state = GameState::new(1, Tuning::default());
        state.power_up = Some(state.roll_power_up());
        assert_eq!(power_label(&state), None);
    }
}
