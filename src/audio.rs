//! Audio cues
//!
//! Procedurally generated beeps - no external files needed! The cue mapping
//! is plain Rust; only the Web Audio player is wasm-specific.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Truck activated or a defender flattened
    Truck,
    /// Hurdle jump
    Hurdle,
    /// Run ended by a tackle
    Tackle,
    /// Goal line crossed
    Touchdown,
}

/// Beep length in seconds
pub const BEEP_SECS: f64 = 0.18;
/// Beep gain
pub const BEEP_GAIN: f32 = 0.05;

impl SoundCue {
    /// Which cue (if any) a simulation event makes
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::TruckActivated | GameEvent::DefenderKnockedDown => Some(SoundCue::Truck),
            GameEvent::HurdleActivated => Some(SoundCue::Hurdle),
            GameEvent::Tackled => Some(SoundCue::Tackle),
            GameEvent::Touchdown => Some(SoundCue::Touchdown),
            _ => None,
        }
    }

    /// Oscillator pitch in Hz
    pub fn frequency(&self) -> f32 {
        match self {
            SoundCue::Touchdown => 660.0,
            _ => 220.0,
        }
    }
}

/// Cues for a batch of events, in order
pub fn cues_for(events: &[GameEvent]) -> impl Iterator<Item = SoundCue> + '_ {
    events.iter().filter_map(SoundCue::for_event)
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{BEEP_GAIN, BEEP_SECS, SoundCue};

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
    }

    impl Default for AudioManager {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AudioManager {
        pub fn new() -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx }
        }

        /// Play a cue; the oscillator stops itself after a short beep
        pub fn play(&self, cue: SoundCue) {
            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let Some((osc, gain)) = create_osc(ctx, cue.frequency(), OscillatorType::Square)
            else {
                return;
            };
            let t = ctx.current_time();
            gain.gain().set_value_at_time(BEEP_GAIN, t).ok();
            osc.start().ok();
            osc.stop_with_when(t + BEEP_SECS).ok();
        }
    }

    /// Create an oscillator routed through a gain node to the speakers
    fn create_osc(
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_mapping() {
        assert_eq!(
            SoundCue::for_event(&GameEvent::DefenderKnockedDown),
            Some(SoundCue::Truck)
        );
        assert_eq!(SoundCue::for_event(&GameEvent::Touchdown), Some(SoundCue::Touchdown));
        assert_eq!(SoundCue::for_event(&GameEvent::SpinStarted), None);
        assert_eq!(SoundCue::Touchdown.frequency(), 660.0);
        assert_eq!(SoundCue::Tackle.frequency(), 220.0);
    }

    #[test]
    fn test_cues_for_keeps_order() {
        let events = [
            GameEvent::HurdleActivated,
            GameEvent::LevelStarted(2),
            GameEvent::Tackled,
        ];
        let cues: Vec<_> = cues_for(&events).collect();
        assert_eq!(cues, vec![SoundCue::Hurdle, SoundCue::Tackle]);
    }
}
