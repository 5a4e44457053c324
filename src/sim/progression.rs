//! Run progress, touchdowns and level advancement

use super::state::{GameEvent, GameState, Outcome, Player};
use crate::consts::*;
use crate::tuning::Progression;

pub const WIN_MESSAGE: &str = "Touchdown! You win!";

/// Fraction of the field covered for a runner at height `y`
#[inline]
pub fn progress_at(y: f32) -> f32 {
    (FIELD_HEIGHT - y) / (FIELD_HEIGHT - END_ZONE_HEIGHT)
}

/// Runner has reached the goal line
#[inline]
pub fn at_goal_line(player: &Player) -> bool {
    player.pos.y <= END_ZONE_HEIGHT + player.radius
}

/// Update progress, release any due waves, and score a touchdown at the goal line
pub fn advance_run(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.progress = progress_at(state.player.pos.y);

    if let Progression::Waves {
        thresholds,
        wave_size,
    } = &state.tuning.progression
    {
        let (thresholds, wave_size) = (thresholds.clone(), *wave_size);
        release_waves(state, &thresholds, wave_size, events);
    }

    if at_goal_line(&state.player) {
        events.push(GameEvent::Touchdown);
        handle_touchdown(state, events);
    }
}

/// Spawn every wave whose threshold the runner has now passed, in order
fn release_waves(
    state: &mut GameState,
    thresholds: &[f32],
    wave_size: usize,
    events: &mut Vec<GameEvent>,
) {
    while let Some(&threshold) = thresholds.get(state.waves_spawned) {
        if state.progress < threshold {
            break;
        }
        state.waves_spawned += 1;
        state.difficulty += 1;
        state.spawn_defenders(wave_size);
        state.status_text = format!("Wave {} incoming!", state.waves_spawned);
        log::info!(
            "Wave {} released at {:.0}% ({} defenders on the field)",
            state.waves_spawned,
            state.progress * 100.0,
            state.defenders.len()
        );
        events.push(GameEvent::WaveSpawned { count: wave_size });
    }
}

/// Goal line reached: next level, or the win when nothing is left to play
pub fn handle_touchdown(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let final_level = match state.tuning.progression {
        Progression::Leveled { .. } => state.level >= state.max_level(),
        Progression::Waves { .. } => true,
    };
    if final_level {
        state.end(Outcome::Win, WIN_MESSAGE);
        events.push(GameEvent::Won);
        return;
    }

    state.level += 1;
    state.difficulty = state.level;
    state.message = format!("Touchdown! Level {}", state.level);
    state.status_text = format!("Level {} begins!", state.level);

    state.player = Player::new(&state.tuning);
    state.defenders.clear();
    state.power_up = None;
    state.power_up_timer = 0;
    state.progress = 0.0;

    let count = state.tuning.defenders_for_level(state.level);
    state.spawn_defenders(count);
    log::info!("Level {} begins with {} defenders", state.level, count);
    events.push(GameEvent::LevelStarted(state.level));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player_start;
    use crate::sim::state::{PowerKind, RunStatus};
    use crate::tuning::Tuning;

    fn at_goal(state: &mut GameState) {
        state.player.pos.y = END_ZONE_HEIGHT + state.player.radius;
    }

    #[test]
    fn test_progress_fraction() {
        assert_eq!(progress_at(FIELD_HEIGHT), 0.0);
        assert_eq!(progress_at(END_ZONE_HEIGHT), 1.0);
        let start = progress_at(player_start().y);
        assert!(start > 0.0 && start < 0.2);
    }

    #[test]
    fn test_touchdown_advances_level() {
        let mut state = GameState::new(1, Tuning::default());
        state.player.pending_power = Some(PowerKind::Truck);
        state.player.manual_unstoppable = true;
        at_goal(&mut state);

        let mut events = Vec::new();
        advance_run(&mut state, &mut events);

        assert!(state.running());
        assert_eq!(state.level, 2);
        assert_eq!(state.difficulty, 2);
        assert_eq!(state.defenders.len(), 7);
        assert_eq!(state.player.pos, player_start());
        assert!(state.player.pending_power.is_none());
        assert!(!state.player.manual_unstoppable);
        assert_eq!(state.progress, 0.0);
        assert_eq!(state.message, "Touchdown! Level 2");
        assert_eq!(state.status_text, "Level 2 begins!");
        assert_eq!(
            events,
            vec![GameEvent::Touchdown, GameEvent::LevelStarted(2)]
        );
    }

    #[test]
    fn test_touchdown_at_max_level_wins() {
        let mut state = GameState::new(1, Tuning::default());
        state.level = 10;
        at_goal(&mut state);
        let mut events = Vec::new();
        advance_run(&mut state, &mut events);
        assert_eq!(state.status, RunStatus::Ended(Outcome::Win));
        assert_eq!(state.message, WIN_MESSAGE);
        assert_eq!(events, vec![GameEvent::Touchdown, GameEvent::Won]);
    }

    #[test]
    fn test_waves_release_once_per_threshold() {
        let tuning = Tuning {
            progression: Progression::Waves {
                thresholds: vec![0.35, 0.7],
                wave_size: 3,
            },
            ..Tuning::default()
        };
        let mut state = GameState::new(9, tuning);
        let mut events = Vec::new();

        state.player.pos.y = 400.0; // ~52% of the way
        advance_run(&mut state, &mut events);
        advance_run(&mut state, &mut events);
        assert_eq!(state.waves_spawned, 1);
        assert_eq!(state.defenders.len(), 9);
        assert_eq!(state.difficulty, 2);

        state.player.pos.y = 150.0;
        advance_run(&mut state, &mut events);
        assert_eq!(state.waves_spawned, 2);
        assert_eq!(state.defenders.len(), 12);

        at_goal(&mut state);
        advance_run(&mut state, &mut events);
        assert_eq!(state.status, RunStatus::Ended(Outcome::Win));
        assert_eq!(
            events,
            vec![
                GameEvent::WaveSpawned { count: 3 },
                GameEvent::WaveSpawned { count: 3 },
                GameEvent::Touchdown,
                GameEvent::Won,
            ]
        );
    }
}
