//! Contact detection and tackle resolution
//!
//! Contacts are resolved in defender order with a fixed priority: unstoppable,
//! then truck charges, then a high enough hurdle. Anything else is a tackle,
//! and the first tackle stops resolution for the frame.

use super::state::{Defender, GameEvent, Player};
use crate::circles_overlap;
use crate::tuning::Tuning;

/// How a single contact was settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Defender flattened while the runner is unstoppable
    Bulldozed,
    /// Defender flattened by a truck charge
    Trucked,
    /// Runner sailed over the defender
    Hurdled,
    /// Run over
    Tackled,
}

/// Whether this defender currently touches the runner (jump height shrinks reach)
pub fn in_contact(player: &Player, defender: &Defender) -> bool {
    !defender.knocked_down
        && circles_overlap(
            player.pos,
            defender.pos,
            player.radius + defender.radius - player.hurdle_arc(),
        )
}

/// Decide a contact and apply its side effects to the runner and defender
pub fn settle_contact(player: &mut Player, defender: &mut Defender, tuning: &Tuning) -> Contact {
    if player.unstoppable() {
        defender.knocked_down = true;
        defender.recover_timer = tuning.unstoppable_recover_frames;
        return Contact::Bulldozed;
    }

    if let Some(truck) = player.truck.as_mut() {
        if truck.charges > 0 {
            defender.knocked_down = true;
            defender.recover_timer = tuning.truck_recover_frames;
            truck.charges -= 1;
            if truck.charges == 0 {
                player.truck = None;
            }
            return Contact::Trucked;
        }
    }

    if let Some(hurdle) = player.hurdle {
        if hurdle.frames_left > 0 && hurdle.arc > tuning.hurdle_clear_height {
            return Contact::Hurdled;
        }
    }

    Contact::Tackled
}

/// Resolve all contacts for this frame. Returns true if the runner was tackled.
pub fn resolve_contacts(
    player: &mut Player,
    defenders: &mut [Defender],
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) -> bool {
    for defender in defenders.iter_mut() {
        if !in_contact(player, defender) {
            continue;
        }
        match settle_contact(player, defender, tuning) {
            Contact::Bulldozed => events.push(GameEvent::DefenderKnockedDown),
            Contact::Trucked => {
                events.push(GameEvent::DefenderKnockedDown);
                if !player.truck_active() {
                    events.push(GameEvent::TruckSpent);
                }
            }
            Contact::Hurdled => {}
            Contact::Tackled => {
                events.push(GameEvent::Tackled);
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{HurdleMode, TruckMode};
    use glam::Vec2;

    fn setup() -> (Player, Tuning) {
        let tuning = Tuning::default();
        (Player::new(&tuning), tuning)
    }

    fn defender_at(pos: Vec2) -> Defender {
        Defender {
            pos,
            radius: 16.0,
            speed: 2.0,
            angle_bias: 1.0,
            knocked_down: false,
            recover_timer: 0,
        }
    }

    #[test]
    fn test_contact_requires_overlap() {
        let (player, _) = setup();
        let near = defender_at(player.pos + Vec2::new(33.0, 0.0));
        let far = defender_at(player.pos + Vec2::new(34.0, 0.0));
        assert!(in_contact(&player, &near));
        assert!(!in_contact(&player, &far));
    }

    #[test]
    fn test_hurdle_arc_shrinks_reach() {
        let (mut player, _) = setup();
        let d = defender_at(player.pos + Vec2::new(30.0, 0.0));
        assert!(in_contact(&player, &d));
        player.hurdle = Some(HurdleMode {
            frames_left: 25,
            arc: 5.0,
        });
        assert!(!in_contact(&player, &d));
    }

    #[test]
    fn test_downed_defender_never_contacts() {
        let (player, _) = setup();
        let mut d = defender_at(player.pos);
        d.knocked_down = true;
        assert!(!in_contact(&player, &d));
    }

    #[test]
    fn test_unstoppable_beats_truck() {
        let (mut player, tuning) = setup();
        player.manual_unstoppable = true;
        player.truck = Some(TruckMode {
            frames_left: 100,
            charges: 2,
        });
        let mut d = defender_at(player.pos);
        assert_eq!(settle_contact(&mut player, &mut d, &tuning), Contact::Bulldozed);
        assert!(d.knocked_down);
        assert_eq!(d.recover_timer, 180);
        assert_eq!(player.truck_charges(), 2);
    }

    #[test]
    fn test_truck_consumes_charges_then_ends() {
        let (mut player, tuning) = setup();
        player.truck = Some(TruckMode {
            frames_left: 100,
            charges: 2,
        });

        let mut d1 = defender_at(player.pos);
        assert_eq!(settle_contact(&mut player, &mut d1, &tuning), Contact::Trucked);
        assert_eq!(d1.recover_timer, 120);
        assert_eq!(player.truck_charges(), 1);
        assert!(player.truck_active());

        let mut d2 = defender_at(player.pos);
        assert_eq!(settle_contact(&mut player, &mut d2, &tuning), Contact::Trucked);
        assert!(!player.truck_active());

        let mut d3 = defender_at(player.pos);
        assert_eq!(settle_contact(&mut player, &mut d3, &tuning), Contact::Tackled);
    }

    #[test]
    fn test_low_hurdle_does_not_clear() {
        let (mut player, tuning) = setup();
        player.hurdle = Some(HurdleMode {
            frames_left: 48,
            arc: 1.2,
        });
        let mut d = defender_at(player.pos);
        assert_eq!(settle_contact(&mut player, &mut d, &tuning), Contact::Tackled);

        player.hurdle = Some(HurdleMode {
            frames_left: 25,
            arc: 10.0,
        });
        assert_eq!(settle_contact(&mut player, &mut d, &tuning), Contact::Hurdled);
        assert!(!d.knocked_down);
    }

    #[test]
    fn test_single_tackle_with_many_overlaps() {
        let (mut player, tuning) = setup();
        let mut defenders: Vec<_> = (0..3).map(|_| defender_at(player.pos)).collect();
        let mut events = Vec::new();
        assert!(resolve_contacts(&mut player, &mut defenders, &tuning, &mut events));
        assert_eq!(events, vec![GameEvent::Tackled]);
    }

    #[test]
    fn test_truck_runs_out_mid_pileup() {
        let (mut player, tuning) = setup();
        player.truck = Some(TruckMode {
            frames_left: 100,
            charges: 2,
        });
        let mut defenders: Vec<_> = (0..3).map(|_| defender_at(player.pos)).collect();
        let mut events = Vec::new();
        assert!(resolve_contacts(&mut player, &mut defenders, &tuning, &mut events));
        assert_eq!(
            events,
            vec![
                GameEvent::DefenderKnockedDown,
                GameEvent::DefenderKnockedDown,
                GameEvent::TruckSpent,
                GameEvent::Tackled,
            ]
        );
        assert!(defenders[0].knocked_down && defenders[1].knocked_down);
        assert!(!defenders[2].knocked_down);
    }
}
