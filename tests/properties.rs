use endzone_dash::consts::*;
use endzone_dash::sim::{GameState, PowerKind, Steering, TickInput, tick};
use endzone_dash::Tuning;
use proptest::prelude::*;

/// One tick's worth of held keys and actions
fn arb_input() -> impl Strategy<Value = TickInput> {
    (
        any::<[bool; 4]>(),
        any::<bool>(),
        prop::bool::weighted(0.05),
        prop::bool::weighted(0.05),
        prop::bool::weighted(0.02),
        prop::bool::weighted(0.01),
    )
        .prop_map(|([up, down, left, right], sprint, truck, hurdle, spin, toggle)| TickInput {
            steering: Steering {
                up,
                down,
                left,
                right,
            },
            sprint,
            activate_truck: truck,
            activate_hurdle: hurdle,
            spin,
            toggle_unstoppable: toggle,
            restart: false,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn runner_stays_on_the_field(seed in any::<u64>(), inputs in prop::collection::vec(arb_input(), 1..400)) {
        let mut state = GameState::new(seed, Tuning::default());
        for input in &inputs {
            tick(&mut state, input);
            let p = &state.player;
            prop_assert!(p.pos.x >= SIDELINES && p.pos.x <= FIELD_WIDTH - SIDELINES);
            prop_assert!(p.pos.y >= END_ZONE_HEIGHT + p.radius && p.pos.y <= FIELD_HEIGHT - SIDELINES);
        }
    }

    #[test]
    fn sprint_energy_moves_only_when_allowed(seed in any::<u64>(), inputs in prop::collection::vec(arb_input(), 1..400)) {
        let mut state = GameState::new(seed, Tuning::default());
        for input in &inputs {
            if !state.running() {
                break;
            }
            let level = state.level;
            let before = state.player.sprint_energy;
            let cooldown = state.player.sprint_cooldown;
            tick(&mut state, input);
            let after = state.player.sprint_energy;

            prop_assert!((0.0..=MAX_SPRINT_ENERGY).contains(&after));
            if state.level != level {
                // New level: fresh runner
                continue;
            }
            if after < before {
                prop_assert!(input.sprint && before > 0.0);
            }
            if after > before {
                prop_assert!(!state.player.sprinting && cooldown == 0);
            }
        }
    }

    #[test]
    fn downed_defenders_hold_still(seed in any::<u64>(), inputs in prop::collection::vec(arb_input(), 1..300)) {
        let mut state = GameState::new(seed, Tuning::default());
        state.player.manual_unstoppable = true;
        for input in &inputs {
            let level = state.level;
            let before: Vec<_> = state.defenders.iter().map(|d| (d.pos, d.knocked_down, d.recover_timer)).collect();
            let input = TickInput { toggle_unstoppable: false, ..input.clone() };
            tick(&mut state, &input);
            if state.level != level {
                continue;
            }
            for ((pos, down, timer), d) in before.iter().zip(&state.defenders) {
                if *down {
                    prop_assert_eq!(*pos, d.pos);
                    if !d.knocked_down {
                        prop_assert!(*timer <= 1);
                    }
                }
            }
        }
    }

    #[test]
    fn truck_charges_and_power_up_slot(seed in any::<u64>(), inputs in prop::collection::vec(arb_input(), 1..600)) {
        let mut state = GameState::new(seed, Tuning::default());
        for input in &inputs {
            let pending = state.player.pending_power;
            let had_truck = state.player.truck_active();
            tick(&mut state, input);
            if let Some(truck) = state.player.truck {
                prop_assert!(truck.charges > 0);
            }
            if input.activate_truck && pending == Some(PowerKind::Truck) && state.running() && !had_truck {
                prop_assert!(state.player.pending_power.is_none());
            }
        }
    }
}
