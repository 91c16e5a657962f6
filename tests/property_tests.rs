//! Property tests for engine invariants under random play.

use proptest::prelude::*;

use wopr_engine::command::{Command, Weapon};
use wopr_engine::core::{GameRng, Side};
use wopr_engine::games::city_duel::{create_war_game, enemy_turn, launch_missile, City};
use wopr_engine::games::global_war::{
    initialize_game, process_action, resolve_strike, GameAssets, Scenario,
};
use wopr_engine::games::tic_tac_toe::{create_new_game, get_wopr_move, make_move};

fn weapon_strategy() -> impl Strategy<Value = Weapon> {
    prop_oneof![Just(Weapon::Icbm), Just(Weapon::Slbm), Just(Weapon::Bomber)]
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => (weapon_strategy(), 1u32..60).prop_map(|(weapon, quantity)| Command::Launch {
            weapon,
            target: Some("TARGET".to_string()),
            quantity,
        }),
        1 => Just(Command::Defend { target: None }),
        1 => Just(Command::Recon { target: None }),
        2 => Just(Command::Negotiate),
        1 => Just(Command::Status),
    ]
}

fn scenario_strategy() -> impl Strategy<Value = Scenario> {
    prop::sample::select(Scenario::ALL.to_vec())
}

fn never_grows(before: &GameAssets, after: &GameAssets) -> bool {
    after.icbms <= before.icbms
        && after.slbms <= before.slbms
        && after.bombers <= before.bombers
        && after.fighters <= before.fighters
        && after.submarines <= before.submarines
        && after.carriers <= before.carriers
        && after.cities <= before.cities
        && after.population <= before.population
}

proptest! {
    #[test]
    fn test_strike_accounting(quantity in 0u32..2_000, seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let outcome = resolve_strike(quantity, &mut rng);

        prop_assert_eq!(outcome.intercepted + outcome.hits, quantity);
        prop_assert!(f64::from(outcome.intercepted) >= (f64::from(quantity) * 0.2).floor());
        prop_assert!(f64::from(outcome.intercepted) <= f64::from(quantity) * 0.4);
        prop_assert_eq!(outcome.cities_destroyed, outcome.hits / 2);
    }

    #[test]
    fn test_global_war_invariants(
        scenario in scenario_strategy(),
        seed in any::<u64>(),
        commands in prop::collection::vec(command_strategy(), 1..40),
    ) {
        let mut rng = GameRng::new(seed);
        let mut state = initialize_game(scenario, Side::Usa, &mut rng);

        for command in &commands {
            let next = process_action(&state, command, &mut rng);

            prop_assert!((1..=5).contains(&next.defcon.level()));
            prop_assert!(never_grows(&state.player_assets, &next.player_assets));
            prop_assert!(never_grows(&state.enemy_assets, &next.enemy_assets));
            prop_assert!(next.casualties.total() >= state.casualties.total());
            prop_assert!(next.strikes.player_launched >= state.strikes.player_launched);
            prop_assert!(next.turn >= state.turn);
            prop_assert!(next.phase >= state.phase);
            prop_assert!(!state.game_over || next.game_over);
            if let Some(last) = next.history.last().filter(|_| next.game_over) {
                prop_assert_eq!(last.turn, next.turn);
            }

            if next.defcon < state.defcon {
                let is_launch = matches!(command, Command::Launch { .. });
                prop_assert!(is_launch);
            }
            if next.defcon > state.defcon {
                prop_assert_eq!(command, &Command::Negotiate);
            }

            prop_assert!(next.history.len() >= state.history.len());
            for (old, new) in state.history.iter().zip(next.history.iter()) {
                prop_assert_eq!(old, new);
            }
            state = next;
        }
    }

    #[test]
    fn test_city_health_stays_in_range(
        seed in any::<u64>(),
        targets in prop::collection::vec(0usize..4, 1..12),
    ) {
        let mut rng = GameRng::new(seed);
        let mut state = create_war_game();

        for index in targets {
            let next = enemy_turn(&launch_missile(&state, City::USSR[index], &mut rng), &mut rng);
            for city in City::US.into_iter().chain(City::USSR) {
                prop_assert!(next.health(city) <= state.health(city));
                prop_assert!(next.health(city) <= 100);
            }
            prop_assert!(next.missile_count <= state.missile_count);
            state = next;
        }
    }

    #[test]
    fn test_board_never_clears(
        seed in any::<u64>(),
        moves in prop::collection::vec(0usize..9, 1..9),
    ) {
        let mut rng = GameRng::new(seed);
        let mut state = create_new_game();

        for cell in moves {
            let mut next = make_move(&state, cell);
            if let Some(reply) = get_wopr_move(&next.board, &mut rng) {
                next = make_move(&next, reply);
            }
            for i in 0..9 {
                if let Some(mark) = state.board.get(i) {
                    prop_assert_eq!(next.board.get(i), Some(mark));
                }
            }
            prop_assert!(next.winner.is_none() || next.is_game_over);
            state = next;
        }
    }
}
