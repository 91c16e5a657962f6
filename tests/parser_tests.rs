//! Command parser integration tests: odd input and hand-off to the engine.

use wopr_engine::command::{parse_command, Command, Weapon};
use wopr_engine::core::{GameRng, Side};
use wopr_engine::games::global_war::{initialize_game, process_action, Scenario};

#[test]
fn test_unparseable_quantities_fall_back_to_one() {
    for raw in ["2.5", "99999999999", "1e3", "+"] {
        let command = parse_command(&format!("launch bomber kiev {raw}"));
        assert_eq!(
            command,
            Command::Launch {
                weapon: Weapon::Bomber,
                target: Some("KIEV".to_string()),
                quantity: 1,
            },
            "{raw}"
        );
    }
}

#[test]
fn test_plural_weapon_names() {
    let command = parse_command("fire SLBMs vladivostok 12");
    assert_eq!(
        command,
        Command::Launch {
            weapon: Weapon::Slbm,
            target: Some("VLADIVOSTOK".to_string()),
            quantity: 12,
        }
    );
    assert_eq!(command.to_string(), "LAUNCH SLBM VLADIVOSTOK 12");
}

#[test]
fn test_parsed_commands_drive_the_engine() {
    let mut rng = GameRng::new(11);
    let mut state = initialize_game(Scenario::EuropeTheater, Side::Nato, &mut rng);

    for line in ["intel warsaw", "shield berlin", "status", "help me", "strike bombers prague 3"] {
        state = process_action(&state, &parse_command(line), &mut rng);
    }

    let targets: Vec<Option<&str>> = state.history.iter().map(|e| e.target.as_deref()).collect();
    assert_eq!(targets[..3], [Some("WARSAW"), Some("BERLIN"), Some("PRAGUE")]);
    assert_eq!(state.turn, 2);
}

#[test]
fn test_command_json_shape() {
    let command = parse_command("launch slbm kiev 2");
    let json = serde_json::to_value(&command).unwrap();

    assert_eq!(json["type"], "LAUNCH");
    assert_eq!(json["weapon"], "SLBM");
    assert_eq!(json["target"], "KIEV");
    assert_eq!(json["quantity"], 2);

    let back: Command = serde_json::from_value(json).unwrap();
    assert_eq!(back, command);

    let surrender = serde_json::to_value(parse_command("yield")).unwrap();
    assert_eq!(surrender["type"], "SURRENDER");
}
