//! Terminal session integration tests.

use wopr_engine::core::{EventKind, WoprConfig};
use wopr_engine::display::Animation;
use wopr_engine::games::global_war::Scenario;
use wopr_engine::narrative::{Narration, ScoreBoard};
use wopr_engine::session::{ActiveGame, Session, SessionCheckpoint};

fn session(seed: u64) -> Session {
    Session::new(WoprConfig::default().with_seed(seed))
}

#[test]
fn test_menu_commands() {
    let mut session = session(1);

    let help = session.handle("help");
    assert!(help.text.starts_with("WOPR COMMAND REFERENCE:"));

    let list = session.handle("LIST GAMES");
    assert!(list.text.contains("[1] GLOBAL THERMONUCLEAR WAR"));
    assert!(list.text.contains("[6] TIC-TAC-TOE"));
    assert!(list.text.contains("[7] GLOBAL MISSILE DUEL"));

    let defcon = session.handle("defcon");
    assert!(defcon.text.contains("► DEFCON 5 - FADE OUT"));

    let status = session.handle("status");
    assert!(status.text.starts_with("NO ACTIVE SIMULATION"));
    assert!(status.text.contains("INTRUSION SCORE: 82%   SHIELD LEVEL: 34%"));
    assert!(status.needs_narration.is_none());
}

#[test]
fn test_banner_has_logo_and_boot_sequence() {
    let banner = Session::banner();
    assert!(!banner.starts_with('\n'));
    assert!(banner.lines().count() > 19);
}

#[test]
fn test_global_war_through_the_terminal() {
    let mut session = session(2);

    let opening = session.handle("PLAY 1");
    assert_eq!(opening.animations, vec![Animation::DefconAlert]);
    assert!(opening.text.contains("STRATEGIC STATUS REPORT"));
    assert_eq!(session.defcon().level(), 1);

    let strike = session.handle("launch icbm moscow 5");
    assert_eq!(strike.events.len(), 2);
    assert_eq!(strike.events[0].kind, EventKind::Launch);
    assert_eq!(
        strike.animations,
        vec![Animation::MissileLaunch, Animation::Explosion, Animation::CounterStrike]
    );
    assert!(strike.text.contains("Launched 5 ICBM(s) at MOSCOW."));
    let context = strike.needs_narration.unwrap();
    assert_eq!(context.scenario, Some(Scenario::GlobalThermonuclearWar));
    assert_eq!(context.transcript.len(), 2);

    let status = session.handle("sitrep");
    assert!(status.text.contains("STRIKES LAUNCHED"));
    assert!(status.events.is_empty());

    let surrender = session.handle("surrender");
    assert!(surrender.game_over);
    assert_eq!(surrender.events.len(), 1);
    assert_eq!(surrender.events[0].kind, EventKind::GameEnd);
    assert!(surrender.text.contains("G A M E   O V E R"));
    assert!(surrender.text.contains("WINNER: USSR"));
    assert!(surrender.needs_narration.is_none());
    assert_eq!(session.game(), &ActiveGame::Menu);
}

#[test]
fn test_refused_war_command_reports_reason() {
    let mut session = session(3);
    session.handle("PLAY 4");

    let response = session.handle("launch icbm baghdad");
    assert_eq!(response.text, "INSUFFICIENT ICBM STOCK: 1 REQUESTED, 0 AVAILABLE.");
    assert!(response.events.is_empty());
    assert!(response.animations.is_empty());
}

#[test]
fn test_default_side_from_config() {
    let mut session = Session::new(
        WoprConfig::default()
            .with_seed(4)
            .with_default_side(wopr_engine::Side::Ussr),
    );
    session.handle("play pacific-theater");

    match session.game() {
        ActiveGame::GlobalWar(state) => {
            assert_eq!(state.player_side, wopr_engine::Side::Ussr);
            assert_eq!(state.enemy_side, wopr_engine::Side::Usa);
        }
        other => panic!("expected a war game, got {other:?}"),
    }
}

#[test]
fn test_city_duel_through_the_terminal() {
    let mut session = session(5);
    let opening = session.handle("PLAY 7");
    assert!(opening.text.contains("SELECT TARGET FOR MISSILE LAUNCH:"));

    let bad = session.handle("PARIS");
    assert!(bad.text.starts_with("UNKNOWN CITY: PARIS."));

    let strike = session.handle("1");
    assert!(strike.text.starts_with("MISSILE LAUNCHED AT MOSCOW."));
    assert!(strike.text.contains("INCOMING! ENEMY MISSILE STRIKE ON WASHINGTON."));
    assert!(strike.text.contains("MISSILES REMAINING: 9."));

    let mut finished = false;
    for _ in 0..9 {
        let response = session.handle("kiev");
        if response.game_over {
            assert!(response.text.contains("SIMULATION COMPLETE"));
            finished = true;
            break;
        }
    }
    assert!(finished);
    assert_eq!(session.game(), &ActiveGame::Menu);
}

#[test]
fn test_tic_tac_toe_through_the_terminal() {
    let mut session = session(6);
    session.handle("PLAY 6");

    let bad = session.handle("Z9");
    assert_eq!(bad.text, "INVALID BOARD COORDINATE: Z9. USE A1-C3.");

    let first = session.handle("a1");
    assert!(first.text.contains("WOPR PLAYS B2."));
    assert!(first.text.ends_with("YOUR MOVE."));

    let taken = session.handle("B2");
    assert!(taken.text.starts_with("POSITION ALREADY OCCUPIED."));

    let mut finished = false;
    for cell in ["A2", "A3", "B1", "B3", "C1", "C2", "C3"] {
        let response = session.handle(cell);
        if response.game_over {
            finished = true;
            break;
        }
    }
    assert!(finished);
    assert_eq!(session.game(), &ActiveGame::Menu);
}

#[test]
fn test_abandon_and_exit() {
    let mut session = session(7);
    session.handle("PLAY 2");

    let abort = session.handle("quit");
    assert!(!abort.exit);
    assert_eq!(abort.text, "SIMULATION ABORTED. RETURNING TO MAIN MENU.");

    let bye = session.handle("exit");
    assert!(bye.exit);
    assert_eq!(bye.text, "GOODBYE, PROFESSOR FALKEN.");
}

#[test]
fn test_narration_moves_the_score_board() {
    let mut session = session(8);
    assert_eq!(session.scores(), &ScoreBoard::default());

    let narration = Narration::from_completion(
        r#"{"response": "INTRUDER ISOLATED.", "intrusionScoreDelta": -25, "shieldLevelDelta": 8, "alertResolved": true}"#,
    );
    session.apply_narration(&narration);

    assert_eq!(session.scores().intrusion, 72);
    assert_eq!(session.scores().shield, 42);
    assert_eq!(session.scores().alerts_resolved, 1);

    let status = session.handle("status");
    assert!(status
        .text
        .contains("INTRUSION SCORE: 72%   SHIELD LEVEL: 42%   ALERTS RESOLVED: 1"));
    assert!(status.text.contains("THREAT LEVEL: DEFCON 3"));
}

// =============================================================================
// Checkpoints
// =============================================================================

#[test]
fn test_restored_session_replays_identically() {
    let mut original = session(9);
    original.handle("PLAY 1");
    original.handle("launch icbm moscow 5");
    let narration = Narration::from_completion(r#"{"response": "", "shieldLevelDelta": 5}"#);
    original.apply_narration(&narration);

    let json = serde_json::to_string(&original.checkpoint()).unwrap();
    let checkpoint: SessionCheckpoint = serde_json::from_str(&json).unwrap();
    let mut restored = Session::restore(checkpoint);

    assert_eq!(restored.scores(), original.scores());
    assert_eq!(restored.game(), original.game());

    for input in ["launch slbm leningrad 8", "negotiate", "launch bomber kiev 3"] {
        let expected = original.handle(input);
        let actual = restored.handle(input);
        assert_eq!(actual.text, expected.text);
        assert_eq!(actual.animations, expected.animations);
    }

    match (original.game(), restored.game()) {
        (ActiveGame::GlobalWar(a), ActiveGame::GlobalWar(b)) => {
            assert_eq!(a.player_assets, b.player_assets);
            assert_eq!(a.enemy_assets, b.enemy_assets);
            assert_eq!(a.casualties, b.casualties);
            assert_eq!(a.defcon, b.defcon);
            assert_eq!(a.turn, b.turn);
        }
        other => panic!("expected two war games, got {other:?}"),
    }
}

#[test]
fn test_checkpoint_at_menu_keeps_game_stream() {
    let mut original = session(10);
    let mut restored = Session::restore(original.checkpoint());

    original.handle("PLAY 6");
    restored.handle("PLAY 6");
    for cell in ["A1", "C3", "A3"] {
        assert_eq!(restored.handle(cell).text, original.handle(cell).text);
    }
}
