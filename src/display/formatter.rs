//! Fixed-width text rendering of game state.
//!
//! Every function here is pure: same input, same text. Lines are joined
//! with `\n` and carry no trailing newline.

use std::fmt::Write as _;

use super::art::{scenario_difficulty, scenario_summary};
use crate::core::GameEvent;
use crate::games::city_duel::{city_status, City, DuelState, DuelWinner};
use crate::games::global_war::{Defcon, GameState, Scenario};
use crate::games::tic_tac_toe::{Board, Mark, TicTacToeOutcome};
use crate::narrative::ScoreBoard;

const RULE: &str = "=============================================================";

/// `1234567` -> `1,234,567`.
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Code name and meaning of a DEFCON level.
#[must_use]
pub fn defcon_description(defcon: Defcon) -> &'static str {
    match defcon.level() {
        5 => "FADE OUT - Lowest state of readiness",
        4 => "DOUBLE TAKE - Increased intelligence watch",
        3 => "ROUND HOUSE - Increase in force readiness",
        2 => "FAST PACE - Further increase in force readiness",
        _ => "COCKED PISTOL - Maximum force readiness",
    }
}

fn defcon_code_name(defcon: Defcon) -> &'static str {
    match defcon.level() {
        5 => "FADE OUT",
        4 => "DOUBLE TAKE",
        3 => "ROUND HOUSE",
        2 => "FAST PACE",
        _ => "COCKED PISTOL",
    }
}

/// Threat severity label for a DEFCON level.
#[must_use]
pub fn defcon_severity(defcon: Defcon) -> &'static str {
    match defcon.level() {
        5 => "LOW",
        4 => "GUARDED",
        3 => "ELEVATED",
        2 => "SEVERE",
        _ => "CRITICAL",
    }
}

fn defcon_bar(defcon: Defcon) -> &'static str {
    match defcon.level() {
        5 => "█░░░░",
        4 => "██░░░",
        3 => "███░░",
        2 => "████░",
        _ => "█████",
    }
}

/// Draw `lines` inside a double-line box `inner` characters wide.
fn boxed(lines: &[String], inner: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "╔{}╗", "═".repeat(inner));
    for line in lines {
        let _ = writeln!(out, "║{line:<inner$}║");
    }
    let _ = write!(out, "╚{}╝", "═".repeat(inner));
    out
}

/// The five-rung DEFCON ladder with the current level marked.
#[must_use]
pub fn defcon_ladder(current: Defcon) -> String {
    let mut lines = vec![
        format!("{:^59}", "DEFENSE READINESS CONDITION"),
        String::new(),
    ];
    for rung in Defcon::LADDER {
        let active = rung == current;
        lines.push(format!(
            "   {} DEFCON {} - {:<13}  [{}]   {:<8}",
            if active { '►' } else { ' ' },
            rung.level(),
            defcon_code_name(rung),
            if active { defcon_bar(rung) } else { "░░░░░" },
            if active { defcon_severity(rung) } else { "" },
        ));
    }
    lines.push(String::new());
    boxed(&lines, 59)
}

/// Menu of playable simulations, numbered for `PLAY <n>`.
#[must_use]
pub fn scenario_list() -> String {
    let mut lines = vec![
        format!("{:^68}", "AVAILABLE WAR SIMULATIONS"),
        String::new(),
    ];
    let mut entry = |n: usize, title: &str, summary: &str, difficulty: &str| {
        lines.push(format!("  [{n}] {title}"));
        lines.push(format!("      {summary}"));
        lines.push(format!("      Difficulty: {difficulty}"));
        lines.push(String::new());
    };
    for (i, scenario) in Scenario::ALL.into_iter().enumerate() {
        entry(
            i + 1,
            scenario.title(),
            scenario_summary(scenario),
            scenario_difficulty(scenario),
        );
    }
    entry(
        6,
        "TIC-TAC-TOE",
        "A strange game. The only winning move is not to play.",
        "██░░░░░░░░ EASY",
    );
    entry(
        7,
        "GLOBAL MISSILE DUEL",
        "Ten missiles, four cities, one turn at a time",
        "████░░░░░░ MODERATE",
    );
    boxed(&lines, 68)
}

/// Full GlobalWar status report.
#[must_use]
pub fn status_report(state: &GameState) -> String {
    let mut out = String::new();
    let row = |out: &mut String, label: &str, player: u64, enemy: u64| {
        let _ = writeln!(
            out,
            "  {:<22}{:>17}{:>17}",
            label,
            group_thousands(player),
            group_thousands(enemy)
        );
    };

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{:^61}", "STRATEGIC STATUS REPORT");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  SCENARIO: {}", state.scenario.title());
    let _ = writeln!(out, "  SESSION:  {}", state.session_id);
    let _ = writeln!(out, "  TURN: {}   PHASE: {}", state.turn, state.phase);
    let _ = writeln!(out, "  {}: {}", state.defcon, defcon_description(state.defcon));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {:<22}{:>17}{:>17}",
        "",
        state.player_side.code(),
        state.enemy_side.code()
    );

    let (p, e) = (&state.player_assets, &state.enemy_assets);
    row(&mut out, "ICBMS", p.icbms.into(), e.icbms.into());
    row(&mut out, "SLBMS", p.slbms.into(), e.slbms.into());
    row(&mut out, "BOMBERS", p.bombers.into(), e.bombers.into());
    row(&mut out, "FIGHTERS", p.fighters.into(), e.fighters.into());
    row(&mut out, "SUBMARINES", p.submarines.into(), e.submarines.into());
    row(&mut out, "CARRIERS", p.carriers.into(), e.carriers.into());
    row(&mut out, "CITIES", p.cities.into(), e.cities.into());
    row(&mut out, "POPULATION", p.population, e.population);
    let _ = writeln!(out);

    let (c, s) = (&state.casualties, &state.strikes);
    row(&mut out, "CIVILIAN CASUALTIES", c.player_civilian, c.enemy_civilian);
    row(&mut out, "MILITARY CASUALTIES", c.player_military, c.enemy_military);
    row(&mut out, "STRIKES LAUNCHED", s.player_launched, s.enemy_launched);
    row(&mut out, "WARHEADS INTERCEPTED", s.player_intercepted, s.enemy_intercepted);

    if let (true, Some(winner)) = (state.game_over, state.winner) {
        let _ = writeln!(out);
        let reason = state
            .end_reason
            .map(|r| r.to_string().to_uppercase())
            .unwrap_or_default();
        let _ = writeln!(out, "  SIMULATION TERMINATED: {reason}");
        let _ = writeln!(out, "  WINNER: {winner}");
    }
    let _ = write!(out, "{RULE}");
    out
}

/// One line per event, oldest first.
pub fn event_log<'a>(events: impl IntoIterator<Item = &'a GameEvent>) -> String {
    events
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Command reference for GlobalWar scenarios.
#[must_use]
pub fn war_help() -> &'static str {
    "AVAILABLE COMMANDS:
  LAUNCH <ICBM|SLBM|BOMBER> <TARGET> [QUANTITY]   (ALSO STRIKE, FIRE)
  DEFEND <TARGET>                                 (ALSO INTERCEPT, SHIELD)
  RECON [TARGET]                                  (ALSO INTEL, SCAN)
  NEGOTIATE                                       (ALSO DIPLOMACY, PEACE)
  STATUS                                          (ALSO SITREP, REPORT)
  SURRENDER                                       (ALSO YIELD)
  QUIT                                            RETURN TO MAIN MENU"
}

/// Command reference for the main menu.
#[must_use]
pub fn menu_help() -> &'static str {
    "WOPR COMMAND REFERENCE:
  LIST GAMES    SHOW AVAILABLE SIMULATIONS
  PLAY <N>      START SIMULATION N
  DEFCON        SHOW CURRENT READINESS CONDITION
  STATUS        SHOW STATUS OF THE ACTIVE SIMULATION
  HELP          SHOW THIS REFERENCE
  QUIT          TERMINATE SESSION"
}

/// The closing screen of a GlobalWar game.
#[must_use]
pub fn game_over_screen(winner: &str, casualties: u64) -> String {
    let lines: Vec<String> = [
        String::new(),
        format!("{:^68}", "G A M E   O V E R"),
        String::new(),
        format!("{:20}WINNER: {}", "", winner),
        String::new(),
        format!("{:20}FINAL CASUALTY COUNT", ""),
        format!("{:20}{}", "", group_thousands(casualties)),
        String::new(),
        String::new(),
        format!("{:14}A STRANGE GAME.", ""),
        format!("{:14}THE ONLY WINNING MOVE IS NOT TO PLAY.", ""),
        String::new(),
        String::new(),
        format!("{:14}HOW ABOUT A NICE GAME OF CHESS?", ""),
        String::new(),
    ]
    .into();
    boxed(&lines, 68)
}

/// Duel status: missiles and per-city health for both sides.
#[must_use]
pub fn war_status(state: &DuelState) -> String {
    let mut lines = vec![
        RULE.to_string(),
        format!("{:^61}", "STRATEGIC STATUS"),
        RULE.to_string(),
        String::new(),
    ];
    let mut side = |name: &str, missiles: u32, cities: [City; 4]| {
        lines.push(format!("{name}:"));
        lines.push(format!("  MISSILES REMAINING: {missiles}"));
        lines.push("  CITY STATUS:".to_string());
        for city in cities {
            let health = state.health(city);
            lines.push(format!(
                "    {:<15} [{}%] {}",
                city.name(),
                health,
                city_status(health)
            ));
        }
        lines.push(String::new());
    };
    side("UNITED STATES", state.missile_count, City::US);
    side("SOVIET UNION", state.enemy_missile_count, City::USSR);
    lines.push(RULE.to_string());
    lines.join("\n")
}

/// Launch menu for the duel.
#[must_use]
pub fn target_options() -> String {
    let mut lines = vec!["SELECT TARGET FOR MISSILE LAUNCH:".to_string(), String::new()];
    for (i, city) in City::USSR.into_iter().enumerate() {
        lines.push(format!("  {}. {:<14} - {}", i + 1, city.name(), city.briefing()));
    }
    lines.push(String::new());
    lines.push("Enter target number (1-4) or STATUS for current situation:".to_string());
    lines.join("\n")
}

/// Closing screen of a duel. Empty while the duel is running.
#[must_use]
pub fn duel_game_over(state: &DuelState) -> String {
    let Some(winner) = state.winner else {
        return String::new();
    };
    let body: &[&str] = match winner {
        DuelWinner::MutualDestruction => &[
            "  OUTCOME: MUTUAL ASSURED DESTRUCTION",
            "",
            "  ALL MAJOR CITIES DESTROYED.",
            "  ESTIMATED GLOBAL CASUALTIES: 2.5 BILLION",
            "  NUCLEAR WINTER PROJECTED: 10 YEARS",
            "",
            "  A STRANGE GAME.",
            "  THE ONLY WINNING MOVE IS NOT TO PLAY.",
        ],
        DuelWinner::Player => &[
            "  OUTCOME: PYRRHIC VICTORY",
            "",
            "  ENEMY NEUTRALIZED, BUT AT TREMENDOUS COST.",
            "  RADIATION FALLOUT WILL DEVASTATE HEMISPHERE.",
            "",
            "  VICTORY MEANS NOTHING IN NUCLEAR WAR.",
        ],
        DuelWinner::Enemy => &[
            "  OUTCOME: DEFEAT",
            "",
            "  US STRATEGIC ASSETS DESTROYED.",
            "  COMMAND AND CONTROL ELIMINATED.",
            "",
            "  SIMULATION TERMINATED.",
        ],
    };

    let mut lines = vec![
        String::new(),
        RULE.to_string(),
        format!("{:^61}", "SIMULATION COMPLETE"),
        RULE.to_string(),
        String::new(),
    ];
    lines.extend(body.iter().map(|l| (*l).to_string()));
    lines.push(String::new());
    lines.push(RULE.to_string());
    lines.join("\n")
}

/// Tic-tac-toe grid with A-C column and 1-3 row labels.
#[must_use]
pub fn board(board: &Board) -> String {
    let cell = |i: usize| board.get(i).map_or(' ', Mark::symbol);
    let row = |n: usize| {
        let base = (n - 1) * 3;
        format!("  {}  {} | {} | {}", n, cell(base), cell(base + 1), cell(base + 2))
    };
    [
        String::new(),
        "     A   B   C".to_string(),
        row(1),
        "    -----------".to_string(),
        row(2),
        "    -----------".to_string(),
        row(3),
        String::new(),
    ]
    .join("\n")
}

/// Closing line of a tic-tac-toe game.
#[must_use]
pub fn tic_tac_toe_outcome(outcome: TicTacToeOutcome) -> &'static str {
    match outcome {
        TicTacToeOutcome::Win(Mark::X) => "YOU WIN. WOPR IS LEARNING.",
        TicTacToeOutcome::Win(Mark::O) => "WOPR WINS.",
        TicTacToeOutcome::Tie => "A STRANGE GAME.\nTHE ONLY WINNING MOVE IS NOT TO PLAY.",
    }
}

/// Intrusion/shield readout with the threat level it implies.
#[must_use]
pub fn score_board(scores: &ScoreBoard) -> String {
    format!(
        "INTRUSION SCORE: {}%   SHIELD LEVEL: {}%   ALERTS RESOLVED: {}\nTHREAT LEVEL: {}",
        scores.intrusion,
        scores.shield,
        scores.alerts_resolved,
        scores.threat_level()
    )
}
