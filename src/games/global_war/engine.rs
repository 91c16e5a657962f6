//! GlobalWar command processing.
//!
//! ## Exchange
//!
//! A LAUNCH is the only command that drives the game forward:
//! 1. The player's strike resolves (stock, interception, casualties, cities)
//! 2. DEFCON escalates one step
//! 3. At DEFCON 1 or 2 the enemy may retaliate with ICBMs
//! 4. Win conditions are checked and the turn advances
//!
//! DEFEND and RECON only write to the log. NEGOTIATE may de-escalate.

use tracing::{debug, info};

use super::scenario::Scenario;
use super::state::{Casualties, EndReason, GameState, Phase, SessionId, Strikes, Winner};
use super::taunts::enemy_taunt;
use crate::command::{Command, Weapon};
use crate::core::{EventKind, GameEvent, GameRng, Side};
use crate::rules::{DuelEngine, GameResult, NoOpReason, Resolution};

/// Fraction of a salvo the defender shoots down, drawn uniformly.
const INTERCEPT_RATE: (f64, f64) = (0.2, 0.4);

/// Civilian casualties per warhead that gets through, drawn uniformly.
const CASUALTIES_PER_HIT: std::ops::Range<u64> = 50_000..200_000;

/// Largest enemy retaliation salvo.
const MAX_RETALIATION: u32 = 5;

/// Chance that one NEGOTIATE de-escalates.
const NEGOTIATION_SUCCESS: f64 = 0.3;

/// Resolved numbers for one salvo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrikeOutcome {
    pub quantity: u32,
    pub intercepted: u32,
    pub hits: u32,
    pub civilian_casualties: u64,
    pub cities_destroyed: u32,
}

/// Roll interception and damage for a salvo of `quantity` warheads.
///
/// `intercepted + hits == quantity` always holds.
pub fn resolve_strike(quantity: u32, rng: &mut GameRng) -> StrikeOutcome {
    let rate = rng.gen_fraction(INTERCEPT_RATE.0, INTERCEPT_RATE.1);
    let intercepted = ((f64::from(quantity) * rate).floor() as u32).min(quantity);
    let hits = quantity - intercepted;
    let per_hit = rng.gen_range(CASUALTIES_PER_HIT);

    StrikeOutcome {
        quantity,
        intercepted,
        hits,
        civilian_casualties: u64::from(hits).saturating_mul(per_hit),
        cities_destroyed: hits / 2,
    }
}

/// Start a new game.
///
/// The enemy is the fixed adversary of `player_side`; both loadouts come
/// from the scenario by bloc.
pub fn initialize_game(scenario: Scenario, player_side: Side, rng: &mut GameRng) -> GameState {
    let enemy_side = player_side.opponent();
    let state = GameState {
        session_id: SessionId::generate(rng),
        scenario,
        player_side,
        enemy_side,
        defcon: scenario.initial_defcon(),
        turn: 1,
        phase: Phase::Setup,
        player_assets: scenario.loadout(player_side.bloc()),
        enemy_assets: scenario.loadout(enemy_side.bloc()),
        casualties: Casualties::default(),
        strikes: Strikes::default(),
        game_over: false,
        winner: None,
        end_reason: None,
        history: im::Vector::new(),
    };

    info!(
        session = %state.session_id,
        scenario = %scenario,
        player = %player_side,
        enemy = %enemy_side,
        defcon = state.defcon.level(),
        "global war initialized"
    );
    state
}

/// Apply one command and return the new state.
///
/// Commands that change nothing (short stock, failed negotiation, a
/// finished game) return an unchanged copy. Use [`try_process_action`] to
/// learn why.
pub fn process_action(state: &GameState, command: &Command, rng: &mut GameRng) -> GameState {
    try_process_action(state, command, rng).into_state()
}

/// Apply one command, reporting whether anything happened.
pub fn try_process_action(
    state: &GameState,
    command: &Command,
    rng: &mut GameRng,
) -> Resolution<GameState> {
    if state.game_over {
        return Resolution::noop(state.clone(), NoOpReason::GameOver);
    }

    match command {
        Command::Launch {
            weapon,
            target,
            quantity,
        } => launch(state, *weapon, target.as_deref(), (*quantity).max(1), rng),
        Command::Defend { target } => {
            let mut next = state.clone();
            let description = format!(
                "Defense systems activated for {}",
                target.as_deref().unwrap_or("ALL SECTORS")
            );
            record(&mut next, EventKind::Intercept, state.player_side, target.clone(), description);
            Resolution::applied(next)
        }
        Command::Recon { target } => {
            let mut next = state.clone();
            record(
                &mut next,
                EventKind::Recon,
                state.player_side,
                target.clone(),
                "Reconnaissance satellites deployed",
            );
            Resolution::applied(next)
        }
        Command::Negotiate => negotiate(state, rng),
        Command::Surrender => {
            let mut next = state.clone();
            finish(&mut next, Winner::Side(state.enemy_side), EndReason::PlayerSurrendered);
            Resolution::applied(next)
        }
        Command::Status | Command::Help => {
            Resolution::noop(state.clone(), NoOpReason::Informational)
        }
    }
}

fn launch(
    state: &GameState,
    weapon: Weapon,
    target: Option<&str>,
    quantity: u32,
    rng: &mut GameRng,
) -> Resolution<GameState> {
    let available = state.player_assets.stock(weapon);
    if available < quantity {
        debug!(%weapon, quantity, available, "launch refused: insufficient stock");
        return Resolution::noop(
            state.clone(),
            NoOpReason::InsufficientStock {
                weapon,
                requested: quantity,
                available,
            },
        );
    }

    let mut next = state.clone();
    next.player_assets.expend(weapon, quantity);
    next.strikes.player_launched += u64::from(quantity);

    let outcome = resolve_strike(quantity, rng);
    next.strikes.enemy_intercepted += u64::from(outcome.intercepted);
    next.casualties.enemy_civilian += outcome.civilian_casualties;
    next.enemy_assets
        .absorb(outcome.cities_destroyed, outcome.civilian_casualties);

    next.defcon = next.defcon.escalate();
    next.phase = next.phase.advance_to(Phase::Combat);

    debug!(
        %weapon,
        quantity,
        hits = outcome.hits,
        intercepted = outcome.intercepted,
        defcon = next.defcon.level(),
        "player strike resolved"
    );
    record(
        &mut next,
        EventKind::Launch,
        state.player_side,
        target.map(str::to_string),
        format!(
            "Launched {} {}(s) at {}. {} hit, {} intercepted.",
            quantity,
            weapon,
            target.unwrap_or("UNDESIGNATED TARGET"),
            outcome.hits,
            outcome.intercepted
        ),
    );

    let chance = next.defcon.retaliation_chance();
    if chance > 0.0 && rng.gen_bool(chance) {
        retaliate(&mut next, rng);
    }

    if next.enemy_assets.cities == 0 {
        let winner = Winner::Side(next.player_side);
        finish(&mut next, winner, EndReason::EnemyCitiesDestroyed);
    } else if next.player_assets.cities == 0 {
        let winner = Winner::Side(next.enemy_side);
        finish(&mut next, winner, EndReason::PlayerCitiesDestroyed);
    }

    if !next.game_over {
        next.turn += 1;
    }
    Resolution::applied(next)
}

/// Enemy answers with up to five ICBMs, capped by its remaining stock.
fn retaliate(state: &mut GameState, rng: &mut GameRng) {
    let stock = state.enemy_assets.icbms;
    if stock == 0 {
        debug!("retaliation skipped: enemy has no ICBMs");
        return;
    }

    let quantity = rng.gen_range(1..=MAX_RETALIATION).min(stock);
    state.enemy_assets.expend(Weapon::Icbm, quantity);
    state.strikes.enemy_launched += u64::from(quantity);

    let outcome = resolve_strike(quantity, rng);
    state.strikes.player_intercepted += u64::from(outcome.intercepted);
    state.casualties.player_civilian += outcome.civilian_casualties;
    state
        .player_assets
        .absorb(outcome.cities_destroyed, outcome.civilian_casualties);

    let mut taunt_rng = rng.for_context(&format!("taunt-{}", state.turn));
    let taunt = enemy_taunt(state, outcome.hits, &mut taunt_rng);

    debug!(
        quantity,
        hits = outcome.hits,
        intercepted = outcome.intercepted,
        "enemy retaliation resolved"
    );
    let description = format!(
        "Enemy retaliated with {} ICBMs. {} hit, {} intercepted. {}",
        quantity, outcome.hits, outcome.intercepted, taunt
    );
    let actor = state.enemy_side;
    record(state, EventKind::Launch, actor, None, description);
}

fn negotiate(state: &GameState, rng: &mut GameRng) -> Resolution<GameState> {
    if state.defcon.is_peace() {
        return Resolution::noop(state.clone(), NoOpReason::AlreadyAtPeace);
    }
    if !rng.gen_bool(NEGOTIATION_SUCCESS) {
        debug!(defcon = state.defcon.level(), "negotiation failed");
        return Resolution::noop(state.clone(), NoOpReason::NegotiationFailed);
    }

    let mut next = state.clone();
    next.defcon = next.defcon.de_escalate();
    next.phase = match next.phase {
        Phase::Setup => Phase::Diplomacy,
        Phase::Combat if next.defcon.is_peace() => Phase::Resolution,
        phase => phase,
    };

    debug!(defcon = next.defcon.level(), phase = ?next.phase, "negotiation succeeded");
    record(
        &mut next,
        EventKind::Diplomatic,
        state.player_side,
        None,
        "Diplomatic channels opened. DEFCON decreased.",
    );
    Resolution::applied(next)
}

fn finish(state: &mut GameState, winner: Winner, reason: EndReason) {
    state.game_over = true;
    state.winner = Some(winner);
    state.end_reason = Some(reason);
    state.phase = state.phase.advance_to(Phase::GameOver);

    let actor = match winner {
        Winner::Side(side) => side,
        Winner::Draw => state.player_side,
    };
    info!(
        session = %state.session_id,
        %winner,
        reason = %reason,
        turn = state.turn,
        "global war ended"
    );
    record(
        state,
        EventKind::GameEnd,
        actor,
        None,
        format!("{reason}. Winner: {winner}."),
    );
}

fn record(
    state: &mut GameState,
    kind: EventKind,
    actor: Side,
    target: Option<String>,
    description: impl Into<String>,
) {
    let event = GameEvent::new(state.turn, kind, actor, description).with_target(target);
    state.history.push_back(event);
}

/// `DuelEngine` adapter for GlobalWar.
///
/// The enemy never moves on its own; retaliation is part of resolving the
/// player's launch.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalWarEngine;

impl DuelEngine for GlobalWarEngine {
    type State = GameState;
    type Move = Command;

    fn name(&self) -> &'static str {
        "global-war"
    }

    fn apply(&self, state: &GameState, mv: &Command, rng: &mut GameRng) -> Resolution<GameState> {
        try_process_action(state, mv, rng)
    }

    fn opponent_to_move(&self, _state: &GameState) -> bool {
        false
    }

    fn opponent_reply(&self, state: &GameState, _rng: &mut GameRng) -> Resolution<GameState> {
        Resolution::noop(state.clone(), NoOpReason::WrongTurn)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if !state.game_over {
            return None;
        }
        Some(match state.winner {
            Some(Winner::Side(side)) if side == state.player_side => GameResult::PlayerWins,
            Some(Winner::Side(_)) => GameResult::OpponentWins,
            Some(Winner::Draw) | None => GameResult::Draw,
        })
    }
}
