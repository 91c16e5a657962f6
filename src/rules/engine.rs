//! Shared turn-based duel abstraction.
//!
//! The three mini-games have different data models (asset counts, city
//! health maps, board cells) but the same shape:
//! - The operator makes a move
//! - The opponent may answer
//! - A terminal check runs after every mutation
//!
//! Each game implements `DuelEngine`; `play_round` drives one exchange.

use serde::{Deserialize, Serialize};

use super::resolution::{Resolution, ResolutionStatus};
use crate::core::GameRng;

/// Result of a completed game, from the operator's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The operator won.
    PlayerWins,
    /// The opponent (WOPR or the enemy side) won.
    OpponentWins,
    /// Nobody won: a tied board or mutual destruction.
    Draw,
}

impl GameResult {
    #[must_use]
    pub fn is_player_victory(self) -> bool {
        self == GameResult::PlayerWins
    }
}

/// Duel engine trait.
///
/// ## Implementation Notes
///
/// - `apply` and `opponent_reply` never mutate their input; they return a
///   new state wrapped in a `Resolution`
/// - All randomness flows through the `GameRng` argument
/// - `is_terminal`: Return None if the game continues
pub trait DuelEngine {
    /// Game state value.
    type State: Clone;

    /// Operator move.
    type Move;

    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Apply an operator move.
    fn apply(&self, state: &Self::State, mv: &Self::Move, rng: &mut GameRng)
        -> Resolution<Self::State>;

    /// Whether the opponent is due to answer in this state.
    fn opponent_to_move(&self, state: &Self::State) -> bool;

    /// Let the opponent answer.
    fn opponent_reply(&self, state: &Self::State, rng: &mut GameRng) -> Resolution<Self::State>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &Self::State) -> Option<GameResult>;
}

/// Outcome of one operator move plus the opponent's answer.
#[derive(Clone, Debug)]
pub struct Round<S> {
    /// State after the exchange.
    pub state: S,
    /// What happened to the operator's move.
    pub player: ResolutionStatus,
    /// What happened to the opponent's answer, if it was due.
    pub opponent: Option<ResolutionStatus>,
    /// Set once the game has ended.
    pub result: Option<GameResult>,
}

/// Play one exchange: operator move, then the opponent if it is due and the
/// game is still running.
pub fn play_round<E: DuelEngine>(
    engine: &E,
    state: &E::State,
    mv: &E::Move,
    rng: &mut GameRng,
) -> Round<E::State> {
    let player = engine.apply(state, mv, rng);
    let mut round = Round {
        player: player.status,
        state: player.state,
        opponent: None,
        result: None,
    };

    if round.player == ResolutionStatus::Applied
        && engine.is_terminal(&round.state).is_none()
        && engine.opponent_to_move(&round.state)
    {
        let reply = engine.opponent_reply(&round.state, rng);
        round.opponent = Some(reply.status);
        round.state = reply.state;
    }

    round.result = engine.is_terminal(&round.state);
    tracing::debug!(
        engine = engine.name(),
        player = ?round.player,
        opponent = ?round.opponent,
        result = ?round.result,
        "round resolved"
    );
    round
}
