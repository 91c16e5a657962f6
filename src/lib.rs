//! # wopr-engine
//!
//! A turn-based strategic wargame engine behind a WOPR-style terminal.
//!
//! ## Design Principles
//!
//! 1. **Pure Engines**: Every game operation takes a state value and
//!    returns a new one. Inputs are never mutated; there is no I/O.
//!
//! 2. **Injected Randomness**: Interception, damage, retaliation and AI
//!    choices all draw from a caller-supplied `GameRng`. A fixed seed
//!    replays a game exactly.
//!
//! 3. **No Failure Paths**: Engines never return errors. An operation that
//!    does nothing says why through `Resolution`.
//!
//! ## Architecture
//!
//! - **Shared Duel Abstraction**: The three mini-games implement
//!   `DuelEngine`; `play_round` runs operator move plus opponent answer.
//!
//! - **Persistent Data Structures**: Event logs and target lists use
//!   `im-rs`, so returning a new state is cheap.
//!
//! - **Narration on the Side**: The optional narrative service reads a
//!   context snapshot and never touches engine state.
//!
//! ## Modules
//!
//! - `core`: RNG, sides, events, configuration
//! - `command`: Free-text command parsing
//! - `rules`: `DuelEngine` trait and tagged resolutions
//! - `games`: GlobalWar, city duel, tic-tac-toe
//! - `display`: Fixed-width text rendering and terminal art
//! - `narrative`: Timeout-bounded narrative adapter
//! - `session`: Menu and input routing for one terminal

pub mod command;
pub mod core;
pub mod display;
pub mod error;
pub mod games;
pub mod narrative;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Bloc, EventKind, GameEvent, GameRng, GameRngState, Side, WoprConfig,
};

pub use crate::command::{parse_command, Command, CommandKind, Weapon};

pub use crate::rules::{
    play_round, DuelEngine, GameResult, NoOpReason, Resolution, ResolutionStatus, Round,
};

pub use crate::games::global_war::{
    initialize_game, process_action, Defcon, GameAssets, GameState, GlobalWarEngine, Phase,
    Scenario, Winner,
};

pub use crate::games::city_duel::{
    create_war_game, enemy_turn, get_enemy_target, launch_missile, City, CityDuelEngine,
    DuelState, DuelTurn, DuelWinner,
};

pub use crate::games::tic_tac_toe::{
    create_new_game, get_wopr_move, make_move, Board, Mark, TicTacToeEngine, TicTacToeOutcome,
    TicTacToeState,
};

pub use crate::error::{ConfigError, NarrativeError, WoprError};
pub use crate::session::{Session, SessionCheckpoint, SessionResponse};
