//! Game event log entries.
//!
//! Every mechanically relevant thing a GlobalWar game does is recorded as a
//! `GameEvent`. The log is append-only: entries are never edited or
//! reordered once pushed, and the narrative adapter reads the tail of it as
//! its transcript.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::side::Side;

/// What kind of thing happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Launch,
    Intercept,
    Impact,
    Diplomatic,
    DefconChange,
    GameEnd,
    Recon,
}

impl EventKind {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            EventKind::Launch => "LAUNCH",
            EventKind::Intercept => "INTERCEPT",
            EventKind::Impact => "IMPACT",
            EventKind::Diplomatic => "DIPLOMATIC",
            EventKind::DefconChange => "DEFCON_CHANGE",
            EventKind::GameEnd => "GAME_END",
            EventKind::Recon => "RECON",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A recorded event with metadata.
///
/// Used for:
/// - The audit trail of a game
/// - Transcript context for narrative generation
/// - Terminal output after each command
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Turn number when the event happened.
    pub turn: u32,

    /// Wall-clock time the event was recorded.
    pub timestamp: DateTime<Utc>,

    #[serde(rename = "type")]
    pub kind: EventKind,

    /// The side that acted.
    pub actor: Side,

    /// Target named by the command, if any.
    pub target: Option<String>,

    /// Human-readable description.
    pub description: String,
}

impl GameEvent {
    /// Create a new event stamped with the current time.
    #[must_use]
    pub fn new(turn: u32, kind: EventKind, actor: Side, description: impl Into<String>) -> Self {
        Self {
            turn,
            timestamp: Utc::now(),
            kind,
            actor,
            target: None,
            description: description.into(),
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: Option<String>) -> Self {
        self.target = target;
        self
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[TURN {:>3}] {:<10} {:<11} {}",
            self.turn, self.actor, self.kind, self.description
        )
    }
}
