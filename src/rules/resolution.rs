//! Tagged results for engine operations.
//!
//! Engines never fail, but several operations legitimately do nothing: a
//! launch without stock, a move out of turn, a negotiation the dice refused.
//! `Resolution` carries the new state together with why nothing happened,
//! so callers can tell an illegal move from an unlucky roll.

use serde::{Deserialize, Serialize};

use crate::command::Weapon;

/// Why an operation left the state unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum NoOpReason {
    /// The game has already ended.
    GameOver,
    /// It is not this side's turn.
    WrongTurn,
    /// Not enough of the requested weapon left.
    InsufficientStock {
        weapon: Weapon,
        requested: u32,
        available: u32,
    },
    /// Duel side has no missiles left.
    OutOfMissiles,
    /// Target is not a valid city for this shot.
    InvalidTarget,
    /// Board cell outside 0..9.
    InvalidPosition,
    /// Board cell already taken.
    CellOccupied,
    /// Negotiation roll failed.
    NegotiationFailed,
    /// DEFCON is already 5; nothing to de-escalate.
    AlreadyAtPeace,
    /// Read-only command (STATUS, HELP).
    Informational,
}

impl std::fmt::Display for NoOpReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoOpReason::GameOver => f.write_str("SIMULATION ALREADY TERMINATED"),
            NoOpReason::WrongTurn => f.write_str("NOT YOUR TURN"),
            NoOpReason::InsufficientStock {
                weapon,
                requested,
                available,
            } => write!(
                f,
                "INSUFFICIENT {weapon} STOCK: {requested} REQUESTED, {available} AVAILABLE"
            ),
            NoOpReason::OutOfMissiles => f.write_str("NO MISSILES REMAINING"),
            NoOpReason::InvalidTarget => f.write_str("INVALID TARGET"),
            NoOpReason::InvalidPosition => f.write_str("INVALID POSITION"),
            NoOpReason::CellOccupied => f.write_str("POSITION ALREADY OCCUPIED"),
            NoOpReason::NegotiationFailed => f.write_str("NEGOTIATIONS STALLED"),
            NoOpReason::AlreadyAtPeace => f.write_str("DEFCON 5 ALREADY IN EFFECT"),
            NoOpReason::Informational => f.write_str("NO ACTION TAKEN"),
        }
    }
}

/// Resolution status of an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionStatus {
    Applied,
    NoOp(NoOpReason),
}

/// The state after an operation, plus whether anything happened.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution<S> {
    pub state: S,
    pub status: ResolutionStatus,
}

impl<S> Resolution<S> {
    #[must_use]
    pub fn applied(state: S) -> Self {
        Self {
            state,
            status: ResolutionStatus::Applied,
        }
    }

    #[must_use]
    pub fn noop(state: S, reason: NoOpReason) -> Self {
        Self {
            state,
            status: ResolutionStatus::NoOp(reason),
        }
    }

    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.status == ResolutionStatus::Applied
    }

    /// The reason nothing happened, if nothing happened.
    #[must_use]
    pub fn noop_reason(&self) -> Option<NoOpReason> {
        match self.status {
            ResolutionStatus::Applied => None,
            ResolutionStatus::NoOp(reason) => Some(reason),
        }
    }

    /// Drop the status and keep the state.
    #[must_use]
    pub fn into_state(self) -> S {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applied_and_noop() {
        let applied = Resolution::applied(5);
        assert!(applied.is_applied());
        assert_eq!(applied.noop_reason(), None);
        assert_eq!(applied.into_state(), 5);

        let noop = Resolution::noop(5, NoOpReason::WrongTurn);
        assert!(!noop.is_applied());
        assert_eq!(noop.noop_reason(), Some(NoOpReason::WrongTurn));
    }

    #[test]
    fn test_reason_display() {
        let reason = NoOpReason::InsufficientStock {
            weapon: Weapon::Slbm,
            requested: 10,
            available: 3,
        };
        assert_eq!(
            reason.to_string(),
            "INSUFFICIENT SLBM STOCK: 10 REQUESTED, 3 AVAILABLE"
        );
    }

    #[test]
    fn test_reason_serialization() {
        let json = serde_json::to_value(NoOpReason::CellOccupied).unwrap();
        assert_eq!(json["reason"], "cell_occupied");
    }
}
