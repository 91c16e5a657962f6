//! Shared rules vocabulary for the mini-games.
//!
//! Games implement `DuelEngine` to define:
//! - How an operator move changes state
//! - How the opponent answers
//! - Win/loss conditions
//!
//! Operations report "nothing happened" through `Resolution` rather than
//! errors; engines have no failure paths.

pub mod engine;
pub mod resolution;

pub use engine::{play_round, DuelEngine, GameResult, Round};
pub use resolution::{NoOpReason, Resolution, ResolutionStatus};
