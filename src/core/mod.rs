//! Core building blocks shared by every game: RNG, sides, events,
//! configuration.
//!
//! Nothing in here knows about a particular mini-game.

pub mod config;
pub mod event;
pub mod rng;
pub mod side;

pub use config::{WoprConfig, DEFAULT_NARRATIVE_TIMEOUT, DEFAULT_TRANSCRIPT_WINDOW};
pub use event::{EventKind, GameEvent};
pub use rng::{GameRng, GameRngState};
pub use side::{Bloc, Side};
