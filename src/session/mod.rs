//! Terminal session: the main menu plus one active simulation.
//!
//! ## Routing
//!
//! - `QUIT`/`EXIT` and `DEFCON` work everywhere
//! - At the menu: `HELP`, `LIST GAMES`, `PLAY <n>`, `STATUS`; anything else
//!   is chatter handed to the narrative layer
//! - In a war scenario input goes through `parse_command`
//! - In the duel it names a target, in tic-tac-toe a coordinate
//!
//! A finished game drops the session back to the menu.
//!
//! Narration deltas feed the session's `ScoreBoard`, shown by `STATUS` at
//! the menu. `Session::checkpoint` captures the game and both RNG streams
//! so a restored session replays identically.

mod handler;
mod response;

pub use handler::{ActiveGame, Session, SessionCheckpoint};
pub use response::SessionResponse;
