//! Nation-versus-nation missile exchange driven by DEFCON.
//!
//! Each side holds a `GameAssets` inventory taken from the scenario
//! loadout. Player launches escalate DEFCON; at DEFCON 2 and 1 the enemy
//! answers automatically. The first side to lose every city loses.

mod engine;
mod scenario;
mod state;
mod taunts;

pub use engine::{
    initialize_game, process_action, resolve_strike, try_process_action, GlobalWarEngine,
    StrikeOutcome,
};
pub use scenario::Scenario;
pub use state::{
    Casualties, Defcon, EndReason, GameAssets, GameState, Phase, SessionId, Strikes, Winner,
};
pub use taunts::{enemy_taunt, TauntCategory};
