//! Terminal rendering.
//!
//! `formatter` turns state snapshots into fixed-width text; `art` holds the
//! static banners and animation frames.

pub mod art;
mod formatter;

pub use art::Animation;
pub use formatter::{
    board, defcon_description, defcon_ladder, defcon_severity, duel_game_over, event_log,
    game_over_screen, group_thousands, menu_help, scenario_list, score_board, status_report,
    target_options, tic_tac_toe_outcome, war_help, war_status,
};
