//! Tic-tac-toe: the operator plays X, WOPR plays O with a fixed-priority
//! heuristic. Beatable with a fork.

mod board;
mod game;

pub use board::{check_winner, coordinate, parse_move, Board, Mark, WIN_LINES};
pub use game::{
    create_new_game, get_wopr_move, make_move, try_make_move, TicTacToeEngine, TicTacToeOutcome,
    TicTacToeState,
};
