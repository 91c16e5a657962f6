//! Tic-tac-toe against the WOPR heuristic.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::board::{check_winner, Board, Mark};
use crate::core::GameRng;
use crate::rules::{DuelEngine, GameResult, NoOpReason, Resolution};

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicTacToeOutcome {
    Win(Mark),
    Tie,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToeState {
    pub board: Board,
    pub current_player: Mark,
    pub winner: Option<TicTacToeOutcome>,
    pub is_game_over: bool,
}

/// Empty board, X to move.
#[must_use]
pub fn create_new_game() -> TicTacToeState {
    TicTacToeState {
        board: Board::default(),
        current_player: Mark::X,
        winner: None,
        is_game_over: false,
    }
}

/// Place the current player's mark; see [`try_make_move`].
#[must_use]
pub fn make_move(state: &TicTacToeState, position: usize) -> TicTacToeState {
    try_make_move(state, position).into_state()
}

/// Place the current player's mark at `position` and alternate.
///
/// Nothing happens if the game is over, the cell is taken or `position`
/// is off the board.
pub fn try_make_move(state: &TicTacToeState, position: usize) -> Resolution<TicTacToeState> {
    if state.is_game_over {
        return Resolution::noop(*state, NoOpReason::GameOver);
    }
    if position >= 9 {
        return Resolution::noop(*state, NoOpReason::InvalidPosition);
    }
    if !state.board.is_free(position) {
        return Resolution::noop(*state, NoOpReason::CellOccupied);
    }

    let board = state.board.with(position, state.current_player);
    let winner = match check_winner(&board) {
        Some(mark) => Some(TicTacToeOutcome::Win(mark)),
        None if board.is_full() => Some(TicTacToeOutcome::Tie),
        None => None,
    };

    Resolution::applied(TicTacToeState {
        board,
        current_player: state.current_player.other(),
        winner,
        is_game_over: winner.is_some(),
    })
}

/// First free cell that would complete a line for `mark`.
fn winning_cell(board: &Board, mark: Mark) -> Option<usize> {
    board
        .free_cells()
        .find(|&i| check_winner(&board.with(i, mark)) == Some(mark))
}

/// WOPR's move as O: win, else block, else center, else a random corner,
/// else any random free cell. `None` on a full board.
pub fn get_wopr_move(board: &Board, rng: &mut GameRng) -> Option<usize> {
    if let Some(cell) = winning_cell(board, Mark::O).or_else(|| winning_cell(board, Mark::X)) {
        return Some(cell);
    }
    if board.is_free(CENTER) {
        return Some(CENTER);
    }

    let corners: SmallVec<[usize; 4]> = CORNERS.into_iter().filter(|&i| board.is_free(i)).collect();
    if let Some(corner) = rng.choose(&corners) {
        return Some(*corner);
    }

    let free: SmallVec<[usize; 9]> = board.free_cells().collect();
    rng.choose(&free).copied()
}

/// `DuelEngine` adapter: the operator plays X, WOPR answers as O.
#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToeEngine;

impl DuelEngine for TicTacToeEngine {
    type State = TicTacToeState;
    type Move = usize;

    fn name(&self) -> &'static str {
        "tic-tac-toe"
    }

    fn apply(
        &self,
        state: &TicTacToeState,
        mv: &usize,
        _rng: &mut GameRng,
    ) -> Resolution<TicTacToeState> {
        if !state.is_game_over && state.current_player != Mark::X {
            return Resolution::noop(*state, NoOpReason::WrongTurn);
        }
        try_make_move(state, *mv)
    }

    fn opponent_to_move(&self, state: &TicTacToeState) -> bool {
        !state.is_game_over && state.current_player == Mark::O
    }

    fn opponent_reply(
        &self,
        state: &TicTacToeState,
        rng: &mut GameRng,
    ) -> Resolution<TicTacToeState> {
        match get_wopr_move(&state.board, rng) {
            Some(cell) => {
                debug!(cell, "wopr move chosen");
                try_make_move(state, cell)
            }
            None => Resolution::noop(*state, NoOpReason::InvalidPosition),
        }
    }

    fn is_terminal(&self, state: &TicTacToeState) -> Option<GameResult> {
        state.winner.map(|outcome| match outcome {
            TicTacToeOutcome::Win(Mark::X) => GameResult::PlayerWins,
            TicTacToeOutcome::Win(Mark::O) => GameResult::OpponentWins,
            TicTacToeOutcome::Tie => GameResult::Draw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::play_round;

    fn board(cells: &str) -> Board {
        let mut out = [None; 9];
        for (i, c) in cells.chars().enumerate() {
            out[i] = match c {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                _ => None,
            };
        }
        Board(out)
    }

    #[test]
    fn test_make_move_alternates() {
        let state = make_move(&create_new_game(), 0);
        assert_eq!(state.board.get(0), Some(Mark::X));
        assert_eq!(state.current_player, Mark::O);

        let state = make_move(&state, 4);
        assert_eq!(state.board.get(4), Some(Mark::O));
        assert_eq!(state.current_player, Mark::X);
    }

    #[test]
    fn test_occupied_and_out_of_range() {
        let state = make_move(&create_new_game(), 0);
        assert_eq!(
            try_make_move(&state, 0).noop_reason(),
            Some(NoOpReason::CellOccupied)
        );
        assert_eq!(
            try_make_move(&state, 9).noop_reason(),
            Some(NoOpReason::InvalidPosition)
        );
    }

    #[test]
    fn test_win_and_tie() {
        let mut state = create_new_game();
        for cell in [0, 3, 1, 4, 2] {
            state = make_move(&state, cell);
        }
        assert!(state.is_game_over);
        assert_eq!(state.winner, Some(TicTacToeOutcome::Win(Mark::X)));
        assert_eq!(try_make_move(&state, 8).noop_reason(), Some(NoOpReason::GameOver));

        let mut state = create_new_game();
        for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            state = make_move(&state, cell);
        }
        assert!(state.is_game_over);
        assert_eq!(state.winner, Some(TicTacToeOutcome::Tie));
    }

    #[test]
    fn test_wopr_wins_before_blocking() {
        let mut rng = GameRng::new(1);
        // O can finish the middle row; X threatens the top row.
        let b = board("XX.OO....");
        assert_eq!(get_wopr_move(&b, &mut rng), Some(5));
    }

    #[test]
    fn test_wopr_blocks() {
        let mut rng = GameRng::new(1);
        let b = board("X...O...X");
        assert_ne!(get_wopr_move(&b, &mut rng), None);
        let b = board("XX..O....");
        assert_eq!(get_wopr_move(&b, &mut rng), Some(2));
    }

    #[test]
    fn test_wopr_prefers_center_then_corners() {
        let mut rng = GameRng::new(2);
        assert_eq!(get_wopr_move(&board("X........"), &mut rng), Some(4));

        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let cell = get_wopr_move(&board("....X...."), &mut rng);
            assert!(matches!(cell, Some(0 | 2 | 6 | 8)));
        }
    }

    #[test]
    fn test_wopr_on_full_board() {
        let mut rng = GameRng::new(3);
        assert_eq!(get_wopr_move(&board("XOXXOOOXX"), &mut rng), None);
    }

    #[test]
    fn test_round_plays_both_marks() {
        let mut rng = GameRng::new(4);
        let round = play_round(&TicTacToeEngine, &create_new_game(), &0, &mut rng);

        assert_eq!(round.state.board.count(Mark::X), 1);
        assert_eq!(round.state.board.count(Mark::O), 1);
        assert_eq!(round.state.board.get(4), Some(Mark::O));
        assert_eq!(round.result, None);
    }
}
