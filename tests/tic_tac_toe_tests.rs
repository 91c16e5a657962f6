//! Tic-tac-toe integration tests.

use wopr_engine::core::GameRng;
use wopr_engine::games::tic_tac_toe::{
    check_winner, create_new_game, get_wopr_move, make_move, parse_move, try_make_move, Board,
    Mark, TicTacToeEngine, TicTacToeOutcome, TicTacToeState,
};
use wopr_engine::rules::{play_round, GameResult, NoOpReason, ResolutionStatus};

fn board_from(cells: &str) -> Board {
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

fn play(state: &TicTacToeState, cell: usize, rng: &mut GameRng) -> TicTacToeState {
    let round = play_round(&TicTacToeEngine, state, &cell, rng);
    assert_eq!(round.player, ResolutionStatus::Applied, "X at {cell}");
    round.state
}

#[test]
fn test_opening_exchange() {
    let mut rng = GameRng::new(42);
    let state = make_move(&create_new_game(), 0);

    let reply = get_wopr_move(&state.board, &mut rng).unwrap();
    let state = make_move(&state, reply);

    assert_eq!(state.board.count(Mark::X), 1);
    assert_eq!(state.board.count(Mark::O), 1);
    assert!(!state.is_game_over);
    assert_eq!(state.winner, None);
    assert_eq!(reply, 4, "center is free, so WOPR takes it");
}

#[test]
fn test_win_before_block() {
    let mut rng = GameRng::new(1);
    // O can finish the middle row; X threatens the top row.
    let board = board_from("XX.OO.X..");
    assert_eq!(get_wopr_move(&board, &mut rng), Some(5));
}

#[test]
fn test_block_when_no_win() {
    let mut rng = GameRng::new(1);
    let board = board_from("X.X.O....");
    assert_eq!(get_wopr_move(&board, &mut rng), Some(1));
}

#[test]
fn test_occupied_cell_is_refused() {
    let state = make_move(&create_new_game(), 4);
    let resolution = try_make_move(&state, 4);

    assert_eq!(resolution.noop_reason(), Some(NoOpReason::CellOccupied));
    assert_eq!(resolution.into_state(), state);
}

#[test]
fn test_full_board_without_line_is_a_tie() {
    // X O X / X O O / O X _ : X to move at 8 fills the board, no line.
    let state = TicTacToeState {
        board: board_from("XOXXOOOX."),
        current_player: Mark::X,
        winner: None,
        is_game_over: false,
    };

    let next = make_move(&state, 8);

    assert!(next.is_game_over);
    assert_eq!(next.winner, Some(TicTacToeOutcome::Tie));
    assert_eq!(check_winner(&next.board), None);
}

#[test]
fn test_fork_beats_the_heuristic() {
    for seed in 0..10 {
        let mut rng = GameRng::new(seed);
        let state = play(&create_new_game(), parse_move("A1").unwrap(), &mut rng);
        assert_eq!(state.board.get(4), Some(Mark::O));

        let state = play(&state, parse_move("C3").unwrap(), &mut rng);
        let corner = if state.board.get(2) == Some(Mark::O) { 6 } else { 2 };
        assert_eq!(state.board.get(8 - corner), Some(Mark::O), "seed {seed}");

        // Taking the last corner blocks O and opens two lines at once.
        let state = play(&state, corner, &mut rng);
        let threats = if corner == 6 { [3, 7] } else { [1, 5] };
        let finish = threats
            .into_iter()
            .find(|&cell| state.board.is_free(cell))
            .unwrap();

        let round = play_round(&TicTacToeEngine, &state, &finish, &mut rng);
        assert_eq!(round.result, Some(GameResult::PlayerWins), "seed {seed}");
        assert_eq!(round.opponent, None);
    }
}

#[test]
fn test_board_only_fills() {
    let mut rng = GameRng::new(7);
    let mut state = create_new_game();

    while !state.is_game_over {
        let cell = state.board.free_cells().next().unwrap();
        let before = state.board;
        state = play(&state, cell, &mut rng);
        for i in 0..9 {
            if let Some(mark) = before.get(i) {
                assert_eq!(state.board.get(i), Some(mark));
            }
        }
    }
    assert!(state.winner.is_some());
}
