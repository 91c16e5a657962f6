//! 3x3 board, marks and coordinates.

use serde::{Deserialize, Serialize};

use crate::error::WoprError;

/// A player mark. The operator is X, WOPR is O.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    #[must_use]
    pub const fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// Rows, columns, diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Nine cells, row-major from A1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board(pub [Option<Mark>; 9]);

impl Board {
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Mark> {
        self.0.get(position).copied().flatten()
    }

    #[must_use]
    pub fn is_free(&self, position: usize) -> bool {
        position < 9 && self.0[position].is_none()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Free cells in ascending order.
    pub fn free_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..9).filter(move |i| self.0[*i].is_none())
    }

    /// Count of cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|cell| **cell == Some(mark)).count()
    }

    /// Copy of the board with `mark` placed at `position`.
    #[must_use]
    pub fn with(&self, position: usize, mark: Mark) -> Board {
        let mut cells = self.0;
        cells[position] = Some(mark);
        Board(cells)
    }
}

/// The mark holding a complete line, if any.
#[must_use]
pub fn check_winner(board: &Board) -> Option<Mark> {
    WIN_LINES.iter().find_map(|[a, b, c]| {
        let mark = board.get(*a)?;
        (board.get(*b) == Some(mark) && board.get(*c) == Some(mark)).then_some(mark)
    })
}

/// Parse an `A1`..`C3` coordinate (column letter, row number) into a cell
/// index.
///
/// ```
/// use wopr_engine::games::tic_tac_toe::parse_move;
///
/// assert_eq!(parse_move("a1").ok(), Some(0));
/// assert_eq!(parse_move("B2").ok(), Some(4));
/// assert_eq!(parse_move("C3").ok(), Some(8));
/// assert!(parse_move("D4").is_err());
/// ```
pub fn parse_move(input: &str) -> Result<usize, WoprError> {
    let normalized = input.trim().to_ascii_uppercase();
    let invalid = || WoprError::InvalidCoordinate(input.to_string());

    let mut chars = normalized.chars();
    let (Some(column), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };
    let column = match column {
        'A' => 0,
        'B' => 1,
        'C' => 2,
        _ => return Err(invalid()),
    };
    let row = match row {
        '1' => 0,
        '2' => 1,
        '3' => 2,
        _ => return Err(invalid()),
    };
    Ok(row * 3 + column)
}

/// Coordinate label for a cell index.
#[must_use]
pub fn coordinate(position: usize) -> Option<String> {
    (position < 9).then(|| {
        let column = char::from(b'A' + (position % 3) as u8);
        format!("{}{}", column, position / 3 + 1)
    })
}
