//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// One of the two symbols a player places on the board.
///
/// Emptiness is not a mark; an empty cell is `None` in [`Board`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Moves first.
    X,
    /// Moves second. The computer opponent always plays O.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the mark whose turn it is after `moves_played` moves.
    pub fn for_turn(moves_played: usize) -> Self {
        if moves_played % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A cell location identified by row and column.
///
/// Coordinates are not range-checked on construction: squares can come from
/// untrusted input and are validated where they are applied (see
/// [`Square::is_in_bounds`]).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("({}, {})", row, col)]
pub struct Square {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Square {
    /// All in-bounds squares in row-major order.
    pub const ALL: [Square; CELL_COUNT] = [
        Square::new(0, 0),
        Square::new(0, 1),
        Square::new(0, 2),
        Square::new(1, 0),
        Square::new(1, 1),
        Square::new(1, 2),
        Square::new(2, 0),
        Square::new(2, 1),
        Square::new(2, 2),
    ];

    /// Creates a square. Out-of-range coordinates are allowed.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true if the square lies on the 3x3 board.
    pub fn is_in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Converts to a row-major index (0-8), if in bounds.
    pub fn index(self) -> Option<usize> {
        self.is_in_bounds().then_some(self.row * BOARD_SIZE + self.col)
    }

    /// Creates a square from a row-major index (0-8).
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then(|| Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    /// Human-readable label, e.g. "Top-left".
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            (2, 2) => "Bottom-right",
            _ => "Off-board",
        }
    }
}

/// 3x3 board snapshot.
///
/// Boards are values: they are derived from a history and never edited in
/// place by callers. [`Board::with_mark`] returns a fresh copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mark at `square`, or `None` if empty or off the board.
    pub fn get(&self, square: Square) -> Option<Mark> {
        if square.is_in_bounds() {
            self.cells[square.row][square.col]
        } else {
            None
        }
    }

    /// Checks if an in-bounds square is empty.
    pub fn is_empty(&self, square: Square) -> bool {
        square.is_in_bounds() && self.cells[square.row][square.col].is_none()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Empty squares in row-major order.
    pub fn empty_squares(&self) -> impl Iterator<Item = Square> + '_ {
        Square::ALL.into_iter().filter(|sq| self.is_empty(*sq))
    }

    /// Returns a copy of this board with `mark` placed at `square`.
    ///
    /// The caller guarantees the square is in bounds.
    pub(crate) fn with_mark(&self, square: Square, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[square.row][square.col] = Some(mark);
        next
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-9 key.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let symbol = match cell {
                    Some(mark) => mark.to_string(),
                    None => (row * BOARD_SIZE + col + 1).to_string(),
                };
                result.push_str(&symbol);
                if col < BOARD_SIZE - 1 {
                    result.push('|');
                }
            }
            if row < BOARD_SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
pub(crate) fn board_from_rows(rows: [&str; BOARD_SIZE]) -> Board {
    let mut board = Board::new();
    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            let mark = match ch {
                'X' => Mark::X,
                'O' => Mark::O,
                _ => continue,
            };
            board = board.with_mark(Square::new(row, col), mark);
        }
    }
    board
}
