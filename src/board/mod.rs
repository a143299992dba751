//! Board representation for Gomoku

pub mod board;


// Re-exports
pub use board::Board;

/// Default board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Smallest board that can still hold a five
pub const MIN_BOARD_SIZE: usize = 5;

/// Largest supported board (column labels run A-Z)
pub const MAX_BOARD_SIZE: usize = 26;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// True for Black and White
    #[inline]
    pub fn is_player(self) -> bool {
        self != Stone::Empty
    }
}

/// A stone seen from the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Mine,
    Opponent,
}

impl Cell {
    /// Reinterpret a physical stone relative to `side`.
    #[inline]
    pub fn relative(stone: Stone, side: Stone) -> Cell {
        if stone == Stone::Empty {
            Cell::Empty
        } else if stone == side {
            Cell::Mine
        } else {
            Cell::Opponent
        }
    }

    /// Pattern alphabet symbol: `M`, `O` or `_`.
    #[inline]
    pub fn symbol(self) -> u8 {
        match self {
            Cell::Mine => b'M',
            Cell::Opponent => b'O',
            Cell::Empty => b'_',
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_BOARD_SIZE && (col as usize) < MAX_BOARD_SIZE);
        Self { row, col }
    }

    /// Step `k` cells along `(dr, dc)`, as signed coordinates.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, k: i32) -> (i32, i32) {
        (i32::from(self.row) + k * dr, i32::from(self.col) + k * dc)
    }

    /// Chebyshev distance, 1 for the 8 neighbours.
    #[inline]
    pub fn distance(self, other: Pos) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major ordering, the order in which the search enumerates moves.
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
