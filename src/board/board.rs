//! Square board of stones, sized at construction

use std::fmt;

use super::{Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::{EngineError, Result};

/// The 8 neighbour offsets
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Game board
///
/// Stones are stored row-major. The search places and removes stones in
/// place, so equality is plain cell-by-cell comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Empty board of the default size
    pub fn new() -> Self {
        Self::with_size(DEFAULT_BOARD_SIZE)
    }

    /// Empty `size` x `size` board
    ///
    /// # Panics
    ///
    /// Panics if `size` exceeds [`MAX_BOARD_SIZE`], since coordinates are
    /// stored as `u8`. Use [`Board::try_with_size`] for untrusted sizes.
    pub fn with_size(size: usize) -> Self {
        assert!(
            size <= MAX_BOARD_SIZE,
            "board size {size} exceeds {MAX_BOARD_SIZE}"
        );
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
        }
    }

    /// Empty board, rejecting sizes outside the playable range
    pub fn try_with_size(size: usize) -> Result<Self> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            Ok(Self::with_size(size))
        } else {
            Err(EngineError::InvalidBoardSize(size))
        }
    }

    /// Build a board from text rows: `X` black, `O` white, anything else empty.
    ///
    /// The board is as tall as the number of rows; short rows are padded
    /// with empty cells. Panics on more than [`MAX_BOARD_SIZE`] rows.
    ///
    /// ```
    /// use gomoku::{Board, Pos, Stone};
    ///
    /// let board = Board::from_rows(&["X....", ".O...", ".....", ".....", "....."]);
    /// assert_eq!(board.get(Pos::new(0, 0)), Stone::Black);
    /// assert_eq!(board.get(Pos::new(1, 1)), Stone::White);
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::with_size(rows.len());
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().take(board.size).enumerate() {
                let stone = match ch {
                    'X' | 'x' => Stone::Black,
                    'O' | 'o' => Stone::White,
                    _ => continue,
                };
                board.cells[r * board.size + c] = stone;
            }
        }
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos), "{:?} outside {}x{} board", pos, self.size, self.size);
        pos.row as usize * self.size + pos.col as usize
    }

    /// Check signed coordinates against the board edges
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Check that a position lies on this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[self.index(pos)]
    }

    /// Stone at signed coordinates, `None` off the board
    #[inline]
    pub fn get_at(&self, row: i32, col: i32) -> Option<Stone> {
        if self.in_bounds(row, col) {
            Some(self.cells[row as usize * self.size + col as usize])
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        self.cells[idx] = stone;
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        let idx = self.index(pos);
        self.cells[idx] = Stone::Empty;
    }

    /// True if any of the 8 neighbours holds a stone
    pub fn has_occupied_neighbor(&self, pos: Pos) -> bool {
        NEIGHBORS.iter().any(|&(dr, dc)| {
            let (r, c) = pos.offset(dr, dc, 1);
            matches!(self.get_at(r, c), Some(s) if s != Stone::Empty)
        })
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|s| **s != Stone::Empty).count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|s| *s == Stone::Empty)
    }

    /// Check if no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|s| *s != Stone::Empty)
    }

    /// All positions, row-major
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size * size).map(move |idx| Pos::new((idx / size) as u8, (idx % size) as u8))
    }

    /// Occupied positions with their stones, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.positions()
            .zip(self.cells.iter().copied())
            .filter(|(_, stone)| *stone != Stone::Empty)
    }

    /// Same position with every stone swapped to the other color
    pub fn swapped_colors(&self) -> Board {
        Board {
            size: self.size,
            cells: self.cells.iter().map(|s| s.opponent()).collect(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the `from_rows` notation, one row per line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for stone in row {
                let ch = match stone {
                    Stone::Black => 'X',
                    Stone::White => 'O',
                    Stone::Empty => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
