//! Gomoku engine with fixed-depth alpha-beta search
//!
//! The engine plays five-in-a-row on a square board of configurable size:
//! - No captures, no forbidden moves, overlines count as five
//! - Moves are restricted to empty cells next to an existing stone
//! - Leaves are scored by a line-window pattern table, weighted towards
//!   blocking the opponent
//!
//! # Architecture
//!
//! - [`board`]: Board representation and coordinates
//! - [`eval`]: Line windows, threat patterns and static evaluation
//! - [`search`]: Alpha-beta search and root move selection
//! - [`engine`]: Engine facade with preconditions and the opening fallback
//! - [`config`]: Engine configuration and validation
//! - [`rules`]: Five-in-a-row detection for the game harness
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Board, Engine, EngineConfig, Pos, Stone};
//!
//! let mut board = Board::with_size(9);
//! let mut engine = Engine::with_seed(EngineConfig::new(9, 2), 1).unwrap();
//!
//! board.place_stone(Pos::new(4, 4), Stone::Black);
//!
//! // AI responds as White
//! let pos = engine.choose_move(&mut board, Stone::White).unwrap();
//! board.place_stone(pos, Stone::White);
//! println!("AI plays at ({}, {})", pos.row, pos.col);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod logging;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone};
pub use config::EngineConfig;
pub use engine::{Engine, MoveResult, SearchType};
pub use eval::{EvaluatorKind, Score};

use board::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Errors reported by the engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("board size {0} outside {min}..={max}", min = MIN_BOARD_SIZE, max = MAX_BOARD_SIZE)]
    InvalidBoardSize(usize),

    #[error("search depth {0} outside 1..={max}", max = config::MAX_DEPTH)]
    InvalidDepth(u8),

    #[error("board is {found}x{found}, engine is configured for {expected}x{expected}")]
    BoardSizeMismatch { expected: usize, found: usize },

    #[error("side to move must be Black or White")]
    InvalidSide,

    #[error("board is full")]
    BoardFull,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, EngineError>;
