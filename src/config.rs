//! Engine configuration

use crate::board::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::eval::EvaluatorKind;
use crate::{EngineError, Result};

/// Default search depth in plies
pub const DEFAULT_DEPTH: u8 = 4;

/// Deepest search the engine accepts
pub const MAX_DEPTH: u8 = 8;

/// Fixed parameters of an engine: board size, ply depth and line strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Side length of the square board the engine plays on
    pub board_size: usize,
    /// Plies searched below the root, at least 1
    pub depth: u8,
    /// Line scoring strategy
    pub evaluator: EvaluatorKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            depth: DEFAULT_DEPTH,
            evaluator: EvaluatorKind::default(),
        }
    }
}

impl EngineConfig {
    /// Default configuration with a different board size and depth
    #[must_use]
    pub fn new(board_size: usize, depth: u8) -> Self {
        Self {
            board_size,
            depth,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_evaluator(mut self, evaluator: EvaluatorKind) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Reject sizes and depths the engine cannot play with.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(EngineError::InvalidBoardSize(self.board_size));
        }
        if !(1..=MAX_DEPTH).contains(&self.depth) {
            return Err(EngineError::InvalidDepth(self.depth));
        }
        Ok(())
    }
}
