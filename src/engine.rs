//! Engine facade: configuration, preconditions and move selection
//!
//! The engine owns its line evaluator and random generator. Each call
//! validates the caller's board, runs one fixed-depth alpha-beta search
//! on it and resolves the root record to a move. An empty board has no
//! candidates at all, so the move is drawn from the central fallback
//! square instead.
//!
//! # Example
//!
//! ```
//! use gomoku::{Board, Engine, EngineConfig, Pos, Stone};
//!
//! let mut engine = Engine::with_seed(EngineConfig::new(9, 2), 7).unwrap();
//! let mut board = Board::with_size(9);
//! board.place_stone(Pos::new(4, 4), Stone::Black);
//!
//! let result = engine.choose_move_with_stats(&mut board, Stone::White).unwrap();
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::eval::{LineEvaluator, Score};
use crate::search::{pick_fallback, SearchResult, Searcher};
use crate::{EngineError, Result};

/// How the move was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Alpha-beta search over neighbour-gated candidates
    AlphaBeta,
    /// Random cell of the central square on an empty board
    Fallback,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Move to play
    pub best_move: Pos,
    /// Minimax score of the move, `None` for fallback moves
    pub score: Option<Score>,
    /// Which path produced the move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_alphabeta(best_move: Pos, result: &SearchResult, time_ms: u64) -> Self {
        Self {
            best_move,
            score: Some(result.score),
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: result.nodes,
        }
    }

    #[inline]
    fn fallback(best_move: Pos, time_ms: u64) -> Self {
        Self {
            best_move,
            score: None,
            search_type: SearchType::Fallback,
            time_ms,
            nodes: 0,
        }
    }
}

/// Minimax Gomoku engine.
///
/// The random generator is only consulted for fallback moves, so a seeded
/// engine replays the same game move for move.
pub struct Engine<R: Rng = StdRng> {
    config: EngineConfig,
    evaluator: Box<dyn LineEvaluator + Send + Sync>,
    rng: R,
}

impl Engine<StdRng> {
    /// Create an engine seeded from the operating system.
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine with a reproducible generator.
    ///
    /// ```
    /// use gomoku::{Board, Engine, EngineConfig, Stone};
    ///
    /// let config = EngineConfig::new(8, 2);
    /// let mut a = Engine::with_seed(config, 42).unwrap();
    /// let mut b = Engine::with_seed(config, 42).unwrap();
    /// let mut board = Board::with_size(8);
    /// assert_eq!(
    ///     a.choose_move(&mut board, Stone::Black).unwrap(),
    ///     b.choose_move(&mut board, Stone::Black).unwrap(),
    /// );
    /// ```
    pub fn with_seed(config: EngineConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Engine<R> {
    /// Create an engine around any generator.
    pub fn with_rng(config: EngineConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            evaluator: config.evaluator.build(),
            rng,
        })
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Choose a move for `side`.
    ///
    /// The board is borrowed mutably for the duration of the search and is
    /// left exactly as it was given.
    pub fn choose_move(&mut self, board: &mut Board, side: Stone) -> Result<Pos> {
        self.choose_move_with_stats(board, side)
            .map(|result| result.best_move)
    }

    /// Choose a move for `side` and report search statistics.
    ///
    /// # Errors
    ///
    /// * [`EngineError::InvalidSide`] when `side` is [`Stone::Empty`]
    /// * [`EngineError::BoardSizeMismatch`] when the board is not the
    ///   configured size
    /// * [`EngineError::BoardFull`] when no empty cell remains
    pub fn choose_move_with_stats(&mut self, board: &mut Board, side: Stone) -> Result<MoveResult> {
        if !side.is_player() {
            return Err(EngineError::InvalidSide);
        }
        if board.size() != self.config.board_size {
            return Err(EngineError::BoardSizeMismatch {
                expected: self.config.board_size,
                found: board.size(),
            });
        }
        if board.is_full() {
            return Err(EngineError::BoardFull);
        }

        let start = Instant::now();
        log::trace!("searching for {:?}:\n{}", side, board);

        let mut searcher = Searcher::new(self.evaluator.as_ref(), side);
        let result = searcher.search(board, self.config.depth);
        let time_ms = start.elapsed().as_millis() as u64;

        if let Some(best_move) = result.best_move {
            log::debug!(
                "{:?} plays {:?}: depth {} nodes {} score {} in {}ms",
                side,
                best_move,
                result.depth,
                result.nodes,
                result.score,
                time_ms
            );
            return Ok(MoveResult::from_alphabeta(best_move, &result, time_ms));
        }

        // Only an empty board has no candidates.
        let best_move = pick_fallback(board, &mut self.rng).ok_or(EngineError::BoardFull)?;
        log::info!("{:?} has no candidates, fallback move {:?}", side, best_move);
        Ok(MoveResult::fallback(best_move, time_ms))
    }
}
