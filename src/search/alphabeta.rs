//! Fixed-depth minimax with alpha-beta pruning
//!
//! Max nodes place the searching side's stone, min nodes the opponent's.
//! Every leaf is scored for the searching side, so there is no negamax sign
//! flipping: the evaluator is deliberately asymmetric.
//!
//! Moves are every empty cell with at least one occupied neighbour, tried in
//! row-major order. Stones are placed on the caller's board and removed
//! again before each call returns, cutoffs included.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::eval::PatternEvaluator;
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::with_size(9);
//! board.place_stone(Pos::new(4, 4), Stone::Black);
//!
//! let mut searcher = Searcher::new(&PatternEvaluator, Stone::White);
//! let result = searcher.search(&mut board, 2);
//! assert!(result.best_move.is_some());
//! assert_eq!(board.stone_count(), 1);
//! ```

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate, LineEvaluator, Score};

use super::selection::RootBest;

/// Max-node sentinel: nothing to play
pub const NEG_INF: Score = Score::MIN;
/// Min-node sentinel: nothing to play
pub const POS_INF: Score = Score::MAX;

/// Result of one root search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best root move, `None` when no cell had an occupied neighbour
    pub best_move: Option<Pos>,
    /// Score of the best move, `NEG_INF` without one
    pub score: Score,
    /// Plies searched
    pub depth: u8,
    /// Nodes visited, root excluded
    pub nodes: u64,
}

/// A move the search may try: empty and next to a stone.
#[inline]
pub fn is_candidate(board: &Board, pos: Pos) -> bool {
    board.is_empty(pos) && board.has_occupied_neighbor(pos)
}

/// All candidate moves, row-major.
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    board.positions().filter(|&pos| is_candidate(board, pos)).collect()
}

/// Depth-limited alpha-beta searcher for one side.
pub struct Searcher<'a> {
    evaluator: &'a dyn LineEvaluator,
    side: Stone,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    /// Create a searcher that plays `side`, scoring leaves with `evaluator`.
    #[must_use]
    pub fn new(evaluator: &'a dyn LineEvaluator, side: Stone) -> Self {
        debug_assert!(side.is_player());
        Self {
            evaluator,
            side,
            nodes: 0,
        }
    }

    /// Nodes visited by the last search
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search `depth` plies and return the best root move.
    ///
    /// Each root child is searched with the window `(best - 1, +inf)`, so a
    /// child that ties the current best reports its exact score and the
    /// newest of the tied moves is kept. The result is the same as a full
    /// minimax with that tie rule.
    ///
    /// A zero-ply search tries no moves and reports no best move.
    pub fn search(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        self.nodes = 0;
        let Some(child_depth) = depth.checked_sub(1) else {
            return SearchResult {
                best_move: None,
                score: NEG_INF,
                depth,
                nodes: 0,
            };
        };
        let mut best = RootBest::default();
        let size = board.size();

        for row in 0..size {
            for col in 0..size {
                let pos = Pos::new(row as u8, col as u8);
                if !is_candidate(board, pos) {
                    continue;
                }

                let alpha = best.alpha_floor();
                board.place_stone(pos, self.side);
                let score = self.min_value(board, child_depth, alpha, POS_INF);
                board.remove_stone(pos);

                log::trace!("root {:?} -> {}", pos, score);
                best.record(score, pos);
            }
        }

        SearchResult {
            best_move: best.best_move(),
            score: best.score().unwrap_or(NEG_INF),
            depth,
            nodes: self.nodes,
        }
    }

    /// Searching side to move
    fn max_value(&mut self, board: &mut Board, depth: u8, mut alpha: Score, beta: Score) -> Score {
        self.nodes += 1;
        if depth == 0 {
            return evaluate(board, self.side, self.evaluator);
        }

        let mut best = NEG_INF;
        let size = board.size();
        for row in 0..size {
            for col in 0..size {
                let pos = Pos::new(row as u8, col as u8);
                if !is_candidate(board, pos) {
                    continue;
                }

                board.place_stone(pos, self.side);
                let val = self.min_value(board, depth - 1, alpha, beta);
                board.remove_stone(pos);

                if val > best {
                    best = val;
                }
                if val >= beta {
                    return val;
                }
                alpha = alpha.max(val);
            }
        }
        best
    }

    /// Opponent to move
    fn min_value(&mut self, board: &mut Board, depth: u8, alpha: Score, mut beta: Score) -> Score {
        self.nodes += 1;
        if depth == 0 {
            return evaluate(board, self.side, self.evaluator);
        }

        let opponent = self.side.opponent();
        let mut best = POS_INF;
        let size = board.size();
        for row in 0..size {
            for col in 0..size {
                let pos = Pos::new(row as u8, col as u8);
                if !is_candidate(board, pos) {
                    continue;
                }

                board.place_stone(pos, opponent);
                let val = self.max_value(board, depth - 1, alpha, beta);
                board.remove_stone(pos);

                if val < best {
                    best = val;
                }
                if val <= alpha {
                    return val;
                }
                beta = beta.min(val);
            }
        }
        best
    }
}
