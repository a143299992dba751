//! Static evaluation of a whole board
//!
//! Every occupied cell is treated as the origin of four line windows, one
//! per canonical direction. Scanning only forward (right, down, and both
//! downward diagonals) attributes each window to a single origin, so the
//! reverse directions are covered from the other end of the same line.

use crate::board::{Board, Stone};

use super::line::{LineEvaluator, LineWindow};
use super::patterns::Score;

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Evaluate the board from the perspective of `side`.
///
/// Positive values favour `side`. Opponent threats weigh more than the same
/// own threats, so `evaluate(board, Black)` is not the negation of
/// `evaluate(board, White)`.
#[must_use]
pub fn evaluate(board: &Board, side: Stone, evaluator: &dyn LineEvaluator) -> Score {
    board
        .occupied()
        .map(|(pos, _)| {
            DIRECTIONS
                .iter()
                .map(|&dir| evaluator.score_line(&LineWindow::scan(board, pos, dir, side)))
                .sum::<Score>()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::eval::{CountingEvaluator, PatternEvaluator};

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Stone::Black, &PatternEvaluator), 0);
        assert_eq!(evaluate(&board, Stone::Black, &CountingEvaluator), 0);
    }

    #[test]
    fn test_evaluate_open_four_row() {
        let mut board = Board::with_size(8);
        // _XXXX_ along row 3, cols 0..=5
        for c in 1..5 {
            board.place_stone(Pos::new(3, c), Stone::Black);
        }
        // Only the window from (3,1) reads `MMMM__` → four; (3,2) reads
        // `MMM___` → open three; (3,3) reads `MM___` → nothing.
        assert_eq!(
            evaluate(&board, Stone::Black, &PatternEvaluator),
            1_000 + 100
        );
    }

    #[test]
    fn test_evaluate_five_is_winning() {
        let mut board = Board::new();
        for c in 0..5 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        let score = evaluate(&board, Stone::Black, &PatternEvaluator);
        assert!(score >= 1_000_000, "five should dominate, got {}", score);

        let score = evaluate(&board, Stone::White, &PatternEvaluator);
        assert!(score <= -2_000_000, "opponent five should be urgent, got {}", score);
    }

    #[test]
    fn test_evaluate_diagonal_pattern() {
        let mut board = Board::new();
        for i in 0..3 {
            board.place_stone(Pos::new(5 + i, 5 + i), Stone::Black);
        }
        let score = evaluate(&board, Stone::Black, &PatternEvaluator);
        assert!(score > 0, "diagonal three should score, got {}", score);
    }

    #[test]
    fn test_color_swap_symmetry() {
        let board = Board::from_rows(&[
            "........",
            ".XXX....",
            "........",
            "...OO...",
            "........",
            "........",
            "........",
            "........",
        ]);
        let swapped = board.swapped_colors();
        for evaluator in [&PatternEvaluator as &dyn LineEvaluator, &CountingEvaluator] {
            assert_eq!(
                evaluate(&board, Stone::Black, evaluator),
                evaluate(&swapped, Stone::White, evaluator)
            );
            assert_eq!(
                evaluate(&board, Stone::White, evaluator),
                evaluate(&swapped, Stone::Black, evaluator)
            );
        }
    }

    #[test]
    fn test_evaluation_is_asymmetric() {
        // A lone black open-four shape on row 0: `_XXXX_..`
        let board = Board::from_rows(&[
            ".XXXX...",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        // Windows from (0,1) `MMMM__` → four, (0,2) `MMM___` → open three
        let black = evaluate(&board, Stone::Black, &PatternEvaluator);
        let white = evaluate(&board, Stone::White, &PatternEvaluator);
        assert_eq!(black, 1_000 + 100);
        assert_eq!(white, -(10 * 1_000 + 3 * 100));
        assert_ne!(black, -white);
    }

    #[test]
    fn test_evaluate_has_no_side_effects() {
        let board = Board::from_rows(&["X.O..", ".X...", "..O..", ".....", "....."]);
        let before = board.clone();
        let _ = evaluate(&board, Stone::Black, &PatternEvaluator);
        assert_eq!(board, before);
    }
}
