//! Turning root search results into a move
//!
//! The root keeps an explicit (score, move) record rather than a map keyed
//! by score. When two root moves score exactly the same, the one seen later
//! in row-major order replaces the earlier one.

use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Pos};
use crate::eval::Score;

use super::alphabeta::NEG_INF;

/// Side length of the central square used for opening moves
pub const FALLBACK_SPAN: usize = 4;

/// Best move recorded at the root so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RootBest {
    best: Option<(Score, Pos)>,
}

impl RootBest {
    /// Record a root move. Ties go to the newest move.
    #[inline]
    pub fn record(&mut self, score: Score, pos: Pos) {
        if self.best.map_or(true, |(best, _)| score >= best) {
            self.best = Some((score, pos));
        }
    }

    /// Lower search bound for the next root child.
    ///
    /// One below the current best, so a child that ties the best comes back
    /// with its exact score instead of a fail-low bound.
    #[inline]
    pub fn alpha_floor(&self) -> Score {
        self.best
            .map_or(NEG_INF, |(best, _)| best.saturating_sub(1))
    }

    #[inline]
    pub fn score(&self) -> Option<Score> {
        self.best.map(|(score, _)| score)
    }

    #[inline]
    pub fn best_move(&self) -> Option<Pos> {
        self.best.map(|(_, pos)| pos)
    }
}

/// Rows (and columns) of the fallback square, centred on the board
pub fn fallback_region(size: usize) -> RangeInclusive<usize> {
    let lo = (size / 2).saturating_sub(FALLBACK_SPAN / 2);
    let hi = (lo + FALLBACK_SPAN - 1).min(size.saturating_sub(1));
    lo..=hi
}

/// True if `pos` lies inside the fallback square of a `size` board
pub fn in_fallback_region(size: usize, pos: Pos) -> bool {
    let region = fallback_region(size);
    region.contains(&(pos.row as usize)) && region.contains(&(pos.col as usize))
}

/// Pick an empty cell of the fallback square uniformly at random.
///
/// Returns `None` only when every cell of the square is occupied.
pub fn pick_fallback<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Pos> {
    let region = fallback_region(board.size());
    let cells: Vec<Pos> = region
        .clone()
        .flat_map(|r| region.clone().map(move |c| Pos::new(r as u8, c as u8)))
        .filter(|&pos| board.is_empty(pos))
        .collect();
    cells.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_record_keeps_highest() {
        let mut best = RootBest::default();
        assert_eq!(best.best_move(), None);
        assert_eq!(best.alpha_floor(), NEG_INF);

        best.record(10, Pos::new(0, 0));
        best.record(5, Pos::new(0, 1));
        assert_eq!(best.score(), Some(10));
        assert_eq!(best.best_move(), Some(Pos::new(0, 0)));
        assert_eq!(best.alpha_floor(), 9);
    }

    #[test]
    fn test_record_tie_goes_to_last() {
        let mut best = RootBest::default();
        best.record(7, Pos::new(2, 2));
        best.record(7, Pos::new(2, 3));
        best.record(3, Pos::new(3, 0));
        assert_eq!(best.best_move(), Some(Pos::new(2, 3)));
        assert_eq!(best.score(), Some(7));
    }

    #[test]
    fn test_record_sentinel_scores() {
        let mut best = RootBest::default();
        best.record(NEG_INF, Pos::new(1, 1));
        assert_eq!(best.best_move(), Some(Pos::new(1, 1)));
        assert_eq!(best.alpha_floor(), NEG_INF);
    }

    #[test]
    fn test_fallback_region() {
        assert_eq!(fallback_region(8), 2..=5);
        assert_eq!(fallback_region(15), 5..=8);
        assert_eq!(fallback_region(19), 7..=10);
        assert_eq!(fallback_region(5), 0..=3);
        assert!(in_fallback_region(15, Pos::new(7, 7)));
        assert!(!in_fallback_region(15, Pos::new(4, 7)));
    }

    #[test]
    fn test_pick_fallback_in_region() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let pos = pick_fallback(&board, &mut rng).unwrap();
            assert!(in_fallback_region(board.size(), pos), "{:?} outside region", pos);
        }
    }

    #[test]
    fn test_pick_fallback_is_seeded() {
        let board = Board::new();
        let a = pick_fallback(&board, &mut StdRng::seed_from_u64(7));
        let b = pick_fallback(&board, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_pick_fallback_skips_occupied() {
        let mut board = Board::with_size(8);
        for r in 2..=5 {
            for c in 2..=5 {
                if (r, c) != (4, 3) {
                    board.place_stone(Pos::new(r, c), Stone::Black);
                }
            }
        }
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_fallback(&board, &mut rng), Some(Pos::new(4, 3)));

        board.place_stone(Pos::new(4, 3), Stone::White);
        assert_eq!(pick_fallback(&board, &mut rng), None);
    }
}
