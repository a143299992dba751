//! Line windows and the strategies that score them
//!
//! A [`LineWindow`] is the run of up to [`WINDOW_LEN`] cells read from an
//! origin along one direction, translated to `M`/`O`/`_` for the side being
//! scored. A [`LineEvaluator`] turns such a run into a signed score: own
//! threats positive, opponent threats negative and scaled up.

use crate::board::{Board, Cell, Pos, Stone};

use super::patterns::{classify, Score, Threat};

/// Cells read per line window
pub const WINDOW_LEN: usize = 6;

/// Windows shorter than this never hold a pattern
const MIN_PATTERN_LEN: usize = 5;

/// Symbols read from one origin along one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWindow {
    symbols: [u8; WINDOW_LEN],
    len: usize,
}

impl LineWindow {
    /// Read up to six cells from `origin` along `(dr, dc)`, stopping at the edge.
    pub fn scan(board: &Board, origin: Pos, (dr, dc): (i32, i32), side: Stone) -> Self {
        let mut window = Self {
            symbols: [b'_'; WINDOW_LEN],
            len: 0,
        };
        for k in 0..WINDOW_LEN as i32 {
            let (r, c) = origin.offset(dr, dc, k);
            let Some(stone) = board.get_at(r, c) else {
                break;
            };
            window.symbols[window.len] = Cell::relative(stone, side).symbol();
            window.len += 1;
        }
        window
    }

    /// Build a window from pattern text such as `"_MMMM_"`.
    ///
    /// Characters past [`WINDOW_LEN`] are ignored; anything other than
    /// `M` or `O` reads as empty.
    pub fn parse(text: &str) -> Self {
        let mut window = Self {
            symbols: [b'_'; WINDOW_LEN],
            len: 0,
        };
        for byte in text.bytes().take(WINDOW_LEN) {
            window.symbols[window.len] = match byte {
                b'M' | b'O' => byte,
                _ => b'_',
            };
            window.len += 1;
        }
        window
    }

    #[inline]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The same window seen by the other side
    pub fn flipped(&self) -> Self {
        let mut out = *self;
        for s in &mut out.symbols[..out.len] {
            *s = match *s {
                b'M' => b'O',
                b'O' => b'M',
                other => other,
            };
        }
        out
    }

    /// Count (own, opponent, empty) cells
    pub fn counts(&self) -> (usize, usize, usize) {
        self.symbols()
            .iter()
            .fold((0, 0, 0), |(m, o, e), &s| match s {
                b'M' => (m + 1, o, e),
                b'O' => (m, o + 1, e),
                _ => (m, o, e + 1),
            })
    }
}

/// Scores one line window for the side it was scanned for.
pub trait LineEvaluator {
    fn score_line(&self, window: &LineWindow) -> Score;
}

/// Pattern-table strategy: substring containment plus exact open shapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternEvaluator;

impl LineEvaluator for PatternEvaluator {
    fn score_line(&self, window: &LineWindow) -> Score {
        if window.len() < MIN_PATTERN_LEN {
            return 0;
        }
        let own = classify(window.symbols()).map_or(0, Threat::weight);
        let opp = classify(window.flipped().symbols()).map_or(0, Threat::defense_weight);
        own + opp
    }
}

/// Positional strategy: only the number of own, opponent and empty cells
/// in the window matters, not their order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingEvaluator;

impl CountingEvaluator {
    fn threat(stones: usize, empty: usize) -> Option<Threat> {
        match (stones, empty) {
            (5, _) => Some(Threat::Five),
            (4, 0) => Some(Threat::OpenFour),
            (4, 1) => Some(Threat::Four),
            (3, 3) => Some(Threat::OpenThree),
            (3, 2) => Some(Threat::Three),
            (2, 3..) => Some(Threat::Two),
            _ => None,
        }
    }
}

impl LineEvaluator for CountingEvaluator {
    fn score_line(&self, window: &LineWindow) -> Score {
        let (mine, theirs, empty) = window.counts();
        let own = Self::threat(mine, empty).map_or(0, Threat::weight);
        let opp = Self::threat(theirs, empty).map_or(0, Threat::defense_weight);
        own + opp
    }
}

/// Which line strategy an engine is built with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluatorKind {
    /// [`PatternEvaluator`]
    #[default]
    Patterns,
    /// [`CountingEvaluator`]
    Counting,
}

impl EvaluatorKind {
    /// Instantiate the strategy
    pub fn build(self) -> Box<dyn LineEvaluator + Send + Sync> {
        match self {
            EvaluatorKind::Patterns => Box::new(PatternEvaluator),
            EvaluatorKind::Counting => Box::new(CountingEvaluator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern_score(text: &str) -> Score {
        PatternEvaluator.score_line(&LineWindow::parse(text))
    }

    fn counting_score(text: &str) -> Score {
        CountingEvaluator.score_line(&LineWindow::parse(text))
    }

    #[test]
    fn test_scan_stops_at_edge() {
        let mut board = Board::with_size(8);
        board.place_stone(Pos::new(0, 4), Stone::Black);
        board.place_stone(Pos::new(0, 5), Stone::White);

        let window = LineWindow::scan(&board, Pos::new(0, 4), (0, 1), Stone::Black);
        assert_eq!(window.symbols(), b"MO__");
        assert_eq!(window.len(), 4);

        let window = LineWindow::scan(&board, Pos::new(0, 4), (0, 1), Stone::White);
        assert_eq!(window.symbols(), b"OM__");
    }

    #[test]
    fn test_scan_full_window() {
        let board = Board::from_rows(&[
            "X.......",
            ".O......",
            "..X.....",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        let window = LineWindow::scan(&board, Pos::new(0, 0), (1, 1), Stone::Black);
        assert_eq!(window.symbols(), b"MOM___");
    }

    #[test]
    fn test_scan_anti_diagonal() {
        let board = Board::from_rows(&["....X", "...X.", "..O..", ".....", "....."]);
        let window = LineWindow::scan(&board, Pos::new(0, 4), (1, -1), Stone::Black);
        assert_eq!(window.symbols(), b"MMO__");
    }

    #[test]
    fn test_flipped_and_counts() {
        let window = LineWindow::parse("MM_O__");
        assert_eq!(window.flipped().symbols(), b"OO_M__");
        assert_eq!(window.counts(), (2, 1, 3));
    }

    #[test]
    fn test_pattern_table_own() {
        assert_eq!(pattern_score("MMMMM_"), 1_000_000);
        assert_eq!(pattern_score("_MMMM_"), 10_000);
        assert_eq!(pattern_score("MMMM__"), 1_000);
        assert_eq!(pattern_score("MM_MM_"), 1_000);
        assert_eq!(pattern_score("_MMM__"), 100);
        assert_eq!(pattern_score("MMM___"), 100);
        assert_eq!(pattern_score("M_M_M_"), 10);
        assert_eq!(pattern_score("_MM___"), 1);
    }

    #[test]
    fn test_pattern_table_opponent() {
        assert_eq!(pattern_score("OOOOO_"), -2_000_000);
        assert_eq!(pattern_score("_OOOO_"), -100_000);
        assert_eq!(pattern_score("OOOO__"), -10_000);
        assert_eq!(pattern_score("_OOO__"), -300);
        assert_eq!(pattern_score("O_O_O_"), -30);
        assert_eq!(pattern_score("_OO___"), -3);
    }

    #[test]
    fn test_pattern_mixed_windows() {
        assert_eq!(pattern_score("M__M_O"), 1);
        assert_eq!(pattern_score("O_OO_M"), -30);
        assert_eq!(pattern_score("MO__OM"), 0);
    }

    #[test]
    fn test_pattern_short_window_scores_nothing() {
        assert_eq!(pattern_score("MMMM"), 0);
        assert_eq!(pattern_score("MMMMM"), 1_000_000);
    }

    #[test]
    fn test_pattern_missing_shape() {
        // `MM___` is not in the two table
        assert_eq!(pattern_score("MM___"), 0);
        assert_eq!(pattern_score("_MM__"), 1);
    }

    #[test]
    fn test_counting_ignores_order() {
        assert_eq!(counting_score("MM_MMO"), counting_score("MMMM_O"));
        assert_eq!(counting_score("M_M_M_"), 100);
        assert_eq!(counting_score("MMM_O_"), 10);
    }

    #[test]
    fn test_counting_table() {
        assert_eq!(counting_score("MMMMM_"), 1_000_000);
        assert_eq!(counting_score("OMMMMO"), 10_000);
        assert_eq!(counting_score("MMMM_O"), 1_000);
        assert_eq!(counting_score("_MM___"), 1);
        assert_eq!(counting_score("MM"), 0);
        assert_eq!(counting_score("OOO___"), -300);
        assert_eq!(counting_score("OOOO_M"), -10_000);
    }

    #[test]
    fn test_strategies_differ() {
        // Positional counting sees five stones, containment sees a gapped four
        assert_eq!(counting_score("MM_MMM"), 1_000_000);
        assert_eq!(pattern_score("MM_MMM"), 1_000);
    }

    #[test]
    fn test_kind_builds_strategy() {
        let window = LineWindow::parse("MM_MMM");
        assert_eq!(EvaluatorKind::Patterns.build().score_line(&window), 1_000);
        assert_eq!(EvaluatorKind::Counting.build().score_line(&window), 1_000_000);
    }
}
