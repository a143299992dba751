//! Win condition checking
//!
//! Five or more stones of one color in a row wins. Overlines count.

use crate::board::{Board, Pos, Stone};
use crate::eval::DIRECTIONS;

/// Count stones of `color` from `pos` (exclusive) along `(dr, dc)`.
fn run_length(board: &Board, pos: Pos, (dr, dc): (i32, i32), color: Stone) -> i32 {
    (1..)
        .take_while(|&k| {
            let (r, c) = pos.offset(dr, dc, k);
            board.get_at(r, c) == Some(color)
        })
        .count() as i32
}

/// Five-in-a-row check through a single position.
///
/// Only the 4 lines through `pos` are scanned, so this is the check to run
/// right after a stone is placed.
#[inline]
pub fn has_five_at(board: &Board, pos: Pos, color: Stone) -> bool {
    find_five_at(board, pos, color).is_some()
}

/// First five cells of a winning line through `pos`, in line order.
pub fn find_five_at(board: &Board, pos: Pos, color: Stone) -> Option<[Pos; 5]> {
    if !color.is_player() || board.get(pos) != color {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let back = run_length(board, pos, (-dr, -dc), color);
        let forward = run_length(board, pos, (dr, dc), color);
        if back + forward + 1 < 5 {
            continue;
        }

        let mut line = [pos; 5];
        for (i, cell) in line.iter_mut().enumerate() {
            let (r, c) = pos.offset(dr, dc, i as i32 - back);
            *cell = Pos::new(r as u8, c as u8);
        }
        return Some(line);
    }
    None
}

/// Check for a winner anywhere on the board.
///
/// Returns the color of the first five found in row-major order.
pub fn check_winner(board: &Board) -> Option<Stone> {
    board
        .occupied()
        .find(|&(pos, stone)| has_five_at(board, pos, stone))
        .map(|(_, stone)| stone)
}
