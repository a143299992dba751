//! Game rules for the GUI harness
//!
//! The engine never checks for a finished game: its search only sees
//! five-in-a-row through the evaluator weights. The harness uses these
//! functions to stop play and highlight the winning line.

pub mod win;

pub use win::{check_winner, find_five_at, has_five_at};
