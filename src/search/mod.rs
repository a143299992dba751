//! Search module for Gomoku AI
//!
//! Contains:
//! - Fixed-depth alpha-beta over neighbour-gated moves
//! - Root move record and the empty-board fallback

pub mod alphabeta;
pub mod selection;

pub use alphabeta::{candidate_moves, is_candidate, SearchResult, Searcher, NEG_INF, POS_INF};
pub use selection::{fallback_region, in_fallback_region, pick_fallback, RootBest};
