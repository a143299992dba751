//! Evaluation module for Gomoku positions
//!
//! This module provides pattern recognition and scoring for board positions:
//! - Threat classes and their weights (`patterns`)
//! - Line windows and the two line-scoring strategies (`line`)
//! - Whole-board static evaluation (`heuristic`)

pub mod heuristic;
pub mod line;
pub mod patterns;

pub use heuristic::{evaluate, DIRECTIONS};
pub use line::{
    CountingEvaluator, EvaluatorKind, LineEvaluator, LineWindow, PatternEvaluator, WINDOW_LEN,
};
pub use patterns::{classify, Score, Shape, Threat, THREAT_PATTERNS};
