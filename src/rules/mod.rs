//! Move rules.
//!
//! `BoardEngine` validates paths, clears dots, scores, and runs gravity.
//! `scoring` holds the score formula.

pub mod engine;
pub mod scoring;

pub use engine::{BoardEngine, GameStatus, MoveOutcome};
pub use scoring::score_increment;
