//! Error types for the presentation boundary.
//!
//! Gameplay never raises errors: wrong-turn pick-ups and illegal placements
//! degrade to empty sets and [`crate::MoveOutcome::Rejected`]. The only
//! fallible operation is parsing an algebraic square name coming in from the
//! outside, and that gets a real error type.

use thiserror::Error;

/// Failure to parse an algebraic square name such as `"e4"`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseSquareError {
    /// The name was not exactly two characters.
    #[error("square name must be 2 characters, got {len}")]
    BadLength { len: usize },

    /// The file character was outside 'a'..='h'.
    #[error("invalid file {file:?} (expected 'a' through 'h')")]
    BadFile { file: char },

    /// The rank character was outside '1'..='8'.
    #[error("invalid rank {rank:?} (expected '1' through '8')")]
    BadRank { rank: char },
}
