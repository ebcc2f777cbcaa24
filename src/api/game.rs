//! Game lifecycle management.
//!
//! Constructors and reset for [`GameState`]. Play itself goes through
//! [`super::moves`].

use crate::board::Board;
use crate::types::{GameState, PieceColor};

impl GameState {
    /// A fresh game: standard starting position, White to move.
    pub fn new() -> Self {
        GameState {
            board: Board::standard(),
            side_to_move: PieceColor::White,
            move_number: 1,
            selection: None,
        }
    }

    /// An empty board with White to move, for tests and custom setups.
    ///
    /// Place pieces through [`Board::place`] before playing.
    pub fn with_empty_board() -> Self {
        GameState {
            board: Board::empty(),
            side_to_move: PieceColor::White,
            move_number: 1,
            selection: None,
        }
    }

    /// Reset to the starting position, dropping any held selection.
    pub fn reset(&mut self) {
        *self = GameState::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
