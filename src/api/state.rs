//! Read-only game state queries.
//!
//! Everything the presentation layer needs to mirror the game without
//! touching arbiter internals.

use crate::types::{GameState, PieceColor, Selection, Square};

/// The color whose turn it is.
pub fn side_to_move(game: &GameState) -> PieceColor {
    game.side_to_move
}

/// Whether a piece is currently picked up.
pub fn is_selecting(game: &GameState) -> bool {
    game.selection().is_some()
}

/// The active selection, if a piece is picked up.
pub fn active_selection(game: &GameState) -> Option<&Selection> {
    game.selection()
}

/// The held destination set; empty when nothing is selected.
pub fn held_destinations(game: &GameState) -> &[Square] {
    game.selection()
        .map_or(&[], |selection| selection.destinations.as_slice())
}
