//! Pick-up and placement arbitration.
//!
//! The arbiter is a two-state machine per game: **Idle** (no selection) and
//! **Selecting** (a piece is picked up and its destination set is held).
//!
//! - Idle -> Selecting: [`select_piece`] on an on-turn piece. Off-turn and
//!   empty-square pick-ups are no-ops and stay Idle.
//! - Selecting -> Idle: [`attempt_placement`], always. A target inside the
//!   held set applies the move and flips the turn; anything else rejects
//!   with no effect. Either way the selection is cleared, so every attempt
//!   starts from a fresh pick-up.
//!
//! Rejections are silent: no error is raised and the caller may immediately
//! try again.

use tracing::{debug, trace};

use crate::board::Occupancy;
use crate::move_gen::legal_destinations;
use crate::types::{GameState, MoveOutcome, PieceColor, Selection, Square};

/// Pick up the piece on `square` and compute its legal destinations.
///
/// Returns the held destination set, or an empty slice when `square` is
/// empty or holds an off-turn piece (the turn-enforcement gate). Any
/// previously held selection is replaced; selecting the same square twice
/// in a row yields the same set both times.
pub fn select_piece(game: &mut GameState, square: Square) -> &[Square] {
    // A pick-up always invalidates whatever selection was held before.
    game.selection = None;

    let Some(piece) = game.board.piece_at(square) else {
        trace!("selection on empty square {square} ignored");
        return &[];
    };
    if piece.color != game.side_to_move {
        debug!(
            "ignored {:?} pick-up at {square}, {:?} to move",
            piece.color, game.side_to_move
        );
        return &[];
    }

    let destinations = legal_destinations(&game.board, square, piece);
    debug!(
        "selected {:?} {:?} at {square}, {} legal destinations",
        piece.color,
        piece.piece_type,
        destinations.len()
    );
    let selection = game.selection.insert(Selection {
        origin: square,
        piece,
        destinations,
    });
    &selection.destinations
}

/// Drop the selected piece on `target`.
///
/// Applies the move when `target` is in the held destination set: an enemy
/// occupant is removed from the board, the mover is relocated, and the turn
/// flips. Any other target, or a call with no active selection, is a
/// rejection that mutates nothing. The selection is cleared in every case.
pub fn attempt_placement(game: &mut GameState, target: Square) -> MoveOutcome {
    // Every attempt consumes the held set, accepted or not.
    let Some(selection) = game.selection.take() else {
        trace!("placement at {target} with no active selection");
        return MoveOutcome::Rejected;
    };

    // Generators never emit own-color squares, but re-check here before
    // touching the board.
    if !selection.allows(target) || game.board.occupancy(target) == Some(selection.piece.color) {
        debug!("rejected {} -> {target}", selection.origin);
        return MoveOutcome::Rejected;
    }

    let capture = game.board.take(target);
    debug_assert!(
        capture.map_or(true, |taken| taken.color != selection.piece.color),
        "captured an own-color piece at {target}"
    );
    game.board.take(selection.origin);
    game.board.place(target, selection.piece);

    game.side_to_move = game.side_to_move.opposite();
    if game.side_to_move == PieceColor::White {
        game.move_number += 1;
    }
    debug!(
        "applied {:?} {:?} {} -> {target}, capture {:?}, {:?} to move",
        selection.piece.color,
        selection.piece.piece_type,
        selection.origin,
        capture.map(|taken| taken.piece_type),
        game.side_to_move
    );

    MoveOutcome::Applied { capture }
}
