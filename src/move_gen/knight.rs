//! Knight move generation.
//!
//! Knights jump in an L-shape: two squares one way, one square
//! perpendicular. They ignore intervening pieces, so generation is a plain
//! filter over the eight fixed offsets.
//!
//! ## Knight Movement Rules
//!
//! - 8 candidate destinations from most squares, fewer near edges
//! - Off-board candidates are silently dropped
//! - Cannot land on squares occupied by own pieces
//! - Can capture opponent pieces on destination squares

use crate::board::Occupancy;
use crate::types::{PieceColor, Square};

/// The eight L-shaped jumps as (file delta, rank delta).
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Generate knight moves from a given square.
pub fn generate_knight_moves(
    board: &impl Occupancy,
    from: Square,
    color: PieceColor,
    moves: &mut Vec<Square>,
) {
    for &(file_delta, rank_delta) in &KNIGHT_OFFSETS {
        if let Some(to) = from.offset(file_delta, rank_delta) {
            // Valid if the destination is empty or holds an opponent piece.
            if board.occupancy(to) != Some(color) {
                moves.push(to);
            }
        }
    }
}
