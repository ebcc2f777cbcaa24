//! King move generation.
//!
//! Kings step one square in any of the eight directions. Same legality
//! filter as the knight, with a one-square radius instead of the L-jump.
//! Castling is out of scope for this engine.

use crate::board::Occupancy;
use crate::types::{PieceColor, Square};

/// The eight one-square steps as (file delta, rank delta).
const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Generate king moves from a given square.
pub fn generate_king_moves(
    board: &impl Occupancy,
    from: Square,
    color: PieceColor,
    moves: &mut Vec<Square>,
) {
    for &(file_delta, rank_delta) in &KING_OFFSETS {
        if let Some(to) = from.offset(file_delta, rank_delta) {
            if board.occupancy(to) != Some(color) {
                moves.push(to);
            }
        }
    }
}
