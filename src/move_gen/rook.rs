//! Rook move generation.
//!
//! Rooks slide along ranks and files until blocked by another piece or the
//! board edge. Capturing an opponent piece ends the ray; an own piece ends
//! it one square earlier.

use super::sliding;
use crate::board::Occupancy;
use crate::types::{PieceColor, Square};

/// Generate rook moves from a given square.
///
/// Delegates to the shared sliding walker over the four orthogonal
/// directions.
pub fn generate_rook_moves(
    board: &impl Occupancy,
    from: Square,
    color: PieceColor,
    moves: &mut Vec<Square>,
) {
    sliding::generate_sliding_moves(board, from, color, &sliding::ORTHOGONAL, moves);
}
