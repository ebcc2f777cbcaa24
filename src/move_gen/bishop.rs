//! Bishop move generation.
//!
//! Bishops slide along diagonals until blocked by another piece or the
//! board edge, with the same capture-and-stop rule as every sliding piece.

use super::sliding;
use crate::board::Occupancy;
use crate::types::{PieceColor, Square};

/// Generate bishop moves from a given square.
///
/// Delegates to the shared sliding walker over the four diagonal
/// directions.
pub fn generate_bishop_moves(
    board: &impl Occupancy,
    from: Square,
    color: PieceColor,
    moves: &mut Vec<Square>,
) {
    sliding::generate_sliding_moves(board, from, color, &sliding::DIAGONAL, moves);
}
