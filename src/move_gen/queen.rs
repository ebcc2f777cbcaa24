//! Queen move generation.
//!
//! Queens combine rook and bishop movement: one ray scan over all eight
//! directions.

use super::sliding;
use crate::board::Occupancy;
use crate::types::{PieceColor, Square};

/// Generate queen moves from a given square.
pub fn generate_queen_moves(
    board: &impl Occupancy,
    from: Square,
    color: PieceColor,
    moves: &mut Vec<Square>,
) {
    sliding::generate_sliding_moves(board, from, color, &sliding::ALL, moves);
}
