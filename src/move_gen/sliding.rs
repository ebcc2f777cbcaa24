//! Sliding piece move generation.
//!
//! Common functionality for bishops, rooks, and queens. These pieces move
//! any number of squares along a fixed direction until blocked.
//!
//! ## Algorithm
//!
//! A single parameterized ray walk replaces per-direction routines. Starting
//! one step from the origin, repeat:
//!
//! 1. Step by the direction's (file delta, rank delta); stop at the edge.
//! 2. Empty square: include it and keep walking.
//! 3. Enemy piece: include the square (capture) and stop.
//! 4. Own piece: stop without including the square.
//!
//! Rook, bishop, and queen differ only in the direction table they hand to
//! [`generate_sliding_moves`].

use crate::board::Occupancy;
use crate::types::{PieceColor, Square};

/// A ray direction as (file delta, rank delta), applied once per step.
pub type Direction = (i8, i8);

/// The four orthogonal directions: toward rank 8, rank 1, file h, file a.
pub const ORTHOGONAL: [Direction; 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// The four diagonal directions.
pub const DIAGONAL: [Direction; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All eight directions: orthogonals plus diagonals.
pub const ALL: [Direction; 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Walk one ray from `from` and append the legal destinations in order.
pub fn scan_ray(
    board: &impl Occupancy,
    from: Square,
    color: PieceColor,
    (file_delta, rank_delta): Direction,
    moves: &mut Vec<Square>,
) {
    let mut current = from;
    while let Some(next) = current.offset(file_delta, rank_delta) {
        match board.occupancy(next) {
            // Empty square: valid move, keep walking this ray.
            None => {
                moves.push(next);
                current = next;
            }
            // Opponent piece: valid capture, ray ends here.
            Some(occupant) if occupant != color => {
                moves.push(next);
                return;
            }
            // Own piece: ray ends before this square.
            Some(_) => return,
        }
    }
}

/// Generate moves for a sliding piece over a set of ray directions.
pub fn generate_sliding_moves(
    board: &impl Occupancy,
    from: Square,
    color: PieceColor,
    directions: &[Direction],
    moves: &mut Vec<Square>,
) {
    for &direction in directions {
        scan_ray(board, from, color, direction, moves);
    }
}
