//! Pawn move generation.
//!
//! Pawns are the one piece whose pushes and captures follow different
//! rules, so generation runs two independent passes:
//!
//! - **Forward push**: one square toward the opponent, only onto an empty
//!   square. From the start rank (rank 2 for White, rank 7 for Black) a
//!   two-square push is also legal when both squares are empty. Pushes
//!   never capture; any occupant of the square ahead blocks entirely.
//! - **Diagonal capture**: the two squares diagonally forward, only when an
//!   opponent piece stands there. Captures never target empty squares.

use crate::board::Occupancy;
use crate::types::{PieceColor, Square};

/// Generate pawn moves from a given square.
pub fn generate_pawn_moves(
    board: &impl Occupancy,
    from: Square,
    color: PieceColor,
    moves: &mut Vec<Square>,
) {
    let forward = color.forward();

    // Forward pushes: blocked by any occupant, friend or foe.
    if let Some(one_ahead) = from.offset(0, forward) {
        if board.is_empty(one_ahead) {
            moves.push(one_ahead);
            if from.rank() == color.pawn_start_rank() {
                if let Some(two_ahead) = one_ahead.offset(0, forward) {
                    if board.is_empty(two_ahead) {
                        moves.push(two_ahead);
                    }
                }
            }
        }
    }

    // Diagonal captures: require an opponent piece on the target.
    for file_delta in [-1, 1] {
        if let Some(target) = from.offset(file_delta, forward) {
            if board.occupancy(target) == Some(color.opposite()) {
                moves.push(target);
            }
        }
    }
}
