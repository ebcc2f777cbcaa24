//! Legal-destination generation.
//!
//! One module per piece kind, all feeding a shared `Vec<Square>` collector:
//!
//! - `pawn` - forward pushes and diagonal captures
//! - `knight` / `king` - fixed offset tables
//! - `rook` / `bishop` / `queen` - ray scans via the shared `sliding` walker
//!
//! Everything here answers a single-ply question: from this origin, which
//! squares may this piece move to right now. No check detection, no
//! castling, no en passant; turn enforcement lives in [`crate::api`].

use crate::board::Occupancy;
use crate::types::{Piece, PieceType, Square};

pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;
pub mod sliding;


/// Compute every legal destination for `piece` standing on `origin`.
///
/// Dispatches to the per-piece generator. The result never contains the
/// origin itself, an off-board square, or a square held by the mover's own
/// color.
pub fn legal_destinations(
    board: &impl Occupancy,
    origin: Square,
    piece: Piece,
) -> Vec<Square> {
    let mut destinations = Vec::new();
    match piece.piece_type {
        PieceType::Pawn => pawn::generate_pawn_moves(board, origin, piece.color, &mut destinations),
        PieceType::Knight => {
            knight::generate_knight_moves(board, origin, piece.color, &mut destinations)
        }
        PieceType::Bishop => {
            bishop::generate_bishop_moves(board, origin, piece.color, &mut destinations)
        }
        PieceType::Rook => rook::generate_rook_moves(board, origin, piece.color, &mut destinations),
        PieceType::Queen => {
            queen::generate_queen_moves(board, origin, piece.color, &mut destinations)
        }
        PieceType::King => king::generate_king_moves(board, origin, piece.color, &mut destinations),
    }

    // A generator emitting an own-color square is a bug in that generator.
    debug_assert!(
        destinations
            .iter()
            .all(|&to| board.occupancy(to) != Some(piece.color)),
        "{:?} generator produced an own-color destination from {origin}",
        piece.piece_type,
    );

    destinations
}
