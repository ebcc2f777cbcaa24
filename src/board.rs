//! Board model: the position-to-piece mapping and its query surface.
//!
//! [`Board`] is the single source of truth for occupancy. It is a plain
//! 64-slot mapping with no game logic of its own; the arbiter in
//! [`crate::api`] is its only writer during play.
//!
//! Move generators do not depend on `Board` directly. They are written
//! against the [`Occupancy`] capability, so tests (or an embedding that
//! keeps its own piece store) can supply any occupancy source.

use crate::types::{Piece, PieceColor, PieceType, Square};

/// Occupancy query handed to the move generators.
///
/// The one capability generation needs: who, if anyone, stands on a square.
/// Queries are pure. Out-of-range squares are unrepresentable, so there is
/// no error case.
pub trait Occupancy {
    /// Color of the piece on `square`, or `None` when the square is empty.
    fn occupancy(&self, square: Square) -> Option<PieceColor>;

    /// Whether `square` is empty.
    fn is_empty(&self, square: Square) -> bool {
        self.occupancy(square).is_none()
    }
}

/// Back-rank piece order, file a through file h.
const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// The position-to-piece mapping for all 64 squares.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// The standard chess starting position.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (file, &piece_type) in BACK_ROW.iter().enumerate() {
            board.place(
                Square::from_index(file),
                Piece::new(PieceColor::White, piece_type),
            );
            board.place(
                Square::from_index(8 + file),
                Piece::new(PieceColor::White, PieceType::Pawn),
            );
            board.place(
                Square::from_index(48 + file),
                Piece::new(PieceColor::Black, PieceType::Pawn),
            );
            board.place(
                Square::from_index(56 + file),
                Piece::new(PieceColor::Black, piece_type),
            );
        }
        board
    }

    /// The piece on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// Put `piece` on `square`, returning whatever stood there before.
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.squares[square.index()].replace(piece)
    }

    /// Remove and return the piece on `square`, if any.
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    /// All occupied squares with their pieces, a1 through h8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }
}

impl Occupancy for Board {
    fn occupancy(&self, square: Square) -> Option<PieceColor> {
        self.squares[square.index()].map(|piece| piece.color)
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.pieces()).finish()
    }
}
