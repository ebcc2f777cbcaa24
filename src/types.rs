//! Core value types for the rules engine.
//!
//! ## Design
//!
//! Everything in this module is a plain value: squares, colors, piece kinds
//! and outcomes are `Copy`, compared structurally, and carry no lifecycle of
//! their own. The one type with real state is [`GameState`], which bundles
//! the board, the side to move and the in-flight selection into a single
//! value that the caller owns and threads through every arbiter call. There
//! are no globals anywhere in the crate.
//!
//! ## Why `Square` cannot be out of range
//!
//! A [`Square`] stores a 0-7 file and a 0-7 rank behind private fields, and
//! every constructor validates: [`Square::new`] and [`Square::offset`] return
//! `Option` and answer `None` for anything off the board. Move generators
//! step squares exclusively through `offset`, so an out-of-range coordinate
//! can never reach the board model. Off-board candidates simply disappear
//! instead of becoming errors, which is exactly the legality rule for edge
//! squares.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::ParseSquareError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A board square identified by file (a-h) and rank (1-8).
///
/// Stored 0-based internally; [`Square::file`] and [`Square::rank`] return
/// the 0-based coordinates, `Display` renders the algebraic name ("e4").
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Construct a square from 0-based file and rank.
    ///
    /// Returns `None` when either coordinate is outside 0-7.
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    /// Construct from a linear 0-63 index (a1 = 0, h8 = 63).
    ///
    /// Internal only: callers must pass a valid index, and a bad one trips
    /// the assertion in test builds.
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < 64, "square index out of range: {index}");
        Square {
            file: (index % 8) as u8,
            rank: (index / 8) as u8,
        }
    }

    /// 0-based file, 0 = file a.
    pub const fn file(self) -> u8 {
        self.file
    }

    /// 0-based rank, 0 = rank 1.
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Linear 0-63 index (a1 = 0, h8 = 63).
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// The square `file_delta` files and `rank_delta` ranks away, or `None`
    /// when that lands off the board.
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = self.file as i8 + file_delta;
        let rank = self.rank as i8 + rank_delta;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares, a1 through h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file_ch), Some(rank_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseSquareError::BadLength {
                len: s.chars().count(),
            });
        };
        let file = match file_ch {
            'a'..='h' => file_ch as u8 - b'a',
            _ => return Err(ParseSquareError::BadFile { file: file_ch }),
        };
        let rank = match rank_ch {
            '1'..='8' => rank_ch as u8 - b'1',
            _ => return Err(ParseSquareError::BadRank { rank: rank_ch }),
        };
        Ok(Square { file, rank })
    }
}

impl TryFrom<String> for Square {
    type Error = ParseSquareError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> String {
        square.to_string()
    }
}

/// The two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    /// The other side.
    pub const fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Rank delta of one forward pawn step for this color.
    ///
    /// White pawns advance toward rank 8, black pawns toward rank 1.
    pub const fn forward(self) -> i8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => -1,
        }
    }

    /// 0-based rank this color's pawns start on (rank 2 or rank 7).
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => 6,
        }
    }
}

/// The six piece kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// All piece kinds, for table-driven setup and tests.
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];
}

/// A piece: a kind with a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub color: PieceColor,
    pub piece_type: PieceType,
}

impl Piece {
    pub const fn new(color: PieceColor, piece_type: PieceType) -> Self {
        Piece { color, piece_type }
    }
}

/// A held selection: the picked-up piece and its legal destination set.
///
/// Recomputed from scratch on every pick-up and cleared after every
/// placement attempt, so at most one selection is ever live per game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Square the selected piece currently stands on.
    pub origin: Square,
    /// The selected piece.
    pub piece: Piece,
    /// Every square the piece may legally move to from `origin`.
    pub destinations: Vec<Square>,
}

impl Selection {
    /// Whether `square` is in the held destination set.
    pub fn allows(&self, square: Square) -> bool {
        self.destinations.contains(&square)
    }
}

/// Complete arbiter state: board, side to move, and the in-flight selection.
///
/// Owned by the caller and passed `&mut` into [`crate::api::select_piece`]
/// and [`crate::api::attempt_placement`]; the arbiter is the only writer of
/// the board and the turn flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Source of truth for occupancy.
    pub board: Board,
    /// The color whose turn it is.
    pub side_to_move: PieceColor,
    /// Full-move counter; starts at 1 and increments after Black's move.
    pub move_number: u32,
    pub(crate) selection: Option<Selection>,
}

impl GameState {
    /// The active selection, if a piece is currently picked up.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }
}

/// Result of a placement attempt.
///
/// Rejections are silent no-ops: the board and turn flag are untouched and
/// the caller may immediately try another move. There is no error channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveOutcome {
    /// The move was applied; `capture` holds the removed enemy piece, if the
    /// destination was occupied.
    Applied { capture: Option<Piece> },
    /// The attempt was not a legal destination; nothing changed.
    Rejected,
}

impl MoveOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}
