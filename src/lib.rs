//! Single-ply chess rules: legal destinations and turn arbitration.
//!
//! This crate answers two questions for an 8x8 chess board: which squares
//! may a given piece move to right now, and should a drop on some square be
//! applied or rejected. It is deliberately not a full rules engine; there is
//! no check detection, castling, en passant, promotion, or game termination.
//!
//! ## Components
//!
//! - [`board`] - the position-to-piece mapping and the [`Occupancy`] query
//!   trait the generators are written against
//! - [`move_gen`] - per-piece destination generators sharing one
//!   parameterized ray scanner for the sliding pieces
//! - [`api`] - the move arbiter: pick-up computes and holds a destination
//!   set, drop validates against it, applies or rejects, and flips the turn
//!
//! ## Example
//!
//! ```
//! use chess_rules::{attempt_placement, select_piece, GameState, MoveOutcome};
//!
//! let mut game = GameState::new();
//!
//! // Pick up the e2 pawn; the forward pushes are legal.
//! let destinations = select_piece(&mut game, "e2".parse().unwrap());
//! assert!(destinations.contains(&"e4".parse().unwrap()));
//!
//! // Drop it on e4: applied, no capture, Black to move.
//! let outcome = attempt_placement(&mut game, "e4".parse().unwrap());
//! assert_eq!(outcome, MoveOutcome::Applied { capture: None });
//! ```

pub mod api;
pub mod board;
pub mod error;
pub mod move_gen;
pub mod types;

pub use api::{attempt_placement, select_piece};
pub use board::{Board, Occupancy};
pub use error::ParseSquareError;
pub use types::{GameState, MoveOutcome, Piece, PieceColor, PieceType, Selection, Square};
