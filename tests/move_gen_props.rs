//! Property-based tests for the destination generators using proptest.

use chess_rules::move_gen::legal_destinations;
use chess_rules::{Board, Piece, PieceColor, PieceType, Square};
use proptest::prelude::*;

/// Strategy for an arbitrary board square.
fn square_strategy() -> impl Strategy<Value = Square> {
    (0u8..8, 0u8..8).prop_map(|(file, rank)| Square::new(file, rank).expect("in range"))
}

/// Strategy for an arbitrary piece.
fn piece_strategy() -> impl Strategy<Value = Piece> {
    (
        prop_oneof![Just(PieceColor::White), Just(PieceColor::Black)],
        0usize..PieceType::ALL.len(),
    )
        .prop_map(|(color, kind)| Piece::new(color, PieceType::ALL[kind]))
}

/// Strategy for a sparsely populated board (up to 24 extra pieces).
fn board_strategy() -> impl Strategy<Value = Board> {
    proptest::collection::hash_map(0usize..64, piece_strategy(), 0..24).prop_map(|placements| {
        let mut board = Board::empty();
        for (index, piece) in placements {
            let square =
                Square::new((index % 8) as u8, (index / 8) as u8).expect("index in range");
            board.place(square, piece);
        }
        board
    })
}

proptest! {
    /// Property: a lone rook reaches exactly the cross of its rank and
    /// file, minus its own square, from anywhere on the board.
    #[test]
    fn prop_rook_cross_on_empty_board(origin in square_strategy()) {
        let mut board = Board::empty();
        let rook = Piece::new(PieceColor::White, PieceType::Rook);
        board.place(origin, rook);

        let mut moves = legal_destinations(&board, origin, rook);
        moves.sort();

        let mut cross: Vec<Square> = Square::all()
            .filter(|&square| {
                square != origin
                    && (square.file() == origin.file() || square.rank() == origin.rank())
            })
            .collect();
        cross.sort();

        prop_assert_eq!(moves, cross);
    }

    /// Property: no generator ever emits the origin square or a square
    /// held by the mover's own color, on any board.
    #[test]
    fn prop_destinations_exclude_origin_and_own_pieces(
        mut board in board_strategy(),
        origin in square_strategy(),
        piece in piece_strategy(),
    ) {
        board.place(origin, piece);

        for destination in legal_destinations(&board, origin, piece) {
            prop_assert_ne!(destination, origin);
            let occupant = board.piece_at(destination);
            prop_assert!(
                occupant.map_or(true, |other| other.color != piece.color),
                "{:?} at {} may not land on own piece at {}",
                piece.piece_type,
                origin,
                destination
            );
        }
    }

    /// Property: on an empty board every non-pawn move is reversible; if
    /// the piece can reach a square, it can come straight back.
    #[test]
    fn prop_non_pawn_moves_are_symmetric_on_empty_board(
        origin in square_strategy(),
        kind in 1usize..PieceType::ALL.len(),
    ) {
        let piece = Piece::new(PieceColor::White, PieceType::ALL[kind]);
        let mut board = Board::empty();
        board.place(origin, piece);

        for destination in legal_destinations(&board, origin, piece) {
            let mut from_destination = Board::empty();
            from_destination.place(destination, piece);
            prop_assert!(
                legal_destinations(&from_destination, destination, piece).contains(&origin),
                "{:?} {} -> {} should be reversible",
                piece.piece_type,
                origin,
                destination
            );
        }
    }

    /// Property: pawn destination counts stay within the rule-book bounds
    /// (at most 2 pushes plus 2 captures).
    #[test]
    fn prop_pawn_destination_count_bounds(
        mut board in board_strategy(),
        origin in square_strategy(),
    ) {
        // Interior ranks only: a pawn on rank 1 or 8 cannot occur in play.
        prop_assume!(origin.rank() >= 1 && origin.rank() <= 6);

        let pawn = Piece::new(PieceColor::White, PieceType::Pawn);
        board.place(origin, pawn);

        let moves = legal_destinations(&board, origin, pawn);
        prop_assert!(moves.len() <= 4, "pawn offered {} destinations", moves.len());
    }
}
