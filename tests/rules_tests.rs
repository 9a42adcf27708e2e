use gambit::chess::{Board, Color, Piece, PieceType, Position};

fn place(board: &mut Board, square: &str, piece_type: PieceType, color: Color) {
    board
        .set_piece(square.parse().unwrap(), Some(Piece::new(piece_type, color)))
        .unwrap();
}

fn pos(square: &str) -> Position {
    square.parse().unwrap()
}

#[cfg(test)]
mod pawn_tests {
    use super::*;

    #[test]
    fn test_white_pawn_single_step_forward() {
        let board = Board::new();
        assert!(board.is_pseudo_legal(pos("e2"), pos("e3")));
    }

    #[test]
    fn test_white_pawn_double_step_from_home_row() {
        // e2 -> e4 legal when e3 and e4 are empty
        let board = Board::new();
        assert!(board.is_pseudo_legal(pos("e2"), pos("e4")));
    }

    #[test]
    fn test_white_pawn_double_step_blocked_by_intermediate() {
        let mut board = Board::new();
        place(&mut board, "e3", PieceType::Knight, Color::Black);
        assert!(
            !board.is_pseudo_legal(pos("e2"), pos("e4")),
            "double step must fail when the jumped-over square is occupied"
        );
        assert!(!board.is_pseudo_legal(pos("e2"), pos("e3")));
    }

    #[test]
    fn test_white_pawn_double_step_blocked_by_destination() {
        let mut board = Board::new();
        place(&mut board, "e4", PieceType::Knight, Color::Black);
        assert!(!board.is_pseudo_legal(pos("e2"), pos("e4")));
    }

    #[test]
    fn test_pawn_double_step_only_from_home_row() {
        let mut board = Board::empty();
        place(&mut board, "e3", PieceType::Pawn, Color::White);
        assert!(!board.is_pseudo_legal(pos("e3"), pos("e5")));
    }

    #[test]
    fn test_pawn_cannot_capture_forward() {
        let mut board = Board::new();
        place(&mut board, "e3", PieceType::Pawn, Color::Black);
        assert!(!board.is_pseudo_legal(pos("e2"), pos("e3")));
    }

    #[test]
    fn test_pawn_diagonal_capture_requires_enemy_piece() {
        let mut board = Board::new();
        // Diagonal onto an empty square: no
        assert!(!board.is_pseudo_legal(pos("e2"), pos("d3")));

        // Diagonal onto an enemy piece: yes
        place(&mut board, "d3", PieceType::Knight, Color::Black);
        assert!(board.is_pseudo_legal(pos("e2"), pos("d3")));

        // Diagonal onto a friendly piece: no
        place(&mut board, "f3", PieceType::Knight, Color::White);
        assert!(!board.is_pseudo_legal(pos("e2"), pos("f3")));
    }

    #[test]
    fn test_pawn_cannot_move_backward_or_sideways() {
        let mut board = Board::empty();
        place(&mut board, "e4", PieceType::Pawn, Color::White);
        assert!(!board.is_pseudo_legal(pos("e4"), pos("e3")));
        assert!(!board.is_pseudo_legal(pos("e4"), pos("d4")));
        assert!(!board.is_pseudo_legal(pos("e4"), pos("f4")));
    }

    #[test]
    fn test_black_pawn_moves_down_the_board() {
        let board = Board::new();
        assert!(board.is_pseudo_legal(pos("e7"), pos("e6")));
        assert!(board.is_pseudo_legal(pos("e7"), pos("e5")));
        assert!(!board.is_pseudo_legal(pos("e7"), pos("e8")));

        let mut board = Board::new();
        place(&mut board, "d6", PieceType::Bishop, Color::White);
        assert!(board.is_pseudo_legal(pos("e7"), pos("d6")));
    }
}

#[cfg(test)]
mod rook_tests {
    use super::*;

    #[test]
    fn test_rook_moves_along_rank_and_file() {
        let mut board = Board::empty();
        place(&mut board, "a1", PieceType::Rook, Color::White);
        assert!(board.is_pseudo_legal(pos("a1"), pos("a8")));
        assert!(board.is_pseudo_legal(pos("a1"), pos("h1")));
        assert!(board.is_pseudo_legal(pos("a1"), pos("a2")));
    }

    #[test]
    fn test_rook_cannot_jump() {
        // a1 -> a8 illegal if any of a2..a7 is occupied
        for blocker_rank in 2..=7 {
            let mut board = Board::empty();
            place(&mut board, "a1", PieceType::Rook, Color::White);
            let blocker = format!("a{blocker_rank}");
            place(&mut board, &blocker, PieceType::Pawn, Color::Black);
            assert!(
                !board.is_pseudo_legal(pos("a1"), pos("a8")),
                "rook should be blocked by piece on {blocker}"
            );
        }
    }

    #[test]
    fn test_rook_cannot_move_diagonally() {
        let mut board = Board::empty();
        place(&mut board, "a1", PieceType::Rook, Color::White);
        assert!(!board.is_pseudo_legal(pos("a1"), pos("b2")));
    }

    #[test]
    fn test_rook_captures_at_end_of_clear_path() {
        let mut board = Board::empty();
        place(&mut board, "a1", PieceType::Rook, Color::White);
        place(&mut board, "a8", PieceType::Rook, Color::Black);
        assert!(board.is_pseudo_legal(pos("a1"), pos("a8")));
    }
}

#[cfg(test)]
mod bishop_and_queen_tests {
    use super::*;

    #[test]
    fn test_bishop_moves_diagonally_only() {
        let mut board = Board::empty();
        place(&mut board, "c1", PieceType::Bishop, Color::White);
        assert!(board.is_pseudo_legal(pos("c1"), pos("h6")));
        assert!(board.is_pseudo_legal(pos("c1"), pos("a3")));
        assert!(!board.is_pseudo_legal(pos("c1"), pos("c4")));
        assert!(!board.is_pseudo_legal(pos("c1"), pos("d4")));
    }

    #[test]
    fn test_bishop_blocked_by_intermediate_piece() {
        let mut board = Board::empty();
        place(&mut board, "c1", PieceType::Bishop, Color::White);
        place(&mut board, "e3", PieceType::Pawn, Color::White);
        assert!(!board.is_pseudo_legal(pos("c1"), pos("h6")));
        // Up to the blocker is still fine
        assert!(board.is_pseudo_legal(pos("c1"), pos("d2")));
    }

    #[test]
    fn test_queen_combines_rook_and_bishop() {
        let mut board = Board::empty();
        place(&mut board, "d1", PieceType::Queen, Color::White);
        assert!(board.is_pseudo_legal(pos("d1"), pos("d8"))); // file
        assert!(board.is_pseudo_legal(pos("d1"), pos("a1"))); // rank
        assert!(board.is_pseudo_legal(pos("d1"), pos("h5"))); // diagonal
        assert!(!board.is_pseudo_legal(pos("d1"), pos("e3"))); // knight shape
    }

    #[test]
    fn test_queen_blocked_on_diagonal() {
        let board = Board::new();
        // d1 -> h5 passes through e2 which holds a pawn
        assert!(!board.is_pseudo_legal(pos("d1"), pos("h5")));
    }
}

#[cfg(test)]
mod knight_and_king_tests {
    use super::*;

    #[test]
    fn test_knight_all_eight_offsets() {
        let mut board = Board::empty();
        place(&mut board, "d4", PieceType::Knight, Color::White);
        for target in ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"] {
            assert!(
                board.is_pseudo_legal(pos("d4"), pos(target)),
                "knight d4 -> {target} should be pseudo-legal"
            );
        }
        assert!(!board.is_pseudo_legal(pos("d4"), pos("f6")));
        assert!(!board.is_pseudo_legal(pos("d4"), pos("d6")));
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        // From the starting position, b1 -> c3 jumps the pawn wall
        let board = Board::new();
        assert!(board.is_pseudo_legal(pos("b1"), pos("c3")));
        assert!(board.is_pseudo_legal(pos("g1"), pos("f3")));
    }

    #[test]
    fn test_king_one_square_any_direction() {
        let mut board = Board::empty();
        place(&mut board, "e4", PieceType::King, Color::White);
        for target in ["d3", "d4", "d5", "e3", "e5", "f3", "f4", "f5"] {
            assert!(
                board.is_pseudo_legal(pos("e4"), pos(target)),
                "king e4 -> {target} should be pseudo-legal"
            );
        }
    }

    #[test]
    fn test_king_cannot_move_two_squares() {
        let mut board = Board::empty();
        place(&mut board, "e1", PieceType::King, Color::White);
        assert!(!board.is_pseudo_legal(pos("e1"), pos("e3")));
        assert!(!board.is_pseudo_legal(pos("e1"), pos("g1"))); // no castling
    }
}

#[cfg(test)]
mod general_shape_tests {
    use super::*;

    #[test]
    fn test_move_onto_friendly_piece_rejected_for_every_kind() {
        let board = Board::new();
        // e1 king onto e2 pawn, d1 queen onto d2 pawn, a1 rook onto a2 pawn
        assert!(!board.is_pseudo_legal(pos("e1"), pos("e2")));
        assert!(!board.is_pseudo_legal(pos("d1"), pos("d2")));
        assert!(!board.is_pseudo_legal(pos("a1"), pos("a2")));
    }

    #[test]
    fn test_empty_origin_is_never_legal() {
        let board = Board::new();
        assert!(!board.is_pseudo_legal(pos("e4"), pos("e5")));
    }

    #[test]
    fn test_same_square_is_never_legal() {
        let board = Board::new();
        assert!(!board.is_pseudo_legal(pos("e2"), pos("e2")));
    }

    #[test]
    fn test_legality_ignores_board_content_off_the_path() {
        // Pseudo-legality is a function of the path and the endpoints only
        let mut reference = Board::empty();
        place(&mut reference, "a1", PieceType::Rook, Color::White);
        let clear = reference.is_pseudo_legal(pos("a1"), pos("a8"));
        assert!(clear);

        // Pile unrelated pieces far from the a-file
        place(&mut reference, "h8", PieceType::Queen, Color::Black);
        place(&mut reference, "g5", PieceType::Knight, Color::Black);
        place(&mut reference, "e4", PieceType::Pawn, Color::White);
        assert_eq!(
            reference.is_pseudo_legal(pos("a1"), pos("a8")),
            clear,
            "off-path pieces must not change the verdict"
        );
    }
}
