//! Movement legality, check detection, and checkmate detection.
//!
//! Everything here is expressed over the plain piece grid. "Pseudo-legal"
//! means a move obeys the piece's movement pattern and path blocking but may
//! still expose its own king; the full predicate is `is_legal_move`.

use super::{Board, Color, Piece, PieceType, Position};

impl Board {
    /// Check whether a move obeys the moving piece's movement pattern and
    /// path blocking, ignoring whether it would expose the mover's own king.
    ///
    /// Reads the moving piece from `from`; returns false if `from` is empty,
    /// if either square is out of range, or if `to` holds a piece of the
    /// mover's own color.
    pub fn is_pseudo_legal(&self, from: Position, to: Position) -> bool {
        if from.file > 7 || from.rank > 7 || to.file > 7 || to.rank > 7 {
            return false;
        }
        if from == to {
            return false;
        }

        let piece = match self.get_piece(from) {
            Some(piece) => piece,
            None => return false,
        };

        // Never onto a friendly piece
        let target = self.get_piece(to);
        if target.is_some_and(|t| t.color == piece.color) {
            return false;
        }

        let (file_delta, rank_delta) = from.delta(&to);
        let (abs_file, abs_rank) = (file_delta.abs(), rank_delta.abs());

        match piece.piece_type {
            PieceType::Pawn => self.pawn_shape(piece.color, from, file_delta, rank_delta, target),
            PieceType::Rook => {
                (from.same_rank(&to) || from.same_file(&to)) && self.path_is_clear(from, to)
            }
            PieceType::Bishop => from.same_diagonal(&to) && self.path_is_clear(from, to),
            PieceType::Queen => {
                (from.same_rank(&to) || from.same_file(&to) || from.same_diagonal(&to))
                    && self.path_is_clear(from, to)
            }
            PieceType::Knight => {
                (abs_file == 2 && abs_rank == 1) || (abs_file == 1 && abs_rank == 2)
            }
            PieceType::King => abs_file <= 1 && abs_rank <= 1,
        }
    }

    /// Pawn movement: one step forward onto an empty square, two steps from
    /// the home rank with an empty intermediate square, or a one-step
    /// diagonal capture onto an enemy piece. No en passant, no promotion.
    fn pawn_shape(
        &self,
        color: Color,
        from: Position,
        file_delta: i8,
        rank_delta: i8,
        target: Option<Piece>,
    ) -> bool {
        // White pawns start on rank 2 (index 1) and advance toward rank 8
        let (direction, home_rank) = match color {
            Color::White => (1, 1),
            Color::Black => (-1, 6),
        };

        // Single step forward onto an empty square
        if file_delta == 0 && rank_delta == direction && target.is_none() {
            return true;
        }

        // Double step from the home rank; both squares ahead must be empty
        if file_delta == 0
            && rank_delta == 2 * direction
            && from.rank as i8 == home_rank
            && target.is_none()
        {
            let intermediate =
                Position::new_unchecked(from.file, (from.rank as i8 + direction) as u8);
            return self.get_piece(intermediate).is_none();
        }

        // Diagonal capture, only onto an enemy-occupied square
        if file_delta.abs() == 1 && rank_delta == direction {
            return target.is_some_and(|t| t.color != color);
        }

        false
    }

    /// Walk the line from `from` toward `to`, exclusive of both endpoints,
    /// and report whether every intermediate square is empty.
    /// Only meaningful for rank, file, or diagonal lines.
    fn path_is_clear(&self, from: Position, to: Position) -> bool {
        let mut pos = from;
        loop {
            pos = match pos.step_toward(&to) {
                Some(next) => next,
                None => return false,
            };
            if pos == to {
                return true;
            }
            if self.get_piece(pos).is_some() {
                return false;
            }
        }
    }

    /// Whether any piece of color `by` has a pseudo-legal move onto `target`.
    /// O(64) scan over the whole board.
    pub fn is_square_attacked(&self, target: Position, by: Color) -> bool {
        Position::all_positions().any(|pos| {
            self.get_piece(pos).is_some_and(|p| p.color == by) && self.is_pseudo_legal(pos, target)
        })
    }

    /// Locate the king of the given color, if present
    pub fn find_king(&self, color: Color) -> Option<Position> {
        Position::all_positions().find(|&pos| {
            self.get_piece(pos)
                .is_some_and(|p| p.piece_type == PieceType::King && p.color == color)
        })
    }

    /// Whether the given color's king is attacked by an enemy piece.
    ///
    /// A board with no king of that color is reported as not in check; test
    /// positions legitimately omit kings, and the engine never fabricates one.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king_pos) => self.is_square_attacked(king_pos, color.opposite()),
            None => false,
        }
    }

    /// Whether executing `from` -> `to` would leave the mover's own king in
    /// check. The move is simulated on a scratch copy, so this board is
    /// untouched on every path. Returns false if `from` is empty.
    pub fn move_leaves_king_in_check(&self, from: Position, to: Position) -> bool {
        let piece = match self.get_piece(from) {
            Some(piece) => piece,
            None => return false,
        };

        let mut scratch = self.clone();
        if scratch.move_piece(from, to).is_err() {
            return false;
        }
        scratch.is_in_check(piece.color)
    }

    /// The full legality predicate: pseudo-legal and does not expose the
    /// mover's own king
    pub fn is_legal_move(&self, from: Position, to: Position) -> bool {
        self.is_pseudo_legal(from, to) && !self.move_leaves_king_in_check(from, to)
    }

    /// Whether the given color has at least one fully legal move.
    /// Brute force over every (from, to) pair; 4096 candidates at worst,
    /// which is fine at interactive scale.
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        Position::all_positions()
            .filter(|&from| self.get_piece(from).is_some_and(|p| p.color == color))
            .any(|from| Position::all_positions().any(|to| self.is_legal_move(from, to)))
    }

    /// Checkmate: the given color is in check and has no legal reply.
    /// Stalemate (no legal moves while not in check) is deliberately not
    /// detected here.
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_any_legal_move(color)
    }
}
