use super::{ChessError, Color, Piece, PieceType, Position};
use serde::{Deserialize, Serialize};

/// An 8x8 chess board: a grid of optional pieces and nothing else.
///
/// Turn bookkeeping (side to move, move counters, pending selection) lives in
/// `GameSession`; the board is purely the piece placement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// 8x8 array representing the chess board squares
    /// squares[rank][file] where rank 0 = rank 1, file 0 = file a
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Create a new board with the standard starting position
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_starting_position();
        board
    }

    /// Create a board with no pieces on it
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Get the piece at the specified position, if any
    pub fn get_piece(&self, pos: Position) -> Option<Piece> {
        // Validate position bounds
        if pos.file > 7 || pos.rank > 7 {
            return None;
        }

        self.squares[pos.rank as usize][pos.file as usize]
    }

    /// Set a piece at the specified position
    pub fn set_piece(&mut self, pos: Position, piece: Option<Piece>) -> Result<(), ChessError> {
        // Validate position bounds
        if pos.file > 7 || pos.rank > 7 {
            let file = pos.file;
            let rank = pos.rank;
            return Err(ChessError::InvalidPosition(format!(
                "Position ({file},{rank}) is out of bounds"
            )));
        }

        self.squares[pos.rank as usize][pos.file as usize] = piece;
        Ok(())
    }

    /// Relocate whatever is at `from` onto `to`, clearing `from`.
    /// Whatever was at `to` is captured (discarded) and returned.
    /// The caller is responsible for having validated the move.
    pub fn move_piece(&mut self, from: Position, to: Position) -> Result<Option<Piece>, ChessError> {
        let piece = self.get_piece(from);
        let captured = self.get_piece(to);
        self.set_piece(from, None)?;
        self.set_piece(to, piece)?;
        Ok(captured)
    }

    /// Set up the standard chess starting position
    fn setup_starting_position(&mut self) {
        // Clear the board first
        self.squares = [[None; 8]; 8];

        let back_rank = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];

        // White pieces on ranks 1-2 (indices 0 and 1)
        for (file, &piece_type) in back_rank.iter().enumerate() {
            self.squares[0][file] = Some(Piece::new(piece_type, Color::White));
        }
        for file in 0..8 {
            self.squares[1][file] = Some(Piece::new(PieceType::Pawn, Color::White));
        }

        // Black pieces on ranks 7-8 (indices 6 and 7)
        for (file, &piece_type) in back_rank.iter().enumerate() {
            self.squares[7][file] = Some(Piece::new(piece_type, Color::Black));
        }
        for file in 0..8 {
            self.squares[6][file] = Some(Piece::new(PieceType::Pawn, Color::Black));
        }
    }

    /// Parse the piece-placement field of a FEN string (the first of the six
    /// space-separated fields, e.g. "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")
    pub fn from_placement(placement: &str) -> Result<Board, ChessError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            let found_ranks = ranks.len();
            return Err(ChessError::InvalidFen(format!(
                "Piece placement must have exactly 8 ranks separated by '/', found {found_ranks}"
            )));
        }

        // Initialize empty board
        let mut squares = [[None; 8]; 8];

        // Parse each rank (iterate from rank 8 to rank 1)
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let board_rank = 7 - rank_idx; // FEN rank 8 = board_rank 7
            let fen_rank_number = 8 - rank_idx; // For error messages

            if rank_str.is_empty() {
                return Err(ChessError::InvalidFen(format!(
                    "Rank {fen_rank_number} cannot be empty"
                )));
            }

            let mut file = 0;

            for c in rank_str.chars() {
                if file >= 8 {
                    return Err(ChessError::InvalidFen(format!(
                        "Rank {fen_rank_number} has more than 8 squares (found character '{c}')"
                    )));
                }

                if c.is_ascii_digit() {
                    // Skip empty squares
                    let empty_squares = c.to_digit(10).unwrap() as usize;
                    if empty_squares == 0 || empty_squares > 8 {
                        return Err(ChessError::InvalidFen(format!(
                            "Invalid empty square count '{c}' in rank {fen_rank_number} (must be 1-8)"
                        )));
                    }
                    if file + empty_squares > 8 {
                        return Err(ChessError::InvalidFen(format!(
                            "Empty square count '{c}' in rank {fen_rank_number} would exceed 8 squares"
                        )));
                    }
                    file += empty_squares;
                } else {
                    let piece = Self::char_to_piece(c).map_err(|_| {
                        let position = file + 1;
                        ChessError::InvalidFen(format!(
                            "Invalid piece character '{c}' in rank {fen_rank_number} at position {position} (valid pieces: KQRBNPkqrbnp)"
                        ))
                    })?;
                    squares[board_rank][file] = Some(piece);
                    file += 1;
                }
            }

            // Validate that we have exactly 8 squares per rank
            if file != 8 {
                return Err(ChessError::InvalidFen(format!(
                    "Rank {fen_rank_number} must represent exactly 8 squares, found {file} (check piece placement and empty square counts)"
                )));
            }
        }

        Ok(Board { squares })
    }

    /// Generate the piece-placement field of FEN notation.
    /// Iterates through ranks 8 down to 1, converting pieces to FEN characters
    /// and collapsing consecutive empty squares into digits.
    pub fn placement(&self) -> String {
        let mut ranks = Vec::with_capacity(8);

        // Iterate through ranks 8 down to 1 (board indices 7 down to 0)
        for rank_idx in (0..8).rev() {
            let mut rank_string = String::new();
            let mut empty_count = 0;

            // Iterate through files a-h (columns 0-7)
            for file_idx in 0..8 {
                match self.squares[rank_idx][file_idx] {
                    Some(piece) => {
                        // If we have accumulated empty squares, add the count first
                        if empty_count > 0 {
                            rank_string.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        rank_string.push(Self::piece_to_fen_char(&piece));
                    }
                    None => {
                        // Count consecutive empty squares
                        empty_count += 1;
                    }
                }
            }

            // Add any remaining empty squares at the end of the rank
            if empty_count > 0 {
                rank_string.push_str(&empty_count.to_string());
            }

            ranks.push(rank_string);
        }

        ranks.join("/")
    }

    /// Convert a piece to its FEN character representation
    /// White pieces: uppercase letters (PRNBQK)
    /// Black pieces: lowercase letters (prnbqk)
    pub(crate) fn piece_to_fen_char(piece: &Piece) -> char {
        let base_char = match piece.piece_type {
            PieceType::Pawn => 'P',
            PieceType::Rook => 'R',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        };

        match piece.color {
            Color::White => base_char,
            Color::Black => base_char.to_ascii_lowercase(),
        }
    }

    /// Helper function to convert FEN piece character to Piece
    fn char_to_piece(c: char) -> Result<Piece, ChessError> {
        let (piece_type, color) = match c {
            'K' => (PieceType::King, Color::White),
            'Q' => (PieceType::Queen, Color::White),
            'R' => (PieceType::Rook, Color::White),
            'B' => (PieceType::Bishop, Color::White),
            'N' => (PieceType::Knight, Color::White),
            'P' => (PieceType::Pawn, Color::White),
            'k' => (PieceType::King, Color::Black),
            'q' => (PieceType::Queen, Color::Black),
            'r' => (PieceType::Rook, Color::Black),
            'b' => (PieceType::Bishop, Color::Black),
            'n' => (PieceType::Knight, Color::Black),
            'p' => (PieceType::Pawn, Color::Black),
            _ => {
                return Err(ChessError::InvalidFen(format!(
                    "Invalid piece character '{c}'"
                )))
            }
        };
        Ok(Piece::new(piece_type, color))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
