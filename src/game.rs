//! Game session state: board, side to move, pending selection, and the
//! click-driven turn state machine.
//!
//! All turn bookkeeping lives here as an explicit value owned by the caller;
//! the engine itself has no global state.

use crate::chess::{Board, ChessError, Color, Move, PieceType, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, info};

/// Status of the side to move, recomputed after every accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game in progress, side to move is not in check
    InProgress,
    /// The given color is to move and in check
    Check(Color),
    /// The given color is to move, in check, and has no legal reply
    Checkmate(Color),
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Checkmate(_))
    }
}

/// What a single click on a square did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The square held a piece of the side to move; it is now selected
    Selected(Position),
    /// The pending selection was discarded; the board is unchanged.
    /// Covers re-clicking the selected square and illegal destinations
    /// (illegal move attempts are silently absorbed).
    Deselected,
    /// A legal move was executed
    Moved { mv: Move, status: GameStatus },
    /// The click did nothing (empty or enemy square with no selection,
    /// or the game is already over)
    Ignored,
}

/// A two-player chess session: board, side to move, and pending selection.
///
/// Mutating operations run synchronously to completion; there are no
/// suspension points and no shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    game_id: String,
    board: Board,
    turn: Color,
    selection: Option<Position>,
    status: GameStatus,
    /// Halfmove counter for the 50-move rule (resets on pawn moves and captures)
    halfmove_clock: u16,
    /// Move counter (increments after Black's move)
    fullmove_number: u16,
}

impl GameSession {
    /// Start a fresh game: standard starting position, White to move
    pub fn new() -> Self {
        Self {
            game_id: crate::sync::generate_game_id(),
            board: Board::new(),
            turn: Color::White,
            selection: None,
            status: GameStatus::InProgress,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Restore this session to a fresh game, keeping its game id
    pub fn reset(&mut self) {
        info!(game_id = %self.game_id, "resetting game");
        self.board = Board::new();
        self.turn = Color::White;
        self.selection = None;
        self.status = GameStatus::InProgress;
        self.halfmove_clock = 0;
        self.fullmove_number = 1;
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Whether `from` -> `to` would be accepted for the side to move
    pub fn is_legal(&self, from: Position, to: Position) -> bool {
        self.board
            .get_piece(from)
            .is_some_and(|p| p.color == self.turn)
            && self.board.is_legal_move(from, to)
    }

    /// Process one click on a square.
    ///
    /// No selection: clicking a piece of the side to move selects it;
    /// anything else is ignored. With a selection: a legal destination
    /// executes the move, everything else just clears the selection.
    /// After checkmate the board is frozen until `reset`.
    pub fn handle_click(&mut self, square: Position) -> ClickOutcome {
        if self.status.is_over() {
            return ClickOutcome::Ignored;
        }

        let origin = match self.selection {
            None => {
                let own_piece = self
                    .board
                    .get_piece(square)
                    .is_some_and(|p| p.color == self.turn);
                if own_piece {
                    self.selection = Some(square);
                    debug!(square = %square, "selected");
                    return ClickOutcome::Selected(square);
                }
                return ClickOutcome::Ignored;
            }
            Some(origin) => origin,
        };

        // Second click always resolves the selection, one way or the other
        self.selection = None;

        if origin == square {
            return ClickOutcome::Deselected;
        }

        if !self.is_legal(origin, square) {
            debug!(from = %origin, to = %square, "illegal move attempt absorbed");
            return ClickOutcome::Deselected;
        }

        let mv = Move::new_unchecked(origin, square);
        let status = self.apply_move(mv);
        ClickOutcome::Moved { mv, status }
    }

    /// Validate and execute a move for the side to move.
    ///
    /// Unlike the click path, which silently absorbs illegal attempts, this
    /// surfaces the reason a move was rejected.
    pub fn make_move(&mut self, mv: Move) -> Result<GameStatus, ChessError> {
        if self.status.is_over() {
            return Err(ChessError::InvalidMove(
                "The game is over; reset to start a new one".to_string(),
            ));
        }

        let piece = self.board.get_piece(mv.from).ok_or_else(|| {
            let from = mv.from;
            ChessError::InvalidMove(format!("No piece at source position {from}"))
        })?;

        if piece.color != self.turn {
            return Err(ChessError::InvalidMove(format!(
                "Cannot move {piece_color} piece when it's {turn}'s turn",
                piece_color = piece.color,
                turn = self.turn
            )));
        }

        if !self.board.is_pseudo_legal(mv.from, mv.to) {
            return Err(ChessError::InvalidMove(format!(
                "{color} {kind} cannot move from {from} to {to}",
                color = piece.color,
                kind = piece.piece_type,
                from = mv.from,
                to = mv.to
            )));
        }

        if self.board.move_leaves_king_in_check(mv.from, mv.to) {
            return Err(ChessError::InvalidMove(format!(
                "Move {mv} would leave {color}'s king in check",
                color = piece.color
            )));
        }

        self.selection = None;
        Ok(self.apply_move(mv))
    }

    /// Execute an already-validated move: mutate the board, update counters,
    /// flip the side to move, and recompute the status for the new side.
    fn apply_move(&mut self, mv: Move) -> GameStatus {
        let piece = self.board.get_piece(mv.from);
        let is_pawn_move = piece.is_some_and(|p| p.piece_type == PieceType::Pawn);

        // Position validity was established by the caller
        let captured = self
            .board
            .move_piece(mv.from, mv.to)
            .expect("validated move must stay on the board");

        self.update_move_counters(is_pawn_move, captured.is_some());
        self.turn = self.turn.opposite();
        self.status = self.evaluate_status();

        debug!(mv = %mv, captured = captured.is_some(), "move applied");
        match self.status {
            GameStatus::Checkmate(color) => info!(game_id = %self.game_id, %color, "checkmate"),
            GameStatus::Check(color) => debug!(%color, "check"),
            GameStatus::InProgress => {}
        }

        self.status
    }

    /// Status of the side to move on the current board
    fn evaluate_status(&self) -> GameStatus {
        if self.board.is_checkmate(self.turn) {
            GameStatus::Checkmate(self.turn)
        } else if self.board.is_in_check(self.turn) {
            GameStatus::Check(self.turn)
        } else {
            GameStatus::InProgress
        }
    }

    /// Update move counters based on the move type
    fn update_move_counters(&mut self, is_pawn_move: bool, is_capture: bool) {
        // Halfmove clock resets on pawn moves and captures (50-move rule)
        if is_pawn_move || is_capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        // Fullmove number increments after Black's move
        if self.turn == Color::Black {
            self.fullmove_number += 1;
        }
    }

    /// Converts the current session state to FEN notation.
    /// Castling and en passant are outside the rule set, so those fields are
    /// always "-".
    pub fn to_fen(&self) -> String {
        let placement = self.board.placement();
        let active_color = match self.turn {
            Color::White => "w",
            Color::Black => "b",
        };
        let halfmove = self.halfmove_clock;
        let fullmove = self.fullmove_number;

        format!("{placement} {active_color} - - {halfmove} {fullmove}")
    }

    /// Create a session from a FEN (Forsyth-Edwards Notation) string.
    /// FEN format: piece_placement active_color castling_rights en_passant halfmove fullmove
    /// Example: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    ///
    /// Castling-rights and en-passant fields are validated for shape but
    /// discarded; neither feature is part of the rule set.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let fen = fen.trim();
        if fen.is_empty() {
            return Err(ChessError::InvalidFen(
                "FEN string cannot be empty".to_string(),
            ));
        }

        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 6 {
            let found_count = parts.len();
            return Err(ChessError::InvalidFen(format!(
                "FEN must have exactly 6 fields (piece_placement active_color castling_rights en_passant halfmove fullmove), found {found_count}"
            )));
        }

        let [placement, active_color, castling_rights, en_passant, halfmove_str, fullmove_str] =
            parts.as_slice()
        else {
            unreachable!()
        };

        let board = Board::from_placement(placement)?;

        let turn = match *active_color {
            "w" => Color::White,
            "b" => Color::Black,
            _ => {
                return Err(ChessError::InvalidFen(format!(
                    "Invalid active color '{active_color}' (must be 'w' for White or 'b' for Black)"
                )))
            }
        };

        // Castling rights: validate the characters, then discard
        if *castling_rights != "-" {
            for c in castling_rights.chars() {
                if !"KQkq".contains(c) {
                    return Err(ChessError::InvalidFen(format!(
                        "Invalid character '{c}' in castling rights '{castling_rights}' (valid characters: K, Q, k, q, or '-' for none)"
                    )));
                }
            }
        }

        // En passant target: validate the square notation, then discard
        if *en_passant != "-" {
            let target = Position::from_str(en_passant)
                .map_err(|e| ChessError::InvalidFen(e.to_string()))?;
            if target.rank != 2 && target.rank != 5 {
                return Err(ChessError::InvalidFen(format!(
                    "Invalid en passant target '{en_passant}' (en passant squares must be on rank 3 or 6)"
                )));
            }
        }

        let halfmove_clock = halfmove_str.parse::<u16>().map_err(|e| {
            ChessError::InvalidFen(format!(
                "Invalid halfmove clock '{halfmove_str}' (must be a non-negative integer): {e}"
            ))
        })?;

        let fullmove_number = fullmove_str.parse::<u16>().map_err(|e| {
            ChessError::InvalidFen(format!(
                "Invalid fullmove number '{fullmove_str}' (must be a positive integer): {e}"
            ))
        })?;

        if fullmove_number == 0 {
            return Err(ChessError::InvalidFen(
                "Fullmove number must be at least 1".to_string(),
            ));
        }

        let mut session = Self {
            game_id: crate::sync::generate_game_id(),
            board,
            turn,
            selection: None,
            status: GameStatus::InProgress,
            halfmove_clock,
            fullmove_number,
        };
        // A loaded position may already be check or checkmate
        session.status = session.evaluate_status();

        Ok(session)
    }

    /// Replace the entire session state from a restored FEN plus id.
    /// Used by snapshot synchronization; always a full-state swap.
    pub(crate) fn replace_state(&mut self, game_id: String, other: GameSession) {
        self.game_id = game_id;
        self.board = other.board;
        self.turn = other.turn;
        self.selection = None;
        self.status = other.status;
        self.halfmove_clock = other.halfmove_clock;
        self.fullmove_number = other.fullmove_number;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
