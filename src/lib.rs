pub mod chess;
pub mod cli;
pub mod game;
pub mod sync;

// Re-export key types for easy testing
pub use chess::{Board, ChessError, Color, Move, Piece, PieceType, Position};
pub use game::{ClickOutcome, GameSession, GameStatus};
pub use sync::GameSnapshot;
