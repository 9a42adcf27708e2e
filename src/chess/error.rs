use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    InvalidPosition(String),
    InvalidMove(String),
    InvalidFen(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidPosition(msg) => write!(f, "Invalid position: {}", msg),
            ChessError::InvalidMove(msg) => write!(f, "Invalid move: {}", msg),
            ChessError::InvalidFen(msg) => write!(f, "Invalid FEN: {}", msg),
        }
    }
}

impl std::error::Error for ChessError {}
