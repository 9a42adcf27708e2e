use super::error::ChessError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A (from, to) square pair. Promotion and castling are not part of the
/// rule set, so a move carries nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    /// Create a new move with validation
    pub fn new(from: Position, to: Position) -> Result<Self, ChessError> {
        // Validate that from != to
        if from == to {
            return Err(ChessError::InvalidMove(
                "Source and destination positions cannot be the same".to_string(),
            ));
        }

        Ok(Self { from, to })
    }

    /// Create a new move without validation (for internal use when validity is guaranteed)
    pub const fn new_unchecked(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

// Implement Display for coordinate notation
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

// Implement FromStr for parsing coordinate move notation (e.g. "e2e4")
impl FromStr for Move {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.len() != 4 {
            return Err(ChessError::InvalidMove(format!(
                "Invalid move format '{s}'. Expected coordinate notation like 'e2e4'."
            )));
        }

        let from = s[0..2].parse::<Position>()?;
        let to = s[2..4].parse::<Position>()?;

        Self::new(from, to)
    }
}
