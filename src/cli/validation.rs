use crate::chess::{Move, Position};
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

/// Validation error for typed player input, with suggestions for the
/// common mistakes
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid square: {0}")]
    InvalidSquare(String),

    #[error("Invalid move: {0}")]
    InvalidMove(String),

    #[error("Input cannot be empty. Type a square like 'e2' or a move like 'e2e4'")]
    EmptyInput,
}

/// Result type for input validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// One piece of typed player input: a single square (one "click") or a full
/// move (origin and destination at once)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    Square(Position),
    Move(Move),
}

fn move_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-h][1-8][a-h][1-8]$").expect("move regex is valid"))
}

/// Parse typed input into a square click or a full move.
///
/// Accepts coordinate notation only: "e2" (a click) or "e2e4" (a move).
/// Rejects the common alternative notations with a pointer to the
/// supported format.
pub fn parse_player_input(input: &str) -> ValidationResult<PlayerInput> {
    let trimmed = input.trim().to_lowercase();

    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    // Two characters is a square click; let the position parser report
    // out-of-range files and ranks ("i9", "a0", ...)
    if trimmed.len() == 2 {
        return Position::from_str(&trimmed)
            .map(PlayerInput::Square)
            .map_err(|e| ValidationError::InvalidSquare(e.to_string()));
    }

    if move_regex().is_match(&trimmed) {
        // Well-formed squares can still make a bad move ("e2e2")
        let mv =
            Move::from_str(&trimmed).map_err(|e| ValidationError::InvalidMove(e.to_string()))?;
        return Ok(PlayerInput::Move(mv));
    }

    // Point out the common notation mistakes before the generic rejection
    if trimmed.contains(' ') {
        return Err(ValidationError::InvalidMove(
            "Moves should not contain spaces. Use 'e2e4' instead of 'e2 e4'".to_string(),
        ));
    }

    if trimmed.contains('-') {
        return Err(ValidationError::InvalidMove(
            "Use coordinate notation without dashes. Use 'e2e4' instead of 'e2-e4'".to_string(),
        ));
    }

    if trimmed.len() > 4 {
        return Err(ValidationError::InvalidMove(
            "Input is too long. Use a square like 'e2' or a move like 'e2e4'".to_string(),
        ));
    }

    Err(ValidationError::InvalidMove(format!(
        "Unrecognized input '{trimmed}'. Use a square like 'e2' or a move like 'e2e4'"
    )))
}
