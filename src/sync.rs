//! Full-state snapshots for an external synchronization collaborator.
//!
//! A remote peer (or any other transport) that wants to mirror a game sends
//! the whole session state at once; the receiving side swaps its local state
//! wholesale. There is no merging and no partial update, so no locking is
//! needed anywhere.

use crate::chess::ChessError;
use crate::game::GameSession;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::warn;
use uuid::Uuid;

/// A complete game state: everything a remote player needs to replace
/// their local session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Unique identifier for the game
    pub game_id: String,
    /// Session state in FEN notation
    pub fen: String,
    /// SHA-256 hash of the FEN for integrity verification
    pub state_hash: String,
}

impl GameSnapshot {
    /// Capture the current state of a session
    pub fn capture(session: &GameSession) -> Self {
        let fen = session.to_fen();
        let state_hash = hash_state(&fen);
        Self {
            game_id: session.game_id().to_string(),
            fen,
            state_hash,
        }
    }

    /// Whether the embedded hash matches the embedded FEN
    pub fn verify(&self) -> bool {
        hash_state(&self.fen).eq_ignore_ascii_case(&self.state_hash)
    }

    /// Serialize to the JSON wire shape
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from the JSON wire shape
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl GameSession {
    /// Replace this session's state with a delivered snapshot.
    ///
    /// The snapshot is accepted unconditionally: a hash mismatch is logged
    /// as a warning but does not reject the state, since the sender's board
    /// is authoritative for synchronization purposes. Any pending selection
    /// is discarded. Fails only if the snapshot's FEN does not parse.
    pub fn apply_snapshot(&mut self, snapshot: &GameSnapshot) -> Result<(), ChessError> {
        if !snapshot.verify() {
            warn!(
                game_id = %snapshot.game_id,
                "snapshot hash mismatch; applying anyway"
            );
        }

        let restored = GameSession::from_fen(&snapshot.fen)?;
        self.replace_state(snapshot.game_id.clone(), restored);
        Ok(())
    }
}

/// Generate a unique game ID using UUID v4
pub fn generate_game_id() -> String {
    Uuid::new_v4().to_string()
}

/// Validate that a string is a properly formatted UUID game ID
pub fn validate_game_id(id: &str) -> bool {
    Uuid::parse_str(id).is_ok()
}

/// SHA-256 of the canonical FEN representation, as a lowercase hex string.
/// Identical positions always produce identical hashes.
pub fn hash_state(fen: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(fen.as_bytes());
    let result = hasher.finalize();
    format!("{:x}", result)
}
