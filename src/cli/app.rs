use crate::chess::Move;
use crate::cli::display::{display_status, render_board, supports_unicode, BoardStyle};
use crate::cli::validation::{parse_player_input, PlayerInput};
use crate::game::{ClickOutcome, GameSession, GameStatus};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Draw pieces as Unicode glyphs (false: FEN letters)
    pub unicode_pieces: bool,
    /// Rotate the board so the side to move is always at the bottom
    pub flip_perspective: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unicode_pieces: supports_unicode(),
            flip_perspective: false,
        }
    }
}

impl Config {
    /// Get the default config directory
    pub fn default_config_dir() -> Result<PathBuf> {
        ProjectDirs::from("dev", "gambit", "gambit")
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    /// Get the default config file path
    pub fn default_config_file() -> Result<PathBuf> {
        Ok(Self::default_config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default location, creating it with
    /// defaults if it doesn't exist
    pub fn load_or_create_default() -> Result<Self> {
        let config_file = Self::default_config_file()?;

        if config_file.exists() {
            Self::load_from(&config_file)
        } else {
            let config = Config::default();
            config.save_to(&config_file)?;
            Ok(config)
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).context("Failed to read configuration file")?;
        let config: Config =
            toml::from_str(&content).context("Failed to parse configuration file")?;
        Ok(config)
    }

    /// Save configuration to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        std::fs::write(path, content).context("Failed to write configuration file")?;

        Ok(())
    }
}

/// The interactive game application: a session plus display settings
pub struct App {
    session: GameSession,
    config: Config,
}

impl App {
    pub fn new(session: GameSession, config: Config) -> Self {
        Self { session, config }
    }

    fn style(&self) -> BoardStyle {
        if self.config.unicode_pieces {
            BoardStyle::Unicode
        } else {
            BoardStyle::Ascii
        }
    }

    fn perspective(&self) -> crate::chess::Color {
        if self.config.flip_perspective {
            self.session.turn()
        } else {
            crate::chess::Color::White
        }
    }

    fn show_board(&self) {
        print!(
            "\n{}",
            render_board(self.session.board(), self.perspective(), self.style())
        );
        display_status(&self.session);
    }

    /// Run the interactive two-player loop until a player quits.
    ///
    /// Each line of input is one interaction: a square acts as a click
    /// (select / deselect / move to), a four-character move plays directly.
    /// After a checkmate the result is announced and a fresh game begins.
    pub fn run(&mut self) -> Result<()> {
        info!(game_id = %self.session.game_id(), "starting interactive game");
        println!("Two-player chess. Type a square (e2) to select, a move (e2e4) to play.");
        println!("Commands: board, fen, reset, help, quit");
        self.show_board();

        let stdin = io::stdin();
        loop {
            self.prompt()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // EOF
            }
            let input = line.trim();

            match input {
                "" => continue,
                "quit" | "exit" | "q" => break,
                "board" => {
                    self.show_board();
                    continue;
                }
                "fen" => {
                    println!("{}", self.session.to_fen());
                    continue;
                }
                "reset" => {
                    self.session.reset();
                    self.show_board();
                    continue;
                }
                "help" | "?" => {
                    println!("Enter a square (e2) to select or deselect it, then a");
                    println!("destination square to move. Or enter a full move (e2e4).");
                    println!("Commands: board, fen, reset, quit");
                    continue;
                }
                _ => {}
            }

            match parse_player_input(input) {
                Ok(PlayerInput::Square(square)) => self.click(square),
                Ok(PlayerInput::Move(mv)) => self.play_move(mv),
                Err(e) => println!("{e}"),
            }

            if self.session.status().is_over() {
                self.finish_game();
            }
        }

        Ok(())
    }

    fn prompt(&self) -> Result<()> {
        match self.session.selection() {
            Some(sel) => print!("{} [{sel}]> ", self.session.turn()),
            None => print!("{}> ", self.session.turn()),
        }
        io::stdout().flush()?;
        Ok(())
    }

    fn click(&mut self, square: crate::chess::Position) {
        match self.session.handle_click(square) {
            ClickOutcome::Selected(pos) => {
                // Selection path guarantees a piece is present
                if let Some(piece) = self.session.board().get_piece(pos) {
                    println!(
                        "Selected {pos}: {color} {kind}",
                        color = piece.color,
                        kind = piece.piece_type
                    );
                }
            }
            ClickOutcome::Deselected => println!("Selection cleared."),
            ClickOutcome::Moved { mv, .. } => {
                println!("Played {mv}.");
                self.show_board();
            }
            ClickOutcome::Ignored => {
                println!("Nothing to select there; it's {}'s turn.", self.session.turn())
            }
        }
    }

    fn play_move(&mut self, mv: Move) {
        match self.session.make_move(mv) {
            Ok(_) => {
                println!("Played {mv}.");
                self.show_board();
            }
            Err(e) => println!("{e}"),
        }
    }

    fn finish_game(&mut self) {
        if let GameStatus::Checkmate(loser) = self.session.status() {
            println!("\nCheckmate! {} wins.", loser.opposite());
            info!(game_id = %self.session.game_id(), winner = %loser.opposite(), "game over");
        }
        println!("Starting a new game.");
        self.session.reset();
        self.show_board();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_toml_round_trip() {
        let config = Config {
            unicode_pieces: true,
            flip_perspective: true,
        };

        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(config.unicode_pieces, deserialized.unicode_pieces);
        assert_eq!(config.flip_perspective, deserialized.flip_perspective);
    }

    #[test]
    fn test_config_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            unicode_pieces: false,
            flip_perspective: true,
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(!loaded.unicode_pieces);
        assert!(loaded.flip_perspective);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("absent.toml"));
        assert!(result.is_err());
    }
}
