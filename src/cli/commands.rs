use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gambit")]
#[command(about = "A two-player chess game for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play a two-player game at this terminal
    ///
    /// Both players share the keyboard and enter squares or moves in
    /// coordinate notation. Typing a single square ("e2") selects or
    /// deselects it, exactly like clicking it; typing a full move ("e2e4")
    /// plays it directly.
    ///
    /// Examples:
    ///   gambit play
    ///   gambit play --fen "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"
    ///   gambit play --ascii --flip
    Play {
        /// Start from a specific position instead of the standard setup
        #[arg(short, long)]
        fen: Option<String>,
        /// Use ASCII piece letters instead of Unicode glyphs
        #[arg(long)]
        ascii: bool,
        /// Show the board from the side to move's perspective
        #[arg(long)]
        flip: bool,
    },

    /// Print a position and its check/checkmate verdict
    ///
    /// Renders the board described by a FEN string and reports whether the
    /// side to move is in check or checkmated.
    ///
    /// Example: gambit inspect "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w - - 1 3"
    Inspect {
        /// Position in FEN notation
        fen: String,
        /// Use ASCII piece letters instead of Unicode glyphs
        #[arg(long)]
        ascii: bool,
    },

    /// Show the configuration file location and current settings
    Config,
}
