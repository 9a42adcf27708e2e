use gambit::cli::{App, Cli, Commands, Config};
use gambit::game::{GameSession, GameStatus};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play { fen, ascii, flip } => {
            let mut config = Config::load_or_create_default().unwrap_or_else(|e| {
                warn!("Failed to load configuration, using defaults: {e}");
                Config::default()
            });
            if ascii {
                config.unicode_pieces = false;
            }
            if flip {
                config.flip_perspective = true;
            }

            let session = match fen {
                Some(fen) => {
                    GameSession::from_fen(&fen).context("Could not parse starting position")?
                }
                None => GameSession::new(),
            };

            App::new(session, config).run()?;
        }
        Commands::Inspect { fen, ascii } => {
            let session =
                GameSession::from_fen(&fen).context("Could not parse position")?;

            let style = if ascii {
                gambit::cli::BoardStyle::Ascii
            } else {
                gambit::cli::BoardStyle::Unicode
            };
            print!(
                "{}",
                gambit::cli::render_board(session.board(), gambit::chess::Color::White, style)
            );

            match session.status() {
                GameStatus::InProgress => {
                    println!("{} to move.", session.turn())
                }
                GameStatus::Check(color) => println!("{color} to move and in check."),
                GameStatus::Checkmate(color) => {
                    println!("{color} is checkmated. {} wins.", color.opposite())
                }
            }
        }
        Commands::Config => {
            let path = Config::default_config_file()?;
            let config = Config::load_or_create_default()?;
            println!("Config file: {}", path.display());
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
