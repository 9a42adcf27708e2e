pub mod app;
pub mod commands;
pub mod display;
pub mod validation;

pub use app::{App, Config};
pub use commands::{Cli, Commands};
pub use display::{
    display_status, render_board, supports_unicode, BoardStyle,
};
pub use validation::{parse_player_input, PlayerInput, ValidationError};
