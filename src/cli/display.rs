use crate::chess::{Board, Color, Position};
use crate::game::{GameSession, GameStatus};

/// How pieces are drawn in the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardStyle {
    /// Unicode chess glyphs (♔ ♛ ...)
    Unicode,
    /// FEN piece letters (K q ...) for terminals without glyph support
    Ascii,
}

/// Render a board into a box-drawn string from the given color's
/// perspective (that color's back rank at the bottom).
pub fn render_board(board: &Board, perspective: Color, style: BoardStyle) -> String {
    let mut out = String::new();

    // Rank iteration order and file order both flip with the perspective
    let ranks: Vec<u8> = match perspective {
        Color::White => (0..8).rev().collect(),
        Color::Black => (0..8).collect(),
    };
    let files: Vec<u8> = match perspective {
        Color::White => (0..8).collect(),
        Color::Black => (0..8).rev().collect(),
    };

    out.push_str("  ┌─┬─┬─┬─┬─┬─┬─┬─┐\n");

    for (i, &rank) in ranks.iter().enumerate() {
        let rank_number = rank + 1;
        out.push_str(&format!("{rank_number} │"));

        for &file in &files {
            let piece = board.get_piece(Position::new_unchecked(file, rank));
            let symbol = match (piece, style) {
                (Some(piece), BoardStyle::Unicode) => piece.glyph().to_string(),
                (Some(piece), BoardStyle::Ascii) => {
                    Board::piece_to_fen_char(&piece).to_string()
                }
                (None, _) => " ".to_string(),
            };
            out.push_str(&symbol);
            out.push('│');
        }
        out.push_str(&format!(" {rank_number}\n"));

        if i < 7 {
            out.push_str("  ├─┼─┼─┼─┼─┼─┼─┼─┤\n");
        }
    }

    out.push_str("  └─┴─┴─┴─┴─┴─┴─┴─┘\n");
    match perspective {
        Color::White => out.push_str("   a b c d e f g h\n"),
        Color::Black => out.push_str("   h g f e d c b a\n"),
    }

    out
}

/// Print the turn/status line for a session
pub fn display_status(session: &GameSession) {
    match session.status() {
        GameStatus::InProgress => println!("Turn: {}", session.turn()),
        GameStatus::Check(color) => println!("Turn: {color} (Check!)"),
        GameStatus::Checkmate(color) => {
            println!("Checkmate! {} wins.", color.opposite());
        }
    }
}

/// Check if the terminal is likely to render Unicode chess pieces
pub fn supports_unicode() -> bool {
    // Simple heuristic: check if TERM contains "xterm" or if we're in a modern terminal
    std::env::var("TERM")
        .map(|term| {
            term.contains("xterm")
                || term.contains("screen")
                || term.contains("tmux")
                || term == "alacritty"
                || term == "kitty"
        })
        .unwrap_or(false)
        || std::env::var("TERM_PROGRAM").is_ok() // macOS Terminal, iTerm2, etc.
}
