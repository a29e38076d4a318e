//! Terminal-oriented Unicode board renderer.
//!
//! Chess rank 8 is printed first, which is internal rank 1.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in 1..=8i8 {
        let label = char::from(b'0' + (9 - rank) as u8);
        out.push(label);
        out.push(' ');

        for file in 1..=8i8 {
            match game_state.board.piece_on_square_any(Square::new(file, rank)) {
                Some((color, piece)) => out.push(piece_to_unicode(color, piece)),
                None => out.push('·'),
            }

            if file < 8 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    let (light, dark) = match piece {
        PieceKind::Pawn => ('♙', '♟'),
        PieceKind::Knight => ('♘', '♞'),
        PieceKind::Bishop => ('♗', '♝'),
        PieceKind::Rook => ('♖', '♜'),
        PieceKind::Queen => ('♕', '♛'),
        PieceKind::King => ('♔', '♚'),
    };
    match color {
        Color::Light => light,
        Color::Dark => dark,
    }
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_renders_dark_on_top() {
        let rendered = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[4], "5 · · · · · · · · 5");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }
}
