//! Check detection.
//!
//! Attack scanning reuses the pseudo-legal generator with rights absent.
//! Castling can never deliver check, and generating it here would re-enter
//! `is_checked` for the same king through the castling safety test.

use crate::game_state::board::{Board, Piece};
use crate::game_state::chess_types::{Color, Square};
use crate::moves::raw_moves::raw_moves;

/// Whether `color`'s king is attacked. A board with no such king reports
/// `false`.
pub fn is_checked(color: Color, board: &Board) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    !attackers_to_square(board, king_sq, color.opposite()).is_empty()
}

/// Pieces of `attacker_color` whose pseudo-legal destinations include
/// `square`. Meant for occupied squares: pawn pushes onto an empty square
/// would otherwise count.
pub fn attackers_to_square(board: &Board, square: Square, attacker_color: Color) -> Vec<Piece> {
    board
        .pieces(attacker_color)
        .iter()
        .filter(|piece| raw_moves(attacker_color, board, **piece, None).contains(&square))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{attackers_to_square, is_checked};
    use crate::game_state::board::{Board, Piece};
    use crate::game_state::chess_types::{Color, PieceKind, Square};

    fn kings() -> Board {
        Board::from_pieces(
            vec![Piece::new(Square::new(5, 8), PieceKind::King)],
            vec![Piece::new(Square::new(5, 1), PieceKind::King)],
        )
    }

    #[test]
    fn starting_position_has_no_checks() {
        let board = Board::starting_position();
        assert!(!is_checked(Color::Light, &board));
        assert!(!is_checked(Color::Dark, &board));
    }

    #[test]
    fn knight_check_ignores_blockers() {
        let mut board = Board::starting_position();
        board.place(Color::Dark, Piece::new(Square::new(4, 6), PieceKind::Knight));
        assert!(is_checked(Color::Light, &board));
    }

    #[test]
    fn pawn_attacks_diagonally_not_forward() {
        let mut board = kings();
        board.place(Color::Dark, Piece::new(Square::new(5, 7), PieceKind::Pawn));
        assert!(!is_checked(Color::Light, &board));

        board.place(Color::Dark, Piece::new(Square::new(4, 7), PieceKind::Pawn));
        assert!(is_checked(Color::Light, &board));
    }

    #[test]
    fn slider_check_is_blocked_by_any_piece() {
        let mut board = kings();
        board.place(Color::Dark, Piece::new(Square::new(1, 4), PieceKind::Bishop));
        assert!(is_checked(Color::Light, &board));

        board.place(Color::Light, Piece::new(Square::new(3, 6), PieceKind::Pawn));
        assert!(!is_checked(Color::Light, &board));
    }

    #[test]
    fn double_check_lists_both_attackers() {
        let mut board = kings();
        board.place(Color::Dark, Piece::new(Square::new(5, 4), PieceKind::Rook));
        board.place(Color::Dark, Piece::new(Square::new(6, 6), PieceKind::Knight));
        let attackers = attackers_to_square(&board, Square::new(5, 8), Color::Dark);
        assert_eq!(attackers.len(), 2);
    }

    #[test]
    fn missing_king_is_never_checked() {
        let board = Board::from_pieces(
            Vec::new(),
            vec![Piece::new(Square::new(5, 1), PieceKind::Queen)],
        );
        assert!(!is_checked(Color::Light, &board));
    }
}
