//! Whole-side legal move enumeration and the terminal test.
//!
//! `legal_moves` is lazy over the side's pieces, so `is_end` stops at the
//! first legal move it finds. The engine does not label terminal positions:
//! checkmate is `is_end && is_checked`, stalemate is `is_end && !is_checked`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Rights, Square};
use crate::move_generation::legal_move_filter::available_moves;

/// Every legal `(origin, destination)` pair for `color`. Finite; call again
/// to restart.
pub fn legal_moves<'a>(
    color: Color,
    board: &'a Board,
    rights: &'a Rights,
) -> impl Iterator<Item = (Square, Square)> + 'a {
    board.pieces(color).iter().flat_map(move |piece| {
        available_moves(color, board, *piece, rights)
            .into_iter()
            .map(move |to| (piece.square, to))
    })
}

/// True when `color` has no legal move.
pub fn is_end(color: Color, board: &Board, rights: &Rights) -> bool {
    legal_moves(color, board, rights).next().is_none()
}

#[cfg(test)]
mod tests {
    use super::{is_end, legal_moves};
    use crate::game_state::board::{Board, Piece};
    use crate::game_state::chess_types::{Color, PieceKind, Rights, Square};
    use crate::move_generation::legal_move_checks::is_checked;

    #[test]
    fn twenty_moves_from_the_start() {
        let board = Board::starting_position();
        let rights = Rights::initial();
        assert_eq!(legal_moves(Color::Light, &board, &rights).count(), 20);
        assert_eq!(legal_moves(Color::Dark, &board, &rights).count(), 20);
        assert!(!is_end(Color::Light, &board, &rights));
    }

    #[test]
    fn enumeration_is_restartable() {
        let board = Board::starting_position();
        let rights = Rights::initial();
        let first: Vec<_> = legal_moves(Color::Light, &board, &rights).collect();
        let second: Vec<_> = legal_moves(Color::Light, &board, &rights).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn boxed_king_is_stalemated() {
        // Light king a1, Dark queen b3, Dark king c2 in chess coordinates.
        let board = Board::from_pieces(
            vec![Piece::new(Square::new(1, 8), PieceKind::King)],
            vec![
                Piece::new(Square::new(2, 6), PieceKind::Queen),
                Piece::new(Square::new(3, 7), PieceKind::King),
            ],
        );
        let rights = Rights::default();
        assert!(is_end(Color::Light, &board, &rights));
        assert!(!is_checked(Color::Light, &board));
    }

    #[test]
    fn back_rank_mate_is_terminal_and_checked() {
        let board = Board::from_pieces(
            vec![
                Piece::new(Square::new(7, 8), PieceKind::King),
                Piece::new(Square::new(6, 7), PieceKind::Pawn),
                Piece::new(Square::new(7, 7), PieceKind::Pawn),
                Piece::new(Square::new(8, 7), PieceKind::Pawn),
            ],
            vec![
                Piece::new(Square::new(5, 1), PieceKind::King),
                Piece::new(Square::new(1, 8), PieceKind::Rook),
            ],
        );
        let rights = Rights::default();
        assert!(is_end(Color::Light, &board, &rights));
        assert!(is_checked(Color::Light, &board));
    }
}
