//! Pseudo-legal destination generation.
//!
//! `raw_moves` dispatches on piece kind and returns candidate destinations in
//! a deterministic order. Candidates may be off the board or on a square held
//! by the mover's own side, and may leave the mover's king attacked; the
//! legality filter removes all of those.
//!
//! `rights` selects the calling convention: `Some` for real move enumeration
//! (castling and en passant visible), `None` for attack scanning, where
//! castling is suppressed so check detection never recurses into itself.

use crate::game_state::board::{Board, Piece};
use crate::game_state::chess_types::{Color, PieceKind, Rights, Square};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

pub fn raw_moves(color: Color, board: &Board, piece: Piece, rights: Option<&Rights>) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    let from = piece.square;

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(color, board, from, rights, &mut out),
        PieceKind::Knight => generate_knight_moves(from, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, from, &mut out),
        PieceKind::Rook => generate_rook_moves(board, from, &mut out),
        PieceKind::Queen => generate_queen_moves(board, from, &mut out),
        PieceKind::King => generate_king_moves(color, board, from, rights, &mut out),
    }

    out
}

/// Walk from `from` in one direction, emitting every square up to and
/// including the first occupied one. Stops at the board edge.
pub(crate) fn push_ray(board: &Board, from: Square, file_step: i8, rank_step: i8, out: &mut Vec<Square>) {
    let mut target = from.offset(file_step, rank_step);
    while target.is_on_board() {
        out.push(target);
        if !board.is_empty(&[target]) {
            break;
        }
        target = target.offset(file_step, rank_step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lone_kings() -> Board {
        Board::from_pieces(
            vec![Piece::new(Square::new(5, 8), PieceKind::King)],
            vec![Piece::new(Square::new(5, 1), PieceKind::King)],
        )
    }

    #[test]
    fn rays_stop_on_first_occupied_square() {
        let mut board = lone_kings();
        board.place(Color::Dark, Piece::new(Square::new(4, 3), PieceKind::Pawn));

        let mut out = Vec::new();
        push_ray(&board, Square::new(4, 6), 0, -1, &mut out);
        assert_eq!(out, vec![Square::new(4, 5), Square::new(4, 4), Square::new(4, 3)]);
    }

    #[test]
    fn rays_stop_at_board_edge() {
        let board = lone_kings();
        let mut out = Vec::new();
        push_ray(&board, Square::new(8, 8), 1, 1, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn dispatch_is_deterministic() {
        let board = Board::starting_position();
        let knight = Piece::new(Square::new(2, 8), PieceKind::Knight);
        let first = raw_moves(Color::Light, &board, knight, Some(&Rights::initial()));
        let second = raw_moves(Color::Light, &board, knight, Some(&Rights::initial()));
        assert_eq!(first, second);
        assert_eq!(first.len(), 8);
    }
}
