//! State transition: board relocation, rights recomputation, `make_move`.
//!
//! `apply_move` trusts its caller. Destinations must come from the generator
//! or legality filter for the current rights; castling and en passant are
//! recognized purely by geometry and are not re-validated here.

use crate::game_state::chess_rules::{
    castle_rook_target, en_passant_origin_rank, king_home, promotion_rank, rook_home,
};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Apply `from -> to` for `color` on a clone of `board`.
///
/// Handles ordinary captures, the rook half of castling, promotion
/// (`None` promotes to a queen) and the en-passant capture.
pub fn apply_move(
    color: Color,
    board: &Board,
    from: Square,
    to: Square,
    promotion: Option<Promotion>,
) -> Board {
    let enemy = color.opposite();
    let en_passant_shape =
        from.rank == en_passant_origin_rank(color) && to.file != from.file && board.is_empty(&[to]);

    let mut next = board.clone();
    next.remove(enemy, to);

    let Some(moved_piece) = next.relocate(color, from, to) else {
        return next;
    };

    match moved_piece {
        PieceKind::King if (to.file - from.file).abs() == 2 => {
            let castle_side = if to.file > from.file {
                CastleSide::Kingside
            } else {
                CastleSide::Queenside
            };
            let rook_from = Square::new(rook_home(color, castle_side).file, from.rank);
            let rook_to = Square::new(castle_rook_target(color, castle_side).file, from.rank);
            next.relocate(color, rook_from, rook_to);
        }
        PieceKind::Pawn => {
            if to.rank == promotion_rank(color) {
                let kind = promotion.unwrap_or(Promotion::Queen).kind();
                next.set_kind(color, to, kind);
            }
            if en_passant_shape {
                let captured = Square::new(to.file, from.rank);
                if next.piece_at(enemy, captured) == Some(PieceKind::Pawn) {
                    next.remove(enemy, captured);
                }
            }
        }
        _ => {}
    }

    next
}

/// Recompute rights after `color` played `from -> to`.
///
/// A castling right survives only while the king and that rook still stand
/// on their home squares; a cleared right is never restored. The en-passant
/// target is set only by a two-rank pawn advance.
pub fn update_flags(color: Color, board: &Board, from: Square, to: Square, old_rights: &Rights) -> Rights {
    let mut castling = old_rights.castling;

    for side in [Color::Light, Color::Dark] {
        let king_home_intact = board.piece_at(side, king_home(side)) == Some(PieceKind::King);
        for castle_side in [CastleSide::Kingside, CastleSide::Queenside] {
            let rook_home_intact =
                board.piece_at(side, rook_home(side, castle_side)) == Some(PieceKind::Rook);
            if !(king_home_intact && rook_home_intact) {
                castling &= !castle_flag(side, castle_side);
            }
        }
    }

    let en_passant = if board.piece_at(color, to) == Some(PieceKind::Pawn)
        && (from.rank - to.rank).abs() == 2
    {
        Some(Square::new(to.file, (from.rank + to.rank) / 2))
    } else {
        None
    };

    Rights {
        castling,
        en_passant,
    }
}

/// Apply a move, recompute rights and hand the turn over. Always returns a
/// fresh `GameState`; the inputs are untouched.
pub fn make_move(
    color: Color,
    board: &Board,
    from: Square,
    to: Square,
    rights: &Rights,
    promotion: Option<Promotion>,
) -> GameState {
    let next_board = apply_move(color, board, from, to, promotion);
    let next_rights = update_flags(color, &next_board, from, to, rights);

    GameState {
        side_to_move: color.opposite(),
        board: next_board,
        rights: next_rights,
    }
}
