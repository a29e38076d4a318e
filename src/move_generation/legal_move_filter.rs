//! Self-check legality filter.
//!
//! Wraps the pseudo-legal generator: a candidate survives when it is on the
//! board, not on a square held by the mover's own side, and does not leave
//! the mover's king attacked once the relocation is simulated on a clone.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::{Board, Piece};
use crate::game_state::chess_types::{Color, Rights, Square};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_checked;
use crate::moves::raw_moves::raw_moves;

/// Legal destinations for `piece`.
pub fn available_moves(color: Color, board: &Board, piece: Piece, rights: &Rights) -> Vec<Square> {
    raw_moves(color, board, piece, Some(rights))
        .into_iter()
        .filter(|to| to.is_on_board() && !board.is_occupied(color, *to))
        .filter(|to| leaves_king_safe(color, board, piece.square, *to))
        .collect()
}

/// Single-move form of the filter, reporting why a move is rejected.
pub fn validate_move(
    color: Color,
    board: &Board,
    rights: &Rights,
    from: Square,
    to: Square,
) -> Result<(), ChessErrors> {
    if !from.is_on_board() {
        return Err(ChessErrors::OutOfBounds(from));
    }
    if !to.is_on_board() {
        return Err(ChessErrors::OutOfBounds(to));
    }

    let kind = board
        .piece_at(color, from)
        .ok_or(ChessErrors::NoPieceAtOrigin(from))?;

    let legal = !board.is_occupied(color, to)
        && raw_moves(color, board, Piece::new(from, kind), Some(rights)).contains(&to)
        && leaves_king_safe(color, board, from, to);

    if legal {
        Ok(())
    } else {
        Err(ChessErrors::IllegalMove { from, to })
    }
}

#[inline]
pub fn is_valid_move(color: Color, board: &Board, rights: &Rights, from: Square, to: Square) -> bool {
    validate_move(color, board, rights, from, to).is_ok()
}

fn leaves_king_safe(color: Color, board: &Board, from: Square, to: Square) -> bool {
    !is_checked(color, &apply_move(color, board, from, to, None))
}
