//! Pawn destination generation.
//!
//! Pushes are emitted only onto empty squares (double push first, then the
//! single push), followed by the two diagonals when they hold an enemy piece
//! or equal the en-passant target.

use crate::game_state::chess_rules::{pawn_direction, pawn_start_rank};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Rights, Square};

pub fn generate_pawn_moves(
    color: Color,
    board: &Board,
    from: Square,
    rights: Option<&Rights>,
    out: &mut Vec<Square>,
) {
    let dir = pawn_direction(color);
    let one_step = from.offset(0, dir);

    if from.rank == pawn_start_rank(color) {
        let two_step = from.offset(0, 2 * dir);
        if board.is_empty(&[one_step, two_step]) {
            out.push(two_step);
        }
    }
    if one_step.is_on_board() && board.is_empty(&[one_step]) {
        out.push(one_step);
    }

    let en_passant = rights.and_then(|rights| rights.en_passant);
    for file_step in [1, -1] {
        let diagonal = from.offset(file_step, dir);
        if board.is_occupied(color.opposite(), diagonal) || en_passant == Some(diagonal) {
            out.push(diagonal);
        }
    }
}
