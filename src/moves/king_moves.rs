//! King destination generation, including castling candidates.
//!
//! A castling candidate is offered only with rights present, the matching
//! right set, the king on its home square and not in check, the squares
//! between king and rook empty, and the square the king passes through not
//! attacked. The landing square is checked later by the legality filter like
//! any other destination.

use crate::game_state::chess_rules::{castle_king_target, home_rank, king_home};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastleSide, Color, Rights, Square};
use crate::move_generation::legal_move_checks::is_checked;

pub const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
];

pub fn generate_king_moves(
    color: Color,
    board: &Board,
    from: Square,
    rights: Option<&Rights>,
    out: &mut Vec<Square>,
) {
    if let Some(rights) = rights {
        generate_castling_moves(color, board, from, rights, out);
    }

    for (file_step, rank_step) in KING_STEPS {
        out.push(from.offset(file_step, rank_step));
    }
}

fn generate_castling_moves(color: Color, board: &Board, from: Square, rights: &Rights, out: &mut Vec<Square>) {
    let available: Vec<CastleSide> = [CastleSide::Queenside, CastleSide::Kingside]
        .into_iter()
        .filter(|castle_side| rights.can_castle(color, *castle_side))
        .collect();
    if available.is_empty() || from != king_home(color) {
        return;
    }

    // Cannot castle out of check.
    if is_checked(color, board) {
        return;
    }

    let rank = home_rank(color);
    for castle_side in available {
        let (between, passing): (&[i8], i8) = match castle_side {
            CastleSide::Queenside => (&[2, 3, 4], 4),
            CastleSide::Kingside => (&[6, 7], 6),
        };
        let between: Vec<Square> = between.iter().map(|file| Square::new(*file, rank)).collect();
        if !board.is_empty(&between) {
            continue;
        }

        if passes_safely(color, board, from, Square::new(passing, rank)) {
            out.push(castle_king_target(color, castle_side));
        }
    }
}

fn passes_safely(color: Color, board: &Board, from: Square, through: Square) -> bool {
    let mut probe = board.clone();
    probe.relocate(color, from, through);
    !is_checked(color, &probe)
}
