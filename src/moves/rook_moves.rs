//! Rook destination generation: four orthogonal rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::raw_moves::push_ray;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub fn generate_rook_moves(board: &Board, from: Square, out: &mut Vec<Square>) {
    for (file_step, rank_step) in ROOK_DIRECTIONS {
        push_ray(board, from, file_step, rank_step, out);
    }
}
