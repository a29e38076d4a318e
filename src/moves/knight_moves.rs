use crate::game_state::chess_types::Square;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// All eight jumps, unfiltered. Bounds and occupancy are the filter's job.
pub fn generate_knight_moves(from: Square, out: &mut Vec<Square>) {
    for (file_step, rank_step) in KNIGHT_OFFSETS {
        out.push(from.offset(file_step, rank_step));
    }
}
