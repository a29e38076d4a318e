use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::raw_moves::push_ray;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn generate_bishop_moves(board: &Board, from: Square, out: &mut Vec<Square>) {
    for (file_step, rank_step) in BISHOP_DIRECTIONS {
        push_ray(board, from, file_step, rank_step, out);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Square;

    #[test]
    fn bishop_on_open_board_sees_thirteen_squares() {
        let mut out = Vec::new();
        generate_bishop_moves(&Board::new_empty(), Square::new(4, 5), &mut out);
        assert_eq!(out.len(), 13);
    }

    #[test]
    fn boxed_in_bishop_sees_only_its_blockers() {
        let mut out = Vec::new();
        generate_bishop_moves(&Board::starting_position(), Square::new(3, 8), &mut out);
        assert_eq!(out, vec![Square::new(4, 7), Square::new(2, 7)]);
    }
}
