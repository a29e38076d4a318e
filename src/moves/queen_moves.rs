use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Bishop rays followed by rook rays from the same square.
pub fn generate_queen_moves(board: &Board, from: Square, out: &mut Vec<Square>) {
    generate_bishop_moves(board, from, out);
    generate_rook_moves(board, from, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Square;

    #[test]
    fn centralized_queen_sees_twenty_seven_squares() {
        let mut out = Vec::new();
        generate_queen_moves(&Board::new_empty(), Square::new(4, 5), &mut out);
        assert_eq!(out.len(), 27);
    }
}
