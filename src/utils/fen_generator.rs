//! GameState-to-FEN serializer.
//!
//! Emits the four position fields only; the engine keeps no move clocks.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

const CASTLING_SYMBOLS: [(CastlingRights, char); 4] = [
    (CASTLE_LIGHT_KINGSIDE, 'K'),
    (CASTLE_LIGHT_QUEENSIDE, 'Q'),
    (CASTLE_DARK_KINGSIDE, 'k'),
    (CASTLE_DARK_QUEENSIDE, 'q'),
];

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(&game_state.board);
    let side_to_move = match game_state.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let castling = generate_castling_field(game_state.rights.castling);
    let en_passant = game_state
        .rights
        .en_passant
        .filter(|sq| sq.is_on_board())
        .map_or_else(|| "-".to_owned(), |sq| sq.to_string());

    format!("{board} {side_to_move} {castling} {en_passant}")
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in 1..=8i8 {
        let mut empty_count = 0u8;

        for file in 1..=8i8 {
            match board.piece_on_square_any(Square::new(file, rank)) {
                Some((color, piece)) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(color, piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank < 8 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(color: Color, piece: PieceKind) -> char {
    let symbol = match piece {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    if color == Color::Light {
        symbol.to_ascii_uppercase()
    } else {
        symbol
    }
}

fn generate_castling_field(castling_rights: CastlingRights) -> String {
    let field: String = CASTLING_SYMBOLS
        .iter()
        .filter(|(flag, _)| castling_rights & flag != 0)
        .map(|(_, symbol)| *symbol)
        .collect();

    if field.is_empty() {
        "-".to_owned()
    } else {
        field
    }
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_types::Square;
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_position_fen() {
        assert_eq!(
            generate_fen(&GameState::new_game()),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"
        );
    }

    #[test]
    fn fen_after_double_push_carries_target() {
        let game = GameState::new_game().make_move(Square::new(5, 7), Square::new(5, 5), None);
        assert_eq!(
            game.get_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3"
        );
    }

    #[test]
    fn generated_fen_parses_back() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -";
        let game = GameState::from_fen(fen).expect("FEN should parse");
        assert_eq!(game.get_fen(), fen);
    }
}
