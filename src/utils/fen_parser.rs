//! FEN-to-GameState parser.
//!
//! Accepts the four position fields (placement, side, castling, en passant)
//! optionally followed by the two clock fields, which are checked for shape
//! and otherwise ignored since the engine keeps no clocks. The parsed
//! position is validated before it is returned.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::{Board, Piece};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::notation::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 4 && fields.len() != 6 {
        return Err(invalid(format!(
            "expected 4 or 6 fields, found {}",
            fields.len()
        )));
    }

    let board = parse_board(fields[0])?;
    let side_to_move = parse_side_to_move(fields[1])?;
    let castling = parse_castling_rights(fields[2])?;
    let en_passant = parse_en_passant_square(fields[3])?;

    for clock in fields.iter().skip(4) {
        clock
            .parse::<u16>()
            .map_err(|_| invalid(format!("invalid clock field: {clock}")))?;
    }

    GameState::from_parts(
        side_to_move,
        board,
        Rights {
            castling,
            en_passant,
        },
    )
}

fn invalid(msg: String) -> ChessErrors {
    ChessErrors::InvalidFen(msg)
}

fn parse_board(board_part: &str) -> Result<Board, ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks".to_owned()));
    }

    let mut board = Board::new_empty();

    // FEN lists chess rank 8 first, which is internal rank 1.
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = fen_rank_idx as i8 + 1;
        let mut file_idx = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                file_idx += empty_count as usize;
                if file_idx > 8 {
                    return Err(invalid("board rank has too many files".to_owned()));
                }
                continue;
            }

            let (color, piece) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}' in board layout")))?;

            if file_idx >= 8 {
                return Err(invalid("board rank has too many files".to_owned()));
            }

            board.place(color, Piece::new(Square::new(file_idx as i8 + 1, rank), piece));
            file_idx += 1;
        }

        if file_idx != 8 {
            return Err(invalid("board rank does not sum to 8 files".to_owned()));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(invalid(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessErrors> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => return Err(invalid(format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| invalid(format!("invalid en-passant square: {en_passant_part}")))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, piece))
}
