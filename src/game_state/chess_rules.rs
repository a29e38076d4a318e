//! Canonical chess-rule constants and per-side board geometry.
//!
//! Everything that depends on which side is moving (home ranks, pawn
//! direction, castling corners) is answered here so the generators and the
//! transition never hard-code a rank.

use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank layout from file 1 to file 8.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_HOME_FILE: i8 = 5;

#[inline]
pub const fn home_rank(color: Color) -> i8 {
    match color {
        Color::Light => 8,
        Color::Dark => 1,
    }
}

#[inline]
pub const fn pawn_start_rank(color: Color) -> i8 {
    match color {
        Color::Light => 7,
        Color::Dark => 2,
    }
}

#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::Light => -1,
        Color::Dark => 1,
    }
}

/// The farthest rank for `color`'s pawns.
#[inline]
pub const fn promotion_rank(color: Color) -> i8 {
    match color {
        Color::Light => 1,
        Color::Dark => 8,
    }
}

/// Rank a pawn of `color` must stand on to capture en passant.
#[inline]
pub const fn en_passant_origin_rank(color: Color) -> i8 {
    match color {
        Color::Light => 4,
        Color::Dark => 5,
    }
}

#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::new(KING_HOME_FILE, home_rank(color))
}

#[inline]
pub const fn rook_home(color: Color, castle_side: CastleSide) -> Square {
    match castle_side {
        CastleSide::Kingside => Square::new(8, home_rank(color)),
        CastleSide::Queenside => Square::new(1, home_rank(color)),
    }
}

/// Where the king lands when castling.
#[inline]
pub const fn castle_king_target(color: Color, castle_side: CastleSide) -> Square {
    match castle_side {
        CastleSide::Kingside => Square::new(7, home_rank(color)),
        CastleSide::Queenside => Square::new(3, home_rank(color)),
    }
}

/// Where the rook lands when castling.
#[inline]
pub const fn castle_rook_target(color: Color, castle_side: CastleSide) -> Square {
    match castle_side {
        CastleSide::Kingside => Square::new(6, home_rank(color)),
        CastleSide::Queenside => Square::new(4, home_rank(color)),
    }
}
