//! Core value types shared by every layer of the rules engine.
//!
//! Coordinates follow the engine's internal convention: files and ranks run
//! `1..=8`, and internal rank 1 is chess rank 8. Light (side 0) therefore
//! starts on internal ranks 7 and 8 and its pawns advance toward rank 1.

use std::fmt;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

/// Piece kind (color is carried by the collection a piece lives in).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// The pieces a pawn may promote to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Promotion {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl Promotion {
    pub const ALL: [Promotion; 4] = [
        Promotion::Queen,
        Promotion::Rook,
        Promotion::Bishop,
        Promotion::Knight,
    ];

    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            Promotion::Queen => PieceKind::Queen,
            Promotion::Rook => PieceKind::Rook,
            Promotion::Bishop => PieceKind::Bishop,
            Promotion::Knight => PieceKind::Knight,
        }
    }

    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Promotion::Queen => 'q',
            Promotion::Rook => 'r',
            Promotion::Bishop => 'b',
            Promotion::Knight => 'n',
        }
    }

    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'q' => Some(Promotion::Queen),
            'r' => Some(Promotion::Rook),
            'b' => Some(Promotion::Bishop),
            'n' => Some(Promotion::Knight),
            _ => None,
        }
    }
}

/// A board coordinate. Generator candidates may lie off the board, so the
/// components are signed and only meaningful once `is_on_board` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: i8,
    pub rank: i8,
}

impl Square {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.file >= 1 && self.file <= 8 && self.rank >= 1 && self.rank <= 8
    }

    #[inline]
    pub const fn offset(self, file_step: i8, rank_step: i8) -> Self {
        Self {
            file: self.file.saturating_add(file_step),
            rank: self.rank.saturating_add(rank_step),
        }
    }

    /// Every on-board square, file-major within each internal rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=8i8).flat_map(|rank| (1..=8i8).map(move |file| Square::new(file, rank)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = char::from(b'a' + (self.file - 1) as u8);
            write!(f, "{file}{}", 9 - self.rank)
        } else {
            write!(f, "({},{})", self.file, self.rank)
        }
    }
}

/// Which wing a castling move goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// Compact castling rights bitmask: one bit per side/direction boolean.
pub type CastlingRights = u8;

pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE | CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE;

#[inline]
pub const fn castle_flag(color: Color, castle_side: CastleSide) -> CastlingRights {
    match (color, castle_side) {
        (Color::Light, CastleSide::Kingside) => CASTLE_LIGHT_KINGSIDE,
        (Color::Light, CastleSide::Queenside) => CASTLE_LIGHT_QUEENSIDE,
        (Color::Dark, CastleSide::Kingside) => CASTLE_DARK_KINGSIDE,
        (Color::Dark, CastleSide::Queenside) => CASTLE_DARK_QUEENSIDE,
    }
}

/// Castling booleans plus the single-use en-passant target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rights {
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
}

impl Rights {
    /// Rights at the start of a game: every castle available, no en passant.
    #[inline]
    pub const fn initial() -> Self {
        Self {
            castling: CASTLE_ALL,
            en_passant: None,
        }
    }

    #[inline]
    pub const fn can_castle(&self, color: Color, castle_side: CastleSide) -> bool {
        self.castling & castle_flag(color, castle_side) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_display_in_chess_coordinates() {
        assert_eq!(Square::new(1, 8).to_string(), "a1");
        assert_eq!(Square::new(8, 1).to_string(), "h8");
        assert_eq!(Square::new(5, 7).to_string(), "e2");
        assert_eq!(Square::new(9, 1).to_string(), "(9,1)");
    }

    #[test]
    fn all_squares_covers_board_once() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert!(squares.iter().all(|sq| sq.is_on_board()));
    }

    #[test]
    fn initial_rights_allow_every_castle() {
        let rights = Rights::initial();
        for color in [Color::Light, Color::Dark] {
            assert!(rights.can_castle(color, CastleSide::Kingside));
            assert!(rights.can_castle(color, CastleSide::Queenside));
        }
        assert!(!Rights::default().can_castle(Color::Light, CastleSide::Kingside));
    }

    #[test]
    fn promotion_chars_map_both_ways() {
        for promotion in Promotion::ALL {
            assert_eq!(Promotion::from_char(promotion.to_char()), Some(promotion));
        }
        assert_eq!(Promotion::from_char('k'), None);
        assert_eq!(Promotion::from_char('Q'), None);
    }
}
