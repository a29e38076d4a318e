//! Piece-list board model.
//!
//! A `Board` is two unordered collections of pieces, one per side. Lookups
//! are linear scans; with at most sixteen pieces a side no spatial index is
//! needed. Every hypothetical move is tested on a clone, so the type is a
//! plain value with no shared interior.

use crate::game_state::chess_rules::{home_rank, pawn_start_rank, BACK_RANK};
use crate::game_state::chess_types::{Color, PieceKind, Square};

/// A piece is identified only by where it stands and what it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub square: Square,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(square: Square, kind: PieceKind) -> Self {
        Self { square, kind }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Board {
    // [color] -> pieces of that side, unordered
    pieces: [Vec<Piece>; 2],
}

// Collections are unordered, so equality ignores insertion order.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.pieces.iter().zip(other.pieces.iter()).all(|(ours, theirs)| {
            ours.len() == theirs.len() && ours.iter().all(|piece| theirs.contains(piece))
        })
    }
}

impl Eq for Board {}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard initial layout.
    pub fn starting_position() -> Self {
        let mut board = Self::new_empty();
        for color in [Color::Light, Color::Dark] {
            for file in 1..=8i8 {
                board.place(color, Piece::new(Square::new(file, pawn_start_rank(color)), PieceKind::Pawn));
            }
            for (idx, kind) in BACK_RANK.iter().enumerate() {
                let square = Square::new(idx as i8 + 1, home_rank(color));
                board.place(color, Piece::new(square, *kind));
            }
        }
        board
    }

    /// Build a board from explicit piece lists. No legality checks are made
    /// here; see `GameState::validate`.
    pub fn from_pieces(light: Vec<Piece>, dark: Vec<Piece>) -> Self {
        Self {
            pieces: [light, dark],
        }
    }

    #[inline]
    pub fn pieces(&self, color: Color) -> &[Piece] {
        &self.pieces[color.index()]
    }

    #[inline]
    pub fn piece_at(&self, color: Color, square: Square) -> Option<PieceKind> {
        self.pieces[color.index()]
            .iter()
            .find(|piece| piece.square == square)
            .map(|piece| piece.kind)
    }

    /// Piece on `square` for either side.
    pub fn piece_on_square_any(&self, square: Square) -> Option<(Color, PieceKind)> {
        [Color::Light, Color::Dark]
            .into_iter()
            .find_map(|color| self.piece_at(color, square).map(|kind| (color, kind)))
    }

    #[inline]
    pub fn is_occupied(&self, color: Color, square: Square) -> bool {
        self.piece_at(color, square).is_some()
    }

    /// True when none of `squares` holds a piece of either side.
    pub fn is_empty(&self, squares: &[Square]) -> bool {
        squares.iter().all(|square| {
            !self.is_occupied(Color::Light, *square) && !self.is_occupied(Color::Dark, *square)
        })
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces[color.index()]
            .iter()
            .find(|piece| piece.kind == PieceKind::King)
            .map(|piece| piece.square)
    }

    pub fn place(&mut self, color: Color, piece: Piece) {
        self.pieces[color.index()].push(piece);
    }

    pub fn remove(&mut self, color: Color, square: Square) -> Option<Piece> {
        let pieces = &mut self.pieces[color.index()];
        let idx = pieces.iter().position(|piece| piece.square == square)?;
        Some(pieces.swap_remove(idx))
    }

    /// Move `color`'s piece on `from` to `to`. Returns the relocated kind, or
    /// `None` when `from` is empty for that side.
    pub fn relocate(&mut self, color: Color, from: Square, to: Square) -> Option<PieceKind> {
        let piece = self.pieces[color.index()]
            .iter_mut()
            .find(|piece| piece.square == from)?;
        piece.square = to;
        Some(piece.kind)
    }

    /// Change the kind of `color`'s piece on `square` in place.
    pub fn set_kind(&mut self, color: Color, square: Square, kind: PieceKind) -> bool {
        match self.pieces[color.index()]
            .iter_mut()
            .find(|piece| piece.square == square)
        {
            Some(piece) => {
                piece.kind = kind;
                true
            }
            None => false,
        }
    }
}
