//! Game state: side to move, board and rights.
//!
//! `GameState` is never mutated in place by the engine. Every transition
//! returns a new value built from a cloned board, so a snapshot can be handed
//! to another thread or kept for replay without aliasing concerns.

use std::collections::HashSet;
use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::board::{Board, Piece};
use crate::game_state::chess_rules::{
    home_rank, king_home, pawn_direction, pawn_start_rank, promotion_rank, rook_home,
    STARTING_POSITION_FEN,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_checks::is_checked;
use crate::move_generation::legal_move_filter::{available_moves, is_valid_move, validate_move};
use crate::move_generation::legal_move_generator::{is_end, legal_moves};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub side_to_move: Color,
    pub board: Board,
    pub rights: Rights,
}

impl GameState {
    /// Standard initial position, Light to move, every castle available.
    pub fn new_game() -> Self {
        Self {
            side_to_move: Color::Light,
            board: Board::starting_position(),
            rights: Rights::initial(),
        }
    }

    /// Build a state from externally supplied parts, rejecting positions that
    /// cannot arise in play.
    pub fn from_parts(side_to_move: Color, board: Board, rights: Rights) -> Result<Self, ChessErrors> {
        let state = Self {
            side_to_move,
            board,
            rights,
        };
        state.validate()?;
        Ok(state)
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// FEN of the standard start, for callers that seed from text.
    #[inline]
    pub fn starting_fen() -> &'static str {
        STARTING_POSITION_FEN
    }

    /// Legal destinations of the side-to-move piece on `from`; empty when
    /// there is no such piece.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        match self.board.piece_at(self.side_to_move, from) {
            Some(kind) => available_moves(
                self.side_to_move,
                &self.board,
                Piece::new(from, kind),
                &self.rights,
            ),
            None => Vec::new(),
        }
    }

    pub fn legal_moves(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        legal_moves(self.side_to_move, &self.board, &self.rights)
    }

    #[inline]
    pub fn is_valid_move(&self, from: Square, to: Square) -> bool {
        is_valid_move(self.side_to_move, &self.board, &self.rights, from, to)
    }

    /// Apply a move already known to be legal.
    #[inline]
    pub fn make_move(&self, from: Square, to: Square, promotion: Option<Promotion>) -> GameState {
        make_move(
            self.side_to_move,
            &self.board,
            from,
            to,
            &self.rights,
            promotion,
        )
    }

    /// Validate then apply a move from an untrusted source.
    ///
    /// A promotion piece on a move that does not promote is rejected as
    /// illegal.
    pub fn try_make_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<Promotion>,
    ) -> Result<GameState, ChessErrors> {
        validate_move(self.side_to_move, &self.board, &self.rights, from, to)?;

        if promotion.is_some() && !self.is_promotion(from, to) {
            return Err(ChessErrors::IllegalMove { from, to });
        }

        Ok(self.make_move(from, to, promotion))
    }

    /// Whether `from -> to` would move a pawn onto its farthest rank.
    pub fn is_promotion(&self, from: Square, to: Square) -> bool {
        self.board.piece_at(self.side_to_move, from) == Some(PieceKind::Pawn)
            && to.rank == promotion_rank(self.side_to_move)
    }

    /// Side to move has no legal move.
    #[inline]
    pub fn is_end(&self) -> bool {
        is_end(self.side_to_move, &self.board, &self.rights)
    }

    /// Side to move is in check.
    #[inline]
    pub fn is_checked(&self) -> bool {
        is_checked(self.side_to_move, &self.board)
    }

    /// Reject positions that normal play cannot produce.
    ///
    /// Castling rights are recomputed positionally, so a right paired with a
    /// king or rook off its home square would be honored; that is one of the
    /// conditions checked here.
    pub fn validate(&self) -> Result<(), ChessErrors> {
        self.validate_inner().map_err(|msg| {
            log::warn!("rejecting position: {msg}");
            ChessErrors::InvalidPosition(msg)
        })
    }

    fn validate_inner(&self) -> Result<(), String> {
        let mut seen = HashSet::new();

        for color in [Color::Light, Color::Dark] {
            let pieces = self.board.pieces(color);
            if pieces.len() > 16 {
                return Err(format!("{color:?} has {} pieces", pieces.len()));
            }

            let kings = pieces.iter().filter(|p| p.kind == PieceKind::King).count();
            if kings != 1 {
                return Err(format!("{color:?} has {kings} kings"));
            }

            for piece in pieces {
                if !piece.square.is_on_board() {
                    return Err(format!("{color:?} piece off the board at {}", piece.square));
                }
                if !seen.insert(piece.square) {
                    return Err(format!("square {} is occupied twice", piece.square));
                }
                if piece.kind == PieceKind::Pawn
                    && (piece.square.rank == home_rank(Color::Light)
                        || piece.square.rank == home_rank(Color::Dark))
                {
                    return Err(format!("{color:?} pawn on back rank at {}", piece.square));
                }
            }

            for castle_side in [CastleSide::Kingside, CastleSide::Queenside] {
                if self.rights.can_castle(color, castle_side)
                    && (self.board.piece_at(color, king_home(color)) != Some(PieceKind::King)
                        || self.board.piece_at(color, rook_home(color, castle_side))
                            != Some(PieceKind::Rook))
                {
                    return Err(format!(
                        "{color:?} {castle_side:?} castling right without king and rook at home"
                    ));
                }
            }
        }

        if let Some(target) = self.rights.en_passant {
            let mover = self.side_to_move.opposite();
            let dir = pawn_direction(mover);
            let expected_rank = pawn_start_rank(mover) + dir;
            let pushed = target.offset(0, dir);
            let origin = target.offset(0, -dir);

            if !target.is_on_board()
                || target.rank != expected_rank
                || self.board.piece_at(mover, pushed) != Some(PieceKind::Pawn)
                || !self.board.is_empty(&[target, origin])
            {
                return Err(format!("en-passant target {target} does not follow a double push"));
            }
        }

        if is_checked(self.side_to_move.opposite(), &self.board) {
            return Err("side not to move is in check".to_owned());
        }

        Ok(())
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(file: i8, rank: i8) -> Square {
        Square::new(file, rank)
    }

    #[test]
    fn new_game_is_valid_and_light_to_move() {
        let game = GameState::new_game();
        assert_eq!(game.side_to_move, Color::Light);
        assert_eq!(game.rights, Rights::initial());
        assert!(game.validate().is_ok());
        assert_eq!(GameState::from_fen(GameState::starting_fen()), Ok(game));
    }

    #[test]
    fn legal_destinations_for_selected_piece() {
        let game = GameState::new_game();
        assert_eq!(game.legal_destinations(sq(5, 7)), vec![sq(5, 5), sq(5, 6)]);
        assert!(game.legal_destinations(sq(5, 2)).is_empty());
        assert!(game.legal_destinations(sq(5, 5)).is_empty());
    }

    #[test]
    fn make_move_leaves_original_untouched() {
        let game = GameState::new_game();
        let next = game.make_move(sq(5, 7), sq(5, 5), None);
        assert_eq!(game, GameState::new_game());
        assert_eq!(next.side_to_move, Color::Dark);
        assert_eq!(next.rights.en_passant, Some(sq(5, 6)));
    }

    #[test]
    fn try_make_move_rejects_illegal_and_stray_promotion() {
        let game = GameState::new_game();
        assert!(matches!(
            game.try_make_move(sq(5, 7), sq(5, 4), None),
            Err(ChessErrors::IllegalMove { .. })
        ));
        assert!(matches!(
            game.try_make_move(sq(5, 7), sq(5, 5), Some(Promotion::Queen)),
            Err(ChessErrors::IllegalMove { .. })
        ));
        assert!(game.try_make_move(sq(5, 7), sq(5, 5), None).is_ok());
    }

    #[test]
    fn validate_rejects_unreachable_positions() {
        let kings = || {
            Board::from_pieces(
                vec![Piece::new(sq(5, 8), PieceKind::King)],
                vec![Piece::new(sq(5, 1), PieceKind::King)],
            )
        };

        // Castling right with no rook at home.
        let stray_right = GameState::from_parts(Color::Light, kings(), Rights::initial());
        assert!(matches!(stray_right, Err(ChessErrors::InvalidPosition(_))));

        // Two Light kings.
        let mut two_kings = kings();
        two_kings.place(Color::Light, Piece::new(sq(1, 8), PieceKind::King));
        assert!(GameState::from_parts(Color::Light, two_kings, Rights::default()).is_err());

        // Doubly occupied square.
        let mut stacked = kings();
        stacked.place(Color::Dark, Piece::new(sq(5, 8), PieceKind::Knight));
        assert!(GameState::from_parts(Color::Dark, stacked, Rights::default()).is_err());

        // Pawn on a back rank.
        let mut back_pawn = kings();
        back_pawn.place(Color::Light, Piece::new(sq(1, 1), PieceKind::Pawn));
        assert!(GameState::from_parts(Color::Light, back_pawn, Rights::default()).is_err());

        // Side not to move in check.
        let mut hanging = kings();
        hanging.place(Color::Light, Piece::new(sq(5, 4), PieceKind::Rook));
        assert!(GameState::from_parts(Color::Light, hanging.clone(), Rights::default()).is_err());
        assert!(GameState::from_parts(Color::Dark, hanging, Rights::default()).is_ok());
    }

    #[test]
    fn validate_checks_en_passant_target() {
        let after_double_push = GameState::new_game().make_move(sq(5, 7), sq(5, 5), None);
        assert!(after_double_push.validate().is_ok());

        let mut wrong_rank = after_double_push.clone();
        wrong_rank.rights.en_passant = Some(sq(5, 5));
        assert!(wrong_rank.validate().is_err());

        let mut no_pawn = after_double_push.clone();
        no_pawn.rights.en_passant = Some(sq(4, 6));
        assert!(no_pawn.validate().is_err());
    }
}
