//! Flat move logs and replay.
//!
//! A log is the ordered, space-separated list of encoded moves used for
//! saved games and for resynchronizing a reconnecting peer. Replay always
//! starts from the initial position and validates every move, so a corrupt
//! or hostile log fails at the first bad ply instead of producing a wrong
//! position.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::GameState;
use crate::utils::notation::NotatedMove;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    moves: Vec<NotatedMove>,
}

impl MoveLog {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn moves(&self) -> &[NotatedMove] {
        &self.moves
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn push(&mut self, mv: NotatedMove) {
        self.moves.push(mv);
    }

    /// Validate `mv` against `state`, record it, and return the next state.
    /// Nothing is recorded when the move is rejected.
    pub fn play(&mut self, state: &GameState, mv: NotatedMove) -> Result<GameState, ChessErrors> {
        let next = state.try_make_move(mv.from, mv.to, mv.promotion)?;
        self.moves.push(mv);
        Ok(next)
    }

    /// Drop the last `count` moves. A log shorter than `count` is left as is.
    pub fn undo(&mut self, count: usize) {
        if self.moves.len() >= count {
            self.moves.truncate(self.moves.len() - count);
        }
    }

    /// Rebuild the position this log leads to.
    pub fn replay(&self) -> Result<GameState, ChessErrors> {
        replay(&self.moves)
    }
}

/// Apply `moves` in order from the initial position, validating each one.
pub fn replay(moves: &[NotatedMove]) -> Result<GameState, ChessErrors> {
    let mut state = GameState::new_game();

    for (ply, mv) in moves.iter().enumerate() {
        state = state
            .try_make_move(mv.from, mv.to, mv.promotion)
            .map_err(|source| {
                log::warn!("replay rejected ply {ply} ({mv}): {source}");
                ChessErrors::ReplayFailed {
                    ply,
                    notation: mv.to_string(),
                    source: Box::new(source),
                }
            })?;
        log::debug!("replayed ply {ply}: {mv}");
    }

    Ok(state)
}

impl fmt::Display for MoveLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, mv) in self.moves.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

impl FromStr for MoveLog {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let moves = s
            .split_whitespace()
            .map(str::parse::<NotatedMove>)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { moves })
    }
}
