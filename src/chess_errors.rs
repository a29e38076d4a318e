//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type of the crate. Move validation,
//! notation decoding, position import and replay all report through it, so
//! an interactive caller can match on the variant to re-prompt a user or
//! reject a network message without tearing the session down. Nothing in the
//! engine treats these as fatal.

use thiserror::Error;

use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A square outside the 8x8 grid was used as an origin or destination.
    #[error("square {0} is outside the board")]
    OutOfBounds(Square),

    /// The acting side has no piece on the origin square.
    #[error("no piece of the side to move on {0}")]
    NoPieceAtOrigin(Square),

    /// The destination is not among the legal destinations of the origin
    /// piece, including moves that would leave the mover's king attacked.
    #[error("illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },

    /// Move text that is not `<file><rank><file><rank>[q|r|b|n]`.
    #[error("malformed move notation: {0:?}")]
    MalformedNotation(String),

    /// Position text that could not be parsed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A parsed or hand-built position that cannot arise in play.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// A stored move failed while rebuilding a game from its log.
    ///
    /// `ply` is zero-based.
    #[error("replay failed at ply {ply} ({notation}): {source}")]
    ReplayFailed {
        ply: usize,
        notation: String,
        #[source]
        source: Box<ChessErrors>,
    },
}

#[cfg(test)]
mod tests {
    use super::ChessErrors;
    use crate::game_state::chess_types::Square;

    #[test]
    fn messages_use_chess_coordinates() {
        let err = ChessErrors::IllegalMove {
            from: Square::new(5, 7),
            to: Square::new(5, 3),
        };
        assert_eq!(err.to_string(), "illegal move e2e6");

        let replay = ChessErrors::ReplayFailed {
            ply: 2,
            notation: "e2e6".to_owned(),
            source: Box::new(err),
        };
        assert_eq!(
            replay.to_string(),
            "replay failed at ply 2 (e2e6): illegal move e2e6"
        );
    }
}
