//! Move notation codec.
//!
//! Converts between internal coordinate pairs and the 4-5 character wire
//! form `<file><rank><file><rank>[q|r|b|n]` used in game logs and transport
//! payloads. Internal rank `y` is written as chess rank `9 - y`. Anything
//! malformed is rejected here, before it can reach the board.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Promotion, Square};

/// A decoded move: origin, destination, optional promotion piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotatedMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Promotion>,
}

impl NotatedMove {
    #[inline]
    pub const fn new(from: Square, to: Square, promotion: Option<Promotion>) -> Self {
        Self {
            from,
            to,
            promotion,
        }
    }
}

/// Encode a move. Fails with `OutOfBounds` for squares off the board.
pub fn encode(from: Square, to: Square, promotion: Option<Promotion>) -> Result<String, ChessErrors> {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(from)?);
    out.push_str(&square_to_algebraic(to)?);
    if let Some(promotion) = promotion {
        out.push(promotion.to_char());
    }
    Ok(out)
}

/// Decode a 4 or 5 character move string.
pub fn decode(text: &str) -> Result<NotatedMove, ChessErrors> {
    let malformed = || ChessErrors::MalformedNotation(text.to_owned());

    let bytes = text.as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return Err(malformed());
    }

    let from = square_from_bytes(bytes[0], bytes[1]).ok_or_else(malformed)?;
    let to = square_from_bytes(bytes[2], bytes[3]).ok_or_else(malformed)?;
    let promotion = match bytes.get(4) {
        Some(byte) => Some(Promotion::from_char(char::from(*byte)).ok_or_else(malformed)?),
        None => None,
    };

    Ok(NotatedMove::new(from, to, promotion))
}

/// Convert a square such as `e4` to internal coordinates.
pub fn algebraic_to_square(text: &str) -> Result<Square, ChessErrors> {
    match text.as_bytes() {
        [file, rank] => square_from_bytes(*file, *rank)
            .ok_or_else(|| ChessErrors::MalformedNotation(text.to_owned())),
        _ => Err(ChessErrors::MalformedNotation(text.to_owned())),
    }
}

/// Convert an on-board square to chess coordinates such as `e4`.
pub fn square_to_algebraic(square: Square) -> Result<String, ChessErrors> {
    if !square.is_on_board() {
        return Err(ChessErrors::OutOfBounds(square));
    }
    Ok(square.to_string())
}

fn square_from_bytes(file: u8, rank: u8) -> Option<Square> {
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    let file_index = (file - b'a') as i8 + 1;
    let chess_rank = (rank - b'0') as i8;
    Some(Square::new(file_index, 9 - chess_rank))
}

impl fmt::Display for NotatedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for NotatedMove {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}
