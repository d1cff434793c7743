use std::fmt;

use crate::{piece::PieceType, Piece, Square};

/// A piece travelling between two squares.
///
/// This is a label, not a rule: nothing ties `piece` to what stands on
/// `from`, and no legality is implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(piece: Piece, from: Square, to: Square) -> Self {
        Self { piece, from, to }
    }

    /// Long algebraic form such as `"e2e4"` or `"Nb8c6"`. Pawns carry no
    /// letter and the letter is uppercase for both colors.
    pub fn to_algebraic(&self) -> String {
        let mut notation = String::with_capacity(5);
        if self.piece.piece_type != PieceType::Pawn {
            notation.push(self.piece.piece_type.letter());
        }
        notation.push_str(&self.from.to_algebraic());
        notation.push_str(&self.to.to_algebraic());
        notation
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_algebraic())
    }
}
