use std::fmt;

use log::warn;

use crate::board::BOARD_SIZE;
use crate::error::RangeError;

/// A coordinate on the 8x8 grid.
///
/// Row 0 is the black back rank (rank 8) and row 7 is rank 1; column 0 is the
/// a-file. Both coordinates are checked on construction, so every `Square`
/// can index a board directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(i8, i8)", into = "(i8, i8)")
)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> Result<Self, RangeError> {
        let in_range = |v: i8| (0..BOARD_SIZE as i8).contains(&v);
        if !in_range(row) || !in_range(col) {
            warn!("rejected square ({row}, {col})");
            return Err(RangeError { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    /// The raw `(row, col)` pair, suitable for indexing the grid.
    pub fn to_coordinates(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// Algebraic name of the square, e.g. `(0, 0)` is `"a8"` and `(7, 7)` is `"h1"`.
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        format!("{file}{rank}")
    }

    pub fn from_algebraic(notation: &str) -> Option<Self> {
        let bytes = notation.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }

        Some(Self {
            row: b'8' - rank,
            col: file - b'a',
        })
    }
}

impl TryFrom<(i8, i8)> for Square {
    type Error = RangeError;

    fn try_from((row, col): (i8, i8)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Square> for (i8, i8) {
    fn from(square: Square) -> Self {
        (square.row as i8, square.col as i8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_algebraic())
    }
}
