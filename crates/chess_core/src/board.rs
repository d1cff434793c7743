use std::fmt;

use log::{debug, warn};

use crate::{
    error::DimensionError,
    piece::{Color, PieceType},
    Piece, Square,
};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

const COLUMN_LABELS: &str = "  A B C D E F G H";
const BORDER: &str = " +-----------------+";

/// Row-major cell storage, row 0 first.
pub type Grid = [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE];

/// Snapshot of piece placement.
///
/// `grid[row][col]` follows the [`Square`] convention: row 0 is rank 8.
/// There is no side to move and no history; a `Board` never changes once
/// built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "Vec<Vec<Option<Piece>>>",
        into = "Vec<Vec<Option<Piece>>>"
    )
)]
pub struct Board {
    grid: Grid,
}

impl Board {
    pub fn empty() -> Self {
        Self::from_rows([[None; BOARD_SIZE]; BOARD_SIZE])
    }

    pub fn from_rows(grid: Grid) -> Self {
        Self { grid }
    }

    /// Copies an arbitrary row-major grid into a board, rejecting any shape
    /// other than 8x8 before a single cell is read.
    pub fn from_grid<R: AsRef<[Option<Piece>]>>(grid: &[R]) -> Result<Self, DimensionError> {
        if grid.len() != BOARD_SIZE {
            warn!("rejected grid with {} rows", grid.len());
            return Err(DimensionError::Rows { found: grid.len() });
        }
        for (row, cells) in grid.iter().enumerate() {
            let found = cells.as_ref().len();
            if found != BOARD_SIZE {
                warn!("rejected grid: row {row} has {found} columns");
                return Err(DimensionError::Columns { row, found });
            }
        }

        let mut board = Self::empty();
        for (target, source) in board.grid.iter_mut().zip(grid) {
            target.copy_from_slice(source.as_ref());
        }
        debug!("built board with {} pieces", board.pieces().count());
        Ok(board)
    }

    /// The standard starting setup, black on rows 0-1 and white on rows 6-7.
    pub fn initial_position() -> Self {
        let piece_order = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];

        let mut grid: Grid = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (col, &piece_type) in piece_order.iter().enumerate() {
            grid[0][col] = Some(Piece::new(piece_type, Color::Black));
            grid[1][col] = Some(Piece::new(PieceType::Pawn, Color::Black));
            grid[6][col] = Some(Piece::new(PieceType::Pawn, Color::White));
            grid[7][col] = Some(Piece::new(piece_type, Color::White));
        }

        debug!("set up initial position");
        Self::from_rows(grid)
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        let (row, col) = square.to_coordinates();
        self.grid[row][col]
    }

    /// Occupied squares in row-major order, starting from a8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                let piece = (*cell)?;
                // Indices come from the fixed-size grid, so they are in range.
                let square = Square::new(row as i8, col as i8).ok()?;
                Some((square, piece))
            })
        })
    }

    pub fn rows(&self) -> &Grid {
        &self.grid
    }

    /// Text diagram with rank 8 at the top:
    ///
    /// ```text
    ///   A B C D E F G H
    ///  +-----------------+
    /// 8 | R N B Q K B N R |
    /// ...
    /// 1 | r n b q k b n r |
    ///  +-----------------+
    ///   A B C D E F G H
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{COLUMN_LABELS}")?;
        write!(f, "{BORDER}")?;

        for (row, cells) in self.grid.iter().enumerate() {
            write!(f, "\n{} |", BOARD_SIZE - row)?;
            for cell in cells {
                write!(f, " {}", cell.map_or('.', Piece::symbol))?;
            }
            f.write_str(" |")?;
        }

        write!(f, "\n{BORDER}\n{COLUMN_LABELS}")
    }
}

impl TryFrom<Vec<Vec<Option<Piece>>>> for Board {
    type Error = DimensionError;

    fn try_from(grid: Vec<Vec<Option<Piece>>>) -> Result<Self, Self::Error> {
        Self::from_grid(&grid)
    }
}

impl From<Board> for Vec<Vec<Option<Piece>>> {
    fn from(board: Board) -> Self {
        board.grid.iter().map(|row| row.to_vec()).collect()
    }
}
