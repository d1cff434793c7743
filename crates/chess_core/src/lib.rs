// Chess position model: squares, pieces, moves and board snapshots
pub mod board;
pub mod error;
pub mod moves;
pub mod piece;
pub mod square;

// Re-export main types for convenience
pub use board::{Board, BOARD_SIZE};
pub use error::{ChessError, DimensionError, RangeError};
pub use moves::Move;
pub use piece::{Color, Piece, PieceType};
pub use square::Square;
