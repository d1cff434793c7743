use chess_core::{Board, ChessError, Color, DimensionError, Move, Piece, PieceType, Square};

fn square(row: i8, col: i8) -> Square {
    Square::new(row, col).unwrap()
}

fn build(row: i8, col: i8, rows: usize) -> Result<(Square, Board), ChessError> {
    let square = Square::new(row, col)?;
    let grid: Vec<Vec<Option<Piece>>> = vec![vec![None; 8]; rows];
    let board = Board::from_grid(&grid)?;
    Ok((square, board))
}

#[test]
fn notation_and_rendering_agree_on_orientation() {
    // Row 0 is both "rank 8" in notation and the first body line in the diagram.
    let board = Board::initial_position();
    let rendered = board.render();
    let body: Vec<&str> = rendered.lines().skip(2).take(8).collect();

    for (row, line) in body.iter().enumerate() {
        let label = square(row as i8, 0).to_algebraic()[1..].to_string();
        assert!(line.starts_with(&format!("{label} | ")), "{line}");

        for col in 0..8 {
            let expected = board
                .get(square(row as i8, col as i8))
                .map_or('.', |piece| piece.symbol());
            assert_eq!(line.as_bytes()[4 + 2 * col] as char, expected);
        }
    }

    assert!(body[0].starts_with("8 | R N B Q K"));
    assert!(body[7].starts_with("1 | r n b q k"));
}

#[test]
fn rendered_header_and_rank_order() {
    let rendered = Board::initial_position().render();
    assert!(rendered.starts_with("  A B C D E F G H\n"));

    let labels: Vec<char> = rendered
        .lines()
        .skip(2)
        .take(8)
        .filter_map(|line| line.chars().next())
        .collect();
    assert_eq!(labels, vec!['8', '7', '6', '5', '4', '3', '2', '1']);
    assert!(rendered.ends_with(" +-----------------+\n  A B C D E F G H"));
}

#[test]
fn opening_moves_read_from_the_initial_position() {
    let board = Board::initial_position();

    let e2 = Square::from_algebraic("e2").unwrap();
    let pawn = board.get(e2).unwrap();
    let e4 = Square::from_algebraic("e4").unwrap();
    assert_eq!(Move::new(pawn, e2, e4).to_algebraic(), "e2e4");

    let b8 = square(0, 1);
    let knight = board.get(b8).unwrap();
    assert_eq!(knight, Piece::new(PieceType::Knight, Color::Black));
    assert_eq!(Move::new(knight, b8, square(2, 2)).to_string(), "Nb8c6");
}

#[test]
fn construction_errors_surface_through_question_mark() {
    assert!(build(0, 0, 8).is_ok());
    assert!(matches!(build(8, 0, 8), Err(ChessError::Range(_))));
    assert_eq!(
        build(0, 0, 7).unwrap_err(),
        ChessError::Dimension(DimensionError::Rows { found: 7 })
    );
}

#[test]
fn boards_are_shareable_across_threads() {
    let board = std::sync::Arc::new(Board::initial_position());
    let expected = board.render();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let board = std::sync::Arc::clone(&board);
            std::thread::spawn(move || board.render())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

mod serde_support {
    use super::*;

    #[test]
    fn square_deserialization_is_validated() {
        let parsed: Square = serde_json::from_str("[6, 4]").unwrap();
        assert_eq!(parsed.to_algebraic(), "e2");
        assert!(serde_json::from_str::<Square>("[8, 0]").is_err());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "[6,4]");
    }

    #[test]
    fn piece_uses_lowercase_names() {
        let piece = Piece::new(PieceType::Queen, Color::Black);
        let json = serde_json::to_string(&piece).unwrap();
        assert_eq!(json, r#"{"piece_type":"queen","color":"black"}"#);
    }

    #[test]
    fn board_round_trips_and_rejects_bad_shapes() {
        let board = Board::initial_position();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);

        let short = serde_json::to_string(&vec![vec![Option::<Piece>::None; 8]; 7]).unwrap();
        assert!(serde_json::from_str::<Board>(&short).is_err());
    }
}
