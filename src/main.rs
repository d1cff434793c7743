use chess_core::Board;
use log::info;

fn main() {
    env_logger::init();

    let board = Board::initial_position();
    info!("rendering initial position ({} pieces)", board.pieces().count());

    println!("Initial board position:");
    println!("{board}");
}
