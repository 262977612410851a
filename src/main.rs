use digit_grid::board::{Board, DEFAULT_DOT_COUNT};
use digit_grid::{DigitRecognizer, RecognizerParams, Rect};

fn main() {
    // Demo stub: scatters a board and recognizes the full-board selection
    let mut board = Board::new(350.0, 350.0);
    let mut rng = rand::thread_rng();
    board.scatter(&mut rng, DEFAULT_DOT_COUNT);

    let recognizer = DigitRecognizer::new(RecognizerParams::default());
    let selection = Rect::new(0.0, 0.0, board.width, board.height);
    let res = board.recognize(&selection, &recognizer);
    println!(
        "digit={} volume={}% latency_ms={:.3}",
        res.digit, res.volume_percent, res.latency_ms
    );
}
