mod common;

use common::scenes::{cluster, vertical_stroke};
use digit_grid::grid::OccupancyGrid;
use digit_grid::matcher::{classify, score_templates};
use digit_grid::strategy::StrategyKind;
use digit_grid::templates::DIGIT_TEMPLATES;
use digit_grid::{DigitRecognizer, Point, Rect, RecognizerParams};

#[test]
fn vertical_line_distances_match_hand_computed_table() {
    // Five dots on the cell centers of column 0 inside a 3×5 rectangle.
    let rect = Rect::new(0.0, 0.0, 3.0, 5.0);
    let points: Vec<Point> = (0..5).map(|r| Point::new(0.5, r as f32 + 0.5)).collect();
    let grid = OccupancyGrid::rasterize(&points, &rect, 5, 3);
    assert_eq!(
        grid.to_rows(),
        vec![
            vec![1, 0, 0],
            vec![1, 0, 0],
            vec![1, 0, 0],
            vec![1, 0, 0],
            vec![1, 0, 0],
        ]
    );

    let scores = score_templates(&grid, &DIGIT_TEMPLATES);
    let distances: Vec<u32> = scores.iter().map(|s| s.distance).collect();
    assert_eq!(distances, vec![7, 9, 8, 10, 8, 8, 7, 10, 8, 9]);

    // Digits 0 and 6 tie at distance 7; the earlier template wins. The
    // column does not resemble digit 1's checkmark-like pattern at all.
    let digit = classify(&grid, &DIGIT_TEMPLATES);
    assert_eq!(digit, 0);
    assert!(distances[1] > distances[0]);
}

#[test]
fn recognizer_classifies_a_vertical_stroke_end_to_end() {
    let recognizer = DigitRecognizer::new(RecognizerParams::default());
    let selection = Rect::new(0.0, 0.0, 10.0, 10.0);
    let report = recognizer.recognize_with_diagnostics(&vertical_stroke(), &selection);

    assert_eq!(report.recognition.digit, 0);
    assert_eq!(report.recognition.volume_percent, 0);

    let bounds = report.diagnostics.bounds.expect("template mode sets bounds");
    assert_eq!(bounds.width, 1.0, "collinear stroke clamps width to 1");
    assert_eq!(bounds.height, 4.0);

    let grid = report.diagnostics.grid.expect("template mode sets the grid");
    assert_eq!(
        grid.to_rows(),
        vec![
            vec![1, 0, 0],
            vec![1, 0, 0],
            vec![1, 0, 0],
            vec![1, 0, 0],
            vec![1, 0, 0],
        ]
    );
}

#[test]
fn count_mode_maps_dot_count_to_volume_steps() {
    let recognizer = DigitRecognizer::new(RecognizerParams {
        strategy: StrategyKind::Count,
        ..Default::default()
    });
    let selection = Rect::new(0.0, 0.0, 100.0, 100.0);

    let res = recognizer.recognize(&cluster(7), &selection);
    assert_eq!(res.digit, 7);
    assert_eq!(res.volume_percent, 70);

    let res = recognizer.recognize(&cluster(12), &selection);
    assert_eq!(res.digit, 9, "counts above 9 clamp");
    assert_eq!(res.volume_percent, 90);
}

#[test]
fn empty_selection_recognizes_zero_in_both_modes() {
    let far_away = vec![Point::new(500.0, 500.0)];
    let selection = Rect::new(0.0, 0.0, 10.0, 10.0);

    for strategy in [StrategyKind::Count, StrategyKind::Template] {
        let recognizer = DigitRecognizer::new(RecognizerParams {
            strategy,
            ..Default::default()
        });
        let res = recognizer.recognize(&far_away, &selection);
        assert_eq!(res.digit, 0, "strategy {strategy:?}");
        assert_eq!(res.selected_dots, 0);
    }
}
