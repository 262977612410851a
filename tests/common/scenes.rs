use digit_grid::Point;

/// Dots tracing a vertical stroke: identical x, ys spread so that rows 0–4
/// of a 5-row grid are all hit after bounding-box normalization (the
/// bottommost dot normalizes to 1.0 and is dropped).
pub fn vertical_stroke() -> Vec<Point> {
    [0.0, 1.0, 2.0, 3.0, 3.9, 4.0]
        .iter()
        .map(|&y| Point::new(1.0, y))
        .collect()
}

/// `count` dots packed on a small lattice near the origin.
pub fn cluster(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| Point::new(1.0 + (i % 4) as f32, 1.0 + (i / 4) as f32))
        .collect()
}
