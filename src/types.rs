//! Core geometric types shared across the recognizer pipeline.
use serde::{Deserialize, Serialize};

/// A dot position, in the same coordinate space as the selection rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in board coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Normalizes two drag corners into a rectangle with non-negative extents.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    /// Tight bounding box of a point set, `None` when the set is empty.
    ///
    /// Degenerate extents are clamped to 1 unit so that grid normalization
    /// never divides by zero (e.g. all points collinear).
    pub fn bound(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut min_x = first.x;
        let mut max_x = first.x;
        let mut min_y = first.y;
        let mut max_y = first.y;
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        Some(Self {
            left: min_x,
            top: min_y,
            width: (max_x - min_x).max(1.0),
            height: (max_y - min_y).max(1.0),
        })
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Containment test with inclusive bounds on all four edges.
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }
}

/// Volume step for a recognized digit (digit × 10%).
pub fn volume_percent(digit: u8) -> u8 {
    digit.min(9) * 10
}

/// Compact recognition result.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct Recognition {
    /// Recognized digit in `[0, 9]`.
    pub digit: u8,
    /// Number of dots inside the selection rectangle.
    pub selected_dots: usize,
    /// Volume step mapped from the digit.
    pub volume_percent: u8,
    pub latency_ms: f64,
}
