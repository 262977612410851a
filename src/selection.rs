//! Dot selection within a rectangular region.
use crate::types::{Point, Rect};

/// Dots whose centers lie inside `rect`, bounds inclusive.
pub fn select_dots(dots: &[Point], rect: &Rect) -> Vec<Point> {
    dots.iter().copied().filter(|p| rect.contains(p)).collect()
}
