//! Interchangeable digit-recognition strategies.
//!
//! Both strategies answer the same question: given the dots selected from a
//! region, which digit 0–9 do they form? [`DotCount`] reads the answer off
//! the count; [`TemplateMatch`] normalizes the dots into an occupancy grid
//! and picks the nearest digit pattern.
use crate::grid::OccupancyGrid;
use crate::matcher;
use crate::templates::{DIGIT_TEMPLATES, TEMPLATE_COLS, TEMPLATE_ROWS};
use crate::types::{Point, Rect};
use serde::Deserialize;

/// Maps a set of selected dots to a digit label in `[0, 9]`.
pub trait DigitStrategy {
    fn recognize(&self, dots: &[Point]) -> u8;
}

/// Count-and-clamp: the label is the number of selected dots, capped at 9.
#[derive(Clone, Copy, Debug, Default)]
pub struct DotCount;

impl DigitStrategy for DotCount {
    fn recognize(&self, dots: &[Point]) -> u8 {
        dots.len().min(9) as u8
    }
}

/// Pattern matching against the digit templates.
///
/// The dots are normalized by their own bounding box (not the selection
/// rectangle), so the traced shape is recognized wherever it sits inside
/// the selection.
#[derive(Clone, Copy, Debug)]
pub struct TemplateMatch {
    /// Occupancy-grid rows used for rasterization.
    pub rows: usize,
    /// Occupancy-grid columns used for rasterization.
    pub cols: usize,
    /// Below this many dots recognition is not attempted and the label is 0.
    pub min_dots: usize,
}

impl Default for TemplateMatch {
    fn default() -> Self {
        Self {
            rows: TEMPLATE_ROWS,
            cols: TEMPLATE_COLS,
            min_dots: 2,
        }
    }
}

impl DigitStrategy for TemplateMatch {
    fn recognize(&self, dots: &[Point]) -> u8 {
        if dots.len() < self.min_dots {
            return 0;
        }
        let bounds = match Rect::bound(dots) {
            Some(b) => b,
            None => return 0,
        };
        let grid = OccupancyGrid::rasterize(dots, &bounds, self.rows, self.cols);
        matcher::classify(&grid, &DIGIT_TEMPLATES)
    }
}

/// Strategy selector used by configs and recognizer params.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Count the selected dots and clamp to `[0, 9]`.
    Count,
    /// Occupancy-grid template matching.
    Template,
}

impl Default for StrategyKind {
    fn default() -> Self {
        StrategyKind::Template
    }
}
