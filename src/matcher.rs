//! Nearest-template classification under Hamming distance.
//!
//! Notes
//! - Templates are scanned in table order (digit 0 through 9) and the best
//!   label is updated only on strict improvement, so the first template
//!   achieving the minimum distance wins ties. Downstream behavior relies
//!   on this ordering being stable.
//! - Grid and template shapes must match; the mismatch case is a caller
//!   programming error guarded by `debug_assert!`, not recovered here.
use crate::grid::OccupancyGrid;
use crate::templates::{DigitTemplate, TEMPLATE_COLS, TEMPLATE_ROWS};
use serde::Serialize;

/// Number of cells where two equal-shaped grids disagree.
pub fn hamming_distance(a: &OccupancyGrid, b: &OccupancyGrid) -> u32 {
    debug_assert_eq!(
        (a.rows, a.cols),
        (b.rows, b.cols),
        "grid shapes must match"
    );
    a.cells
        .iter()
        .zip(&b.cells)
        .filter(|&(&x, &y)| (x != 0) != (y != 0))
        .count() as u32
}

fn template_distance(grid: &OccupancyGrid, tpl: &DigitTemplate) -> u32 {
    debug_assert_eq!(grid.rows, TEMPLATE_ROWS, "grid rows must match templates");
    debug_assert_eq!(grid.cols, TEMPLATE_COLS, "grid cols must match templates");
    let mut dist = 0u32;
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let occupied = grid.get(row, col) != 0;
            let expected = tpl.cells[row][col] != 0;
            if occupied != expected {
                dist += 1;
            }
        }
    }
    dist
}

/// Per-template Hamming distance, in scan order.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct TemplateScore {
    pub digit: u8,
    pub distance: u32,
}

/// Label of the template closest to `grid`.
///
/// Returns 0 when `templates` is empty.
pub fn classify(grid: &OccupancyGrid, templates: &[DigitTemplate]) -> u8 {
    let mut best = 0u8;
    let mut min_dist = u32::MAX;
    for tpl in templates {
        let dist = template_distance(grid, tpl);
        if dist < min_dist {
            min_dist = dist;
            best = tpl.digit;
        }
    }
    best
}

/// Distance table over all templates, in scan order.
pub fn score_templates(grid: &OccupancyGrid, templates: &[DigitTemplate]) -> Vec<TemplateScore> {
    templates
        .iter()
        .map(|tpl| TemplateScore {
            digit: tpl.digit,
            distance: template_distance(grid, tpl),
        })
        .collect()
}
