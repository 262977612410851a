//! Digit reference patterns.
//!
//! Ten 5×3 binary matrices, one per digit 0–9, enumerated in label order.
//! The table is the recognizer's ground truth: classification results depend
//! on these exact cell values, so they must not be edited casually.
use crate::grid::OccupancyGrid;

/// Rows in a digit template.
pub const TEMPLATE_ROWS: usize = 5;
/// Columns in a digit template.
pub const TEMPLATE_COLS: usize = 3;

/// A digit label paired with its canonical dot pattern.
#[derive(Clone, Copy, Debug)]
pub struct DigitTemplate {
    pub digit: u8,
    pub cells: [[u8; TEMPLATE_COLS]; TEMPLATE_ROWS],
}

impl DigitTemplate {
    /// Materialize the pattern as an [`OccupancyGrid`].
    pub fn to_grid(&self) -> OccupancyGrid {
        OccupancyGrid::from_cells(&self.cells)
    }
}

/// Reference patterns for digits 0–9, in label order.
#[rustfmt::skip]
pub static DIGIT_TEMPLATES: [DigitTemplate; 10] = [
    DigitTemplate {
        digit: 0,
        cells: [
            [1, 1, 1],
            [1, 0, 1],
            [1, 0, 1],
            [1, 0, 1],
            [1, 1, 1],
        ],
    },
    DigitTemplate {
        digit: 1,
        cells: [
            [0, 1, 0],
            [1, 1, 0],
            [0, 1, 0],
            [0, 1, 0],
            [1, 1, 1],
        ],
    },
    DigitTemplate {
        digit: 2,
        cells: [
            [1, 1, 1],
            [0, 0, 1],
            [1, 1, 1],
            [1, 0, 0],
            [1, 1, 1],
        ],
    },
    DigitTemplate {
        digit: 3,
        cells: [
            [1, 1, 1],
            [0, 0, 1],
            [1, 1, 1],
            [0, 0, 1],
            [1, 1, 1],
        ],
    },
    DigitTemplate {
        digit: 4,
        cells: [
            [1, 0, 1],
            [1, 0, 1],
            [1, 1, 1],
            [0, 0, 1],
            [0, 0, 1],
        ],
    },
    DigitTemplate {
        digit: 5,
        cells: [
            [1, 1, 1],
            [1, 0, 0],
            [1, 1, 1],
            [0, 0, 1],
            [1, 1, 1],
        ],
    },
    DigitTemplate {
        digit: 6,
        cells: [
            [1, 1, 1],
            [1, 0, 0],
            [1, 1, 1],
            [1, 0, 1],
            [1, 1, 1],
        ],
    },
    DigitTemplate {
        digit: 7,
        cells: [
            [1, 1, 1],
            [0, 0, 1],
            [1, 1, 1],
            [0, 0, 1],
            [0, 0, 1],
        ],
    },
    DigitTemplate {
        digit: 8,
        cells: [
            [1, 1, 1],
            [1, 0, 1],
            [1, 1, 1],
            [1, 0, 1],
            [1, 1, 1],
        ],
    },
    DigitTemplate {
        digit: 9,
        cells: [
            [1, 1, 1],
            [1, 0, 1],
            [1, 1, 1],
            [0, 0, 1],
            [1, 1, 1],
        ],
    },
];
