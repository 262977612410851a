//! Binary occupancy grid and point-cloud rasterization.
//!
//! Design
//! - Cells are stored row-major in a compact `Vec<u8>` (0 or 1), mirroring
//!   the layout used for image buffers elsewhere in this family of tools.
//! - Rasterization maps each point to a fractional position inside the
//!   reference rectangle and then to a cell index by floor division.
//!
//! Notes
//! - A point on the exact right/bottom edge of the rectangle normalizes to
//!   1.0 and would index one past the last cell; such points are silently
//!   dropped. This matters for bounding-box rectangles, where the extreme
//!   point of the set always sits on that edge.
//! - Multiple points in one cell coalesce to a single 1 (idempotent OR).
use crate::types::{Point, Rect};
use serde::Serialize;

/// Fixed-size binary cell buffer in row-major layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OccupancyGrid {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// Backing storage in row-major order, one byte per cell (0 or 1)
    pub cells: Vec<u8>,
}

impl OccupancyGrid {
    /// Construct an all-zero grid of size `rows × cols`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0u8; rows * cols],
        }
    }

    /// Construct a grid from nested row arrays (non-zero means occupied).
    pub fn from_cells<const C: usize>(cells: &[[u8; C]]) -> Self {
        let mut grid = Self::new(cells.len(), C);
        for (row, values) in cells.iter().enumerate() {
            for (col, &v) in values.iter().enumerate() {
                if v != 0 {
                    grid.set(row, col, 1);
                }
            }
        }
        grid
    }

    #[inline]
    /// Convert (row, col) to a linear index into `cells`.
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    /// Get the cell value at (row, col).
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[self.idx(row, col)]
    }

    #[inline]
    /// Set the cell value at (row, col).
    pub fn set(&mut self, row: usize, col: usize, v: u8) {
        let i = self.idx(row, col);
        self.cells[i] = v;
    }

    /// Count of occupied cells.
    pub fn ones(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Cells as nested row vectors (handy for asserts and reports).
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|row| self.cells[row * self.cols..(row + 1) * self.cols].to_vec())
            .collect()
    }

    /// Rasterize a point set into a fresh `rows × cols` occupancy grid.
    ///
    /// Each point is normalized to `fx = (x - left) / width` and
    /// `fy = (y - top) / height`, then mapped to `col = floor(fx * cols)`,
    /// `row = floor(fy * rows)`. Indices outside `[0, rows) × [0, cols)`
    /// are dropped rather than treated as an error.
    ///
    /// `rect` extents must be at least 1 unit; [`Rect::bound`] guarantees
    /// this for bounding boxes of selected dots.
    pub fn rasterize(points: &[Point], rect: &Rect, rows: usize, cols: usize) -> Self {
        let mut grid = Self::new(rows, cols);
        for p in points {
            let fx = (p.x - rect.left) / rect.width;
            let fy = (p.y - rect.top) / rect.height;
            let col = (fx * cols as f32).floor() as isize;
            let row = (fy * rows as f32).floor() as isize;
            if row < 0 || col < 0 || row >= rows as isize || col >= cols as isize {
                continue;
            }
            grid.set(row as usize, col as usize, 1);
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: usize = 5;
    const COLS: usize = 3;

    #[test]
    fn interior_point_occupies_exactly_one_cell() {
        let rect = Rect::new(10.0, 20.0, 30.0, 50.0);
        let points = [Point::new(25.0, 55.0)];
        let grid = OccupancyGrid::rasterize(&points, &rect, ROWS, COLS);

        // fx = 0.5 -> col 1, fy = 0.7 -> row 3
        assert_eq!(grid.ones(), 1, "one interior point sets one cell");
        assert_eq!(grid.get(3, 1), 1);
    }

    #[test]
    fn empty_point_set_yields_all_zero_grid() {
        let rect = Rect::new(0.0, 0.0, 3.0, 5.0);
        let grid = OccupancyGrid::rasterize(&[], &rect, ROWS, COLS);
        assert_eq!(grid.ones(), 0);
        assert_eq!(grid.to_rows(), vec![vec![0u8; COLS]; ROWS]);
    }

    #[test]
    fn right_and_bottom_edge_points_are_dropped() {
        let rect = Rect::new(0.0, 0.0, 3.0, 5.0);
        let points = [
            Point::new(3.0, 2.5), // fx == 1.0
            Point::new(1.5, 5.0), // fy == 1.0
            Point::new(3.0, 5.0),
        ];
        let grid = OccupancyGrid::rasterize(&points, &rect, ROWS, COLS);
        assert_eq!(grid.ones(), 0, "edge points must not write out of bounds");
    }

    #[test]
    fn points_outside_the_rect_are_dropped() {
        let rect = Rect::new(0.0, 0.0, 3.0, 5.0);
        let points = [Point::new(-0.5, 2.0), Point::new(4.0, 2.0)];
        let grid = OccupancyGrid::rasterize(&points, &rect, ROWS, COLS);
        assert_eq!(grid.ones(), 0);
    }

    #[test]
    fn coincident_points_coalesce_to_a_single_one() {
        let rect = Rect::new(0.0, 0.0, 3.0, 5.0);
        let points = [
            Point::new(0.5, 0.5),
            Point::new(0.6, 0.6),
            Point::new(0.9, 0.9),
        ];
        let grid = OccupancyGrid::rasterize(&points, &rect, ROWS, COLS);
        assert_eq!(grid.ones(), 1);
        assert_eq!(grid.get(0, 0), 1);
    }

    #[test]
    fn vertical_stroke_fills_the_left_column() {
        let rect = Rect::new(0.0, 0.0, 3.0, 5.0);
        let points: Vec<Point> = (0..5).map(|r| Point::new(0.5, r as f32 + 0.5)).collect();
        let grid = OccupancyGrid::rasterize(&points, &rect, ROWS, COLS);
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
    fn from_cells_round_trips_through_to_rows() {
        let grid = OccupancyGrid::from_cells(&[[1, 0, 1], [0, 1, 0]]);
        assert_eq!(grid.rows, 2);
        assert_eq!(grid.cols, 3);
        assert_eq!(grid.to_rows(), vec![vec![1, 0, 1], vec![0, 1, 0]]);
    }
}
