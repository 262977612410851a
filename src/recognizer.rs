//! Recognizer pipeline driving selection, rasterization and matching.
//!
//! The [`DigitRecognizer`] exposes a simple API: feed the board's dots and a
//! selection rectangle, get the recognized digit. Internally it selects the
//! dots inside the rectangle, then either counts them (count strategy) or
//! rasterizes them into an occupancy grid and scores the grid against the
//! digit templates (template strategy).
//!
//! Typical usage:
//! ```
//! use digit_grid::{DigitRecognizer, Point, Rect, RecognizerParams};
//!
//! let dots = vec![Point::new(4.0, 4.0), Point::new(6.0, 6.0)];
//! let recognizer = DigitRecognizer::new(RecognizerParams::default());
//! let res = recognizer.recognize(&dots, &Rect::new(0.0, 0.0, 10.0, 10.0));
//! assert!(res.digit <= 9);
//! ```
use crate::diagnostics::{RecognitionDiagnostics, RecognitionReport, TimingBreakdown};
use crate::grid::OccupancyGrid;
use crate::matcher;
use crate::selection::select_dots;
use crate::strategy::{DigitStrategy, DotCount, StrategyKind};
use crate::templates::{DIGIT_TEMPLATES, TEMPLATE_COLS, TEMPLATE_ROWS};
use crate::types::{volume_percent, Point, Recognition, Rect};
use log::debug;
use serde::Deserialize;
use std::time::Instant;

/// Parameters configuring the recognizer pipeline.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct RecognizerParams {
    /// Strategy used to turn a selection into a digit.
    pub strategy: StrategyKind,
    /// Occupancy-grid rows for template matching.
    pub rows: usize,
    /// Occupancy-grid columns for template matching.
    pub cols: usize,
    /// Minimum selected dots before template matching is attempted.
    pub min_dots: usize,
}

impl Default for RecognizerParams {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Template,
            rows: TEMPLATE_ROWS,
            cols: TEMPLATE_COLS,
            min_dots: 2,
        }
    }
}

/// Digit recognizer orchestrating dot selection, grid normalization and
/// nearest-template matching.
#[derive(Clone, Debug)]
pub struct DigitRecognizer {
    params: RecognizerParams,
}

impl DigitRecognizer {
    /// Create a recognizer with the supplied parameters.
    pub fn new(params: RecognizerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RecognizerParams {
        &self.params
    }

    /// Run the recognizer, returning a compact result.
    pub fn recognize(&self, dots: &[Point], selection: &Rect) -> Recognition {
        self.recognize_with_diagnostics(dots, selection).recognition
    }

    /// Run the recognizer and return both the result and a detailed report.
    pub fn recognize_with_diagnostics(
        &self,
        dots: &[Point],
        selection: &Rect,
    ) -> RecognitionReport {
        debug!(
            "recognize start dots={} strategy={:?}",
            dots.len(),
            self.params.strategy
        );
        let total_start = Instant::now();

        let select_start = Instant::now();
        let selected = select_dots(dots, selection);
        let select_ms = select_start.elapsed().as_secs_f64() * 1000.0;

        let mut timings = TimingBreakdown {
            select_ms,
            ..Default::default()
        };
        let mut bounds = None;
        let mut grid = None;
        let mut scores = Vec::new();

        let digit = match self.params.strategy {
            StrategyKind::Count => DotCount.recognize(&selected),
            StrategyKind::Template => {
                self.match_templates(&selected, &mut bounds, &mut grid, &mut scores, &mut timings)
            }
        };

        timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "recognize done digit={} selected={} total_ms={:.3}",
            digit,
            selected.len(),
            timings.total_ms
        );

        RecognitionReport {
            recognition: Recognition {
                digit,
                selected_dots: selected.len(),
                volume_percent: volume_percent(digit),
                latency_ms: timings.total_ms,
            },
            diagnostics: RecognitionDiagnostics {
                selected_dots: selected.len(),
                bounds,
                grid,
                scores,
                timings,
            },
        }
    }

    fn match_templates(
        &self,
        selected: &[Point],
        bounds: &mut Option<Rect>,
        grid: &mut Option<OccupancyGrid>,
        scores: &mut Vec<matcher::TemplateScore>,
        timings: &mut TimingBreakdown,
    ) -> u8 {
        if selected.len() < self.params.min_dots {
            debug!(
                "skipping template match: {} dots below minimum {}",
                selected.len(),
                self.params.min_dots
            );
            return 0;
        }
        let rect = match Rect::bound(selected) {
            Some(r) => r,
            None => return 0,
        };

        let rasterize_start = Instant::now();
        let occupancy =
            OccupancyGrid::rasterize(selected, &rect, self.params.rows, self.params.cols);
        timings.rasterize_ms = rasterize_start.elapsed().as_secs_f64() * 1000.0;

        let match_start = Instant::now();
        let digit = matcher::classify(&occupancy, &DIGIT_TEMPLATES);
        *scores = matcher::score_templates(&occupancy, &DIGIT_TEMPLATES);
        timings.match_ms = match_start.elapsed().as_secs_f64() * 1000.0;

        *bounds = Some(rect);
        *grid = Some(occupancy);
        digit
    }
}
