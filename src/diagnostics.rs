//! Structured diagnostics emitted by the recognizer pipeline.
use crate::grid::OccupancyGrid;
use crate::matcher::TemplateScore;
use crate::types::{Recognition, Rect};
use serde::Serialize;

/// Stage timings in milliseconds.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct TimingBreakdown {
    pub select_ms: f64,
    pub rasterize_ms: f64,
    pub match_ms: f64,
    pub total_ms: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct RecognitionDiagnostics {
    /// Number of dots inside the selection rectangle.
    pub selected_dots: usize,
    /// Bounding box of the selected dots. Absent in count mode and below
    /// the dot minimum.
    pub bounds: Option<Rect>,
    /// Rasterized occupancy grid, when template matching ran.
    pub grid: Option<OccupancyGrid>,
    /// Per-template Hamming distances, in scan order. Empty in count mode.
    pub scores: Vec<TemplateScore>,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
pub struct RecognitionReport {
    pub recognition: Recognition,
    pub diagnostics: RecognitionDiagnostics,
}
