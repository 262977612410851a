#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod board;
pub mod diagnostics;
pub mod grid;
pub mod matcher;
pub mod recognizer;
pub mod selection;
pub mod strategy;
pub mod templates;
pub mod types;

// Demo plumbing – public so the binaries can share it.
pub mod config;
pub mod io;

// --- High-level re-exports -------------------------------------------------

// Main entry points: recognizer + results.
pub use crate::recognizer::{DigitRecognizer, RecognizerParams};
pub use crate::types::{Point, Recognition, Rect};

// High-level diagnostics returned by the recognizer.
pub use crate::diagnostics::{RecognitionDiagnostics, RecognitionReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use digit_grid::prelude::*;
///
/// let dots = vec![Point::new(2.0, 1.0), Point::new(2.0, 4.0)];
/// let recognizer = DigitRecognizer::new(RecognizerParams::default());
/// let res = recognizer.recognize(&dots, &Rect::new(0.0, 0.0, 10.0, 10.0));
/// assert!(res.digit <= 9);
/// ```
pub mod prelude {
    pub use crate::board::Board;
    pub use crate::strategy::{DigitStrategy, DotCount, StrategyKind, TemplateMatch};
    pub use crate::{DigitRecognizer, Point, Recognition, RecognizerParams, Rect};
}
