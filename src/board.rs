//! Headless board model: scattered dots, drag moves, recognition.
//!
//! All mutable state lives in an explicit [`Board`] value that event-handling
//! code threads through, rather than in module-level globals.
use crate::recognizer::DigitRecognizer;
use crate::types::{Point, Recognition, Rect};
use rand::Rng;

/// Default number of scattered dots.
pub const DEFAULT_DOT_COUNT: usize = 20;

/// Board with dot positions in `[0, width] × [0, height]`.
#[derive(Clone, Debug)]
pub struct Board {
    pub width: f32,
    pub height: f32,
    pub dots: Vec<Point>,
}

impl Board {
    /// Empty board of the given extents.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            dots: Vec::new(),
        }
    }

    /// Replace the dots with `count` positions drawn uniformly over the board.
    pub fn scatter<R: Rng>(&mut self, rng: &mut R, count: usize) {
        self.dots.clear();
        for _ in 0..count {
            self.dots.push(Point::new(
                rng.gen_range(0.0..self.width),
                rng.gen_range(0.0..self.height),
            ));
        }
    }

    /// Move a dot, clamping the target into board bounds.
    ///
    /// Returns `false` when `index` does not name a dot.
    pub fn move_dot(&mut self, index: usize, x: f32, y: f32) -> bool {
        match self.dots.get_mut(index) {
            Some(dot) => {
                dot.x = x.clamp(0.0, self.width);
                dot.y = y.clamp(0.0, self.height);
                true
            }
            None => false,
        }
    }

    /// Recognize the digit formed by the dots inside `selection`.
    pub fn recognize(&self, selection: &Rect, recognizer: &DigitRecognizer) -> Recognition {
        recognizer.recognize(&self.dots, selection)
    }
}
