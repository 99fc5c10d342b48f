//! Input model: where a pointer sample came from and where it landed.
//!
//! Mouse and touch events feed the same gesture state machine. The host
//! converts DOM coordinates to canvas-local ones; for touch events it hands
//! over the active touch list and the first touch point is used.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;

/// Device that produced a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerSource {
    /// Mouse cursor.
    #[default]
    Mouse,
    /// First finger of a touch sequence.
    Touch,
}

/// A single pointer sample in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    /// Device the sample came from.
    pub source: PointerSource,
    /// Canvas-local position.
    pub position: Point,
}

impl PointerInput {
    /// A mouse sample at `(x, y)`.
    #[must_use]
    pub fn mouse(x: f64, y: f64) -> Self {
        Self { source: PointerSource::Mouse, position: Point::new(x, y) }
    }

    /// A touch sample built from the first entry of `touches`, or `None`
    /// when the list is empty (e.g. a `touchend` with no remaining fingers).
    #[must_use]
    pub fn touch(touches: &[Point]) -> Option<Self> {
        touches
            .first()
            .map(|&position| Self { source: PointerSource::Touch, position })
    }
}

/// A keyboard key as reported by the browser (e.g. `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }
}
