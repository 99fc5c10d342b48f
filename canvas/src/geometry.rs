//! Geometry engine: points, rectangles, the overlap-ratio test, and the
//! free-position search used to scatter cards across the canvas.
//!
//! Overlap is judged per rectangle: the intersection area is divided by each
//! rectangle's own area and the pair collides when either share exceeds the
//! threshold. A small card fully inside a large one therefore collides even
//! though its share of the union is tiny.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A point in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Component-wise `self - other`.
    #[must_use]
    pub fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// Width and height of a card or container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle. Derived from a card origin plus the fixed card size;
/// never persisted on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    /// Rectangle with its top-left corner at `origin`.
    #[must_use]
    pub fn at(origin: Point, size: Size) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x + size.width,
            bottom: origin.y + size.height,
        }
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Area shared with `other`, or `None` when the two do not intersect.
    /// Rectangles that only touch along an edge do not intersect.
    #[must_use]
    pub fn intersection_area(&self, other: &Rect) -> Option<f64> {
        let left = self.left.max(other.left);
        let right = self.right.min(other.right);
        let top = self.top.max(other.top);
        let bottom = self.bottom.min(other.bottom);
        if left >= right || top >= bottom {
            return None;
        }
        Some((right - left) * (bottom - top))
    }
}

/// Whether the intersection of `a` and `b` covers more than `threshold` of
/// either rectangle's own area.
#[must_use]
pub fn overlap_ratio_exceeds(a: &Rect, b: &Rect, threshold: f64) -> bool {
    let Some(shared) = a.intersection_area(b) else {
        return false;
    };
    shared / a.area() > threshold || shared / b.area() > threshold
}

/// Inputs to [`find_free_position`].
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    /// Canvas container size.
    pub container: Size,
    /// Size of the card being placed.
    pub card: Size,
    /// Inset from every container edge.
    pub margin: f64,
    /// Collision threshold passed to [`overlap_ratio_exceeds`].
    pub threshold: f64,
    /// Random draws before falling back to the grid.
    pub max_attempts: usize,
    /// Gap between fallback grid cells.
    pub gutter: f64,
    /// Fallback grid columns.
    pub columns: usize,
}

impl Placement {
    /// Largest origin that keeps the card `margin` away from the far edges.
    /// Never smaller than `margin`, so an undersized container pins cards to
    /// the near corner instead of producing an empty range.
    #[must_use]
    pub fn max_origin(&self) -> Point {
        Point::new(
            (self.container.width - self.card.width - self.margin).max(self.margin),
            (self.container.height - self.card.height - self.margin).max(self.margin),
        )
    }

    /// Deterministic grid slot for the `occupied_count`-th card, clamped into
    /// the container.
    #[must_use]
    pub fn grid_position(&self, occupied_count: usize) -> Point {
        let columns = self.columns.max(1);
        let col = occupied_count % columns;
        let row = occupied_count / columns;
        let max = self.max_origin();
        #[allow(clippy::cast_precision_loss)]
        let (col, row) = (col as f64, row as f64);
        Point::new(
            (col * (self.card.width + self.gutter) + self.margin).min(max.x),
            (row * (self.card.height + self.gutter) + self.margin).min(max.y),
        )
    }
}

/// Outcome of a free-position search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FreePosition {
    /// A random draw that clears every occupied rectangle.
    Random(Point),
    /// All random draws collided; the grid slot for the current occupancy.
    Grid(Point),
}

impl FreePosition {
    #[must_use]
    pub fn point(self) -> Point {
        match self {
            Self::Random(p) | Self::Grid(p) => p,
        }
    }
}

/// Search for an origin whose card rectangle does not collide with any of
/// `occupied`.
///
/// Draws are uniform over `[margin, container - card - margin]` on both axes.
/// The caller is responsible for recording the returned rectangle as occupied.
pub fn find_free_position<R: Rng>(rng: &mut R, placement: &Placement, occupied: &[Rect]) -> FreePosition {
    let max = placement.max_origin();
    let span_x = max.x - placement.margin;
    let span_y = max.y - placement.margin;

    for _ in 0..placement.max_attempts {
        let origin = Point::new(
            placement.margin + rng.random::<f64>() * span_x,
            placement.margin + rng.random::<f64>() * span_y,
        );
        let candidate = Rect::at(origin, placement.card);
        if !occupied
            .iter()
            .any(|rect| overlap_ratio_exceeds(&candidate, rect, placement.threshold))
        {
            return FreePosition::Random(origin);
        }
    }

    FreePosition::Grid(placement.grid_position(occupied.len()))
}
