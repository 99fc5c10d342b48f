//! Layout store: the set of rectangles currently occupied on the canvas.
//!
//! Each slot is keyed by the card that owns it, so two cards that happen to
//! sit within a few pixels of each other can never evict one another's entry.
//! Coordinate matching survives as [`LayoutStore::remove_near`] for callers
//! that only know where a card is drawn.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use rand::Rng;

use crate::consts::{
    CARD_HEIGHT, CARD_WIDTH, DRAG_MARGIN, GRID_COLUMNS, GRID_GUTTER, MAX_PLACEMENT_ATTEMPTS, OVERLAP_THRESHOLD,
    PLACEMENT_MARGIN, REMOVE_TOLERANCE_PX,
};
use crate::doc::CardId;
use crate::geometry::{self, FreePosition, Placement, Point, Rect, Size, overlap_ratio_exceeds};

/// Default canvas container size used until the host reports its own.
pub const DEFAULT_CONTAINER: Size = Size { width: 1200.0, height: 800.0 };

/// Tunables for placement, collision, and drag clamping.
#[derive(Debug, Clone, Copy)]
pub struct LayoutConfig {
    /// Canvas container size.
    pub container: Size,
    /// Card size.
    pub card: Size,
    /// Inset used by the random placement search and the grid fallback.
    pub placement_margin: f64,
    /// Inset a dragged card is clamped to.
    pub drag_margin: f64,
    /// Collision threshold for [`overlap_ratio_exceeds`].
    pub overlap_threshold: f64,
    /// Random draws before the grid fallback.
    pub max_attempts: usize,
    /// Gap between grid cells.
    pub grid_gutter: f64,
    /// Grid columns.
    pub grid_columns: usize,
    /// Slop for [`LayoutStore::remove_near`].
    pub remove_tolerance: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER,
            card: Size::new(CARD_WIDTH, CARD_HEIGHT),
            placement_margin: PLACEMENT_MARGIN,
            drag_margin: DRAG_MARGIN,
            overlap_threshold: OVERLAP_THRESHOLD,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            grid_gutter: GRID_GUTTER,
            grid_columns: GRID_COLUMNS,
            remove_tolerance: REMOVE_TOLERANCE_PX,
        }
    }
}

impl LayoutConfig {
    fn placement(&self) -> Placement {
        Placement {
            container: self.container,
            card: self.card,
            margin: self.placement_margin,
            threshold: self.overlap_threshold,
            max_attempts: self.max_attempts,
            gutter: self.grid_gutter,
            columns: self.grid_columns,
        }
    }
}

/// One occupied rectangle and the card it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub card_id: CardId,
    pub rect: Rect,
}

/// Ordered set of occupied rectangles.
#[derive(Debug, Clone, Default)]
pub struct LayoutStore {
    config: LayoutConfig,
    slots: Vec<Slot>,
}

impl LayoutStore {
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self { config, slots: Vec::new() }
    }

    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Update the container bounds used by placement and clamping.
    pub fn set_container(&mut self, container: Size) {
        self.config.container = container;
    }

    /// Drop every slot. Called before a full re-render.
    pub fn reset(&mut self) {
        self.slots.clear();
    }

    /// Card rectangle with its origin at `origin`.
    #[must_use]
    pub fn rect_at(&self, origin: Point) -> Rect {
        Rect::at(origin, self.config.card)
    }

    /// Record the slot of a card that already has a saved position.
    pub fn register_existing(&mut self, card_id: CardId, origin: Point) -> Rect {
        let rect = self.rect_at(origin);
        self.commit(card_id, rect);
        rect
    }

    /// Find a free origin for `card_id` and record its slot.
    ///
    /// Occupancy grows by exactly one entry (any earlier slot for the same card
    /// is released first, so the search never collides with the card itself).
    pub fn place_new<R: Rng>(&mut self, card_id: CardId, rng: &mut R) -> Point {
        self.remove_card(card_id);
        let occupied: Vec<Rect> = self.slots.iter().map(|s| s.rect).collect();
        let found = geometry::find_free_position(rng, &self.config.placement(), &occupied);
        if let FreePosition::Grid(origin) = found {
            log::debug!("placement fell back to grid for card {card_id} at ({}, {})", origin.x, origin.y);
        }
        let origin = found.point();
        self.slots.push(Slot { card_id, rect: self.rect_at(origin) });
        origin
    }

    /// Remove the first slot whose left/top are both within `tolerance` of
    /// `origin`. No-op when nothing matches.
    pub fn remove_near(&mut self, origin: Point, tolerance: f64) -> Option<Slot> {
        let index = self.slots.iter().position(|s| {
            (s.rect.left - origin.x).abs() < tolerance && (s.rect.top - origin.y).abs() < tolerance
        })?;
        Some(self.slots.remove(index))
    }

    /// Remove the slot owned by `card_id`, if any.
    pub fn remove_card(&mut self, card_id: CardId) -> Option<Rect> {
        let index = self.slots.iter().position(|s| s.card_id == card_id)?;
        Some(self.slots.remove(index).rect)
    }

    /// Record `rect` as occupied by `card_id`, replacing the card's previous slot.
    pub fn commit(&mut self, card_id: CardId, rect: Rect) {
        self.remove_card(card_id);
        self.slots.push(Slot { card_id, rect });
    }

    /// Whether `rect` collides with any occupied slot.
    #[must_use]
    pub fn collides(&self, rect: &Rect) -> bool {
        self.slots
            .iter()
            .any(|s| overlap_ratio_exceeds(rect, &s.rect, self.config.overlap_threshold))
    }

    /// Clamp a card origin so the card stays `drag_margin` inside the container.
    #[must_use]
    pub fn clamp_origin(&self, origin: Point) -> Point {
        let margin = self.config.drag_margin;
        let max_x = (self.config.container.width - self.config.card.width - margin).max(margin);
        let max_y = (self.config.container.height - self.config.card.height - margin).max(margin);
        Point::new(origin.x.clamp(margin, max_x), origin.y.clamp(margin, max_y))
    }

    #[must_use]
    pub fn slot(&self, card_id: CardId) -> Option<&Slot> {
        self.slots.iter().find(|s| s.card_id == card_id)
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
