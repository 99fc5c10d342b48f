//! A `Surface` that keeps drawn state in memory instead of a display.
//!
//! Used by the CLI to print a computed board, and by tests to observe what
//! the orchestrator drew.

#[cfg(test)]
#[path = "headless_test.rs"]
mod headless_test;

use std::collections::{BTreeMap, BTreeSet};

use canvas::doc::CardId;
use canvas::geometry::Point;
use canvas::render::{CardView, DetailView, Surface};

#[derive(Debug, Default)]
pub struct HeadlessSurface {
    views: BTreeMap<CardId, CardView>,
    opening: BTreeSet<CardId>,
    details: Vec<DetailView>,
    clears: usize,
}

impl HeadlessSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drawn cards ordered by id.
    pub fn views(&self) -> impl Iterator<Item = &CardView> {
        self.views.values()
    }

    #[must_use]
    pub fn view(&self, card_id: CardId) -> Option<&CardView> {
        self.views.get(&card_id)
    }

    #[must_use]
    pub fn is_opening(&self, card_id: CardId) -> bool {
        self.opening.contains(&card_id)
    }

    /// Every detail view shown so far, oldest first.
    #[must_use]
    pub fn details(&self) -> &[DetailView] {
        &self.details
    }

    /// How many times the board was wiped.
    #[must_use]
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Surface for HeadlessSurface {
    fn clear(&mut self) {
        self.views.clear();
        self.opening.clear();
        self.clears += 1;
    }

    fn mount(&mut self, view: &CardView) {
        self.views.insert(view.card_id, view.clone());
    }

    fn set_origin(&mut self, card_id: CardId, origin: Point) {
        if let Some(view) = self.views.get_mut(&card_id) {
            view.origin = origin;
        }
    }

    fn set_z_index(&mut self, card_id: CardId, z_index: i64) {
        if let Some(view) = self.views.get_mut(&card_id) {
            view.z_index = z_index;
        }
    }

    fn set_dragging(&mut self, card_id: CardId, dragging: bool) {
        if let Some(view) = self.views.get_mut(&card_id) {
            view.dragging = dragging;
        }
    }

    fn set_opening(&mut self, card_id: CardId, opening: bool) {
        if opening {
            self.opening.insert(card_id);
        } else {
            self.opening.remove(&card_id);
        }
    }

    fn show_detail(&mut self, detail: &DetailView) {
        self.details.push(detail.clone());
    }
}
