//! Document model: postcard records and the in-memory collection that owns them.
//!
//! Cards arrive from the repository without a position. The engine assigns one
//! the first time a card is rendered and updates it whenever a drag settles or
//! a click saves the on-screen origin. Positions stay on the client; the server
//! never sees them.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::consts::INITIAL_Z_INDEX;
use crate::geometry::Point;

/// Server-assigned card identifier.
pub type CardId = i64;

/// A postcard as stored in the collection and on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier assigned by the server.
    pub id: CardId,
    /// Headline shown on the envelope preview.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Who sent the card.
    pub sender: String,
    /// Who the card is addressed to.
    pub recipient: String,
    /// Display date, already formatted by the server.
    pub date: String,
    /// Canvas-local origin; `None` until the card is first placed.
    #[serde(default)]
    pub position: Option<Point>,
}

/// Ordered collection of cards. Order is render order.
#[derive(Debug, Default)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection.
    pub fn load(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Append a card and return its render index.
    pub fn push(&mut self, card: Card) -> usize {
        self.cards.push(card);
        self.cards.len() - 1
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    /// Record a new origin for a card. Returns false if the card is unknown.
    pub fn set_position(&mut self, id: CardId, origin: Point) -> bool {
        let Some(card) = self.get_mut(id) else {
            return false;
        };
        card.position = Some(origin);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Monotonic stacking counter shared by every card on the canvas.
#[derive(Debug, Clone, Copy)]
pub struct StackOrder {
    next: i64,
}

impl StackOrder {
    #[must_use]
    pub fn new() -> Self {
        Self { next: INITIAL_Z_INDEX }
    }

    /// Hand out the next (topmost) stacking value.
    pub fn raise(&mut self) -> i64 {
        let z = self.next;
        self.next += 1;
        z
    }

    /// The value the next [`raise`](Self::raise) will return.
    #[must_use]
    pub fn peek(&self) -> i64 {
        self.next
    }
}

impl Default for StackOrder {
    fn default() -> Self {
        Self::new()
    }
}
