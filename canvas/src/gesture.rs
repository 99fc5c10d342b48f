//! Gesture controller: turns pointer down/move/up into a drag or a click.
//!
//! ```text
//! Idle --down--> Pressed --move > threshold--> Dragging --up--> Idle (drop)
//!                   \--up---------------------------------> Idle (click)
//! ```
//!
//! A press only becomes a drag once the pointer has travelled more than the
//! threshold from where it went down. The card's occupancy slot is released on
//! that transition, before the card is drawn anywhere new, and a slot is
//! committed again on release once the final origin is known. Exactly one
//! session can be active; a second pointer-down is rejected.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use rand::Rng;

use crate::consts::DRAG_THRESHOLD_PX;
use crate::doc::CardId;
use crate::geometry::Point;
use crate::input::{PointerInput, PointerSource};
use crate::layout::LayoutStore;

/// Errors raised by gesture dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GestureError {
    /// A pointer-down arrived while another card is still held.
    #[error("drag session already active for card {0}")]
    SessionActive(CardId),
    /// The pointer-down named a card that is not on the canvas.
    #[error("unknown card: {0}")]
    UnknownCard(CardId),
}

/// Where the state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// No card is held.
    Idle,
    /// A card is held but the pointer has not left the threshold radius.
    Pressed,
    /// The held card follows the pointer.
    Dragging,
}

/// Ephemeral state between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Card being held.
    pub card_id: CardId,
    /// Device that started the gesture.
    pub source: PointerSource,
    /// Pointer position at pointer-down.
    pub start: Point,
    /// Pointer position relative to the card origin at pointer-down.
    pub offset: Point,
    /// Card origin at pointer-down.
    pub origin: Point,
    /// Card origin as currently drawn.
    pub current: Point,
    /// Whether the threshold has been crossed.
    pub moved: bool,
}

/// Visual updates produced while the pointer moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragUpdate {
    /// The threshold was crossed; the card enters its dragging look.
    Started { card_id: CardId },
    /// The card is now drawn at `origin`.
    Moved { card_id: CardId, origin: Point },
}

/// How a gesture ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// The pointer never left the threshold radius.
    Click { card_id: CardId, origin: Point },
    /// The card was dropped on a spot that does not collide.
    Dropped { card_id: CardId, origin: Point },
    /// The drop spot collided; the card was moved to a fresh free position.
    Relocated { card_id: CardId, origin: Point },
}

impl Release {
    #[must_use]
    pub fn card_id(&self) -> CardId {
        match *self {
            Self::Click { card_id, .. } | Self::Dropped { card_id, .. } | Self::Relocated { card_id, .. } => card_id,
        }
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        match *self {
            Self::Click { origin, .. } | Self::Dropped { origin, .. } | Self::Relocated { origin, .. } => origin,
        }
    }
}

/// The drag/click state machine.
#[derive(Debug, Clone)]
pub struct GestureController {
    session: Option<DragSession>,
    threshold: f64,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD_PX)
    }
}

impl GestureController {
    /// Controller that starts a drag after `threshold` pixels of travel.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { session: None, threshold }
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self.session {
            None => GesturePhase::Idle,
            Some(DragSession { moved: false, .. }) => GesturePhase::Pressed,
            Some(DragSession { moved: true, .. }) => GesturePhase::Dragging,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Begin holding `card_id`, currently drawn at `card_origin`.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::SessionActive`] if another session is open.
    pub fn pointer_down(&mut self, card_id: CardId, input: PointerInput, card_origin: Point) -> Result<(), GestureError> {
        if let Some(active) = &self.session {
            return Err(GestureError::SessionActive(active.card_id));
        }
        self.session = Some(DragSession {
            card_id,
            source: input.source,
            start: input.position,
            offset: input.position.sub(card_origin),
            origin: card_origin,
            current: card_origin,
            moved: false,
        });
        Ok(())
    }

    /// Track pointer movement. Releases the card's occupancy slot the first
    /// time the threshold is crossed, then reports the clamped origin.
    pub fn pointer_move(&mut self, input: PointerInput, layout: &mut LayoutStore) -> Vec<DragUpdate> {
        let threshold = self.threshold;
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };

        let mut updates = Vec::new();
        if !session.moved {
            if input.position.distance(session.start) <= threshold {
                return updates;
            }
            session.moved = true;
            layout.remove_card(session.card_id);
            updates.push(DragUpdate::Started { card_id: session.card_id });
        }

        let origin = layout.clamp_origin(input.position.sub(session.offset));
        session.current = origin;
        updates.push(DragUpdate::Moved { card_id: session.card_id, origin });
        updates
    }

    /// Finish the gesture. Returns `None` when no session is active.
    ///
    /// A drag commits the drop rectangle unless it collides with another slot,
    /// in which case the card is relocated through the placement search. A
    /// click recommits the card's unchanged rectangle.
    pub fn pointer_up<R: Rng>(&mut self, layout: &mut LayoutStore, rng: &mut R) -> Option<Release> {
        let session = self.session.take()?;
        let card_id = session.card_id;

        if !session.moved {
            layout.commit(card_id, layout.rect_at(session.origin));
            return Some(Release::Click { card_id, origin: session.origin });
        }

        let dropped = layout.rect_at(session.current);
        if layout.collides(&dropped) {
            let origin = layout.place_new(card_id, rng);
            return Some(Release::Relocated { card_id, origin });
        }

        layout.commit(card_id, dropped);
        Some(Release::Dropped { card_id, origin: session.current })
    }

    /// Abandon the active session without touching occupancy.
    pub fn cancel(&mut self) -> Option<DragSession> {
        self.session.take()
    }
}
