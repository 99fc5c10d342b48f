//! Card views: what each envelope looks like, and the surface that draws it.
//!
//! The engine never touches a drawing API directly. It keeps one [`CardView`]
//! per card and emits [`Action`]s; [`present`] replays those actions against a
//! [`Surface`] implemented by the host (DOM, terminal, test recorder).

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{ENTRANCE_STAGGER_MS, OPEN_ANIMATION_MS, OPEN_RESET_MS, POP_IN_DELAY_MS, POP_IN_DURATION_MS};
use crate::doc::{Card, CardId};
use crate::engine::Action;
use crate::geometry::Point;

/// How a card enters the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    /// Float in after `delay_ms`; staggered by render index.
    Staggered { delay_ms: u64 },
    /// Freshly created card: scale/rotate in from nothing.
    PopIn { delay_ms: u64, duration_ms: u64 },
}

impl Appearance {
    /// Entrance for the card rendered at `index` during a full render.
    #[must_use]
    pub fn staggered(index: usize) -> Self {
        let index = u64::try_from(index).unwrap_or(u64::MAX);
        Self::Staggered { delay_ms: index.saturating_mul(ENTRANCE_STAGGER_MS) }
    }

    /// Entrance for a card created in this session.
    #[must_use]
    pub fn pop_in() -> Self {
        Self::PopIn { delay_ms: POP_IN_DELAY_MS, duration_ms: POP_IN_DURATION_MS }
    }
}

/// Envelope opening animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvelopeState {
    /// At rest.
    #[default]
    Closed,
    /// Flap animating open since `started_ms`.
    Opening { started_ms: u64 },
    /// Detail view is showing; the envelope resets at `reset_ms`.
    Open { reset_ms: u64 },
}

/// Transition reported by [`EnvelopeState::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeEvent {
    /// The opening animation finished; show the detail view.
    ShowDetail,
    /// The envelope returned to rest.
    Reset,
}

impl EnvelopeState {
    /// Whether another open request must be ignored.
    #[must_use]
    pub fn is_busy(self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Start opening at `now_ms`. Returns false if already opening or open.
    pub fn begin(&mut self, now_ms: u64) -> bool {
        if self.is_busy() {
            return false;
        }
        *self = Self::Opening { started_ms: now_ms };
        true
    }

    /// Advance the animation to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> Option<EnvelopeEvent> {
        match *self {
            Self::Opening { started_ms } if now_ms >= started_ms + OPEN_ANIMATION_MS => {
                *self = Self::Open { reset_ms: started_ms + OPEN_ANIMATION_MS + OPEN_RESET_MS };
                Some(EnvelopeEvent::ShowDetail)
            }
            Self::Open { reset_ms } if now_ms >= reset_ms => {
                *self = Self::Closed;
                Some(EnvelopeEvent::Reset)
            }
            _ => None,
        }
    }
}

/// Everything needed to draw one envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub card_id: CardId,
    /// Canvas-local origin.
    pub origin: Point,
    /// Stacking order.
    pub z_index: i64,
    /// Whether the card is following the pointer.
    pub dragging: bool,
    /// Opening animation state.
    pub envelope: EnvelopeState,
    /// Entrance animation.
    pub appearance: Appearance,
    /// Address block: `Para: …` then `De: …`.
    pub address: [String; 2],
    pub title: String,
    pub preview: String,
    /// Footer sender line.
    pub from_line: String,
    pub date: String,
}

impl CardView {
    /// Build the view for `card` drawn at `origin`.
    #[must_use]
    pub fn new(card: &Card, origin: Point, z_index: i64, appearance: Appearance) -> Self {
        Self {
            card_id: card.id,
            origin,
            z_index,
            dragging: false,
            envelope: EnvelopeState::Closed,
            appearance,
            address: [format!("Para: {}", card.recipient), format!("De: {}", card.sender)],
            title: card.title.clone(),
            preview: card.message.clone(),
            from_line: format!("De: {}", card.sender),
            date: card.date.clone(),
        }
    }
}

/// Opened card contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub card_id: CardId,
    pub title: String,
    /// `{date} - De: {sender} Para: {recipient}`.
    pub header: String,
    pub body: String,
}

impl DetailView {
    #[must_use]
    pub fn new(card: &Card) -> Self {
        Self {
            card_id: card.id,
            title: card.title.clone(),
            header: format!("{} - De: {} Para: {}", card.date, card.sender, card.recipient),
            body: card.message.clone(),
        }
    }
}

/// A host drawing target for card views.
pub trait Surface {
    /// Remove every drawn card.
    fn clear(&mut self);
    /// Draw a card for the first time.
    fn mount(&mut self, view: &CardView);
    /// Move a drawn card.
    fn set_origin(&mut self, card_id: CardId, origin: Point);
    /// Change a drawn card's stacking order.
    fn set_z_index(&mut self, card_id: CardId, z_index: i64);
    /// Toggle the dragging look.
    fn set_dragging(&mut self, card_id: CardId, dragging: bool);
    /// Toggle the opening animation.
    fn set_opening(&mut self, card_id: CardId, opening: bool);
    /// Show the opened card.
    fn show_detail(&mut self, detail: &DetailView);
}

/// Replay engine actions onto `surface`.
pub fn present<S: Surface + ?Sized>(surface: &mut S, actions: &[Action]) {
    for action in actions {
        match action {
            Action::Cleared => surface.clear(),
            Action::Mounted(view) => surface.mount(view),
            Action::Raised { id, z_index } => surface.set_z_index(*id, *z_index),
            Action::DragStarted { id } => surface.set_dragging(*id, true),
            Action::Moved { id, origin } => surface.set_origin(*id, *origin),
            Action::DragEnded { id, origin, .. } => {
                surface.set_dragging(*id, false);
                surface.set_origin(*id, *origin);
            }
            Action::Clicked { .. } => {}
            Action::OpenStarted { id } => surface.set_opening(*id, true),
            Action::ShowDetail(detail) => surface.show_detail(detail),
            Action::EnvelopeReset { id } => surface.set_opening(*id, false),
        }
    }
}
