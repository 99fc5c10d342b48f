use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::doc::{Card, CardId, CardStore, StackOrder};
use crate::geometry::{Point, Size};
use crate::gesture::{DragUpdate, GestureController, GestureError, GesturePhase, Release};
use crate::input::PointerInput;
use crate::layout::{LayoutConfig, LayoutStore};
use crate::render::{Appearance, CardView, DetailView, EnvelopeEvent};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from engine calls for the host to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Every card was removed ahead of a full render.
    Cleared,
    /// A card was drawn for the first time.
    Mounted(CardView),
    /// A card moved to the top of the stack.
    Raised { id: CardId, z_index: i64 },
    /// A card began following the pointer.
    DragStarted { id: CardId },
    /// A dragged card moved.
    Moved { id: CardId, origin: Point },
    /// A drag finished; `relocated` is set when the drop spot collided.
    DragEnded { id: CardId, origin: Point, relocated: bool },
    /// A press resolved to a click; the card's position was saved.
    Clicked { id: CardId, origin: Point },
    /// The envelope began opening.
    OpenStarted { id: CardId },
    /// The opening animation finished.
    ShowDetail(DetailView),
    /// The envelope returned to rest.
    EnvelopeReset { id: CardId },
}

/// Core engine state: every card, its slot, its view, and the active gesture.
///
/// One dispatcher serves all cards; pointer events name the card they hit
/// instead of each card carrying its own listeners.
pub struct EngineCore {
    cards: CardStore,
    layout: LayoutStore,
    gestures: GestureController,
    stack: StackOrder,
    views: HashMap<CardId, CardView>,
    rng: StdRng,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl EngineCore {
    /// Engine seeded from the operating system.
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Engine with an explicit random source.
    #[must_use]
    pub fn with_rng(config: LayoutConfig, rng: StdRng) -> Self {
        Self {
            cards: CardStore::new(),
            layout: LayoutStore::new(config),
            gestures: GestureController::default(),
            stack: StackOrder::new(),
            views: HashMap::new(),
            rng,
        }
    }

    /// Update the canvas container size.
    pub fn set_container(&mut self, container: Size) {
        self.layout.set_container(container);
    }

    // --- Data inputs ---

    /// Replace every card and render the whole canvas from scratch.
    ///
    /// Cards with a saved position reclaim it; the rest are placed by the
    /// free-position search and the chosen origin is stored on the card.
    pub fn load_cards(&mut self, cards: Vec<Card>) -> Vec<Action> {
        if let Some(session) = self.gestures.cancel() {
            log::debug!("dropping drag session for card {} on reload", session.card_id);
        }
        self.layout.reset();
        self.views.clear();
        self.cards.load(cards);

        let mut actions = vec![Action::Cleared];
        for (index, id) in self.cards.ids().into_iter().enumerate() {
            actions.extend(self.render_card(id, Appearance::staggered(index)));
        }
        actions
    }

    /// Append a newly created card and render it alone.
    pub fn add_card(&mut self, card: Card) -> Vec<Action> {
        let id = card.id;
        self.cards.push(card);
        self.render_card(id, Appearance::pop_in()).into_iter().collect()
    }

    fn render_card(&mut self, id: CardId, appearance: Appearance) -> Option<Action> {
        let origin = match self.cards.get(id)?.position {
            Some(origin) => {
                self.layout.register_existing(id, origin);
                origin
            }
            None => {
                let origin = self.layout.place_new(id, &mut self.rng);
                self.cards.set_position(id, origin);
                origin
            }
        };
        let z_index = self.stack.raise();
        let view = CardView::new(self.cards.get(id)?, origin, z_index, appearance);
        self.views.insert(id, view.clone());
        Some(Action::Mounted(view))
    }

    // --- Input events ---

    /// Press on card `id`. Raises the card to the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::UnknownCard`] if `id` is not rendered, or
    /// [`GestureError::SessionActive`] while another card is held.
    pub fn pointer_down(&mut self, id: CardId, input: PointerInput) -> Result<Vec<Action>, GestureError> {
        let Some(view) = self.views.get_mut(&id) else {
            return Err(GestureError::UnknownCard(id));
        };
        self.gestures.pointer_down(id, input, view.origin)?;
        view.z_index = self.stack.raise();
        Ok(vec![Action::Raised { id, z_index: view.z_index }])
    }

    /// Pointer moved anywhere on the page.
    pub fn pointer_move(&mut self, input: PointerInput) -> Vec<Action> {
        let updates = self.gestures.pointer_move(input, &mut self.layout);
        updates
            .into_iter()
            .map(|update| match update {
                DragUpdate::Started { card_id } => {
                    if let Some(view) = self.views.get_mut(&card_id) {
                        view.dragging = true;
                    }
                    Action::DragStarted { id: card_id }
                }
                DragUpdate::Moved { card_id, origin } => {
                    if let Some(view) = self.views.get_mut(&card_id) {
                        view.origin = origin;
                    }
                    Action::Moved { id: card_id, origin }
                }
            })
            .collect()
    }

    /// Pointer released at `now_ms`. A click starts opening the envelope.
    pub fn pointer_up(&mut self, now_ms: u64) -> Vec<Action> {
        let Some(release) = self.gestures.pointer_up(&mut self.layout, &mut self.rng) else {
            return Vec::new();
        };
        let id = release.card_id();
        let origin = release.origin();
        self.cards.set_position(id, origin);
        if let Some(view) = self.views.get_mut(&id) {
            view.dragging = false;
            view.origin = origin;
        }

        match release {
            Release::Click { .. } => {
                let mut actions = vec![Action::Clicked { id, origin }];
                actions.extend(self.open_card(id, now_ms));
                actions
            }
            Release::Dropped { .. } => vec![Action::DragEnded { id, origin, relocated: false }],
            Release::Relocated { .. } => {
                log::debug!("card {id} dropped on an occupied spot, relocated to ({}, {})", origin.x, origin.y);
                vec![Action::DragEnded { id, origin, relocated: true }]
            }
        }
    }

    /// Start opening card `id`. Ignored while its envelope is already busy.
    pub fn open_card(&mut self, id: CardId, now_ms: u64) -> Vec<Action> {
        let Some(view) = self.views.get_mut(&id) else {
            return Vec::new();
        };
        if !view.envelope.begin(now_ms) {
            log::debug!("card {id} is already opening");
            return Vec::new();
        }
        vec![Action::OpenStarted { id }]
    }

    /// Advance envelope animations to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> Vec<Action> {
        let mut ids: Vec<CardId> = self.views.keys().copied().collect();
        ids.sort_unstable();

        let mut actions = Vec::new();
        for id in ids {
            let Some(view) = self.views.get_mut(&id) else {
                continue;
            };
            match view.envelope.tick(now_ms) {
                Some(EnvelopeEvent::ShowDetail) => {
                    if let Some(card) = self.cards.get(id) {
                        actions.push(Action::ShowDetail(DetailView::new(card)));
                    }
                }
                Some(EnvelopeEvent::Reset) => actions.push(Action::EnvelopeReset { id }),
                None => {}
            }
        }
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    /// All cards in render order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn view(&self, id: CardId) -> Option<&CardView> {
        self.views.get(&id)
    }

    #[must_use]
    pub fn layout(&self) -> &LayoutStore {
        &self.layout
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.gestures.phase()
    }
}
