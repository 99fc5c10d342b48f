//! Orchestrator: loads and creates cards through a [`CardRepository`],
//! feeds them to the canvas engine, and forwards engine actions to a
//! [`Surface`].
//!
//! LIFECYCLE
//! =========
//! `load` replaces the board with the server's list; a failed fetch is
//! logged and leaves an empty, usable board. `create` validates the form,
//! waits for the server to confirm, then adds the returned card. Nothing
//! is added locally before the server answers.
//!
//! Time is passed in as `now_ms` so animations and notifications advance
//! only through `pointer_up` and `tick`.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use canvas::doc::CardId;
use canvas::engine::{Action, EngineCore};
use canvas::geometry::Size;
use canvas::gesture::GestureError;
use canvas::input::{Key, PointerInput};
use canvas::render::{Surface, present};
use thiserror::Error;

use crate::net::api::CardRepository;
use crate::net::error::RepositoryError;
use crate::state::form::{CardForm, FormError};
use crate::state::notification::{NoticeKind, Notification, Notifications};
use crate::state::overlay::Overlays;

/// Shown after a card is saved.
pub const CARD_SENT: &str = "¡Carta enviada exitosamente!";
const SAVE_FAILED_UNREACHABLE: &str =
    "Error al guardar la carta. Servidor no disponible. Asegúrate de que el servidor esté en ejecución.";
const SAVE_FAILED: &str = "Error al guardar la carta. Por favor, inténtalo de nuevo.";

/// Why a card could not be created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CreateError {
    /// Message for the person filling in the form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Form(e) => e.to_string(),
            Self::Repository(e) if e.is_connectivity() => SAVE_FAILED_UNREACHABLE.to_owned(),
            Self::Repository(_) => SAVE_FAILED.to_owned(),
        }
    }
}

/// The postcard board: engine, surface, repository, and UI chrome.
pub struct PostcardApp<R, S> {
    repo: R,
    surface: S,
    engine: EngineCore,
    overlays: Overlays,
    notifications: Notifications,
}

impl<R: CardRepository, S: Surface> PostcardApp<R, S> {
    #[must_use]
    pub fn new(repo: R, surface: S, engine: EngineCore) -> Self {
        Self { repo, surface, engine, overlays: Overlays::default(), notifications: Notifications::new() }
    }

    pub fn set_container(&mut self, container: Size) {
        self.engine.set_container(container);
    }

    // =============================================================
    // Data flow
    // =============================================================

    /// Fetch every card and redraw the board. Returns how many were drawn.
    pub async fn load(&mut self) -> usize {
        let cards = match self.repo.list().await {
            Ok(cards) => cards,
            Err(e) => {
                log::warn!("card list unavailable, showing an empty board: {e}");
                Vec::new()
            }
        };
        let actions = self.engine.load_cards(cards);
        self.apply(&actions);
        let count = self.engine.card_count();
        log::info!("rendered {count} cards");
        count
    }

    /// Submit the create form.
    ///
    /// On success the card is placed, the form is cleared and closed, and a success
    /// notification is shown. Repository failures are also reported as a
    /// notification; form errors are only returned.
    ///
    /// # Errors
    ///
    /// [`CreateError::Form`] when title or message is blank, otherwise
    /// [`CreateError::Repository`] with the server's failure.
    pub async fn create(&mut self, form: &mut CardForm, now_ms: u64) -> Result<CardId, CreateError> {
        let new_card = form.validate()?;
        match self.repo.create(&new_card).await {
            Ok(mut card) => {
                card.position = None;
                let id = card.id;
                let actions = self.engine.add_card(card);
                self.apply(&actions);
                form.clear();
                self.overlays.close_create_form();
                self.notifications.push(NoticeKind::Success, CARD_SENT, now_ms);
                log::info!("created card {id}");
                Ok(id)
            }
            Err(e) => {
                log::error!("card create failed: {e}");
                let error = CreateError::from(e);
                self.notifications.push(NoticeKind::Error, error.user_message(), now_ms);
                Err(error)
            }
        }
    }

    // =============================================================
    // Input
    // =============================================================

    /// # Errors
    ///
    /// Propagates [`GestureError`] from the engine; the board is unchanged.
    pub fn pointer_down(&mut self, id: CardId, input: PointerInput) -> Result<(), GestureError> {
        let actions = self.engine.pointer_down(id, input)?;
        self.apply(&actions);
        Ok(())
    }

    pub fn pointer_move(&mut self, input: PointerInput) {
        let actions = self.engine.pointer_move(input);
        self.apply(&actions);
    }

    pub fn pointer_up(&mut self, now_ms: u64) {
        let actions = self.engine.pointer_up(now_ms);
        self.apply(&actions);
    }

    /// Escape closes every overlay. Returns whether the key was handled.
    pub fn key_down(&mut self, key: &Key) -> bool {
        if !key.is_escape() {
            return false;
        }
        self.overlays.close_all();
        true
    }

    pub fn open_create_form(&mut self) {
        self.overlays.open_create_form();
    }

    pub fn close_create_form(&mut self) {
        self.overlays.close_create_form();
    }

    /// Advance animations and notifications. Returns notifications that expired.
    pub fn tick(&mut self, now_ms: u64) -> Vec<Notification> {
        let actions = self.engine.tick(now_ms);
        self.apply(&actions);
        self.notifications.tick(now_ms)
    }

    fn apply(&mut self, actions: &[Action]) {
        for action in actions {
            if let Action::ShowDetail(detail) = action {
                self.overlays.show_detail(detail.clone());
            }
        }
        present(&mut self.surface, actions);
    }

    // =============================================================
    // Queries
    // =============================================================

    #[must_use]
    pub fn engine(&self) -> &EngineCore {
        &self.engine
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repo
    }

    #[must_use]
    pub fn overlays(&self) -> &Overlays {
        &self.overlays
    }

    #[must_use]
    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }
}
