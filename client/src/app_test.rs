use std::sync::Mutex;

use async_trait::async_trait;
use canvas::doc::Card;
use canvas::geometry::{Point, Rect, overlap_ratio_exceeds};
use canvas::layout::LayoutConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::headless::HeadlessSurface;
use crate::net::types::NewCard;

// =============================================================
// Fake repository
// =============================================================

#[derive(Default)]
struct MockRepo {
    cards: Vec<Card>,
    list_error: Option<RepositoryError>,
    create_error: Option<RepositoryError>,
    creates: Mutex<Vec<NewCard>>,
}

impl MockRepo {
    fn with_cards(cards: Vec<Card>) -> Self {
        Self { cards, ..Self::default() }
    }

    fn create_calls(&self) -> Vec<NewCard> {
        self.creates.lock().unwrap().clone()
    }
}

#[async_trait]
impl CardRepository for MockRepo {
    async fn list(&self) -> Result<Vec<Card>, RepositoryError> {
        match &self.list_error {
            Some(e) => Err(e.clone()),
            None => Ok(self.cards.clone()),
        }
    }

    async fn create(&self, card: &NewCard) -> Result<Card, RepositoryError> {
        self.creates.lock().unwrap().push(card.clone());
        if let Some(e) = &self.create_error {
            return Err(e.clone());
        }
        Ok(Card {
            id: 1_000,
            title: card.title.clone(),
            message: card.message.clone(),
            sender: card.sender.clone(),
            recipient: card.recipient.clone(),
            date: "17/10/2026".into(),
            position: Some(Point::new(1.0, 1.0)),
        })
    }

    async fn delete(&self, _id: CardId) -> Result<bool, RepositoryError> {
        Ok(true)
    }
}

fn card(id: CardId) -> Card {
    Card {
        id,
        title: format!("Carta {id}"),
        message: "Saludos".into(),
        sender: "Ana".into(),
        recipient: "Luis".into(),
        date: "1/10/2026".into(),
        position: None,
    }
}

fn app(repo: MockRepo) -> PostcardApp<MockRepo, HeadlessSurface> {
    let engine = EngineCore::with_rng(LayoutConfig::default(), StdRng::seed_from_u64(11));
    PostcardApp::new(repo, HeadlessSurface::new(), engine)
}

fn card_rect(app: &PostcardApp<MockRepo, HeadlessSurface>, id: CardId) -> Rect {
    app.engine().layout().slot(id).unwrap().rect
}

// =============================================================
// Load
// =============================================================

#[tokio::test]
async fn load_renders_every_card() {
    let mut app = app(MockRepo::with_cards(vec![card(1), card(2), card(3)]));
    assert_eq!(app.load().await, 3);
    assert_eq!(app.surface().views().count(), 3);
    assert_eq!(app.surface().clears(), 1);
    assert_eq!(app.engine().layout().len(), 3);
    for id in 1..=3 {
        assert!(app.engine().card(id).unwrap().position.is_some());
    }
}

#[tokio::test]
async fn load_keeps_saved_positions() {
    let mut saved = card(5);
    saved.position = Some(Point::new(400.0, 300.0));
    let mut app = app(MockRepo::with_cards(vec![saved]));
    app.load().await;
    assert_eq!(app.surface().view(5).unwrap().origin, Point::new(400.0, 300.0));
}

#[tokio::test]
async fn load_failure_leaves_empty_usable_board() {
    let repo = MockRepo { list_error: Some(RepositoryError::Connectivity("refused".into())), ..MockRepo::default() };
    let mut app = app(repo);
    assert_eq!(app.load().await, 0);
    assert_eq!(app.surface().views().count(), 0);

    let id = app.create(&mut CardForm::new("Hi", "There", "", ""), 0).await.unwrap();
    assert!(app.surface().view(id).is_some());
}

// =============================================================
// Create
// =============================================================

#[tokio::test]
async fn create_sends_placeholders_and_places_without_overlap() {
    let mut app = app(MockRepo::with_cards(vec![card(1), card(2), card(3)]));
    app.load().await;
    let existing: Vec<Rect> = (1..=3).map(|id| card_rect(&app, id)).collect();

    app.open_create_form();
    let id = app.create(&mut CardForm::new("Hi", "There", "", ""), 500).await.unwrap();

    let calls = app.repository().create_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        NewCard { title: "Hi".into(), message: "There".into(), sender: "Anónimo".into(), recipient: "Anónimo".into() }
    );

    let placed = card_rect(&app, id);
    for rect in &existing {
        assert!(!overlap_ratio_exceeds(&placed, rect, 0.5));
    }
    assert_ne!(placed.origin(), Point::new(1.0, 1.0), "server position is ignored");
    assert!(!app.overlays().create_form_open());
    assert_eq!(app.notifications().latest().map(|n| n.text.as_str()), Some(CARD_SENT));
}

#[tokio::test]
async fn form_is_cleared_only_after_success() {
    let repo = MockRepo { create_error: Some(RepositoryError::Connectivity("refused".into())), ..MockRepo::default() };
    let mut failing = app(repo);
    let mut form = CardForm::new("Hi", "There", "Ana", "Luis");
    failing.create(&mut form, 0).await.unwrap_err();
    assert_eq!(form, CardForm::new("Hi", "There", "Ana", "Luis"), "kept for a retry");

    let mut working = app(MockRepo::default());
    working.create(&mut form, 0).await.unwrap();
    assert_eq!(form, CardForm::default());
}

#[tokio::test]
async fn blank_title_never_reaches_repository() {
    let mut app = app(MockRepo::default());
    let err = app.create(&mut CardForm::new("  ", "body", "", ""), 0).await.unwrap_err();
    assert_eq!(err, CreateError::Form(FormError::MissingTitle));
    assert!(app.repository().create_calls().is_empty());
    assert!(app.notifications().active().is_empty());
}

#[tokio::test]
async fn unreachable_server_gets_its_own_message() {
    let repo = MockRepo { create_error: Some(RepositoryError::Connectivity("refused".into())), ..MockRepo::default() };
    let mut app = app(repo);
    app.open_create_form();
    let err = app.create(&mut CardForm::new("Hi", "There", "", ""), 0).await.unwrap_err();

    assert_eq!(err.user_message(), SAVE_FAILED_UNREACHABLE);
    assert_eq!(app.engine().card_count(), 0, "no local card on failure");
    assert!(app.overlays().create_form_open());
    let note = app.notifications().latest().unwrap();
    assert_eq!(note.kind, NoticeKind::Error);
    assert_eq!(note.text, SAVE_FAILED_UNREACHABLE);
}

#[tokio::test]
async fn other_failures_get_generic_message() {
    let repo = MockRepo {
        create_error: Some(RepositoryError::Server { status: Some(500), message: "Error al crear carta".into() }),
        ..MockRepo::default()
    };
    let mut app = app(repo);
    let err = app.create(&mut CardForm::new("Hi", "There", "", ""), 0).await.unwrap_err();
    assert_eq!(err.user_message(), SAVE_FAILED);
    assert_eq!(app.engine().card_count(), 0);
}

#[tokio::test]
async fn success_notification_expires_after_three_seconds() {
    let mut app = app(MockRepo::default());
    app.create(&mut CardForm::new("Hi", "There", "", ""), 1_000).await.unwrap();
    assert!(app.tick(3_999).is_empty());
    assert_eq!(app.tick(4_000).len(), 1);
    assert!(app.notifications().active().is_empty());
}

// =============================================================
// Gestures and overlays
// =============================================================

#[tokio::test]
async fn click_opens_detail_after_animation() {
    let mut app = app(MockRepo::with_cards(vec![card(1)]));
    app.load().await;
    let origin = app.surface().view(1).unwrap().origin;

    app.pointer_down(1, PointerInput::mouse(origin.x + 10.0, origin.y + 10.0)).unwrap();
    app.pointer_up(0);
    assert!(app.surface().is_opening(1));
    assert_eq!(app.engine().layout().len(), 1);
    assert!(app.overlays().detail().is_none());

    app.tick(800);
    let detail = app.overlays().detail().unwrap();
    assert_eq!(detail.header, "1/10/2026 - De: Ana Para: Luis");
    assert_eq!(app.surface().details().len(), 1);

    app.tick(1_300);
    assert!(!app.surface().is_opening(1));
}

#[tokio::test]
async fn drag_moves_card_without_opening() {
    let mut app = app(MockRepo::with_cards(vec![card(1)]));
    app.load().await;
    let origin = app.surface().view(1).unwrap().origin;
    let grab = Point::new(origin.x + 5.0, origin.y + 5.0);

    app.pointer_down(1, PointerInput::mouse(grab.x, grab.y)).unwrap();
    app.pointer_move(PointerInput::mouse(grab.x + 40.0, grab.y + 30.0));
    assert!(app.surface().view(1).unwrap().dragging);
    app.pointer_up(0);

    let view = app.surface().view(1).unwrap();
    assert!(!view.dragging);
    assert!(!app.surface().is_opening(1));
    assert_eq!(app.engine().card(1).unwrap().position, Some(view.origin));
    app.tick(5_000);
    assert!(app.overlays().detail().is_none());
}

#[tokio::test]
async fn second_press_is_rejected() {
    let mut app = app(MockRepo::with_cards(vec![card(1), card(2)]));
    app.load().await;
    app.pointer_down(1, PointerInput::mouse(30.0, 30.0)).unwrap();
    assert_eq!(app.pointer_down(2, PointerInput::mouse(30.0, 30.0)), Err(GestureError::SessionActive(1)));
}

#[tokio::test]
async fn escape_closes_overlays() {
    let mut app = app(MockRepo::default());
    app.open_create_form();
    assert!(!app.key_down(&Key("Enter".into())));
    assert!(app.overlays().create_form_open());
    assert!(app.key_down(&Key("Escape".into())));
    assert!(!app.overlays().any_open());
}
