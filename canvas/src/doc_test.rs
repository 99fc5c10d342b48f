use serde_json::json;

use super::*;

fn card(id: CardId) -> Card {
    Card {
        id,
        title: format!("title {id}"),
        message: "hola".into(),
        sender: "Ana".into(),
        recipient: "Luis".into(),
        date: "17/10/2026".into(),
        position: None,
    }
}

// =============================================================
// Card serde
// =============================================================

#[test]
fn card_deserializes_null_position() {
    let value = json!({
        "id": 4,
        "title": "Hi",
        "message": "There",
        "sender": "Anónimo",
        "recipient": "Anónimo",
        "date": "1/2/2026",
        "position": null,
    });
    let card: Card = serde_json::from_value(value).unwrap();
    assert_eq!(card.id, 4);
    assert_eq!(card.sender, "Anónimo");
    assert!(card.position.is_none());
}

#[test]
fn card_deserializes_missing_position() {
    let value = json!({
        "id": 1,
        "title": "a",
        "message": "b",
        "sender": "c",
        "recipient": "d",
        "date": "e",
    });
    let card: Card = serde_json::from_value(value).unwrap();
    assert!(card.position.is_none());
}

#[test]
fn card_serializes_position_as_xy() {
    let mut c = card(2);
    c.position = Some(Point::new(10.0, 30.0));
    let value = serde_json::to_value(&c).unwrap();
    assert_eq!(value["position"], json!({ "x": 10.0, "y": 30.0 }));
}

// =============================================================
// CardStore
// =============================================================

#[test]
fn store_load_replaces_contents() {
    let mut store = CardStore::new();
    store.load(vec![card(1), card(2)]);
    store.load(vec![card(3)]);
    assert_eq!(store.ids(), vec![3]);
}

#[test]
fn store_push_returns_render_index() {
    let mut store = CardStore::new();
    assert_eq!(store.push(card(1)), 0);
    assert_eq!(store.push(card(2)), 1);
    assert_eq!(store.len(), 2);
}

#[test]
fn store_set_position_updates_known_card() {
    let mut store = CardStore::new();
    store.push(card(5));
    assert!(store.set_position(5, Point::new(1.0, 2.0)));
    assert_eq!(store.get(5).and_then(|c| c.position), Some(Point::new(1.0, 2.0)));
}

#[test]
fn store_set_position_unknown_card_is_false() {
    let mut store = CardStore::new();
    assert!(!store.set_position(9, Point::new(1.0, 2.0)));
    assert!(store.is_empty());
}

// =============================================================
// StackOrder
// =============================================================

#[test]
fn stack_order_starts_at_initial_value() {
    let mut stack = StackOrder::new();
    assert_eq!(stack.raise(), INITIAL_Z_INDEX);
    assert_eq!(stack.raise(), INITIAL_Z_INDEX + 1);
    assert_eq!(stack.peek(), INITIAL_Z_INDEX + 2);
}
