use super::*;

fn new_card() -> NewCard {
    NewCard {
        title: "Hola".into(),
        message: "Desde Lima".into(),
        sender: "Ana".into(),
        recipient: "Luis".into(),
    }
}

#[test]
fn envelope_decodes_list_payload() {
    let json = r#"{"success":true,"data":[{"id":3,"title":"T","message":"M","sender":"S","recipient":"R","date":"17/10/2026","position":null}]}"#;
    let envelope: ApiEnvelope<Vec<Card>> = serde_json::from_str(json).unwrap();
    assert!(envelope.success);
    let cards = envelope.data.unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].id, 3);
    assert!(cards[0].position.is_none());
}

#[test]
fn envelope_decodes_error_without_data() {
    let json = r#"{"success":false,"error":"Todos los campos son requeridos"}"#;
    let envelope: ApiEnvelope<Card> = serde_json::from_str(json).unwrap();
    assert!(!envelope.success);
    assert!(envelope.data.is_none());
    assert_eq!(envelope.error.as_deref(), Some("Todos los campos son requeridos"));
}

#[test]
fn envelope_omits_absent_fields_when_serialized() {
    let envelope: ApiEnvelope<()> = ApiEnvelope { success: true, data: None, error: None, message: Some("ok".into()) };
    let json = serde_json::to_string(&envelope).unwrap();
    assert_eq!(json, r#"{"success":true,"message":"ok"}"#);
}

#[test]
fn missing_field_reports_first_blank() {
    assert_eq!(new_card().missing_field(), None);

    let mut card = new_card();
    card.sender = "   ".into();
    card.recipient = String::new();
    assert_eq!(card.missing_field(), Some("sender"));
}

fn decode_any<T: serde::de::DeserializeOwned>(json: &str) -> ApiEnvelope<T> {
    serde_json::from_str(json).unwrap()
}

#[test]
fn envelope_decodes_for_any_payload_type() {
    let envelope: ApiEnvelope<Card> = decode_any(r#"{"success":false,"error":"Carta no encontrada"}"#);
    assert!(envelope.data.is_none());
    let envelope: ApiEnvelope<Vec<Card>> = decode_any(r#"{"success":true,"data":[]}"#);
    assert_eq!(envelope.data.map(|cards| cards.len()), Some(0));
}
