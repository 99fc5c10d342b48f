use super::*;
use crate::state::test_helpers;

fn body(title: &str, message: &str, sender: &str, recipient: &str) -> NewCardBody {
    NewCardBody {
        title: Some(title.into()),
        message: Some(message.into()),
        sender: Some(sender.into()),
        recipient: Some(recipient.into()),
    }
}

#[test]
fn card_error_to_status_maps_each_variant() {
    assert_eq!(card_error_to_status(&CardError::Validation("x")), StatusCode::BAD_REQUEST);
    assert_eq!(card_error_to_status(&CardError::NotFound(3)), StatusCode::NOT_FOUND);
    assert_eq!(
        card_error_to_status(&CardError::Database(sqlx::Error::RowNotFound)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn envelope_skips_absent_fields() {
    let json = serde_json::to_value(ApiResponse::<()>::failure(NOT_FOUND)).unwrap();
    assert_eq!(json, serde_json::json!({ "success": false, "error": "Carta no encontrada" }));

    let json = serde_json::to_value(ApiResponse::<()>::message(DELETED)).unwrap();
    assert_eq!(json, serde_json::json!({ "success": true, "message": "Carta eliminada exitosamente" }));
}

#[test]
fn database_failures_hide_details() {
    let (status, Json(reply)) = failure::<()>(&CardError::Database(sqlx::Error::PoolTimedOut), LIST_FAILED);
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.error.as_deref(), Some(LIST_FAILED));
}

#[tokio::test]
async fn create_with_blank_field_is_bad_request() {
    let state = test_helpers::test_app_state();
    let (status, Json(reply)) = create_card(State(state), Ok(Json(body("Hola", "", "Ana", "Luis")))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!reply.success);
    assert_eq!(reply.error.as_deref(), Some("Todos los campos son requeridos"));
    assert!(reply.data.is_none());
}

#[tokio::test]
async fn create_without_database_is_server_error() {
    let state = test_helpers::test_app_state();
    let (status, Json(reply)) = create_card(State(state), Ok(Json(body("Hola", "Besos", "Ana", "Luis")))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.error.as_deref(), Some(CREATE_FAILED));
}

#[tokio::test]
async fn list_without_database_is_server_error() {
    let state = test_helpers::test_app_state();
    let (status, Json(reply)) = list_cards(State(state)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.error.as_deref(), Some("Error al obtener cartas"));
}

#[tokio::test]
async fn delete_without_database_is_server_error() {
    let state = test_helpers::test_app_state();
    let (status, Json(reply)) = delete_card(State(state), Ok(Path(4))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.error.as_deref(), Some(DELETE_FAILED));
}
