//! Card REST routes.
//!
//! Every response uses the `{ success, data?, error?, message? }` envelope.
//! Failures carry a user-facing Spanish message; database details only go
//! to the log.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use crate::services::cards::{self, CardError, CardRecord, NewCardBody};
use crate::state::AppState;

const LIST_FAILED: &str = "Error al obtener cartas";
const CREATE_FAILED: &str = "Error al crear carta";
const DELETE_FAILED: &str = "Error al eliminar carta";
const NOT_FOUND: &str = "Carta no encontrada";
const DELETED: &str = "Carta eliminada exitosamente";

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    fn data(data: T) -> Self {
        Self { success: true, data: Some(data), error: None, message: None }
    }

    fn message(message: &str) -> Self {
        Self { success: true, data: None, error: None, message: Some(message.to_owned()) }
    }

    fn failure(error: &str) -> Self {
        Self { success: false, data: None, error: Some(error.to_owned()), message: None }
    }
}

pub type ApiReply<T> = (StatusCode, Json<ApiResponse<T>>);

/// `GET /api/cards`: newest cards first.
pub async fn list_cards(State(state): State<AppState>) -> ApiReply<Vec<CardRecord>> {
    match cards::list_cards(&state.pool, state.card_list_limit).await {
        Ok(records) => (StatusCode::OK, Json(ApiResponse::data(records))),
        Err(e) => failure(&e, LIST_FAILED),
    }
}

/// `POST /api/cards`: create a card from `{title, message, sender, recipient}`.
pub async fn create_card(
    State(state): State<AppState>,
    body: Result<Json<NewCardBody>, JsonRejection>,
) -> ApiReply<CardRecord> {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "unreadable card body");
            return failure(&CardError::Validation(cards::FIELDS_REQUIRED), CREATE_FAILED);
        }
    };
    let result = match cards::validate(&body) {
        Ok(card) => cards::create_card(&state.pool, &card).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(record) => (StatusCode::OK, Json(ApiResponse::data(record))),
        Err(e) => failure(&e, CREATE_FAILED),
    }
}

/// `DELETE /api/cards/{id}`.
pub async fn delete_card(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiReply<()> {
    let Ok(Path(id)) = id else {
        return (StatusCode::NOT_FOUND, Json(ApiResponse::failure(NOT_FOUND)));
    };
    match cards::delete_card(&state.pool, id).await {
        Ok(()) => (StatusCode::OK, Json(ApiResponse::message(DELETED))),
        Err(e) => failure(&e, DELETE_FAILED),
    }
}

pub(crate) fn card_error_to_status(err: &CardError) -> StatusCode {
    match err {
        CardError::Validation(_) => StatusCode::BAD_REQUEST,
        CardError::NotFound(_) => StatusCode::NOT_FOUND,
        CardError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `database_message` is shown for database failures in place of the
/// underlying error.
fn failure<T>(err: &CardError, database_message: &str) -> ApiReply<T> {
    let message = match err {
        CardError::Validation(message) => *message,
        CardError::NotFound(_) => NOT_FOUND,
        CardError::Database(e) => {
            tracing::error!(error = %e, "card query failed");
            database_message
        }
    };
    (card_error_to_status(err), Json(ApiResponse::failure(message)))
}
