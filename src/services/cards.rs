//! Card service: validation and `cards` table access.
//!
//! DESIGN
//! ======
//! Dates are stored as `TIMESTAMPTZ` and leave this module already formatted
//! as `d/m/yyyy`. Positions are never stored; layout belongs to the client,
//! so every record goes out with `position: null`.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use time::OffsetDateTime;

// =============================================================================
// TYPES
// =============================================================================

pub const FIELDS_REQUIRED: &str = "Todos los campos son requeridos";

#[derive(Debug, thiserror::Error)]
pub enum CardError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("card not found: {0}")]
    NotFound(i64),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A card as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardRecord {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub sender: String,
    pub recipient: String,
    /// `d/m/yyyy`, e.g. `17/10/2026`.
    pub date: String,
    /// Always `null`.
    pub position: Option<serde_json::Value>,
}

/// Request body for card creation. Every field is optional on the wire so a
/// missing field is reported as a validation error, not a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewCardBody {
    pub title: Option<String>,
    pub message: Option<String>,
    pub sender: Option<String>,
    pub recipient: Option<String>,
}

/// A creation request that passed validation; every field is trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCard {
    pub title: String,
    pub message: String,
    pub sender: String,
    pub recipient: String,
}

type CardRow = (i64, String, String, String, String, OffsetDateTime);

// =============================================================================
// VALIDATION
// =============================================================================

/// Require all four fields, ignoring surrounding whitespace.
///
/// # Errors
///
/// `CardError::Validation` if any field is missing or blank.
pub fn validate(body: &NewCardBody) -> Result<ValidCard, CardError> {
    let field = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_owned)
            .ok_or(CardError::Validation(FIELDS_REQUIRED))
    };
    Ok(ValidCard {
        title: field(&body.title)?,
        message: field(&body.message)?,
        sender: field(&body.sender)?,
        recipient: field(&body.recipient)?,
    })
}

/// Spanish short date without zero padding.
#[must_use]
pub fn format_card_date(at: OffsetDateTime) -> String {
    format!("{}/{}/{}", at.day(), u8::from(at.month()), at.year())
}

fn to_record((id, title, message, sender, recipient, date): CardRow) -> CardRecord {
    CardRecord { id, title, message, sender, recipient, date: format_card_date(date), position: None }
}

// =============================================================================
// QUERIES
// =============================================================================

/// Newest cards first, at most `limit`.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_cards(pool: &PgPool, limit: i64) -> Result<Vec<CardRecord>, CardError> {
    let rows = sqlx::query_as::<_, CardRow>(
        "SELECT id, title, message, sender, recipient, date FROM cards ORDER BY date DESC, id DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(to_record).collect())
}

/// Insert a card stamped with the current time and return the stored row.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn create_card(pool: &PgPool, card: &ValidCard) -> Result<CardRecord, CardError> {
    let row = sqlx::query_as::<_, CardRow>(
        "INSERT INTO cards (title, message, sender, recipient, date) VALUES ($1, $2, $3, $4, now()) \
         RETURNING id, title, message, sender, recipient, date",
    )
    .bind(&card.title)
    .bind(&card.message)
    .bind(&card.sender)
    .bind(&card.recipient)
    .fetch_one(pool)
    .await?;

    tracing::info!(card_id = row.0, "card created");
    Ok(to_record(row))
}

/// Delete a card by id.
///
/// # Errors
///
/// `NotFound` if no row has `id`, or a database error.
pub async fn delete_card(pool: &PgPool, id: i64) -> Result<(), CardError> {
    let result = sqlx::query("DELETE FROM cards WHERE id = $1").bind(id).execute(pool).await?;
    if result.rows_affected() == 0 {
        return Err(CardError::NotFound(id));
    }
    tracing::info!(card_id = id, "card deleted");
    Ok(())
}
