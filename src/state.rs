//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Clone is required by Axum; the pool is reference-counted internally.

use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Maximum number of cards returned by `GET /api/cards`.
    pub card_list_limit: i64,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, card_list_limit: i64) -> Self {
        Self { pool, card_list_limit }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
