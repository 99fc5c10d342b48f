//! Card repository contract and its HTTP implementation.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures become `Connectivity`, a 400 becomes `Validation`,
//! a 404 on delete becomes `NotFound`, and every other non-success answer
//! becomes `Server`. Bodies that are not the `{success, data?, error?}`
//! envelope become `Decode`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::error::RepositoryError;
use super::types::{ApiEnvelope, Card, CardId, NewCard};
use crate::config::{ClientConfig, normalize_base_url};

/// Shown when a failed response carries no `error` text.
const UNKNOWN_ERROR: &str = "Error desconocido";

/// Abstract access to the card collection.
#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Fetch every card, newest first.
    async fn list(&self) -> Result<Vec<Card>, RepositoryError>;

    /// Create a card; the server assigns `id` and `date`.
    async fn create(&self, card: &NewCard) -> Result<Card, RepositoryError>;

    /// Delete a card by id. `Ok(true)` when the server confirmed the delete.
    async fn delete(&self, id: CardId) -> Result<bool, RepositoryError>;

    /// Check that the server answers.
    async fn ping(&self) -> Result<(), RepositoryError> {
        self.list().await.map(|_| ())
    }
}

/// `CardRepository` over the REST API.
#[derive(Debug, Clone)]
pub struct HttpCardRepository {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCardRepository {
    /// Build a repository for `config.api_url` with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns `Connectivity` when the HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, RepositoryError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RepositoryError::Connectivity(e.to_string()))?;
        Ok(Self { http, base_url: normalize_base_url(&config.api_url) })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<(u16, String), RepositoryError> {
        let response = request
            .send()
            .await
            .map_err(|e| RepositoryError::Connectivity(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| RepositoryError::Decode(e.to_string()))?;
        Ok((status, body))
    }
}

#[async_trait]
impl CardRepository for HttpCardRepository {
    async fn list(&self) -> Result<Vec<Card>, RepositoryError> {
        let (status, body) = self.send(self.http.get(cards_endpoint(&self.base_url))).await?;
        let cards: Vec<Card> = require_data(parse_response(status, &body)?)?;
        log::debug!("fetched {} cards", cards.len());
        Ok(cards)
    }

    async fn create(&self, card: &NewCard) -> Result<Card, RepositoryError> {
        if let Some(field) = card.missing_field() {
            return Err(RepositoryError::Validation(format!("missing field `{field}`")));
        }
        let request = self.http.post(cards_endpoint(&self.base_url)).json(card);
        let (status, body) = self.send(request).await?;
        require_data(parse_response(status, &body)?)
    }

    async fn delete(&self, id: CardId) -> Result<bool, RepositoryError> {
        let (status, body) = self.send(self.http.delete(card_endpoint(&self.base_url, id))).await?;
        delete_outcome(id, status, &body)
    }
}

/// A 404 on delete means the card is gone, not that the server failed.
fn delete_outcome(id: CardId, status: u16, body: &str) -> Result<bool, RepositoryError> {
    match parse_response::<serde_json::Value>(status, body) {
        Ok(envelope) => Ok(envelope.success),
        Err(RepositoryError::Server { status: Some(404), .. }) => Err(RepositoryError::NotFound(id)),
        Err(e) => Err(e),
    }
}

fn cards_endpoint(base_url: &str) -> String {
    format!("{base_url}/cards")
}

fn card_endpoint(base_url: &str, id: CardId) -> String {
    format!("{base_url}/cards/{id}")
}

/// Classify a response by status and envelope.
fn parse_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<ApiEnvelope<T>, RepositoryError> {
    let ok = (200..300).contains(&status);
    let envelope: ApiEnvelope<T> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) if ok => return Err(RepositoryError::Decode(e.to_string())),
        Err(_) => return Err(RepositoryError::Server { status: Some(status), message: format!("HTTP {status}") }),
    };
    if ok && envelope.success {
        return Ok(envelope);
    }
    let message = envelope.error.unwrap_or_else(|| if ok { UNKNOWN_ERROR.to_owned() } else { format!("HTTP {status}") });
    Err(match status {
        400 => RepositoryError::Validation(message),
        _ => RepositoryError::Server { status: Some(status), message },
    })
}

fn require_data<T>(envelope: ApiEnvelope<T>) -> Result<T, RepositoryError> {
    envelope
        .data
        .ok_or_else(|| RepositoryError::Decode("response is missing `data`".to_owned()))
}
