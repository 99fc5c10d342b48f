//! Create-card form validation.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use thiserror::Error;

use crate::net::types::NewCard;

/// Stand-in for a blank sender or recipient.
pub const ANONYMOUS: &str = "Anónimo";

/// Why the form cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Por favor, completa el título y el mensaje de la carta.")]
    MissingTitle,
    #[error("Por favor, completa el título y el mensaje de la carta.")]
    MissingMessage,
}

/// Raw field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardForm {
    pub title: String,
    pub message: String,
    pub sender: String,
    pub recipient: String,
}

impl CardForm {
    #[must_use]
    pub fn new(title: &str, message: &str, sender: &str, recipient: &str) -> Self {
        Self {
            title: title.to_owned(),
            message: message.to_owned(),
            sender: sender.to_owned(),
            recipient: recipient.to_owned(),
        }
    }

    /// Trim every field and fill blank sender/recipient with [`ANONYMOUS`].
    ///
    /// # Errors
    ///
    /// `MissingTitle` or `MissingMessage` when either is blank after trimming.
    pub fn validate(&self) -> Result<NewCard, FormError> {
        let title = self.title.trim();
        let message = self.message.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }
        if message.is_empty() {
            return Err(FormError::MissingMessage);
        }
        Ok(NewCard {
            title: title.to_owned(),
            message: message.to_owned(),
            sender: or_anonymous(&self.sender),
            recipient: or_anonymous(&self.recipient),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn or_anonymous(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() { ANONYMOUS.to_owned() } else { value.to_owned() }
}
