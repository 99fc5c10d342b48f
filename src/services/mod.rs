//! Domain services used by HTTP routes.
//!
//! Service modules own validation and persistence so route handlers stay
//! focused on translating results into the response envelope.

pub mod cards;
