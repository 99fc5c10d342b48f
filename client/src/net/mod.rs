//! Networking for the card server's REST API.
//!
//! `api` defines the `CardRepository` seam and its HTTP implementation,
//! `types` holds the wire shapes, and `error` classifies failures.

pub mod api;
pub mod error;
pub mod types;
