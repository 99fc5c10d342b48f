//! Postcard board client: repository access, form and notification state,
//! and the orchestrator that drives the canvas engine.
//!
//! ARCHITECTURE
//! ============
//! `net` talks to the card server through the `CardRepository` seam,
//! `state` holds small UI state machines (create form, overlays,
//! notifications), and `app` wires both to `canvas::engine::EngineCore`.
//! `headless` is a `Surface` that records what would be drawn.

pub mod app;
pub mod config;
pub mod headless;
pub mod net;
pub mod state;
