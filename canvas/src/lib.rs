//! Card canvas engine for the postcard board.
//!
//! This crate owns the client-side layout of envelope cards: scattering them
//! across the canvas without heavy overlap, tracking which rectangles are
//! occupied, and turning raw pointer input into drags and clicks. It has no
//! I/O; the host feeds it cards and pointer samples and draws the
//! [`engine::Action`]s it returns through a [`render::Surface`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Single dispatcher keyed by card id ([`engine::EngineCore`]) |
//! | [`doc`] | Card records, the card collection, and the stacking counter |
//! | [`geometry`] | Rectangles, the overlap-ratio test, free-position search |
//! | [`layout`] | Occupied-rectangle store and layout tunables |
//! | [`gesture`] | Drag/click state machine |
//! | [`input`] | Pointer and key input types |
//! | [`render`] | Card and detail views, envelope animation, host surface |
//! | [`consts`] | Shared numeric constants (card size, margins, thresholds) |

pub mod consts;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod layout;
pub mod render;
