//! UI state outside the canvas: the create form, open overlays, and
//! transient notifications.

pub mod form;
pub mod notification;
pub mod overlay;
