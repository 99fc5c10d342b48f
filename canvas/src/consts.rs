//! Shared numeric constants for the canvas crate.

// ── Card geometry ───────────────────────────────────────────────

/// Width of an envelope card in canvas pixels.
pub const CARD_WIDTH: f64 = 280.0;

/// Height of an envelope card in canvas pixels.
pub const CARD_HEIGHT: f64 = 200.0;

// ── Placement ───────────────────────────────────────────────────

/// Inset from the container edge used by the random placement search.
pub const PLACEMENT_MARGIN: f64 = 20.0;

/// Random draws attempted before falling back to the grid.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Covered fraction of either rectangle above which two cards collide.
pub const OVERLAP_THRESHOLD: f64 = 0.5;

/// Gap between grid cells in the fallback layout.
pub const GRID_GUTTER: f64 = 50.0;

/// Columns in the fallback grid.
pub const GRID_COLUMNS: usize = 3;

// ── Gestures ────────────────────────────────────────────────────

/// Inset from the container edge a dragged card is clamped to.
pub const DRAG_MARGIN: f64 = 20.0;

/// Pointer travel (Euclidean, in pixels) that turns a press into a drag.
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// Coordinate slop when matching an occupancy slot by position.
pub const REMOVE_TOLERANCE_PX: f64 = 10.0;

// ── Stacking and animation ──────────────────────────────────────

/// First stacking value handed out; every raise takes the next one.
pub const INITIAL_Z_INDEX: i64 = 100;

/// Entrance animation delay added per card index.
pub const ENTRANCE_STAGGER_MS: u64 = 300;

/// Delay before a freshly created card pops in.
pub const POP_IN_DELAY_MS: u64 = 500;

/// Duration of the pop-in transition.
pub const POP_IN_DURATION_MS: u64 = 800;

/// Envelope opening animation; the detail view shows when it ends.
pub const OPEN_ANIMATION_MS: u64 = 800;

/// Time after the detail view shows before the envelope closes again.
pub const OPEN_RESET_MS: u64 = 500;
