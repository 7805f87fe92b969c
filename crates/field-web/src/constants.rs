// Page integration constants for the web front-end.

// Element ids used by `mountDefault`
pub const DEFAULT_BACKGROUND_CANVAS_ID: &str = "particle-bg";
pub const DEFAULT_CURSOR_CANVAS_ID: &str = "particle-cursor";

// Attributes
pub const GRID_SPACING_ATTRIBUTE: &str = "data-grid-spacing"; // on the background canvas
pub const THEME_ATTRIBUTE: &str = "data-theme"; // on <html>, read by the page CSS

// Diagnostics
pub const FRAME_STATS_INTERVAL_SEC: f32 = 5.0; // how often frame rate is logged at debug level
