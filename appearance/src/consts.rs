//! Shared numeric constants for the appearance engine.

// ── Accent color ────────────────────────────────────────────────

/// Compiled-in default accent color.
pub const DEFAULT_ACCENT: &str = "#ff5c1a";

// ── Font scale ──────────────────────────────────────────────────

/// Smallest allowed font-size multiplier (80%).
pub const MIN_FONT_SCALE: f64 = 0.8;

/// Largest allowed font-size multiplier (150%).
pub const MAX_FONT_SCALE: f64 = 1.5;

/// Step applied per increase/decrease click.
pub const FONT_SCALE_STEP: f64 = 0.1;

// ── Carousel ────────────────────────────────────────────────────

/// Minimum horizontal travel in CSS pixels for a touch to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

// ── Scroll effects ──────────────────────────────────────────────

/// Scroll offset at which the header gains its shadow.
pub const HEADER_SHADOW_Y: f64 = 50.0;

/// Scroll offset at which the scroll-up button appears.
pub const SCROLL_UP_Y: f64 = 350.0;

/// Lead distance for active-section detection, in CSS pixels.
pub const SECTION_OFFSET_PX: f64 = 200.0;
