//! Current-color state, picker-area geometry, and the drag gesture.
//!
//! `ColorModel` is the single live color value behind the theme sidebar:
//! the hex string is canonical (it is what gets persisted and compared
//! against preset swatches) and the HSL triple is kept in sync with it so
//! the hue slider and the 2-D picker always agree with the preview.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use crate::color::{self, Hsl};
use crate::consts::DEFAULT_ACCENT;

/// The live accent color, in both of its representations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorModel {
    hex: String,
    hsl: Hsl,
}

impl Default for ColorModel {
    fn default() -> Self {
        let hex = DEFAULT_ACCENT.to_owned();
        let hsl = color::hex_to_hsl(&hex);
        Self { hex, hsl }
    }
}

impl ColorModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical lowercase `#rrggbb` form.
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    #[must_use]
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// Apply a user-supplied hex string.
    ///
    /// Returns `false` without touching the model when the input is not a
    /// valid 3- or 6-digit hex color; the caller restores the field from
    /// [`Self::hex`] on blur.
    pub fn set_hex(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if !color::is_valid_hex(trimmed) {
            return false;
        }
        self.apply_hex(&color::expand_hex(trimmed));
        true
    }

    /// Move the hue while keeping saturation and lightness.
    pub fn set_hue(&mut self, hue: i32) {
        self.apply_hsl(Hsl { h: hue.rem_euclid(360), ..self.hsl });
    }

    /// Set saturation and lightness from the 2-D picker, keeping hue.
    pub fn set_picker(&mut self, saturation: i32, lightness: i32) {
        self.apply_hsl(Hsl {
            h: self.hsl.h,
            s: saturation.clamp(0, 100),
            l: lightness.clamp(0, 100),
        });
    }

    /// Restore the compiled-in default accent.
    pub fn reset(&mut self) {
        self.apply_hex(DEFAULT_ACCENT);
    }

    /// Whether a preset swatch names the current color, after shorthand
    /// expansion on the swatch side.
    #[must_use]
    pub fn matches_swatch(&self, swatch_hex: &str) -> bool {
        color::expand_hex(swatch_hex) == self.hex
    }

    /// Picker cursor position as `(x%, y%)`: x tracks saturation and y is
    /// inverted lightness.
    #[must_use]
    pub fn cursor(&self) -> (i32, i32) {
        (self.hsl.s, 100 - self.hsl.l)
    }

    fn apply_hex(&mut self, hex: &str) {
        self.hex = hex.to_owned();
        self.hsl = color::hex_to_hsl(hex);
    }

    fn apply_hsl(&mut self, hsl: Hsl) {
        self.hsl = hsl;
        self.hex = color::hsl_to_hex(hsl);
    }
}

/// The picker rectangle, in CSS pixels.
#[derive(Debug, Clone, Copy)]
pub struct PickerArea {
    pub width: f64,
    pub height: f64,
}

impl PickerArea {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Map a pointer position (relative to the area's top-left corner) to
    /// a `(saturation, lightness)` pair. The position is clamped to the
    /// rectangle, so top-left is `(0, 100)` and bottom-right `(100, 0)`.
    #[must_use]
    pub fn pointer_to_sl(&self, x: f64, y: f64) -> (i32, i32) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return (0, 100);
        }
        let cx = x.clamp(0.0, self.width);
        let cy = y.clamp(0.0, self.height);
        let saturation = (cx / self.width * 100.0).round() as i32;
        let lightness = (100.0 - cy / self.height * 100.0).round() as i32;
        (saturation, lightness)
    }
}

/// Two-state gesture machine for the picker area.
///
/// Set on pointer-down, cleared on pointer-up; pointer-move events only
/// produce color updates while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

impl DragState {
    pub fn begin(&mut self) {
        *self = Self::Dragging;
    }

    pub fn end(&mut self) {
        *self = Self::Idle;
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self == Self::Dragging
    }
}
