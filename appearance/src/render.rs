//! The seam between the color model and whatever paints it.
//!
//! The model is pure state; the UI layer implements [`Renderer`] against
//! the DOM and tests implement it with a recording fake. [`sync`] pushes
//! the complete derived view of a [`ColorModel`] through the trait so
//! every surface (preview, hex field, hue slider, canvas wash, cursor,
//! swatch highlight) repaints from one call.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::model::ColorModel;

/// Paint targets for the color picker surface.
pub trait Renderer {
    /// Fill the preview swatch with the current color.
    fn set_preview(&mut self, hex: &str);

    /// Overwrite the free-text hex field.
    fn set_hex_field(&mut self, hex: &str);

    /// Move the numeric hue control.
    fn set_hue_control(&mut self, hue: i32);

    /// Repaint the 2-D picker background for the current hue.
    fn set_canvas_hue(&mut self, hue: i32);

    /// Reposition the picker cursor, in percent of the picker area.
    fn set_cursor_position(&mut self, x_percent: i32, y_percent: i32);

    /// Mark the preset swatch matching `hex` as selected (and clear the
    /// rest).
    fn set_active_swatch(&mut self, hex: &str);
}

/// Push the model's full derived state through a renderer.
pub fn sync(model: &ColorModel, renderer: &mut dyn Renderer) {
    let hsl = model.hsl();
    let (x, y) = model.cursor();
    renderer.set_preview(model.hex());
    renderer.set_hex_field(model.hex());
    renderer.set_hue_control(hsl.h);
    renderer.set_canvas_hue(hsl.h);
    renderer.set_cursor_position(x, y);
    renderer.set_active_swatch(model.hex());
}
