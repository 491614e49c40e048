#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use appearance::model::{ColorModel, DragState};
use appearance::render::Renderer;
use leptos::prelude::*;

/// Color panel state: the live model plus the picker drag gesture.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorState {
    pub model: ColorModel,
    pub drag: DragState,
}

/// The render surfaces the picker paints into, as reactive signals.
///
/// Implements the engine's [`Renderer`] seam so every model mutation is
/// pushed through `appearance::render::sync` and the view simply reads
/// these signals.
#[derive(Clone, Copy)]
pub struct ColorSurfaces {
    pub preview: RwSignal<String>,
    pub hex_field: RwSignal<String>,
    pub hue: RwSignal<i32>,
    pub canvas_hue: RwSignal<i32>,
    pub cursor: RwSignal<(i32, i32)>,
    pub active_swatch: RwSignal<String>,
}

impl ColorSurfaces {
    /// Create the signal set, seeded from a model snapshot.
    #[must_use]
    pub fn new(model: &ColorModel) -> Self {
        let hsl = model.hsl();
        let (x, y) = model.cursor();
        Self {
            preview: RwSignal::new(model.hex().to_owned()),
            hex_field: RwSignal::new(model.hex().to_owned()),
            hue: RwSignal::new(hsl.h),
            canvas_hue: RwSignal::new(hsl.h),
            cursor: RwSignal::new((x, y)),
            active_swatch: RwSignal::new(model.hex().to_owned()),
        }
    }
}

impl Renderer for ColorSurfaces {
    fn set_preview(&mut self, hex: &str) {
        self.preview.set(hex.to_owned());
    }

    fn set_hex_field(&mut self, hex: &str) {
        self.hex_field.set(hex.to_owned());
    }

    fn set_hue_control(&mut self, hue: i32) {
        self.hue.set(hue);
    }

    fn set_canvas_hue(&mut self, hue: i32) {
        self.canvas_hue.set(hue);
    }

    fn set_cursor_position(&mut self, x_percent: i32, y_percent: i32) {
        self.cursor.set((x_percent, y_percent));
    }

    fn set_active_swatch(&mut self, hex: &str) {
        self.active_swatch.set(hex.to_owned());
    }
}
