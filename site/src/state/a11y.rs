#[cfg(test)]
#[path = "a11y_test.rs"]
mod a11y_test;

use appearance::font_scale::FontScale;

/// Accessibility state: the font-size multiplier.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct A11yState {
    pub font_scale: FontScale,
}

impl A11yState {
    /// The percent string shown between the stepper buttons.
    #[must_use]
    pub fn display(self) -> String {
        format!("{}%", self.font_scale.percent())
    }
}
