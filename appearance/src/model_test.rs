use super::*;

// =============================================================
// ColorModel: defaults and hex entry
// =============================================================

#[test]
fn new_model_holds_the_default_accent() {
    let model = ColorModel::new();
    assert_eq!(model.hex(), "#ff5c1a");
    assert_eq!(model.hsl(), Hsl::new(17, 100, 55));
}

#[test]
fn set_hex_applies_a_valid_color() {
    let mut model = ColorModel::new();
    assert!(model.set_hex("#2a9d8f"));
    assert_eq!(model.hex(), "#2a9d8f");
    assert_eq!(model.hsl(), color::hex_to_hsl("#2a9d8f"));
}

#[test]
fn set_hex_expands_shorthand() {
    let mut model = ColorModel::new();
    assert!(model.set_hex("#f00"));
    assert_eq!(model.hex(), "#ff0000");
}

#[test]
fn set_hex_lowercases() {
    let mut model = ColorModel::new();
    assert!(model.set_hex("#FF006E"));
    assert_eq!(model.hex(), "#ff006e");
}

#[test]
fn set_hex_trims_surrounding_whitespace() {
    let mut model = ColorModel::new();
    assert!(model.set_hex("  #ff006e "));
    assert_eq!(model.hex(), "#ff006e");
}

#[test]
fn invalid_hex_is_ignored_and_state_retained() {
    let mut model = ColorModel::new();
    assert!(!model.set_hex("notacolor"));
    assert!(!model.set_hex("ff5c1a"));
    assert!(!model.set_hex("#ff5c1"));
    assert_eq!(model.hex(), "#ff5c1a");
    assert_eq!(model.hsl(), Hsl::new(17, 100, 55));
}

// =============================================================
// ColorModel: hue and picker mutations
// =============================================================

#[test]
fn set_hue_keeps_saturation_and_lightness() {
    let mut model = ColorModel::new();
    model.set_hue(200);
    assert_eq!(model.hsl(), Hsl::new(200, 100, 55));
    assert_eq!(model.hex(), color::hsl_to_hex(Hsl::new(200, 100, 55)));
}

#[test]
fn set_hue_normalizes_out_of_range_values() {
    let mut model = ColorModel::new();
    model.set_hue(540);
    assert_eq!(model.hsl().h, 180);
    model.set_hue(-90);
    assert_eq!(model.hsl().h, 270);
}

#[test]
fn set_picker_keeps_hue() {
    let mut model = ColorModel::new();
    model.set_picker(40, 60);
    assert_eq!(model.hsl(), Hsl::new(17, 40, 60));
}

#[test]
fn set_picker_clamps_inputs() {
    let mut model = ColorModel::new();
    model.set_picker(150, -10);
    assert_eq!(model.hsl().s, 100);
    assert_eq!(model.hsl().l, 0);
}

#[test]
fn reset_restores_the_default() {
    let mut model = ColorModel::new();
    model.set_hex("#123456");
    model.reset();
    assert_eq!(model.hex(), "#ff5c1a");
    assert_eq!(model.hsl(), Hsl::new(17, 100, 55));
}

// =============================================================
// ColorModel: swatch matching and cursor
// =============================================================

#[test]
fn swatch_matches_after_expansion() {
    let mut model = ColorModel::new();
    model.set_hex("#ff0000");
    assert!(model.matches_swatch("#f00"));
    assert!(model.matches_swatch("#FF0000"));
    assert!(!model.matches_swatch("#00ff00"));
}

#[test]
fn cursor_is_saturation_and_inverted_lightness() {
    let mut model = ColorModel::new();
    model.set_picker(35, 80);
    assert_eq!(model.cursor(), (35, 20));
}

// =============================================================
// PickerArea
// =============================================================

#[test]
fn top_left_corner_is_zero_saturation_full_lightness() {
    let area = PickerArea::new(240.0, 160.0);
    assert_eq!(area.pointer_to_sl(0.0, 0.0), (0, 100));
}

#[test]
fn bottom_right_corner_is_full_saturation_zero_lightness() {
    let area = PickerArea::new(240.0, 160.0);
    assert_eq!(area.pointer_to_sl(240.0, 160.0), (100, 0));
}

#[test]
fn center_maps_to_midpoints() {
    let area = PickerArea::new(200.0, 100.0);
    assert_eq!(area.pointer_to_sl(100.0, 50.0), (50, 50));
}

#[test]
fn pointer_outside_the_area_is_clamped() {
    let area = PickerArea::new(200.0, 100.0);
    assert_eq!(area.pointer_to_sl(-30.0, 500.0), (0, 0));
    assert_eq!(area.pointer_to_sl(999.0, -1.0), (100, 100));
}

#[test]
fn fractional_positions_round_to_nearest_percent() {
    let area = PickerArea::new(300.0, 300.0);
    // 100 * 100/300 = 33.33…
    assert_eq!(area.pointer_to_sl(100.0, 100.0), (33, 67));
}

#[test]
fn degenerate_area_yields_the_neutral_corner() {
    let area = PickerArea::new(0.0, 0.0);
    assert_eq!(area.pointer_to_sl(10.0, 10.0), (0, 100));
}

// =============================================================
// DragState
// =============================================================

#[test]
fn drag_state_defaults_to_idle() {
    assert_eq!(DragState::default(), DragState::Idle);
    assert!(!DragState::default().is_dragging());
}

#[test]
fn drag_begin_and_end_toggle() {
    let mut drag = DragState::default();
    drag.begin();
    assert!(drag.is_dragging());
    drag.end();
    assert!(!drag.is_dragging());
}

#[test]
fn repeated_begin_is_idempotent() {
    let mut drag = DragState::default();
    drag.begin();
    drag.begin();
    assert!(drag.is_dragging());
}
