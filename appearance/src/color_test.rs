use super::*;

fn channels(hex: &str) -> (i32, i32, i32) {
    let digits = hex.trim_start_matches('#');
    let parse = |range: std::ops::Range<usize>| {
        i32::from_str_radix(&digits[range], 16).unwrap_or(-1000)
    };
    (parse(0..2), parse(2..4), parse(4..6))
}

fn max_channel_error(a: &str, b: &str) -> i32 {
    let (ar, ag, ab) = channels(a);
    let (br, bg, bb) = channels(b);
    (ar - br).abs().max((ag - bg).abs()).max((ab - bb).abs())
}

// =============================================================
// hex_to_hsl
// =============================================================

#[test]
fn default_accent_converts_to_expected_hsl() {
    // 255, 92, 26 through the reference RGB→HSL formula.
    assert_eq!(hex_to_hsl("#ff5c1a"), Hsl::new(17, 100, 55));
}

#[test]
fn primaries_convert_exactly() {
    assert_eq!(hex_to_hsl("#ff0000"), Hsl::new(0, 100, 50));
    assert_eq!(hex_to_hsl("#00ff00"), Hsl::new(120, 100, 50));
    assert_eq!(hex_to_hsl("#0000ff"), Hsl::new(240, 100, 50));
}

#[test]
fn grays_have_zero_hue_and_saturation() {
    assert_eq!(hex_to_hsl("#000000"), Hsl::new(0, 0, 0));
    assert_eq!(hex_to_hsl("#808080"), Hsl::new(0, 0, 50));
    assert_eq!(hex_to_hsl("#ffffff"), Hsl::new(0, 0, 100));
}

#[test]
fn uppercase_input_is_accepted() {
    assert_eq!(hex_to_hsl("#FF5C1A"), Hsl::new(17, 100, 55));
}

#[test]
fn missing_hash_is_accepted_by_the_parser() {
    assert_eq!(hex_to_hsl("ff5c1a"), Hsl::new(17, 100, 55));
}

#[test]
fn malformed_input_degrades_to_zero_triple() {
    assert_eq!(hex_to_hsl("notacolor"), Hsl::default());
    assert_eq!(hex_to_hsl(""), Hsl::default());
    assert_eq!(hex_to_hsl("#ff5c1"), Hsl::default());
    assert_eq!(hex_to_hsl("#ff5c1azz"), Hsl::default());
}

#[test]
fn shorthand_is_not_parsed_without_expansion() {
    // Three-digit input goes through expand_hex first; the raw parser
    // only takes six digits.
    assert_eq!(hex_to_hsl("#fa0"), Hsl::default());
}

// =============================================================
// hsl_to_hex
// =============================================================

#[test]
fn hue_14_full_saturation_half_lightness() {
    // Pinned from the reference HSL→RGB formula.
    assert_eq!(hsl_to_hex(Hsl::new(14, 100, 50)), "#ff3c00");
}

#[test]
fn pure_red_at_hue_zero() {
    assert_eq!(hsl_to_hex(Hsl::new(0, 100, 50)), "#ff0000");
}

#[test]
fn zero_triple_is_black() {
    assert_eq!(hsl_to_hex(Hsl::default()), "#000000");
}

#[test]
fn full_lightness_is_white_regardless_of_hue() {
    assert_eq!(hsl_to_hex(Hsl::new(123, 45, 100)), "#ffffff");
}

#[test]
fn hue_360_wraps_to_red() {
    assert_eq!(hsl_to_hex(Hsl::new(360, 100, 50)), "#ff0000");
}

#[test]
fn negative_hue_is_normalized() {
    // -30 ≡ 330.
    assert_eq!(hsl_to_hex(Hsl::new(-30, 100, 50)), "#ff0080");
}

#[test]
fn overshot_hue_is_normalized() {
    // 390 ≡ 30.
    assert_eq!(hsl_to_hex(Hsl::new(390, 100, 50)), "#ff8000");
}

#[test]
fn out_of_range_saturation_and_lightness_are_clamped() {
    assert_eq!(hsl_to_hex(Hsl::new(0, 150, 50)), "#ff0000");
    assert_eq!(hsl_to_hex(Hsl::new(0, 100, -20)), "#000000");
}

// =============================================================
// Round trips
// =============================================================

#[test]
fn round_trip_is_tight_for_common_colors() {
    // Integer degrees/percent lose a little precision; for these colors
    // the reconstruction stays within one unit per channel.
    let colors = [
        "#ff5c1a", "#ff0000", "#00ff00", "#0000ff", "#ffffff", "#000000",
        "#808080", "#2a9d8f", "#9b5de5", "#f15bb5", "#fb8500", "#ff006e",
        "#ffbe0b",
    ];
    for hex in colors {
        let back = hsl_to_hex(hex_to_hsl(hex));
        assert!(
            max_channel_error(hex, &back) <= 1,
            "{hex} round-tripped to {back}"
        );
    }
}

#[test]
fn round_trip_error_is_bounded_over_the_cube() {
    // Whole-degree hue quantization alone can move a channel by a few
    // units; sweep a coarse grid and hold the observed ceiling.
    for r in (0..=255).step_by(3) {
        for g in (0..=255).step_by(3) {
            for b in (0..=255).step_by(3) {
                let hex = format!("#{r:02x}{g:02x}{b:02x}");
                let back = hsl_to_hex(hex_to_hsl(&hex));
                assert!(
                    max_channel_error(&hex, &back) <= 5,
                    "{hex} round-tripped to {back}"
                );
            }
        }
    }
}

#[test]
fn round_trip_default_accent() {
    assert_eq!(hsl_to_hex(hex_to_hsl("#ff5c1a")), "#ff5b1a");
}

// =============================================================
// is_valid_hex
// =============================================================

#[test]
fn six_digit_forms_are_valid() {
    assert!(is_valid_hex("#ff5c1a"));
    assert!(is_valid_hex("#FF5C1A"));
    assert!(is_valid_hex("#000000"));
}

#[test]
fn three_digit_forms_are_valid() {
    assert!(is_valid_hex("#abc"));
    assert!(is_valid_hex("#F00"));
}

#[test]
fn wrong_lengths_are_invalid() {
    assert!(!is_valid_hex("#ff5c1"));
    assert!(!is_valid_hex("#ff5c1a00"));
    assert!(!is_valid_hex("#ab"));
    assert!(!is_valid_hex("#"));
}

#[test]
fn missing_hash_is_invalid() {
    assert!(!is_valid_hex("ff5c1a"));
}

#[test]
fn non_hex_digits_are_invalid() {
    assert!(!is_valid_hex("#ggg"));
    assert!(!is_valid_hex("#ff5c1g"));
    assert!(!is_valid_hex(""));
}

// =============================================================
// expand_hex
// =============================================================

#[test]
fn shorthand_expands_by_doubling_digits() {
    assert_eq!(expand_hex("#abc"), "#aabbcc");
    assert_eq!(expand_hex("#f00"), "#ff0000");
}

#[test]
fn shorthand_expansion_lowercases() {
    assert_eq!(expand_hex("#ABC"), "#aabbcc");
}

#[test]
fn six_digit_input_passes_through_lowercased() {
    assert_eq!(expand_hex("#FF5C1A"), "#ff5c1a");
    assert_eq!(expand_hex("#ff5c1a"), "#ff5c1a");
}

#[test]
fn non_hex_input_is_only_lowercased() {
    assert_eq!(expand_hex("NOTACOLOR"), "notacolor");
}
