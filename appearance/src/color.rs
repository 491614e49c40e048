//! Conversions between hex color strings and HSL triples.
//!
//! The canonical form everywhere else in the crate is a lowercase
//! six-digit hex string (`#ff5c1a`). HSL is the derived form the picker
//! works in: hue in whole degrees `[0, 360)`, saturation and lightness in
//! whole percent `[0, 100]`.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// A color as hue/saturation/lightness integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`.
    pub h: i32,
    /// Saturation percent, `[0, 100]`.
    pub s: i32,
    /// Lightness percent, `[0, 100]`.
    pub l: i32,
}

impl Hsl {
    #[must_use]
    pub const fn new(h: i32, s: i32, l: i32) -> Self {
        Self { h, s, l }
    }
}

/// Parse the three channel bytes out of a six-digit hex string.
///
/// The leading `#` is optional here; this is the lenient parse used by
/// [`hex_to_hsl`]. User input goes through [`is_valid_hex`] first.
fn parse_channels(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let Ok(r) = u8::from_str_radix(&digits[0..2], 16) else {
        return None;
    };
    let Ok(g) = u8::from_str_radix(&digits[2..4], 16) else {
        return None;
    };
    let Ok(b) = u8::from_str_radix(&digits[4..6], 16) else {
        return None;
    };
    Some((r, g, b))
}

fn round_i32(value: f64) -> i32 {
    value.round() as i32
}

/// Convert a hex string to an HSL triple.
///
/// Malformed input degrades to `Hsl { 0, 0, 0 }` rather than erroring; the
/// callers that accept user input validate separately and keep their prior
/// state on failure.
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Hsl {
    let Some((rb, gb, bb)) = parse_channels(hex) else {
        return Hsl::default();
    };

    let r = f64::from(rb) / 255.0;
    let g = f64::from(gb) / 255.0;
    let b = f64::from(bb) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let max_b = rb.max(gb).max(bb);
    let min_b = rb.min(gb).min(bb);

    let (h, s);
    if max_b == min_b {
        h = 0.0;
        s = 0.0;
    } else {
        let d = max - min;
        s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        h = if max_b == rb {
            ((g - b) / d + if gb < bb { 6.0 } else { 0.0 }) / 6.0
        } else if max_b == gb {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };
    }

    Hsl {
        h: round_i32(h * 360.0),
        s: round_i32(s * 100.0),
        l: round_i32(l * 100.0),
    }
}

fn channel_byte(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert an HSL triple to a lowercase six-digit hex string.
///
/// Hue is normalized into `[0, 360)` with a euclidean modulo before sector
/// dispatch, so out-of-range hues like `-30` or `390` wrap to `330` and
/// `30` instead of collapsing to black.
#[must_use]
pub fn hsl_to_hex(hsl: Hsl) -> String {
    let h_norm = hsl.h.rem_euclid(360);
    let h = f64::from(h_norm);
    let s = f64::from(hsl.s.clamp(0, 100)) / 100.0;
    let l = f64::from(hsl.l.clamp(0, 100)) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h_norm / 60 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    format!(
        "#{:02x}{:02x}{:02x}",
        channel_byte(r + m),
        channel_byte(g + m),
        channel_byte(b + m)
    )
}

/// Whether `s` is `#` followed by exactly three or six hex digits.
#[must_use]
pub fn is_valid_hex(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 3 || digits.len() == 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Expand three-digit shorthand (`#abc` → `#aabbcc`) and lowercase.
///
/// Six-digit input passes through lowercased; anything else is returned
/// lowercased as-is, matching the lenient contract of the hex parser.
#[must_use]
pub fn expand_hex(s: &str) -> String {
    if let Some(digits) = s.strip_prefix('#') {
        if digits.len() == 3 && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            let mut out = String::with_capacity(7);
            out.push('#');
            for b in digits.bytes() {
                let lower = b.to_ascii_lowercase() as char;
                out.push(lower);
                out.push(lower);
            }
            return out;
        }
    }
    s.to_ascii_lowercase()
}
