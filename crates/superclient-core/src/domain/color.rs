//! Category Colors
//!
//! Category chips use a darkened version of the category color as
//! background so light text stays readable.

/// Factor applied to category colors for chip backgrounds
pub const CHIP_DARKEN_FACTOR: f64 = 0.5;

/// Scale each channel of a `#rgb` / `#rrggbb` color by `factor` (clamped to 0..=1).
///
/// Returns `rgb(r, g, b)`; values that are not hex colors come back unchanged.
pub fn darken_color(value: &str, factor: f64) -> String {
    let factor = if factor.is_nan() { 0.0 } else { factor.clamp(0.0, 1.0) };
    let hex = value.replace('#', "");

    let normalized: String = if hex.chars().count() == 3 {
        hex.chars().flat_map(|c| [c, c]).collect()
    } else {
        hex
    };

    if normalized.len() != 6 || !normalized.is_ascii() {
        return value.to_string();
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&normalized[range], 16).ok();
    let (Some(r), Some(g), Some(b)) = (channel(0..2), channel(2..4), channel(4..6)) else {
        return value.to_string();
    };

    let scale = |c: u8| (f64::from(c) * factor).round() as u8;
    format!("rgb({}, {}, {})", scale(r), scale(g), scale(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darken_long_hex() {
        assert_eq!(darken_color("#22c9a6", 0.5), "rgb(17, 101, 83)");
    }

    #[test]
    fn test_darken_short_hex() {
        assert_eq!(darken_color("#fff", 0.5), "rgb(128, 128, 128)");
        assert_eq!(darken_color("f00", 1.0), "rgb(255, 0, 0)");
    }

    #[test]
    fn test_factor_is_clamped() {
        assert_eq!(darken_color("#808080", 2.0), "rgb(128, 128, 128)");
        assert_eq!(darken_color("#808080", -1.0), "rgb(0, 0, 0)");
    }

    #[test]
    fn test_non_hex_input_is_returned() {
        assert_eq!(darken_color("teal", 0.5), "teal");
        assert_eq!(darken_color("#12345", 0.5), "#12345");
        assert_eq!(darken_color("#zzzzzz", 0.5), "#zzzzzz");
    }
}
