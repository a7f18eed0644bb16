//! Opacity-aware color resolution.
//!
//! Background opacity is baked into individual color values rather than
//! applied to a whole element, so descendant content never fades with it.
//! [`apply_opacity`] accepts a color in any notation the dashboard themes
//! use:
//!
//! - **Hex**: `#RGB`, `#RRGGBB`, `#RRGGBBAA`
//! - **RGB**: `rgb(r, g, b)`, `rgba(r, g, b, a)`
//! - **Anything else** (named colors, `var()` references, unknown
//!   notations): wrapped in a `color-mix()` expression, which lets the
//!   presentation layer do the blending without this crate having to
//!   parse the color's channels.
//!
//! No input ever produces an error; the mix expression is the universal
//! fallback.

/// Returns `color` with `opacity` baked in.
///
/// `opacity >= 1` returns the color unchanged and `opacity <= 0` returns
/// the fully transparent sentinel. Any prior alpha channel in the input
/// is discarded.
///
/// # Examples
///
/// ```
/// use hearthcss::types::color::apply_opacity;
///
/// assert_eq!(apply_opacity("#ff0000", 0.5), "rgba(255, 0, 0, 0.5)");
/// assert_eq!(apply_opacity("rgb(10, 20, 30)", 0.25), "rgba(10, 20, 30, 0.25)");
/// assert_eq!(apply_opacity("tomato", 1.0), "tomato");
/// assert_eq!(apply_opacity("tomato", 0.0), "transparent");
/// ```
pub fn apply_opacity(color: &str, opacity: f32) -> String {
    let color = color.trim();
    if opacity >= 1.0 {
        return color.to_string();
    }
    if opacity <= 0.0 {
        return "transparent".to_string();
    }

    let has_rgb_prefix = color
        .get(..4)
        .is_some_and(|p| p.eq_ignore_ascii_case("rgb("))
        || color
            .get(..5)
            .is_some_and(|p| p.eq_ignore_ascii_case("rgba("));
    if has_rgb_prefix {
        if let Some(rewritten) = rewrite_rgb_alpha(color, opacity) {
            return rewritten;
        }
    }

    if let Some(hex) = color.strip_prefix('#') {
        if let Some((r, g, b)) = hex_channels(hex) {
            return format!("rgba({r}, {g}, {b}, {})", fmt_number(opacity));
        }
    }

    // Named colors, var() references, and anything unrecognized.
    format!(
        "color-mix(in srgb, {color} {}%, transparent)",
        fmt_number(opacity * 100.0)
    )
}

/// Rewrites an `rgb()`/`rgba()` notation with a new alpha, keeping the
/// first three components verbatim. Returns `None` when the notation
/// does not have at least three comma-separated components.
fn rewrite_rgb_alpha(color: &str, opacity: f32) -> Option<String> {
    let start = color.find('(')?;
    let end = color.rfind(')')?;
    if end <= start {
        return None;
    }

    let parts: Vec<&str> = color[start + 1..end].split(',').map(str::trim).collect();
    if parts.len() < 3 || parts.iter().take(3).any(|p| p.is_empty()) {
        return None;
    }

    Some(format!(
        "rgba({}, {}, {}, {})",
        parts[0],
        parts[1],
        parts[2],
        fmt_number(opacity)
    ))
}

/// Extracts R/G/B channels from a 3, 6, or 8 digit hex string (no `#`).
/// The alpha pair of an 8-digit value is ignored; the caller supplies
/// the replacement alpha.
fn hex_channels(hex: &str) -> Option<(u8, u8, u8)> {
    let chars: Vec<char> = hex.chars().collect();
    match chars.len() {
        3 => {
            let r = hex_digit(chars[0])? * 17;
            let g = hex_digit(chars[1])? * 17;
            let b = hex_digit(chars[2])? * 17;
            Some((r, g, b))
        }
        6 | 8 => {
            let r = hex_pair(chars[0], chars[1])?;
            let g = hex_pair(chars[2], chars[3])?;
            let b = hex_pair(chars[4], chars[5])?;
            Some((r, g, b))
        }
        _ => None,
    }
}

fn hex_digit(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

fn hex_pair(c1: char, c2: char) -> Option<u8> {
    Some(hex_digit(c1)? * 16 + hex_digit(c2)?)
}

/// Formats a number for CSS output, trimming a whole value down to its
/// integer form (`0.5` stays `0.5`, `50.0` becomes `50`). Values are
/// rounded to three decimals to hide float noise.
pub(crate) fn fmt_number(value: f32) -> String {
    let rounded = (value as f64 * 1000.0).round() / 1000.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== BOUNDARY TESTS ====================

    #[test]
    fn test_full_opacity_is_identity() {
        for color in ["#ff0000", "rgb(1, 2, 3)", "tomato", "var(--accent)"] {
            assert_eq!(apply_opacity(color, 1.0), color);
            assert_eq!(apply_opacity(color, 1.5), color);
        }
    }

    #[test]
    fn test_zero_opacity_is_transparent() {
        for color in ["#ff0000", "rgb(1, 2, 3)", "tomato", "nonsense"] {
            assert_eq!(apply_opacity(color, 0.0), "transparent");
            assert_eq!(apply_opacity(color, -0.5), "transparent");
        }
    }

    // ==================== RGB NOTATION ====================

    #[test]
    fn test_rgb_rewrite() {
        assert_eq!(apply_opacity("rgb(10, 20, 30)", 0.5), "rgba(10, 20, 30, 0.5)");
        assert_eq!(apply_opacity("rgb(10,20,30)", 0.5), "rgba(10, 20, 30, 0.5)");
    }

    #[test]
    fn test_rgba_discards_prior_alpha() {
        assert_eq!(
            apply_opacity("rgba(10, 20, 30, 0.9)", 0.25),
            "rgba(10, 20, 30, 0.25)"
        );
    }

    #[test]
    fn test_rgb_case_insensitive_prefix() {
        assert_eq!(apply_opacity("RGB(1, 2, 3)", 0.5), "rgba(1, 2, 3, 0.5)");
    }

    #[test]
    fn test_malformed_rgb_falls_back_to_mix() {
        // Too few components for a channel rewrite.
        assert_eq!(
            apply_opacity("rgb(255 0 0 / 40%)", 0.5),
            "color-mix(in srgb, rgb(255 0 0 / 40%) 50%, transparent)"
        );
    }

    // ==================== HEX NOTATION ====================

    #[test]
    fn test_hex_3_digit() {
        assert_eq!(apply_opacity("#f00", 0.5), "rgba(255, 0, 0, 0.5)");
        assert_eq!(apply_opacity("#abc", 0.5), "rgba(170, 187, 204, 0.5)");
    }

    #[test]
    fn test_hex_6_digit() {
        assert_eq!(apply_opacity("#ff0000", 0.5), "rgba(255, 0, 0, 0.5)");
        assert_eq!(apply_opacity("#112233", 0.75), "rgba(17, 34, 51, 0.75)");
    }

    #[test]
    fn test_hex_8_digit_discards_alpha_pair() {
        assert_eq!(apply_opacity("#ff000080", 0.5), "rgba(255, 0, 0, 0.5)");
    }

    #[test]
    fn test_hex_case_insensitive() {
        assert_eq!(apply_opacity("#AABBCC", 0.5), "rgba(170, 187, 204, 0.5)");
    }

    #[test]
    fn test_invalid_hex_falls_back_to_mix() {
        assert_eq!(
            apply_opacity("#gg0000", 0.5),
            "color-mix(in srgb, #gg0000 50%, transparent)"
        );
        assert_eq!(
            apply_opacity("#ff00", 0.5),
            "color-mix(in srgb, #ff00 50%, transparent)"
        );
    }

    // ==================== MIX FALLBACK ====================

    #[test]
    fn test_named_color_mix() {
        assert_eq!(
            apply_opacity("tomato", 0.3),
            "color-mix(in srgb, tomato 30%, transparent)"
        );
    }

    #[test]
    fn test_css_variable_mix() {
        assert_eq!(
            apply_opacity("var(--accent)", 0.5),
            "color-mix(in srgb, var(--accent) 50%, transparent)"
        );
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(apply_opacity("  #f00  ", 0.5), "rgba(255, 0, 0, 0.5)");
    }

    #[test]
    fn test_fractional_percentage() {
        assert_eq!(
            apply_opacity("gold", 0.125),
            "color-mix(in srgb, gold 12.5%, transparent)"
        );
    }

    #[test]
    fn test_fmt_number() {
        assert_eq!(fmt_number(50.0), "50");
        assert_eq!(fmt_number(0.5), "0.5");
        assert_eq!(fmt_number(0.33 * 100.0), "33");
        assert_eq!(fmt_number(1.05), "1.05");
    }
}
