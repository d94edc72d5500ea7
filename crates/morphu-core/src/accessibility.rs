//! Accessibility checks for post styling.
//!
//! Implements the WCAG 2.1 relative-luminance and contrast-ratio formulas
//! and a small set of legibility heuristics. The checker is a pure
//! function over a post's style properties and never fails: malformed
//! color strings decode to black instead of producing an error.

use serde::{Deserialize, Serialize};

/// A single styling issue detected by [`check_accessibility`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityWarning {
    /// Human-readable description of the issue.
    pub message: String,
}

/// The style properties the accessibility checker evaluates.
///
/// Assembled by the caller from a post's full style record; fields are
/// read literally and are not validated beforehand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProps {
    /// Text color as a hex RGB string (optional leading `#`).
    pub text_color: String,
    /// Background color, same encoding as `text_color`.
    pub background_color: String,
    /// Text size in pixels.
    pub text_size: f64,
    /// CSS font weight token. Only `"700"` (bold) and `"300"` (light)
    /// carry meaning here.
    pub font_weight: String,
}

impl StyleProps {
    /// Create style properties for an accessibility check.
    pub fn new(
        text_color: impl Into<String>,
        background_color: impl Into<String>,
        text_size: f64,
        font_weight: impl Into<String>,
    ) -> Self {
        Self {
            text_color: text_color.into(),
            background_color: background_color.into(),
            text_size,
            font_weight: font_weight.into(),
        }
    }
}

/// Decoded 8-bit RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

/// Parse a hex color string (`#rrggbb` or `rrggbb`, case-insensitive).
///
/// Anything else - wrong length, non-hex characters, 3-digit shorthand,
/// named colors, `rgb()` notation - decodes to black. This fail-silent
/// fallback is deliberate: the checker treats unparseable input as a
/// color to evaluate, not as an error to surface.
fn hex_to_rgb(hex: &str) -> Rgb {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Rgb { r: 0, g: 0, b: 0 };
    }
    Rgb {
        r: u8::from_str_radix(&digits[0..2], 16).unwrap_or(0),
        g: u8::from_str_radix(&digits[2..4], 16).unwrap_or(0),
        b: u8::from_str_radix(&digits[4..6], 16).unwrap_or(0),
    }
}

/// Relative luminance of a color per WCAG 2.1.
///
/// <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
fn relative_luminance(color: Rgb) -> f64 {
    fn linearize(c: u8) -> f64 {
        let s = c as f64 / 255.0;
        if s <= 0.03928 {
            s / 12.92
        } else {
            ((s + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Contrast ratio between two colors per WCAG 2.1, in `[1, 21]`.
///
/// Symmetric in its arguments.
/// <https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio>
pub fn contrast_ratio(color1: &str, color2: &str) -> f64 {
    let l1 = relative_luminance(hex_to_rgb(color1));
    let l2 = relative_luminance(hex_to_rgb(color2));

    let lighter = l1.max(l2);
    let darker = l1.min(l2);

    (lighter + 0.05) / (darker + 0.05)
}

/// Whether text qualifies as "large text" per WCAG: 18px+, or 14px+ bold.
fn is_large_text(text_size: f64, font_weight: &str) -> bool {
    text_size >= 18.0 || (text_size >= 14.0 && font_weight == "700")
}

/// Check post styling for accessibility issues.
///
/// Runs four independent checks (contrast, minimum size, light weight at
/// small sizes, nothing else) with no early exit, so a single style can
/// produce up to three warnings. Identical input always yields the same
/// warnings in the same order.
pub fn check_accessibility(props: &StyleProps) -> Vec<AccessibilityWarning> {
    let mut warnings = Vec::new();

    // 1. Color contrast
    let ratio = contrast_ratio(&props.text_color, &props.background_color);
    let min_ratio = if is_large_text(props.text_size, &props.font_weight) {
        3.0
    } else {
        4.5
    };
    if ratio < min_ratio {
        warnings.push(AccessibilityWarning {
            message: format!(
                "Low contrast ({:.1}:1). Recommended: {}:1 minimum",
                ratio, min_ratio
            ),
        });
    }

    // 2. Text size too small
    if props.text_size < 12.0 {
        warnings.push(AccessibilityWarning {
            message: "Text size below 12px may be difficult to read".to_string(),
        });
    }

    // 3. Light font weight with small text
    if props.font_weight == "300" && props.text_size < 16.0 {
        warnings.push(AccessibilityWarning {
            message: "Light font weight with small text may reduce readability".to_string(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_decoding() {
        assert_eq!(hex_to_rgb("#ffffff"), Rgb { r: 255, g: 255, b: 255 });
        assert_eq!(hex_to_rgb("ffffff"), Rgb { r: 255, g: 255, b: 255 });
        assert_eq!(hex_to_rgb("#FF8000"), Rgb { r: 255, g: 128, b: 0 });
        assert_eq!(hex_to_rgb("#1a2B3c"), Rgb { r: 26, g: 43, b: 60 });
    }

    #[test]
    fn test_malformed_colors_decode_to_black() {
        let black = hex_to_rgb("#000000");
        assert_eq!(hex_to_rgb(""), black);
        assert_eq!(hex_to_rgb("notacolor"), black);
        assert_eq!(hex_to_rgb("#abc"), black);
        assert_eq!(hex_to_rgb("#gggggg"), black);
        assert_eq!(hex_to_rgb("rgb(1,2,3)"), black);
        assert_eq!(hex_to_rgb("#1234567"), black);
    }

    #[test]
    fn test_contrast_symmetry() {
        let pairs = [("#000000", "#ffffff"), ("#777777", "#e0e0e0"), ("#123456", "#abcdef")];
        for (a, b) in pairs {
            assert!((contrast_ratio(a, b) - contrast_ratio(b, a)).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_contrast_identity() {
        for color in ["#000000", "#ffffff", "#777777", "#ff00aa"] {
            assert!((contrast_ratio(color, color) - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_contrast_bounds() {
        // Black on white is the maximum possible ratio
        assert!((contrast_ratio("#000000", "#ffffff") - 21.0).abs() < 1e-9);
        assert!((contrast_ratio("#000000", "#000000") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_contrast_case_insensitive() {
        let lower = contrast_ratio("#aabbcc", "#ffffff");
        let upper = contrast_ratio("#AABBCC", "#FFFFFF");
        assert!((lower - upper).abs() < f64::EPSILON);
    }

    #[test]
    fn test_malformed_color_behaves_as_black() {
        let expected = contrast_ratio("#000000", "#ffffff");
        assert!((contrast_ratio("", "#ffffff") - expected).abs() < f64::EPSILON);
        assert!((contrast_ratio("notacolor", "#ffffff") - expected).abs() < f64::EPSILON);
        assert!((contrast_ratio("#abc", "#ffffff") - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn test_large_text_boundaries() {
        assert!(is_large_text(18.0, "400"));
        assert!(!is_large_text(17.9, "400"));
        assert!(is_large_text(14.0, "700"));
        assert!(!is_large_text(13.9, "700"));
        // Light weight never lowers the threshold
        assert!(!is_large_text(17.0, "300"));
    }

    #[test]
    fn test_all_checks_fire_independently() {
        let props = StyleProps::new("#777777", "#ffffff", 10.0, "300");
        let warnings = check_accessibility(&props);
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].message.starts_with("Low contrast"));
        assert_eq!(
            warnings[1].message,
            "Text size below 12px may be difficult to read"
        );
        assert_eq!(
            warnings[2].message,
            "Light font weight with small text may reduce readability"
        );
    }

    #[test]
    fn test_no_false_positives() {
        let props = StyleProps::new("#000000", "#ffffff", 20.0, "400");
        assert!(check_accessibility(&props).is_empty());
    }

    #[test]
    fn test_contrast_message_formatting() {
        // Same color on itself gives exactly 1.0; normal text recommends 4.5
        let props = StyleProps::new("#ffffff", "#ffffff", 16.0, "400");
        let warnings = check_accessibility(&props);
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].message,
            "Low contrast (1.0:1). Recommended: 4.5:1 minimum"
        );

        // Large text recommends 3, rendered without a trailing zero
        let props = StyleProps::new("#ffffff", "#ffffff", 18.0, "400");
        let warnings = check_accessibility(&props);
        assert_eq!(
            warnings[0].message,
            "Low contrast (1.0:1). Recommended: 3:1 minimum"
        );
    }

    #[test]
    fn test_bold_small_text_uses_large_threshold() {
        // 4.48:1 fails for normal text but passes once 14px bold counts as large
        let props = StyleProps::new("#777777", "#ffffff", 14.0, "700");
        assert!(check_accessibility(&props).is_empty());

        let props = StyleProps::new("#777777", "#ffffff", 14.0, "400");
        assert_eq!(check_accessibility(&props).len(), 1);
    }

    #[test]
    fn test_deterministic_output() {
        let props = StyleProps::new("#777777", "#ffffff", 10.0, "300");
        assert_eq!(check_accessibility(&props), check_accessibility(&props));
    }

    #[test]
    fn test_extreme_sizes_follow_thresholds_only() {
        let props = StyleProps::new("#000000", "#ffffff", -5.0, "400");
        let warnings = check_accessibility(&props);
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].message,
            "Text size below 12px may be difficult to read"
        );

        let props = StyleProps::new("#000000", "#ffffff", 10_000.0, "400");
        assert!(check_accessibility(&props).is_empty());
    }
}
