// SPDX-License-Identifier: MIT
//
// tinct color values — hex, 8-bit RGB and HSL.
//
// Single-character variable names (r, g, b, h, s, l, p, q, t) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// Colors enter the engine as `#RRGGBB` strings (design tokens are stored
// and exported as text), so every conversion here is a pure, total
// function over strings and small value types:
//
//   hex ↔ Rgb (u8 triple) ↔ Hsl (degrees, percent, percent)
//
// Lenient entry points (`hex_to_rgb`, `hex_to_hsl`) never fail: malformed
// digits decode as zero and unparsable HSL input degrades to black.
// Callers that need strict validation use `is_hex_color` / `parse_hex`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 8-bit sRGB color.
///
/// # Examples
///
/// ```
/// use tinct_color::{Rgb, hex_to_rgb};
///
/// let zinc = hex_to_rgb("#18181b");
/// assert_eq!(zinc, Rgb::new(24, 24, 27));
/// assert_eq!(zinc.to_hex(), "#18181b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Encode as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels scaled to 0.0–1.0.
    #[inline]
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Convert to HSL (hue in degrees, saturation/lightness in percent).
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if (max - min).abs() < f64::EPSILON {
            return Hsl::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        #[allow(clippy::float_cmp)]
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl::new(h * 60.0, s * 100.0, l * 100.0)
    }

    /// Interpolate each channel `percent` (0–100) of the way toward `target`.
    ///
    /// Returns the blended color as hex; rounding happens during encoding.
    #[must_use]
    pub fn blend_toward(self, target: Self, percent: f64) -> String {
        let t = percent.clamp(0.0, 100.0) / 100.0;
        let mix = |from: u8, to: u8| {
            let from = f64::from(from);
            (f64::from(to) - from).mul_add(t, from)
        };
        rgb_to_hex(
            mix(self.r, target.r),
            mix(self.g, target.g),
            mix(self.b, target.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL space, displayed in the space-separated CSS form
/// `"H S% L%"` with whole-number components.
///
/// - `h`: hue, 0.0 to 360.0 degrees
/// - `s`: saturation, 0.0 to 100.0 percent
/// - `l`: lightness, 0.0 to 100.0 percent
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// The neutral fallback for unparsable input: `"0 0% 0%"`.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert to 8-bit RGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hex_to_rgb(&self.to_hex())
    }

    /// Convert to lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        if s <= 0.0 {
            return rgb_to_hex(l * 255.0, l * 255.0, l * 255.0);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0f64.mul_add(l, -q);

        rgb_to_hex(
            hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
            hue_to_channel(p, q, h) * 255.0,
            hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
        )
    }
}

impl fmt::Display for Hsl {
    #[allow(clippy::cast_possible_truncation)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Integer formatting avoids printing "-0" for tiny negative values.
        write!(
            f,
            "{} {}% {}%",
            self.h.round() as i64,
            self.s.round() as i64,
            self.l.round() as i64
        )
    }
}

/// Error returned when a string is not in `"H S% L%"` form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid HSL value `{input}`: expected \"H S% L%\"")]
pub struct ParseHslError {
    input: String,
}

impl FromStr for Hsl {
    type Err = ParseHslError;

    /// Parse `"210 40% 98%"`. Percent signs are optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseHslError { input: s.to_owned() };
        let parts: Vec<f64> = s
            .split_whitespace()
            .map(|part| part.trim_end_matches('%').parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| err())?;

        match parts.as_slice() {
            &[hue, sat, light] if hue.is_finite() && sat.is_finite() && light.is_finite() => {
                Ok(Self::new(hue, sat, light))
            }
            _ => Err(err()),
        }
    }
}

// ─── Free conversions ────────────────────────────────────────────────────────

/// Decode a 3- or 6-digit hex color, with or without a leading `#`.
///
/// The 3-digit form is expanded by digit duplication (`#f80` → `#ff8800`).
/// This is lenient: input is not validated, and any channel whose digits
/// cannot be decoded becomes 0. Use [`parse_hex`] for strict parsing.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Rgb {
    let digits = expand_hex(hex);
    let channel = |i: usize| {
        digits
            .get(i..i + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .unwrap_or(0)
    };
    Rgb::new(channel(0), channel(2), channel(4))
}

/// Encode three channel values as lowercase `#rrggbb`.
///
/// Each channel is rounded and clamped to 0–255 first, so any in-range
/// integer triple round-trips exactly through [`hex_to_rgb`].
#[must_use]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Rgb::new(to_u8(r), to_u8(g), to_u8(b)).to_hex()
}

/// Convert hex to HSL. Unparsable input yields [`Hsl::BLACK`].
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Hsl {
    parse_hex(hex).map_or(Hsl::BLACK, Rgb::to_hsl)
}

/// Convert HSL to lowercase hex.
#[must_use]
pub fn hsl_to_hex(hsl: Hsl) -> String {
    hsl.to_hex()
}

/// Blend a hex color `percent` (0–100) of the way toward white.
#[must_use]
pub fn lighten(hex: &str, percent: f64) -> String {
    hex_to_rgb(hex).blend_toward(Rgb::WHITE, percent)
}

/// Blend a hex color `percent` (0–100) of the way toward black.
#[must_use]
pub fn darken(hex: &str, percent: f64) -> String {
    hex_to_rgb(hex).blend_toward(Rgb::BLACK, percent)
}

// ─── Validation ──────────────────────────────────────────────────────────────

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern is valid")
});

/// Returns `true` if `s` is a 3- or 6-digit hex color (leading `#` optional).
#[must_use]
pub fn is_hex_color(s: &str) -> bool {
    HEX_COLOR.is_match(s.trim())
}

/// Strictly parse a hex color, returning `None` for malformed input.
#[must_use]
pub fn parse_hex(s: &str) -> Option<Rgb> {
    is_hex_color(s).then(|| hex_to_rgb(s))
}

/// Normalize a valid hex color to lowercase 6-digit `#rrggbb`.
#[must_use]
pub fn normalize_hex(s: &str) -> Option<String> {
    parse_hex(s).map(Rgb::to_hex)
}

// ─── sRGB Gamma ──────────────────────────────────────────────────────────────

/// Convert a single sRGB component (0.0–1.0) to linear light.
///
/// Uses the WCAG 2.x breakpoint of 0.03928.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn expand_hex(hex: &str) -> String {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if digits.len() == 3 && digits.is_ascii() {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_owned()
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

/// Round and clamp a 0–255 channel value.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // NaN casts to 0; clamp bounds everything else.
    v.round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        assert_eq!(hex_to_rgb("#ff8000"), Rgb::new(255, 128, 0));
    }

    #[test]
    fn hex_parsing_short() {
        assert_eq!(hex_to_rgb("#f80"), Rgb::new(255, 136, 0));
    }

    #[test]
    fn hex_parsing_no_hash() {
        assert_eq!(hex_to_rgb("00ff00"), Rgb::new(0, 255, 0));
    }

    #[test]
    fn hex_parsing_is_case_insensitive() {
        assert_eq!(hex_to_rgb("#FFFF00"), hex_to_rgb("#ffff00"));
    }

    #[test]
    fn hex_parsing_lenient_on_garbage() {
        // Undecodable channels fall back to zero instead of failing.
        assert_eq!(hex_to_rgb("#zz8000"), Rgb::new(0, 128, 0));
        assert_eq!(hex_to_rgb(""), Rgb::BLACK);
        assert_eq!(hex_to_rgb("#12"), Rgb::new(0x12, 0, 0));
    }

    #[test]
    fn strict_parsing_rejects_malformed() {
        assert!(parse_hex("xyz").is_none());
        assert!(parse_hex("#12345").is_none());
        assert!(parse_hex("").is_none());
        assert!(parse_hex("#1234567").is_none());
        assert_eq!(parse_hex("#ABC"), Some(Rgb::new(0xaa, 0xbb, 0xcc)));
    }

    #[test]
    fn is_hex_color_accepts_both_lengths() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("FAFAFA"));
        assert!(is_hex_color(" #09090b "));
        assert!(!is_hex_color("#ffff"));
        assert!(!is_hex_color("rgb(0,0,0)"));
    }

    #[test]
    fn normalize_expands_and_lowercases() {
        assert_eq!(normalize_hex("#ABC").as_deref(), Some("#aabbcc"));
        assert_eq!(normalize_hex("nope"), None);
    }

    // ── Hex Encoding ─────────────────────────────────────────────────────

    #[test]
    fn rgb_to_hex_rounds_and_clamps() {
        assert_eq!(rgb_to_hex(127.5, 0.4, 254.6), "#8000ff");
        assert_eq!(rgb_to_hex(-20.0, 300.0, 16.0), "#00ff10");
        assert_eq!(rgb_to_hex(f64::NAN, 0.0, 0.0), "#000000");
    }

    #[test]
    fn hex_roundtrip() {
        let original = "#c86432";
        let rgb = hex_to_rgb(original);
        assert_eq!(
            rgb_to_hex(f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b)),
            original
        );
    }

    #[test]
    fn display_matches_to_hex() {
        let rgb = Rgb::new(9, 9, 11);
        assert_eq!(rgb.to_string(), rgb.to_hex());
    }

    // ── HSL ──────────────────────────────────────────────────────────────

    #[test]
    fn hsl_of_zinc_900() {
        assert_eq!(hex_to_hsl("#18181b").to_string(), "240 6% 10%");
    }

    #[test]
    fn hsl_of_near_white() {
        assert_eq!(hex_to_hsl("#fafafa").to_string(), "0 0% 98%");
    }

    #[test]
    fn hsl_of_primaries() {
        assert_eq!(hex_to_hsl("#ff0000").to_string(), "0 100% 50%");
        assert_eq!(hex_to_hsl("#00ff00").to_string(), "120 100% 50%");
        assert_eq!(hex_to_hsl("#0000ff").to_string(), "240 100% 50%");
    }

    #[test]
    fn hsl_of_garbage_is_black() {
        assert_eq!(hex_to_hsl("not a color").to_string(), "0 0% 0%");
        assert_eq!(hex_to_hsl("#12345"), Hsl::BLACK);
    }

    #[test]
    fn hsl_to_hex_known_values() {
        assert_eq!(hsl_to_hex(Hsl::new(0.0, 100.0, 50.0)), "#ff0000");
        assert_eq!(hsl_to_hex(Hsl::new(240.0, 100.0, 50.0)), "#0000ff");
        assert_eq!(hsl_to_hex(Hsl::new(0.0, 0.0, 100.0)), "#ffffff");
        assert_eq!(hsl_to_hex(Hsl::BLACK), "#000000");
    }

    #[test]
    fn hsl_hue_wraps() {
        assert_eq!(
            hsl_to_hex(Hsl::new(360.0, 100.0, 50.0)),
            hsl_to_hex(Hsl::new(0.0, 100.0, 50.0))
        );
        assert_eq!(
            hsl_to_hex(Hsl::new(-120.0, 100.0, 50.0)),
            hsl_to_hex(Hsl::new(240.0, 100.0, 50.0))
        );
    }

    #[test]
    fn hsl_roundtrip_is_close() {
        let original = Rgb::new(200, 100, 50);
        let back = original.to_hsl().to_rgb();
        assert!((i16::from(back.r) - i16::from(original.r)).abs() <= 1);
        assert!((i16::from(back.g) - i16::from(original.g)).abs() <= 1);
        assert!((i16::from(back.b) - i16::from(original.b)).abs() <= 1);
    }

    #[test]
    fn hsl_from_str() {
        let hsl: Hsl = "210 40% 98%".parse().unwrap();
        assert!(approx_eq(hsl.h, 210.0, 1e-9));
        assert!(approx_eq(hsl.s, 40.0, 1e-9));
        assert!(approx_eq(hsl.l, 98.0, 1e-9));

        let bare: Hsl = "0 0 50".parse().unwrap();
        assert!(approx_eq(bare.l, 50.0, 1e-9));
    }

    #[test]
    fn hsl_from_str_rejects_malformed() {
        assert!("210 40%".parse::<Hsl>().is_err());
        assert!("a b c".parse::<Hsl>().is_err());
        assert!("1 2 3 4".parse::<Hsl>().is_err());
        let err = "oops".parse::<Hsl>().unwrap_err();
        assert!(err.to_string().contains("oops"));
    }

    // ── Blending ─────────────────────────────────────────────────────────

    #[test]
    fn lighten_endpoints() {
        assert_eq!(lighten("#336699", 0.0), "#336699");
        assert_eq!(lighten("#336699", 100.0), "#ffffff");
    }

    #[test]
    fn darken_endpoints() {
        assert_eq!(darken("#336699", 0.0), "#336699");
        assert_eq!(darken("#336699", 100.0), "#000000");
    }

    #[test]
    fn blend_halfway() {
        assert_eq!(darken("#ffffff", 50.0), "#808080");
        assert_eq!(lighten("#000000", 50.0), "#808080");
    }

    #[test]
    fn blend_clamps_percent() {
        assert_eq!(lighten("#123456", 250.0), "#ffffff");
        assert_eq!(darken("#123456", -5.0), "#123456");
    }

    // ── Gamma ────────────────────────────────────────────────────────────

    #[test]
    fn gamma_endpoints() {
        assert!(approx_eq(srgb_to_linear(0.0), 0.0, 1e-12));
        assert!(approx_eq(srgb_to_linear(1.0), 1.0, 1e-12));
    }

    #[test]
    fn gamma_linear_segment() {
        assert!(approx_eq(srgb_to_linear(0.03), 0.03 / 12.92, 1e-12));
    }

    #[test]
    fn gamma_mid_gray() {
        // sRGB 0.5 linearizes to ~0.214.
        assert!(approx_eq(srgb_to_linear(0.5), 0.214, 0.001));
    }
}
