//! WCAG contrast evaluation and foreground repair.
//!
//! Readability is judged in relative-luminance space (the WCAG 2.x
//! definition). Repairs blend the foreground linearly toward white or black
//! and keep the smallest compliant blend the search finds.
//!
//! | Level      | Ratio    |
//! |------------|----------|
//! | `AAA`      | >= 7.0   |
//! | `AA`       | >= 4.5   |
//! | `AA-Large` | >= 3.0   |
//! | `Fail`     | below    |

use std::fmt;

use serde::{Deserialize, Serialize};
use tinct_color::{Rgb, hex_to_rgb, srgb_to_linear};
use tracing::{debug, trace};

/// Minimum ratio for normal text (WCAG AA).
pub const WCAG_AA: f64 = 4.5;

/// Minimum ratio for normal text at the enhanced level (WCAG AAA).
pub const WCAG_AAA: f64 = 7.0;

/// Minimum ratio for large text (WCAG AA).
pub const WCAG_AA_LARGE: f64 = 3.0;

const BLACK: &str = "#000000";
const WHITE: &str = "#ffffff";

/// Search iterations before giving up on a blend.
const SEARCH_ITERATIONS: usize = 20;

/// A candidate this close to the target ends the search early.
const SEARCH_TOLERANCE: f64 = 0.1;

// ---------------------------------------------------------------------------
// Luminance & ratio
// ---------------------------------------------------------------------------

/// Compute the relative luminance of a color per WCAG 2.x.
///
/// Each channel is linearized, then weighted:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.to_unit();
    0.2126f64.mul_add(
        srgb_to_linear(r),
        0.7152f64.mul_add(srgb_to_linear(g), 0.0722 * srgb_to_linear(b)),
    )
}

/// Relative luminance of a hex color (lenient parsing).
#[must_use]
pub fn luminance_of(hex: &str) -> f64 {
    relative_luminance(hex_to_rgb(hex))
}

/// Compute the WCAG contrast ratio between two hex colors.
///
/// Returns a value in [1.0, 21.0]:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// Argument order does not matter.
#[must_use]
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    let la = luminance_of(a);
    let lb = luminance_of(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ---------------------------------------------------------------------------
// Levels
// ---------------------------------------------------------------------------

/// WCAG conformance class of a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContrastLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AA-Large")]
    AaLarge,
    Fail,
}

impl ContrastLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::AaLarge => "AA-Large",
            Self::Fail => "Fail",
        }
    }

    /// Whether this level is good enough for body text.
    #[must_use]
    pub const fn passes_normal_text(self) -> bool {
        matches!(self, Self::Aaa | Self::Aa)
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum ratio for each passing level, strictest first.
pub const LEVEL_THRESHOLDS: [(f64, ContrastLevel); 3] = [
    (WCAG_AAA, ContrastLevel::Aaa),
    (WCAG_AA, ContrastLevel::Aa),
    (WCAG_AA_LARGE, ContrastLevel::AaLarge),
];

/// Classify a contrast ratio.
#[must_use]
pub fn contrast_level(ratio: f64) -> ContrastLevel {
    LEVEL_THRESHOLDS
        .iter()
        .find(|(min, _)| ratio >= *min)
        .map_or(ContrastLevel::Fail, |&(_, level)| level)
}

// ---------------------------------------------------------------------------
// Repair
// ---------------------------------------------------------------------------

/// Black for light backgrounds (luminance > 0.5), white otherwise.
#[must_use]
pub fn suggest_foreground(bg: &str) -> &'static str {
    if luminance_of(bg) > 0.5 { BLACK } else { WHITE }
}

/// Adjust `fg` until it meets `target` contrast against `bg`.
///
/// A pair that already passes comes back unchanged. Otherwise the direction
/// is fixed up front from the background (dark backgrounds lighten the
/// foreground toward white, light ones darken it toward black) and a binary
/// search over the blend percentage looks for the smallest compliant blend.
/// Only compliant midpoints are accepted as the running best, so the
/// opposite direction is never explored even when it would stay closer to
/// the original hue.
///
/// If no midpoint passes, the result is [`suggest_foreground`] for `bg`
/// when it reaches `target`, otherwise whichever of pure black or white
/// contrasts more with `bg`. The result never has a lower ratio than both
/// extremes, and the function never fails.
#[must_use]
pub fn adjust_for_contrast(fg: &str, bg: &str, target: f64) -> String {
    let original_ratio = contrast_ratio(fg, bg);
    if original_ratio >= target {
        return fg.to_owned();
    }

    let toward = if luminance_of(bg) < 0.5 {
        Rgb::WHITE
    } else {
        Rgb::BLACK
    };
    let base = hex_to_rgb(fg);

    let (mut lo, mut hi) = (0.0_f64, 100.0_f64);
    let mut best = None;

    for iteration in 0..SEARCH_ITERATIONS {
        let mid = (lo + hi) * 0.5;
        let candidate = base.blend_toward(toward, mid);
        let ratio = contrast_ratio(&candidate, bg);
        trace!(iteration, blend = mid, ratio, %candidate, "contrast search step");

        if ratio >= target {
            best = Some(candidate);
            // Try to stay closer to the original color.
            hi = mid;
        } else {
            lo = mid;
        }

        if (ratio - target).abs() < SEARCH_TOLERANCE {
            break;
        }
    }

    best.unwrap_or_else(|| {
        let fallback = fallback_foreground(bg, target);
        debug!(fg, bg, target, original_ratio, fallback, "contrast search exhausted, using fallback");
        fallback.to_owned()
    })
}

/// [`adjust_for_contrast`] with the WCAG AA target.
#[must_use]
pub fn adjust_for_aa(fg: &str, bg: &str) -> String {
    adjust_for_contrast(fg, bg, WCAG_AA)
}

fn fallback_foreground(bg: &str, target: f64) -> &'static str {
    let suggested = suggest_foreground(bg);
    if contrast_ratio(suggested, bg) >= target {
        return suggested;
    }
    // Neither may pass; keep whichever extreme contrasts more.
    if contrast_ratio(BLACK, bg) >= contrast_ratio(WHITE, bg) {
        BLACK
    } else {
        WHITE
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
