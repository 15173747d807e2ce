//! Theme contrast auditing: check every text/surface pair, repair failures.
//!
//! The pair catalogue is fixed and palette-independent: the same eight
//! (background, foreground) relationships are checked in both the light
//! and the dark palette, so an audit is at most sixteen ratio checks.

use serde::Serialize;
use tracing::{debug, info};

use crate::contrast::{ContrastLevel, WCAG_AA, adjust_for_aa, contrast_level, contrast_ratio};
use crate::palette::{ColorKey, Mode};
use crate::schema::Theme;

/// A (background, foreground) slot relationship that must stay legible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContrastPair {
    pub label: &'static str,
    pub background: ColorKey,
    pub foreground: ColorKey,
}

impl ContrastPair {
    const fn new(label: &'static str, background: ColorKey, foreground: ColorKey) -> Self {
        Self {
            label,
            background,
            foreground,
        }
    }
}

/// Every pair an audit checks, in audit order.
pub const CONTRAST_PAIRS: [ContrastPair; 8] = [
    ContrastPair::new("Background", ColorKey::Background, ColorKey::Foreground),
    ContrastPair::new("Card", ColorKey::Card, ColorKey::CardForeground),
    ContrastPair::new("Popover", ColorKey::Popover, ColorKey::PopoverForeground),
    ContrastPair::new("Primary", ColorKey::Primary, ColorKey::PrimaryForeground),
    ContrastPair::new("Secondary", ColorKey::Secondary, ColorKey::SecondaryForeground),
    ContrastPair::new("Muted", ColorKey::Muted, ColorKey::MutedForeground),
    ContrastPair::new("Accent", ColorKey::Accent, ColorKey::AccentForeground),
    ContrastPair::new(
        "Destructive",
        ColorKey::Destructive,
        ColorKey::DestructiveForeground,
    ),
];

/// One foreground repair made by [`validate_and_fix_contrast`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjustment {
    pub mode: Mode,
    pub pair: &'static str,
    pub original: String,
    pub fixed: String,
    pub original_ratio: f64,
    pub fixed_ratio: f64,
}

/// The repaired theme plus every repair, in catalogue order.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditReport {
    pub theme: Theme,
    pub adjustments: Vec<Adjustment>,
}

impl AuditReport {
    /// `true` when the input theme needed no repairs.
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.adjustments.is_empty()
    }
}

/// Measure every catalogue pair in both modes and repair the ones under
/// WCAG AA.
///
/// Pairs are visited in [`CONTRAST_PAIRS`] order, light before dark. A
/// repaired foreground is written into a copy of the palette; `theme` is
/// not modified. A pair whose fix turns out identical to its current color
/// (the pure black/white fallback on an unreachable target) is not
/// reported, so auditing an audited theme always reports nothing.
#[must_use]
pub fn validate_and_fix_contrast(theme: &Theme) -> AuditReport {
    let mut fixed_theme = theme.clone();
    let mut adjustments = Vec::new();

    for pair in &CONTRAST_PAIRS {
        for mode in Mode::ALL {
            let palette = fixed_theme.palette(mode);
            let bg = palette.get(pair.background);
            let fg = palette.get(pair.foreground);

            let original_ratio = contrast_ratio(fg, bg);
            if original_ratio >= WCAG_AA {
                continue;
            }

            let fixed = adjust_for_aa(fg, bg);
            if fixed.eq_ignore_ascii_case(fg) {
                continue;
            }
            let fixed_ratio = contrast_ratio(&fixed, bg);

            debug!(
                %mode,
                pair = pair.label,
                original = fg,
                %fixed,
                original_ratio,
                fixed_ratio,
                "contrast repaired"
            );

            let adjustment = Adjustment {
                mode,
                pair: pair.label,
                original: fg.to_owned(),
                fixed: fixed.clone(),
                original_ratio,
                fixed_ratio,
            };

            let repaired = fixed_theme.palette(mode).clone().with(pair.foreground, fixed);
            fixed_theme = fixed_theme.with_palette(mode, repaired);
            adjustments.push(adjustment);
        }
    }

    info!(
        theme = %theme.name,
        adjustments = adjustments.len(),
        "contrast audit complete"
    );

    AuditReport {
        theme: fixed_theme,
        adjustments,
    }
}

/// The measured contrast of one pair in one mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairCheck {
    pub mode: Mode,
    pub pair: &'static str,
    pub background: String,
    pub foreground: String,
    pub ratio: f64,
    pub level: ContrastLevel,
}

/// Measure every catalogue pair without repairing anything.
#[must_use]
pub fn check_contrast(theme: &Theme) -> Vec<PairCheck> {
    CONTRAST_PAIRS
        .iter()
        .flat_map(|pair| {
            Mode::ALL.into_iter().map(move |mode| {
                let palette = theme.palette(mode);
                let background = palette.get(pair.background);
                let foreground = palette.get(pair.foreground);
                let ratio = contrast_ratio(foreground, background);
                PairCheck {
                    mode,
                    pair: pair.label,
                    background: background.to_owned(),
                    foreground: foreground.to_owned(),
                    ratio,
                    level: contrast_level(ratio),
                }
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::default_theme;
    use crate::palette::ColorPalette;
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    /// Every surface one extreme, every text slot the other.
    fn compliant_theme() -> Theme {
        let palette = |surface: &str, text: &str| {
            ColorPalette::from_fn(|key| {
                if key.as_str().to_ascii_lowercase().ends_with("foreground") {
                    text.to_owned()
                } else {
                    surface.to_owned()
                }
            })
        };
        default_theme()
            .with_palette(Mode::Light, palette("#ffffff", "#000000"))
            .with_palette(Mode::Dark, palette("#000000", "#FFFFFF"))
    }

    fn failing_primary_theme() -> Theme {
        let theme = compliant_theme();
        let light = theme
            .colors
            .light
            .clone()
            .with(ColorKey::Primary, "#FFFF00")
            .with(ColorKey::PrimaryForeground, "#FFFFFF");
        theme.with_palette(Mode::Light, light)
    }

    #[test]
    fn catalogue_has_eight_distinct_pairs() {
        assert_eq!(CONTRAST_PAIRS.len(), 8);
        for (i, a) in CONTRAST_PAIRS.iter().enumerate() {
            for b in &CONTRAST_PAIRS[i + 1..] {
                assert_ne!(a.label, b.label);
                assert_ne!(a.foreground, b.foreground);
            }
        }
    }

    #[test]
    fn compliant_theme_is_untouched() {
        let theme = compliant_theme();
        let report = validate_and_fix_contrast(&theme);
        assert!(report.is_compliant());
        assert_eq!(report.theme, theme);
    }

    #[test]
    fn yellow_primary_is_repaired_in_light_mode_only() {
        let theme = failing_primary_theme();
        let report = validate_and_fix_contrast(&theme);

        assert_eq!(report.adjustments.len(), 1);
        let adj = &report.adjustments[0];
        assert_eq!(adj.mode, Mode::Light);
        assert_eq!(adj.pair, "Primary");
        assert_eq!(adj.original, "#FFFFFF");
        assert!(adj.original_ratio < 1.1, "{}", adj.original_ratio);
        assert!(adj.fixed_ratio >= WCAG_AA, "{}", adj.fixed_ratio);

        assert_eq!(report.theme.colors.light.primary_foreground, adj.fixed);
        assert_eq!(report.theme.colors.light.primary, "#FFFF00");
        // The compliant dark pair (ratio 21) is neither changed nor reported.
        assert_eq!(report.theme.colors.dark, theme.colors.dark);
        assert_eq!(report.theme.colors.dark.foreground, "#FFFFFF");
    }

    #[test]
    fn input_theme_is_not_mutated() {
        let theme = failing_primary_theme();
        let before = theme.clone();
        let _ = validate_and_fix_contrast(&theme);
        assert_eq!(theme, before);
    }

    #[test]
    fn second_audit_is_empty() {
        let first = validate_and_fix_contrast(&failing_primary_theme());
        let second = validate_and_fix_contrast(&first.theme);
        assert!(second.is_compliant(), "{:?}", second.adjustments);
        assert_eq!(second.theme, first.theme);
    }

    #[test]
    fn default_theme_repairs() {
        // The zinc light palette ships a muted text and a destructive
        // foreground just under AA.
        let report = validate_and_fix_contrast(&default_theme());
        let repaired: Vec<(Mode, &str)> = report
            .adjustments
            .iter()
            .map(|a| (a.mode, a.pair))
            .collect();
        assert_eq!(
            repaired,
            vec![(Mode::Light, "Muted"), (Mode::Light, "Destructive")]
        );
        // Light destructive is a mid-luminance red: lightening cannot reach
        // AA, so the black extreme is used.
        assert_eq!(report.adjustments[1].fixed, "#000000");
    }

    #[test]
    fn all_pairs_pass_after_audit() {
        let report = validate_and_fix_contrast(&default_theme());
        for check in check_contrast(&report.theme) {
            assert!(
                check.level.passes_normal_text(),
                "{} {} still fails: {}",
                check.mode,
                check.pair,
                check.ratio
            );
        }
    }

    #[test]
    fn check_contrast_covers_sixteen_combinations() {
        let checks = check_contrast(&default_theme());
        assert_eq!(checks.len(), 16);
        assert_eq!(checks[0].pair, "Background");
        assert_eq!(checks[0].mode, Mode::Light);
        assert_eq!(checks[1].mode, Mode::Dark);
    }

    #[test]
    fn adjustment_serializes_camel_case() {
        let report = validate_and_fix_contrast(&failing_primary_theme());
        let json = serde_json::to_value(&report.adjustments[0]).unwrap();
        assert_eq!(json["mode"], "light");
        assert_eq!(json["pair"], "Primary");
        assert!(json.get("fixedRatio").is_some());
    }

    #[test]
    #[traced_test]
    fn repairs_are_logged() {
        let _ = validate_and_fix_contrast(&failing_primary_theme());
        assert!(logs_contain("contrast repaired"));
        assert!(logs_contain("contrast audit complete"));
    }
}
