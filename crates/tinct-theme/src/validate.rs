//! Structural validation and merge-with-defaults.
//!
//! [`validate_theme`] is a cheap gate over raw JSON: it rejects obviously
//! malformed documents but does not prove completeness.
//! [`merge_with_defaults`] is the remedy for everything else; it accepts
//! any sparseness and always returns a complete [`Theme`].

use serde_json::Value;
use tracing::debug;

use crate::builtin::default_theme;
use crate::error::{Result, ThemeError};
use crate::palette::{ColorKey, Mode};
use crate::schema::{PartialTheme, Theme};

/// Top-level groups a theme document must carry.
const REQUIRED_GROUPS: [&str; 4] = ["colors", "spacing", "radius", "buttons"];

/// Colors each palette must carry.
const REQUIRED_COLORS: [ColorKey; 4] = [
    ColorKey::Background,
    ColorKey::Foreground,
    ColorKey::Primary,
    ColorKey::PrimaryForeground,
];

/// Shallow structural check of a candidate theme document.
///
/// Returns `true` when the candidate is an object with `colors`, `spacing`,
/// `radius` and `buttons`, and both `colors.light` and `colors.dark` hold
/// `background`, `foreground`, `primary` and `primaryForeground`. Null,
/// `false` and empty-string values count as missing.
#[must_use]
pub fn validate_theme(candidate: &Value) -> bool {
    let Some(root) = candidate.as_object() else {
        return false;
    };

    if !REQUIRED_GROUPS
        .iter()
        .all(|group| root.get(*group).is_some_and(is_present))
    {
        return false;
    }

    Mode::ALL.iter().all(|mode| {
        candidate
            .pointer(&format!("/colors/{mode}"))
            .and_then(Value::as_object)
            .is_some_and(|palette| {
                REQUIRED_COLORS
                    .iter()
                    .all(|key| palette.get(key.as_str()).is_some_and(is_present))
            })
    })
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Complete a partial theme from the built-in defaults.
///
/// Every group is coalesced field by field and the two palettes are merged
/// independently, so `merge_with_defaults(PartialTheme::default())` is the
/// default theme.
#[must_use]
pub fn merge_with_defaults(partial: PartialTheme) -> Theme {
    partial.merge_over(&default_theme())
}

impl PartialTheme {
    /// Parse a partial theme. No structural gate: any subset is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Json`] if the text is not JSON or a present
    /// field has the wrong type.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl Theme {
    /// Load a theme document: parse, gate with [`validate_theme`], then
    /// fill anything missing from the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Json`] for malformed JSON and
    /// [`ThemeError::InvalidStructure`] when the gate rejects the document.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// [`Theme::from_json`] for an already-parsed document.
    ///
    /// # Errors
    ///
    /// See [`Theme::from_json`].
    pub fn from_value(value: Value) -> Result<Self> {
        if !validate_theme(&value) {
            return Err(ThemeError::InvalidStructure);
        }
        let partial: PartialTheme = serde_json::from_value(value)?;
        let theme = merge_with_defaults(partial);
        debug!(name = %theme.name, "theme loaded");
        Ok(theme)
    }

    /// Pretty-printed JSON in the stored-document shape.
    ///
    /// # Errors
    ///
    /// Serialization of a `Theme` cannot fail in practice; the error is
    /// surfaced rather than unwrapped.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PartialColorPalette;
    use crate::schema::{HoverEffect, PartialButtons, PartialThemeColors};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn minimal() -> Value {
        json!({
            "colors": {
                "light": {
                    "background": "#ffffff",
                    "foreground": "#000000",
                    "primary": "#2563eb",
                    "primaryForeground": "#ffffff"
                },
                "dark": {
                    "background": "#000000",
                    "foreground": "#ffffff",
                    "primary": "#60a5fa",
                    "primaryForeground": "#000000"
                }
            },
            "spacing": {},
            "radius": {},
            "buttons": {}
        })
    }

    // ── validate_theme ──────────────────────────────────────────────

    #[test]
    fn minimal_document_is_valid() {
        assert!(validate_theme(&minimal()));
    }

    #[test]
    fn default_theme_is_valid() {
        let value = serde_json::to_value(default_theme()).unwrap();
        assert!(validate_theme(&value));
    }

    #[test]
    fn non_objects_are_invalid() {
        assert!(!validate_theme(&json!(null)));
        assert!(!validate_theme(&json!([])));
        assert!(!validate_theme(&json!("theme")));
    }

    #[test]
    fn missing_group_is_invalid() {
        for group in REQUIRED_GROUPS {
            let mut doc = minimal();
            doc.as_object_mut().unwrap().remove(group);
            assert!(!validate_theme(&doc), "accepted without {group}");
        }
    }

    #[test]
    fn missing_palette_is_invalid() {
        let mut doc = minimal();
        doc["colors"].as_object_mut().unwrap().remove("dark");
        assert!(!validate_theme(&doc));
    }

    #[test]
    fn missing_required_color_is_invalid() {
        for key in REQUIRED_COLORS {
            let mut doc = minimal();
            doc["colors"]["light"]
                .as_object_mut()
                .unwrap()
                .remove(key.as_str());
            assert!(!validate_theme(&doc), "accepted without light {key}");
        }
    }

    #[test]
    fn empty_or_null_values_count_as_missing() {
        let mut doc = minimal();
        doc["colors"]["dark"]["primary"] = json!("");
        assert!(!validate_theme(&doc));

        let mut doc = minimal();
        doc["spacing"] = Value::Null;
        assert!(!validate_theme(&doc));
    }

    #[test]
    fn optional_colors_are_not_required() {
        // Only the four core colors are gated; the rest merge from defaults.
        let doc = minimal();
        assert!(doc["colors"]["light"].get("ring").is_none());
        assert!(validate_theme(&doc));
    }

    // ── merge_with_defaults ─────────────────────────────────────────

    #[test]
    fn empty_partial_is_default() {
        assert_eq!(merge_with_defaults(PartialTheme::default()), default_theme());
    }

    #[test]
    fn empty_json_is_default() {
        let partial = PartialTheme::from_json("{}").unwrap();
        assert_eq!(merge_with_defaults(partial), default_theme());
    }

    #[test]
    fn partial_keys_win_per_field() {
        let partial = PartialTheme {
            name: Some("Ocean".into()),
            colors: Some(PartialThemeColors {
                dark: Some(PartialColorPalette {
                    primary: Some("#0ea5e9".into()),
                    ..PartialColorPalette::default()
                }),
                light: None,
            }),
            buttons: Some(PartialButtons {
                hover_effect: Some(HoverEffect::Lift),
                ..PartialButtons::default()
            }),
            ..PartialTheme::default()
        };
        let theme = merge_with_defaults(partial);
        let defaults = default_theme();

        assert_eq!(theme.name, "Ocean");
        assert_eq!(theme.colors.dark.primary, "#0ea5e9");
        assert_eq!(theme.colors.dark.background, defaults.colors.dark.background);
        assert_eq!(theme.colors.light, defaults.colors.light);
        assert_eq!(theme.buttons.hover_effect, HoverEffect::Lift);
        assert_eq!(theme.buttons.radius, defaults.buttons.radius);
        assert_eq!(theme.spacing, defaults.spacing);
    }

    // ── Theme::from_json ────────────────────────────────────────────

    #[test]
    fn from_json_fills_gaps() {
        let theme = Theme::from_json(&minimal().to_string()).unwrap();
        let defaults = default_theme();
        assert_eq!(theme.colors.light.primary, "#2563eb");
        assert_eq!(theme.colors.light.ring, defaults.colors.light.ring);
        assert_eq!(theme.radius, defaults.radius);
        assert_eq!(theme.name, defaults.name);
    }

    #[test]
    fn from_json_rejects_bad_structure() {
        let err = Theme::from_json(r#"{"name":"x"}"#).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidStructure));
    }

    #[test]
    fn from_json_rejects_bad_syntax() {
        let err = Theme::from_json("{not json").unwrap_err();
        assert!(matches!(err, ThemeError::Json(_)));
    }

    #[test]
    fn from_json_rejects_wrong_types() {
        let mut doc = minimal();
        doc["radius"]["lg"] = json!(12);
        let err = Theme::from_json(&doc.to_string()).unwrap_err();
        assert!(matches!(err, ThemeError::Json(_)));
    }

    #[test]
    fn unknown_hover_effect_keeps_the_rest_of_the_partial() {
        let partial = PartialTheme::from_json(
            r##"{
                "colors": { "light": { "primary": "#123456" } },
                "buttons": { "hoverEffect": "bounce", "weight": "600" }
            }"##,
        )
        .unwrap();
        let theme = merge_with_defaults(partial);
        assert_eq!(theme.colors.light.primary, "#123456");
        assert_eq!(theme.buttons.weight, "600");
        assert_eq!(theme.buttons.hover_effect, HoverEffect::Opacity);
    }

    #[test]
    fn unknown_hover_effect_passes_the_full_loader() {
        let mut doc = minimal();
        doc["buttons"]["hoverEffect"] = json!("wobble");
        let theme = Theme::from_json(&doc.to_string()).unwrap();
        assert_eq!(theme.buttons.hover_effect, default_theme().buttons.hover_effect);
        assert_eq!(theme.colors.light.primary, "#2563eb");
    }

    #[test]
    fn pretty_json_roundtrips() {
        let theme = default_theme();
        let text = theme.to_json_pretty().unwrap();
        assert_eq!(Theme::from_json(&text).unwrap(), theme);
    }
}
