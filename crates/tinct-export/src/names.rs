//! The canonical token-name table.
//!
//! Internal palette keys are camelCase (`primaryForeground`, `chart1`);
//! every exported identifier is kebab-case (`primary-foreground`,
//! `chart-1`). All exporters go through [`TOKEN_NAMES`] so a color is
//! spelled the same way in every format.

use tinct_theme::ColorKey;

use crate::DEFAULT_CLASS_NAME;

/// External token name for every palette slot, in [`ColorKey::ALL`] order.
pub const TOKEN_NAMES: [(ColorKey, &str); ColorKey::COUNT] = [
    (ColorKey::Background, "background"),
    (ColorKey::Foreground, "foreground"),
    (ColorKey::Card, "card"),
    (ColorKey::CardForeground, "card-foreground"),
    (ColorKey::Popover, "popover"),
    (ColorKey::PopoverForeground, "popover-foreground"),
    (ColorKey::Primary, "primary"),
    (ColorKey::PrimaryForeground, "primary-foreground"),
    (ColorKey::Secondary, "secondary"),
    (ColorKey::SecondaryForeground, "secondary-foreground"),
    (ColorKey::Muted, "muted"),
    (ColorKey::MutedForeground, "muted-foreground"),
    (ColorKey::Accent, "accent"),
    (ColorKey::AccentForeground, "accent-foreground"),
    (ColorKey::Destructive, "destructive"),
    (ColorKey::DestructiveForeground, "destructive-foreground"),
    (ColorKey::Border, "border"),
    (ColorKey::Input, "input"),
    (ColorKey::Ring, "ring"),
    (ColorKey::Chart1, "chart-1"),
    (ColorKey::Chart2, "chart-2"),
    (ColorKey::Chart3, "chart-3"),
    (ColorKey::Chart4, "chart-4"),
    (ColorKey::Chart5, "chart-5"),
];

/// The exported name of a palette slot.
#[must_use]
pub const fn token_name(key: ColorKey) -> &'static str {
    TOKEN_NAMES[key.index()].1
}

/// `primary-foreground` → `PRIMARY_FOREGROUND`.
#[must_use]
pub fn to_screaming_snake(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect()
}

/// `primary-foreground` → `primaryForeground`.
#[must_use]
pub fn to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if upper_next && !out.is_empty() {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
            upper_next = false;
        } else {
            upper_next = true;
        }
    }
    out
}

/// A type name usable in Kotlin, Swift and TypeScript, and as a file stem.
///
/// Anything outside `[A-Za-z0-9_]` becomes `_` and a leading digit gets a
/// `_` prefix. An empty name falls back to [`DEFAULT_CLASS_NAME`].
#[must_use]
pub fn type_name(name: &str) -> String {
    let mut out: String = name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if out.is_empty() {
        return DEFAULT_CLASS_NAME.to_owned();
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Fold line breaks into spaces for use inside a line comment.
#[must_use]
pub fn single_line(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// camelCase → kebab-case, with a dash before a trailing digit run.
    fn kebab(camel: &str) -> String {
        let mut out = String::new();
        let mut prev_digit = false;
        for c in camel.chars() {
            if c.is_ascii_uppercase() {
                out.push('-');
                out.push(c.to_ascii_lowercase());
            } else if c.is_ascii_digit() && !prev_digit {
                out.push('-');
                out.push(c);
            } else {
                out.push(c);
            }
            prev_digit = c.is_ascii_digit();
        }
        out
    }

    #[test]
    fn table_follows_key_order() {
        for (i, (key, _)) in TOKEN_NAMES.iter().enumerate() {
            assert_eq!(key.index(), i, "{key} out of place");
        }
    }

    #[test]
    fn table_is_kebab_of_internal_key() {
        for (key, name) in TOKEN_NAMES {
            assert_eq!(kebab(key.as_str()), name);
        }
    }

    #[test]
    fn lookups() {
        assert_eq!(token_name(ColorKey::PrimaryForeground), "primary-foreground");
        assert_eq!(token_name(ColorKey::Chart3), "chart-3");
        assert_eq!(token_name(ColorKey::Ring), "ring");
    }

    #[test]
    fn case_conversions() {
        assert_eq!(to_screaming_snake("primary-foreground"), "PRIMARY_FOREGROUND");
        assert_eq!(to_screaming_snake("spacing-2xl"), "SPACING_2XL");
        assert_eq!(to_camel("primary-foreground"), "primaryForeground");
        assert_eq!(to_camel("chart-1"), "chart1");
        assert_eq!(to_camel("spacing-space-x-mobile"), "spacingSpaceXMobile");
        assert_eq!(to_camel("-leading"), "leading");
    }

    #[test]
    fn type_names_are_sanitized() {
        assert_eq!(type_name("ThemeTokens"), "ThemeTokens");
        assert_eq!(type_name("my tokens"), "my_tokens");
        assert_eq!(type_name("brand-2024.v1"), "brand_2024_v1");
        assert_eq!(type_name("3d"), "_3d");
        assert_eq!(type_name("Ünïcode"), "_n_code");
        assert_eq!(type_name("  "), DEFAULT_CLASS_NAME);
    }

    #[test]
    fn single_line_folds_every_break() {
        assert_eq!(single_line("two\nlines"), "two lines");
        assert_eq!(single_line("cr\rlf\r\n"), "cr lf  ");
    }
}
