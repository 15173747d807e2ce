//! Flattening a theme into named tokens.
//!
//! Every exporter renders the same [`TokenSheet`]: a root list (light
//! colors plus every non-color token) and a dark list (dark colors plus the
//! mode-dependent hover variables). Names are unprefixed kebab-case; each
//! exporter applies its own prefix and framing.

use tinct_theme::{ColorPalette, Mode, Responsive, Theme};

use crate::hover::hover_style;
use crate::names::TOKEN_NAMES;

/// One exported name/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub name: String,
    pub value: String,
}

impl Token {
    fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A theme flattened for export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSheet {
    /// Light colors, scales, fonts, typography, buttons, light hover vars.
    pub root: Vec<Token>,
    /// Dark colors and dark hover vars.
    pub dark: Vec<Token>,
}

impl TokenSheet {
    #[must_use]
    pub fn new(theme: &Theme) -> Self {
        let mut root = color_tokens(&theme.colors.light);
        root.extend(scale_tokens(theme));
        root.extend(hover_tokens(theme, Mode::Light));

        let mut dark = color_tokens(&theme.colors.dark);
        dark.extend(hover_tokens(theme, Mode::Dark));

        Self { root, dark }
    }

    /// The token list for `mode`.
    #[must_use]
    pub fn get(&self, mode: Mode) -> &[Token] {
        match mode {
            Mode::Light => &self.root,
            Mode::Dark => &self.dark,
        }
    }
}

/// Every palette slot under its canonical name.
#[must_use]
pub fn color_tokens(palette: &ColorPalette) -> Vec<Token> {
    TOKEN_NAMES
        .iter()
        .map(|&(key, name)| Token::new(name, palette.get(key)))
        .collect()
}

fn triad(out: &mut Vec<Token>, base: &str, values: &Responsive) {
    out.push(Token::new(format!("{base}-desktop"), &values.desktop));
    out.push(Token::new(format!("{base}-tablet"), &values.tablet));
    out.push(Token::new(format!("{base}-mobile"), &values.mobile));
}

/// Spacing, radius, fonts, typography and button tokens.
#[must_use]
pub fn scale_tokens(theme: &Theme) -> Vec<Token> {
    let spacing = &theme.spacing;
    let radius = &theme.radius;
    let fonts = &theme.fonts;
    let sizes = &theme.typography_sizes;
    let styles = &theme.typography_styles;
    let buttons = &theme.buttons;

    let mut out = vec![
        Token::new("spacing-xs", &spacing.xs),
        Token::new("spacing-sm", &spacing.sm),
        Token::new("spacing-md", &spacing.md),
        Token::new("spacing-lg", &spacing.lg),
        Token::new("spacing-xl", &spacing.xl),
        Token::new("spacing-2xl", &spacing.xxl),
    ];
    triad(&mut out, "spacing-px", &spacing.px);
    triad(&mut out, "spacing-py", &spacing.py);
    triad(&mut out, "spacing-space-x", &spacing.space_x);
    triad(&mut out, "spacing-space-y", &spacing.space_y);
    triad(&mut out, "spacing-p", &spacing.p);

    out.extend([
        Token::new("radius-none", &radius.none),
        Token::new("radius-sm", &radius.sm),
        Token::new("radius-md", &radius.md),
        Token::new("radius-lg", &radius.lg),
        Token::new("radius-xl", &radius.xl),
        Token::new("radius-2xl", &radius.xxl),
        Token::new("radius-full", &radius.full),
        // Canonical alias used by component libraries.
        Token::new("radius", &radius.lg),
        Token::new("font-sans", &fonts.sans),
        Token::new("font-mono", &fonts.mono),
        Token::new("font-heading", &fonts.heading),
        Token::new("text-h1", &sizes.h1),
        Token::new("text-h2", &sizes.h2),
        Token::new("text-h3", &sizes.h3),
        Token::new("text-h4", &sizes.h4),
        Token::new("text-paragraph", &sizes.paragraph),
        Token::new("text-blockquote", &sizes.blockquote),
        Token::new("text-label", &sizes.label),
        Token::new("text-code", &sizes.code),
        Token::new("text-table", &sizes.table),
        Token::new("text-list", &sizes.list),
        Token::new("line-height-body", &styles.body_line_height),
        Token::new("line-height-h1", &styles.h1_line_height),
        Token::new("line-height-h2", &styles.h2_line_height),
        Token::new("line-height-h3", &styles.h3_line_height),
        Token::new("line-height-h4", &styles.h4_line_height),
        Token::new("letter-spacing", &styles.letter_spacing),
        Token::new("button-radius", &buttons.radius),
        Token::new("button-weight", &buttons.weight),
        Token::new("button-size", &buttons.size),
        Token::new("input-button-radius", &buttons.input_radius),
        Token::new("input-button-weight", &buttons.input_weight),
    ]);
    out
}

/// The derived hover variables for the theme's hover effect in `mode`.
#[must_use]
pub fn hover_tokens(theme: &Theme, mode: Mode) -> Vec<Token> {
    let style = hover_style(theme.buttons.hover_effect);
    vec![
        Token::new("button-hover-opacity", style.opacity),
        Token::new("button-hover-transform", style.transform),
        Token::new("button-hover-shadow", style.shadow(mode)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_theme::{ColorKey, HoverEffect, default_theme};

    fn value<'a>(tokens: &'a [Token], name: &str) -> Option<&'a str> {
        tokens
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.value.as_str())
    }

    #[test]
    fn root_starts_with_light_colors() {
        let sheet = TokenSheet::new(&default_theme());
        assert_eq!(sheet.root.len(), ColorKey::COUNT + scale_tokens(&default_theme()).len() + 3);
        assert_eq!(sheet.root[0], Token::new("background", "#ffffff"));
        assert_eq!(value(&sheet.root, "primary"), Some("#18181b"));
    }

    #[test]
    fn dark_holds_only_colors_and_hover() {
        let sheet = TokenSheet::new(&default_theme());
        assert_eq!(sheet.dark.len(), ColorKey::COUNT + 3);
        assert_eq!(value(&sheet.dark, "primary"), Some("#fafafa"));
        assert_eq!(value(&sheet.dark, "spacing-xs"), None);
    }

    #[test]
    fn radius_alias_is_lg() {
        let theme = default_theme();
        let tokens = scale_tokens(&theme);
        assert_eq!(value(&tokens, "radius"), Some(theme.radius.lg.as_str()));
    }

    #[test]
    fn triads_expand_to_three_tokens() {
        let tokens = scale_tokens(&default_theme());
        assert_eq!(value(&tokens, "spacing-px-desktop"), Some("2rem"));
        assert_eq!(value(&tokens, "spacing-space-y-mobile"), Some("0.75rem"));
    }

    #[test]
    fn names_are_unique() {
        let sheet = TokenSheet::new(&default_theme());
        for list in [&sheet.root, &sheet.dark] {
            let mut names: Vec<&str> = list.iter().map(|t| t.name.as_str()).collect();
            names.sort_unstable();
            let before = names.len();
            names.dedup();
            assert_eq!(names.len(), before);
        }
    }

    #[test]
    fn hover_tokens_follow_effect() {
        let mut theme = default_theme();
        theme.buttons.hover_effect = HoverEffect::Scale;
        let tokens = hover_tokens(&theme, Mode::Light);
        assert_eq!(value(&tokens, "button-hover-transform"), Some("scale(1.05)"));
    }
}
