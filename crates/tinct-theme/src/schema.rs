//! The theme schema — every design-token group and its partial twin.
//!
//! Each group comes in two shapes: the complete struct (all fields
//! required) and a `Partial*` struct where every field is optional.
//! Merging is a per-field coalesce, `partial.field.unwrap_or(default)`,
//! applied recursively per sub-object. It never fails and never mutates
//! its inputs.
//!
//! JSON field names are camelCase to match stored theme documents; the
//! `2xl` scale steps are renamed explicitly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::palette::{ColorPalette, Mode, PartialColorPalette};

/// Declare a flat token group, its partial twin and the merge between them.
macro_rules! token_group {
    (
        $(#[$meta:meta])*
        $name:ident / $partial:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        #[doc = concat!("[`", stringify!($name), "`] with every field optional.")]
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $partial {
            $(
                $(#[$fmeta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $partial {
            /// Fill every missing field from `defaults`.
            #[must_use]
            pub fn merge_over(self, defaults: &$name) -> $name {
                $name {
                    $( $field: self.$field.unwrap_or_else(|| defaults.$field.clone()), )*
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Spacing
// ---------------------------------------------------------------------------

token_group! {
    /// A value that varies by viewport class.
    Responsive / PartialResponsive {
        desktop: String,
        tablet: String,
        mobile: String,
    }
}

/// The spacing scale (rem values) plus responsive padding/gap triads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spacing {
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
    #[serde(rename = "2xl")]
    pub xxl: String,
    pub px: Responsive,
    pub py: Responsive,
    pub space_x: Responsive,
    pub space_y: Responsive,
    pub p: Responsive,
}

/// [`Spacing`] with every field optional, triads included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialSpacing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xl: Option<String>,
    #[serde(rename = "2xl", skip_serializing_if = "Option::is_none")]
    pub xxl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub px: Option<PartialResponsive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub py: Option<PartialResponsive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_x: Option<PartialResponsive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_y: Option<PartialResponsive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p: Option<PartialResponsive>,
}

impl PartialSpacing {
    /// Fill every missing field from `defaults`, descending into triads.
    #[must_use]
    pub fn merge_over(self, defaults: &Spacing) -> Spacing {
        let triad = |partial: Option<PartialResponsive>, default: &Responsive| {
            partial.unwrap_or_default().merge_over(default)
        };
        Spacing {
            xs: self.xs.unwrap_or_else(|| defaults.xs.clone()),
            sm: self.sm.unwrap_or_else(|| defaults.sm.clone()),
            md: self.md.unwrap_or_else(|| defaults.md.clone()),
            lg: self.lg.unwrap_or_else(|| defaults.lg.clone()),
            xl: self.xl.unwrap_or_else(|| defaults.xl.clone()),
            xxl: self.xxl.unwrap_or_else(|| defaults.xxl.clone()),
            px: triad(self.px, &defaults.px),
            py: triad(self.py, &defaults.py),
            space_x: triad(self.space_x, &defaults.space_x),
            space_y: triad(self.space_y, &defaults.space_y),
            p: triad(self.p, &defaults.p),
        }
    }
}

// ---------------------------------------------------------------------------
// Radius, fonts, typography
// ---------------------------------------------------------------------------

token_group! {
    /// Corner radii. All rem-valued except `full`.
    Radius / PartialRadius {
        none: String,
        sm: String,
        md: String,
        lg: String,
        xl: String,
        #[serde(rename = "2xl")]
        xxl: String,
        full: String,
    }
}

token_group! {
    /// CSS font-family stacks.
    Fonts / PartialFonts {
        sans: String,
        mono: String,
        heading: String,
    }
}

token_group! {
    /// Font sizes for the ten typographic roles (rem values).
    TypographySizes / PartialTypographySizes {
        h1: String,
        h2: String,
        h3: String,
        h4: String,
        paragraph: String,
        blockquote: String,
        label: String,
        code: String,
        table: String,
        list: String,
    }
}

token_group! {
    /// Unitless line-heights and an em-valued letter-spacing.
    TypographyStyles / PartialTypographyStyles {
        body_line_height: String,
        h1_line_height: String,
        h2_line_height: String,
        h3_line_height: String,
        h4_line_height: String,
        letter_spacing: String,
    }
}

// ---------------------------------------------------------------------------
// Buttons
// ---------------------------------------------------------------------------

/// What a button does on hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverEffect {
    None,
    #[default]
    Opacity,
    Lift,
    Scale,
    Glow,
}

impl HoverEffect {
    pub const ALL: [Self; 5] = [Self::None, Self::Opacity, Self::Lift, Self::Scale, Self::Glow];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Opacity => "opacity",
            Self::Lift => "lift",
            Self::Scale => "scale",
            Self::Glow => "glow",
        }
    }
}

impl fmt::Display for HoverEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unknown hover-effect name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hover effect `{0}` (expected none, opacity, lift, scale or glow)")]
pub struct ParseHoverEffectError(String);

impl FromStr for HoverEffect {
    type Err = ParseHoverEffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|effect| effect.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseHoverEffectError(s.to_owned()))
    }
}

/// Read an optional hover effect, dropping names that are not recognised.
///
/// An unknown effect in a stored document falls back to the default during
/// merge instead of rejecting the whole theme.
fn lenient_hover_effect<'de, D>(deserializer: D) -> Result<Option<HoverEffect>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| {
        let effect = value.as_str().and_then(|name| name.parse().ok());
        if effect.is_none() && !value.is_null() {
            warn!(%value, "ignoring unknown hover effect");
        }
        effect
    }))
}

/// Button styling, plus separate tokens for native input-element buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buttons {
    pub radius: String,
    pub weight: String,
    pub size: String,
    pub hover_effect: HoverEffect,
    pub input_radius: String,
    pub input_weight: String,
}

/// [`Buttons`] with every field optional. Unknown hover effects read as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialButtons {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(
        deserialize_with = "lenient_hover_effect",
        skip_serializing_if = "Option::is_none"
    )]
    pub hover_effect: Option<HoverEffect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_weight: Option<String>,
}

impl PartialButtons {
    /// Fill every missing field from `defaults`.
    #[must_use]
    pub fn merge_over(self, defaults: &Buttons) -> Buttons {
        Buttons {
            radius: self.radius.unwrap_or_else(|| defaults.radius.clone()),
            weight: self.weight.unwrap_or_else(|| defaults.weight.clone()),
            size: self.size.unwrap_or_else(|| defaults.size.clone()),
            hover_effect: self.hover_effect.unwrap_or(defaults.hover_effect),
            input_radius: self.input_radius.unwrap_or_else(|| defaults.input_radius.clone()),
            input_weight: self.input_weight.unwrap_or_else(|| defaults.input_weight.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// The light and dark palettes of a theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub light: ColorPalette,
    pub dark: ColorPalette,
}

impl ThemeColors {
    #[must_use]
    pub const fn get(&self, mode: Mode) -> &ColorPalette {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

/// [`ThemeColors`] with either palette (or any of its slots) missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialThemeColors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<PartialColorPalette>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<PartialColorPalette>,
}

impl PartialThemeColors {
    /// Merge light and dark independently.
    #[must_use]
    pub fn merge_over(self, defaults: &ThemeColors) -> ThemeColors {
        ThemeColors {
            light: self.light.unwrap_or_default().merge_over(&defaults.light),
            dark: self.dark.unwrap_or_default().merge_over(&defaults.dark),
        }
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// The full design-token set.
///
/// Themes are values: auditing or merging returns a new `Theme` and leaves
/// the input untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
    pub spacing: Spacing,
    pub radius: Radius,
    pub fonts: Fonts,
    pub typography_sizes: TypographySizes,
    pub typography_styles: TypographyStyles,
    pub buttons: Buttons,
}

impl Theme {
    /// The palette for `mode`.
    #[must_use]
    pub const fn palette(&self, mode: Mode) -> &ColorPalette {
        self.colors.get(mode)
    }

    /// Return a copy with the `mode` palette replaced.
    #[must_use]
    pub fn with_palette(mut self, mode: Mode, palette: ColorPalette) -> Self {
        match mode {
            Mode::Light => self.colors.light = palette,
            Mode::Dark => self.colors.dark = palette,
        }
        self
    }
}

/// A theme where any group, or any field inside a group, may be missing.
///
/// This is the shape of untrusted input: stored documents, hand-written
/// files, or generated themes. [`PartialTheme::merge_over`] makes it whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialTheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<PartialThemeColors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<PartialSpacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<PartialRadius>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts: Option<PartialFonts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography_sizes: Option<PartialTypographySizes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography_styles: Option<PartialTypographyStyles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buttons: Option<PartialButtons>,
}

impl PartialTheme {
    /// Coalesce every group against `defaults`. Always structurally complete.
    #[must_use]
    pub fn merge_over(self, defaults: &Theme) -> Theme {
        Theme {
            name: self.name.unwrap_or_else(|| defaults.name.clone()),
            colors: self.colors.unwrap_or_default().merge_over(&defaults.colors),
            spacing: self.spacing.unwrap_or_default().merge_over(&defaults.spacing),
            radius: self.radius.unwrap_or_default().merge_over(&defaults.radius),
            fonts: self.fonts.unwrap_or_default().merge_over(&defaults.fonts),
            typography_sizes: self
                .typography_sizes
                .unwrap_or_default()
                .merge_over(&defaults.typography_sizes),
            typography_styles: self
                .typography_styles
                .unwrap_or_default()
                .merge_over(&defaults.typography_styles),
            buttons: self.buttons.unwrap_or_default().merge_over(&defaults.buttons),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
