//! Built-in default tokens, the theme every partial is merged against.
//!
//! Palettes are neutral zinc scales with a five-color chart set. Values are
//! kept as tables in [`ColorKey::ALL`] order so a new slot only needs a new
//! table entry.

use crate::palette::{ColorKey, ColorPalette};
use crate::schema::{
    Buttons, Fonts, HoverEffect, Radius, Responsive, Spacing, Theme, ThemeColors, TypographySizes,
    TypographyStyles,
};

/// Display name of the default theme.
pub const DEFAULT_THEME_NAME: &str = "Default";

const LIGHT: [&str; ColorKey::COUNT] = [
    "#ffffff", // background
    "#09090b", // foreground
    "#ffffff", // card
    "#09090b", // cardForeground
    "#ffffff", // popover
    "#09090b", // popoverForeground
    "#18181b", // primary
    "#fafafa", // primaryForeground
    "#f4f4f5", // secondary
    "#18181b", // secondaryForeground
    "#f4f4f5", // muted
    "#71717a", // mutedForeground
    "#f4f4f5", // accent
    "#18181b", // accentForeground
    "#ef4444", // destructive
    "#fafafa", // destructiveForeground
    "#e4e4e7", // border
    "#e4e4e7", // input
    "#18181b", // ring
    "#e76e50", // chart1
    "#2a9d90", // chart2
    "#274754", // chart3
    "#e8c468", // chart4
    "#f4a462", // chart5
];

const DARK: [&str; ColorKey::COUNT] = [
    "#09090b", // background
    "#fafafa", // foreground
    "#09090b", // card
    "#fafafa", // cardForeground
    "#09090b", // popover
    "#fafafa", // popoverForeground
    "#fafafa", // primary
    "#18181b", // primaryForeground
    "#27272a", // secondary
    "#fafafa", // secondaryForeground
    "#27272a", // muted
    "#a1a1aa", // mutedForeground
    "#27272a", // accent
    "#fafafa", // accentForeground
    "#7f1d1d", // destructive
    "#fafafa", // destructiveForeground
    "#27272a", // border
    "#27272a", // input
    "#d4d4d8", // ring
    "#2662d9", // chart1
    "#2eb88a", // chart2
    "#e88c30", // chart3
    "#af57db", // chart4
    "#e23670", // chart5
];

/// The default light-mode palette.
#[must_use]
pub fn default_light_palette() -> ColorPalette {
    ColorPalette::from_fn(|key| LIGHT[key.index()].to_owned())
}

/// The default dark-mode palette.
#[must_use]
pub fn default_dark_palette() -> ColorPalette {
    ColorPalette::from_fn(|key| DARK[key.index()].to_owned())
}

fn triad(desktop: &str, tablet: &str, mobile: &str) -> Responsive {
    Responsive {
        desktop: desktop.to_owned(),
        tablet: tablet.to_owned(),
        mobile: mobile.to_owned(),
    }
}

#[must_use]
pub fn default_spacing() -> Spacing {
    Spacing {
        xs: "0.25rem".into(),
        sm: "0.5rem".into(),
        md: "1rem".into(),
        lg: "1.5rem".into(),
        xl: "2rem".into(),
        xxl: "3rem".into(),
        px: triad("2rem", "1.5rem", "1rem"),
        py: triad("1rem", "0.75rem", "0.5rem"),
        space_x: triad("1rem", "0.75rem", "0.5rem"),
        space_y: triad("1.5rem", "1rem", "0.75rem"),
        p: triad("1.5rem", "1.25rem", "1rem"),
    }
}

#[must_use]
pub fn default_radius() -> Radius {
    Radius {
        none: "0rem".into(),
        sm: "0.25rem".into(),
        md: "0.375rem".into(),
        lg: "0.5rem".into(),
        xl: "0.75rem".into(),
        xxl: "1rem".into(),
        full: "9999px".into(),
    }
}

#[must_use]
pub fn default_fonts() -> Fonts {
    Fonts {
        sans: "ui-sans-serif, system-ui, sans-serif".into(),
        mono: "ui-monospace, SFMono-Regular, Menlo, monospace".into(),
        heading: "ui-sans-serif, system-ui, sans-serif".into(),
    }
}

#[must_use]
pub fn default_typography_sizes() -> TypographySizes {
    TypographySizes {
        h1: "2.25rem".into(),
        h2: "1.875rem".into(),
        h3: "1.5rem".into(),
        h4: "1.25rem".into(),
        paragraph: "1rem".into(),
        blockquote: "1.125rem".into(),
        label: "0.875rem".into(),
        code: "0.875rem".into(),
        table: "0.875rem".into(),
        list: "1rem".into(),
    }
}

#[must_use]
pub fn default_typography_styles() -> TypographyStyles {
    TypographyStyles {
        body_line_height: "1.75".into(),
        h1_line_height: "1.2".into(),
        h2_line_height: "1.25".into(),
        h3_line_height: "1.3".into(),
        h4_line_height: "1.4".into(),
        letter_spacing: "-0.025em".into(),
    }
}

#[must_use]
pub fn default_buttons() -> Buttons {
    Buttons {
        radius: "0.375rem".into(),
        weight: "500".into(),
        size: "0.875rem".into(),
        hover_effect: HoverEffect::Opacity,
        input_radius: "0.375rem".into(),
        input_weight: "500".into(),
    }
}

/// The complete default theme.
#[must_use]
pub fn default_theme() -> Theme {
    Theme {
        name: DEFAULT_THEME_NAME.to_owned(),
        colors: ThemeColors {
            light: default_light_palette(),
            dark: default_dark_palette(),
        },
        spacing: default_spacing(),
        radius: default_radius(),
        fonts: default_fonts(),
        typography_sizes: default_typography_sizes(),
        typography_styles: default_typography_styles(),
        buttons: default_buttons(),
    }
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
