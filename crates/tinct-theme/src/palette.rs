//! Color palettes — the 24 named color slots of one theme mode.
//!
//! A [`ColorPalette`] is always complete: every slot holds a color string.
//! Sparse input arrives as a [`PartialColorPalette`] and is merged over a
//! complete palette before anything else sees it.
//!
//! The slot list is declared once in the `palette_slots!` invocation below;
//! the key enum, both palette structs, their JSON names and the merge are
//! all generated from that single table.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! palette_slots {
    ($( $(#[$doc:meta])* $variant:ident => $field:ident : $json:literal ),* $(,)?) => {
        /// One named color slot of a [`ColorPalette`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ColorKey {
            $( $(#[$doc])* $variant, )*
        }

        impl ColorKey {
            /// Every slot, in declaration (and export) order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )* ];

            /// The camelCase key used in theme JSON.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $json, )*
                }
            }
        }

        /// A complete set of theme colors for one mode.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct ColorPalette {
            $(
                #[serde(rename = $json)]
                pub $field: String,
            )*
        }

        impl ColorPalette {
            /// Build a palette by asking `f` for every slot.
            pub fn from_fn(mut f: impl FnMut(ColorKey) -> String) -> Self {
                Self {
                    $( $field: f(ColorKey::$variant), )*
                }
            }

            /// The color stored in `key`.
            #[must_use]
            pub fn get(&self, key: ColorKey) -> &str {
                match key {
                    $( ColorKey::$variant => &self.$field, )*
                }
            }

            fn slot_mut(&mut self, key: ColorKey) -> &mut String {
                match key {
                    $( ColorKey::$variant => &mut self.$field, )*
                }
            }
        }

        /// A palette where any slot may be missing.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct PartialColorPalette {
            $(
                #[serde(rename = $json, skip_serializing_if = "Option::is_none")]
                pub $field: Option<String>,
            )*
        }

        impl PartialColorPalette {
            /// Fill every missing slot from `defaults`. Present slots win.
            #[must_use]
            pub fn merge_over(self, defaults: &ColorPalette) -> ColorPalette {
                ColorPalette {
                    $( $field: self.$field.unwrap_or_else(|| defaults.$field.clone()), )*
                }
            }
        }
    };
}

palette_slots! {
    /// Page background.
    Background => background: "background",
    /// Body text on [`ColorKey::Background`].
    Foreground => foreground: "foreground",
    Card => card: "card",
    CardForeground => card_foreground: "cardForeground",
    Popover => popover: "popover",
    PopoverForeground => popover_foreground: "popoverForeground",
    /// Main call-to-action fill.
    Primary => primary: "primary",
    PrimaryForeground => primary_foreground: "primaryForeground",
    Secondary => secondary: "secondary",
    SecondaryForeground => secondary_foreground: "secondaryForeground",
    /// Subdued surfaces (table stripes, disabled fills).
    Muted => muted: "muted",
    MutedForeground => muted_foreground: "mutedForeground",
    Accent => accent: "accent",
    AccentForeground => accent_foreground: "accentForeground",
    /// Dangerous actions and error states.
    Destructive => destructive: "destructive",
    DestructiveForeground => destructive_foreground: "destructiveForeground",
    Border => border: "border",
    Input => input: "input",
    /// Focus ring.
    Ring => ring: "ring",
    Chart1 => chart1: "chart1",
    Chart2 => chart2: "chart2",
    Chart3 => chart3: "chart3",
    Chart4 => chart4: "chart4",
    Chart5 => chart5: "chart5",
}

impl ColorKey {
    /// Number of slots in a palette.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this slot in [`ColorKey::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ColorPalette {
    /// Return a copy with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: ColorKey, value: impl Into<String>) -> Self {
        *self.slot_mut(key) = value.into();
        self
    }

    /// Iterate `(slot, color)` in [`ColorKey::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorKey, &str)> {
        ColorKey::ALL.iter().map(move |&key| (key, self.get(key)))
    }
}

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Which of a theme's two palettes is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
