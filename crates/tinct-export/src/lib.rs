//! # tinct-export — design-token exporters
//!
//! Renders a complete [`Theme`] as text for one target platform:
//!
//! ```text
//! Theme ──▶ TokenSheet (tokens.rs) ──┬─▶ css / tailwind   (css.rs)
//!           root: light + scales     ├─▶ json             (json.rs)
//!           dark: dark overrides     ├─▶ scss / properties (lines.rs)
//!                                    └─▶ kotlin / swift / typescript (native.rs)
//! ```
//!
//! Output is deterministic: token order follows [`names::TOKEN_NAMES`]
//! and the fixed scale order, and nothing time- or host-dependent is
//! emitted. Exporters never fail; color values that are not hex are passed
//! through as strings.

#![allow(clippy::module_name_repetitions)]

pub mod css;
pub mod hover;
pub mod json;
pub mod lines;
pub mod names;
pub mod native;
pub mod tokens;

use std::fmt;
use std::str::FromStr;

use tinct_theme::Theme;

pub use css::{GlobalsCss, generate_css_preview, generate_globals_css};
pub use hover::{HOVER_EFFECTS, HoverStyle, hover_style};
pub use names::TOKEN_NAMES;
pub use tokens::{Token, TokenSheet};

/// Class or namespace name used when none is given.
pub const DEFAULT_CLASS_NAME: &str = "ThemeTokens";

/// Every supported output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Css,
    Tailwind,
    Scss,
    Json,
    Properties,
    Kotlin,
    Swift,
    TypeScript,
}

impl ExportFormat {
    pub const ALL: [Self; 8] = [
        Self::Css,
        Self::Tailwind,
        Self::Scss,
        Self::Json,
        Self::Properties,
        Self::Kotlin,
        Self::Swift,
        Self::TypeScript,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Tailwind => "tailwind",
            Self::Scss => "scss",
            Self::Json => "json",
            Self::Properties => "properties",
            Self::Kotlin => "kotlin",
            Self::Swift => "swift",
            Self::TypeScript => "typescript",
        }
    }

    /// Conventional file name for this format's output.
    #[must_use]
    pub fn default_file_name(self, options: &ExportOptions) -> String {
        match self {
            Self::Css => "globals.css".into(),
            Self::Tailwind => "tailwind.css".into(),
            Self::Scss => "_tokens.scss".into(),
            Self::Json => "tokens.json".into(),
            Self::Properties => "tokens.properties".into(),
            Self::Kotlin => format!("{}.kt", names::type_name(&options.class_name)),
            Self::Swift => format!("{}.swift", names::type_name(&options.class_name)),
            Self::TypeScript => "tokens.ts".into(),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unrecognised export format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown export format `{0}` (expected one of: css, tailwind, scss, json, properties, kotlin, swift, typescript)")]
pub struct ParseFormatError(pub String);

impl FromStr for ExportFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "ts" => Ok(Self::TypeScript),
            "kt" => Ok(Self::Kotlin),
            _ => Self::ALL
                .into_iter()
                .find(|format| format.as_str() == name)
                .ok_or_else(|| ParseFormatError(s.to_owned())),
        }
    }
}

/// Naming options shared by every exporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Prepended to every emitted token name.
    pub prefix: Option<String>,
    /// Kotlin object, Swift enum and TypeScript type name. Characters that
    /// are not valid in an identifier are replaced with `_` on output.
    pub class_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            prefix: None,
            class_name: DEFAULT_CLASS_NAME.to_owned(),
        }
    }
}

impl ExportOptions {
    fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or_default()
    }
}

/// Render `theme` in `format`.
#[must_use]
pub fn export(theme: &Theme, format: ExportFormat, options: &ExportOptions) -> String {
    let prefix = options.prefix();
    let class = options.class_name.as_str();
    match format {
        ExportFormat::Css => css::globals_with_prefix(theme, prefix).to_string(),
        ExportFormat::Tailwind => css::generate_tailwind_css(theme, prefix),
        ExportFormat::Scss => lines::generate_scss(theme, prefix),
        ExportFormat::Json => json::generate_json(theme, prefix),
        ExportFormat::Properties => lines::generate_properties(theme, prefix),
        ExportFormat::Kotlin => native::generate_kotlin(theme, prefix, class),
        ExportFormat::Swift => native::generate_swift(theme, prefix, class),
        ExportFormat::TypeScript => native::generate_typescript(theme, prefix, class),
    }
}
