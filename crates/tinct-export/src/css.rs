//! Style-sheet output: CSS custom properties and the Tailwind theme layer.
//!
//! ```text
//! :root {
//!   --background: #ffffff;
//!   ...
//! }
//!
//! .dark {
//!   --background: #09090b;
//!   ...
//! }
//! ```

use std::fmt::Write as _;

use tinct_theme::{Mode, Theme};

use crate::names::TOKEN_NAMES;
use crate::tokens::{Token, TokenSheet};

/// Selector of the light (default) block.
pub const ROOT_SELECTOR: &str = ":root";

/// Selector of the dark-mode override block.
pub const DARK_SELECTOR: &str = ".dark";

/// The two declaration blocks of a theme's global style sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalsCss {
    pub root: String,
    pub dark: String,
}

/// Render the `:root` and `.dark` blocks for `theme`.
#[must_use]
pub fn generate_globals_css(theme: &Theme) -> GlobalsCss {
    globals_with_prefix(theme, "")
}

/// Both blocks joined for display.
#[must_use]
pub fn generate_css_preview(theme: &Theme) -> String {
    generate_globals_css(theme).to_string()
}

impl std::fmt::Display for GlobalsCss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.root)?;
        writeln!(f)?;
        writeln!(f, "{}", self.dark)
    }
}

pub(crate) fn globals_with_prefix(theme: &Theme, prefix: &str) -> GlobalsCss {
    let sheet = TokenSheet::new(theme);
    GlobalsCss {
        root: declaration_block(ROOT_SELECTOR, sheet.get(Mode::Light), prefix),
        dark: declaration_block(DARK_SELECTOR, sheet.get(Mode::Dark), prefix),
    }
}

fn declaration_block(selector: &str, tokens: &[Token], prefix: &str) -> String {
    let mut out = format!("{selector} {{\n");
    for token in tokens {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "  --{prefix}{}: {};", token.name, token.value);
    }
    out.push('}');
    out
}

/// Tailwind v4 output: an `@theme inline` layer exposing every color as a
/// `--color-*` utility, followed by the globals it points at.
#[must_use]
pub fn generate_tailwind_css(theme: &Theme, prefix: &str) -> String {
    let mut out = String::from("@import \"tailwindcss\";\n\n@theme inline {\n");
    for (_, name) in TOKEN_NAMES {
        let _ = writeln!(out, "  --color-{name}: var(--{prefix}{name});");
    }
    let _ = writeln!(out, "  --radius-sm: var(--{prefix}radius-sm);");
    let _ = writeln!(out, "  --radius-md: var(--{prefix}radius-md);");
    let _ = writeln!(out, "  --radius-lg: var(--{prefix}radius-lg);");
    let _ = writeln!(out, "  --radius-xl: var(--{prefix}radius-xl);");
    let _ = writeln!(out, "  --font-sans: var(--{prefix}font-sans);");
    let _ = writeln!(out, "  --font-mono: var(--{prefix}font-mono);");
    out.push_str("}\n\n");
    out.push_str(&globals_with_prefix(theme, prefix).to_string());
    out
}
