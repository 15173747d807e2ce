//! Source-code constants for native and TypeScript consumers.
//!
//! Identifiers are derived from the kebab token names: `SCREAMING_SNAKE`
//! for Kotlin, `camelCase` for Swift. TypeScript keeps the kebab names as
//! quoted keys. String literals go through `serde_json`, whose escaping is
//! valid in all three languages (Kotlin additionally needs `$` escaped).

use std::fmt::Write as _;

use tinct_color::normalize_hex;
use tinct_theme::{ColorKey, Mode, Theme};

use crate::names::{single_line, to_camel, to_screaming_snake, type_name};
use crate::tokens::{Token, TokenSheet};

fn quoted(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| String::from("\"\""))
}

/// Identifiers may not start with a digit.
fn identifier(mut ident: String) -> String {
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

fn kotlin_value(value: &str) -> String {
    match normalize_hex(value) {
        // `#rrggbb` → opaque ARGB literal.
        Some(hex) => format!("0xFF{}", hex[1..].to_ascii_uppercase()),
        None => quoted(value).replace('$', "\\$"),
    }
}

fn kotlin_consts(out: &mut String, indent: &str, tokens: &[Token], prefix: &str) {
    for token in tokens {
        let name = identifier(to_screaming_snake(&format!("{prefix}{}", token.name)));
        let _ = writeln!(out, "{indent}const val {name} = {}", kotlin_value(&token.value));
    }
}

/// A Kotlin `object` with `Light` and `Dark` color objects and shared
/// scale constants. Hex colors become ARGB `Long` literals.
#[must_use]
pub fn generate_kotlin(theme: &Theme, prefix: &str, class_name: &str) -> String {
    let sheet = TokenSheet::new(theme);
    let colors = ColorKey::COUNT;
    let mut out = format!(
        "// {} design tokens\n\nobject {} {{\n",
        single_line(&theme.name),
        type_name(class_name)
    );

    out.push_str("    object Light {\n");
    kotlin_consts(&mut out, "        ", &sheet.root[..colors], prefix);
    out.push_str("    }\n\n    object Dark {\n");
    kotlin_consts(&mut out, "        ", &sheet.dark, prefix);
    out.push_str("    }\n\n");
    kotlin_consts(&mut out, "    ", &sheet.root[colors..], prefix);
    out.push_str("}\n");
    out
}

fn swift_lets(out: &mut String, indent: &str, tokens: &[Token], prefix: &str) {
    for token in tokens {
        let name = identifier(to_camel(&format!("{prefix}{}", token.name)));
        let _ = writeln!(out, "{indent}static let {name} = {}", quoted(&token.value));
    }
}

/// A caseless Swift `enum` namespace mirroring the Kotlin layout. Colors
/// stay hex strings.
#[must_use]
pub fn generate_swift(theme: &Theme, prefix: &str, class_name: &str) -> String {
    let sheet = TokenSheet::new(theme);
    let colors = ColorKey::COUNT;
    let mut out = format!(
        "// {} design tokens\n\nenum {} {{\n",
        single_line(&theme.name),
        type_name(class_name)
    );

    out.push_str("    enum Light {\n");
    swift_lets(&mut out, "        ", &sheet.root[..colors], prefix);
    out.push_str("    }\n\n    enum Dark {\n");
    swift_lets(&mut out, "        ", &sheet.dark, prefix);
    out.push_str("    }\n\n");
    swift_lets(&mut out, "    ", &sheet.root[colors..], prefix);
    out.push_str("}\n");
    out
}

/// `ThemeTokens` → `themeTokens`.
fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}

fn ts_object(out: &mut String, key: &str, tokens: &[Token], prefix: &str) {
    let _ = writeln!(out, "  {key}: {{");
    for token in tokens {
        let _ = writeln!(
            out,
            "    {}: {},",
            quoted(&format!("{prefix}{}", token.name)),
            quoted(&token.value)
        );
    }
    out.push_str("  },\n");
}

/// A single `as const` object: `light` holds every root token, `dark`
/// the dark overrides.
#[must_use]
pub fn generate_typescript(theme: &Theme, prefix: &str, class_name: &str) -> String {
    let sheet = TokenSheet::new(theme);
    let type_ident = type_name(class_name);
    let ident = lower_first(&type_ident);
    let mut out = format!(
        "// {} design tokens\n\nexport const {ident} = {{\n",
        single_line(&theme.name)
    );
    let _ = writeln!(out, "  name: {},", quoted(&theme.name));
    ts_object(&mut out, "light", sheet.get(Mode::Light), prefix);
    ts_object(&mut out, "dark", sheet.get(Mode::Dark), prefix);
    out.push_str("} as const;\n\n");
    let _ = writeln!(out, "export type {type_ident} = typeof {ident};");
    out
}
