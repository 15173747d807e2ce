//! Line-oriented formats: SCSS variables and Java-style properties.

use std::fmt::Write as _;

use tinct_theme::{Mode, Theme};

use crate::names::single_line;
use crate::tokens::TokenSheet;

/// SCSS variables. Dark overrides carry a `dark-` infix.
///
/// ```scss
/// $primary: #18181b;
/// $dark-primary: #fafafa;
/// ```
#[must_use]
pub fn generate_scss(theme: &Theme, prefix: &str) -> String {
    let sheet = TokenSheet::new(theme);
    let mut out = format!("// {} design tokens\n\n// Light\n", single_line(&theme.name));
    for token in sheet.get(Mode::Light) {
        let _ = writeln!(out, "${prefix}{}: {};", token.name, token.value);
    }
    out.push_str("\n// Dark\n");
    for token in sheet.get(Mode::Dark) {
        let _ = writeln!(out, "${prefix}dark-{}: {};", token.name, token.value);
    }
    out
}

/// `key=value` properties. Colors are namespaced per mode, every other
/// token is shared.
///
/// ```properties
/// color.light.primary=#18181b
/// color.dark.primary=#fafafa
/// spacing-xs=0.25rem
/// ```
#[must_use]
pub fn generate_properties(theme: &Theme, prefix: &str) -> String {
    let sheet = TokenSheet::new(theme);
    let colors = tinct_theme::ColorKey::COUNT;
    let mut out = format!("# {} design tokens\n", single_line(&theme.name));

    for (section, tokens) in [("light", &sheet.root[..colors]), ("dark", &sheet.dark[..colors])] {
        for token in tokens {
            let _ = writeln!(
                out,
                "color.{section}.{prefix}{}={}",
                token.name,
                escape_value(&token.value)
            );
        }
    }
    for token in &sheet.root[colors..] {
        let _ = writeln!(out, "{prefix}{}={}", token.name, escape_value(&token.value));
    }
    for token in &sheet.dark[colors..] {
        let _ = writeln!(out, "dark.{prefix}{}={}", token.name, escape_value(&token.value));
    }
    out
}

// `#` and `!` only start comments at the beginning of a line, and `:`/`=`
// only split keys, so a value needs just backslash and line escapes.
fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tinct_theme::{ColorKey, default_theme};

    #[test]
    fn scss_light_and_dark() {
        let scss = generate_scss(&default_theme(), "");
        assert!(scss.starts_with("// Default design tokens\n"));
        assert!(scss.contains("\n$primary: #18181b;\n"));
        assert!(scss.contains("\n$dark-primary: #fafafa;\n"));
        assert!(scss.contains("\n$spacing-2xl: 3rem;\n"));
        assert!(!scss.contains("$dark-spacing"));
    }

    #[test]
    fn headers_stay_single_line() {
        let mut theme = default_theme();
        theme.name = "Night\r\n$evil: 1;".into();
        let scss = generate_scss(&theme, "");
        assert!(scss.starts_with("// Night  $evil: 1; design tokens\n"));
        assert!(!scss.contains('\r'));
        let props = generate_properties(&theme, "");
        assert!(props.starts_with("# Night  $evil: 1; design tokens\n"));
    }

    #[test]
    fn scss_prefix() {
        let scss = generate_scss(&default_theme(), "tk-");
        assert!(scss.contains("$tk-primary: #18181b;"));
        assert!(scss.contains("$tk-dark-primary: #fafafa;"));
    }

    #[test]
    fn properties_sections() {
        let props = generate_properties(&default_theme(), "");
        assert!(props.contains("\ncolor.light.primary=#18181b\n"));
        assert!(props.contains("\ncolor.dark.primary=#fafafa\n"));
        assert!(props.contains("\nradius-full=9999px\n"));
        assert!(props.contains("\ndark.button-hover-opacity=0.9\n"));
    }

    #[test]
    fn properties_line_count() {
        let theme = default_theme();
        let sheet = TokenSheet::new(&theme);
        let props = generate_properties(&theme, "");
        assert_eq!(props.lines().count(), 1 + sheet.root.len() + sheet.dark.len());
        assert_eq!(
            props.lines().filter(|l| l.starts_with("color.")).count(),
            ColorKey::COUNT * 2
        );
    }

    #[test]
    fn property_values_are_escaped() {
        assert_eq!(escape_value("a\\b\nc"), "a\\\\b\\nc");
        assert_eq!(escape_value("Menlo, monospace"), "Menlo, monospace");
    }
}
