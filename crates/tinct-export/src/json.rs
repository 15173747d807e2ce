//! JSON design-token document.
//!
//! ```json
//! {
//!   "name": "Default",
//!   "colors": {
//!     "light": { "background": "#ffffff", ... },
//!     "dark":  { "background": "#09090b", ... }
//!   },
//!   "spacing": { "spacing-xs": "0.25rem", ... },
//!   "radius": { ... },
//!   "fonts": { ... },
//!   "typography": { ... },
//!   "buttons": { ..., "hover": { "light": { ... }, "dark": { ... } } }
//! }
//! ```
//!
//! Key order follows the token sheet.

use serde_json::{Map, Value, json};
use tinct_theme::{Mode, Theme};

use crate::tokens::{Token, color_tokens, hover_tokens, scale_tokens};

/// Scale-token groups in document order.
const GROUPS: [&str; 5] = ["spacing", "radius", "fonts", "typography", "buttons"];

fn group_of(name: &str) -> &'static str {
    if name.starts_with("spacing-") {
        "spacing"
    } else if name.starts_with("radius") {
        "radius"
    } else if name.starts_with("font-") {
        "fonts"
    } else if name.starts_with("button-") || name.starts_with("input-button-") {
        "buttons"
    } else {
        "typography"
    }
}

fn object<'a>(tokens: impl IntoIterator<Item = &'a Token>, prefix: &str) -> Map<String, Value> {
    tokens
        .into_iter()
        .map(|t| (format!("{prefix}{}", t.name), Value::String(t.value.clone())))
        .collect()
}

/// The token document as a JSON value.
#[must_use]
pub fn tokens_value(theme: &Theme, prefix: &str) -> Value {
    let mut doc = Map::new();
    doc.insert("name".into(), Value::String(theme.name.clone()));
    doc.insert(
        "colors".into(),
        json!({
            "light": object(&color_tokens(&theme.colors.light), prefix),
            "dark": object(&color_tokens(&theme.colors.dark), prefix),
        }),
    );

    let scales = scale_tokens(theme);
    for group in GROUPS {
        let members = object(scales.iter().filter(|t| group_of(&t.name) == group), prefix);
        doc.insert(group.into(), Value::Object(members));
    }

    if let Some(Value::Object(buttons)) = doc.get_mut("buttons") {
        buttons.insert(
            "hover".into(),
            json!({
                "light": object(&hover_tokens(theme, Mode::Light), prefix),
                "dark": object(&hover_tokens(theme, Mode::Dark), prefix),
            }),
        );
    }

    Value::Object(doc)
}

/// Pretty-printed token document with a trailing newline.
#[must_use]
pub fn generate_json(theme: &Theme, prefix: &str) -> String {
    // A tree of strings always serializes.
    let mut out = serde_json::to_string_pretty(&tokens_value(theme, prefix)).unwrap_or_default();
    out.push('\n');
    out
}
