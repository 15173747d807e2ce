//! Button hover-effect variables.
//!
//! Each effect name maps to a fixed set of opacity / transform / shadow
//! values. Shadows differ per mode: dark surfaces need a stronger shadow
//! and glows are tinted from the mode's own primary color.

use tinct_theme::{HoverEffect, Mode};

/// The CSS values one hover effect expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverStyle {
    pub effect: HoverEffect,
    pub opacity: &'static str,
    pub transform: &'static str,
    pub shadow_light: &'static str,
    pub shadow_dark: &'static str,
}

impl HoverStyle {
    #[must_use]
    pub const fn shadow(&self, mode: Mode) -> &'static str {
        match mode {
            Mode::Light => self.shadow_light,
            Mode::Dark => self.shadow_dark,
        }
    }
}

/// Every hover effect's variable set, in [`HoverEffect::ALL`] order.
pub const HOVER_EFFECTS: [HoverStyle; 5] = [
    HoverStyle {
        effect: HoverEffect::None,
        opacity: "1",
        transform: "none",
        shadow_light: "none",
        shadow_dark: "none",
    },
    HoverStyle {
        effect: HoverEffect::Opacity,
        opacity: "0.9",
        transform: "none",
        shadow_light: "none",
        shadow_dark: "none",
    },
    HoverStyle {
        effect: HoverEffect::Lift,
        opacity: "1",
        transform: "translateY(-2px)",
        shadow_light: "0 4px 12px rgba(0, 0, 0, 0.15)",
        shadow_dark: "0 4px 12px rgba(0, 0, 0, 0.5)",
    },
    HoverStyle {
        effect: HoverEffect::Scale,
        opacity: "1",
        transform: "scale(1.05)",
        shadow_light: "none",
        shadow_dark: "none",
    },
    HoverStyle {
        effect: HoverEffect::Glow,
        opacity: "1",
        transform: "none",
        shadow_light: "0 0 12px color-mix(in srgb, var(--primary) 40%, transparent)",
        shadow_dark: "0 0 16px color-mix(in srgb, var(--primary) 60%, transparent)",
    },
];

/// The variable set for `effect`.
#[must_use]
pub fn hover_style(effect: HoverEffect) -> &'static HoverStyle {
    HOVER_EFFECTS
        .iter()
        .find(|style| style.effect == effect)
        .unwrap_or(&HOVER_EFFECTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_effect_has_a_style() {
        for effect in HoverEffect::ALL {
            assert_eq!(hover_style(effect).effect, effect);
        }
    }

    #[test]
    fn lift_shadow_differs_per_mode() {
        let lift = hover_style(HoverEffect::Lift);
        assert_ne!(lift.shadow(Mode::Light), lift.shadow(Mode::Dark));
        assert_eq!(lift.transform, "translateY(-2px)");
    }

    #[test]
    fn none_is_inert() {
        let none = hover_style(HoverEffect::None);
        assert_eq!(none.opacity, "1");
        assert_eq!(none.transform, "none");
        assert_eq!(none.shadow(Mode::Dark), "none");
    }
}
