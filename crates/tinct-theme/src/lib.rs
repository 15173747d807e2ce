//! # tinct-theme — contrast evaluation and theme schema
//!
//! Turns raw, possibly partial theme documents into complete, legible
//! design-token sets. Data flows one way:
//!
//! ```text
//! JSON / PartialTheme
//!     │
//!     ▼
//! validate.rs: structural gate + merge over builtin defaults
//!     │
//!     ▼
//! contrast.rs: WCAG luminance, ratio, level, foreground repair
//!     │
//!     ▼
//! audit.rs:    check 8 pairs × 2 modes, repair failures, report
//!     │
//!     ▼
//! Theme (complete, audited) → tinct-export
//! ```
//!
//! Every function is pure and synchronous. Themes are values: operations
//! return new ones and never mutate their input, so any of this can be
//! called from any number of threads without coordination.

// Mathematical code uses small integer-to-float casts.
#![allow(clippy::cast_precision_loss)]
// Token struct fields mirror CSS names (sm/md/lg, h1..h4).
#![allow(clippy::similar_names)]
#![allow(clippy::module_name_repetitions)]

pub mod audit;
pub mod builtin;
pub mod contrast;
pub mod error;
pub mod palette;
pub mod schema;
pub mod validate;

pub use audit::{
    Adjustment, AuditReport, CONTRAST_PAIRS, ContrastPair, PairCheck, check_contrast,
    validate_and_fix_contrast,
};
pub use builtin::default_theme;
pub use contrast::{ContrastLevel, adjust_for_contrast, contrast_level, contrast_ratio};
pub use error::ThemeError;
pub use palette::{ColorKey, ColorPalette, Mode, PartialColorPalette};
pub use schema::{
    Buttons, Fonts, HoverEffect, PartialTheme, Radius, Responsive, Spacing, Theme, ThemeColors,
    TypographySizes, TypographyStyles,
};
pub use validate::{merge_with_defaults, validate_theme};
