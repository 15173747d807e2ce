//! Errors raised when loading theme documents.
//!
//! The engine itself never fails on color math; only turning text into a
//! [`Theme`](crate::Theme) can.

/// Failure to load a theme from JSON.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The text was not JSON, or a field had the wrong type.
    #[error("theme JSON could not be parsed: {0}")]
    Json(#[from] serde_json::Error),

    /// The document lacks a required group or one of the core colors.
    #[error(
        "theme is missing required structure (colors.light/dark with background, foreground, \
         primary and primaryForeground; spacing; radius; buttons)"
    )]
    InvalidStructure,
}

pub type Result<T, E = ThemeError> = std::result::Result<T, E>;
