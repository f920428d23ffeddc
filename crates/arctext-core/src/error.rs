// this_file: crates/arctext-core/src/error.rs

//! Error types for the arctext engine.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while laying out or rasterizing circular text.
#[derive(Debug, Error)]
pub enum ArcTextError {
    /// The text height eats the whole placement radius; rotation steps would
    /// divide by zero or go infinite.
    #[error(
        "degenerate placement radius {radius:.2}px (surface diameter {diameter:.1}px, text height {text_height:.2}px)"
    )]
    DegenerateRadius {
        radius: f32,
        diameter: f32,
        text_height: f32,
    },

    #[error("invalid hex color {value:?}")]
    InvalidColor { value: String },

    #[error("unknown alignment {value:?} (expected left, center or right)")]
    InvalidAlign { value: String },

    #[error("invalid font size {value:?}")]
    InvalidFontSize { value: String },

    #[error("failed to load font {}: {source}", .path.display())]
    FontLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("font not found: {name}")]
    FontNotFound { name: String },

    #[error("invalid font data")]
    InvalidFontData,

    #[error("render error: {0}")]
    Render(String),
}

impl ArcTextError {
    /// Build a render error from any displayable message.
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }

    /// Build a font load error for the given path.
    pub fn font_load(path: PathBuf, source: std::io::Error) -> Self {
        Self::FontLoad { path, source }
    }
}
