// this_file: crates/arctext-core/src/types.rs

//! Core types used throughout the arctext engine.

use crate::{ArcTextError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Text alignment relative to the start angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    /// Angular direction of glyph advance: +1 draws clockwise (right
    /// alignment), -1 draws counter-clockwise (left and center).
    pub fn direction(self) -> f32 {
        match self {
            Align::Right => 1.0,
            Align::Left | Align::Center => -1.0,
        }
    }

    /// Whether the glyph sequence is drawn in reverse order. Inward-facing
    /// text reads in the opposite rotational direction from outward-facing
    /// text for a given alignment.
    pub fn reverses_glyphs(self, inward_facing: bool) -> bool {
        match self {
            Align::Left | Align::Center => inward_facing,
            Align::Right => !inward_facing,
        }
    }
}

impl FromStr for Align {
    type Err = ArcTextError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "left" => Ok(Align::Left),
            "center" => Ok(Align::Center),
            "right" => Ok(Align::Right),
            _ => Err(ArcTextError::InvalidAlign {
                value: value.to_string(),
            }),
        }
    }
}

/// Input parameters for one circular text render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutRequest {
    /// The text to place along the arc
    pub text: String,
    /// Diameter of the circle the text follows, in pixels
    pub diameter: f32,
    /// Start angle in degrees; 0 is the top of the circle
    pub start_angle: f32,
    /// Position of the text relative to the start angle
    pub align: Align,
    /// Draw inside the diameter, or outside its edge
    pub text_inside: bool,
    /// Glyph bases face the circle center, or away from it
    pub inward_facing: bool,
    /// Font family name or path to a font file
    pub font_family: String,
    /// Font size with CSS-style units, e.g. "16px"
    pub font_size: String,
    /// Uniform extra gap between consecutive glyphs, in pixels; negative
    /// compacts spacing
    pub kerning: f32,
    /// Text color (hex)
    pub text_color: String,
    /// Background color (hex, leading '#' optional)
    pub background: String,
    /// Background opacity, 0..1
    pub background_opacity: f32,
}

impl LayoutRequest {
    pub fn new(text: impl Into<String>, diameter: f32) -> Self {
        Self {
            text: text.into(),
            diameter,
            start_angle: 0.0,
            align: Align::Center,
            text_inside: true,
            inward_facing: true,
            font_family: "sans-serif".to_string(),
            font_size: "16px".to_string(),
            kerning: 0.0,
            text_color: "#000000".to_string(),
            background: "#FFFFFF".to_string(),
            background_opacity: 1.0,
        }
    }
}

/// Per-character placement along the arc, computed and consumed within a
/// single layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlyphPlacement {
    /// The character to stamp
    pub ch: char,
    /// Measured advance width in pixels
    pub width: f32,
    /// Cumulative rotation angle at draw time, in radians
    pub angle: f32,
}

/// Bitmap image
#[derive(Debug, Clone)]
pub struct Bitmap {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel data (RGBA)
    pub data: Vec<u8>,
}

/// Render output
#[derive(Debug, Clone)]
pub enum RenderOutput {
    /// Bitmap image data (raw RGBA)
    Bitmap(Bitmap),
    /// PNG encoded image
    Png(Vec<u8>),
}

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderFormat {
    /// Raw RGBA bitmap
    Raw,
    /// PNG encoded image
    Png,
}

/// Parse a CSS-style font size ("16px" or a bare number) into pixels.
pub fn parse_font_size(value: &str) -> Result<f32> {
    let trimmed = value.trim();
    let digits = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    match digits.parse::<f32>() {
        Ok(size) if size.is_finite() && size > 0.0 => Ok(size),
        _ => Err(ArcTextError::InvalidFontSize {
            value: value.to_string(),
        }),
    }
}
