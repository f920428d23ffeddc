// this_file: crates/arctext-core/src/lib.rs

//! Core types and traits for the arctext circular text engine.

pub mod color;
pub mod diagnostics;
pub mod error;
pub mod metrics;
pub mod surface;
pub mod traits;
pub mod types;
pub mod utils;

pub use color::{hex_to_rgb, rgba_with_opacity};
pub use diagnostics::LayoutDiagnostics;
pub use error::ArcTextError;
pub use metrics::{FallbackMetrics, FontMetrics, UniformMetrics};
pub use surface::RenderSurface;
pub use traits::CircularRenderer;
pub use types::{
    parse_font_size, Align, Bitmap, GlyphPlacement, LayoutRequest, RenderFormat, RenderOutput,
};

/// Result type for arctext operations
pub type Result<T> = std::result::Result<T, ArcTextError>;
