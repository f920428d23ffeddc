// this_file: src/lib.rs

//! arctext - circular text layout and rasterization.
//!
//! Places each character of a string along a circular arc, individually
//! rotated to stay perpendicular to the circle, and rasterizes the result
//! into an RGBA surface. The layout pass is pure geometry behind a
//! [`FontMetrics`] seam; the bundled [`TtfRenderer`] measures and stamps
//! TrueType glyph outlines.
//!
//! ```no_run
//! use arctext::{render_circular_text, LayoutRequest};
//!
//! let mut request = LayoutRequest::new("HELLO", 300.0);
//! request.font_family = "DejaVuSans".to_string();
//! let output = render_circular_text(&request)?;
//! # Ok::<(), arctext::ArcTextError>(())
//! ```

pub use arctext_core::{
    hex_to_rgb, parse_font_size, Align, ArcTextError, Bitmap, CircularRenderer, FallbackMetrics,
    FontMetrics, GlyphPlacement, LayoutRequest, RenderFormat, RenderOutput, Result,
    UniformMetrics,
};
pub use arctext_layout::{anchor_point, glyph_transform, ArcLayout};
pub use arctext_ttf::{FontStore, ScaledMetrics, TtfRenderer};

/// Render a circular text request to a raw RGBA bitmap with the default
/// TrueType renderer.
pub fn render_circular_text(request: &LayoutRequest) -> Result<RenderOutput> {
    TtfRenderer::new().render(request, RenderFormat::Raw)
}
