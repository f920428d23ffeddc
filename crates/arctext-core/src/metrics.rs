// this_file: crates/arctext-core/src/metrics.rs

//! Font measurement seam for the layout engine.
//!
//! The layout algorithm never touches font files directly; it asks a
//! [`FontMetrics`] implementation for per-character advances and the overall
//! text height. This keeps the geometry testable without a rendering
//! environment.

/// Query font metrics for the layout pass.
pub trait FontMetrics {
    /// Advance width of one character, in pixels.
    fn char_width(&self, ch: char) -> f32;

    /// Overall text height (line height) for the configured font, in pixels.
    fn text_height(&self) -> f32;
}

/// Fixed-advance metrics. Mainly for tests and benchmarks where exact,
/// font-independent numbers are wanted.
#[derive(Debug, Clone, Copy)]
pub struct UniformMetrics {
    advance: f32,
    height: f32,
}

impl UniformMetrics {
    pub fn new(advance: f32, height: f32) -> Self {
        Self { advance, height }
    }
}

impl FontMetrics for UniformMetrics {
    fn char_width(&self, _ch: char) -> f32 {
        self.advance
    }

    fn text_height(&self) -> f32 {
        self.height
    }
}

/// Metrics estimated from the numeric font size alone, used when a font
/// cannot be loaded or measured. The factors approximate a typical Latin
/// face: line height around 1.2em, average advance around 0.6em.
#[derive(Debug, Clone, Copy)]
pub struct FallbackMetrics {
    size_px: f32,
}

impl FallbackMetrics {
    pub const HEIGHT_FACTOR: f32 = 1.2;
    pub const ADVANCE_FACTOR: f32 = 0.6;

    pub fn new(size_px: f32) -> Self {
        Self { size_px }
    }
}

impl FontMetrics for FallbackMetrics {
    fn char_width(&self, _ch: char) -> f32 {
        self.size_px * Self::ADVANCE_FACTOR
    }

    fn text_height(&self) -> f32 {
        self.size_px * Self::HEIGHT_FACTOR
    }
}
