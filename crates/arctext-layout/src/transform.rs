// this_file: crates/arctext-layout/src/transform.rs

//! Glyph frame composition as explicit affine values.
//!
//! Mirrors the canvas translate/rotate sequence, but as one composed
//! `kurbo::Affine` per glyph so intermediate angles stay inspectable.

use arctext_core::GlyphPlacement;
use kurbo::{Affine, Point};

/// Affine taking glyph-local coordinates to surface pixels: translate to the
/// surface center, rotate by the placement angle, then drop to the baseline
/// anchor. Coordinates are y-down, so a positive angle rotates clockwise on
/// screen.
pub fn glyph_transform(center: f32, placement: &GlyphPlacement, baseline_offset: f32) -> Affine {
    Affine::translate((center as f64, center as f64))
        * Affine::rotate(placement.angle as f64)
        * Affine::translate((0.0, baseline_offset as f64))
}

/// Surface-pixel position of the glyph anchor itself.
pub fn anchor_point(center: f32, placement: &GlyphPlacement, baseline_offset: f32) -> Point {
    glyph_transform(center, placement, baseline_offset) * Point::ORIGIN
}
