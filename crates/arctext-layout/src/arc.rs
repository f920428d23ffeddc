// this_file: crates/arctext-layout/src/arc.rs

//! The single-pass arc placement algorithm.

use arctext_core::{Align, ArcTextError, FontMetrics, GlyphPlacement, LayoutRequest, Result};
use log::warn;
use std::f32::consts::{PI, TAU};

/// Computed geometry for one circular text render.
///
/// All angle deltas are arc-length-over-radius; glyph baselines sit at
/// `effective_radius`, inset one text height from the surface edge.
#[derive(Debug, Clone)]
pub struct ArcLayout {
    /// Output surface edge length in pixels. The surface is square.
    pub surface_size: u32,
    /// Surface center coordinate (same for x and y).
    pub center: f32,
    /// Measured text height for the requested font.
    pub text_height: f32,
    /// Radius at which glyph baselines are placed.
    pub effective_radius: f32,
    /// Signed local y of the glyph anchor in the rotated frame. Negative for
    /// inward-facing text (anchor above the center, toward 12 o'clock, base
    /// toward the circle center), positive for outward.
    pub baseline_offset: f32,
    /// Per-glyph placements in draw order.
    pub placements: Vec<GlyphPlacement>,
}

impl ArcLayout {
    /// Lay the request's text out along the circle.
    ///
    /// Empty text yields a placement-free layout. A non-empty text whose
    /// height eats the whole radius fails fast with
    /// [`ArcTextError::DegenerateRadius`].
    pub fn compute(request: &LayoutRequest, metrics: &dyn FontMetrics) -> Result<Self> {
        let clockwise = request.align.direction();
        let mut angle = request.start_angle.to_radians();
        let text_height = metrics.text_height();

        // Outside text expands the surface so glyphs past the circle edge
        // are not clipped; the effective radius then equals the original
        // diameter / 2.
        let mut surface_diameter = request.diameter;
        if !request.text_inside {
            surface_diameter += 2.0 * text_height;
        }

        let center = surface_diameter / 2.0;
        let effective_radius = surface_diameter / 2.0 - text_height;
        let baseline_offset = if request.inward_facing { 1.0 } else { -1.0 }
            * (text_height / 2.0 - surface_diameter / 2.0);

        let mut chars: Vec<char> = request.text.chars().collect();
        if chars.is_empty() {
            return Ok(Self {
                surface_size: surface_diameter.round() as u32,
                center,
                text_height,
                effective_radius,
                baseline_offset,
                placements: Vec::new(),
            });
        }

        if effective_radius <= 0.0 {
            return Err(ArcTextError::DegenerateRadius {
                radius: effective_radius,
                diameter: surface_diameter,
                text_height,
            });
        }

        if request.align.reverses_glyphs(request.inward_facing) {
            chars.reverse();
        }

        // Outward-facing glyphs are flipped half a turn so they stay upright.
        if !request.inward_facing {
            angle += PI;
        }

        let widths: Vec<f32> = chars.iter().map(|&ch| metrics.char_width(ch)).collect();

        // Center alignment: back the start angle up by half the total sweep.
        // The last glyph contributes no kerning gap.
        if request.align == Align::Center {
            let last = chars.len() - 1;
            for (index, &width) in widths.iter().enumerate() {
                let gap = if index == last { 0.0 } else { request.kerning };
                angle += (width + gap) / effective_radius / 2.0 * -clockwise;
            }
        }

        let mut placements = Vec::with_capacity(chars.len());
        for (&ch, &width) in chars.iter().zip(widths.iter()) {
            // Advance to the glyph's horizontal center, stamp, then advance
            // past the remaining half plus the kerning gap.
            angle += (width / 2.0) / effective_radius * clockwise;
            placements.push(GlyphPlacement { ch, width, angle });
            angle += (width / 2.0 + request.kerning) / effective_radius * clockwise;
        }

        let sweep =
            widths.iter().map(|width| width + request.kerning).sum::<f32>() / effective_radius;
        if sweep.abs() > TAU {
            warn!(
                target: "arctext::layout",
                "text sweep {:.1}\u{b0} exceeds a full circle; glyphs will overlap",
                sweep.abs().to_degrees()
            );
        }

        Ok(Self {
            surface_size: surface_diameter.round() as u32,
            center,
            text_height,
            effective_radius,
            baseline_offset,
            placements,
        })
    }
}
