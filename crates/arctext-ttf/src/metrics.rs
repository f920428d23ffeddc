// this_file: crates/arctext-ttf/src/metrics.rs

//! Font metrics measured from a parsed TrueType face.

use arctext_core::FontMetrics;
use log::warn;
use owned_ttf_parser::{AsFaceRef, OwnedFace};
use std::sync::Arc;

/// [`FontMetrics`] backed by a ttf-parser face scaled to a pixel size.
pub struct ScaledMetrics {
    face: Arc<OwnedFace>,
    size_px: f32,
    scale: f32,
    height: f32,
}

impl ScaledMetrics {
    pub fn new(face: Arc<OwnedFace>, size_px: f32) -> Self {
        let f = face.as_face_ref();
        let units_per_em = f.units_per_em() as f32;
        let scale = size_px / units_per_em;
        // Line height the way a block element reports it: ascent span plus
        // descent span plus the font's line gap.
        let height =
            (f.ascender() as f32 - f.descender() as f32 + f.line_gap() as f32) * scale;
        Self {
            face,
            size_px,
            scale,
            height,
        }
    }

    /// Font-units-to-pixels scale factor.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// The shared parsed face.
    pub fn face(&self) -> &Arc<OwnedFace> {
        &self.face
    }

    /// Pixel offset from the em midpoint down to the alphabetic baseline,
    /// emulating a canvas `textBaseline = 'middle'` anchor.
    pub fn em_middle_offset(&self) -> f32 {
        let f = self.face.as_face_ref();
        (f.ascender() as f32 + f.descender() as f32) * 0.5 * self.scale
    }
}

impl FontMetrics for ScaledMetrics {
    fn char_width(&self, ch: char) -> f32 {
        let f = self.face.as_face_ref();
        match f
            .glyph_index(ch)
            .and_then(|id| f.glyph_hor_advance(id))
        {
            Some(advance) => advance as f32 * self.scale,
            None => {
                warn!(
                    target: "arctext::metrics",
                    "no advance for {ch:?}; estimating from font size"
                );
                self.size_px * 0.6
            }
        }
    }

    fn text_height(&self) -> f32 {
        self.height
    }
}
