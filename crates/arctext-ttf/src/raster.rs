// this_file: crates/arctext-ttf/src/raster.rs

//! tiny-skia rasterization of a computed arc layout.

use crate::metrics::ScaledMetrics;
use arctext_core::{
    color::{hex_to_rgb, rgba_with_opacity},
    ArcTextError, LayoutRequest, RenderSurface, Result,
};
use arctext_layout::{glyph_transform, ArcLayout};
use kurbo::Affine;
use owned_ttf_parser::AsFaceRef;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Transform};
use ttf_parser::OutlineBuilder;

/// Outline builder converting TrueType outlines to tiny-skia paths. Font
/// outlines are y-up; the raster surface is y-down.
struct SkiaOutlineBuilder {
    builder: PathBuilder,
    scale: f32,
}

impl SkiaOutlineBuilder {
    fn new(scale: f32) -> Self {
        Self {
            builder: PathBuilder::new(),
            scale,
        }
    }
}

impl OutlineBuilder for SkiaOutlineBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(x * self.scale, -y * self.scale);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(x * self.scale, -y * self.scale);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder.quad_to(
            x1 * self.scale,
            -y1 * self.scale,
            x * self.scale,
            -y * self.scale,
        );
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            x1 * self.scale,
            -y1 * self.scale,
            x2 * self.scale,
            -y2 * self.scale,
            x * self.scale,
            -y * self.scale,
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

/// Rasterize a layout into an RGBA surface. With `glyphs` absent (font
/// unavailable) only the background is produced.
pub fn rasterize(
    layout: &ArcLayout,
    request: &LayoutRequest,
    glyphs: Option<&ScaledMetrics>,
) -> Result<RenderSurface> {
    let background = rgba_with_opacity(&request.background, request.background_opacity)?;
    let (text_r, text_g, text_b) = hex_to_rgb(&request.text_color)?;

    let size = layout.surface_size.max(1);
    let mut pixmap = Pixmap::new(size, size)
        .ok_or_else(|| ArcTextError::render(format!("failed to allocate {size}x{size} pixmap")))?;

    let (bg_r, bg_g, bg_b, bg_a) = background;
    pixmap.fill(Color::from_rgba8(bg_r, bg_g, bg_b, bg_a));

    if let Some(metrics) = glyphs {
        let mut paint = Paint::default();
        paint.set_color(Color::from_rgba8(text_r, text_g, text_b, 255));
        paint.anti_alias = true;

        let face = metrics.face().as_face_ref();
        let em_middle = metrics.em_middle_offset() as f64;

        for placement in &layout.placements {
            let Some(glyph_id) = face.glyph_index(placement.ch) else {
                continue;
            };

            let mut builder = SkiaOutlineBuilder::new(metrics.scale());
            if face.outline_glyph(glyph_id, &mut builder).is_none() {
                continue; // whitespace and other empty glyphs
            }
            let Some(path) = builder.builder.finish() else {
                continue;
            };

            // Anchor the glyph at its horizontal center with the em midpoint
            // on the baseline anchor, like a canvas center/middle fill.
            let local =
                Affine::translate((-(placement.width as f64) / 2.0, em_middle));
            let affine =
                glyph_transform(layout.center, placement, layout.baseline_offset) * local;

            pixmap.fill_path(
                &path,
                &paint,
                FillRule::Winding,
                to_skia_transform(affine),
                None,
            );
        }
    }

    Ok(RenderSurface::from_rgba(
        size,
        size,
        pixmap.data().to_vec(),
        true,
    ))
}

fn to_skia_transform(affine: Affine) -> Transform {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    Transform::from_row(a as f32, b as f32, c as f32, d as f32, e as f32, f as f32)
}
