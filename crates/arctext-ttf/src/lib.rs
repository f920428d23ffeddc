// this_file: crates/arctext-ttf/src/lib.rs

//! TrueType-backed rasterizing renderer for arctext.
//!
//! Resolves the requested font family to a parsed face, measures glyph
//! advances with ttf-parser, lays the text out with `arctext-layout` and
//! stamps glyph outlines along the arc with tiny-skia. When the font cannot
//! be resolved the render degrades to size-estimated metrics and a
//! background-only surface instead of failing.

pub mod fontdb;
pub mod metrics;
pub mod raster;

pub use fontdb::FontStore;
pub use metrics::ScaledMetrics;

use arctext_core::{
    parse_font_size, CircularRenderer, FallbackMetrics, LayoutDiagnostics, LayoutRequest,
    RenderFormat, RenderOutput, Result,
};
use arctext_layout::ArcLayout;
use log::warn;

/// Circular text renderer rasterizing TrueType glyph outlines.
pub struct TtfRenderer {
    store: FontStore,
}

impl TtfRenderer {
    pub fn new() -> Self {
        Self {
            store: FontStore::new(32),
        }
    }
}

impl CircularRenderer for TtfRenderer {
    fn render(&self, request: &LayoutRequest, format: RenderFormat) -> Result<RenderOutput> {
        let size_px = parse_font_size(&request.font_size)?;

        let surface = match self.store.load(&request.font_family) {
            Ok(face) => {
                let metrics = ScaledMetrics::new(face, size_px);
                let layout = ArcLayout::compute(request, &metrics)?;
                LayoutDiagnostics::new(self.name(), request, layout.placements.len()).log();
                raster::rasterize(&layout, request, Some(&metrics))?
            }
            Err(err) => {
                warn!(
                    target: "arctext::render",
                    "font {:?} unavailable ({err}); laying out with estimated metrics",
                    request.font_family
                );
                let metrics = FallbackMetrics::new(size_px);
                let layout = ArcLayout::compute(request, &metrics)?;
                LayoutDiagnostics::new(self.name(), request, layout.placements.len()).log();
                raster::rasterize(&layout, request, None)?
            }
        };

        surface.into_render_output(format)
    }

    fn name(&self) -> &str {
        "ttf"
    }

    fn clear_cache(&self) {
        self.store.clear();
    }
}

impl Default for TtfRenderer {
    fn default() -> Self {
        Self::new()
    }
}
