// this_file: crates/arctext-core/src/traits.rs

//! Renderer seam implemented by rasterizing backends.

use crate::{
    types::{LayoutRequest, RenderFormat, RenderOutput},
    Result,
};

/// A backend that turns a [`LayoutRequest`] into a rendered surface.
pub trait CircularRenderer {
    /// Render the request into the given output format.
    fn render(&self, request: &LayoutRequest, format: RenderFormat) -> Result<RenderOutput>;

    /// Human-readable backend name for diagnostics.
    fn name(&self) -> &str;

    /// Drop any cached font state.
    fn clear_cache(&self) {}
}
