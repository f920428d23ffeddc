// this_file: crates/arctext-layout/src/lib.rs

//! Pure circular text layout geometry.
//!
//! No I/O and no rasterization here: the layout pass consumes a
//! [`arctext_core::FontMetrics`] implementation and produces per-glyph
//! angular placements plus the surface geometry a rasterizer needs.

pub mod arc;
pub mod transform;

pub use arc::ArcLayout;
pub use transform::{anchor_point, glyph_transform};
