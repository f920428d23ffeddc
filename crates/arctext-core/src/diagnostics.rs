// this_file: crates/arctext-core/src/diagnostics.rs

//! Structured debug logging for render requests.

use crate::types::{Align, LayoutRequest};
use log::{debug, log_enabled, Level};

/// Lightweight snapshot of the effective layout request.
#[derive(Debug)]
pub struct LayoutDiagnostics<'a> {
    renderer: &'a str,
    glyph_count: usize,
    diameter: f32,
    start_angle: f32,
    align: &'a str,
    text_inside: bool,
    inward_facing: bool,
    font_family: &'a str,
    font_size: &'a str,
    kerning: f32,
    text_color: &'a str,
    background: &'a str,
    background_opacity: f32,
}

impl<'a> LayoutDiagnostics<'a> {
    /// Capture the diagnostic snapshot for the provided renderer/request.
    pub fn new(renderer: &'a str, request: &'a LayoutRequest, glyph_count: usize) -> Self {
        Self {
            renderer,
            glyph_count,
            diameter: request.diameter,
            start_angle: request.start_angle,
            align: match request.align {
                Align::Left => "left",
                Align::Center => "center",
                Align::Right => "right",
            },
            text_inside: request.text_inside,
            inward_facing: request.inward_facing,
            font_family: request.font_family.as_str(),
            font_size: request.font_size.as_str(),
            kerning: request.kerning,
            text_color: request.text_color.as_str(),
            background: request.background.as_str(),
            background_opacity: request.background_opacity,
        }
    }

    /// Emit the diagnostic snapshot at debug level when logging is enabled.
    pub fn log(&self) {
        if log_enabled!(Level::Debug) {
            debug!(
                target: "arctext::render",
                "renderer={renderer} glyphs={glyphs} diameter={diameter:.1} start={start:.1} align={align} inside={inside} inward={inward} font={font}@{size} kerning={kerning:.1} color={color} background={background}@{opacity:.2}",
                renderer = self.renderer,
                glyphs = self.glyph_count,
                diameter = self.diameter,
                start = self.start_angle,
                align = self.align,
                inside = self.text_inside,
                inward = self.inward_facing,
                font = self.font_family,
                size = self.font_size,
                kerning = self.kerning,
                color = self.text_color,
                background = self.background,
                opacity = self.background_opacity,
            );
        }
    }
}
