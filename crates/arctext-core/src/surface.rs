// this_file: crates/arctext-core/src/surface.rs

//! Conversion of raw raster buffers into [`RenderOutput`]s.

use crate::{
    types::{Bitmap, RenderFormat, RenderOutput},
    ArcTextError, Result,
};

/// Render surface produced by a rasterizer prior to format conversion and
/// encoding. Pixel data is RGBA, possibly with premultiplied alpha.
#[derive(Debug)]
pub struct RenderSurface {
    width: u32,
    height: u32,
    premultiplied: bool,
    data: Vec<u8>,
}

impl RenderSurface {
    /// Wrap an RGBA buffer.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>, premultiplied: bool) -> Self {
        Self {
            width,
            height,
            premultiplied,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Convert the surface into a [`RenderOutput`].
    pub fn into_render_output(self, format: RenderFormat) -> Result<RenderOutput> {
        let width = self.width;
        let height = self.height;
        let rgba = self.into_rgba_data();
        match format {
            RenderFormat::Raw => Ok(RenderOutput::Bitmap(Bitmap {
                width,
                height,
                data: rgba,
            })),
            RenderFormat::Png => {
                let png_data = encode_png(width, height, &rgba)?;
                Ok(RenderOutput::Png(png_data))
            }
        }
    }

    fn into_rgba_data(mut self) -> Vec<u8> {
        if self.premultiplied {
            unpremultiply(&mut self.data);
        }
        self.data
    }
}

fn unpremultiply(data: &mut [u8]) {
    for chunk in data.chunks_exact_mut(4) {
        let alpha = chunk[3];
        if alpha == 0 || alpha == 255 {
            continue;
        }
        let alpha_f = alpha as f32 / 255.0;
        for channel in &mut chunk[..3] {
            let unpremultiplied = ((*channel as f32) / alpha_f).clamp(0.0, 255.0);
            *channel = unpremultiplied as u8;
        }
    }
}

fn encode_png(width: u32, height: u32, data: &[u8]) -> Result<Vec<u8>> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|err| ArcTextError::render(format!("PNG encoder error: {err}")))?;
        writer
            .write_image_data(data)
            .map_err(|err| ArcTextError::render(format!("PNG write error: {err}")))?;
    } // writer and encoder are dropped here
    Ok(png_data)
}
