//! Drawing surface abstraction and its raster implementation.

use std::io::Cursor;

use ab_glyph::{FontArc, PxScale};
use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::{
    drawing::{draw_filled_rect_mut, draw_text_mut, text_size},
    rect::Rect,
};

use crate::server::error::render::RenderError;

/// The 2D operations the stat card layout needs.
///
/// Coordinates are in pixels with the origin at the top-left corner. Text is
/// positioned by the top-left corner of its bounding box.
pub trait Surface {
    /// Width and height of the surface in pixels.
    fn dimensions(&self) -> (u32, u32);

    fn fill_rect(&mut self, rect: Rect, color: Rgba<u8>);

    /// Blits an image with its top-left corner at `(x, y)`, alpha blending over the
    /// existing pixels.
    fn draw_image(&mut self, image: &RgbaImage, x: i64, y: i64);

    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: f32, color: Rgba<u8>);

    /// Rendered width of `text` at `size` pixels.
    fn text_width(&self, text: &str, size: f32) -> u32;
}

/// Surface backed by an in-memory RGBA raster and a loaded font.
pub struct RasterSurface<'f> {
    canvas: RgbaImage,
    font: &'f FontArc,
}

impl<'f> RasterSurface<'f> {
    /// Allocates a transparent canvas of the given size.
    pub fn new(width: u32, height: u32, font: &'f FontArc) -> Self {
        Self {
            canvas: RgbaImage::new(width, height),
            font,
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.canvas
    }
}

impl Surface for RasterSurface<'_> {
    fn dimensions(&self) -> (u32, u32) {
        self.canvas.dimensions()
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba<u8>) {
        draw_filled_rect_mut(&mut self.canvas, rect, color);
    }

    fn draw_image(&mut self, image: &RgbaImage, x: i64, y: i64) {
        image::imageops::overlay(&mut self.canvas, image, x, y);
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: f32, color: Rgba<u8>) {
        draw_text_mut(
            &mut self.canvas,
            color,
            x,
            y,
            PxScale::from(size),
            self.font,
            text,
        );
    }

    fn text_width(&self, text: &str, size: f32) -> u32 {
        text_size(PxScale::from(size), self.font, text).0
    }
}

/// Encodes a finished canvas as PNG bytes.
///
/// # Returns
/// - `Ok(Vec<u8>)` - The PNG file contents
/// - `Err(RenderError::Encode)` - The PNG encoder rejected the image
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    // ~4 bytes per pixel uncompressed, flat card areas compress well
    let estimated_size = (canvas.width() * canvas.height()).max(4096) as usize;
    let mut result = Cursor::new(Vec::with_capacity(estimated_size));
    canvas.write_to(&mut result, ImageFormat::Png)?;

    Ok(result.into_inner())
}
