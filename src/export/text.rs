//! Glyph rasterizing onto an RGBA canvas with swash.

use image::{Rgba, RgbaImage};
use swash::scale::{Render, ScaleContext, Source, StrikeWith};
use swash::shape::ShapeContext;
use swash::zeno::{Format, Vector};
use swash::FontRef;

/// Shapes and paints single lines of text in one font.
pub struct TextPainter<'a> {
    font: FontRef<'a>,
    scale_context: ScaleContext,
    shape_context: ShapeContext,
}

impl<'a> TextPainter<'a> {
    /// `None` if `data` is not a font swash can read.
    pub fn new(data: &'a [u8]) -> Option<Self> {
        let font = FontRef::from_index(data, 0)?;
        Some(Self {
            font,
            scale_context: ScaleContext::new(),
            shape_context: ShapeContext::new(),
        })
    }

    /// Horizontal advance of `text` at `size` pixels.
    pub fn measure(&mut self, text: &str, size: f32) -> f32 {
        let mut shaper = self.shape_context.builder(self.font).size(size).build();
        shaper.add_str(text);

        let mut width = 0.0;
        shaper.shape_with(|cluster| {
            for glyph in cluster.glyphs {
                width += glyph.advance;
            }
        });
        width
    }

    /// Paint `text` horizontally centered on `center_x`, top edge at `y`.
    pub fn draw_centered(
        &mut self,
        img: &mut RgbaImage,
        text: &str,
        center_x: i32,
        y: i32,
        size: f32,
        color: Rgba<u8>,
    ) {
        let width = self.measure(text, size);
        let x = center_x - (width / 2.0).round() as i32;
        self.draw(img, text, x, y, size, color);
    }

    /// Paint `text` with its top-left corner at `(x, y)`.
    pub fn draw(&mut self, img: &mut RgbaImage, text: &str, x: i32, y: i32, size: f32, color: Rgba<u8>) {
        let mut shaper = self.shape_context.builder(self.font).size(size).build();
        shaper.add_str(text);

        let mut scaler = self.scale_context.builder(self.font).size(size).hint(true).build();

        let mut pen_x = x as f32;
        let baseline = y as f32 + size;

        shaper.shape_with(|cluster| {
            for glyph in cluster.glyphs {
                let rendered = Render::new(&[
                    Source::ColorOutline(0),
                    Source::ColorBitmap(StrikeWith::BestFit),
                    Source::Outline,
                ])
                .format(Format::Alpha)
                .offset(Vector::new(glyph.x, glyph.y))
                .render(&mut scaler, glyph.id);

                if let Some(mask) = rendered {
                    let left = (pen_x + mask.placement.left as f32) as i32;
                    let top = (baseline - mask.placement.top as f32) as i32;
                    let width = mask.placement.width;

                    for (idx, &alpha) in mask.data.iter().enumerate() {
                        if alpha == 0 {
                            continue;
                        }
                        let px = left + (idx as u32 % width) as i32;
                        let py = top + (idx as u32 / width) as i32;
                        blend_pixel(img, px, py, color, alpha);
                    }
                }

                pen_x += glyph.advance;
            }
        });
    }
}

/// Alpha-blend `color` over the pixel at `(x, y)`; off-canvas points are skipped.
pub fn blend_pixel(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, alpha: u8) {
    if x < 0 || y < 0 || x as u32 >= img.width() || y as u32 >= img.height() {
        return;
    }
    let dest = img.get_pixel_mut(x as u32, y as u32);
    let a = alpha as f32 / 255.0;
    let inv_a = 1.0 - a;
    for channel in 0..3 {
        dest[channel] = (color[channel] as f32 * a + dest[channel] as f32 * inv_a).round() as u8;
    }
    dest[3] = 255;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_font_bytes() {
        assert!(TextPainter::new(b"definitely not a font").is_none());
        assert!(TextPainter::new(&[]).is_none());
    }

    #[test]
    fn blend_full_alpha_replaces_color() {
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]));
        blend_pixel(&mut img, 1, 1, Rgba([10, 20, 30, 255]), 255);
        assert_eq!(img.get_pixel(1, 1), &Rgba([10, 20, 30, 255]));
        assert_eq!(img.get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn blend_off_canvas_is_ignored() {
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        blend_pixel(&mut img, -1, 0, Rgba([255, 0, 0, 255]), 255);
        blend_pixel(&mut img, 2, 2, Rgba([255, 0, 0, 255]), 255);
        assert!(img.pixels().all(|p| *p == Rgba([0, 0, 0, 255])));
    }
}
