use std::io::Write;

use ab_glyph::{point, Font as _, FontRef, Glyph, PxScale};
use image::{Pixel, RgbaImage};
use owned_ttf_parser::AsFaceRef;

use crate::colour::Colour;
use crate::error::IconError;
use crate::font::Font;
use crate::units::Px;

/// A square, transparent RGBA canvas that icons are drawn onto. Drawing is
/// done entirely on the CPU: glyph outlines are rasterized into coverage
/// values and composited over whatever is already on the canvas, and the
/// border stroke is evaluated per-pixel from the rounded-rectangle geometry.
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    /// Create a fully transparent square canvas with the given side length
    /// in pixels
    pub fn new(side: u32) -> Canvas {
        Canvas {
            img: RgbaImage::new(side, side),
        }
    }

    /// The pixels drawn so far
    pub fn image(&self) -> &RgbaImage {
        &self.img
    }

    /// Draw a block of newline-separated text centered on the canvas
    /// midpoint, with each line additionally centered within the block.
    ///
    /// Glyph positions and line widths come from the font's own advance
    /// metrics so that text measured with [Font::width_of] lands exactly
    /// where the measurement said it would; characters with no glyph in the
    /// face contribute neither ink nor advance. Vertical placement centres
    /// the ascent-to-descent extent of the block, with successive baselines
    /// spaced by [Font::line_height].
    pub fn draw_multiline_centered(
        &mut self,
        text: &str,
        font: &Font,
        size: Px,
        colour: Colour,
    ) -> Result<(), IconError> {
        // rasterize the same face the metrics come from, not face 0 of a
        // collection
        let raster = FontRef::try_from_slice_and_index(font.face.as_slice(), font.index)?;

        let face = font.face.as_face_ref();
        let upem = face.units_per_em() as f32;
        let scaling: Px = size / upem;
        // an ab_glyph PxScale is relative to the face's unscaled height, not
        // its units-per-em; this reproduces the same pixels-per-unit factor
        // the advance metrics use
        let scale = PxScale::from(size.0 * raster.height_unscaled() / upem);

        let ascent = font.ascent(size);
        let descent = font.descent(size);
        let line_height = font.line_height(size);

        let lines: Vec<&str> = text.split('\n').collect();
        let block_height = line_height.0 * (lines.len() as f32 - 1.0) + (ascent - descent).0;

        let centre_x = self.img.width() as f32 / 2.0;
        let mut baseline = self.img.height() as f32 / 2.0 - block_height / 2.0 + ascent.0;

        for line in lines {
            let line_width = font.width_of(line, size);
            let mut pen_x = centre_x - line_width.0 / 2.0;

            for ch in line.chars() {
                let gid = match font.glyph_id(ch) {
                    Some(gid) => gid,
                    None => continue,
                };
                let advance: Px = scaling
                    * face
                        .glyph_hor_advance(owned_ttf_parser::GlyphId(gid))
                        .unwrap_or_default() as f32;

                let glyph = Glyph {
                    id: ab_glyph::GlyphId(gid),
                    scale,
                    position: point(pen_x, baseline),
                };
                if let Some(outlined) = raster.outline_glyph(glyph) {
                    let bounds = outlined.px_bounds();
                    outlined.draw(|gx, gy, coverage| {
                        let x = bounds.min.x as i32 + gx as i32;
                        let y = bounds.min.y as i32 + gy as i32;
                        self.blend_pixel(x, y, colour.with_coverage(coverage));
                    });
                }

                pen_x += advance.0;
            }

            baseline += line_height.0;
        }

        Ok(())
    }

    /// Stroke a rounded-rectangle border around the edge of the canvas. The
    /// stroke hugs the canvas bounds and is drawn inward: the outermost
    /// painted pixel is the outermost pixel of the canvas, as with an outline
    /// drawn into a bounding box.
    ///
    /// Pixels are classified by the signed distance from their centre to the
    /// rounded-rectangle boundary, so the corner arcs come out as true
    /// circular arcs.
    pub fn stroke_rounded_border(&mut self, radius: f32, stroke: f32, colour: Colour) {
        let half_w = self.img.width() as f32 / 2.0;
        let half_h = self.img.height() as f32 / 2.0;
        let inner_w = half_w - radius;
        let inner_h = half_h - radius;

        for y in 0..self.img.height() {
            for x in 0..self.img.width() {
                let px = x as f32 + 0.5 - half_w;
                let py = y as f32 + 0.5 - half_h;

                let qx = px.abs() - inner_w;
                let qy = py.abs() - inner_h;
                let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
                let inside = qx.max(qy).min(0.0);
                let sd = outside + inside - radius;

                if sd <= 0.0 && sd >= -stroke {
                    self.blend_pixel(x as i32, y as i32, colour);
                }
            }
        }
    }

    /// Encode the canvas as an 8-bit RGBA PNG, recording the given dpi on
    /// both axes in the pHYs chunk
    pub fn encode_png<W: Write>(&self, writer: W, dpi: u32) -> Result<(), IconError> {
        let mut encoder = png::Encoder::new(writer, self.img.width(), self.img.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        // pHYs stores pixels per metre
        let ppm = (dpi as f32 / 0.0254).round() as u32;
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: ppm,
            yppu: ppm,
            unit: png::Unit::Meter,
        }));

        let mut writer = encoder.write_header()?;
        writer.write_image_data(self.img.as_raw())?;
        writer.finish()?;

        Ok(())
    }

    fn blend_pixel(&mut self, x: i32, y: i32, colour: Colour) {
        if colour.a == 0 || x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.img.width() || y >= self.img.height() {
            return;
        }

        self.img.get_pixel_mut(x, y).blend(&colour.into());
    }
}
