use crate::fill::Fill;
use crate::font::FontRef;
use crate::page::Page;
use image::{DynamicImage, ImageBuffer, Pixel};
use owned_ttf_parser::{Face, GlyphId, OutlineBuilder};
use tiny_skia::{FillRule, Mask, Path, PathBuilder, Transform};

use crate::units::Px;

/// An anti-aliased coverage bitmap for one rasterized glyph, plus the
/// offset of the bitmap relative to the glyph cell's top-left corner.
/// Offsets may be negative once rotation swings ink outside the cell.
#[derive(Debug, Clone)]
pub struct GlyphMask {
    /// One coverage byte per pixel, row-major, 0 = no ink
    pub coverage: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub left: f32,
    pub top: f32,
}

/// Walks a glyph outline into a [PathBuilder], scaling from font units
/// to pixels. The cell's top-left corner is the origin, so the
/// baseline sits `ascent` pixels down and the y axis is flipped from
/// the font's.
struct GlyphPathBuilder {
    builder: PathBuilder,
    ascent: f32,
    scale: f32,
}

impl GlyphPathBuilder {
    fn new(ascent: f32, scale: f32) -> Self {
        Self {
            builder: PathBuilder::new(),
            ascent,
            scale,
        }
    }

    fn finish(self) -> Option<Path> {
        self.builder.finish()
    }
}

impl OutlineBuilder for GlyphPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder
            .move_to(x * self.scale, self.ascent - y * self.scale);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder
            .line_to(x * self.scale, self.ascent - y * self.scale);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder.quad_to(
            x1 * self.scale,
            self.ascent - y1 * self.scale,
            x * self.scale,
            self.ascent - y * self.scale,
        );
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            x1 * self.scale,
            self.ascent - y1 * self.scale,
            x2 * self.scale,
            self.ascent - y2 * self.scale,
            x * self.scale,
            self.ascent - y * self.scale,
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

/// Rasterize one glyph outline at `size`, rotated by `angle` radians
/// about the center of its ink bounds, into a padded coverage mask.
/// Returns `None` for glyphs with no ink (spaces and the like).
pub(crate) fn outline_mask(
    face: &Face,
    glyph: GlyphId,
    size: Px,
    ascent: Px,
    angle: f32,
) -> Option<GlyphMask> {
    let scale = *size / face.units_per_em() as f32;
    let mut builder = GlyphPathBuilder::new(*ascent, scale);
    face.outline_glyph(glyph, &mut builder)?;
    let path = builder.finish()?;

    let path = if angle != 0.0 {
        let bounds = path.bounds();
        let cx = bounds.x() + bounds.width() / 2.0;
        let cy = bounds.y() + bounds.height() / 2.0;
        path.transform(Transform::from_rotate_at(angle.to_degrees(), cx, cy))?
    } else {
        path
    };

    // one pixel of padding on every side so anti-aliasing never clips
    let bounds = path.bounds();
    let left = bounds.left().floor() as i32 - 1;
    let top = bounds.top().floor() as i32 - 1;
    let right = bounds.right().ceil() as i32 + 1;
    let bottom = bounds.bottom().ceil() as i32 + 1;

    let width = (right - left) as u32;
    let height = (bottom - top) as u32;
    let mut mask = Mask::new(width, height)?;
    mask.fill_path(
        &path,
        FillRule::Winding,
        true,
        Transform::from_translate(-(left as f32), -(top as f32)),
    );

    Some(GlyphMask {
        coverage: mask.data().to_vec(),
        width,
        height,
        left: left as f32,
        top: top as f32,
    })
}

/// Rasterize and composite every glyph placed on a page onto its
/// background copy.
pub(crate) fn paint_page(page: &mut Page, font: &dyn FontRef, fill: &Fill) {
    let Page { image, glyphs, .. } = page;
    for glyph in glyphs.iter() {
        let Some(mask) = font.rasterize(glyph.ch, glyph.size, glyph.angle) else {
            continue;
        };
        let x = (*glyph.coords.0 + mask.left).floor() as i64;
        let y = (*glyph.coords.1 + mask.top).floor() as i64;
        stamp(image, &mask, x, y, fill);
    }
}

/// Composite a coverage mask onto the page at `(x, y)`, blending the
/// fill colour into every band by coverage. Mask pixels falling
/// outside the page are clipped.
pub(crate) fn stamp(image: &mut DynamicImage, mask: &GlyphMask, x: i64, y: i64, fill: &Fill) {
    let channels = fill.channels();
    match image {
        DynamicImage::ImageLuma8(buf) => stamp_buffer(buf, mask, x, y, channels),
        DynamicImage::ImageLumaA8(buf) => stamp_buffer(buf, mask, x, y, channels),
        DynamicImage::ImageRgb8(buf) => stamp_buffer(buf, mask, x, y, channels),
        DynamicImage::ImageRgba8(buf) => stamp_buffer(buf, mask, x, y, channels),
        _ => unreachable!("background modes are validated at template construction"),
    }
}

fn stamp_buffer<P>(
    buf: &mut ImageBuffer<P, Vec<u8>>,
    mask: &GlyphMask,
    x: i64,
    y: i64,
    fill: [u8; 4],
) where
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = buf.dimensions();
    for row in 0..mask.height {
        let py = y + row as i64;
        if py < 0 || py >= height as i64 {
            continue;
        }
        for col in 0..mask.width {
            let px = x + col as i64;
            if px < 0 || px >= width as i64 {
                continue;
            }
            let coverage = mask.coverage[(row * mask.width + col) as usize];
            if coverage == 0 {
                continue;
            }
            let pixel = buf.get_pixel_mut(px as u32, py as u32);
            for (band, channel) in pixel.channels_mut().iter_mut().enumerate() {
                *channel = lerp255(*channel, fill[band], coverage);
            }
        }
    }
}

/// `dst + (src - dst) * cov / 255` with the rounding bias in u8 space
fn lerp255(dst: u8, src: u8, cov: u8) -> u8 {
    let dst = dst as u32;
    let src = src as u32;
    let cov = cov as u32;
    ((dst * (255 - cov) + src * cov + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, RgbImage};

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp255(10, 200, 0), 10);
        assert_eq!(lerp255(10, 200, 255), 200);
        assert_eq!(lerp255(0, 255, 128), 128);
    }

    fn block_mask(width: u32, height: u32) -> GlyphMask {
        GlyphMask {
            coverage: vec![255; (width * height) as usize],
            width,
            height,
            left: 0.0,
            top: 0.0,
        }
    }

    #[test]
    fn stamp_inks_covered_pixels() {
        let mut image = DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 4, image::Luma([255])));
        stamp(&mut image, &block_mask(2, 2), 1, 1, &Fill::new_grey(0));
        let buf = image.as_luma8().unwrap();
        assert_eq!(buf.get_pixel(0, 0).0, [255]);
        assert_eq!(buf.get_pixel(1, 1).0, [0]);
        assert_eq!(buf.get_pixel(2, 2).0, [0]);
        assert_eq!(buf.get_pixel(3, 3).0, [255]);
    }

    #[test]
    fn stamp_clips_at_page_edges() {
        let mut image = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 2, image::Luma([255])));
        stamp(&mut image, &block_mask(2, 2), -1, -1, &Fill::new_grey(0));
        let buf = image.as_luma8().unwrap();
        assert_eq!(buf.get_pixel(0, 0).0, [0]);
        assert_eq!(buf.get_pixel(1, 0).0, [255]);
        assert_eq!(buf.get_pixel(0, 1).0, [255]);
    }

    #[test]
    fn stamp_blends_every_band() {
        let mut image = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, image::Rgb([255; 3])));
        stamp(&mut image, &block_mask(1, 1), 0, 0, &Fill::new_rgb(255, 0, 0));
        let buf = image.as_rgb8().unwrap();
        assert_eq!(buf.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(buf.get_pixel(1, 1).0, [255, 255, 255]);
    }

    #[test]
    fn partial_coverage_interpolates() {
        let mut image = DynamicImage::ImageLuma8(GrayImage::from_pixel(1, 1, image::Luma([255])));
        let mask = GlyphMask {
            coverage: vec![128],
            width: 1,
            height: 1,
            left: 0.0,
            top: 0.0,
        };
        stamp(&mut image, &mask, 0, 0, &Fill::new_grey(0));
        let got = image.as_luma8().unwrap().get_pixel(0, 0).0[0];
        assert_eq!(got, lerp255(255, 0, 128));
    }
}
