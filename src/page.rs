use crate::rect::Rect;
use crate::template::Template;
use crate::units::Px;
use image::DynamicImage;

/// One glyph committed to a page: which character, where its em box
/// starts, and the sampled size and rotation it was drawn with.
/// `coords` is the top-left corner of the em box in image pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph {
    pub ch: char,
    pub coords: (Px, Px),
    pub size: Px,
    pub angle: f32,
}

/// A finished page: a copy of its template's background with the text
/// inked on, plus the glyph placements that produced it
#[derive(Debug, Clone)]
pub struct Page {
    /// Zero-based position of this page in the rendered sequence
    pub index: usize,
    pub image: DynamicImage,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    pub glyphs: Vec<PlacedGlyph>,
}

impl Page {
    /// Start a blank page by copying the template's background
    pub(crate) fn new(template: &Template, index: usize) -> Page {
        Page {
            index,
            image: template.background().clone(),
            content_box: template.content_box(),
            glyphs: Vec::new(),
        }
    }

    /// The page's dimensions as `(width, height)` in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Margins;
    use crate::template::testing::rig;

    #[test]
    fn new_page_copies_the_background() {
        let (_scribe, template) = rig(200, 100);
        let template = template.with_margins(Margins::all(10)).unwrap();
        let page = Page::new(&template, 3);
        assert_eq!(page.index, 3);
        assert_eq!(page.size(), (200, 100));
        assert_eq!(page.content_box, template.content_box());
        assert!(page.glyphs.is_empty());
        assert_eq!(page.image.as_luma8().unwrap().get_pixel(0, 0).0, [255]);
    }
}
