use crate::paint::{self, GlyphMask};
use crate::{Px, ScrawlError};
use owned_ttf_parser::{AsFaceRef, OwnedFace};

/// The measurement and rasterization interface the layout engine
/// consumes. Implementations must be deterministic: identical inputs
/// always produce identical advances and masks.
///
/// [Font] is the built-in TrueType/OpenType implementation; the trait
/// exists so callers can plug in other rasterizers (and so layout can
/// be tested without font files).
pub trait FontRef: Send + Sync {
    /// The horizontal advance of `ch` at `size`, or `None` when the
    /// face has no glyph for it
    fn advance(&self, ch: char, size: Px) -> Option<Px>;

    /// Distance from the top of the glyph cell down to the baseline
    /// at `size`
    fn ascent(&self, size: Px) -> Px;

    /// Rasterize `ch` at `size`, rotated by `angle` radians about the
    /// center of its ink. Returns `None` for glyphs with no ink, such
    /// as spaces.
    fn rasterize(&self, ch: char, size: Px, angle: f32) -> Option<GlyphMask>;
}

/// A parsed font object. Fonts can be TTF or OTF fonts. Typically,
/// fonts are referred to throughout user applications by the
/// [FontId][crate::FontId] handed out when registering them with a
/// [Scribe][crate::Scribe], and not by any typed references
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, ScrawlError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Obtain the full name of the font, if the font carries one
    pub fn name(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().descender() as f32
    }

    /// Calculate the leading (extra space between lines) for the given font size
    pub fn leading(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().line_gap() as f32
    }

    /// Calculate the default line height of the font for the given size. The returned
    /// value is how much to vertically offset a second row of text below a first row of
    /// text, and makes a reasonable line spacing for a
    /// [Template][crate::Template]
    pub fn line_height(&self, size: Px) -> Px {
        self.leading(size) + self.ascent(size) - self.descent(size)
    }
}

impl FontRef for Font {
    fn advance(&self, ch: char, size: Px) -> Option<Px> {
        let face = self.face.as_face_ref();
        let glyph = face.glyph_index(ch)?;
        let advance = face.glyph_hor_advance(glyph)?;
        let scaling: Px = size / face.units_per_em() as f32;
        Some(scaling * advance as f32)
    }

    fn ascent(&self, size: Px) -> Px {
        Font::ascent(self, size)
    }

    fn rasterize(&self, ch: char, size: Px, angle: f32) -> Option<GlyphMask> {
        let face = self.face.as_face_ref();
        let glyph = face.glyph_index(ch)?;
        paint::outline_mask(face, glyph, size, Font::ascent(self, size), angle)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::BlockFace;
    use super::*;

    #[test]
    fn load_rejects_garbage() {
        assert!(matches!(
            Font::load(vec![0u8; 16]),
            Err(ScrawlError::FaceParsingError(_))
        ));
    }

    #[test]
    fn block_face_is_exact() {
        let face = BlockFace;
        assert_eq!(face.advance('a', Px(10.0)), Some(Px(5.0)));
        assert_eq!(face.advance('é', Px(10.0)), None);
        assert_eq!(face.ascent(Px(10.0)), Px(7.5));
        let mask = face.rasterize('a', Px(10.0), 0.2).unwrap();
        assert_eq!((mask.width, mask.height), (5, 10));
        assert!(mask.coverage.iter().all(|&c| c == 255));
    }
}
