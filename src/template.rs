use crate::fill::Fill;
use crate::layout::Margins;
use crate::rect::Rect;
use crate::scribe::FontId;
use crate::units::Px;
use crate::ScrawlError;
use image::DynamicImage;

/// The parameter contract between a caller and the rendering engine:
/// one background image, one font, and every layout and perturbation
/// knob, validated up front. A `Template` is read-only once built;
/// the `with_*` methods consume it and return an adjusted copy, so a
/// half-validated template can never reach the renderer.
///
/// Optional fields derive their defaults from the font size until set
/// explicitly: line spacing defaults to the font size itself, the
/// spacing and position sigmas to `font_size / 32`, and the font-size
/// sigma to `font_size / 64`. Changing the font size later re-derives
/// exactly the fields that were never set.
#[derive(Clone, Debug)]
pub struct Template {
    background: DynamicImage,
    font: FontId,
    font_size: u32,
    margins: Margins,
    word_spacing: i32,
    line_spacing: Option<u32>,
    fill: Fill,
    end_chars: String,
    line_spacing_sigma: Option<f32>,
    font_size_sigma: Option<f32>,
    word_spacing_sigma: Option<f32>,
    perturb_x_sigma: Option<f32>,
    perturb_y_sigma: Option<f32>,
    perturb_theta_sigma: f32,
}

impl Template {
    /// Characters that are never allowed to begin a line. The default
    /// covers common CJK closing punctuation and its ASCII relatives
    pub const DEFAULT_END_CHARS: &'static str = "，。》？；：’”】｝、！％）,.>?;:]}!%)′″℃℉";

    /// Default standard deviation of per-glyph rotation, in radians
    pub const DEFAULT_PERTURB_THETA_SIGMA: f32 = 0.07;

    /// Create a template over a background image, with every optional
    /// field at its derived default and the fill set to opaque black
    /// in the background's mode. The background must be an 8-bit
    /// greyscale, greyscale-alpha, RGB, or RGBA image.
    pub fn new(
        background: DynamicImage,
        font: FontId,
        font_size: u32,
    ) -> Result<Template, ScrawlError> {
        if font_size == 0 {
            return Err(ScrawlError::invalid("font_size must be at least one pixel"));
        }
        let fill = Fill::default_for(background.color()).ok_or_else(|| {
            ScrawlError::invalid(format!(
                "unsupported background mode {:?}; use an 8-bit L, LA, RGB, or RGBA image",
                background.color()
            ))
        })?;
        let template = Template {
            background,
            font,
            font_size,
            margins: Margins::empty(),
            word_spacing: 0,
            line_spacing: None,
            fill,
            end_chars: Template::DEFAULT_END_CHARS.to_string(),
            line_spacing_sigma: None,
            font_size_sigma: None,
            word_spacing_sigma: None,
            perturb_x_sigma: None,
            perturb_y_sigma: None,
            perturb_theta_sigma: Template::DEFAULT_PERTURB_THETA_SIGMA,
        };
        template.check_margins()?;
        Ok(template)
    }

    /// Replace the background image, re-validating the margins and
    /// the fill against the new image's size and mode
    pub fn with_background(mut self, background: DynamicImage) -> Result<Template, ScrawlError> {
        let bands = Fill::default_for(background.color())
            .ok_or_else(|| {
                ScrawlError::invalid(format!(
                    "unsupported background mode {:?}; use an 8-bit L, LA, RGB, or RGBA image",
                    background.color()
                ))
            })?
            .bands();
        if bands != self.fill.bands() {
            return Err(ScrawlError::invalid(format!(
                "fill has {} bands but the new background has {}",
                self.fill.bands(),
                bands
            )));
        }
        self.background = background;
        self.check_margins()?;
        Ok(self)
    }

    /// Point the template at a different registered font
    pub fn with_font(mut self, font: FontId) -> Result<Template, ScrawlError> {
        self.font = font;
        Ok(self)
    }

    /// Change the nominal font size. Sigmas that were never set
    /// explicitly re-derive from the new size; the word spacing must
    /// still clear its lower bound against it.
    pub fn with_font_size(mut self, font_size: u32) -> Result<Template, ScrawlError> {
        if font_size == 0 {
            return Err(ScrawlError::invalid("font_size must be at least one pixel"));
        }
        self.font_size = font_size;
        self.check_word_spacing()?;
        Ok(self)
    }

    /// Set the nominal vertical advance between lines
    pub fn with_line_spacing(mut self, line_spacing: u32) -> Result<Template, ScrawlError> {
        if line_spacing == 0 {
            return Err(ScrawlError::invalid(
                "line_spacing must be at least one pixel",
            ));
        }
        self.line_spacing = Some(line_spacing);
        Ok(self)
    }

    /// Set the extra horizontal gap at word boundaries. May be
    /// negative to tighten words, down to (but not including)
    /// `-font_size / 2`.
    pub fn with_word_spacing(mut self, word_spacing: i32) -> Result<Template, ScrawlError> {
        self.word_spacing = word_spacing;
        self.check_word_spacing()?;
        Ok(self)
    }

    /// Set the margins text is flowed inside. Opposing margins must
    /// leave at least one pixel of content between them.
    pub fn with_margins(mut self, margins: Margins) -> Result<Template, ScrawlError> {
        self.margins = margins;
        self.check_margins()?;
        Ok(self)
    }

    /// Set the ink colour. Its band count must match the background's
    /// mode.
    pub fn with_fill(mut self, fill: Fill) -> Result<Template, ScrawlError> {
        if fill.bands() != self.fill.bands() {
            return Err(ScrawlError::invalid(format!(
                "fill has {} bands but the background has {}",
                fill.bands(),
                self.fill.bands()
            )));
        }
        self.fill = fill;
        Ok(self)
    }

    /// Replace the set of characters that must not begin a line
    pub fn with_end_chars<S: ToString>(mut self, end_chars: S) -> Result<Template, ScrawlError> {
        self.end_chars = end_chars.to_string();
        Ok(self)
    }

    pub fn with_line_spacing_sigma(mut self, sigma: f32) -> Result<Template, ScrawlError> {
        self.line_spacing_sigma = Some(check_sigma(sigma, "line_spacing_sigma")?);
        Ok(self)
    }

    pub fn with_font_size_sigma(mut self, sigma: f32) -> Result<Template, ScrawlError> {
        self.font_size_sigma = Some(check_sigma(sigma, "font_size_sigma")?);
        Ok(self)
    }

    pub fn with_word_spacing_sigma(mut self, sigma: f32) -> Result<Template, ScrawlError> {
        self.word_spacing_sigma = Some(check_sigma(sigma, "word_spacing_sigma")?);
        Ok(self)
    }

    pub fn with_perturb_x_sigma(mut self, sigma: f32) -> Result<Template, ScrawlError> {
        self.perturb_x_sigma = Some(check_sigma(sigma, "perturb_x_sigma")?);
        Ok(self)
    }

    pub fn with_perturb_y_sigma(mut self, sigma: f32) -> Result<Template, ScrawlError> {
        self.perturb_y_sigma = Some(check_sigma(sigma, "perturb_y_sigma")?);
        Ok(self)
    }

    pub fn with_perturb_theta_sigma(mut self, sigma: f32) -> Result<Template, ScrawlError> {
        self.perturb_theta_sigma = check_sigma(sigma, "perturb_theta_sigma")?;
        Ok(self)
    }

    /// The background image pages of this template copy
    pub fn background(&self) -> &DynamicImage {
        &self.background
    }

    /// The registered font glyphs are measured and rasterized with
    pub fn font(&self) -> FontId {
        self.font
    }

    /// Nominal font size in pixels
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Nominal vertical advance between lines; defaults to the font
    /// size
    pub fn line_spacing(&self) -> u32 {
        self.line_spacing.unwrap_or(self.font_size)
    }

    /// Extra horizontal gap at word boundaries
    pub fn word_spacing(&self) -> i32 {
        self.word_spacing
    }

    pub fn margins(&self) -> &Margins {
        &self.margins
    }

    pub fn fill(&self) -> Fill {
        self.fill
    }

    /// Characters that must not begin a line
    pub fn end_chars(&self) -> &str {
        &self.end_chars
    }

    pub fn line_spacing_sigma(&self) -> f32 {
        self.line_spacing_sigma
            .unwrap_or(self.font_size as f32 / 32.0)
    }

    pub fn font_size_sigma(&self) -> f32 {
        self.font_size_sigma
            .unwrap_or(self.font_size as f32 / 64.0)
    }

    pub fn word_spacing_sigma(&self) -> f32 {
        self.word_spacing_sigma
            .unwrap_or(self.font_size as f32 / 32.0)
    }

    pub fn perturb_x_sigma(&self) -> f32 {
        self.perturb_x_sigma.unwrap_or(self.font_size as f32 / 32.0)
    }

    pub fn perturb_y_sigma(&self) -> f32 {
        self.perturb_y_sigma.unwrap_or(self.font_size as f32 / 32.0)
    }

    pub fn perturb_theta_sigma(&self) -> f32 {
        self.perturb_theta_sigma
    }

    /// The background's dimensions as `(width, height)` in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.background.width(), self.background.height())
    }

    /// The region text is flowed into: the background minus the
    /// margins
    pub fn content_box(&self) -> Rect {
        let (width, height) = self.size();
        Rect {
            x1: Px(self.margins.left as f32),
            y1: Px(self.margins.top as f32),
            x2: Px((width - self.margins.right) as f32),
            y2: Px((height - self.margins.bottom) as f32),
        }
    }

    fn check_margins(&self) -> Result<(), ScrawlError> {
        let (width, height) = self.size();
        let m = &self.margins;
        if m.left as u64 + m.right as u64 >= width as u64 {
            return Err(ScrawlError::invalid(format!(
                "left and right margins ({} + {}) leave no content in a background {} pixels wide",
                m.left, m.right, width
            )));
        }
        if m.top as u64 + m.bottom as u64 >= height as u64 {
            return Err(ScrawlError::invalid(format!(
                "top and bottom margins ({} + {}) leave no content in a background {} pixels tall",
                m.top, m.bottom, height
            )));
        }
        Ok(())
    }

    fn check_word_spacing(&self) -> Result<(), ScrawlError> {
        // the bound floors, so it stays exclusive for odd sizes too
        let bound = (-(self.font_size as i64)).div_euclid(2);
        if (self.word_spacing as i64) <= bound {
            return Err(ScrawlError::invalid(format!(
                "word_spacing {} must be greater than -font_size / 2 ({})",
                self.word_spacing, bound
            )));
        }
        Ok(())
    }
}

fn check_sigma(sigma: f32, name: &str) -> Result<f32, ScrawlError> {
    if sigma.is_finite() && sigma >= 0.0 {
        Ok(sigma)
    } else {
        Err(ScrawlError::invalid(format!(
            "{name} must be a non-negative finite number, not {sigma}"
        )))
    }
}

/// Equality is over what the accessors return, so an explicitly set
/// field equal to its derived default compares equal to one left
/// unset
impl PartialEq for Template {
    fn eq(&self, other: &Template) -> bool {
        self.background == other.background
            && self.font == other.font
            && self.font_size == other.font_size
            && self.line_spacing() == other.line_spacing()
            && self.word_spacing == other.word_spacing
            && self.margins == other.margins
            && self.fill == other.fill
            && self.end_chars == other.end_chars
            && self.line_spacing_sigma() == other.line_spacing_sigma()
            && self.font_size_sigma() == other.font_size_sigma()
            && self.word_spacing_sigma() == other.word_spacing_sigma()
            && self.perturb_x_sigma() == other.perturb_x_sigma()
            && self.perturb_y_sigma() == other.perturb_y_sigma()
            && self.perturb_theta_sigma == other.perturb_theta_sigma
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::font::testing::BlockFace;
    use crate::scribe::Scribe;
    use image::{GrayImage, Luma};

    /// A scribe holding one [BlockFace] plus a quiet template over a
    /// white single-band background: font size 10, margins 0, every
    /// sigma 0, no end chars. Layout on it is exactly predictable.
    pub(crate) fn rig(width: u32, height: u32) -> (Scribe, Template) {
        let mut scribe = Scribe::default();
        let font = scribe.add_font(BlockFace);
        let background =
            DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([255])));
        let template = Template::new(background, font, 10)
            .and_then(|t| t.with_end_chars(""))
            .and_then(|t| t.with_line_spacing_sigma(0.0))
            .and_then(|t| t.with_font_size_sigma(0.0))
            .and_then(|t| t.with_word_spacing_sigma(0.0))
            .and_then(|t| t.with_perturb_x_sigma(0.0))
            .and_then(|t| t.with_perturb_y_sigma(0.0))
            .and_then(|t| t.with_perturb_theta_sigma(0.0))
            .unwrap();
        (scribe, template)
    }
}
