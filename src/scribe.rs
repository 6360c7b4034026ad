use crate::font::FontRef;
use crate::jitter::Jitter;
use crate::render::Pages;
use crate::template::Template;
use crate::ScrawlError;
use id_arena::{Arena, Id};

/// Handle to a font registered with a [Scribe]. Handles are only
/// valid with the scribe that issued them.
pub type FontId = Id<Box<dyn FontRef>>;

/// A scribe owns the fonts and turns text plus templates into pages.
/// Fonts are stored "globally" within the scribe, such that any
/// template can refer to one by its [FontId]; the handle stays valid
/// for the lifetime of the scribe.
#[derive(Default)]
pub struct Scribe {
    pub fonts: Arena<Box<dyn FontRef>>,
}

impl Scribe {
    /// Register a font with the scribe, returning the handle
    /// templates refer to it by
    pub fn add_font<F: FontRef + 'static>(&mut self, font: F) -> FontId {
        self.fonts.alloc(Box::new(font))
    }

    /// Render `text` over the templates, seeding the perturbations
    /// from OS entropy. Each call produces a different scrawl; use
    /// [Scribe::render_seeded] to reproduce one.
    ///
    /// Templates are cycled in order, one per page, wrapping around
    /// for as long as the text keeps overflowing. The returned
    /// iterator lays out and inks one page per `next` call.
    pub fn render<'a>(
        &'a self,
        text: &'a str,
        templates: &'a [Template],
    ) -> Result<Pages<'a>, ScrawlError> {
        self.check_templates(templates)?;
        Ok(Pages::new(self, text, templates, Jitter::from_entropy()))
    }

    /// Render `text` over the templates with a fixed seed. The same
    /// scribe, text, templates, and seed always produce identical
    /// pages.
    pub fn render_seeded<'a>(
        &'a self,
        text: &'a str,
        templates: &'a [Template],
        seed: u64,
    ) -> Result<Pages<'a>, ScrawlError> {
        self.check_templates(templates)?;
        Ok(Pages::new(self, text, templates, Jitter::from_seed(seed)))
    }

    fn check_templates(&self, templates: &[Template]) -> Result<(), ScrawlError> {
        if templates.is_empty() {
            return Err(ScrawlError::invalid("at least one template is required"));
        }
        for (index, template) in templates.iter().enumerate() {
            if self.fonts.get(template.font()).is_none() {
                return Err(ScrawlError::invalid(format!(
                    "template {index} refers to a font that was not registered with this scribe"
                )));
            }
        }
        Ok(())
    }
}
