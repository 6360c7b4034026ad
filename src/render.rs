use crate::jitter::Jitter;
use crate::layout::text::{Line, LineBreaker};
use crate::page::{Page, PlacedGlyph};
use crate::paint;
use crate::scribe::Scribe;
use crate::template::Template;
use crate::units::Px;
use crate::ScrawlError;

/// Lazy sequence of rendered pages, produced by [Scribe::render] and
/// [Scribe::render_seeded]. Each `next` call lays out as many lines
/// as fit one page, inks them, and hands the page back; nothing past
/// the requested page is computed. The sequence is single-pass and
/// ends for good after the text runs out or an error is returned.
pub struct Pages<'a> {
    scribe: &'a Scribe,
    templates: &'a [Template],
    breaker: LineBreaker<'a>,
    jitter: Jitter,
    cycle: usize,
    index: usize,
    done: bool,
}

impl<'a> Pages<'a> {
    /// Line-leading rules follow the first template's end-char set;
    /// per-page budgets and sigmas follow the template hosting the
    /// page.
    pub(crate) fn new(
        scribe: &'a Scribe,
        text: &'a str,
        templates: &'a [Template],
        jitter: Jitter,
    ) -> Pages<'a> {
        Pages {
            scribe,
            templates,
            breaker: LineBreaker::new(text, templates[0].end_chars()),
            jitter,
            cycle: 0,
            index: 0,
            done: false,
        }
    }

    fn next_page(&mut self) -> Result<Option<Page>, ScrawlError> {
        let template = &self.templates[self.cycle];
        let font = self
            .scribe
            .fonts
            .get(template.font())
            .expect("can get font")
            .as_ref();

        // a page only opens once there is a line to put on it, so
        // trailing whitespace never produces a blank page
        let first = match self.breaker.next_line(template, font, &mut self.jitter)? {
            Some(line) => line,
            None => return Ok(None),
        };

        let mut page = Page::new(template, self.index);
        let content = page.content_box;
        // keep the last line's em box above the bottom margin
        let floor = content.y2 - Px(template.font_size() as f32);

        let mut y = content.y1;
        commit(&mut self.jitter, &mut page, template, &first, y);

        loop {
            // the advance is sampled before the next line is pulled;
            // when it overflows, the page closes and the text that
            // remains is broken under the next template's budget
            let dy = self.jitter.line_gap(template);
            if y + dy > floor {
                break;
            }
            let line = match self.breaker.next_line(template, font, &mut self.jitter)? {
                Some(line) => line,
                None => break,
            };
            y += dy;
            commit(&mut self.jitter, &mut page, template, &line, y);
        }

        paint::paint_page(&mut page, font, &template.fill());
        self.cycle = (self.cycle + 1) % self.templates.len();
        self.index += 1;
        Ok(Some(page))
    }
}

/// Bind a broken line to the page at vertical position `y`, drawing
/// the positional and rotational perturbations for each glyph
fn commit(jitter: &mut Jitter, page: &mut Page, template: &Template, line: &Line, y: Px) {
    for glyph in &line.glyphs {
        let (ox, oy, angle) = jitter.displace(template);
        page.glyphs.push(PlacedGlyph {
            ch: glyph.ch,
            coords: (page.content_box.x1 + glyph.x + ox, y + oy),
            size: glyph.size,
            angle,
        });
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Result<Page, ScrawlError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_page() {
            Ok(Some(page)) => Some(Ok(page)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
