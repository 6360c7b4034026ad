use crate::font::FontRef;
use crate::jitter::Jitter;
use crate::layout::segment::{Segments, TextUnit, UnitKind};
use crate::template::Template;
use crate::units::Px;
use crate::ScrawlError;

/// A unit the breaker has already measured: the font size sampled
/// for it and its advance at that size. A unit pushed back onto the
/// next line keeps the size it was first measured with.
#[derive(Debug, Clone, Copy)]
struct Measured {
    unit: TextUnit,
    size: Px,
    width: Px,
}

/// One glyph fixed on a line. `x` is the pen position relative to
/// the left edge of the content box.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LineGlyph {
    pub(crate) ch: char,
    pub(crate) x: Px,
    pub(crate) size: Px,
}

/// A broken line. May be empty when explicit line breaks follow each
/// other; an empty line still advances the vertical cursor.
#[derive(Debug, Default)]
pub(crate) struct Line {
    pub(crate) glyphs: Vec<LineGlyph>,
}

/// Greedily packs text units into lines against a pixel budget.
///
/// Each ordinary unit is measured at a freshly sampled font size; if
/// appending it would exceed the budget the line ends before it and
/// the unit opens the next line, keeping its sample. Units from the
/// end-char set never open a line: they are appended to the current
/// line even when that overflows the budget. Whitespace widens the
/// pen gap mid-line and disappears at line edges.
pub(crate) struct LineBreaker<'a> {
    units: Segments<'a>,
    pending: Option<Measured>,
}

impl<'a> LineBreaker<'a> {
    pub(crate) fn new(text: &'a str, end_chars: &'a str) -> LineBreaker<'a> {
        LineBreaker {
            units: Segments::new(text, end_chars),
            pending: None,
        }
    }

    /// Break the next line under `template`'s width budget, sampling
    /// sizes and gaps from `jitter`. Returns `Ok(None)` once the text
    /// is exhausted.
    pub(crate) fn next_line(
        &mut self,
        template: &Template,
        font: &dyn FontRef,
        jitter: &mut Jitter,
    ) -> Result<Option<Line>, ScrawlError> {
        let budget = template.content_box().width();
        let nominal = Px(template.font_size() as f32);
        let mut glyphs: Vec<LineGlyph> = Vec::new();
        let mut x = Px::ZERO;

        if let Some(measured) = self.pending.take() {
            glyphs.push(LineGlyph {
                ch: measured.unit.ch,
                x,
                size: measured.size,
            });
            x += measured.width;
        }

        loop {
            let unit = match self.units.next() {
                Some(unit) => unit,
                None if glyphs.is_empty() => return Ok(None),
                None => return Ok(Some(Line { glyphs })),
            };

            match unit.kind {
                UnitKind::LineBreak => return Ok(Some(Line { glyphs })),
                UnitKind::Whitespace => {
                    // gaps never lead a line, and never force a break
                    // themselves; an overflowing gap is settled by
                    // whatever glyph comes after it
                    if glyphs.is_empty() {
                        continue;
                    }
                    let advance = font
                        .advance(unit.ch, nominal)
                        .ok_or(ScrawlError::UnsupportedGlyph(unit.ch))?;
                    x += advance + jitter.word_gap(template);
                }
                UnitKind::Ordinary => {
                    let size = jitter.font_size(template);
                    let width = font
                        .advance(unit.ch, size)
                        .ok_or(ScrawlError::UnsupportedGlyph(unit.ch))?;
                    if !glyphs.is_empty() && x + width > budget {
                        self.pending = Some(Measured { unit, size, width });
                        return Ok(Some(Line { glyphs }));
                    }
                    glyphs.push(LineGlyph {
                        ch: unit.ch,
                        x,
                        size,
                    });
                    x += width;
                }
                UnitKind::EndChar => {
                    let size = jitter.font_size(template);
                    let width = font
                        .advance(unit.ch, size)
                        .ok_or(ScrawlError::UnsupportedGlyph(unit.ch))?;
                    glyphs.push(LineGlyph {
                        ch: unit.ch,
                        x,
                        size,
                    });
                    x += width;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::testing::rig;

    /// Collect every line as (char, x) pairs. Widths under the rig
    /// are exact: each glyph and the space advance 5 pixels at font
    /// size 10.
    fn lines_of(text: &str, end_chars: &str, width: u32) -> Vec<Vec<(char, f32)>> {
        let (scribe, template) = rig(width, 100);
        let template = template.with_end_chars(end_chars).unwrap();
        let font = scribe.fonts.get(template.font()).unwrap().as_ref();
        let mut jitter = Jitter::from_seed(7);
        let mut breaker = LineBreaker::new(text, template.end_chars());
        let mut lines = Vec::new();
        while let Some(line) = breaker.next_line(&template, font, &mut jitter).unwrap() {
            lines.push(
                line.glyphs
                    .iter()
                    .map(|glyph| (glyph.ch, *glyph.x))
                    .collect(),
            );
        }
        lines
    }

    #[test]
    fn a_short_text_stays_on_one_line() {
        let lines = lines_of("ab cd", "", 200);
        assert_eq!(
            lines,
            vec![vec![('a', 0.0), ('b', 5.0), ('c', 15.0), ('d', 20.0)]]
        );
    }

    #[test]
    fn breaks_before_the_glyph_that_would_overflow() {
        let lines = lines_of("abcd", "", 10);
        assert_eq!(
            lines,
            vec![vec![('a', 0.0), ('b', 5.0)], vec![('c', 0.0), ('d', 5.0)]]
        );
    }

    #[test]
    fn an_overflowing_gap_breaks_at_the_next_glyph() {
        let lines = lines_of("ab cd", "", 12);
        assert_eq!(
            lines,
            vec![vec![('a', 0.0), ('b', 5.0)], vec![('c', 0.0), ('d', 5.0)]]
        );
    }

    #[test]
    fn end_chars_overflow_rather_than_lead() {
        let lines = lines_of("ab cd.", ".", 12);
        assert_eq!(
            lines,
            vec![
                vec![('a', 0.0), ('b', 5.0)],
                vec![('c', 0.0), ('d', 5.0), ('.', 10.0)]
            ]
        );
    }

    #[test]
    fn consecutive_end_chars_pile_onto_the_first_line() {
        let lines = lines_of("...", ".", 8);
        assert_eq!(lines, vec![vec![('.', 0.0), ('.', 5.0), ('.', 10.0)]]);
    }

    #[test]
    fn an_end_char_leads_after_an_explicit_break() {
        // only soft breaks push end chars back; at the start of the
        // text or right after a hard break they lead like any glyph
        let lines = lines_of(".a\n.b", ".", 200);
        assert_eq!(
            lines,
            vec![
                vec![('.', 0.0), ('a', 5.0)],
                vec![('.', 0.0), ('b', 5.0)]
            ]
        );
    }

    #[test]
    fn a_pulled_end_char_overflows_by_its_advance_alone() {
        // the line is already full at the budget edge; the end char
        // still lands on it, and the next glyph opens a fresh line
        let lines = lines_of("abcd.e", ".", 20);
        assert_eq!(
            lines,
            vec![
                vec![
                    ('a', 0.0),
                    ('b', 5.0),
                    ('c', 10.0),
                    ('d', 15.0),
                    ('.', 20.0)
                ],
                vec![('e', 0.0)]
            ]
        );
    }

    #[test]
    fn explicit_breaks_produce_empty_lines() {
        let lines = lines_of("a\n\nb", "", 200);
        assert_eq!(lines, vec![vec![('a', 0.0)], vec![], vec![('b', 0.0)]]);
    }

    #[test]
    fn a_trailing_newline_adds_no_line() {
        let lines = lines_of("ab\n", "", 200);
        assert_eq!(lines, vec![vec![('a', 0.0), ('b', 5.0)]]);
    }

    #[test]
    fn a_glyph_wider_than_the_budget_gets_a_line_alone() {
        let lines = lines_of("ab", "", 4);
        assert_eq!(lines, vec![vec![('a', 0.0)], vec![('b', 0.0)]]);
    }

    #[test]
    fn whitespace_never_leads_a_line() {
        assert_eq!(
            lines_of("  ab", "", 200),
            vec![vec![('a', 0.0), ('b', 5.0)]]
        );
        // the gap swallowed by a break does not carry over either
        assert_eq!(
            lines_of("ab cd", "", 14),
            vec![vec![('a', 0.0), ('b', 5.0)], vec![('c', 0.0), ('d', 5.0)]]
        );
    }

    #[test]
    fn unknown_glyphs_surface_as_errors() {
        let (scribe, template) = rig(200, 100);
        let font = scribe.fonts.get(template.font()).unwrap().as_ref();
        let mut jitter = Jitter::from_seed(0);
        let mut breaker = LineBreaker::new("héllo", template.end_chars());
        let result = breaker.next_line(&template, font, &mut jitter);
        assert!(matches!(result, Err(ScrawlError::UnsupportedGlyph('é'))));
    }

    #[test]
    fn a_pushed_back_glyph_keeps_its_sampled_size() {
        let (scribe, template) = rig(10, 100);
        let template = template.with_font_size_sigma(1.5).unwrap();
        let font = scribe.fonts.get(template.font()).unwrap().as_ref();

        let mut jitter = Jitter::from_seed(42);
        let mut breaker = LineBreaker::new("abcd", template.end_chars());
        let mut sizes = Vec::new();
        while let Some(line) = breaker.next_line(&template, font, &mut jitter).unwrap() {
            sizes.extend(line.glyphs.iter().map(|glyph| glyph.size));
        }

        // exactly one size draw per glyph, in text order, even across
        // the pushback
        let mut expected = Jitter::from_seed(42);
        let expected: Vec<_> = (0..4).map(|_| expected.font_size(&template)).collect();
        assert_eq!(sizes, expected);
    }
}
