use std::iter::Peekable;
use std::str::Chars;

/// How a [TextUnit] participates in line breaking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnitKind {
    /// A regular renderable character
    Ordinary,
    /// A collapsed run of blank characters: one word-spacing
    /// opportunity, no ink
    Whitespace,
    /// An explicit line break in the source text
    LineBreak,
    /// A renderable character that must not start a line
    EndChar,
}

/// One logical unit of input text, produced once per character (or
/// per whitespace run) and never revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TextUnit {
    pub ch: char,
    pub kind: UnitKind,
}

/// Splits raw text into [TextUnit]s, lazily and in a single pass.
///
/// `\r\n`, `\r`, and `\n` each become one [UnitKind::LineBreak] unit.
/// Any other run of consecutive whitespace collapses to a single
/// [UnitKind::Whitespace] unit carrying `' '` as its measurement
/// character. Characters in `end_chars` are tagged
/// [UnitKind::EndChar] so the line breaker can keep them off the
/// start of a line.
pub(crate) struct Segments<'a> {
    chars: Peekable<Chars<'a>>,
    end_chars: &'a str,
}

impl<'a> Segments<'a> {
    pub fn new(text: &'a str, end_chars: &'a str) -> Segments<'a> {
        Segments {
            chars: text.chars().peekable(),
            end_chars,
        }
    }
}

impl Iterator for Segments<'_> {
    type Item = TextUnit;

    fn next(&mut self) -> Option<TextUnit> {
        let ch = self.chars.next()?;

        if ch == '\r' {
            self.chars.next_if_eq(&'\n');
            return Some(TextUnit {
                ch: '\n',
                kind: UnitKind::LineBreak,
            });
        }
        if ch == '\n' {
            return Some(TextUnit {
                ch: '\n',
                kind: UnitKind::LineBreak,
            });
        }

        if ch.is_whitespace() {
            // runs collapse, but never across an explicit break
            while self
                .chars
                .next_if(|&c| c.is_whitespace() && c != '\r' && c != '\n')
                .is_some()
            {}
            return Some(TextUnit {
                ch: ' ',
                kind: UnitKind::Whitespace,
            });
        }

        let kind = if self.end_chars.contains(ch) {
            UnitKind::EndChar
        } else {
            UnitKind::Ordinary
        };
        Some(TextUnit { ch, kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str, end_chars: &str) -> Vec<(char, UnitKind)> {
        Segments::new(text, end_chars)
            .map(|u| (u.ch, u.kind))
            .collect()
    }

    #[test]
    fn words_become_character_units() {
        assert_eq!(
            kinds("ab cd", ""),
            vec![
                ('a', UnitKind::Ordinary),
                ('b', UnitKind::Ordinary),
                (' ', UnitKind::Whitespace),
                ('c', UnitKind::Ordinary),
                ('d', UnitKind::Ordinary),
            ]
        );
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(
            kinds("a \t  b", ""),
            vec![
                ('a', UnitKind::Ordinary),
                (' ', UnitKind::Whitespace),
                ('b', UnitKind::Ordinary),
            ]
        );
    }

    #[test]
    fn newline_variants_each_break_once() {
        assert_eq!(
            kinds("a\r\nb\rc\nd", ""),
            vec![
                ('a', UnitKind::Ordinary),
                ('\n', UnitKind::LineBreak),
                ('b', UnitKind::Ordinary),
                ('\n', UnitKind::LineBreak),
                ('c', UnitKind::Ordinary),
                ('\n', UnitKind::LineBreak),
                ('d', UnitKind::Ordinary),
            ]
        );
    }

    #[test]
    fn runs_do_not_collapse_across_breaks() {
        assert_eq!(
            kinds("a \n b", ""),
            vec![
                ('a', UnitKind::Ordinary),
                (' ', UnitKind::Whitespace),
                ('\n', UnitKind::LineBreak),
                (' ', UnitKind::Whitespace),
                ('b', UnitKind::Ordinary),
            ]
        );
    }

    #[test]
    fn end_chars_are_tagged() {
        assert_eq!(
            kinds("ab.", ".,"),
            vec![
                ('a', UnitKind::Ordinary),
                ('b', UnitKind::Ordinary),
                ('.', UnitKind::EndChar),
            ]
        );
    }

    #[test]
    fn blank_lines_survive() {
        assert_eq!(
            kinds("a\n\nb", ""),
            vec![
                ('a', UnitKind::Ordinary),
                ('\n', UnitKind::LineBreak),
                ('\n', UnitKind::LineBreak),
                ('b', UnitKind::Ordinary),
            ]
        );
    }
}
