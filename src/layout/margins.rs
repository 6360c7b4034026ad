/// Margins are used when flowing text onto a page. They are measured
/// in whole pixels from the respective edge of the background image,
/// and determine the content box lines are laid out into. Glyph
/// perturbation may still nudge ink slightly past a margin; the
/// margins bound layout, not individual strokes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: u32, right: u32, bottom: u32, left: u32) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all(value: u32) -> Margins {
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: u32, horizontal: u32) -> Margins {
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create margins where all values are 0
    pub fn empty() -> Margins {
        Margins {
            top: 0,
            right: 0,
            bottom: 0,
            left: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_agree() {
        assert_eq!(Margins::trbl(1, 2, 3, 4).left, 4);
        assert_eq!(Margins::all(5), Margins::trbl(5, 5, 5, 5));
        assert_eq!(Margins::symmetric(2, 7), Margins::trbl(2, 7, 2, 7));
        assert_eq!(Margins::empty(), Margins::default());
    }
}
