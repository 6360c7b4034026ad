use crate::units::*;

/// A rectangle, specified by two opposite corners. Raster pages put
/// the origin at the top-left, so `(x1, y1)` is the upper-left corner
/// and `(x2, y2)` the lower-right.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the first (upper-left) corner.
    pub x1: Px,
    /// The y-coordinate of the first (upper-left) corner.
    pub y1: Px,
    /// The x-coordinate of the second (lower-right) corner.
    pub x2: Px,
    /// The y-coordinate of the second (lower-right) corner.
    pub y2: Px,
}

impl Rect {
    /// The horizontal extent of the rectangle
    pub fn width(&self) -> Px {
        self.x2 - self.x1
    }

    /// The vertical extent of the rectangle
    pub fn height(&self) -> Px {
        self.y2 - self.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extents() {
        let r = Rect {
            x1: Px(8.0),
            y1: Px(8.0),
            x2: Px(192.0),
            y2: Px(92.0),
        };
        assert_eq!(r.width(), Px(184.0));
        assert_eq!(r.height(), Px(84.0));
    }
}
