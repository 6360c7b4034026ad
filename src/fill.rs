use image::ColorType;

/// An ink colour, expressed in the pixel mode of the background it
/// will be drawn onto. Each variant carries one byte per band; the
/// variant's band count must match the background's colour mode and
/// is checked when a [Template][crate::Template] is built.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Fill {
    /// Single-band greyscale; g ranges from 0 (black) to 255 (white)
    Grey { g: u8 },
    /// Greyscale with an alpha band
    GreyAlpha { g: u8, a: u8 },
    /// Three-band RGB
    RGB { r: u8, g: u8, b: u8 },
    /// Four-band RGB with an alpha band
    RGBA { r: u8, g: u8, b: u8, a: u8 },
}

impl Fill {
    /// Create a new single-band greyscale fill
    pub fn new_grey(g: u8) -> Fill {
        Fill::Grey { g }
    }

    /// Create a new greyscale fill with an alpha band
    pub fn new_grey_alpha(g: u8, a: u8) -> Fill {
        Fill::GreyAlpha { g, a }
    }

    /// Create a new RGB fill
    pub fn new_rgb(r: u8, g: u8, b: u8) -> Fill {
        Fill::RGB { r, g, b }
    }

    /// Create a new RGBA fill
    pub fn new_rgba(r: u8, g: u8, b: u8, a: u8) -> Fill {
        Fill::RGBA { r, g, b, a }
    }

    /// How many bands this fill carries
    pub fn bands(&self) -> u8 {
        match self {
            Fill::Grey { .. } => 1,
            Fill::GreyAlpha { .. } => 2,
            Fill::RGB { .. } => 3,
            Fill::RGBA { .. } => 4,
        }
    }

    /// The fill's bands as an array, padded with zeroes past
    /// [bands][Fill::bands] entries
    pub fn channels(&self) -> [u8; 4] {
        match *self {
            Fill::Grey { g } => [g, 0, 0, 0],
            Fill::GreyAlpha { g, a } => [g, a, 0, 0],
            Fill::RGB { r, g, b } => [r, g, b, 0],
            Fill::RGBA { r, g, b, a } => [r, g, b, a],
        }
    }

    /// The default ink for a background mode: opaque black. Returns
    /// `None` for modes the renderer doesn't support.
    pub fn default_for(mode: ColorType) -> Option<Fill> {
        match mode {
            ColorType::L8 => Some(Fill::Grey { g: 0 }),
            ColorType::La8 => Some(Fill::GreyAlpha { g: 0, a: 255 }),
            ColorType::Rgb8 => Some(Fill::RGB { r: 0, g: 0, b: 0 }),
            ColorType::Rgba8 => Some(Fill::RGBA {
                r: 0,
                g: 0,
                b: 0,
                a: 255,
            }),
            _ => None,
        }
    }
}

impl From<u8> for Fill {
    fn from(g: u8) -> Self {
        Fill::Grey { g }
    }
}

impl From<(u8, u8, u8)> for Fill {
    fn from(c: (u8, u8, u8)) -> Self {
        Fill::RGB {
            r: c.0,
            g: c.1,
            b: c.2,
        }
    }
}

impl From<[u8; 3]> for Fill {
    fn from(c: [u8; 3]) -> Self {
        let [r, g, b] = c;
        Fill::RGB { r, g, b }
    }
}

impl From<(u8, u8, u8, u8)> for Fill {
    fn from(c: (u8, u8, u8, u8)) -> Self {
        Fill::RGBA {
            r: c.0,
            g: c.1,
            b: c.2,
            a: c.3,
        }
    }
}

impl From<[u8; 4]> for Fill {
    fn from(c: [u8; 4]) -> Self {
        let [r, g, b, a] = c;
        Fill::RGBA { r, g, b, a }
    }
}

/// A list of pre-defined fill constants
pub mod fills {
    use super::*;

    pub const BLACK: Fill = Fill::Grey { g: 0 };
    pub const WHITE: Fill = Fill::Grey { g: 255 };
    pub const RED: Fill = Fill::RGB { r: 255, g: 0, b: 0 };
    pub const GREEN: Fill = Fill::RGB { r: 0, g: 255, b: 0 };
    pub const BLUE: Fill = Fill::RGB { r: 0, g: 0, b: 255 };
    /// The blue of a classic ballpoint pen
    pub const BALLPOINT: Fill = Fill::RGB { r: 20, g: 32, b: 110 };
}
