mod error;
pub use error::*;

mod fill;
pub use fill::*;

mod font;
pub use font::*;

pub(crate) mod jitter;

/// Utility functions and structures to lay text out on pages
pub mod layout;

mod page;
pub use page::*;

mod paint;
pub use paint::*;

mod rect;
pub use rect::*;

mod render;
pub use render::*;

mod scribe;
pub use scribe::*;

mod template;
pub use template::*;

mod units;
pub use units::*;

/// Re-export image functionality, mostly for loading backgrounds and saving rendered [Page]s
pub use image;
