//! Text layout: segmentation of raw text into units, greedy line
//! breaking against a pixel budget, and the margins that frame a
//! page's content box.
//!
//! Layout is width-only here; vertical flow across pages lives with
//! the page iterator. Lines are broken character by character, the
//! way handwriting wraps, so a word may split at the line edge unless
//! it ends in a character from the template's end-char set.

mod margins;
pub(crate) mod segment;
pub(crate) mod text;

pub use margins::*;
