use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum ScrawlError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to decode or encode a background
    Image(#[from] image::ImageError),

    /// A template or render argument failed validation
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The font has no glyph for a character in the text
    #[error("font has no glyph for {0:?}")]
    UnsupportedGlyph(char),
}

impl ScrawlError {
    pub(crate) fn invalid(msg: impl Into<String>) -> ScrawlError {
        ScrawlError::InvalidParameter(msg.into())
    }
}
