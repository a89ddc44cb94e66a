use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum IconError {
    #[error("no usable font face found for family {family:?}")]
    /// No installed (or bundled) font face matched the requested family
    FontUnavailable { family: String },

    #[error("label is empty after trimming whitespace")]
    /// The icon label contained no renderable text
    InvalidLabel,

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// An error caused when failing to parse a TTF or OTF font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// An error caused when preparing a font for rasterization
    InvalidFont(#[from] ab_glyph::InvalidFont),

    #[error(transparent)]
    /// An error caused when encoding the rendered canvas as a PNG
    PngEncoding(#[from] png::EncodingError),
}
