use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a stat card render.
///
/// Every variant is fatal to the render it occurs in. Callers never receive a
/// half-drawn card.
#[derive(Error, Debug)]
pub enum RenderError {
    /// An asset file (font or avatar) could not be read from disk.
    #[error("Failed to read asset {path}: {source}")]
    AssetRead {
        /// Path of the asset that failed to load
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// An image asset was read but could not be decoded.
    #[error("Failed to decode image asset {path}: {source}")]
    AssetDecode {
        /// Path of the image asset
        path: PathBuf,
        /// The underlying decoding error
        #[source]
        source: image::ImageError,
    },

    /// The font file does not contain a usable font.
    #[error("Font file {path} is not a valid font")]
    InvalidFont {
        /// Path of the font file
        path: PathBuf,
    },

    /// The finished canvas could not be encoded as PNG.
    #[error("Failed to encode stat card: {0}")]
    Encode(#[from] image::ImageError),

    /// The encoded PNG could not be written to the output directory.
    #[error("Failed to write stat card to {path}: {source}")]
    Write {
        /// Destination path of the PNG
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },
}
