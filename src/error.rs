//! Error types for skin building.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using SkinError.
pub type Result<T> = std::result::Result<T, SkinError>;

/// Main error type for photo to skin conversion.
#[derive(Error, Debug)]
pub enum SkinError {
    /// Failed to decode, resize or otherwise process an image.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize a mapping.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The photo or one of the palette images does not exist.
    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// The photo has no pixels along one axis.
    #[error("Photo has degenerate dimensions {width}x{height}")]
    DegeneratePhoto { width: u32, height: u32 },

    /// A copy instruction reaches outside its source image.
    #[error(
        "Crop for '{part}' at ({x}, {y}) size {width}x{height} is outside the \
         {source_width}x{source_height} source image"
    )]
    CropOutOfBounds {
        part: String,
        x: i64,
        y: i64,
        width: u32,
        height: u32,
        source_width: u32,
        source_height: u32,
    },

    /// Failed to encode an output image.
    #[error("Encoding error: {0}")]
    Encode(String),
}
