//! Error types for chanoffset-core
//!
//! Provides a unified error type for descriptor parsing and image
//! container construction. Pixel-level helpers never fail; every check
//! happens when a view or image is built.

use thiserror::Error;

/// chanoffset-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Rectangle with x2 < x1 or y2 < y1
    #[error("invalid rectangle: ({x1}, {y1}) - ({x2}, {y2})")]
    InvalidRect { x1: i32, y1: i32, x2: i32, y2: i32 },

    /// Bit depth outside the supported encodings
    #[error("unsupported bit depth: {0} bits per sample")]
    UnsupportedDepth(u32),

    /// Component count outside {1, 3, 4}
    #[error("unsupported component count: {0}")]
    UnsupportedComponents(u32),

    /// Row stride shorter than one row of pixels
    #[error("row stride {stride} is shorter than a row of {min} samples")]
    InvalidStride { stride: usize, min: usize },

    /// Backing buffer too small for the declared bounds
    #[error("buffer too small: need {required} samples, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },

    /// Pixel coordinate outside the image bounds
    #[error("pixel ({x}, {y}) is outside the image bounds")]
    OutOfBounds { x: i32, y: i32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for chanoffset-core operations
pub type Result<T> = std::result::Result<T, Error>;
