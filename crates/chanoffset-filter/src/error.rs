//! Error types for chanoffset-filter
//!
//! Every error is detected before the first pixel is written. The pixel
//! loop itself cannot fail, and an aborted render is not an error.

use chanoffset_core::{BitDepth, Components, Rect};
use thiserror::Error;

/// Errors that can occur while setting up a render
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] chanoffset_core::Error),

    /// The host did not provide an output image
    #[error("no destination image")]
    MissingDestination,

    /// An input image does not match the destination encoding or layout
    #[error("{role} image is {actual_depth:?}/{actual_components:?}, expected {expected_depth:?}/{expected_components:?}")]
    ImageFormat {
        /// Which input is wrong ("source" or "mask")
        role: &'static str,
        expected_depth: BitDepth,
        expected_components: Components,
        actual_depth: BitDepth,
        actual_components: Components,
    },

    /// The render window reaches outside the destination image
    #[error("render window {window:?} is not inside destination bounds {bounds:?}")]
    WindowOutOfBounds { window: Rect, bounds: Rect },

    /// Render scale is not a positive finite number
    #[error("invalid render scale ({x}, {y})")]
    InvalidRenderScale { x: f64, y: f64 },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
