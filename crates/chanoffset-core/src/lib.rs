//! chanoffset Core - Pixel containers and descriptors
//!
//! This crate provides the data structures shared by the chanoffset
//! filter crates:
//!
//! - [`Rect`] / [`RectD`] / [`RenderScale`] - Processing regions
//! - [`BitDepth`] / [`Components`] - Encoding and layout descriptors
//! - [`Sample`] - Native sample types (`u8`, `u16`, `f32`)
//! - [`ImageView`] / [`ImageViewMut`] - Borrowed pixel buffers
//! - [`Image`] / [`DynImage`] - Owned pixel buffers

pub mod depth;
pub mod error;
pub mod image;
pub mod rect;

pub use depth::{BitDepth, Components, Sample};
pub use error::{Error, Result};
pub use image::{DynImage, DynImageView, DynImageViewMut, Image, ImageView, ImageViewMut};
pub use rect::{Rect, RectD, RenderScale};

/// Channel indices of the normalized four-component working pixel.
///
/// Single-channel images map their only sample to [`ALPHA`].
pub mod channel {
    /// Red channel
    pub const RED: usize = 0;
    /// Green channel
    pub const GREEN: usize = 1;
    /// Blue channel
    pub const BLUE: usize = 2;
    /// Alpha channel
    pub const ALPHA: usize = 3;
}
