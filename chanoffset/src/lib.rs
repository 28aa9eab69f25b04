//! Chanoffset - Per-channel additive offset image filter
//!
//! Adds a constant to selected colour channels of an image, with optional
//! (un)premultiplication, a mix factor and an optional mask.
//!
//! # Overview
//!
//! - Image buffers, views and rectangles (re-exported at the top level)
//! - Premultiply and mask/mix recomposition ([`mix`])
//! - The offset filter with identity checks and tiled rendering ([`filter`])
//! - PNG I/O ([`io`])
//!
//! # Example
//!
//! ```
//! use chanoffset::filter::{NeverAbort, OffsetFilter, Params, RenderArguments, RgbaValues};
//! use chanoffset::{Components, DynImage, Image, Rect};
//!
//! let src = Image::from_data(Rect::from_size(2, 1), Components::Rgb, vec![0u8, 0, 0, 200, 200, 200]).unwrap();
//! let mut dst = Image::<u8>::from_size(2, 1, Components::Rgb).unwrap();
//!
//! let filter = OffsetFilter::new(Params {
//!     value: RgbaValues::splat(0.5),
//!     ..Params::default()
//! });
//! let args = RenderArguments::new(src.bounds(), Some(src.view().into()), dst.view_mut().into());
//! let _ = filter.render(args, &NeverAbort).unwrap();
//!
//! // 0 + 127.5 truncates, 200 + 127.5 saturates
//! assert_eq!(dst.data(), &[127, 127, 127, 255, 255, 255]);
//!
//! let png = chanoffset::io::write_image_mem(&DynImage::from(dst), chanoffset::io::ImageFormat::Png).unwrap();
//! let back = chanoffset::io::read_image_mem(&png).unwrap();
//! assert_eq!(back.bounds(), Rect::from_size(2, 1));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use chanoffset_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use chanoffset_filter as filter;
pub use chanoffset_io as io;
pub use chanoffset_mix as mix;
