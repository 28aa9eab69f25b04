//! Image containers
//!
//! - [`ImageView`] / [`ImageViewMut`] - Borrowed host buffers
//! - [`DynImageView`] / [`DynImageViewMut`] - Same, with the encoding
//!   chosen at run time
//! - [`Image`] / [`DynImage`] - Owned buffers for I/O and tests
//!
//! # Ownership model
//!
//! Views borrow memory that the host owns for the duration of one render
//! call. Writable views can be split into disjoint row bands
//! ([`ImageViewMut::into_row_bands`]) so that several threads write to one
//! destination without locking.

mod erased;
mod owned;
mod view;

pub use erased::{DynImageView, DynImageViewMut};
pub use owned::{DynImage, Image};
pub use view::{ImageView, ImageViewMut};
