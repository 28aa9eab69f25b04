//! chanoffset Mix - Premultiply and mask/mix helpers
//!
//! Pixel-level building blocks shared by filters that work on normalized,
//! unpremultiplied values:
//!
//! - **Unpremultiply** ([`unpremult`]): native pixel to four normalized floats
//! - **Premultiply** ([`premult`]): normalized floats back to native scale
//! - **Mask** ([`Mask`]): per-pixel blend weight from a single-channel image
//! - **Mask/mix** ([`mask_mix_pix`], [`PremultMaskMix`]): blend with the
//!   source pixel and pack into the destination encoding

pub mod mask;
pub mod mix;
pub mod premult;

pub use mask::Mask;
pub use mix::{PremultMaskMix, mask_mix_pix, premult_mask_mix};
pub use premult::{premult, unpremult};
