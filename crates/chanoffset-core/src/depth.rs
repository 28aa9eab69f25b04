//! Pixel encodings and component layouts
//!
//! The set of encodings is closed: 8-bit unsigned, 16-bit unsigned and
//! 32-bit float. Each one is described by a [`BitDepth`] and bound to a
//! Rust sample type through the sealed [`Sample`] trait.
//!
//! # Normalization
//!
//! Samples are normalized by dividing by [`BitDepth::max_value`]:
//! 255 for `u8`, 65536 for `u16`, 1 for `f32`. The 16-bit divisor is
//! 65536, not 65535, and packing clamps to that same bound.

use crate::error::{Error, Result};
use crate::image::{DynImageView, DynImageViewMut, ImageView, ImageViewMut};

/// Sample encoding of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// 8-bit unsigned integer samples
    UByte,
    /// 16-bit unsigned integer samples
    UShort,
    /// 32-bit floating point samples
    Float,
}

impl BitDepth {
    /// Create a `BitDepth` from a bit count per sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] if `bits` is not 8, 16, or 32.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            8 => Ok(BitDepth::UByte),
            16 => Ok(BitDepth::UShort),
            32 => Ok(BitDepth::Float),
            _ => Err(Error::UnsupportedDepth(bits)),
        }
    }

    /// Bits per sample
    pub const fn bits(self) -> u32 {
        match self {
            BitDepth::UByte => 8,
            BitDepth::UShort => 16,
            BitDepth::Float => 32,
        }
    }

    /// Storage width of one sample in bytes
    pub const fn bytes_per_sample(self) -> usize {
        self.bits() as usize / 8
    }

    /// Normalization divisor for this encoding
    pub const fn max_value(self) -> f32 {
        match self {
            BitDepth::UByte => 255.0,
            BitDepth::UShort => 65536.0,
            BitDepth::Float => 1.0,
        }
    }

    /// Whether samples are floating point (unclamped, signed)
    pub const fn is_float(self) -> bool {
        matches!(self, BitDepth::Float)
    }
}

/// Pixel component layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Components {
    /// Single channel, treated as alpha
    Alpha = 1,
    /// Red, green, blue
    Rgb = 3,
    /// Red, green, blue, alpha
    Rgba = 4,
}

impl Components {
    /// Create `Components` from a sample count per pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedComponents`] if `count` is not 1, 3, or 4.
    pub fn from_count(count: u32) -> Result<Self> {
        match count {
            1 => Ok(Components::Alpha),
            3 => Ok(Components::Rgb),
            4 => Ok(Components::Rgba),
            _ => Err(Error::UnsupportedComponents(count)),
        }
    }

    /// Samples per pixel
    #[inline]
    pub const fn count(self) -> usize {
        self as usize
    }

    /// Whether the layout carries an alpha channel
    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Components::Alpha | Components::Rgba)
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for f32 {}
}

/// A native sample type: `u8`, `u16` or `f32`.
///
/// Conversions work in "native-scaled" floats, i.e. the normalized value
/// multiplied by [`Sample::MAX_VALUE`].
pub trait Sample:
    Copy + Default + PartialEq + Send + Sync + std::fmt::Debug + 'static + private::Sealed
{
    /// Encoding descriptor for this sample type
    const DEPTH: BitDepth;
    /// Normalization divisor, equal to `DEPTH.max_value()`
    const MAX_VALUE: f32 = Self::DEPTH.max_value();

    /// Widen to a native-scaled float.
    fn to_f32(self) -> f32;

    /// Narrow a native-scaled float.
    ///
    /// Float samples store the value unchanged. Integer samples clamp to
    /// `[0, MAX_VALUE]` and truncate toward zero.
    fn from_f32(v: f32) -> Self;

    /// Recover a typed view from a type-erased one, if the encoding matches.
    fn downcast_view(view: DynImageView<'_>) -> Option<ImageView<'_, Self>>;

    /// Recover a typed mutable view from a type-erased one.
    ///
    /// On encoding mismatch the original view is handed back.
    fn downcast_view_mut(
        view: DynImageViewMut<'_>,
    ) -> std::result::Result<ImageViewMut<'_, Self>, DynImageViewMut<'_>>;
}

impl Sample for u8 {
    const DEPTH: BitDepth = BitDepth::UByte;

    #[inline]
    fn to_f32(self) -> f32 {
        self as f32
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        v.clamp(0.0, Self::MAX_VALUE) as u8
    }

    fn downcast_view(view: DynImageView<'_>) -> Option<ImageView<'_, Self>> {
        match view {
            DynImageView::U8(v) => Some(v),
            _ => None,
        }
    }

    fn downcast_view_mut(
        view: DynImageViewMut<'_>,
    ) -> std::result::Result<ImageViewMut<'_, Self>, DynImageViewMut<'_>> {
        match view {
            DynImageViewMut::U8(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl Sample for u16 {
    const DEPTH: BitDepth = BitDepth::UShort;

    #[inline]
    fn to_f32(self) -> f32 {
        self as f32
    }

    // 65536.0 saturates to u16::MAX in the cast
    #[inline]
    fn from_f32(v: f32) -> Self {
        v.clamp(0.0, Self::MAX_VALUE) as u16
    }

    fn downcast_view(view: DynImageView<'_>) -> Option<ImageView<'_, Self>> {
        match view {
            DynImageView::U16(v) => Some(v),
            _ => None,
        }
    }

    fn downcast_view_mut(
        view: DynImageViewMut<'_>,
    ) -> std::result::Result<ImageViewMut<'_, Self>, DynImageViewMut<'_>> {
        match view {
            DynImageViewMut::U16(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl Sample for f32 {
    const DEPTH: BitDepth = BitDepth::Float;

    #[inline]
    fn to_f32(self) -> f32 {
        self
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        v
    }

    fn downcast_view(view: DynImageView<'_>) -> Option<ImageView<'_, Self>> {
        match view {
            DynImageView::F32(v) => Some(v),
            _ => None,
        }
    }

    fn downcast_view_mut(
        view: DynImageViewMut<'_>,
    ) -> std::result::Result<ImageViewMut<'_, Self>, DynImageViewMut<'_>> {
        match view {
            DynImageViewMut::F32(v) => Ok(v),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_depth_from_bits() {
        assert_eq!(BitDepth::from_bits(8).unwrap(), BitDepth::UByte);
        assert_eq!(BitDepth::from_bits(16).unwrap(), BitDepth::UShort);
        assert_eq!(BitDepth::from_bits(32).unwrap(), BitDepth::Float);
        assert!(matches!(
            BitDepth::from_bits(10),
            Err(Error::UnsupportedDepth(10))
        ));
    }

    #[test]
    fn test_bit_depth_descriptor() {
        assert_eq!(BitDepth::UByte.max_value(), 255.0);
        assert_eq!(BitDepth::UShort.max_value(), 65536.0);
        assert_eq!(BitDepth::Float.max_value(), 1.0);
        assert_eq!(BitDepth::UShort.bytes_per_sample(), 2);
        assert!(BitDepth::Float.is_float());
        assert!(!BitDepth::UByte.is_float());
    }

    #[test]
    fn test_components_from_count() {
        assert_eq!(Components::from_count(1).unwrap(), Components::Alpha);
        assert_eq!(Components::from_count(3).unwrap(), Components::Rgb);
        assert_eq!(Components::from_count(4).unwrap(), Components::Rgba);
        assert!(matches!(
            Components::from_count(2),
            Err(Error::UnsupportedComponents(2))
        ));
        assert!(Components::Alpha.has_alpha());
        assert!(!Components::Rgb.has_alpha());
    }

    #[test]
    fn test_sample_pack_clamps_integers() {
        assert_eq!(u8::from_f32(-3.0), 0);
        assert_eq!(u8::from_f32(300.0), 255);
        assert_eq!(u8::from_f32(150.99), 150);
        assert_eq!(u16::from_f32(70000.0), u16::MAX);
        assert_eq!(u16::from_f32(65536.0), u16::MAX);
        assert_eq!(f32::from_f32(-0.25), -0.25);
        assert_eq!(f32::from_f32(7.5), 7.5);
    }

    #[test]
    fn test_sample_max_matches_depth() {
        assert_eq!(<u8 as Sample>::MAX_VALUE, 255.0);
        assert_eq!(<u16 as Sample>::MAX_VALUE, 65536.0);
        assert_eq!(<f32 as Sample>::MAX_VALUE, 1.0);
    }
}
