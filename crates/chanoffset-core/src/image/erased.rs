//! Type-erased views
//!
//! The host hands over buffers whose encoding is only known at run time.
//! These enums carry that choice until the render entry selects the typed
//! code path once per call.

use super::view::{ImageView, ImageViewMut};
use crate::depth::{BitDepth, Components};
use crate::rect::Rect;

/// Read-only view of any supported encoding
#[derive(Debug, Clone, Copy)]
pub enum DynImageView<'a> {
    U8(ImageView<'a, u8>),
    U16(ImageView<'a, u16>),
    F32(ImageView<'a, f32>),
}

impl DynImageView<'_> {
    pub fn depth(&self) -> BitDepth {
        match self {
            Self::U8(_) => BitDepth::UByte,
            Self::U16(_) => BitDepth::UShort,
            Self::F32(_) => BitDepth::Float,
        }
    }

    pub fn components(&self) -> Components {
        match self {
            Self::U8(v) => v.components(),
            Self::U16(v) => v.components(),
            Self::F32(v) => v.components(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Self::U8(v) => v.bounds(),
            Self::U16(v) => v.bounds(),
            Self::F32(v) => v.bounds(),
        }
    }
}

impl<'a> From<ImageView<'a, u8>> for DynImageView<'a> {
    fn from(v: ImageView<'a, u8>) -> Self {
        Self::U8(v)
    }
}

impl<'a> From<ImageView<'a, u16>> for DynImageView<'a> {
    fn from(v: ImageView<'a, u16>) -> Self {
        Self::U16(v)
    }
}

impl<'a> From<ImageView<'a, f32>> for DynImageView<'a> {
    fn from(v: ImageView<'a, f32>) -> Self {
        Self::F32(v)
    }
}

/// Writable view of any supported encoding
#[derive(Debug)]
pub enum DynImageViewMut<'a> {
    U8(ImageViewMut<'a, u8>),
    U16(ImageViewMut<'a, u16>),
    F32(ImageViewMut<'a, f32>),
}

impl DynImageViewMut<'_> {
    pub fn depth(&self) -> BitDepth {
        match self {
            Self::U8(_) => BitDepth::UByte,
            Self::U16(_) => BitDepth::UShort,
            Self::F32(_) => BitDepth::Float,
        }
    }

    pub fn components(&self) -> Components {
        match self {
            Self::U8(v) => v.components(),
            Self::U16(v) => v.components(),
            Self::F32(v) => v.components(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Self::U8(v) => v.bounds(),
            Self::U16(v) => v.bounds(),
            Self::F32(v) => v.bounds(),
        }
    }
}

impl<'a> From<ImageViewMut<'a, u8>> for DynImageViewMut<'a> {
    fn from(v: ImageViewMut<'a, u8>) -> Self {
        Self::U8(v)
    }
}

impl<'a> From<ImageViewMut<'a, u16>> for DynImageViewMut<'a> {
    fn from(v: ImageViewMut<'a, u16>) -> Self {
        Self::U16(v)
    }
}

impl<'a> From<ImageViewMut<'a, f32>> for DynImageViewMut<'a> {
    fn from(v: ImageViewMut<'a, f32>) -> Self {
        Self::F32(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depth::Sample;

    #[test]
    fn test_dyn_view_reports_descriptor() {
        let data = vec![0u16; 2 * 3 * 3];
        let bounds = Rect::new(1, 1, 3, 4).unwrap();
        let v: DynImageView = ImageView::new(&data, bounds, Components::Rgb).unwrap().into();
        assert_eq!(v.depth(), BitDepth::UShort);
        assert_eq!(v.components(), Components::Rgb);
        assert_eq!(v.bounds(), bounds);
    }

    #[test]
    fn test_downcast_matches_encoding() {
        let data = vec![0.5f32; 4];
        let v: DynImageView = ImageView::new(&data, Rect::from_size(1, 1), Components::Rgba)
            .unwrap()
            .into();
        assert!(f32::downcast_view(v).is_some());
        assert!(u8::downcast_view(v).is_none());
        assert!(u16::downcast_view(v).is_none());
    }

    #[test]
    fn test_downcast_mut_hands_back_on_mismatch() {
        let mut data = vec![0u8; 3];
        let v: DynImageViewMut = ImageViewMut::new(&mut data, Rect::from_size(1, 1), Components::Rgb)
            .unwrap()
            .into();
        let back = u16::downcast_view_mut(v).unwrap_err();
        assert_eq!(back.depth(), BitDepth::UByte);
        let mut typed = u8::downcast_view_mut(back).unwrap();
        typed.pixel_mut(0, 0).unwrap()[1] = 9;
        assert_eq!(data, vec![0, 9, 0]);
    }
}
