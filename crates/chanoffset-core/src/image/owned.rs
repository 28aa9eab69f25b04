//! Owned image buffers
//!
//! The filter itself never allocates pixel memory; these containers back
//! file I/O and tests, where nobody else owns the pixels.

use super::erased::{DynImageView, DynImageViewMut};
use super::view::{ImageView, ImageViewMut};
use crate::depth::{BitDepth, Components, Sample};
use crate::error::{Error, Result};
use crate::rect::Rect;

/// Tightly packed image owning its samples
///
/// # Memory Layout
///
/// Row-major, no padding. The pixel at `(x, y)` starts at sample
/// `((y - y1) * width + (x - x1)) * components`.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T: Sample> {
    bounds: Rect,
    components: Components,
    data: Vec<T>,
}

impl<T: Sample> Image<T> {
    /// Create an image covering `bounds` with every sample at zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRect`] if `bounds` is inverted.
    pub fn new(bounds: Rect, components: Components) -> Result<Self> {
        let bounds = Rect::new(bounds.x1, bounds.y1, bounds.x2, bounds.y2)?;
        let len = bounds.area() as usize * components.count();
        Ok(Self {
            bounds,
            components,
            data: vec![T::default(); len],
        })
    }

    /// Create a zeroed image anchored at the origin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is 0.
    pub fn from_size(width: u32, height: u32, components: Components) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Self::new(Rect::from_size(width, height), components)
    }

    /// Create an image from existing samples.
    ///
    /// # Errors
    ///
    /// Returns an error if `bounds` is inverted or `data` does not hold
    /// exactly `area * components` samples.
    pub fn from_data(bounds: Rect, components: Components, data: Vec<T>) -> Result<Self> {
        let bounds = Rect::new(bounds.x1, bounds.y1, bounds.x2, bounds.y2)?;
        let required = bounds.area() as usize * components.count();
        if data.len() != required {
            return Err(Error::BufferTooSmall {
                required,
                actual: data.len(),
            });
        }
        Ok(Self {
            bounds,
            components,
            data,
        })
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.bounds.height()
    }

    #[inline]
    pub fn components(&self) -> Components {
        self.components
    }

    #[inline]
    pub fn depth(&self) -> BitDepth {
        T::DEPTH
    }

    /// Raw samples
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable raw samples
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    // The layout is validated at construction.
    pub fn view(&self) -> ImageView<'_, T> {
        let stride = self.bounds.width() as usize * self.components.count();
        ImageView::from_parts(&self.data, self.bounds, self.components, stride)
    }

    pub fn view_mut(&mut self) -> ImageViewMut<'_, T> {
        let stride = self.bounds.width() as usize * self.components.count();
        ImageViewMut::from_parts(&mut self.data, self.bounds, self.components, stride)
    }

    /// Samples of the pixel at `(x, y)`, or `None` outside the bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<&[T]> {
        if !self.bounds.contains_point(x, y) {
            return None;
        }
        let idx = self.index(x, y);
        Some(&self.data[idx..idx + self.components.count()])
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] outside the bounds and
    /// [`Error::InvalidParameter`] if `value` is not one pixel long.
    pub fn set_pixel(&mut self, x: i32, y: i32, value: &[T]) -> Result<()> {
        if !self.bounds.contains_point(x, y) {
            return Err(Error::OutOfBounds { x, y });
        }
        let n = self.components.count();
        if value.len() != n {
            return Err(Error::InvalidParameter(format!(
                "pixel value has {} samples, expected {}",
                value.len(),
                n
            )));
        }
        let idx = self.index(x, y);
        self.data[idx..idx + n].copy_from_slice(value);
        Ok(())
    }

    /// Set every pixel to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `value` is not one pixel long.
    pub fn fill(&mut self, value: &[T]) -> Result<()> {
        self.view_mut().fill(value)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        ((y - self.bounds.y1) as usize * self.bounds.width() as usize
            + (x - self.bounds.x1) as usize)
            * self.components.count()
    }
}

/// Owned image of any supported encoding
#[derive(Debug, Clone, PartialEq)]
pub enum DynImage {
    U8(Image<u8>),
    U16(Image<u16>),
    F32(Image<f32>),
}

impl DynImage {
    pub fn depth(&self) -> BitDepth {
        match self {
            Self::U8(_) => BitDepth::UByte,
            Self::U16(_) => BitDepth::UShort,
            Self::F32(_) => BitDepth::Float,
        }
    }

    pub fn components(&self) -> Components {
        match self {
            Self::U8(i) => i.components(),
            Self::U16(i) => i.components(),
            Self::F32(i) => i.components(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Self::U8(i) => i.bounds(),
            Self::U16(i) => i.bounds(),
            Self::F32(i) => i.bounds(),
        }
    }

    pub fn view(&self) -> DynImageView<'_> {
        match self {
            Self::U8(i) => DynImageView::U8(i.view()),
            Self::U16(i) => DynImageView::U16(i.view()),
            Self::F32(i) => DynImageView::F32(i.view()),
        }
    }

    pub fn view_mut(&mut self) -> DynImageViewMut<'_> {
        match self {
            Self::U8(i) => DynImageViewMut::U8(i.view_mut()),
            Self::U16(i) => DynImageViewMut::U16(i.view_mut()),
            Self::F32(i) => DynImageViewMut::F32(i.view_mut()),
        }
    }
}

impl From<Image<u8>> for DynImage {
    fn from(i: Image<u8>) -> Self {
        Self::U8(i)
    }
}

impl From<Image<u16>> for DynImage {
    fn from(i: Image<u16>) -> Self {
        Self::U16(i)
    }
}

impl From<Image<f32>> for DynImage {
    fn from(i: Image<f32>) -> Self {
        Self::F32(i)
    }
}
