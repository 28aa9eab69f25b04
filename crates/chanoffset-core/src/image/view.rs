//! Borrowed image views
//!
//! A view describes a rectangle of pixels inside a host-owned buffer.
//! Rows are `row_stride` samples apart; a pixel is `components` adjacent
//! samples. Pixel coordinates are absolute: the first sample of the buffer
//! is pixel `(bounds.x1, bounds.y1)`.

use crate::depth::{Components, Sample};
use crate::error::{Error, Result};
use crate::rect::Rect;

/// Check that `len` samples can hold `bounds` with the given stride.
fn validate_layout(
    len: usize,
    bounds: Rect,
    components: Components,
    row_stride: usize,
) -> Result<()> {
    if bounds.x2 < bounds.x1 || bounds.y2 < bounds.y1 {
        return Err(Error::InvalidRect {
            x1: bounds.x1,
            y1: bounds.y1,
            x2: bounds.x2,
            y2: bounds.y2,
        });
    }
    let row_len = bounds.width() as usize * components.count();
    if row_stride < row_len {
        return Err(Error::InvalidStride {
            stride: row_stride,
            min: row_len,
        });
    }
    let height = bounds.height() as usize;
    let required = if height == 0 {
        0
    } else {
        (height - 1) * row_stride + row_len
    };
    if len < required {
        return Err(Error::BufferTooSmall {
            required,
            actual: len,
        });
    }
    Ok(())
}

/// Read-only view of a pixel buffer
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a, T: Sample> {
    data: &'a [T],
    bounds: Rect,
    components: Components,
    row_stride: usize,
}

impl<'a, T: Sample> ImageView<'a, T> {
    /// Create a view over tightly packed rows.
    ///
    /// # Errors
    ///
    /// Returns an error if `bounds` is inverted or `data` is too short.
    pub fn new(data: &'a [T], bounds: Rect, components: Components) -> Result<Self> {
        let row_stride = bounds.width() as usize * components.count();
        Self::with_stride(data, bounds, components, row_stride)
    }

    /// Create a view whose rows are `row_stride` samples apart.
    ///
    /// # Errors
    ///
    /// Returns an error if the stride is shorter than a row or `data` is
    /// too short for the bounds.
    pub fn with_stride(
        data: &'a [T],
        bounds: Rect,
        components: Components,
        row_stride: usize,
    ) -> Result<Self> {
        validate_layout(data.len(), bounds, components, row_stride)?;
        Ok(Self::from_parts(data, bounds, components, row_stride))
    }

    /// Build a view from a layout the caller has already validated.
    pub(crate) fn from_parts(
        data: &'a [T],
        bounds: Rect,
        components: Components,
        row_stride: usize,
    ) -> Self {
        Self {
            data,
            bounds,
            components,
            row_stride,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn components(&self) -> Components {
        self.components
    }

    #[inline]
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    /// Samples of the pixel at `(x, y)`, or `None` outside the bounds.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<&'a [T]> {
        if !self.bounds.contains_point(x, y) {
            return None;
        }
        let n = self.components.count();
        let idx =
            (y - self.bounds.y1) as usize * self.row_stride + (x - self.bounds.x1) as usize * n;
        self.data.get(idx..idx + n)
    }

    /// All samples of row `y`, or `None` outside the bounds.
    pub fn row(&self, y: i32) -> Option<&'a [T]> {
        if y < self.bounds.y1 || y >= self.bounds.y2 {
            return None;
        }
        let start = (y - self.bounds.y1) as usize * self.row_stride;
        let len = self.bounds.width() as usize * self.components.count();
        self.data.get(start..start + len)
    }
}

/// Writable view of a pixel buffer
#[derive(Debug)]
pub struct ImageViewMut<'a, T: Sample> {
    data: &'a mut [T],
    bounds: Rect,
    components: Components,
    row_stride: usize,
}

impl<'a, T: Sample> ImageViewMut<'a, T> {
    /// Create a writable view over tightly packed rows.
    ///
    /// # Errors
    ///
    /// Returns an error if `bounds` is inverted or `data` is too short.
    pub fn new(data: &'a mut [T], bounds: Rect, components: Components) -> Result<Self> {
        let row_stride = bounds.width() as usize * components.count();
        Self::with_stride(data, bounds, components, row_stride)
    }

    /// Create a writable view whose rows are `row_stride` samples apart.
    ///
    /// # Errors
    ///
    /// Returns an error if the stride is shorter than a row or `data` is
    /// too short for the bounds.
    pub fn with_stride(
        data: &'a mut [T],
        bounds: Rect,
        components: Components,
        row_stride: usize,
    ) -> Result<Self> {
        validate_layout(data.len(), bounds, components, row_stride)?;
        Ok(Self::from_parts(data, bounds, components, row_stride))
    }

    /// Build a writable view from a layout the caller has already validated.
    pub(crate) fn from_parts(
        data: &'a mut [T],
        bounds: Rect,
        components: Components,
        row_stride: usize,
    ) -> Self {
        Self {
            data,
            bounds,
            components,
            row_stride,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn components(&self) -> Components {
        self.components
    }

    #[inline]
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> usize {
        (y - self.bounds.y1) as usize * self.row_stride
            + (x - self.bounds.x1) as usize * self.components.count()
    }

    /// Samples of the pixel at `(x, y)`, or `None` outside the bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<&[T]> {
        if !self.bounds.contains_point(x, y) {
            return None;
        }
        let idx = self.offset(x, y);
        self.data.get(idx..idx + self.components.count())
    }

    /// Mutable samples of the pixel at `(x, y)`, or `None` outside the bounds.
    pub fn pixel_mut(&mut self, x: i32, y: i32) -> Option<&mut [T]> {
        if !self.bounds.contains_point(x, y) {
            return None;
        }
        let idx = self.offset(x, y);
        let n = self.components.count();
        self.data.get_mut(idx..idx + n)
    }

    /// Contiguous samples of pixels `x1..x2` on row `y`.
    ///
    /// Returns `None` unless the whole span lies inside the bounds.
    pub fn row_span_mut(&mut self, y: i32, x1: i32, x2: i32) -> Option<&mut [T]> {
        if y < self.bounds.y1
            || y >= self.bounds.y2
            || x1 < self.bounds.x1
            || x2 > self.bounds.x2
            || x2 < x1
        {
            return None;
        }
        let start = self.offset(x1, y);
        let len = (x2 - x1) as usize * self.components.count();
        self.data.get_mut(start..start + len)
    }

    /// Set every pixel to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `value` does not hold exactly
    /// one pixel.
    pub fn fill(&mut self, value: &[T]) -> Result<()> {
        let n = self.components.count();
        if value.len() != n {
            return Err(Error::InvalidParameter(format!(
                "fill value has {} samples, expected {}",
                value.len(),
                n
            )));
        }
        let row_len = self.bounds.width() as usize * n;
        for y in 0..self.bounds.height() as usize {
            let start = y * self.row_stride;
            for pix in self.data[start..start + row_len].chunks_exact_mut(n) {
                pix.copy_from_slice(value);
            }
        }
        Ok(())
    }

    /// Split into the rows above `y` and the rows from `y` on.
    ///
    /// `y` is clamped into the bounds, so either half may be empty.
    pub fn split_at_row(self, y: i32) -> (ImageViewMut<'a, T>, ImageViewMut<'a, T>) {
        let y = y.clamp(self.bounds.y1, self.bounds.y2);
        let mid = ((y - self.bounds.y1) as usize * self.row_stride).min(self.data.len());
        let (top, bottom) = self.data.split_at_mut(mid);
        let Rect { x1, y1, x2, y2 } = self.bounds;
        (
            ImageViewMut {
                data: top,
                bounds: Rect::new_unchecked(x1, y1, x2, y),
                components: self.components,
                row_stride: self.row_stride,
            },
            ImageViewMut {
                data: bottom,
                bounds: Rect::new_unchecked(x1, y, x2, y2),
                components: self.components,
                row_stride: self.row_stride,
            },
        )
    }

    /// Cut into horizontal bands of at most `rows` rows each.
    ///
    /// Bands own disjoint slices of the buffer and can be written from
    /// different threads. `rows == 0` is treated as 1; band heights beyond
    /// `i32::MAX` yield a single band.
    pub fn into_row_bands(self, rows: usize) -> Vec<ImageViewMut<'a, T>> {
        let rows = i32::try_from(rows).unwrap_or(i32::MAX).max(1);
        let mut bands = Vec::new();
        let mut rest = self;
        while rest.bounds.y2 - rest.bounds.y1 > rows {
            let at = rest.bounds.y1 + rows;
            let (band, tail) = rest.split_at_row(at);
            bands.push(band);
            rest = tail;
        }
        if !rest.bounds.is_empty() {
            bands.push(rest);
        }
        bands
    }
}
