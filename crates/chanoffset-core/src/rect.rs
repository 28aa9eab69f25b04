//! Rect, RectD, RenderScale - Processing regions
//!
//! Pixel regions use inclusive-exclusive bounds: a `Rect` covers
//! `x1 <= x < x2` and `y1 <= y < y2`. Canonical (resolution independent)
//! regions are `RectD` and are converted to pixels with
//! [`RectD::to_pixel_enclosing`].

use crate::error::{Error, Result};

/// An integer pixel rectangle
///
/// Small and frequently copied, so it is a plain `Copy` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate (inclusive)
    pub x1: i32,
    /// Lower y coordinate (inclusive)
    pub y1: i32,
    /// Right x coordinate (exclusive)
    pub x2: i32,
    /// Upper y coordinate (exclusive)
    pub y2: i32,
}

impl Rect {
    /// Create a new rectangle
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRect`] if `x2 < x1` or `y2 < y1`.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Self> {
        if x2 < x1 || y2 < y1 {
            return Err(Error::InvalidRect { x1, y1, x2, y2 });
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// Create a rectangle without validation
    pub const fn new_unchecked(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a rectangle anchored at the origin
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self {
            x1: 0,
            y1: 0,
            x2: width as i32,
            y2: height as i32,
        }
    }

    /// Width in pixels (0 for inverted rectangles)
    #[inline]
    pub fn width(&self) -> u32 {
        (self.x2 - self.x1).max(0) as u32
    }

    /// Height in pixels (0 for inverted rectangles)
    #[inline]
    pub fn height(&self) -> u32 {
        (self.y2 - self.y1).max(0) as u32
    }

    /// Number of pixels covered
    #[inline]
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Check if the rectangle covers no pixel
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x2 <= self.x1 || self.y2 <= self.y1
    }

    /// Check if a pixel is inside the rectangle
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x1 && x < self.x2 && y >= self.y1 && y < self.y2
    }

    /// Check if this rectangle fully contains another
    ///
    /// An empty rectangle is contained anywhere.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.is_empty()
            || (other.x1 >= self.x1
                && other.y1 >= self.y1
                && other.x2 <= self.x2
                && other.y2 <= self.y2)
    }

    /// Intersection of two rectangles
    ///
    /// Returns `None` if either rectangle is empty or they do not overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if self.is_empty() || other.is_empty() {
            return None;
        }
        let r = Rect {
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
            x2: self.x2.min(other.x2),
            y2: self.y2.min(other.y2),
        };
        if r.is_empty() { None } else { Some(r) }
    }

    /// Check if this rectangle shares at least one pixel with another
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.intersection(other).is_some()
    }
}

/// Render scale applied by the host (1.0 = full resolution)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderScale {
    pub x: f64,
    pub y: f64,
}

impl RenderScale {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for RenderScale {
    fn default() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}

/// A rectangle in canonical coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectD {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl RectD {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Smallest pixel rectangle enclosing this canonical rectangle.
    ///
    /// Horizontal coordinates are divided by the pixel aspect ratio.
    pub fn to_pixel_enclosing(&self, scale: RenderScale, pixel_aspect_ratio: f64) -> Rect {
        Rect {
            x1: (self.x1 * scale.x / pixel_aspect_ratio).floor() as i32,
            y1: (self.y1 * scale.y).floor() as i32,
            x2: (self.x2 * scale.x / pixel_aspect_ratio).ceil() as i32,
            y2: (self.y2 * scale.y).ceil() as i32,
        }
    }
}
