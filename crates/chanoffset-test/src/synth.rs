//! Synthetic test images
//!
//! Regression tests build their inputs here instead of shipping image
//! files, so every run starts from the same pixels.

use crate::TestResult;
use chanoffset_core::{Components, Image, Rect, Sample};

/// Deterministic gradient covering the full sample range.
///
/// Channel `c` of pixel `(x, y)` holds `((x + 2y + 3c) mod 17) / 16` of
/// the encoding maximum.
pub fn gradient<T: Sample>(bounds: Rect, components: Components) -> TestResult<Image<T>> {
    let mut img = Image::new(bounds, components)?;
    let n = components.count();
    for y in bounds.y1..bounds.y2 {
        for x in bounds.x1..bounds.x2 {
            let pixel: Vec<T> = (0..n)
                .map(|c| {
                    let step = (x - bounds.x1 + 2 * (y - bounds.y1) + 3 * c as i32) % 17;
                    T::from_f32(step as f32 / 16.0 * T::MAX_VALUE)
                })
                .collect();
            img.set_pixel(x, y, &pixel)?;
        }
    }
    Ok(img)
}

/// Image of the given size with every pixel set to `pixel`.
///
/// The component layout follows the length of `pixel`.
pub fn solid<T: Sample>(width: u32, height: u32, pixel: &[T]) -> TestResult<Image<T>> {
    let components = Components::from_count(pixel.len() as u32)?;
    let mut img = Image::from_size(width, height, components)?;
    img.fill(pixel)?;
    Ok(img)
}

/// Single-channel image whose left half is `left` and right half `right`.
pub fn split_mask<T: Sample>(bounds: Rect, left: T, right: T) -> TestResult<Image<T>> {
    let mut img = Image::new(bounds, Components::Alpha)?;
    let mid = bounds.x1 + bounds.width() as i32 / 2;
    for y in bounds.y1..bounds.y2 {
        for x in bounds.x1..bounds.x2 {
            img.set_pixel(x, y, &[if x < mid { left } else { right }])?;
        }
    }
    Ok(img)
}
