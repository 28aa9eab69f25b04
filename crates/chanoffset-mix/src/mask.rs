//! Mask sampling

use chanoffset_core::{ImageView, Sample};

/// Per-pixel blend weight source
///
/// The mask image is single-channel. Pixels outside its bounds, and every
/// pixel when no image is attached, count as 0 before inversion.
#[derive(Debug, Clone, Copy)]
pub struct Mask<'a, T: Sample> {
    image: Option<ImageView<'a, T>>,
    invert: bool,
}

impl<'a, T: Sample> Mask<'a, T> {
    pub fn new(image: Option<ImageView<'a, T>>, invert: bool) -> Self {
        Self { image, invert }
    }

    /// Normalized mask weight at `(x, y)`, with inversion applied.
    #[inline]
    pub fn scale_at(&self, x: i32, y: i32) -> f32 {
        let raw = self
            .image
            .and_then(|m| m.pixel(x, y))
            .map_or(0.0, |p| p[0].to_f32() / T::MAX_VALUE);
        if self.invert { 1.0 - raw } else { raw }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chanoffset_core::{Components, Rect};

    #[test]
    fn test_scale_inside_mask() {
        let data = [0u8, 51, 255, 102];
        let view = ImageView::new(&data, Rect::new(10, 10, 12, 12).unwrap(), Components::Alpha).unwrap();
        let mask = Mask::new(Some(view), false);
        assert_eq!(mask.scale_at(10, 10), 0.0);
        assert_eq!(mask.scale_at(11, 10), 0.2);
        assert_eq!(mask.scale_at(10, 11), 1.0);

        let inverted = Mask::new(Some(view), true);
        assert_eq!(inverted.scale_at(10, 11), 0.0);
        assert!((inverted.scale_at(11, 11) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_scale_outside_mask() {
        let data = [255u16];
        let view = ImageView::new(&data, Rect::from_size(1, 1), Components::Alpha).unwrap();
        assert_eq!(Mask::new(Some(view), false).scale_at(5, 0), 0.0);
        assert_eq!(Mask::new(Some(view), true).scale_at(5, 0), 1.0);
    }

    #[test]
    fn test_scale_without_image() {
        assert_eq!(Mask::<f32>::new(None, false).scale_at(0, 0), 0.0);
        assert_eq!(Mask::<f32>::new(None, true).scale_at(0, 0), 1.0);
    }
}
