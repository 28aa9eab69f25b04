//! Mask/mix blending and repacking

use crate::mask::Mask;
use crate::premult::{premult as premultiply, unpremult};
use chanoffset_core::{Components, Sample};

/// Blend a native-scaled result with the source pixel and pack it.
///
/// The blend weight is `mix` times the mask weight at `(x, y)`; without a
/// mask the weight is `mix` alone. With a source pixel the result is
/// `tmp * w + (1 - w) * src`, without one it is `tmp * w`. Only the first
/// `dst.len()` entries of `tmp` are used.
#[inline]
pub fn mask_mix_pix<T: Sample>(
    tmp: &[f32; 4],
    x: i32,
    y: i32,
    src: Option<&[T]>,
    mask: Option<&Mask<'_, T>>,
    mix: f32,
    dst: &mut [T],
) {
    let weight = mask.map_or(1.0, |m| m.scale_at(x, y)) * mix;
    match src {
        Some(src) => {
            for ((d, &t), &s) in dst.iter_mut().zip(tmp).zip(src) {
                *d = T::from_f32(t * weight + (1.0 - weight) * s.to_f32());
            }
        }
        None => {
            for (d, &t) in dst.iter_mut().zip(tmp) {
                *d = T::from_f32(t * weight);
            }
        }
    }
}

/// Per-render recomposition settings
///
/// Bundles everything needed to turn a normalized working pixel back into
/// a destination pixel, so the inner loop only passes coordinates and
/// buffers.
#[derive(Debug, Clone, Copy)]
pub struct PremultMaskMix<'a, T: Sample> {
    components: Components,
    premult: bool,
    premult_channel: usize,
    mask: Option<Mask<'a, T>>,
    mix: f32,
}

impl<'a, T: Sample> PremultMaskMix<'a, T> {
    pub fn new(
        components: Components,
        premult: bool,
        premult_channel: usize,
        mask: Option<Mask<'a, T>>,
        mix: f32,
    ) -> Self {
        Self {
            components,
            premult,
            premult_channel,
            mask,
            mix,
        }
    }

    #[inline]
    pub fn components(&self) -> Components {
        self.components
    }

    /// Normalize a source pixel with these settings.
    #[inline]
    pub fn unpremult(&self, src: Option<&[T]>) -> [f32; 4] {
        unpremult(src, self.components, self.premult, self.premult_channel)
    }

    /// Premultiply `working`, blend it against `src` and write `dst`.
    #[inline]
    pub fn apply(&self, working: &[f32; 4], x: i32, y: i32, src: Option<&[T]>, dst: &mut [T]) {
        let tmp = premultiply::<T>(working, self.components, self.premult, self.premult_channel);
        mask_mix_pix(&tmp, x, y, src, self.mask.as_ref(), self.mix, dst);
    }
}

/// Premultiply, mask/mix and pack one pixel.
///
/// Convenience wrapper over [`PremultMaskMix::apply`] for callers that do
/// not process whole rows.
#[inline]
#[allow(clippy::too_many_arguments)]
pub fn premult_mask_mix<T: Sample>(
    working: &[f32; 4],
    components: Components,
    premult: bool,
    premult_channel: usize,
    x: i32,
    y: i32,
    src: Option<&[T]>,
    mask: Option<&Mask<'_, T>>,
    mix: f32,
    dst: &mut [T],
) {
    let tmp = premultiply::<T>(working, components, premult, premult_channel);
    mask_mix_pix(&tmp, x, y, src, mask, mix, dst);
}
