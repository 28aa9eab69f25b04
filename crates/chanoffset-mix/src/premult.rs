//! Premultiplication
//!
//! [`unpremult`] maps a native pixel to four normalized floats, dividing
//! the colour channels by the reference channel when the pixel is
//! premultiplied. [`premult`] is its inverse and produces native-scaled
//! floats, ready for [`crate::mask_mix_pix`].
//!
//! Only four-component pixels are ever (un)premultiplied. Single-channel
//! pixels map their sample to alpha; three-component pixels get an opaque
//! alpha of 1.

use chanoffset_core::{Components, Sample, channel};

/// Normalize a native pixel, reversing premultiplication if requested.
///
/// A missing pixel yields all zeros. `premult_channel` selects the channel
/// used as alpha and is clamped to `0..=3`.
#[inline]
pub fn unpremult<T: Sample>(
    src: Option<&[T]>,
    components: Components,
    premult: bool,
    premult_channel: usize,
) -> [f32; 4] {
    let Some(src) = src else {
        return [0.0; 4];
    };
    let max = T::MAX_VALUE;
    match components {
        Components::Alpha => [0.0, 0.0, 0.0, src[0].to_f32() / max],
        Components::Rgb => [
            src[0].to_f32() / max,
            src[1].to_f32() / max,
            src[2].to_f32() / max,
            1.0,
        ],
        Components::Rgba if !premult => [
            src[0].to_f32() / max,
            src[1].to_f32() / max,
            src[2].to_f32() / max,
            src[3].to_f32() / max,
        ],
        Components::Rgba => {
            let alpha = src[premult_channel.min(channel::ALPHA)].to_f32() / max;
            // Fully transparent pixels carry no recoverable colour
            let divisor = if alpha <= f32::EPSILON {
                max
            } else {
                alpha * max
            };
            [
                src[0].to_f32() / divisor,
                src[1].to_f32() / divisor,
                src[2].to_f32() / divisor,
                src[3].to_f32() / max,
            ]
        }
    }
}

/// Scale a normalized pixel back to native range, premultiplying if
/// requested.
///
/// Only the first `components.count()` entries of the result are
/// meaningful; single-channel pixels take their value from the alpha slot.
#[inline]
pub fn premult<T: Sample>(
    unp: &[f32; 4],
    components: Components,
    premult: bool,
    premult_channel: usize,
) -> [f32; 4] {
    let max = T::MAX_VALUE;
    match components {
        Components::Alpha => [unp[channel::ALPHA] * max, 0.0, 0.0, 0.0],
        Components::Rgb => [unp[0] * max, unp[1] * max, unp[2] * max, 0.0],
        Components::Rgba if !premult => [unp[0] * max, unp[1] * max, unp[2] * max, unp[3] * max],
        Components::Rgba => {
            let alpha = unp[premult_channel.min(channel::ALPHA)];
            [
                unp[0] * alpha * max,
                unp[1] * alpha * max,
                unp[2] * alpha * max,
                unp[3] * max,
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpremult_missing_source_is_zero() {
        assert_eq!(unpremult::<u8>(None, Components::Rgba, true, 3), [0.0; 4]);
        assert_eq!(unpremult::<f32>(None, Components::Alpha, false, 3), [0.0; 4]);
    }

    #[test]
    fn test_unpremult_alpha_only() {
        let v = unpremult(Some(&[51u8][..]), Components::Alpha, true, 3);
        assert_eq!(v, [0.0, 0.0, 0.0, 0.2]);
    }

    #[test]
    fn test_unpremult_rgb_is_opaque() {
        let v = unpremult(Some(&[0.5f32, 0.25, 2.0][..]), Components::Rgb, true, 3);
        assert_eq!(v, [0.5, 0.25, 2.0, 1.0]);
    }

    #[test]
    fn test_unpremult_divides_by_reference_channel() {
        let src = [0.25f32, 0.125, 0.5, 0.5];
        let v = unpremult(Some(&src[..]), Components::Rgba, true, 3);
        assert_eq!(v, [0.5, 0.25, 1.0, 0.5]);

        // Without premult the values are only normalized
        let v = unpremult(Some(&src[..]), Components::Rgba, false, 3);
        assert_eq!(v, src);
    }

    #[test]
    fn test_unpremult_transparent_keeps_colour() {
        let src = [0.25f32, 0.125, 0.5, 0.0];
        let v = unpremult(Some(&src[..]), Components::Rgba, true, 3);
        assert_eq!(v, src);
    }

    #[test]
    fn test_unpremult_uses_u16_divisor_65536() {
        let v = unpremult(Some(&[32768u16][..]), Components::Alpha, false, 3);
        assert_eq!(v[3], 0.5);
    }

    #[test]
    fn test_premult_inverts_unpremult_for_float() {
        let src = [0.2f32, 0.4, 0.1, 0.5];
        let unp = unpremult(Some(&src[..]), Components::Rgba, true, 3);
        let back = premult::<f32>(&unp, Components::Rgba, true, 3);
        for c in 0..4 {
            assert!((back[c] - src[c]).abs() < 1e-6, "channel {c}: {} vs {}", back[c], src[c]);
        }
    }

    #[test]
    fn test_premult_scales_to_native() {
        let p = premult::<u8>(&[0.0, 0.0, 0.0, 0.4], Components::Alpha, false, 3);
        assert!((p[0] - 102.0).abs() < 1e-4);

        let p = premult::<u16>(&[0.5, 0.25, 1.0, 0.0], Components::Rgb, true, 3);
        assert_eq!(&p[..3], &[32768.0, 16384.0, 65536.0]);
    }
}
