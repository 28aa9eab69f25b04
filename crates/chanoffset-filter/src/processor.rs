//! Pixel transform engine
//!
//! # Algorithm
//!
//! For every pixel of the window:
//!
//! 1. Unpremultiply the source pixel into four normalized floats (zeros if
//!    there is no source pixel).
//! 2. Add the offset to each enabled channel.
//! 3. Premultiply, blend against the source with the mask/mix weight and
//!    pack into the destination encoding.
//! 4. Copy disabled channels verbatim from the source (or zero).
//!
//! The abort signal is polled before each row.

use crate::abort::AbortSignal;
use crate::channels::{ChannelKernel, ChannelSelection, dispatch};
use crate::config::ProcessConfig;
use chanoffset_core::{Components, ImageView, ImageViewMut, Rect, Sample, channel};
use chanoffset_mix::{Mask, PremultMaskMix};
use log::trace;

/// How a render call ended
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Every row of the window was written
    Completed,
    /// The abort signal fired; rows before it are written, the rest untouched
    Aborted,
}

impl RenderOutcome {
    /// Combine outcomes of disjoint parts of one window
    pub fn merge(self, other: Self) -> Self {
        if self == Self::Aborted || other == Self::Aborted {
            Self::Aborted
        } else {
            Self::Completed
        }
    }
}

/// Offset engine bound to one source, mask and configuration
///
/// Shared read-only between workers; each worker passes its own
/// destination band to [`OffsetProcessor::process`].
#[derive(Debug, Clone, Copy)]
pub struct OffsetProcessor<'a, T: Sample> {
    src: Option<ImageView<'a, T>>,
    recompose: PremultMaskMix<'a, T>,
    value: [f32; 4],
    channels: ChannelSelection,
}

impl<'a, T: Sample> OffsetProcessor<'a, T> {
    /// Create a processor for images laid out as `components`.
    ///
    /// `mask` is only consulted when `config.do_masking` is set; masking
    /// without a mask image treats every pixel as outside the mask.
    pub fn new(
        src: Option<ImageView<'a, T>>,
        mask: Option<ImageView<'a, T>>,
        config: &ProcessConfig,
        components: Components,
    ) -> Self {
        let mask = config
            .do_masking
            .then(|| Mask::new(mask, config.mask_invert));
        Self {
            src,
            recompose: PremultMaskMix::new(
                components,
                config.premult,
                config.premult_channel.min(channel::ALPHA),
                mask,
                config.mix,
            ),
            value: config.value.to_f32_array(),
            channels: config.channels.effective(components),
        }
    }

    /// Channels that actually receive the offset
    pub fn channels(&self) -> ChannelSelection {
        self.channels
    }

    /// Process `window` into `dst`.
    ///
    /// `window` must lie inside `dst`'s bounds; rows outside are skipped.
    pub fn process<S: AbortSignal + ?Sized>(
        &self,
        dst: &mut ImageViewMut<'_, T>,
        window: Rect,
        abort: &S,
    ) -> RenderOutcome {
        dispatch(
            self.channels,
            Rows {
                processor: self,
                dst,
                window,
                abort,
            },
        )
    }

    fn process_rows<const R: bool, const G: bool, const B: bool, const A: bool, S>(
        &self,
        dst: &mut ImageViewMut<'_, T>,
        window: Rect,
        abort: &S,
    ) -> RenderOutcome
    where
        S: AbortSignal + ?Sized,
    {
        let n = self.recompose.components().count();
        let [vr, vg, vb, va] = self.value;

        for y in window.y1..window.y2 {
            if abort.aborted() {
                trace!("render aborted at row {} of {:?}", y, window);
                return RenderOutcome::Aborted;
            }
            let Some(row) = dst.row_span_mut(y, window.x1, window.x2) else {
                continue;
            };

            for (x, dst_pix) in (window.x1..window.x2).zip(row.chunks_exact_mut(n)) {
                let src_pix = self.src.and_then(|s| s.pixel(x, y));
                let mut working = self.recompose.unpremult(src_pix);
                if R {
                    working[channel::RED] += vr;
                }
                if G {
                    working[channel::GREEN] += vg;
                }
                if B {
                    working[channel::BLUE] += vb;
                }
                if A {
                    working[channel::ALPHA] += va;
                }
                self.recompose.apply(&working, x, y, src_pix, dst_pix);
                restore::<T, R, G, B, A>(src_pix, dst_pix);
            }
        }
        RenderOutcome::Completed
    }
}

/// Copy channels that did not receive the offset back from the source.
#[inline]
fn restore<T: Sample, const R: bool, const G: bool, const B: bool, const A: bool>(
    src: Option<&[T]>,
    dst: &mut [T],
) {
    let original = |c: usize| src.map_or(T::default(), |s| s[c]);
    if dst.len() == 1 {
        if !A {
            dst[0] = original(0);
        }
        return;
    }
    if !R {
        dst[channel::RED] = original(channel::RED);
    }
    if !G {
        dst[channel::GREEN] = original(channel::GREEN);
    }
    if !B {
        dst[channel::BLUE] = original(channel::BLUE);
    }
    if !A && dst.len() == 4 {
        dst[channel::ALPHA] = original(channel::ALPHA);
    }
}

/// One region's row loop, waiting for its channel specialization
struct Rows<'p, 'a, 'd, 'v, T: Sample, S: ?Sized> {
    processor: &'p OffsetProcessor<'a, T>,
    dst: &'d mut ImageViewMut<'v, T>,
    window: Rect,
    abort: &'p S,
}

impl<T: Sample, S: AbortSignal + ?Sized> ChannelKernel for Rows<'_, '_, '_, '_, T, S> {
    type Output = RenderOutcome;

    fn run<const R: bool, const G: bool, const B: bool, const A: bool>(self) -> RenderOutcome {
        self.processor
            .process_rows::<R, G, B, A, S>(self.dst, self.window, self.abort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abort::NeverAbort;
    use crate::values::RgbaValues;
    use chanoffset_core::Image;

    fn config(value: RgbaValues) -> ProcessConfig {
        ProcessConfig {
            value,
            ..ProcessConfig::default()
        }
    }

    #[test]
    fn test_offset_applied_to_selected_channels() {
        let src = Image::from_data(Rect::from_size(1, 1), Components::Rgba, vec![100u8, 50, 25, 255]).unwrap();
        let mut dst = Image::<u8>::from_size(1, 1, Components::Rgba).unwrap();
        let cfg = config(RgbaValues::new(0.2, 0.0, 0.0, 0.0));
        let p = OffsetProcessor::new(Some(src.view()), None, &cfg, Components::Rgba);

        let outcome = p.process(&mut dst.view_mut(), Rect::from_size(1, 1), &NeverAbort);
        assert_eq!(outcome, RenderOutcome::Completed);
        assert_eq!(dst.data(), &[151, 50, 25, 255]);
    }

    #[test]
    fn test_restore_without_source_writes_zero() {
        let mut dst = Image::<f32>::from_size(2, 1, Components::Rgba).unwrap();
        dst.fill(&[9.0, 9.0, 9.0, 9.0]).unwrap();
        let mut cfg = config(RgbaValues::new(0.5, 0.0, 0.0, 0.25));
        cfg.channels = ChannelSelection::new(true, false, false, false);
        let p = OffsetProcessor::<f32>::new(None, None, &cfg, Components::Rgba);

        let _ = p.process(&mut dst.view_mut(), Rect::from_size(2, 1), &NeverAbort);
        assert_eq!(dst.data(), &[0.5, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_alpha_only_image() {
        let src = Image::from_data(Rect::from_size(2, 1), Components::Alpha, vec![0.5f32, 0.9]).unwrap();
        let mut dst = Image::<f32>::from_size(2, 1, Components::Alpha).unwrap();
        let mut cfg = config(RgbaValues::splat(0.25));
        cfg.channels = ChannelSelection::new(true, true, true, true);
        let p = OffsetProcessor::new(Some(src.view()), None, &cfg, Components::Alpha);
        assert_eq!(p.channels(), ChannelSelection::new(false, false, false, true));

        let _ = p.process(&mut dst.view_mut(), Rect::from_size(2, 1), &NeverAbort);
        assert_eq!(dst.data(), &[0.75, 1.15]);
    }

    #[test]
    fn test_window_limits_writes() {
        let src = Image::from_data(Rect::from_size(3, 1), Components::Alpha, vec![10u8, 10, 10]).unwrap();
        let mut dst = Image::<u8>::from_size(3, 1, Components::Alpha).unwrap();
        let mut cfg = config(RgbaValues::splat(1.0));
        cfg.channels = ChannelSelection::new(false, false, false, true);
        let p = OffsetProcessor::new(Some(src.view()), None, &cfg, Components::Alpha);

        let _ = p.process(&mut dst.view_mut(), Rect::new(1, 0, 2, 1).unwrap(), &NeverAbort);
        assert_eq!(dst.data(), &[0, 255, 0]);
    }

    #[test]
    fn test_merge_outcomes() {
        use RenderOutcome::*;
        assert_eq!(Completed.merge(Completed), Completed);
        assert_eq!(Completed.merge(Aborted), Aborted);
        assert_eq!(Aborted.merge(Completed), Aborted);
    }
}
