//! Render entry
//!
//! Validates what the host hands over, snapshots the parameters and picks
//! the typed code path once per call.

use crate::abort::AbortSignal;
use crate::error::{FilterError, FilterResult};
use crate::params::Params;
use crate::processor::{OffsetProcessor, RenderOutcome};
use chanoffset_core::{
    Components, DynImageView, DynImageViewMut, ImageView, ImageViewMut, Rect, RenderScale, Sample,
};
use log::warn;

/// Everything the host provides for one render call
#[derive(Debug)]
pub struct RenderArguments<'a> {
    /// Region to write, in destination pixel coordinates
    pub render_window: Rect,
    pub render_scale: RenderScale,
    /// Input image; may be absent when the source is not connected
    pub source: Option<DynImageView<'a>>,
    /// Output image
    pub destination: Option<DynImageViewMut<'a>>,
    /// Single-channel mask image, if the host fetched one
    pub mask: Option<DynImageView<'a>>,
    /// Whether the mask input is connected
    pub mask_connected: bool,
}

impl<'a> RenderArguments<'a> {
    /// Arguments rendering `render_window` from `source` into `destination`
    /// at full scale without a mask.
    pub fn new(
        render_window: Rect,
        source: Option<DynImageView<'a>>,
        destination: DynImageViewMut<'a>,
    ) -> Self {
        Self {
            render_window,
            render_scale: RenderScale::default(),
            source,
            destination: Some(destination),
            mask: None,
            mask_connected: false,
        }
    }

    /// Attach a mask image and mark the mask input connected.
    pub fn with_mask(mut self, mask: DynImageView<'a>) -> Self {
        self.mask = Some(mask);
        self.mask_connected = true;
        self
    }
}

/// The per-channel offset filter of one instance
#[derive(Debug, Clone, Default)]
pub struct OffsetFilter {
    params: Params,
}

/// Typed destination and processor, ready to run
pub(crate) enum Prepared<'a> {
    U8(ImageViewMut<'a, u8>, OffsetProcessor<'a, u8>),
    U16(ImageViewMut<'a, u16>, OffsetProcessor<'a, u16>),
    F32(ImageViewMut<'a, f32>, OffsetProcessor<'a, f32>),
}

impl OffsetFilter {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    /// Render one window.
    ///
    /// # Errors
    ///
    /// Fails before touching any pixel if the destination is missing, an
    /// input's encoding or layout differs from the destination, the mask is
    /// not single-channel, the render scale is not positive, or the window
    /// is not inside the destination. Cancellation is reported as
    /// [`RenderOutcome::Aborted`], not as an error.
    pub fn render<S: AbortSignal + ?Sized>(
        &self,
        args: RenderArguments<'_>,
        abort: &S,
    ) -> FilterResult<RenderOutcome> {
        let window = args.render_window;
        let outcome = match self.prepare(args)? {
            Prepared::U8(mut dst, p) => p.process(&mut dst, window, abort),
            Prepared::U16(mut dst, p) => p.process(&mut dst, window, abort),
            Prepared::F32(mut dst, p) => p.process(&mut dst, window, abort),
        };
        Ok(outcome)
    }

    pub(crate) fn prepare<'a>(&self, args: RenderArguments<'a>) -> FilterResult<Prepared<'a>> {
        let RenderArguments {
            render_window,
            render_scale,
            source,
            destination,
            mask,
            mask_connected,
        } = args;

        let Some(destination) = destination else {
            warn!("render called without a destination image");
            return Err(FilterError::MissingDestination);
        };
        let depth = destination.depth();
        let components = destination.components();

        if !(render_scale.x > 0.0 && render_scale.y > 0.0)
            || !render_scale.x.is_finite()
            || !render_scale.y.is_finite()
        {
            return Err(FilterError::InvalidRenderScale {
                x: render_scale.x,
                y: render_scale.y,
            });
        }

        if let Some(src) = &source
            && (src.depth() != depth || src.components() != components)
        {
            warn!(
                "source image is {:?}/{:?} but destination is {:?}/{:?}",
                src.depth(),
                src.components(),
                depth,
                components
            );
            return Err(FilterError::ImageFormat {
                role: "source",
                expected_depth: depth,
                expected_components: components,
                actual_depth: src.depth(),
                actual_components: src.components(),
            });
        }

        let config = self.params.process_config(mask_connected);
        let mask = if config.do_masking { mask } else { None };
        if let Some(m) = &mask
            && (m.depth() != depth || m.components() != Components::Alpha)
        {
            warn!(
                "mask image is {:?}/{:?}, expected {:?}/{:?}",
                m.depth(),
                m.components(),
                depth,
                Components::Alpha
            );
            return Err(FilterError::ImageFormat {
                role: "mask",
                expected_depth: depth,
                expected_components: Components::Alpha,
                actual_depth: m.depth(),
                actual_components: m.components(),
            });
        }

        let bounds = destination.bounds();
        if !bounds.contains_rect(&render_window) {
            return Err(FilterError::WindowOutOfBounds {
                window: render_window,
                bounds,
            });
        }

        // Encodings were checked above, so the downcasts cannot miss
        let prepared = match destination {
            DynImageViewMut::U8(dst) => {
                let p = OffsetProcessor::new(
                    typed(source),
                    typed(mask),
                    &config,
                    components,
                );
                Prepared::U8(dst, p)
            }
            DynImageViewMut::U16(dst) => {
                let p = OffsetProcessor::new(
                    typed(source),
                    typed(mask),
                    &config,
                    components,
                );
                Prepared::U16(dst, p)
            }
            DynImageViewMut::F32(dst) => {
                let p = OffsetProcessor::new(
                    typed(source),
                    typed(mask),
                    &config,
                    components,
                );
                Prepared::F32(dst, p)
            }
        };
        Ok(prepared)
    }
}

fn typed<T: Sample>(view: Option<DynImageView<'_>>) -> Option<ImageView<'_, T>> {
    view.and_then(T::downcast_view)
}
