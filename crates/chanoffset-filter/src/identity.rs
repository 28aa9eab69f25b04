//! Identity short-circuit
//!
//! Cheap pre-check telling the host it may pass the source through
//! instead of rendering.

use crate::render::OffsetFilter;
use chanoffset_core::{Rect, RectD, RenderScale};
use log::debug;

/// What the host knows when it asks whether a render can be skipped
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdentityArguments {
    pub render_window: Rect,
    pub render_scale: RenderScale,
    /// Whether the mask input is connected
    pub mask_connected: bool,
    /// Mask region of definition in canonical coordinates
    pub mask_region: Option<RectD>,
    /// Pixel aspect ratio of the mask input
    pub mask_pixel_aspect: f64,
    /// Whether the host reports regions in canonical coordinates
    pub supports_multi_resolution: bool,
}

impl IdentityArguments {
    /// Arguments for `render_window` at full scale, mask disconnected
    pub fn new(render_window: Rect) -> Self {
        Self {
            render_window,
            render_scale: RenderScale::default(),
            mask_connected: false,
            mask_region: None,
            mask_pixel_aspect: 1.0,
            supports_multi_resolution: true,
        }
    }

    /// Connect a mask whose region of definition is `region`.
    pub fn with_mask_region(mut self, region: RectD) -> Self {
        self.mask_connected = true;
        self.mask_region = Some(region);
        self
    }
}

/// The input the host should pass through on identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityClip {
    Source,
}

impl OffsetFilter {
    /// Input to pass through unchanged, or `None` if a render is needed.
    ///
    /// The filter is an identity when:
    /// - `mix` is 0 once clamped (negative and NaN included);
    /// - every requested channel has a zero offset (or none is requested);
    /// - masking is on, not inverted, and the mask does not reach the
    ///   render window. Hosts without multi-resolution support report mask
    ///   regions in pixels, so this last case is only checked when it is
    ///   available.
    pub fn identity(&self, args: &IdentityArguments) -> Option<IdentityClip> {
        let params = self.params();

        if params.effective_mix() == 0.0 {
            debug!("identity: mix is 0 (requested {})", params.mix);
            return Some(IdentityClip::Source);
        }

        if params.offsets_are_noop() {
            debug!("identity: no requested channel has a non-zero offset");
            return Some(IdentityClip::Source);
        }

        if params.masking_enabled(args.mask_connected)
            && !params.mask_invert
            && args.supports_multi_resolution
            && let Some(region) = args.mask_region
        {
            let mask_rect = region.to_pixel_enclosing(args.render_scale, args.mask_pixel_aspect);
            if !args.render_window.overlaps(&mask_rect) {
                debug!(
                    "identity: mask {:?} does not reach window {:?}",
                    mask_rect, args.render_window
                );
                return Some(IdentityClip::Source);
            }
        }

        None
    }

    /// Whether the render can be skipped, see [`OffsetFilter::identity`].
    pub fn is_identity(&self, args: &IdentityArguments) -> bool {
        self.identity(args).is_some()
    }
}
