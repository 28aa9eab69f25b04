//! Filter parameters
//!
//! [`Params`] mirrors the parameter set the host persists for one filter
//! instance, including the hidden `premultChanged` flag. The change
//! handlers reproduce how the filter reacts to host notifications.

use crate::channels::ChannelSelection;
use crate::clip::{ChangeReason, ClipInfo, PreMultiplication};
use crate::config::ProcessConfig;
use crate::values::RgbaValues;
use chanoffset_core::{Components, channel};
use log::debug;

/// Host parameter names
pub mod names {
    pub const PROCESS_R: &str = "processR";
    pub const PROCESS_G: &str = "processG";
    pub const PROCESS_B: &str = "processB";
    pub const PROCESS_A: &str = "processA";
    pub const VALUE: &str = "value";
    pub const PREMULT: &str = "premult";
    pub const PREMULT_CHANNEL: &str = "premultChannel";
    pub const MIX: &str = "mix";
    pub const MASK_APPLY: &str = "maskApply";
    pub const MASK_INVERT: &str = "maskInvert";
    pub const PREMULT_CHANGED: &str = "premultChanged";
}

/// Parameter values of one filter instance
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    pub process_r: bool,
    pub process_g: bool,
    pub process_b: bool,
    pub process_a: bool,
    /// Offset per channel, unbounded
    pub value: RgbaValues,
    pub premult: bool,
    /// Channel used as alpha for (un)premultiplication
    pub premult_channel: usize,
    /// Blend fraction; clamped to `0..=1` when a render is configured
    pub mix: f64,
    /// Only present on hosts that always connect the mask input
    pub mask_apply: Option<bool>,
    pub mask_invert: bool,
    /// Set once the user edits `premult` by hand
    pub premult_changed: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            process_r: true,
            process_g: true,
            process_b: true,
            process_a: false,
            value: RgbaValues::default(),
            premult: false,
            premult_channel: channel::ALPHA,
            mix: 1.0,
            mask_apply: None,
            mask_invert: false,
            premult_changed: false,
        }
    }
}

impl Params {
    /// Requested channels
    pub fn channels(&self) -> ChannelSelection {
        ChannelSelection::new(self.process_r, self.process_g, self.process_b, self.process_a)
    }

    /// Whether masking applies given the mask input's connection state.
    pub fn masking_enabled(&self, mask_connected: bool) -> bool {
        self.mask_apply.unwrap_or(true) && mask_connected
    }

    /// Whether every requested channel has a zero offset
    pub fn offsets_are_noop(&self) -> bool {
        (!self.process_r || self.value.r == 0.0)
            && (!self.process_g || self.value.g == 0.0)
            && (!self.process_b || self.value.b == 0.0)
            && (!self.process_a || self.value.a == 0.0)
    }

    /// Mix fraction a render actually uses: clamped to `0..=1`, NaN as 0.
    pub fn effective_mix(&self) -> f64 {
        if self.mix.is_nan() {
            0.0
        } else {
            self.mix.clamp(0.0, 1.0)
        }
    }

    /// Snapshot the parameters for one render call.
    pub fn process_config(&self, mask_connected: bool) -> ProcessConfig {
        let mix = self.effective_mix();
        ProcessConfig {
            channels: self.channels(),
            value: self.value,
            premult: self.premult,
            premult_channel: self.premult_channel.min(channel::ALPHA),
            mix: mix as f32,
            do_masking: self.masking_enabled(mask_connected),
            mask_invert: self.mask_invert,
        }
    }

    /// React to a parameter change notification.
    ///
    /// A user edit of `premult` marks it as manually chosen, which stops
    /// later inference from overriding it.
    pub fn param_changed(&mut self, name: &str, reason: ChangeReason) {
        if name == names::PREMULT && reason == ChangeReason::UserEdit {
            self.premult_changed = true;
        }
    }

    /// React to the source clip changing.
    ///
    /// When the user connects a source and has not set `premult` by hand,
    /// `premult` follows the clip: on only for RGBA clips that report
    /// premultiplied colour. Returns `true` if `premult` was assigned.
    pub fn source_clip_changed(&mut self, clip: &ClipInfo, reason: ChangeReason) -> bool {
        if !clip.connected || self.premult_changed || reason != ChangeReason::UserEdit {
            return false;
        }
        self.premult = clip.components == Components::Rgba
            && clip.premultiplication == PreMultiplication::PreMultiplied;
        debug!(
            "inferred premult={} from {:?} {:?} source",
            self.premult, clip.components, clip.premultiplication
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = Params::default();
        assert!(p.process_r && p.process_g && p.process_b && !p.process_a);
        assert_eq!(p.value, RgbaValues::splat(0.0));
        assert!(!p.premult);
        assert_eq!(p.premult_channel, 3);
        assert_eq!(p.mix, 1.0);
        assert!(!p.mask_invert);
        assert!(!p.premult_changed);
        assert_eq!(p.process_config(false), ProcessConfig::default());
    }

    #[test]
    fn test_masking_enabled() {
        let mut p = Params::default();
        assert!(!p.masking_enabled(false));
        assert!(p.masking_enabled(true));
        p.mask_apply = Some(false);
        assert!(!p.masking_enabled(true));
        p.mask_apply = Some(true);
        assert!(p.masking_enabled(true));
    }

    #[test]
    fn test_process_config_clamps() {
        let p = Params {
            mix: 1.5,
            premult_channel: 9,
            ..Params::default()
        };
        let c = p.process_config(true);
        assert_eq!(c.mix, 1.0);
        assert_eq!(c.premult_channel, 3);
        assert!(c.do_masking);

        let p = Params {
            mix: -0.5,
            ..Params::default()
        };
        assert_eq!(p.process_config(false).mix, 0.0);
    }

    #[test]
    fn test_effective_mix_matches_process_config() {
        for (mix, expected) in [(-0.5, 0.0), (f64::NAN, 0.0), (0.25, 0.25), (3.0, 1.0)] {
            let p = Params {
                mix,
                ..Params::default()
            };
            assert_eq!(p.effective_mix(), expected, "mix {mix}");
            assert_eq!(p.process_config(false).mix, expected as f32);
        }
    }

    #[test]
    fn test_offsets_are_noop() {
        let mut p = Params::default();
        assert!(p.offsets_are_noop());
        p.value.a = 0.3;
        // Alpha is not requested
        assert!(p.offsets_are_noop());
        p.value.g = -0.1;
        assert!(!p.offsets_are_noop());
        p.process_g = false;
        assert!(p.offsets_are_noop());
    }

    #[test]
    fn test_premult_inference() {
        let rgba_pre = ClipInfo::connected(Components::Rgba, PreMultiplication::PreMultiplied);
        let rgba_unpre = ClipInfo::connected(Components::Rgba, PreMultiplication::UnPreMultiplied);
        let rgba_opaque = ClipInfo::connected(Components::Rgba, PreMultiplication::Opaque);
        let rgb_pre = ClipInfo::connected(Components::Rgb, PreMultiplication::PreMultiplied);

        let mut p = Params::default();
        assert!(p.source_clip_changed(&rgba_pre, ChangeReason::UserEdit));
        assert!(p.premult);
        assert!(p.source_clip_changed(&rgba_unpre, ChangeReason::UserEdit));
        assert!(!p.premult);
        p.premult = true;
        assert!(p.source_clip_changed(&rgba_opaque, ChangeReason::UserEdit));
        assert!(!p.premult);
        p.premult = true;
        assert!(p.source_clip_changed(&rgb_pre, ChangeReason::UserEdit));
        assert!(!p.premult);
    }

    #[test]
    fn test_premult_inference_skipped() {
        let rgba_pre = ClipInfo::connected(Components::Rgba, PreMultiplication::PreMultiplied);
        let mut p = Params::default();

        // Not a user edit
        assert!(!p.source_clip_changed(&rgba_pre, ChangeReason::PluginEdit));
        assert!(!p.premult);

        // Disconnected
        let disconnected = ClipInfo {
            connected: false,
            ..rgba_pre
        };
        assert!(!p.source_clip_changed(&disconnected, ChangeReason::UserEdit));

        // Manually chosen premult wins
        p.param_changed(names::PREMULT, ChangeReason::UserEdit);
        assert!(p.premult_changed);
        assert!(!p.source_clip_changed(&rgba_pre, ChangeReason::UserEdit));
        assert!(!p.premult);
    }

    #[test]
    fn test_param_changed_only_tracks_user_premult_edits() {
        let mut p = Params::default();
        p.param_changed(names::PREMULT, ChangeReason::PluginEdit);
        p.param_changed(names::MIX, ChangeReason::UserEdit);
        assert!(!p.premult_changed);
        p.param_changed(names::PREMULT, ChangeReason::UserEdit);
        assert!(p.premult_changed);
    }
}
