//! Per-render processing configuration

use crate::channels::ChannelSelection;
use crate::values::RgbaValues;

/// Immutable settings for one render call
///
/// Built from [`crate::Params`] by [`crate::Params::process_config`] and
/// read-only while pixels are processed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessConfig {
    /// Requested channels, before masking against the component count
    pub channels: ChannelSelection,
    /// Offset added to each enabled channel
    pub value: RgbaValues,
    /// Unpremultiply before and premultiply after the offset
    pub premult: bool,
    /// Channel used as alpha for (un)premultiplication, `0..=3`
    pub premult_channel: usize,
    /// Blend fraction between the result and the source, `0..=1`
    pub mix: f32,
    /// Whether the mask weights the blend
    pub do_masking: bool,
    /// Use `1 - mask` as the weight
    pub mask_invert: bool,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            channels: ChannelSelection::new(true, true, true, false),
            value: RgbaValues::default(),
            premult: false,
            premult_channel: chanoffset_core::channel::ALPHA,
            mix: 1.0,
            do_masking: false,
            mask_invert: false,
        }
    }
}
