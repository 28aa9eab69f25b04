//! Plugin description
//!
//! Static metadata a host needs before instantiating the filter: identity,
//! supported contexts and formats, and the parameter list with labels,
//! hints and defaults.

use crate::params::{Params, names};
use chanoffset_core::{BitDepth, Components};

pub const PLUGIN_IDENTIFIER: &str = "hu.pezia.openfx.LicenceplateBlur";
pub const PLUGIN_LABEL: &str = "LicenceplateBlur";
pub const PLUGIN_GROUPING: &str = "Pezia/Filters";
pub const PLUGIN_DESCRIPTION: &str = "Adds a constant to the selected channels.";
pub const PLUGIN_VERSION_MAJOR: u32 = 1;
pub const PLUGIN_VERSION_MINOR: u32 = 0;

/// Host context the filter can be used in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    Filter,
    General,
    Paint,
}

impl Context {
    /// Name of the mask input in this context
    pub fn mask_clip_name(self) -> &'static str {
        match self {
            Context::Paint => "Brush",
            _ => "Mask",
        }
    }

    /// Whether the mask input may be left disconnected
    pub fn mask_optional(self) -> bool {
        self != Context::Paint
    }
}

/// Type, default and range of a parameter
#[derive(Debug, Clone, PartialEq)]
pub enum ParamKind {
    Boolean {
        default: bool,
    },
    Rgba {
        default: [f64; 4],
        display_min: f64,
        display_max: f64,
    },
    Choice {
        options: &'static [&'static str],
        default: usize,
    },
    Double {
        default: f64,
        min: f64,
        max: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParamDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
    pub kind: ParamKind,
    /// Hidden from the UI
    pub secret: bool,
    /// Only defined on hosts that always connect the mask
    pub host_dependent: bool,
}

impl ParamDescriptor {
    fn new(name: &'static str, label: &'static str, hint: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            label,
            hint,
            kind,
            secret: false,
            host_dependent: false,
        }
    }
}

/// Everything the host is told about the filter
#[derive(Debug, Clone, PartialEq)]
pub struct PluginDescriptor {
    pub identifier: &'static str,
    pub version: (u32, u32),
    pub label: &'static str,
    pub grouping: &'static str,
    pub description: &'static str,
    pub contexts: Vec<Context>,
    pub bit_depths: Vec<BitDepth>,
    pub components: Vec<Components>,
    pub supports_tiles: bool,
    pub supports_multi_resolution: bool,
    pub supports_multiple_clip_depths: bool,
    pub params: Vec<ParamDescriptor>,
}

impl PluginDescriptor {
    pub fn describe() -> Self {
        let d = Params::default();
        let bool_param = |name, label, hint, default| {
            ParamDescriptor::new(name, label, hint, ParamKind::Boolean { default })
        };

        let mut mask_apply = bool_param(
            names::MASK_APPLY,
            "Mask",
            "Apply the mask to the image.",
            d.mask_apply.unwrap_or(true),
        );
        mask_apply.host_dependent = true;

        let mut premult_changed =
            bool_param(names::PREMULT_CHANGED, "", "", d.premult_changed);
        premult_changed.secret = true;

        let params = vec![
            bool_param(names::PROCESS_R, "R", "Process red channel.", d.process_r),
            bool_param(names::PROCESS_G, "G", "Process green channel.", d.process_g),
            bool_param(names::PROCESS_B, "B", "Process blue channel.", d.process_b),
            bool_param(names::PROCESS_A, "A", "Process alpha channel.", d.process_a),
            ParamDescriptor::new(
                names::VALUE,
                "Value",
                "Constant to add to the selected channels.",
                ParamKind::Rgba {
                    default: [d.value.r, d.value.g, d.value.b, d.value.a],
                    display_min: 0.0,
                    display_max: 4.0,
                },
            ),
            bool_param(
                names::PREMULT,
                "(Un)premult",
                "Divide the image by the alpha channel before processing, and re-multiply it \
                 afterwards. Use if the input images are premultiplied.",
                d.premult,
            ),
            ParamDescriptor::new(
                names::PREMULT_CHANNEL,
                "By",
                "The channel to use for (un)premult.",
                ParamKind::Choice {
                    options: &["R", "G", "B", "A"],
                    default: d.premult_channel,
                },
            ),
            ParamDescriptor::new(
                names::MIX,
                "Mix",
                "Mix factor between the original and the transformed image.",
                ParamKind::Double {
                    default: d.mix,
                    min: 0.0,
                    max: 1.0,
                },
            ),
            mask_apply,
            bool_param(
                names::MASK_INVERT,
                "Invert Mask",
                "When checked, the effect is fully applied where the mask is 0.",
                d.mask_invert,
            ),
            premult_changed,
        ];

        Self {
            identifier: PLUGIN_IDENTIFIER,
            version: (PLUGIN_VERSION_MAJOR, PLUGIN_VERSION_MINOR),
            label: PLUGIN_LABEL,
            grouping: PLUGIN_GROUPING,
            description: PLUGIN_DESCRIPTION,
            contexts: vec![Context::Filter, Context::General, Context::Paint],
            bit_depths: vec![BitDepth::UByte, BitDepth::UShort, BitDepth::Float],
            components: vec![Components::Rgba, Components::Rgb, Components::Alpha],
            supports_tiles: true,
            supports_multi_resolution: true,
            supports_multiple_clip_depths: false,
            params,
        }
    }

    /// Look up a parameter by host name
    pub fn param(&self, name: &str) -> Option<&ParamDescriptor> {
        self.params.iter().find(|p| p.name == name)
    }
}
