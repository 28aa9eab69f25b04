//! Host-side clip state
//!
//! The host owns clips; the filter only sees the few properties that
//! drive premultiplication inference.

use chanoffset_core::Components;

/// How the host says a clip's colour relates to its alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreMultiplication {
    /// No meaningful alpha
    Opaque,
    /// Colour already multiplied by alpha
    PreMultiplied,
    /// Colour independent of alpha
    UnPreMultiplied,
}

/// Why a clip or parameter changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeReason {
    /// The user edited it in the host UI
    UserEdit,
    /// The filter set it itself
    PluginEdit,
    /// The host changed time
    Time,
}

/// Snapshot of a clip's properties
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipInfo {
    pub connected: bool,
    pub components: Components,
    pub premultiplication: PreMultiplication,
}

impl ClipInfo {
    /// A connected clip
    pub fn connected(components: Components, premultiplication: PreMultiplication) -> Self {
        Self {
            connected: true,
            components,
            premultiplication,
        }
    }
}
