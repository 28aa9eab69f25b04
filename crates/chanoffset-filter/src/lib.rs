//! chanoffset-filter - Per-channel additive offset filter
//!
//! This crate provides the filter itself:
//!
//! - **Parameters** ([`params`]): host parameter set, premult inference
//! - **Channel dispatch** ([`channels`]): 16-way const generic specialization
//! - **Engine** ([`processor`]): the per-pixel offset and recomposition
//! - **Render entry** ([`render`]): validation and encoding dispatch
//! - **Identity** ([`identity`]): pass-through short-circuit
//! - **Tiling** ([`parallel`]): rayon-based banded rendering
//! - **Description** ([`descriptor`]): plugin and parameter metadata
//!
//! # Example
//!
//! ```
//! use chanoffset_core::{Components, Image, Rect};
//! use chanoffset_filter::{
//!     NeverAbort, OffsetFilter, Params, RenderArguments, RenderOutcome, RgbaValues,
//! };
//!
//! let src = Image::from_data(Rect::from_size(1, 1), Components::Rgba, vec![100u8, 50, 25, 255]).unwrap();
//! let mut dst = Image::<u8>::from_size(1, 1, Components::Rgba).unwrap();
//!
//! let filter = OffsetFilter::new(Params {
//!     value: RgbaValues::new(0.2, 0.0, 0.0, 0.0),
//!     ..Params::default()
//! });
//! let args = RenderArguments::new(Rect::from_size(1, 1), Some(src.view().into()), dst.view_mut().into());
//! assert_eq!(filter.render(args, &NeverAbort).unwrap(), RenderOutcome::Completed);
//! assert_eq!(dst.data(), &[151, 50, 25, 255]);
//! ```

pub mod abort;
pub mod channels;
pub mod clip;
pub mod config;
pub mod descriptor;
mod error;
pub mod identity;
pub mod parallel;
pub mod params;
pub mod processor;
pub mod render;
pub mod values;

pub use abort::{AbortSignal, NeverAbort};
pub use channels::{ChannelKernel, ChannelSelection, dispatch};
pub use clip::{ChangeReason, ClipInfo, PreMultiplication};
pub use config::ProcessConfig;
pub use descriptor::{Context, ParamDescriptor, ParamKind, PluginDescriptor};
pub use error::{FilterError, FilterResult};
pub use identity::{IdentityArguments, IdentityClip};
pub use parallel::DEFAULT_BAND_ROWS;
pub use params::Params;
pub use processor::{OffsetProcessor, RenderOutcome};
pub use render::{OffsetFilter, RenderArguments};
pub use values::RgbaValues;
