//! Channel selection and specialization
//!
//! The four enable flags are resolved once per region into const generic
//! parameters, so the pixel loop carries no per-pixel enable checks.

use chanoffset_core::Components;

/// Which of R, G, B, A receive the offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelSelection {
    pub r: bool,
    pub g: bool,
    pub b: bool,
    pub a: bool,
}

impl ChannelSelection {
    pub const fn new(r: bool, g: bool, b: bool, a: bool) -> Self {
        Self { r, g, b, a }
    }

    /// Mask the requested flags against what the layout can hold.
    ///
    /// Single-channel images only have alpha; three-component images have
    /// no alpha.
    pub fn effective(self, components: Components) -> Self {
        let n = components.count();
        Self {
            r: self.r && n != 1,
            g: self.g && n >= 2,
            b: self.b && n >= 3,
            a: self.a && (n == 1 || n == 4),
        }
    }

    /// No channel selected
    pub fn is_empty(self) -> bool {
        !(self.r || self.g || self.b || self.a)
    }
}

/// Code generic over the four channel flags
///
/// [`dispatch`] calls [`ChannelKernel::run`] with the flags of a runtime
/// [`ChannelSelection`] fixed at compile time.
pub trait ChannelKernel {
    type Output;

    fn run<const R: bool, const G: bool, const B: bool, const A: bool>(self) -> Self::Output;
}

/// Run `kernel` specialized for `selection`.
pub fn dispatch<K: ChannelKernel>(selection: ChannelSelection, kernel: K) -> K::Output {
    let ChannelSelection { r, g, b, a } = selection;
    match (r, g, b, a) {
        (true, true, true, true) => kernel.run::<true, true, true, true>(),
        (true, true, true, false) => kernel.run::<true, true, true, false>(),
        (true, true, false, true) => kernel.run::<true, true, false, true>(),
        (true, true, false, false) => kernel.run::<true, true, false, false>(),
        (true, false, true, true) => kernel.run::<true, false, true, true>(),
        (true, false, true, false) => kernel.run::<true, false, true, false>(),
        (true, false, false, true) => kernel.run::<true, false, false, true>(),
        (true, false, false, false) => kernel.run::<true, false, false, false>(),
        (false, true, true, true) => kernel.run::<false, true, true, true>(),
        (false, true, true, false) => kernel.run::<false, true, true, false>(),
        (false, true, false, true) => kernel.run::<false, true, false, true>(),
        (false, true, false, false) => kernel.run::<false, true, false, false>(),
        (false, false, true, true) => kernel.run::<false, false, true, true>(),
        (false, false, true, false) => kernel.run::<false, false, true, false>(),
        (false, false, false, true) => kernel.run::<false, false, false, true>(),
        (false, false, false, false) => kernel.run::<false, false, false, false>(),
    }
}
