//! Per-channel offset values

use chanoffset_core::channel;

/// One scalar per channel, added in the normalized domain
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RgbaValues {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl RgbaValues {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same value on every channel
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    /// Value of channel `c` (see [`chanoffset_core::channel`]).
    ///
    /// # Panics
    ///
    /// Panics if `c > 3`.
    pub fn get(&self, c: usize) -> f64 {
        match c {
            channel::RED => self.r,
            channel::GREEN => self.g,
            channel::BLUE => self.b,
            channel::ALPHA => self.a,
            _ => panic!("channel index {c} out of range"),
        }
    }

    /// Values narrowed to the working precision of the pixel loop
    pub fn to_f32_array(&self) -> [f32; 4] {
        [self.r as f32, self.g as f32, self.b as f32, self.a as f32]
    }
}
