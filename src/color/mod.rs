mod convert;
mod lerp;

use smart_leds::RGB8;

pub use convert::{
    hsv_to_packed, hsv_to_rgb, normalize_hue, pack_channels, packed_to_hsv, packed_to_rgb,
    rgb_to_hsv, rgb_to_packed,
};
pub use lerp::{HueInterpolation, lerp_hsv, lerp_rgb};

pub type Rgb = RGB8;

/// Color packed as `0x00RRGGBB`, the form the strip driver consumes
pub type PackedColor = u32;

/// HSV color with floating point components
///
/// Hue is in degrees `[0, 360)`, saturation and value are normalized to
/// `[0, 1]`. Values coming from a 0-100 scale go through
/// [`Hsv::from_percent`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl Hsv {
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Build from saturation and value given on a 0-100 scale
    pub fn from_percent(hue: f32, saturation: f32, value: f32) -> Self {
        Self::new(hue, saturation / 100.0, value / 100.0)
    }

    /// Returns `(hue, saturation, value)` with saturation and value on a 0-100 scale
    pub fn to_percent(self) -> (f32, f32, f32) {
        (self.hue, self.saturation * 100.0, self.value * 100.0)
    }
}

/// Clamp to `[0, 1]`, mapping NaN to 0
#[inline]
pub(crate) fn clamp_unit(x: f32) -> f32 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}
