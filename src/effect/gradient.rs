//! Two-color gradient
//!
//! Recomputes the whole gradient on every update, so the output stays the
//! same until the endpoints change.

use super::Effect;
use crate::{
    color::{
        HueInterpolation, Hsv, PackedColor, Rgb, hsv_to_rgb, lerp_hsv, lerp_rgb, packed_to_hsv,
        rgb_to_hsv,
    },
    strip::{PixelSink, Strip, gradient_position},
};

/// Color space the gradient is interpolated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientSpace {
    /// Per-channel RGB interpolation
    #[default]
    Rgb,
    /// Per-component HSV interpolation
    Hsv(HueInterpolation),
}

/// Gradient from the first pixel to the last one
#[derive(Debug, Clone)]
pub struct GradientEffect {
    start: Hsv,
    end: Hsv,
    space: GradientSpace,
}

impl GradientEffect {
    pub fn new(start: Rgb, end: Rgb) -> Self {
        Self::from_hsv(rgb_to_hsv(start), rgb_to_hsv(end))
    }

    pub const fn from_hsv(start: Hsv, end: Hsv) -> Self {
        Self {
            start,
            end,
            space: GradientSpace::Rgb,
        }
    }

    pub fn from_packed(start: PackedColor, end: PackedColor) -> Self {
        Self::from_hsv(packed_to_hsv(start), packed_to_hsv(end))
    }

    /// Set the interpolation space
    #[must_use]
    pub fn with_space(mut self, space: GradientSpace) -> Self {
        self.space = space;
        self
    }

    pub fn set_endpoints(&mut self, start: Hsv, end: Hsv) {
        self.start = start;
        self.end = end;
    }

    pub const fn endpoints(&self) -> (Hsv, Hsv) {
        (self.start, self.end)
    }
}

impl Effect for GradientEffect {
    fn update<S: PixelSink>(&mut self, strip: &mut Strip<S>) {
        let last = strip.len().saturating_sub(1);
        let (start, end) = (self.start, self.end);

        match self.space {
            GradientSpace::Rgb => {
                let start = hsv_to_rgb(start);
                let end = hsv_to_rgb(end);
                strip.fill_with(|index| lerp_rgb(start, end, gradient_position(index, last)));
            }
            GradientSpace::Hsv(hue) => {
                strip.fill_with(|index| {
                    hsv_to_rgb(lerp_hsv(start, end, gradient_position(index, last), hue))
                });
            }
        }
    }
}
