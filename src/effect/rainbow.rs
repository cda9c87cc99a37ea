//! Rotating rainbow
//!
//! Every pixel gets a hue offset from its neighbour by a fixed spread, and a
//! phase accumulator shifts the whole pattern each tick.

use super::Effect;
use crate::{
    color::{Hsv, hsv_to_rgb, normalize_hue},
    strip::{PixelSink, Strip},
};

/// Hue advance per tick, in degrees
const DEFAULT_STEP: f32 = 2.0;
/// Hue distance between neighbouring pixels, in degrees
const DEFAULT_SPREAD: f32 = 2.0;
/// The static setup frame spans half of the hue circle
const SETUP_DIVISIONS: f32 = 2.0;

/// Direction the pattern travels along the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RainbowDirection {
    /// Colors move toward the end of the strip
    #[default]
    Forward,
    /// Colors move toward the start of the strip
    Backward,
}

#[derive(Debug, Clone)]
pub struct RainbowEffect {
    /// Hue of the first pixel on the next update
    phase: f32,
    step: f32,
    spread: f32,
    direction: RainbowDirection,
    saturation: f32,
    value: f32,
}

impl Default for RainbowEffect {
    fn default() -> Self {
        Self {
            phase: 0.0,
            step: DEFAULT_STEP,
            spread: DEFAULT_SPREAD,
            direction: RainbowDirection::Forward,
            saturation: 1.0,
            value: 1.0,
        }
    }
}

impl RainbowEffect {
    /// Set the hue advance per tick, in degrees
    #[must_use]
    pub fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Set the hue distance between neighbouring pixels, in degrees
    #[must_use]
    pub fn with_spread(mut self, spread: f32) -> Self {
        self.spread = spread;
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: RainbowDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the saturation (0.0-1.0)
    #[must_use]
    pub fn with_saturation(mut self, saturation: f32) -> Self {
        self.saturation = saturation;
        self
    }

    /// Set the brightness value (0.0-1.0)
    #[must_use]
    pub fn with_value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    pub const fn phase(&self) -> f32 {
        self.phase
    }

    fn color(&self, hue: f32) -> Hsv {
        Hsv::new(normalize_hue(hue), self.saturation, self.value)
    }
}

impl Effect for RainbowEffect {
    #[allow(clippy::cast_precision_loss)]
    fn setup<S: PixelSink>(&mut self, strip: &mut Strip<S>) {
        let len = strip.len() as f32;
        strip.fill_with(|index| {
            let hue = (index as f32 / len) * 360.0 / SETUP_DIVISIONS;
            hsv_to_rgb(self.color(hue))
        });
    }

    #[allow(clippy::cast_precision_loss)]
    fn update<S: PixelSink>(&mut self, strip: &mut Strip<S>) {
        strip.fill_with(|index| hsv_to_rgb(self.color(self.phase + index as f32 * self.spread)));

        let step = match self.direction {
            RainbowDirection::Forward => -self.step,
            RainbowDirection::Backward => self.step,
        };
        self.phase = normalize_hue(self.phase + step);
    }

    fn reset(&mut self) {
        self.phase = 0.0;
    }
}
