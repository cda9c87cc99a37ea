//! Rainbow split into strip divisions
//!
//! The strip is cut into equal divisions. Each division carries a full hue
//! circle, and consecutive divisions start `360 / divisions` degrees apart.
//! A shared phase accumulator animates all of them.

use super::{Effect, RainbowDirection};
use crate::{
    color::{Hsv, hsv_to_rgb, normalize_hue},
    strip::{PixelSink, Strip},
};

const DEFAULT_DIVISIONS: u8 = 2;
const DEFAULT_STEP: f32 = 2.0;

/// Per-length geometry, derived when the effect is activated
#[derive(Debug, Clone, Copy, PartialEq)]
struct DivisionLayout {
    length: usize,
    division_len: usize,
    hue_step: f32,
    division_offset: f32,
}

impl DivisionLayout {
    #[allow(clippy::cast_precision_loss)]
    fn new(length: usize, divisions: u8) -> Self {
        let length = length.max(1);
        let divisions = usize::from(divisions).clamp(1, length);
        let division_len = length.div_ceil(divisions);
        Self {
            length,
            division_len,
            hue_step: 360.0 / division_len as f32,
            division_offset: 360.0 / divisions as f32,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn hue_at(&self, index: usize, phase: f32) -> f32 {
        let division = index / self.division_len;
        let position = index % self.division_len;
        phase + position as f32 * self.hue_step + division as f32 * self.division_offset
    }
}

#[derive(Debug, Clone)]
pub struct OffsetRainbowEffect {
    divisions: u8,
    step: f32,
    direction: RainbowDirection,
    phase: f32,
    layout: Option<DivisionLayout>,
}

impl Default for OffsetRainbowEffect {
    fn default() -> Self {
        Self::new(DEFAULT_DIVISIONS)
    }
}

impl OffsetRainbowEffect {
    /// Create an effect with `divisions` strip divisions
    ///
    /// Zero is treated as one division.
    pub const fn new(divisions: u8) -> Self {
        Self {
            divisions,
            step: DEFAULT_STEP,
            direction: RainbowDirection::Forward,
            phase: 0.0,
            layout: None,
        }
    }

    /// Set the hue advance per tick, in degrees
    #[must_use]
    pub fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: RainbowDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Change the number of divisions
    ///
    /// The geometry is recomputed on the next update.
    pub fn set_divisions(&mut self, divisions: u8) {
        self.divisions = divisions;
        self.layout = None;
    }

    pub const fn divisions(&self) -> u8 {
        self.divisions
    }

    pub const fn phase(&self) -> f32 {
        self.phase
    }

    /// Hue distance between neighbouring pixels of one division, once the
    /// effect has seen a strip
    pub fn hue_step(&self) -> Option<f32> {
        self.layout.map(|layout| layout.hue_step)
    }

    fn layout_for(&mut self, length: usize) -> DivisionLayout {
        match self.layout {
            Some(layout) if layout.length == length => layout,
            _ => {
                let layout = DivisionLayout::new(length, self.divisions);
                self.layout = Some(layout);
                layout
            }
        }
    }
}

impl Effect for OffsetRainbowEffect {
    fn setup<S: PixelSink>(&mut self, strip: &mut Strip<S>) {
        self.layout = Some(DivisionLayout::new(strip.len(), self.divisions));
    }

    fn update<S: PixelSink>(&mut self, strip: &mut Strip<S>) {
        let layout = self.layout_for(strip.len());
        let phase = self.phase;
        strip.fill_with(|index| {
            hsv_to_rgb(Hsv::new(normalize_hue(layout.hue_at(index, phase)), 1.0, 1.0))
        });

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
