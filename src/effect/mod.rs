//! Effect system with compile-time known effect variants
//!
//! Built-in effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait, and so does the enum, which
//! makes it the default payload of the effect engine.

mod gradient;
mod offset_rainbow;
mod rainbow;
mod turn_signal;

pub use gradient::{GradientEffect, GradientSpace};
pub use offset_rainbow::OffsetRainbowEffect;
pub use rainbow::{RainbowDirection, RainbowEffect};
pub use turn_signal::{TurnSide, TurnSignalEffect};

use crate::color::Rgb;
use crate::strip::{PixelSink, Strip};

const EFFECT_NAME_GRADIENT: &str = "gradient";
const EFFECT_NAME_RAINBOW: &str = "rainbow";
const EFFECT_NAME_OFFSET_RAINBOW: &str = "offset_rainbow";
const EFFECT_NAME_TURN_SIGNAL: &str = "turn_signal";

const EFFECT_ID_GRADIENT: u8 = 0;
const EFFECT_ID_RAINBOW: u8 = 1;
const EFFECT_ID_OFFSET_RAINBOW: u8 = 2;
const EFFECT_ID_TURN_SIGNAL: u8 = 3;

pub trait Effect {
    /// Prepare the strip when the effect becomes active
    fn setup<S: PixelSink>(&mut self, _strip: &mut Strip<S>) {}

    /// Paint one tick
    fn update<S: PixelSink>(&mut self, strip: &mut Strip<S>);

    /// Reset animation state
    fn reset(&mut self) {}
}

/// Effect slot - enum containing all built-in effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Two-color gradient across the strip
    Gradient(GradientEffect),
    /// Rotating rainbow
    Rainbow(RainbowEffect),
    /// Rainbow repeated over strip divisions
    OffsetRainbow(OffsetRainbowEffect),
    /// Sequential turn signal sweep
    TurnSignal(TurnSignalEffect),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Gradient = EFFECT_ID_GRADIENT,
    Rainbow = EFFECT_ID_RAINBOW,
    OffsetRainbow = EFFECT_ID_OFFSET_RAINBOW,
    TurnSignal = EFFECT_ID_TURN_SIGNAL,
}

impl Default for EffectSlot {
    fn default() -> Self {
        Self::Rainbow(RainbowEffect::default())
    }
}

impl EffectId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_GRADIENT => Self::Gradient,
            EFFECT_ID_RAINBOW => Self::Rainbow,
            EFFECT_ID_OFFSET_RAINBOW => Self::OffsetRainbow,
            EFFECT_ID_TURN_SIGNAL => Self::TurnSignal,
            _ => return None,
        })
    }

    /// Build the effect with its default parameters
    ///
    /// The gradient runs from `start` to `end` and the turn signal lights up
    /// with `start`. Rainbow effects ignore both colors.
    pub fn to_slot(self, start: Rgb, end: Rgb) -> EffectSlot {
        match self {
            Self::Gradient => EffectSlot::Gradient(GradientEffect::new(start, end)),
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect::default()),
            Self::OffsetRainbow => EffectSlot::OffsetRainbow(OffsetRainbowEffect::default()),
            Self::TurnSignal => {
                EffectSlot::TurnSignal(TurnSignalEffect::default().with_color(start))
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gradient => EFFECT_NAME_GRADIENT,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::OffsetRainbow => EFFECT_NAME_OFFSET_RAINBOW,
            Self::TurnSignal => EFFECT_NAME_TURN_SIGNAL,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_GRADIENT => Some(Self::Gradient),
            EFFECT_NAME_RAINBOW => Some(Self::Rainbow),
            EFFECT_NAME_OFFSET_RAINBOW => Some(Self::OffsetRainbow),
            EFFECT_NAME_TURN_SIGNAL => Some(Self::TurnSignal),
            _ => None,
        }
    }
}

impl EffectSlot {
    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Gradient(_) => EffectId::Gradient,
            Self::Rainbow(_) => EffectId::Rainbow,
            Self::OffsetRainbow(_) => EffectId::OffsetRainbow,
            Self::TurnSignal(_) => EffectId::TurnSignal,
        }
    }
}

impl Effect for EffectSlot {
    fn setup<S: PixelSink>(&mut self, strip: &mut Strip<S>) {
        match self {
            Self::Gradient(effect) => effect.setup(strip),
            Self::Rainbow(effect) => effect.setup(strip),
            Self::OffsetRainbow(effect) => effect.setup(strip),
            Self::TurnSignal(effect) => effect.setup(strip),
        }
    }

    fn update<S: PixelSink>(&mut self, strip: &mut Strip<S>) {
        match self {
            Self::Gradient(effect) => effect.update(strip),
            Self::Rainbow(effect) => effect.update(strip),
            Self::OffsetRainbow(effect) => effect.update(strip),
            Self::TurnSignal(effect) => effect.update(strip),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Gradient(effect) => Effect::reset(effect),
            Self::Rainbow(effect) => Effect::reset(effect),
            Self::OffsetRainbow(effect) => Effect::reset(effect),
            Self::TurnSignal(effect) => Effect::reset(effect),
        }
    }
}

impl From<GradientEffect> for EffectSlot {
    fn from(effect: GradientEffect) -> Self {
        Self::Gradient(effect)
    }
}

impl From<RainbowEffect> for EffectSlot {
    fn from(effect: RainbowEffect) -> Self {
        Self::Rainbow(effect)
    }
}

impl From<OffsetRainbowEffect> for EffectSlot {
    fn from(effect: OffsetRainbowEffect) -> Self {
        Self::OffsetRainbow(effect)
    }
}

impl From<TurnSignalEffect> for EffectSlot {
    fn from(effect: TurnSignalEffect) -> Self {
        Self::TurnSignal(effect)
    }
}
