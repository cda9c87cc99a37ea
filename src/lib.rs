#![no_std]

pub mod color;
pub mod effect;
pub mod engine;
pub mod error;
pub mod frame_scheduler;
pub mod shared;
pub mod strip;

pub use color::{HueInterpolation, Hsv, PackedColor, Rgb};
pub use effect::{
    Effect, EffectId, EffectSlot, GradientEffect, GradientSpace, OffsetRainbowEffect,
    RainbowDirection, RainbowEffect, TurnSide, TurnSignalEffect,
};
pub use engine::EffectEngine;
pub use error::{Error, Result};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use shared::Shared;
pub use strip::{FrameBuffer, MAX_STRIP_LEN, MIN_STRIP_LEN, PixelSink, Strip, StripMode};

pub use embassy_time::{Duration, Instant};
