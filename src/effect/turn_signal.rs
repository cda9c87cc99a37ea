//! Sequential turn signal
//!
//! Lights one more pixel per tick from the chosen side until the strip is
//! full, holds, goes dark, and starts over.

use super::Effect;
use crate::{
    color::Rgb,
    strip::{PixelSink, Strip},
};

const AMBER: Rgb = Rgb {
    r: 255,
    g: 120,
    b: 0,
};
const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

const DEFAULT_HOLD_TICKS: u16 = 20;
const DEFAULT_OFF_TICKS: u16 = 20;

/// Side the sweep runs toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnSide {
    /// Sweep from the last pixel toward pixel 0
    Left,
    /// Sweep from pixel 0 toward the last pixel
    #[default]
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignalPhase {
    Sweep,
    Hold,
    Dark,
}

#[derive(Debug, Clone)]
pub struct TurnSignalEffect {
    color: Rgb,
    side: TurnSide,
    hold_ticks: u16,
    off_ticks: u16,

    phase: SignalPhase,
    lit: usize,
    ticks: u16,
}

impl Default for TurnSignalEffect {
    fn default() -> Self {
        Self {
            color: AMBER,
            side: TurnSide::Right,
            hold_ticks: DEFAULT_HOLD_TICKS,
            off_ticks: DEFAULT_OFF_TICKS,
            phase: SignalPhase::Sweep,
            lit: 0,
            ticks: 0,
        }
    }
}

impl TurnSignalEffect {
    #[must_use]
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_side(mut self, side: TurnSide) -> Self {
        self.side = side;
        self
    }

    /// Set how many ticks the full strip stays lit and then stays dark.
    /// Each stage lasts at least one tick.
    #[must_use]
    pub fn with_timing(mut self, hold_ticks: u16, off_ticks: u16) -> Self {
        self.hold_ticks = hold_ticks;
        self.off_ticks = off_ticks;
        self
    }

    /// Number of pixels lit by the last update
    pub const fn lit(&self) -> usize {
        self.lit
    }

    fn enter(&mut self, phase: SignalPhase) {
        self.phase = phase;
        self.ticks = 0;
        if phase == SignalPhase::Sweep {
            self.lit = 0;
        }
    }

    /// Advance the state machine by one tick, returning the number of pixels
    /// to light
    fn advance(&mut self, length: usize) -> usize {
        match self.phase {
            SignalPhase::Sweep => {
                self.lit = (self.lit + 1).min(length);
                let lit = self.lit;
                if lit >= length {
                    self.enter(SignalPhase::Hold);
                }
                lit
            }
            SignalPhase::Hold => {
                self.ticks = self.ticks.saturating_add(1);
                if self.ticks >= self.hold_ticks {
                    self.enter(SignalPhase::Dark);
                }
                length
            }
            SignalPhase::Dark => {
                self.lit = 0;
                self.ticks = self.ticks.saturating_add(1);
                if self.ticks >= self.off_ticks {
                    self.enter(SignalPhase::Sweep);
                }
                0
            }
        }
    }
}

impl Effect for TurnSignalEffect {
    fn update<S: PixelSink>(&mut self, strip: &mut Strip<S>) {
        let length = strip.len();
        let lit = self.advance(length);
        let (color, side) = (self.color, self.side);

        strip.fill_with(|index| {
            let is_lit = match side {
                TurnSide::Right => index < lit,
                TurnSide::Left => index >= length - lit,
            };
            if is_lit { color } else { BLACK }
        });
    }

    fn reset(&mut self) {
        self.enter(SignalPhase::Sweep);
    }
}
