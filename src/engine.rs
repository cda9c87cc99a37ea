//! Effect registry and per-tick dispatch

#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::Vec;

use crate::effect::{Effect, EffectSlot};
use crate::error::{Error, Result};
use crate::strip::{PixelSink, Strip, StripMode};

/// Default number of effects an engine can hold
pub const DEFAULT_CAPACITY: usize = 8;

/// Effect engine - owns registered effects and runs the active one
///
/// Registered effects keep their index for the lifetime of the engine.
/// The engine never owns the strip, the caller lends it on every update.
#[derive(Debug)]
pub struct EffectEngine<E = EffectSlot, const N: usize = DEFAULT_CAPACITY> {
    effects: Vec<E, N>,
    active: Option<usize>,
    needs_setup: bool,
}

impl<E: Effect, const N: usize> Default for EffectEngine<E, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Effect, const N: usize> EffectEngine<E, N> {
    pub const fn new() -> Self {
        Self {
            effects: Vec::new(),
            active: None,
            needs_setup: false,
        }
    }

    /// Register an effect and return its index
    pub fn add_effect(&mut self, effect: impl Into<E>) -> Result<usize> {
        let index = self.effects.len();
        self.effects
            .push(effect.into())
            .map_err(|_| Error::EngineFull { capacity: N })?;
        Ok(index)
    }

    /// Select the effect to run, `None` stops effect updates
    ///
    /// The index is not validated here; an index with no effect behind it
    /// makes [`EffectEngine::update`] do nothing. The selected effect's
    /// `setup` runs on the next update.
    pub fn set_active_effect(&mut self, index: Option<usize>) {
        #[cfg(feature = "esp32-log")]
        {
            if let Some(index) = index.filter(|&index| index >= self.effects.len()) {
                println!(
                    "[EffectEngine.set_active_effect] no effect at index {} ({} registered)",
                    index,
                    self.effects.len()
                );
            }
        }
        self.active = index;
        self.needs_setup = index.is_some();
    }

    pub const fn active_effect(&self) -> Option<usize> {
        self.active
    }

    pub fn active(&self) -> Option<&E> {
        self.active.and_then(|index| self.effects.get(index))
    }

    pub fn effect(&self, index: usize) -> Option<&E> {
        self.effects.get(index)
    }

    pub fn effect_mut(&mut self, index: usize) -> Option<&mut E> {
        self.effects.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Run one tick of the active effect
    ///
    /// Does nothing when no effect is active or the active index has no
    /// effect behind it. Flushing the strip is left to the caller.
    pub fn update<S: PixelSink>(&mut self, strip: &mut Strip<S>) {
        let Some(index) = self.active else {
            return;
        };
        let Some(effect) = self.effects.get_mut(index) else {
            return;
        };

        if self.needs_setup {
            effect.setup(strip);
            self.needs_setup = false;
        }
        effect.update(strip);
        strip.set_mode(StripMode::Effect);
    }
}
