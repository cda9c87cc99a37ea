//! Frame scheduling and timing utilities.
//!
//! Provides portable tick pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between ticks.

use embassy_time::{Duration, Instant};

use crate::effect::{Effect, EffectSlot};
use crate::engine::{DEFAULT_CAPACITY, EffectEngine};
use crate::strip::{PixelSink, Strip};

/// Default tick duration (100 updates per second).
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(10);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable control loop step that manages timing without async.
///
/// Each tick runs the active effect against the strip and flushes the strip
/// to the hardware, then reports how long to sleep. Manual writes through
/// [`FrameScheduler::strip_mut`] land in the same buffer, so switch the
/// engine off with `set_active_effect(None)` before drawing by hand.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(strip, engine);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
#[derive(Debug)]
pub struct FrameScheduler<S, E = EffectSlot, const N: usize = DEFAULT_CAPACITY> {
    strip: Strip<S>,
    engine: EffectEngine<E, N>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<S: PixelSink, E: Effect, const N: usize> FrameScheduler<S, E, N> {
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (10 ms) for tick timing.
    pub fn new(strip: Strip<S>, engine: EffectEngine<E, N>) -> Self {
        Self::with_frame_duration(strip, engine, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        strip: Strip<S>,
        engine: EffectEngine<E, N>,
        frame_duration: Duration,
    ) -> Self {
        Self {
            strip,
            engine,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one tick and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Fallen more than two frames behind: skip the backlog instead of
        // catching up in a burst
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        self.engine.update(&mut self.strip);
        self.strip.flush();

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    pub fn strip(&self) -> &Strip<S> {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut Strip<S> {
        &mut self.strip
    }

    pub fn engine(&self) -> &EffectEngine<E, N> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut EffectEngine<E, N> {
        &mut self.engine
    }

    pub fn into_parts(self) -> (Strip<S>, EffectEngine<E, N>) {
        (self.strip, self.engine)
    }
}
