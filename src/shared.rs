//! Single lock around the strip and engine for multi-context hosts.
//!
//! Every access runs inside one critical section, so a whole tick is one
//! mutual-exclusion boundary. Built on `critical-section`, which makes it
//! usable from interrupts and threads alike.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Instant;

use crate::effect::Effect;
use crate::frame_scheduler::{FrameResult, FrameScheduler};
use crate::strip::PixelSink;

/// Value guarded by a critical section.
pub struct Shared<T> {
    inner: Mutex<RefCell<T>>,
}

impl<T> Shared<T> {
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(value)),
        }
    }

    /// Run `f` with exclusive access to the value.
    ///
    /// Must not be called again from inside `f`.
    pub fn lock<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        critical_section::with(|cs| {
            let mut value = self.inner.borrow(cs).borrow_mut();
            f(&mut value)
        })
    }

    pub fn into_inner(self) -> T {
        self.inner.into_inner().into_inner()
    }
}

impl<S: PixelSink, E: Effect, const N: usize> Shared<FrameScheduler<S, E, N>> {
    /// Run one scheduler tick under the lock
    pub fn tick(&self, now: Instant) -> FrameResult {
        self.lock(|scheduler| scheduler.tick(now))
    }
}
