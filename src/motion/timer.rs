//! Non-blocking delay timer and the clock it reads.

use core::cell::Cell;

/// Monotonic millisecond clock.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed origin.
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Clock advanced by hand, for tests and offline simulation.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    /// Create a clock reading zero.
    pub const fn new() -> Self {
        Self { now: Cell::new(0) }
    }

    /// Move the clock forward.
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    /// Jump to an absolute reading.
    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Wall clock backed by [`std::time::Instant`].
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl SystemClock {
    /// Create a clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Pause timer polled from the control tick.
///
/// Never blocks: [`is_still_delayed`](Self::is_still_delayed) only compares
/// readings. A timer that was never started is not delayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DelayTimer {
    started_at: Option<u64>,
    duration_ms: u32,
}

impl DelayTimer {
    /// Create an idle timer with the given duration.
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            started_at: None,
            duration_ms,
        }
    }

    /// Start (or restart) the pause at `now_ms`.
    #[inline]
    pub fn start(&mut self, now_ms: u64) {
        self.started_at = Some(now_ms);
    }

    /// Change the pause length; applies to a running pause as well.
    #[inline]
    pub fn update(&mut self, duration_ms: u32) {
        self.duration_ms = duration_ms;
    }

    /// Current pause length.
    #[inline]
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// True while less than the duration has elapsed since `start`.
    pub fn is_still_delayed(&self, now_ms: u64) -> bool {
        match self.started_at {
            Some(start) => now_ms.saturating_sub(start) < u64::from(self.duration_ms),
            None => false,
        }
    }
}
