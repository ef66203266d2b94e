//! Monotonic time source
//!
//! Paired with `embedded_hal::delay::DelayNs` for blocking waits.

/// Monotonic millisecond clock
///
/// Counts from an arbitrary epoch (normally boot) and never goes backwards.
/// 64 bits so deadline arithmetic never has to handle wrap-around.
pub trait Clock {
    /// Milliseconds elapsed since the clock's epoch
    fn now_ms(&self) -> u64;

    /// Deadline `duration_ms` from now
    fn deadline_after(&self, duration_ms: u32) -> u64 {
        self.now_ms().saturating_add(u64::from(duration_ms))
    }

    /// Check whether `deadline` has been reached
    fn has_passed(&self, deadline: u64) -> bool {
        self.now_ms() >= deadline
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}
