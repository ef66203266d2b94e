//! Monotonic clock from the embassy time driver

use embassy_time::Instant;
use tempest_hal::Clock;

/// Milliseconds since boot
///
/// Requires the `time-driver` feature of `embassy-rp`. The underlying
/// tick counter is 64 bits wide and does not wrap in practice.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
