//! Display timing

/// Extra time each reading stays up so it can be read comfortably
pub const READABILITY_MARGIN_MS: u32 = 1000;

/// How long each digit stays lit per frame
///
/// Four digits at 5 ms is a 20 ms frame, about 50 Hz refresh.
pub const DIGIT_SETTLE_MS: u32 = 5;

/// Timing shared by every display operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayTiming {
    /// How long one reading is shown (ms)
    pub dwell_ms: u32,
    /// How long each digit is lit per frame (ms)
    pub settle_ms: u32,
}

impl DisplayTiming {
    /// Timing for a sensor with the given minimum sample interval
    ///
    /// Showing a reading for at least the sample interval means the next
    /// read never comes too early.
    pub const fn for_sample_interval(min_interval_ms: u32) -> Self {
        Self {
            dwell_ms: min_interval_ms.saturating_add(READABILITY_MARGIN_MS),
            settle_ms: DIGIT_SETTLE_MS,
        }
    }

    /// Duration of one pass over all four digits (ms)
    pub const fn frame_ms(&self) -> u32 {
        self.settle_ms.saturating_mul(crate::segment::DIGIT_COUNT as u32)
    }
}
