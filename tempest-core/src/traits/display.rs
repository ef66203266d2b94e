//! Segment display trait

use crate::segment::DisplayString;

/// A display that shows four characters for a fixed dwell time
///
/// Implementations own every line that drives the display; nothing else
/// may toggle them.
pub trait SegmentDisplay {
    /// Show `text`, blocking for the whole dwell time
    fn show(&mut self, text: &DisplayString);

    /// How long one [`show`](SegmentDisplay::show) call lasts, in ms
    fn dwell_ms(&self) -> u32;
}

impl<D: SegmentDisplay + ?Sized> SegmentDisplay for &mut D {
    fn show(&mut self, text: &DisplayString) {
        (**self).show(text);
    }

    fn dwell_ms(&self) -> u32 {
        (**self).dwell_ms()
    }
}
