//! Multiplexed 4-digit 7-segment display
//!
//! All four digits share the segment lines from the shift register; each
//! digit has its own enable line. Only one digit is ever enabled, and the
//! driver cycles through them fast enough that they appear lit together.
//!
//! Per digit, in order:
//!
//! 1. latch low
//! 2. shift the digit's bitmap in (LSB first)
//! 3. enable the digit
//! 4. latch high (bitmap reaches the segments)
//! 5. hold for the settle time
//! 6. disable the digit
//!
//! The bitmap is shifted while every digit is off, so the previous digit's
//! pattern never bleeds onto the next one (ghosting).

use embedded_hal::delay::DelayNs;
use tempest_core::config::DisplayTiming;
use tempest_core::segment::{DigitPosition, DisplayString, SegmentMask, DIGIT_COUNT};
use tempest_core::traits::SegmentDisplay;
use tempest_hal::{Clock, OutputPin};

use super::shift_register::SegmentRegister;

/// Software-multiplexed display
///
/// Owns the segment register, the digit enable lines, a clock for the
/// dwell deadline and a delay for the per-digit settle time.
pub struct MultiplexedDisplay<R, P, C, D> {
    register: R,
    digits: [P; DIGIT_COUNT],
    clock: C,
    delay: D,
    timing: DisplayTiming,
}

impl<R, P, C, D> MultiplexedDisplay<R, P, C, D>
where
    R: SegmentRegister,
    P: OutputPin,
    C: Clock,
    D: DelayNs,
{
    /// Create a display driver
    ///
    /// `digits` are ordered by text position. The display starts blank with
    /// every digit disabled.
    pub fn new(
        register: R,
        digits: [P; DIGIT_COUNT],
        clock: C,
        delay: D,
        timing: DisplayTiming,
    ) -> Self {
        let mut display = Self {
            register,
            digits,
            clock,
            delay,
            timing,
        };
        display.blank();
        display
    }

    /// Timing used by [`show`](SegmentDisplay::show)
    pub fn timing(&self) -> DisplayTiming {
        self.timing
    }

    /// Disable every digit and clear the segment outputs
    pub fn blank(&mut self) {
        for digit in &mut self.digits {
            digit.set_low();
        }
        self.register.write(SegmentMask::BLANK.bits());
    }

    /// Draw each digit once, 0 to 3
    ///
    /// Takes four settle times.
    pub fn render_frame(&mut self, text: &DisplayString) {
        for position in DigitPosition::ALL {
            self.render_digit(position, text.mask_at(position));
        }
    }

    /// Redraw `text` until `duration_ms` has elapsed
    ///
    /// The deadline is checked between frames, so the call can overrun
    /// by up to one frame.
    pub fn show_for(&mut self, text: &DisplayString, duration_ms: u32) {
        let deadline = self.clock.deadline_after(duration_ms);
        while !self.clock.has_passed(deadline) {
            self.render_frame(text);
        }
    }

    /// Release the hardware
    pub fn release(self) -> (R, [P; DIGIT_COUNT], C, D) {
        (self.register, self.digits, self.clock, self.delay)
    }

    fn render_digit(&mut self, position: DigitPosition, mask: SegmentMask) {
        let digit = &mut self.digits[position.index()];

        self.register.hold();
        self.register.shift_out(mask.bits());
        digit.set_high();
        self.register.commit();

        self.delay.delay_ms(self.timing.settle_ms);

        digit.set_low();
    }
}

impl<R, P, C, D> SegmentDisplay for MultiplexedDisplay<R, P, C, D>
where
    R: SegmentRegister,
    P: OutputPin,
    C: Clock,
    D: DelayNs,
{
    fn show(&mut self, text: &DisplayString) {
        self.show_for(text, self.timing.dwell_ms);
    }

    fn dwell_ms(&self) -> u32 {
        self.timing.dwell_ms
    }
}
