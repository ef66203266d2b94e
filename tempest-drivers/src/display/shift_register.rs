//! 74HC595 serial-in, parallel-out shift register
//!
//! Three lines drive the chip:
//!
//! - SER (data): level of the next bit
//! - SRCLK (clock): rising edge shifts SER in
//! - RCLK (latch): rising edge copies the shift stage to the outputs
//!
//! While the latch is low the outputs keep showing the last committed
//! byte, so shifting never disturbs what is currently lit.

use tempest_hal::OutputPin;

/// Register that feeds segment bitmaps to the display
pub trait SegmentRegister {
    /// Pull the latch low so shifted bits are not yet visible
    fn hold(&mut self);

    /// Shift one byte in, least significant bit first
    fn shift_out(&mut self, byte: u8);

    /// Raise the latch, copying the shifted byte to the outputs
    fn commit(&mut self);

    /// Shift and commit one byte
    fn write(&mut self, byte: u8) {
        self.hold();
        self.shift_out(byte);
        self.commit();
    }
}

/// Bit-banged 74HC595
pub struct ShiftRegister<DS, SH, ST> {
    data: DS,
    clock: SH,
    latch: ST,
}

impl<DS: OutputPin, SH: OutputPin, ST: OutputPin> ShiftRegister<DS, SH, ST> {
    /// Create a shift register driver
    ///
    /// All three lines start low.
    pub fn new(data: DS, clock: SH, latch: ST) -> Self {
        let mut register = Self { data, clock, latch };
        register.data.set_low();
        register.clock.set_low();
        register.latch.set_low();
        register
    }

    /// Release the pins
    pub fn release(self) -> (DS, SH, ST) {
        (self.data, self.clock, self.latch)
    }
}

impl<DS: OutputPin, SH: OutputPin, ST: OutputPin> SegmentRegister for ShiftRegister<DS, SH, ST> {
    fn hold(&mut self) {
        self.latch.set_low();
    }

    fn shift_out(&mut self, byte: u8) {
        for bit in 0..8 {
            self.data.set_state(byte & (1 << bit) != 0);
            self.clock.pulse();
        }
    }

    fn commit(&mut self) {
        self.latch.set_high();
    }
}
