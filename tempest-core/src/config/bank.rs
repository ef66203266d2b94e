//! Pins handed out by number
//!
//! The firmware moves every GPIO into a [`PinBank`] once, then takes the
//! pins named in [`BoardPins`](super::BoardPins). A pin can be taken
//! only once, so the pin map and the peripherals actually driven cannot
//! drift apart.

use super::board::{PinError, GPIO_COUNT};

/// Slot per GPIO, emptied as pins are taken
pub struct PinBank<P> {
    pins: [Option<P>; GPIO_COUNT as usize],
}

impl<P> PinBank<P> {
    /// Create a bank holding every GPIO, indexed by pin number
    pub fn new(pins: [P; GPIO_COUNT as usize]) -> Self {
        Self {
            pins: pins.map(Some),
        }
    }

    /// Take pin `pin` out of the bank
    pub fn take(&mut self, pin: u8) -> Result<P, PinError> {
        let slot = self
            .pins
            .get_mut(usize::from(pin))
            .ok_or(PinError::OutOfRange(pin))?;
        slot.take().ok_or(PinError::Conflict(pin))
    }

    /// Check if `pin` is still in the bank
    pub fn is_available(&self, pin: u8) -> bool {
        matches!(self.pins.get(usize::from(pin)), Some(Some(_)))
    }
}
