//! GPIO outputs for the display lines

use embassy_rp::gpio::{Level, Output, Pin};
use embassy_rp::Peri;
use tempest_core::config::{PinConfig, PinError};

use crate::pins::RpPinBank;

/// Push-pull output with optional inversion
///
/// When `inverted`, a logical high drives the pad low. Digit enables
/// behind a PNP transistor are wired this way.
pub struct GpioOutput<'d> {
    pin: Output<'d>,
    inverted: bool,
}

impl<'d> GpioOutput<'d> {
    /// Create an output in the logical low state
    pub fn new(pin: Peri<'d, impl Pin>, inverted: bool) -> Self {
        let level = if inverted { Level::High } else { Level::Low };
        Self {
            pin: Output::new(pin, level),
            inverted,
        }
    }

}

impl GpioOutput<'static> {
    /// Take the GPIO named by `config` from the bank
    pub fn take(bank: &mut RpPinBank, config: PinConfig) -> Result<Self, PinError> {
        Ok(Self::new(bank.take(config.pin)?, config.inverted))
    }
}

impl tempest_hal::OutputPin for GpioOutput<'_> {
    fn set_high(&mut self) {
        if self.inverted {
            self.pin.set_low();
        } else {
            self.pin.set_high();
        }
    }

    fn set_low(&mut self) {
        if self.inverted {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high() != self.inverted
    }
}
