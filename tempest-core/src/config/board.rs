//! Board pin map
//!
//! Wiring of the weather station:
//!
//! ```text
//!  GPIO2  ── DHT11 data
//!  GPIO4  ── digit 0 (1st char)  ┐
//!  GPIO5  ── digit 1 (2nd char)  │ via NPN transistors,
//!  GPIO6  ── digit 2 (3rd char)  │ high = digit on
//!  GPIO7  ── digit 3 (4th char)  ┘
//!  GPIO8  ── 74HC595 SER   (pin 14)
//!  GPIO9  ── 74HC595 SRCLK (pin 11)
//!  GPIO10 ── 74HC595 RCLK  (pin 12)
//! ```

use core::fmt;

use crate::segment::DIGIT_COUNT;

/// Number of user GPIO pins on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// Errors in a pin map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number does not exist on the chip
    OutOfRange(u8),
    /// Pin assigned to more than one function
    Conflict(u8),
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinError::OutOfRange(pin) => write!(f, "GPIO{} does not exist", pin),
            PinError::Conflict(pin) => write!(f, "GPIO{} assigned twice", pin),
        }
    }
}

/// Output pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
}

impl PinConfig {
    /// Create an active-high pin
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }
}

/// Every pin the firmware drives or reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardPins {
    /// Shift register serial data (SER / DS)
    pub data: PinConfig,
    /// Shift register clock (SRCLK / SHCP)
    pub clock: PinConfig,
    /// Storage register clock (RCLK / STCP)
    pub latch: PinConfig,
    /// Digit enables, by text position
    pub digits: [PinConfig; DIGIT_COUNT],
    /// Sensor data line
    pub sensor: u8,
}

impl BoardPins {
    /// Reference wiring
    pub const WEATHER_STATION: BoardPins = BoardPins {
        data: PinConfig::new(8),
        clock: PinConfig::new(9),
        latch: PinConfig::new(10),
        digits: [
            PinConfig::new(4),
            PinConfig::new(5),
            PinConfig::new(6),
            PinConfig::new(7),
        ],
        sensor: 2,
    };

    /// Check that every pin exists and is used once
    pub fn validate(&self) -> Result<(), PinError> {
        let mut used: u32 = 0;
        for pin in self.all_pins() {
            if pin >= GPIO_COUNT {
                return Err(PinError::OutOfRange(pin));
            }
            let mask = 1u32 << pin;
            if used & mask != 0 {
                return Err(PinError::Conflict(pin));
            }
            used |= mask;
        }
        Ok(())
    }

    /// All assigned pin numbers, sensor last
    pub fn all_pins(&self) -> [u8; DIGIT_COUNT + 4] {
        let [d0, d1, d2, d3] = self.digits;
        [
            self.data.pin,
            self.clock.pin,
            self.latch.pin,
            d0.pin,
            d1.pin,
            d2.pin,
            d3.pin,
            self.sensor,
        ]
    }
}

impl Default for BoardPins {
    fn default() -> Self {
        Self::WEATHER_STATION
    }
}
