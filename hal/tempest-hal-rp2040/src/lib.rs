//! RP2040-specific HAL for the weather station
//!
//! Implements the shared `tempest-hal` traits on top of `embassy-rp`:
//!
//! - [`gpio::GpioOutput`] - push-pull output honouring the board's
//!   inverted flag
//! - [`pins::RpPinBank`] - GPIOs taken by pin number
//! - [`time::EmbassyClock`] - millisecond clock backed by the embassy
//!   time driver

#![no_std]

pub mod gpio;
pub mod pins;
pub mod time;

pub use gpio::GpioOutput;
pub use pins::RpPinBank;
pub use time::EmbassyClock;
