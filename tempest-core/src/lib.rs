//! Board-agnostic core logic for the weather station firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Segment encoding table and character lookup
//! - Fixed-width display strings
//! - Reading formatter (sensor value -> 4 display characters)
//! - Hardware abstraction traits (sensor, segment display)
//! - Build-time configuration (pin map, display timing)
//! - Scan loop alternating temperature and humidity

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod reading;
pub mod scan;
pub mod segment;
pub mod traits;

pub use reading::{format_reading, Quantity};
pub use segment::{lookup, DigitPosition, DisplayString, SegmentMask};
