//! Hardware abstraction traits
//!
//! These traits define the interface between the scan loop and the
//! concrete sensor and display drivers.

pub mod display;
pub mod sensor;

pub use display::SegmentDisplay;
pub use sensor::{ClimateSensor, SensorError};
