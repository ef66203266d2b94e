//! 7-segment display drivers

pub mod multiplexed;
pub mod shift_register;

pub use multiplexed::MultiplexedDisplay;
pub use shift_register::{SegmentRegister, ShiftRegister};
