//! Build-time configuration
//!
//! There is no runtime configuration surface: pin assignments and
//! display timing are constants compiled into the firmware.

pub mod bank;
pub mod board;
pub mod timing;

pub use bank::PinBank;
pub use board::{BoardPins, PinConfig, PinError, GPIO_COUNT};
pub use timing::{DisplayTiming, DIGIT_SETTLE_MS, READABILITY_MARGIN_MS};
