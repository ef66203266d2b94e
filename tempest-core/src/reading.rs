//! Reading formatter
//!
//! Turns a sensor result into the four characters shown on the display:
//!
//! | reading                   | shown  |
//! |---------------------------|--------|
//! | 23.7 °C                   | `23dC` |
//! | 5.2 °C                    | `5dC ` |
//! | -4.9 °C                   | `-4dC` |
//! | 57.9 %RH                  | `57PC` |
//! | sensor fault / NaN        | `Err0` |
//! | does not fit (100 %RH)    | `Err1` |
//!
//! Values are truncated toward zero, not rounded.

use core::fmt::Write;

use heapless::String;

use crate::segment::{DisplayString, DIGIT_COUNT};
use crate::traits::SensorError;

/// Which sensor channel a reading came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quantity {
    /// Degrees Celsius
    Temperature,
    /// Percent relative humidity
    Humidity,
}

impl Quantity {
    /// Two-character unit suffix
    pub const fn suffix(self) -> &'static str {
        match self {
            // Degree symbol followed by C
            Quantity::Temperature => "dC",
            // "PC" stands in for a percent sign
            Quantity::Humidity => "PC",
        }
    }
}

/// Format a sensor result for display
pub fn format_reading(quantity: Quantity, reading: Result<f32, SensorError>) -> DisplayString {
    match reading {
        Ok(value) if !value.is_nan() => format_value(quantity, value),
        _ => DisplayString::SENSOR_FAULT,
    }
}

/// Format a valid value, falling back to the overflow indicator
fn format_value(quantity: Quantity, value: f32) -> DisplayString {
    if !value.is_finite() {
        return DisplayString::OVERFLOW;
    }

    // `as` truncates toward zero and saturates; anything near the
    // saturation bounds overflows the buffer below anyway
    let whole = value as i32;

    // Longest i32 plus suffix is 13 bytes
    let mut buf: String<16> = String::new();
    if write!(buf, "{}{}", whole, quantity.suffix()).is_err() || buf.len() > DIGIT_COUNT {
        return DisplayString::OVERFLOW;
    }

    DisplayString::padded(&buf).unwrap_or(DisplayString::OVERFLOW)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_temperature() {
        assert_eq!(format_reading(Quantity::Temperature, Ok(23.7)).as_str(), "23dC");
        assert_eq!(format_reading(Quantity::Temperature, Ok(5.2)).as_str(), "5dC ");
        assert_eq!(format_reading(Quantity::Temperature, Ok(0.0)).as_str(), "0dC ");
        assert_eq!(format_reading(Quantity::Temperature, Ok(99.99)).as_str(), "99dC");
    }

    #[test]
    fn test_negative_temperature() {
        assert_eq!(format_reading(Quantity::Temperature, Ok(-4.9)).as_str(), "-4dC");
        assert_eq!(format_reading(Quantity::Temperature, Ok(-9.0)).as_str(), "-9dC");
        // Truncation toward zero drops the sign
        assert_eq!(format_reading(Quantity::Temperature, Ok(-0.6)).as_str(), "0dC ");
    }

    #[test]
    fn test_humidity() {
        assert_eq!(format_reading(Quantity::Humidity, Ok(57.9)).as_str(), "57PC");
        assert_eq!(format_reading(Quantity::Humidity, Ok(8.0)).as_str(), "8PC ");
    }

    #[test]
    fn test_sensor_fault() {
        assert_eq!(
            format_reading(Quantity::Temperature, Err(SensorError::NotANumber)),
            DisplayString::SENSOR_FAULT
        );
        assert_eq!(
            format_reading(Quantity::Humidity, Err(SensorError::ReadFailed)),
            DisplayString::SENSOR_FAULT
        );
        assert_eq!(
            format_reading(Quantity::Temperature, Ok(f32::NAN)).as_str(),
            "Err0"
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            format_reading(Quantity::Humidity, Ok(100.0)),
            DisplayString::OVERFLOW
        );
        assert_eq!(
            format_reading(Quantity::Temperature, Ok(-10.0)),
            DisplayString::OVERFLOW
        );
        assert_eq!(
            format_reading(Quantity::Temperature, Ok(f32::INFINITY)),
            DisplayString::OVERFLOW
        );
        assert_eq!(
            format_reading(Quantity::Temperature, Ok(f32::MAX)),
            DisplayString::OVERFLOW
        );
        assert_eq!(DisplayString::OVERFLOW.as_str(), "Err1");
    }

    proptest! {
        #[test]
        fn prop_temperature_in_range(value in -9.99f32..99.99f32) {
            let text = format_reading(Quantity::Temperature, Ok(value));
            let shown = text.trimmed();
            let whole = value as i32;

            prop_assert!(shown.len() <= DIGIT_COUNT);
            prop_assert!(shown.ends_with("dC"));
            prop_assert_eq!(shown.trim_end_matches("dC").parse::<i32>().ok(), Some(whole));
        }

        #[test]
        fn prop_humidity_in_range(value in 0.0f32..99.99f32) {
            let text = format_reading(Quantity::Humidity, Ok(value));
            let shown = text.trimmed();

            prop_assert!(shown.len() <= DIGIT_COUNT);
            prop_assert!(shown.ends_with("PC"));
            prop_assert_eq!(shown.trim_end_matches("PC").parse::<i32>().ok(), Some(value as i32));
        }

        #[test]
        fn prop_failures_show_err0(humidity in any::<bool>(), failed in any::<bool>()) {
            let quantity = if humidity { Quantity::Humidity } else { Quantity::Temperature };
            let error = if failed { SensorError::ReadFailed } else { SensorError::NotANumber };
            let text = format_reading(quantity, Err(error));
            prop_assert_eq!(text.as_str(), "Err0");
        }

        #[test]
        fn prop_output_is_always_four_known_slots(value in any::<f32>()) {
            let text = format_reading(Quantity::Temperature, Ok(value));
            prop_assert_eq!(text.as_str().len(), DIGIT_COUNT);
        }
    }
}
