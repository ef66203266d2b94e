//! Temperature/humidity sensor trait

use core::fmt;

/// Errors that can occur reading the sensor
///
/// Every variant is shown the same way (`Err0`); they are kept apart
/// for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Transducer answered but produced no number
    NotANumber,
    /// Communication with the transducer failed (timeout, checksum, bus)
    ReadFailed,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::NotANumber => f.write_str("sensor returned not-a-number"),
            SensorError::ReadFailed => f.write_str("sensor read failed"),
        }
    }
}

/// Combined temperature and relative humidity sensor
///
/// Takes `&mut self` because each read drives the sensor's data line.
pub trait ClimateSensor {
    /// Read the temperature in degrees Celsius
    fn read_temperature(&mut self) -> Result<f32, SensorError>;

    /// Read the relative humidity in percent
    fn read_humidity(&mut self) -> Result<f32, SensorError>;

    /// Shortest time between two reads the sensor tolerates, in ms
    fn minimum_sample_interval_ms(&self) -> u32;
}

impl<S: ClimateSensor + ?Sized> ClimateSensor for &mut S {
    fn read_temperature(&mut self) -> Result<f32, SensorError> {
        (**self).read_temperature()
    }

    fn read_humidity(&mut self) -> Result<f32, SensorError> {
        (**self).read_humidity()
    }

    fn minimum_sample_interval_ms(&self) -> u32 {
        (**self).minimum_sample_interval_ms()
    }
}
