//! DHT11 temperature/humidity sensor
//!
//! The single-wire protocol is handled by `embedded-dht-rs`; this adapter
//! maps its readings onto [`ClimateSensor`].
//!
//! The DHT11 reports whole degrees and whole percent, so readings never
//! carry a fractional part.

use embedded_dht_rs::dht11::Dht11;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use tempest_core::traits::{ClimateSensor, SensorError};

/// Shortest interval between two DHT11 conversions (ms)
pub const DHT11_MIN_SAMPLE_INTERVAL_MS: u32 = 1000;

/// DHT11 on an open-drain data line
///
/// Every read runs a full conversion; the scan loop's dwell time keeps
/// reads at least [`DHT11_MIN_SAMPLE_INTERVAL_MS`] apart.
pub struct Dht11Sensor<P: InputPin + OutputPin, D: DelayNs> {
    dht: Dht11<P, D>,
}

impl<P, D> Dht11Sensor<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    /// Create a sensor on `pin`
    ///
    /// The pin must be configured open-drain with the line idling high.
    pub fn new(pin: P, delay: D) -> Self {
        Self {
            dht: Dht11::new(pin, delay),
        }
    }
}

impl<P, D> ClimateSensor for Dht11Sensor<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    fn read_temperature(&mut self) -> Result<f32, SensorError> {
        let reading = self.dht.read().map_err(|_| SensorError::ReadFailed)?;
        Ok(f32::from(reading.temperature))
    }

    fn read_humidity(&mut self) -> Result<f32, SensorError> {
        let reading = self.dht.read().map_err(|_| SensorError::ReadFailed)?;
        Ok(f32::from(reading.humidity))
    }

    fn minimum_sample_interval_ms(&self) -> u32 {
        DHT11_MIN_SAMPLE_INTERVAL_MS
    }
}
