//! Sensor drivers

pub mod dht11;

pub use dht11::{Dht11Sensor, DHT11_MIN_SAMPLE_INTERVAL_MS};
