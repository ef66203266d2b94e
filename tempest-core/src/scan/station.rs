//! Weather station scan loop

use crate::reading::format_reading;
use crate::segment::DisplayString;
use crate::traits::{ClimateSensor, SegmentDisplay, SensorError};

use super::phase::ScanPhase;

/// Result of one scan phase, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseOutcome {
    /// Phase that was shown
    pub phase: ScanPhase,
    /// Text that was shown
    pub text: DisplayString,
    /// Sensor error, if the reading failed
    pub fault: Option<SensorError>,
}

impl PhaseOutcome {
    /// Check if the reading did not fit the display
    pub fn is_overflow(&self) -> bool {
        self.text == DisplayString::OVERFLOW
    }
}

/// Sensor and display, driven in alternating phases
///
/// Each phase reads one value, formats it and shows it for the display's
/// dwell time. Nothing interrupts a phase once it has started.
pub struct Station<S, D> {
    sensor: S,
    display: D,
    phase: ScanPhase,
}

impl<S: ClimateSensor, D: SegmentDisplay> Station<S, D> {
    /// Create a station starting with the temperature phase
    pub fn new(sensor: S, display: D) -> Self {
        Self {
            sensor,
            display,
            phase: ScanPhase::FIRST,
        }
    }

    /// Phase the next [`step`](Self::step) will run
    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    /// Get access to the underlying sensor
    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Get access to the underlying display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Release the sensor and display
    pub fn into_parts(self) -> (S, D) {
        (self.sensor, self.display)
    }

    /// Run one phase: read, format, show, advance
    ///
    /// Blocks for the display's dwell time.
    pub fn step(&mut self) -> PhaseOutcome {
        let phase = self.phase;
        let reading = match phase {
            ScanPhase::Temperature => self.sensor.read_temperature(),
            ScanPhase::Humidity => self.sensor.read_humidity(),
        };
        let reading = reading.and_then(|value| {
            if value.is_nan() {
                Err(SensorError::NotANumber)
            } else {
                Ok(value)
            }
        });

        let text = format_reading(phase.quantity(), reading);
        self.display.show(&text);
        self.phase = phase.next();

        PhaseOutcome {
            phase,
            text,
            fault: reading.err(),
        }
    }
}
