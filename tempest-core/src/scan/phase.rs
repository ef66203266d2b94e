//! Scan phases

use crate::reading::Quantity;

/// What the scan loop is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanPhase {
    Temperature,
    Humidity,
}

impl ScanPhase {
    /// Phase the loop starts in
    pub const FIRST: ScanPhase = ScanPhase::Temperature;

    /// Phase that follows this one
    pub const fn next(self) -> Self {
        match self {
            ScanPhase::Temperature => ScanPhase::Humidity,
            ScanPhase::Humidity => ScanPhase::Temperature,
        }
    }

    /// Sensor channel read in this phase
    pub const fn quantity(self) -> Quantity {
        match self {
            ScanPhase::Temperature => Quantity::Temperature,
            ScanPhase::Humidity => Quantity::Humidity,
        }
    }
}
