//! Scan loop
//!
//! Alternates temperature and humidity forever, each shown for the
//! display's full dwell time.

pub mod phase;
pub mod station;

pub use phase::ScanPhase;
pub use station::{PhaseOutcome, Station};
