//! Tempest Hardware Abstraction Layer
//!
//! Traits implemented by chip-specific HALs so the display driver and
//! scan loop can run against real pins or against host-side test doubles.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tempest-firmware / tempest-drivers     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tempest-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ tempest-hal-  │       │  test doubles │
//! │    rp2040     │       │   (host)      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (shift register lines, digit enables)
//! - [`time::Clock`] - Monotonic millisecond clock
//!
//! Blocking delays use `embedded_hal::delay::DelayNs` directly.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod time;

pub use gpio::OutputPin;
pub use time::Clock;
