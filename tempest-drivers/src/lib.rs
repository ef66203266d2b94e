//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in tempest-core:
//!
//! - 74HC595 shift register
//! - Multiplexed 4-digit 7-segment display
//! - DHT11 temperature/humidity sensor

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod sensor;
