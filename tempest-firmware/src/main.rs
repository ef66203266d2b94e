//! Tempest - 7-segment weather station firmware
//!
//! Alternates the DHT11 temperature and humidity readings on a 4-digit
//! multiplexed display driven through a 74HC595.
//!
//! The loop is blocking: while a reading is shown the CPU does nothing
//! but refresh the digits.

#![no_std]
#![no_main]

use defmt::*;
use embassy_rp::gpio::{AnyPin, Level, OutputOpenDrain};
use embassy_rp::Peri;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use tempest_core::config::{BoardPins, DisplayTiming, PinError};
use tempest_core::scan::{PhaseOutcome, Station};
use tempest_core::segment::DIGIT_COUNT;
use tempest_core::traits::{ClimateSensor, SegmentDisplay};
use tempest_drivers::display::{MultiplexedDisplay, ShiftRegister};
use tempest_drivers::sensor::Dht11Sensor;
use tempest_hal_rp2040::{pin_bank, EmbassyClock, GpioOutput, RpPinBank};

/// Wiring this binary is built for
const BOARD: BoardPins = BoardPins::WEATHER_STATION;

/// Pins named by [`BOARD`], taken from the bank
struct Pins {
    data: GpioOutput<'static>,
    clock: GpioOutput<'static>,
    latch: GpioOutput<'static>,
    digits: [GpioOutput<'static>; DIGIT_COUNT],
    sensor: Peri<'static, AnyPin>,
}

impl Pins {
    fn take(bank: &mut RpPinBank, board: &BoardPins) -> Result<Self, PinError> {
        Ok(Self {
            data: GpioOutput::take(bank, board.data)?,
            clock: GpioOutput::take(bank, board.clock)?,
            latch: GpioOutput::take(bank, board.latch)?,
            digits: [
                GpioOutput::take(bank, board.digits[0])?,
                GpioOutput::take(bank, board.digits[1])?,
                GpioOutput::take(bank, board.digits[2])?,
                GpioOutput::take(bank, board.digits[3])?,
            ],
            sensor: bank.take(board.sensor)?,
        })
    }
}

#[cortex_m_rt::entry]
fn main() -> ! {
    info!("Tempest firmware starting...");

    if let Err(e) = BOARD.validate() {
        error!("Invalid pin map: {}", e);
        halt();
    }
    info!("Pin map: {}", BOARD);

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let mut bank = pin_bank!(p);
    let pins = match Pins::take(&mut bank, &BOARD) {
        Ok(pins) => pins,
        Err(e) => {
            error!("Cannot take pins: {}", e);
            halt();
        }
    };

    // DHT11 data line idles high through the module's pull-up
    let dht_pin = OutputOpenDrain::new(pins.sensor, Level::High);
    let sensor = Dht11Sensor::new(dht_pin, Delay);

    let timing = DisplayTiming::for_sample_interval(sensor.minimum_sample_interval_ms());

    let register = ShiftRegister::new(pins.data, pins.clock, pins.latch);
    let display = MultiplexedDisplay::new(register, pins.digits, EmbassyClock, Delay, timing);
    info!(
        "Display initialized: sensor interval {} ms, dwell {} ms, settle {} ms/digit",
        sensor.minimum_sample_interval_ms(),
        display.dwell_ms(),
        timing.settle_ms
    );

    let mut station = Station::new(sensor, display);
    loop {
        let outcome = station.step();
        report(&outcome);
    }
}

fn report(outcome: &PhaseOutcome) {
    match outcome.fault {
        Some(fault) => warn!("{}: {}, showing {}", outcome.phase, fault, outcome.text),
        None if outcome.is_overflow() => {
            warn!("{}: reading does not fit, showing {}", outcome.phase, outcome.text)
        }
        None => info!("{}: {}", outcome.phase, outcome.text),
    }
}

/// Park the core after a fatal configuration error
fn halt() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}
