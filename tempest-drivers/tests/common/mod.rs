//! Instrumented pin bus for display tests
//!
//! Every pin, the clock and the delay share one `Bus`. The bus models the
//! 74HC595 (shift stage + output latch), tracks which digit lines are
//! driven, advances simulated time on delays and keeps an event log.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use tempest_core::config::DisplayTiming;
use tempest_core::segment::DIGIT_COUNT;
use tempest_drivers::display::{MultiplexedDisplay, ShiftRegister};
use tempest_hal::{Clock, OutputPin};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Digit line driven high
    DigitOn { digit: usize, at_ms: u64 },
    /// Digit line driven low, with the segment outputs it showed
    DigitOff { digit: usize, outputs: u8, at_ms: u64 },
    /// Latch rising edge, with the new outputs
    Commit { outputs: u8, at_ms: u64 },
    /// Shift clock rising edge, with the data bit
    Shift { bit: bool },
}

#[derive(Default)]
pub struct Bus {
    pub now_ms: u64,
    ser: bool,
    srclk: bool,
    rclk: bool,
    /// Bit 7 is QA, which drives segment a
    stage: u8,
    pub outputs: u8,
    pub digits: [bool; DIGIT_COUNT],
    pub max_digits_on: usize,
    pub shifts_while_lit: usize,
    pub events: Vec<Event>,
}

impl Bus {
    fn digits_on(&self) -> usize {
        self.digits.iter().filter(|on| **on).count()
    }

    /// Digit enable order, in the sequence digits were turned on
    pub fn enable_order(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::DigitOn { digit, .. } => Some(*digit),
                _ => None,
            })
            .collect()
    }

    /// (digit, outputs) for every digit that was turned off
    pub fn shown(&self) -> Vec<(usize, u8)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::DigitOff { digit, outputs, .. } => Some((*digit, *outputs)),
                _ => None,
            })
            .collect()
    }
}

pub type SharedBus = Rc<RefCell<Bus>>;

#[derive(Clone, Copy, Debug)]
pub enum Line {
    Ser,
    Srclk,
    Rclk,
    Digit(usize),
}

pub struct BusPin {
    bus: SharedBus,
    line: Line,
}

impl OutputPin for BusPin {
    fn set_high(&mut self) {
        let mut bus = self.bus.borrow_mut();
        let now = bus.now_ms;
        match self.line {
            Line::Ser => bus.ser = true,
            Line::Srclk => {
                if !bus.srclk {
                    let bit = bus.ser;
                    bus.stage = (bus.stage >> 1) | (u8::from(bit) << 7);
                    if bus.digits_on() > 0 {
                        bus.shifts_while_lit += 1;
                    }
                    bus.events.push(Event::Shift { bit });
                }
                bus.srclk = true;
            }
            Line::Rclk => {
                if !bus.rclk {
                    bus.outputs = bus.stage;
                    let outputs = bus.outputs;
                    bus.events.push(Event::Commit { outputs, at_ms: now });
                }
                bus.rclk = true;
            }
            Line::Digit(digit) => {
                if !bus.digits[digit] {
                    bus.events.push(Event::DigitOn { digit, at_ms: now });
                }
                bus.digits[digit] = true;
                let on = bus.digits_on();
                bus.max_digits_on = bus.max_digits_on.max(on);
            }
        }
    }

    fn set_low(&mut self) {
        let mut bus = self.bus.borrow_mut();
        let now = bus.now_ms;
        match self.line {
            Line::Ser => bus.ser = false,
            Line::Srclk => bus.srclk = false,
            Line::Rclk => bus.rclk = false,
            Line::Digit(digit) => {
                if bus.digits[digit] {
                    let outputs = bus.outputs;
                    bus.events.push(Event::DigitOff {
                        digit,
                        outputs,
                        at_ms: now,
                    });
                }
                bus.digits[digit] = false;
            }
        }
    }

    fn is_set_high(&self) -> bool {
        let bus = self.bus.borrow();
        match self.line {
            Line::Ser => bus.ser,
            Line::Srclk => bus.srclk,
            Line::Rclk => bus.rclk,
            Line::Digit(digit) => bus.digits[digit],
        }
    }
}

/// Clock and delay backed by the bus time
pub struct BusTime(pub SharedBus);

impl Clock for BusTime {
    fn now_ms(&self) -> u64 {
        self.0.borrow().now_ms
    }
}

impl DelayNs for BusTime {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().now_ms += u64::from(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().now_ms += u64::from(ms);
    }
}

pub type BusDisplay =
    MultiplexedDisplay<ShiftRegister<BusPin, BusPin, BusPin>, BusPin, BusTime, BusTime>;

fn pin(bus: &SharedBus, line: Line) -> BusPin {
    BusPin {
        bus: Rc::clone(bus),
        line,
    }
}

/// Display wired to a fresh bus, with the construction events cleared
pub fn display(timing: DisplayTiming) -> (BusDisplay, SharedBus) {
    let bus: SharedBus = Rc::new(RefCell::new(Bus::default()));
    let register = ShiftRegister::new(
        pin(&bus, Line::Ser),
        pin(&bus, Line::Srclk),
        pin(&bus, Line::Rclk),
    );
    let digits = [0, 1, 2, 3].map(|d| pin(&bus, Line::Digit(d)));
    let display = MultiplexedDisplay::new(
        register,
        digits,
        BusTime(Rc::clone(&bus)),
        BusTime(Rc::clone(&bus)),
        timing,
    );
    bus.borrow_mut().events.clear();
    (display, bus)
}
