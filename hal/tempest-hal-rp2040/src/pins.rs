//! GPIO pins selected by number
//!
//! [`pin_bank!`](crate::pin_bank) moves every GPIO out of the
//! peripherals into a [`RpPinBank`], so pins can be taken by the numbers
//! in the board pin map.

use embassy_rp::gpio::AnyPin;
use embassy_rp::Peri;
use tempest_core::config::PinBank;

/// Bank of type-erased RP2040 GPIOs
pub type RpPinBank = PinBank<Peri<'static, AnyPin>>;

/// Build an [`RpPinBank`] from `embassy_rp::Peripherals`
///
/// Usage:
/// ```ignore
/// let p = embassy_rp::init(Default::default());
/// let mut bank = pin_bank!(p);
/// let latch = bank.take(10)?;
/// ```
#[macro_export]
macro_rules! pin_bank {
    ($p:expr) => {
        $crate::pins::RpPinBank::new([
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_0),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_1),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_2),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_3),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_4),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_5),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_6),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_7),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_8),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_9),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_10),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_11),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_12),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_13),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_14),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_15),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_16),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_17),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_18),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_19),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_20),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_21),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_22),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_23),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_24),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_25),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_26),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_27),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_28),
            embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_29),
        ])
    };
}
