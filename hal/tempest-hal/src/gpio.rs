//! GPIO output abstraction
//!
//! The display only ever drives pins, so there is no input counterpart here.

/// Digital output pin
///
/// Writes are infallible: every target this firmware runs on drives GPIO
/// through a register write that cannot fail.
pub trait OutputPin {
    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to `high`
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently driven low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }

    /// Drive a rising then falling edge
    fn pulse(&mut self) {
        self.set_high();
        self.set_low();
    }
}

impl<P: OutputPin + ?Sized> OutputPin for &mut P {
    fn set_high(&mut self) {
        (**self).set_high();
    }

    fn set_low(&mut self) {
        (**self).set_low();
    }

    fn is_set_high(&self) -> bool {
        (**self).is_set_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        high: bool,
        edges: u8,
    }

    impl OutputPin for Recorder {
        fn set_high(&mut self) {
            if !self.high {
                self.edges += 1;
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            if self.high {
                self.edges += 1;
            }
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_set_state() {
        let mut pin = Recorder { high: false, edges: 0 };
        pin.set_state(true);
        assert!(pin.is_set_high());
        pin.set_state(false);
        assert!(pin.is_set_low());
    }

    #[test]
    fn test_pulse_leaves_pin_low() {
        let mut pin = Recorder { high: false, edges: 0 };
        pin.pulse();
        assert!(pin.is_set_low());
        assert_eq!(pin.edges, 2);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn drive<P: OutputPin>(mut pin: P) {
            pin.set_high();
        }

        let mut pin = Recorder { high: false, edges: 0 };
        drive(&mut pin);
        assert!(pin.is_set_high());
    }
}
