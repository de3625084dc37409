//! LED toggle loop
//!
//! The LEDs on the FRDM-MCXA153 are wired active low: a high output turns
//! the LED off.

use void::{ResultVoidExt, Void};

use crate::delay::BusyWait;
use crate::hal::digital::v2::OutputPin;

/// Phase the LED enters on the next step
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Output high, LED off
    Dark,
    /// Output low, LED on
    Lit,
}

impl Phase {
    pub fn next(self) -> Self {
        match self {
            Phase::Dark => Phase::Lit,
            Phase::Lit => Phase::Dark,
        }
    }
}

/// Blinks one LED with a busy-wait delay between transitions
pub struct Blinky<P> {
    led: P,
    delay: BusyWait,
    next: Phase,
}

impl<P> Blinky<P>
where
    P: OutputPin<Error = Void>,
{
    pub fn new(led: P, delay: BusyWait) -> Self {
        Blinky {
            led,
            delay,
            next: Phase::Dark,
        }
    }

    /// Performs one transition followed by one delay
    ///
    /// Returns the phase that was entered.
    pub fn step(&mut self) -> Phase {
        let phase = self.next;
        match phase {
            Phase::Dark => self.led.set_high().void_unwrap(),
            Phase::Lit => self.led.set_low().void_unwrap(),
        }
        self.delay.wait();

        self.next = phase.next();
        phase
    }

    /// Blinks forever
    pub fn run(mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Releases the LED pin
    pub fn free(self) -> P {
        self.led
    }
}
