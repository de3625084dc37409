//! General Purpose Input / Output

use crate::hal::digital::v2::{InputPin, OutputPin, StatefulOutputPin, ToggleableOutputPin};
use crate::pac::{self, gpio3, RegisterAccess};

/// Mask of the given pin numbers
///
/// # Panics
///
/// Panics if a pin number is 32 or above.
pub const fn mask_of(pins: &[u8]) -> u32 {
    let mut mask = 0;
    let mut i = 0;
    while i < pins.len() {
        assert!(pins[i] < 32, "GPIO3 has 32 pins");
        mask |= 1 << pins[i];
        i += 1;
    }
    mask
}

/// GPIO3 driver
pub struct Gpio<'a, B> {
    _gpio: pac::GPIO3,
    bus: &'a B,
}

impl<'a, B: RegisterAccess> Gpio<'a, B> {
    pub(crate) fn new(gpio: pac::GPIO3, bus: &'a B) -> Self {
        Gpio { _gpio: gpio, bus }
    }

    /// Drives the pins in `mask` high once they become outputs
    pub fn set_initial_high(&mut self, mask: u32) {
        self.bus.modify(gpio3::PDOR, |r| r | mask);
    }

    /// Switches the pins in `mask` to output
    pub fn make_outputs(&mut self, mask: u32) {
        self.bus.modify(gpio3::PDDR, |r| r | mask);
    }

    pub fn output_levels(&self) -> u32 {
        self.bus.read(gpio3::PDOR)
    }

    pub fn directions(&self) -> u32 {
        self.bus.read(gpio3::PDDR)
    }

    /// Turns `pins` into outputs that start out high
    ///
    /// The level is latched before the direction is switched, so the pins
    /// never drive low in between.
    pub fn into_outputs<const N: usize>(mut self, pins: [u8; N]) -> [Pin<'a, B>; N] {
        let mask = mask_of(&pins);
        self.set_initial_high(mask);
        self.make_outputs(mask);

        let bus = self.bus;
        pins.map(|i| Pin { i, bus })
    }
}

/// Output pin of GPIO3
///
/// Only created by `Gpio::into_outputs`, so the pin number is below 32.
pub struct Pin<'a, B> {
    i: u8,
    bus: &'a B,
}

impl<'a, B> Pin<'a, B> {
    /// Returns this pin's number inside its port.
    pub fn pin_number(&self) -> u8 {
        self.i
    }

    fn mask(&self) -> u32 {
        1 << self.i
    }
}

impl<'a, B: RegisterAccess> OutputPin for Pin<'a, B> {
    type Error = void::Void;

    fn set_high(&mut self) -> Result<(), Self::Error> {
        // write-1-to-set, other bits of PDOR are untouched
        self.bus.write(gpio3::PSOR, self.mask());
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        // write-1-to-clear, other bits of PDOR are untouched
        self.bus.write(gpio3::PCOR, self.mask());
        Ok(())
    }
}

impl<'a, B: RegisterAccess> StatefulOutputPin for Pin<'a, B> {
    fn is_set_high(&self) -> Result<bool, Self::Error> {
        let is_high = !self.is_set_low()?;
        Ok(is_high)
    }

    fn is_set_low(&self) -> Result<bool, Self::Error> {
        let is_low = self.bus.read(gpio3::PDOR) & self.mask() == 0;
        Ok(is_low)
    }
}

impl<'a, B: RegisterAccess> ToggleableOutputPin for Pin<'a, B> {
    type Error = void::Void;

    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.bus.write(gpio3::PTOR, self.mask());
        Ok(())
    }
}

impl<'a, B: RegisterAccess> InputPin for Pin<'a, B> {
    type Error = void::Void;

    fn is_high(&self) -> Result<bool, Self::Error> {
        let is_high = !self.is_low()?;
        Ok(is_high)
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        let is_low = self.bus.read(gpio3::PDIR) & self.mask() == 0;
        Ok(is_low)
    }
}
