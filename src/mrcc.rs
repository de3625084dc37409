//! Module reset and clock control (MRCC)
//!
//! Before a module can be used its clock must be enabled and it must be
//! released from reset. Any access to a module still held in reset ends in a
//! bus error.

use core::ops::BitOr;

use crate::gpio::Gpio;
use crate::pac::{self, mrcc0, RegisterAccess};
use crate::port::Port;

/// Peripheral controlled through `MRCC_GLB_CC1` and `MRCC_GLB_RST1`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Gate {
    Port3 = 0,
    Gpio3 = 8,
}

impl Gate {
    /// Bit of this peripheral in the clock and reset registers
    pub const fn mask(self) -> u32 {
        1 << self as u32
    }
}

/// Set of gated peripherals
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Gates(u32);

impl Gates {
    pub const fn empty() -> Self {
        Gates(0)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, gate: Gate) -> bool {
        self.0 & gate.mask() != 0
    }
}

impl From<Gate> for Gates {
    fn from(gate: Gate) -> Self {
        Gates(gate.mask())
    }
}

impl BitOr for Gate {
    type Output = Gates;

    fn bitor(self, rhs: Gate) -> Gates {
        Gates(self.mask() | rhs.mask())
    }
}

impl BitOr<Gate> for Gates {
    type Output = Gates;

    fn bitor(self, rhs: Gate) -> Gates {
        Gates(self.0 | rhs.mask())
    }
}

/// Extension trait that constrains the `MRCC0` peripheral
pub trait MrccExt {
    /// Constrains the `MRCC0` peripheral so it plays nicely with the other
    /// abstractions
    fn constrain<B: RegisterAccess>(self, bus: &B) -> Mrcc<'_, B>;
}

impl MrccExt for pac::MRCC0 {
    fn constrain<B: RegisterAccess>(self, bus: &B) -> Mrcc<'_, B> {
        Mrcc { _mrcc: self, bus }
    }
}

/// Constrained MRCC peripheral
pub struct Mrcc<'a, B> {
    _mrcc: pac::MRCC0,
    bus: &'a B,
}

impl<'a, B: RegisterAccess> Mrcc<'a, B> {
    /// Enables the clocks of `gates`, leaving all other peripherals unchanged
    pub fn enable_clocks(&mut self, gates: Gates) {
        self.bus.modify(mrcc0::MRCC_GLB_CC1, |r| r | gates.bits());
        self.bus.barrier();
    }

    /// Releases `gates` from reset, leaving all other peripherals unchanged
    pub fn release_resets(&mut self, gates: Gates) {
        self.bus.modify(mrcc0::MRCC_GLB_RST1, |r| r | gates.bits());
        self.bus.barrier();
    }

    pub fn is_enabled(&self, gate: Gate) -> bool {
        self.bus.read(mrcc0::MRCC_GLB_CC1) & gate.mask() != 0
    }

    pub fn is_released(&self, gate: Gate) -> bool {
        self.bus.read(mrcc0::MRCC_GLB_RST1) & gate.mask() != 0
    }

    /// Clocks PORT3 and GPIO3, releases both from reset and returns their
    /// drivers
    pub fn bring_up(
        &mut self,
        port3: pac::PORT3,
        gpio3: pac::GPIO3,
    ) -> (Port<'a, B>, Gpio<'a, B>) {
        let gates = Gate::Gpio3 | Gate::Port3;
        self.enable_clocks(gates);
        self.release_resets(gates);

        (Port::new(port3, self.bus), Gpio::new(gpio3, self.bus))
    }
}
