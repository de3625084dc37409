//! Pin control (PORT)
//!
//! Each pin has its own pin control register (PCR). A PCR is always written
//! as a whole word. Setting the lock bit makes the register read-only until
//! the next chip reset, and later writes are silently dropped by the
//! hardware.

use crate::pac::port3::pcr;
use crate::pac::{self, port3, RegisterAccess};

/// Pin function selection (`PCR[MUX]`)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Mux(u8);

impl Mux {
    /// Alternative 0, general purpose I/O
    pub const GPIO: Mux = Mux(0);

    /// Alternative `n`; only the low four bits are used
    pub const fn alt(n: u8) -> Self {
        Mux(n & 0xF)
    }

    pub const fn number(self) -> u8 {
        self.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DriveStrength {
    Low,
    High,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SlewRate {
    Fast,
    Slow,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pull {
    Disabled,
    Down,
    Up,
}

/// Contents of a pin control register
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PinConfig {
    pub mux: Mux,
    pub input_buffer: bool,
    pub invert: bool,
    pub drive: DriveStrength,
    pub open_drain: bool,
    pub slew: SlewRate,
    pub pull: Pull,
    pub lock: bool,
}

impl PinConfig {
    /// GPIO function with every option disabled, locked
    pub const fn gpio_locked() -> Self {
        PinConfig {
            mux: Mux::GPIO,
            input_buffer: false,
            invert: false,
            drive: DriveStrength::Low,
            open_drain: false,
            slew: SlewRate::Fast,
            pull: Pull::Disabled,
            lock: true,
        }
    }

    /// Encodes the full PCR word
    pub const fn bits(&self) -> u32 {
        let mut bits = (self.mux.0 as u32) << pcr::MUX_SHIFT;
        if self.input_buffer {
            bits |= pcr::IBE;
        }
        if self.invert {
            bits |= pcr::INV;
        }
        if let DriveStrength::High = self.drive {
            bits |= pcr::DSE;
        }
        if self.open_drain {
            bits |= pcr::ODE;
        }
        if let SlewRate::Slow = self.slew {
            bits |= pcr::SRE;
        }
        match self.pull {
            Pull::Disabled => {}
            Pull::Down => bits |= pcr::PE,
            Pull::Up => bits |= pcr::PE | pcr::PS,
        }
        if self.lock {
            bits |= pcr::LK;
        }
        bits
    }

    /// Decodes a PCR word; reserved and unmodelled bits are ignored
    pub fn from_bits(bits: u32) -> Self {
        let set = |mask: u32| bits & mask != 0;
        PinConfig {
            mux: Mux::alt(((bits & pcr::MUX_MASK) >> pcr::MUX_SHIFT) as u8),
            input_buffer: set(pcr::IBE),
            invert: set(pcr::INV),
            drive: if set(pcr::DSE) { DriveStrength::High } else { DriveStrength::Low },
            open_drain: set(pcr::ODE),
            slew: if set(pcr::SRE) { SlewRate::Slow } else { SlewRate::Fast },
            pull: match (set(pcr::PE), set(pcr::PS)) {
                (false, _) => Pull::Disabled,
                (true, false) => Pull::Down,
                (true, true) => Pull::Up,
            },
            lock: set(pcr::LK),
        }
    }
}

/// PORT3 pin control driver
pub struct Port<'a, B> {
    _port: pac::PORT3,
    bus: &'a B,
}

impl<'a, B: RegisterAccess> Port<'a, B> {
    pub(crate) fn new(port: pac::PORT3, bus: &'a B) -> Self {
        Port { _port: port, bus }
    }

    /// Writes the whole PCR of `pin`
    ///
    /// Has no effect if the register is already locked.
    ///
    /// # Panics
    ///
    /// Panics if `pin` is not one of the port's 32 pins.
    pub fn configure(&mut self, pin: u8, config: PinConfig) {
        self.bus.write(pcr_address(pin), config.bits());
    }

    /// Configures each of `pins`, in order
    pub fn configure_all(&mut self, pins: &[u8], config: PinConfig) {
        for &pin in pins {
            self.configure(pin, config);
        }
    }

    pub fn read_config(&self, pin: u8) -> PinConfig {
        PinConfig::from_bits(self.bus.read(pcr_address(pin)))
    }

    pub fn is_locked(&self, pin: u8) -> bool {
        self.bus.read(pcr_address(pin)) & pcr::LK != 0
    }
}

fn pcr_address(pin: u8) -> usize {
    assert!(pin < port3::PINS, "PORT3 has no pin {}", pin);
    port3::pcr(pin)
}
