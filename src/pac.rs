//! Register map of the peripherals used by this firmware
//!
//! Base addresses and register offsets follow the MCXA153 reference manual
//! (MCXAP64M96FS3RM). Only the registers this firmware touches are listed.

use core::marker::PhantomData;
use core::ptr;
use core::sync::atomic::{AtomicBool, Ordering};

/// Backend performing 32-bit register accesses
pub trait RegisterAccess {
    /// Reads the register at `address`
    fn read(&self, address: usize) -> u32;

    /// Writes `value` to the register at `address`
    fn write(&self, address: usize, value: u32);

    /// Read-modify-write of the register at `address`
    #[inline(always)]
    fn modify<F>(&self, address: usize, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let value = self.read(address);
        self.write(address, f(value));
    }

    /// Completes outstanding register writes before the next access
    #[inline(always)]
    fn barrier(&self) {}
}

/// Volatile memory-mapped access to the device registers
pub struct Mmio {
    _0: (),
}

impl Mmio {
    /// Creates the memory-mapped backend
    ///
    /// # Safety
    ///
    /// Only addresses from this module may be passed to the backend, and
    /// accesses to a gated peripheral must only happen once its clock is
    /// enabled and it is released from reset.
    pub const unsafe fn new() -> Self {
        Mmio { _0: () }
    }
}

impl RegisterAccess for Mmio {
    #[inline(always)]
    fn read(&self, address: usize) -> u32 {
        // NOTE(unsafe) see the contract of `Mmio::new`
        unsafe { ptr::read_volatile(address as *const u32) }
    }

    #[inline(always)]
    fn write(&self, address: usize, value: u32) {
        // NOTE(unsafe) see the contract of `Mmio::new`
        unsafe { ptr::write_volatile(address as *mut u32, value) }
    }

    #[inline(always)]
    fn barrier(&self) {
        cortex_m::asm::dsb();
    }
}

/// Module reset and clock control
pub mod mrcc0 {
    pub const BASE: usize = 0x4009_1000;

    /// Peripheral reset control 1 (1 = released from reset)
    pub const MRCC_GLB_RST1: usize = BASE + 0x10;
    /// Peripheral clock control 1 (1 = clock enabled)
    pub const MRCC_GLB_CC1: usize = BASE + 0x50;
}

/// Port 3 pin control
pub mod port3 {
    pub const BASE: usize = 0x400B_F000;

    /// Number of pin control registers in the port
    pub const PINS: u8 = 32;

    /// Address of the pin control register of `pin`
    pub const fn pcr(pin: u8) -> usize {
        BASE + 0x80 + 4 * pin as usize
    }

    /// PCR field layout
    pub mod pcr {
        /// Pull select (1 = pull-up)
        pub const PS: u32 = 1 << 0;
        /// Pull enable
        pub const PE: u32 = 1 << 1;
        /// Slew rate enable (1 = slow)
        pub const SRE: u32 = 1 << 3;
        /// Open drain enable
        pub const ODE: u32 = 1 << 5;
        /// Drive strength enable (1 = high)
        pub const DSE: u32 = 1 << 6;
        pub const MUX_SHIFT: u32 = 8;
        pub const MUX_MASK: u32 = 0xF << MUX_SHIFT;
        /// Input buffer enable
        pub const IBE: u32 = 1 << 12;
        /// Invert input
        pub const INV: u32 = 1 << 13;
        /// Lock register until next reset
        pub const LK: u32 = 1 << 15;
    }
}

/// GPIO port 3
pub mod gpio3 {
    pub const BASE: usize = 0x4010_5000;

    /// Port data output
    pub const PDOR: usize = BASE + 0x40;
    /// Port set output (write 1 to set)
    pub const PSOR: usize = BASE + 0x44;
    /// Port clear output (write 1 to clear)
    pub const PCOR: usize = BASE + 0x48;
    /// Port toggle output (write 1 to toggle)
    pub const PTOR: usize = BASE + 0x4C;
    /// Port data input
    pub const PDIR: usize = BASE + 0x50;
    /// Port data direction (1 = output)
    pub const PDDR: usize = BASE + 0x54;
}

macro_rules! peripherals {
    ($($PER:ident,)+) => {
        $(
            /// Peripheral token
            pub struct $PER {
                _marker: PhantomData<*const ()>,
            }

            impl $PER {
                pub(crate) const fn new() -> Self {
                    $PER { _marker: PhantomData }
                }
            }
        )+

        /// All the peripherals
        #[allow(non_snake_case)]
        pub struct Peripherals {
            $(
                pub $PER: $PER,
            )+
        }

        impl Peripherals {
            /// Returns all the peripherals *once*
            pub fn take() -> Option<Self> {
                critical_section::with(|_| {
                    if TAKEN.load(Ordering::Relaxed) {
                        None
                    } else {
                        Some(unsafe { Peripherals::steal() })
                    }
                })
            }

            /// Unchecked version of `Peripherals::take`
            ///
            /// # Safety
            ///
            /// Each returned token must not be used while another instance
            /// of it exists.
            pub unsafe fn steal() -> Self {
                TAKEN.store(true, Ordering::Relaxed);

                Peripherals {
                    $(
                        $PER: $PER::new(),
                    )+
                }
            }
        }
    };
}

static TAKEN: AtomicBool = AtomicBool::new(false);

peripherals! {
    MRCC0,
    PORT3,
    GPIO3,
}
