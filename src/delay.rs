//! Delays
//!
//! The delay is a plain counting loop. Its wall-clock length depends on the
//! core clock and on the optimization level the firmware is built with.

use core::ptr;

/// Iterations of the counting loop between two LED transitions
pub const DEFAULT_ITERATIONS: u32 = 1_000_000;

/// Busy-wait delay provider
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BusyWait {
    iterations: u32,
}

impl BusyWait {
    pub const fn new(iterations: u32) -> Self {
        BusyWait { iterations }
    }

    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Counts up to the configured number of iterations
    ///
    /// Returns the final counter value.
    pub fn wait(&mut self) -> u32 {
        let mut i: u32 = 0;
        let counter = &mut i as *mut u32;

        // NOTE(unsafe) `counter` points at a live local; the volatile
        // accesses keep the loop from being optimized out
        unsafe {
            while ptr::read_volatile(counter) < self.iterations {
                ptr::write_volatile(counter, ptr::read_volatile(counter) + 1);
            }
            ptr::read_volatile(counter)
        }
    }
}

impl Default for BusyWait {
    fn default() -> Self {
        BusyWait::new(DEFAULT_ITERATIONS)
    }
}
