#![no_main]
#![no_std]

extern crate panic_halt;

use cortex_m_rt::entry;
#[cfg(feature = "semihosting")]
use cortex_m_semihosting::hprintln;
use mcxa153_blinky::{blinky::Blinky, board, delay::BusyWait, pac};

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().unwrap();

    // NOTE(unsafe) only `board::init` and the toggle loop access registers,
    // and `board::init` clocks each peripheral before touching it
    let bus = unsafe { pac::Mmio::new() };

    let leds = board::init(dp, &bus);

    #[cfg(feature = "semihosting")]
    hprintln!("init done").ok();

    // Green LED: set (off), wait, clear (on), wait, forever.
    let blinky = Blinky::new(leds.green, BusyWait::default());

    #[cfg(feature = "semihosting")]
    hprintln!("entering toggle loop").ok();

    blinky.run()
}
