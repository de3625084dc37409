//! FRDM-MCXA153 bring-up
//!
//! The on-board RGB LED sits on P3_0 (blue), P3_12 (red) and P3_13 (green).

use crate::gpio::Pin;
use crate::mrcc::MrccExt;
use crate::pac::{Peripherals, RegisterAccess};
use crate::port::PinConfig;

pub const LED_BLUE: u8 = 0;
pub const LED_RED: u8 = 12;
pub const LED_GREEN: u8 = 13;

/// LED pins, in configuration order
pub const LED_PINS: [u8; 3] = [LED_BLUE, LED_RED, LED_GREEN];

/// The three LED channels, all switched off
pub struct Leds<'a, B> {
    pub blue: Pin<'a, B>,
    pub red: Pin<'a, B>,
    pub green: Pin<'a, B>,
}

/// Brings up the LED pins
///
/// 1. Enable the GPIO3 and PORT3 clocks, then release both from reset.
/// 2. Select the GPIO function on each LED pin and lock its PCR.
/// 3. Latch a high output level (LED off), then switch the pins to output.
pub fn init<B: RegisterAccess>(dp: Peripherals, bus: &B) -> Leds<'_, B> {
    let mut mrcc = dp.MRCC0.constrain(bus);
    let (mut port, gpio) = mrcc.bring_up(dp.PORT3, dp.GPIO3);

    port.configure_all(&LED_PINS, PinConfig::gpio_locked());

    let [blue, red, green] = gpio.into_outputs(LED_PINS);
    Leds { blue, red, green }
}
