#![cfg_attr(not(test), no_std)]

use embedded_hal as hal;

pub mod blinky;
pub mod board;
pub mod delay;
pub mod gpio;
pub mod mrcc;
pub mod pac;
pub mod port;

#[cfg(test)]
mod sim;
