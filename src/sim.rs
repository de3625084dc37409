//! Host model of the MRCC0, PORT3 and GPIO3 register banks
//!
//! Accesses to PORT3 or GPIO3 before the peripheral is clocked and released
//! from reset are recorded as bus faults and have no effect. Writes to a
//! locked PCR are ignored. PSOR, PCOR and PTOR act on PDOR. Every write,
//! barrier and fault is appended to an ordered log.

use core::cell::RefCell;

use heapless::Vec;

use crate::mrcc::Gate;
use crate::pac::{gpio3, mrcc0, port3, RegisterAccess};

const LOG_CAPACITY: usize = 256;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Write { address: usize, value: u32 },
    Barrier,
    BusFault { address: usize },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Bank {
    Mrcc,
    Port,
    Gpio,
    Unmapped,
}

fn bank(address: usize) -> Bank {
    match address {
        a if (mrcc0::BASE..mrcc0::BASE + 0x1000).contains(&a) => Bank::Mrcc,
        a if (port3::BASE..port3::BASE + 0x1000).contains(&a) => Bank::Port,
        a if (gpio3::BASE..gpio3::BASE + 0x1000).contains(&a) => Bank::Gpio,
        _ => Bank::Unmapped,
    }
}

fn pcr_index(address: usize) -> Option<usize> {
    let first = port3::pcr(0);
    let last = port3::pcr(port3::PINS - 1);
    if (first..=last).contains(&address) && (address - first) % 4 == 0 {
        Some((address - first) / 4)
    } else {
        None
    }
}

#[derive(Default)]
struct State {
    cc1: u32,
    rst1: u32,
    pcr: [u32; port3::PINS as usize],
    pdor: u32,
    pddr: u32,
    log: Vec<Event, LOG_CAPACITY>,
}

impl State {
    fn record(&mut self, event: Event) {
        self.log.push(event).expect("simulator log is full");
    }

    fn accessible(&self, bank: Bank) -> bool {
        let gate = match bank {
            Bank::Port => Gate::Port3,
            Bank::Gpio => Gate::Gpio3,
            Bank::Mrcc | Bank::Unmapped => return true,
        };
        let mask = gate.mask();
        self.cc1 & mask != 0 && self.rst1 & mask != 0
    }

    fn load(&self, address: usize) -> u32 {
        match address {
            mrcc0::MRCC_GLB_CC1 => self.cc1,
            mrcc0::MRCC_GLB_RST1 => self.rst1,
            gpio3::PDOR => self.pdor,
            gpio3::PDDR => self.pddr,
            gpio3::PDIR => self.pdor & self.pddr,
            a => pcr_index(a).map(|i| self.pcr[i]).unwrap_or(0),
        }
    }

    fn store(&mut self, address: usize, value: u32) {
        match address {
            mrcc0::MRCC_GLB_CC1 => self.cc1 = value,
            mrcc0::MRCC_GLB_RST1 => self.rst1 = value,
            gpio3::PDOR => self.pdor = value,
            gpio3::PDDR => self.pddr = value,
            a => {
                if let Some(i) = pcr_index(a) {
                    self.pcr[i] = value;
                }
            }
        }
    }
}

/// Simulated MCXA153 register banks
pub struct Chip {
    state: RefCell<State>,
}

impl Chip {
    /// All registers zero, both peripherals gated and held in reset
    pub fn new() -> Self {
        Chip {
            state: RefCell::new(State::default()),
        }
    }

    /// Sets a register as if it were its reset value, bypassing locks,
    /// gating and the log
    pub fn preset(&self, address: usize, value: u32) {
        self.state.borrow_mut().store(address, value);
    }

    /// Reads a register without gating checks or logging
    pub fn peek(&self, address: usize) -> u32 {
        self.state.borrow().load(address)
    }

    pub fn log(&self) -> Vec<Event, LOG_CAPACITY> {
        self.state.borrow().log.clone()
    }

    pub fn clear_log(&self) {
        self.state.borrow_mut().log.clear();
    }

    /// Addresses of all logged writes, in order
    pub fn written(&self) -> Vec<usize, LOG_CAPACITY> {
        self.state
            .borrow()
            .log
            .iter()
            .filter_map(|e| match e {
                Event::Write { address, .. } => Some(*address),
                _ => None,
            })
            .collect()
    }

    pub fn faults(&self) -> usize {
        self.state
            .borrow()
            .log
            .iter()
            .filter(|e| matches!(e, Event::BusFault { .. }))
            .count()
    }
}

impl RegisterAccess for Chip {
    fn read(&self, address: usize) -> u32 {
        let mut state = self.state.borrow_mut();
        if !state.accessible(bank(address)) {
            state.record(Event::BusFault { address });
            return 0;
        }
        state.load(address)
    }

    fn write(&self, address: usize, value: u32) {
        let mut state = self.state.borrow_mut();
        if !state.accessible(bank(address)) {
            state.record(Event::BusFault { address });
            return;
        }
        state.record(Event::Write { address, value });

        match address {
            gpio3::PSOR => state.pdor |= value,
            gpio3::PCOR => state.pdor &= !value,
            gpio3::PTOR => state.pdor ^= value,
            a => match pcr_index(a) {
                Some(i) if state.pcr[i] & port3::pcr::LK != 0 => {}
                _ => state.store(a, value),
            },
        }
    }

    fn barrier(&self) {
        self.state.borrow_mut().record(Event::Barrier);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock_and_release(chip: &Chip) {
        let bits = Gate::Port3.mask() | Gate::Gpio3.mask();
        chip.write(mrcc0::MRCC_GLB_CC1, bits);
        chip.write(mrcc0::MRCC_GLB_RST1, bits);
    }

    #[test]
    fn gated_access_faults() {
        let chip = Chip::new();

        chip.write(port3::pcr(13), 0x8000);
        assert_eq!(chip.read(gpio3::PDOR), 0);

        assert_eq!(chip.faults(), 2);
        assert_eq!(chip.peek(port3::pcr(13)), 0);
    }

    #[test]
    fn clock_without_reset_release_still_faults() {
        let chip = Chip::new();
        chip.write(mrcc0::MRCC_GLB_CC1, Gate::Port3.mask());

        chip.write(port3::pcr(0), 0x8000);

        assert_eq!(chip.faults(), 1);
    }

    #[test]
    fn set_and_clear_act_on_data_output() {
        let chip = Chip::new();
        clock_and_release(&chip);
        chip.preset(gpio3::PDOR, 0b1);

        chip.write(gpio3::PSOR, 1 << 13);
        assert_eq!(chip.peek(gpio3::PDOR), (1 << 13) | 0b1);

        chip.write(gpio3::PCOR, 1 << 13);
        assert_eq!(chip.peek(gpio3::PDOR), 0b1);

        chip.write(gpio3::PTOR, 0b1);
        assert_eq!(chip.peek(gpio3::PDOR), 0);
    }

    #[test]
    fn locked_pcr_ignores_writes() {
        let chip = Chip::new();
        clock_and_release(&chip);

        chip.write(port3::pcr(12), port3::pcr::LK);
        chip.write(port3::pcr(12), port3::pcr::PE | port3::pcr::PS);

        assert_eq!(chip.peek(port3::pcr(12)), port3::pcr::LK);
    }
}
