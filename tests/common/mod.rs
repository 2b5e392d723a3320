//! Shared test doubles.

use embedded_hal::delay::DelayNs;

/// One blocking wait, as requested by the code under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wait {
    Us(u32),
    Ms(u32),
}

/// Delay provider that records waits instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub waits: Vec<Wait>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Microsecond waits only, in order.
    #[allow(dead_code)]
    pub fn micros(&self) -> Vec<u32> {
        self.waits
            .iter()
            .filter_map(|w| match w {
                Wait::Us(us) => Some(*us),
                Wait::Ms(_) => None,
            })
            .collect()
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits.push(Wait::Us(ns / 1000));
    }

    fn delay_us(&mut self, us: u32) {
        self.waits.push(Wait::Us(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits.push(Wait::Ms(ms));
    }
}

/// `n` high/low step edges.
#[allow(dead_code)]
pub fn step_edges(n: usize) -> Vec<embedded_hal_mock::eh1::digital::Transaction> {
    use embedded_hal_mock::eh1::digital::{State, Transaction};

    (0..n)
        .flat_map(|_| [Transaction::set(State::High), Transaction::set(State::Low)])
        .collect()
}
