//! Flash-card countdown.
//!
//! One countdown per card. The TUI sends a tick per elapsed second; the core
//! stops the countdown when the judge answers or the card changes.

pub const COUNTDOWN_START: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    running: bool,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Countdown {
    /// A running countdown at [`COUNTDOWN_START`].
    pub fn new() -> Self {
        Self {
            remaining: COUNTDOWN_START,
            running: true,
        }
    }

    /// Decrements by one second. Returns false when the tick was ignored.
    pub fn tick(&mut self) -> bool {
        if !self.running || self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.running = false;
        }
        true
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn restart(&mut self) {
        *self = Self::new();
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Fraction of time left, for the gauge.
    pub fn ratio(&self) -> f64 {
        f64::from(self.remaining) / f64::from(COUNTDOWN_START)
    }
}
