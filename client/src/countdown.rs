//! Decorative turn countdown.
//!
//! The server owns round timing. This counter only feeds the display: it
//! never ends a round and never sends anything.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    running: bool,
}

impl Countdown {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart from `ticks`.
    pub fn start(&mut self, ticks: u32) {
        self.remaining = ticks;
        self.running = ticks > 0;
    }

    /// Advance one tick. Returns the new remaining count, or `None` when the
    /// countdown is not running. Reaching zero stops it.
    pub fn tick(&mut self) -> Option<u32> {
        if !self.running {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
        }
        Some(self.remaining)
    }

    /// Stop and zero the display.
    pub fn halt(&mut self) {
        self.remaining = 0;
        self.running = false;
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}
