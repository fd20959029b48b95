//! Per-session countdown.
//!
//! One tick per second, driven explicitly by the session's host so tests can
//! step time deterministically. A zero limit disables the countdown. There
//! is no pause or resume.

/// Counts a session's remaining seconds down to zero.
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    /// `None` when the session is untimed.
    remaining: Option<u32>,
}

impl CountdownTimer {
    pub fn new(limit_seconds: u32) -> Self {
        CountdownTimer {
            remaining: (limit_seconds > 0).then_some(limit_seconds),
        }
    }

    pub fn is_limited(&self) -> bool {
        self.remaining.is_some()
    }

    /// Seconds left, `None` when untimed.
    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    /// Advances one second. Returns true exactly once, on the tick that
    /// reaches zero.
    pub fn tick(&mut self) -> bool {
        match self.remaining {
            Some(seconds) if seconds > 0 => {
                let left = seconds - 1;
                self.remaining = Some(left);
                left == 0
            }
            _ => false,
        }
    }
}
