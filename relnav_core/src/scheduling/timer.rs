use std::time::{Duration, Instant};

/// One-shot deadline used to suspend a control step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettleTimer {
    deadline: Option<Instant>,
}

impl SettleTimer {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer to expire `settle` after `now`, replacing any earlier deadline
    pub fn arm(&mut self, now: Instant, settle: Duration) {
        self.deadline = Some(now + settle);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True once an armed timer has reached its deadline
    pub fn is_elapsed(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now >= deadline)
    }

    /// Time left before expiry; zero when elapsed or disarmed
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
            .unwrap_or_default()
    }

    /// Disarm and report whether the deadline had been reached
    pub fn take_if_elapsed(&mut self, now: Instant) -> bool {
        if self.is_elapsed(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}
