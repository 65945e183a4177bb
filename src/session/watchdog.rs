use std::time::Duration;

use crate::foundation::core::Millis;

/// Outcome of checking the watchdog at its deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WatchdogVerdict {
    /// Not due yet, or already checked.
    Pending,
    /// A valid sample arrived in time.
    Alive,
    /// No valid sample arrived within the grace period.
    NoSignal,
}

/// One-shot check that the motion pipeline ever saw a structurally valid sample.
#[derive(Clone, Debug)]
pub struct LivenessWatchdog {
    deadline: Millis,
    signal_seen: bool,
    checked: bool,
}

impl LivenessWatchdog {
    pub fn arm(now: Millis, grace: Duration) -> Self {
        Self {
            deadline: now.saturating_add(grace),
            signal_seen: false,
            checked: false,
        }
    }

    pub fn deadline(&self) -> Millis {
        self.deadline
    }

    pub fn signal_seen(&self) -> bool {
        self.signal_seen
    }

    /// Mark the liveness flag. Returns `true` the first time only.
    pub fn observe_valid_sample(&mut self) -> bool {
        !std::mem::replace(&mut self.signal_seen, true)
    }

    /// Check the flag once, at or after the deadline.
    pub fn expire(&mut self, now: Millis) -> WatchdogVerdict {
        if self.checked || now < self.deadline {
            return WatchdogVerdict::Pending;
        }
        self.checked = true;
        if self.signal_seen {
            WatchdogVerdict::Alive
        } else {
            WatchdogVerdict::NoSignal
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/watchdog.rs"]
mod tests;
