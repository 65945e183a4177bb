use std::time::Duration;

use crate::foundation::core::{FrameIndex, Millis};

/// Identifies one admitted transition. Completions carrying any other ticket are stale.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Ticket(pub u64);

/// Where an in-flight transition currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TransitionPhase {
    /// Waiting for the candidate image to finish loading.
    Loading,
    /// Image presented; dead time runs until `until`.
    Cooldown { until: Millis },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TransitionState {
    Idle,
    InTransition {
        ticket: Ticket,
        candidate: FrameIndex,
        phase: TransitionPhase,
    },
}

/// Single-flight lock with a post-presentation cooldown.
///
/// `last_displayed` only moves when a load completes, never at admission.
#[derive(Debug)]
pub struct TransitionGate {
    state: TransitionState,
    last_displayed: Option<FrameIndex>,
    cooldown: Duration,
    next_ticket: u64,
}

impl TransitionGate {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            state: TransitionState::Idle,
            last_displayed: None,
            cooldown,
            next_ticket: 1,
        }
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, TransitionState::Idle)
    }

    pub fn last_displayed(&self) -> Option<FrameIndex> {
        self.last_displayed
    }

    /// Admit a candidate. Returns `None` while another transition is in flight.
    pub fn admit(&mut self, candidate: FrameIndex) -> Option<Ticket> {
        if !self.is_idle() {
            return None;
        }
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.state = TransitionState::InTransition {
            ticket,
            candidate,
            phase: TransitionPhase::Loading,
        };
        Some(ticket)
    }

    /// Candidate image is ready: commit it as displayed and start the cooldown.
    ///
    /// Returns the displayed index and the cooldown deadline, or `None` for a stale ticket.
    pub fn load_completed(&mut self, ticket: Ticket, now: Millis) -> Option<(FrameIndex, Millis)> {
        let candidate = self.loading_candidate(ticket)?;
        let until = now.saturating_add(self.cooldown);
        self.state = TransitionState::InTransition {
            ticket,
            candidate,
            phase: TransitionPhase::Cooldown { until },
        };
        self.last_displayed = Some(candidate);
        Some((candidate, until))
    }

    /// Candidate image failed: back to idle at once, no cooldown.
    pub fn load_failed(&mut self, ticket: Ticket) -> bool {
        if self.loading_candidate(ticket).is_none() {
            return false;
        }
        self.state = TransitionState::Idle;
        true
    }

    /// Cooldown timer fired. Only releases the gate once the deadline has truly passed.
    pub fn cooldown_elapsed(&mut self, ticket: Ticket, now: Millis) -> bool {
        match self.state {
            TransitionState::InTransition {
                ticket: current,
                phase: TransitionPhase::Cooldown { until },
                ..
            } if current == ticket && now >= until => {
                self.state = TransitionState::Idle;
                true
            }
            _ => false,
        }
    }

    fn loading_candidate(&self, ticket: Ticket) -> Option<FrameIndex> {
        match self.state {
            TransitionState::InTransition {
                ticket: current,
                candidate,
                phase: TransitionPhase::Loading,
            } if current == ticket => Some(candidate),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gate/transition.rs"]
mod tests;
