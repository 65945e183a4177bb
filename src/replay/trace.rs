//! Recorded motion traces and a deterministic replay driver.
//!
//! A trace is a JSON document of timestamped host callbacks. Replay runs them through a
//! [`CardSession`] on a virtual clock, simulating image loads with a fixed latency.

use std::path::Path;

use anyhow::Context;

use crate::{
    assets::source::FrameSource,
    foundation::{
        config::CardConfig,
        core::{FrameIndex, Millis, Viewport},
        error::{LenticardError, LenticardResult},
        timers::Timers,
    },
    frames::mapper::MapReject,
    gate::transition::{Ticket, TransitionState},
    motion::sample::{GravityVector, MotionSample},
    session::{
        card::{CardSession, HostCapabilities, HostEvent, Launch, SampleOutcome},
        display::{RecordingDisplay, StatusMessage},
    },
};

fn default_true() -> bool {
    true
}

fn default_load_latency_ms() -> u64 {
    16
}

/// A recorded session: host capabilities, load behavior and timestamped events.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MotionTrace {
    /// Viewport at startup.
    #[serde(default)]
    pub viewport: Viewport,
    /// Whether the host exposes device-motion events.
    #[serde(default = "default_true")]
    pub motion_supported: bool,
    /// Simulated image load time for admitted transitions.
    #[serde(default = "default_load_latency_ms")]
    pub load_latency_ms: u64,
    /// Frame slots whose transition loads fail.
    #[serde(default)]
    pub failing_frames: Vec<usize>,
    /// Events in non-decreasing `at_ms` order.
    pub events: Vec<TraceEvent>,
}

/// One timestamped host callback.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TraceEvent {
    /// Milliseconds since launch.
    pub at_ms: u64,
    /// Callback payload.
    #[serde(flatten)]
    pub kind: TraceEventKind,
}

/// Payload of a [`TraceEvent`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEventKind {
    /// Device-motion sample; `gravity: null` models a sample without gravity data.
    Motion {
        /// Gravity-inclusive acceleration.
        #[serde(default)]
        gravity: Option<GravityVector>,
    },
    /// Viewport resize.
    Resize {
        /// New width.
        width: u32,
        /// New height.
        height: u32,
    },
    /// Tap on the card surface.
    Tap,
}

impl MotionTrace {
    pub fn from_path(path: &Path) -> LenticardResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read trace '{}'", path.display()))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> LenticardResult<Self> {
        let trace: Self =
            serde_json::from_str(text).map_err(|e| LenticardError::serde(e.to_string()))?;
        trace.validate()?;
        Ok(trace)
    }

    pub fn validate(&self) -> LenticardResult<()> {
        if let Some(w) = self.events.windows(2).find(|w| w[1].at_ms < w[0].at_ms) {
            return Err(LenticardError::validation(format!(
                "trace events out of order: {} ms after {} ms",
                w[1].at_ms, w[0].at_ms
            )));
        }
        Ok(())
    }
}

/// Tally of how motion samples were handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OutcomeCounts {
    pub admitted: u64,
    pub busy: u64,
    pub no_gravity: u64,
    pub odd_tilt: u64,
    pub unchanged: u64,
    pub empty_cache: u64,
}

impl OutcomeCounts {
    fn record(&mut self, outcome: SampleOutcome) {
        let slot = match outcome {
            SampleOutcome::Admitted { .. } => &mut self.admitted,
            SampleOutcome::Busy => &mut self.busy,
            SampleOutcome::NoGravity => &mut self.no_gravity,
            SampleOutcome::Rejected(MapReject::OddTilt) => &mut self.odd_tilt,
            SampleOutcome::Rejected(MapReject::Unchanged) => &mut self.unchanged,
            SampleOutcome::Rejected(MapReject::EmptyCache) => &mut self.empty_cache,
        };
        *slot += 1;
    }
}

/// A frame that reached the display during replay.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PresentedFrame {
    pub at_ms: u64,
    pub index: FrameIndex,
    pub name: String,
}

/// Summary of one replay run.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReplayReport {
    /// Startup error, if the session never armed.
    pub aborted: Option<String>,
    /// Message shown in the status area, if any.
    pub status: Option<StatusMessage>,
    pub presented: Vec<PresentedFrame>,
    pub outcomes: OutcomeCounts,
    pub load_failures: u64,
    pub fullscreen_requests: u64,
    pub last_displayed: Option<FrameIndex>,
    pub final_state: TransitionState,
    pub finished_at_ms: u64,
}

impl ReplayReport {
    fn aborted(error: &LenticardError, display: &RecordingDisplay) -> Self {
        Self {
            aborted: Some(error.to_string()),
            status: display.status().cloned(),
            presented: Vec::new(),
            outcomes: OutcomeCounts::default(),
            load_failures: 0,
            fullscreen_requests: 0,
            last_displayed: None,
            final_state: TransitionState::Idle,
            finished_at_ms: 0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum DriverStep {
    Trace(usize),
    Load(Ticket, FrameIndex),
}

/// Launch a session for `trace` and drive it to quiescence.
#[tracing::instrument(skip_all, fields(events = trace.events.len()))]
pub fn replay(
    cfg: &CardConfig,
    source: &dyn FrameSource,
    trace: &MotionTrace,
) -> LenticardResult<ReplayReport> {
    trace.validate()?;
    let caps = HostCapabilities {
        motion_events: trace.motion_supported,
    };
    let launch = CardSession::launch(
        cfg,
        caps,
        source,
        trace.viewport,
        RecordingDisplay::new(),
        Millis(0),
    );
    let mut session = match launch {
        Launch::Armed(session) => session,
        Launch::Aborted { error, display } => {
            if StatusMessage::for_error(&error).is_none() {
                return Err(error);
            }
            return Ok(ReplayReport::aborted(&error, &display));
        }
    };

    let mut queue = Timers::new();
    for (i, ev) in trace.events.iter().enumerate() {
        queue.schedule(Millis(ev.at_ms), DriverStep::Trace(i));
    }

    let mut outcomes = OutcomeCounts::default();
    let mut presented = Vec::new();
    let mut load_failures = 0u64;
    let mut fullscreen_requests = 0u64;
    let mut now = Millis(0);

    while let Some(at) = queue.next_deadline() {
        now = at;
        for step in queue.pop_due(at) {
            match step {
                DriverStep::Trace(i) => match &trace.events[i].kind {
                    TraceEventKind::Motion { gravity } => {
                        let sample = MotionSample { gravity: *gravity };
                        outcomes.record(session.on_motion(now, &sample));
                    }
                    TraceEventKind::Resize { width, height } => {
                        session.handle(now, HostEvent::Resize(Viewport::new(*width, *height)));
                    }
                    TraceEventKind::Tap => {
                        session.handle(now, HostEvent::Tap);
                        fullscreen_requests += 1;
                    }
                },
                DriverStep::Load(ticket, index) => {
                    if trace.failing_frames.contains(&index.0) {
                        load_failures += 1;
                        session.on_frame_load_failed(now, ticket, "simulated load failure");
                    } else {
                        let before = session.display().presented().len();
                        session.on_frame_loaded(now, ticket);
                        if session.display().presented().len() > before {
                            let name = session
                                .cache()
                                .get(index)
                                .map(|f| f.name.clone())
                                .unwrap_or_default();
                            presented.push(PresentedFrame {
                                at_ms: now.0,
                                index,
                                name,
                            });
                        }
                    }
                }
            }
            for (ticket, index) in session.display_mut().take_load_requests() {
                let done = now.saturating_add(std::time::Duration::from_millis(
                    trace.load_latency_ms,
                ));
                queue.schedule(done, DriverStep::Load(ticket, index));
            }
        }
    }

    while let Some(at) = session.next_deadline() {
        now = now.max(at);
        session.advance(at);
    }

    tracing::info!(
        presented = presented.len(),
        admitted = outcomes.admitted,
        "replay finished"
    );
    Ok(ReplayReport {
        aborted: None,
        status: session.display().status().cloned(),
        presented,
        outcomes,
        load_failures,
        fullscreen_requests,
        last_displayed: session.last_displayed(),
        final_state: session.gate_state(),
        finished_at_ms: now.0,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/replay/trace.rs"]
mod tests;
