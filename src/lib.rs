//! lenticard renders a lenticular-card illusion: a fixed set of pre-shot frames is swapped in
//! response to device tilt.
//!
//! # Pipeline overview
//!
//! 1. **Preload**: every frame asset is fetched, decoded and re-encoded into a [`FrameCache`]
//!    before anything else runs (all-or-nothing).
//! 2. **Resolve**: a [`MotionSample`] plus the current [`Viewport`] becomes a [`TiltReading`].
//! 3. **Map**: the tilt is quantized and mapped center-out onto a [`FrameIndex`].
//! 4. **Gate**: a single-flight [`TransitionGate`] admits at most one transition at a time and
//!    holds a cooldown after each presented frame.
//! 5. **Present**: the [`CardDisplay`] loads and shows the frame.
//!
//! A [`LivenessWatchdog`] reports when no motion signal ever arrives. [`CardSession`] owns all
//! of the above; hosts feed it callbacks and the current time, and it never blocks.
#![forbid(unsafe_code)]

mod assets;
mod foundation;
mod frames;
mod gate;
mod motion;
mod replay;

/// Card session orchestration, display seam and liveness watchdog.
pub mod session;

pub use assets::cache::{CachedFrame, FrameCache};
pub use assets::decode::encode_frame;
pub use assets::source::{DirSource, FrameSource, frame_asset_names};
pub use foundation::config::{
    CardConfig, DEFAULT_COOLDOWN_MS, DEFAULT_FRAMES_COUNT, DEFAULT_GRACE_MS, MAX_FRAMES_COUNT,
    TRANSITION_ANIMATION_MS,
};
pub use foundation::core::{FrameIndex, Millis, Orientation, TiltReading, Viewport};
pub use foundation::error::{LenticardError, LenticardResult};
pub use foundation::timers::Timers;
pub use frames::mapper::{MapReject, center_index, map_tilt, select_frame};
pub use gate::transition::{Ticket, TransitionGate, TransitionPhase, TransitionState};
pub use motion::axis::{TiltReject, axis_value, resolve_tilt};
pub use motion::sample::{GravityVector, MotionSample};
pub use replay::trace::{
    MotionTrace, OutcomeCounts, PresentedFrame, ReplayReport, TraceEvent, TraceEventKind, replay,
};
pub use session::card::{CardSession, HostCapabilities, HostEvent, Launch, SampleOutcome};
pub use session::display::{CardDisplay, DisplayEvent, RecordingDisplay, StatusMessage};
pub use session::watchdog::{LivenessWatchdog, WatchdogVerdict};
