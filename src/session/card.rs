use crate::{
    assets::{cache::FrameCache, source::FrameSource},
    foundation::{
        config::CardConfig,
        core::{FrameIndex, Millis, Viewport},
        error::LenticardError,
        timers::Timers,
    },
    frames::mapper::{MapReject, select_frame},
    gate::transition::{Ticket, TransitionGate, TransitionState},
    motion::{
        axis::{TiltReject, resolve_tilt},
        sample::MotionSample,
    },
    session::{
        display::{CardDisplay, StatusMessage},
        watchdog::{LivenessWatchdog, WatchdogVerdict},
    },
};

/// What the host platform can deliver, checked before anything is loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HostCapabilities {
    /// Device-motion events are available.
    pub motion_events: bool,
}

/// Callbacks a host delivers to a running session.
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    /// Raw device-motion sample.
    Motion(MotionSample),
    /// Image for the given transition finished loading.
    FrameLoaded(Ticket),
    /// Image for the given transition failed to load.
    FrameLoadFailed {
        /// Transition the failure belongs to.
        ticket: Ticket,
        /// Host-provided cause, logged only.
        reason: String,
    },
    /// Viewport size changed.
    Resize(Viewport),
    /// User tapped the card surface.
    Tap,
}

/// How one motion sample was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SampleOutcome {
    /// Sample carried no gravity data; treated as noise.
    NoGravity,
    /// A transition is in flight; sample dropped.
    Busy,
    /// Mapper produced no new frame.
    Rejected(MapReject),
    /// Candidate admitted and its image load requested.
    Admitted {
        /// Ticket the host must echo back with the load outcome.
        ticket: Ticket,
        /// Frame being loaded.
        index: FrameIndex,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionTimer {
    Cooldown(Ticket),
    Watchdog,
}

/// Result of [`CardSession::launch`].
#[derive(Debug)]
pub enum Launch<D> {
    /// Cache preloaded, watchdog armed, motion accepted.
    Armed(CardSession<D>),
    /// Startup stopped; the display already shows the reason when it is user-facing.
    Aborted {
        /// Why startup stopped.
        error: LenticardError,
        /// Display handed back to the host.
        display: D,
    },
}

impl<D> Launch<D> {
    /// Drop the display on failure and keep only the error.
    pub fn into_result(self) -> Result<CardSession<D>, LenticardError> {
        match self {
            Self::Armed(s) => Ok(s),
            Self::Aborted { error, .. } => Err(error),
        }
    }
}

/// Orchestrator: owns the frame cache, transition gate, watchdog and timers of one card.
///
/// All state lives here and is only touched through `&mut self`, from the host's single
/// event context. Every entry point first fires timers due at `now`.
#[derive(Debug)]
pub struct CardSession<D> {
    cache: FrameCache,
    gate: TransitionGate,
    watchdog: LivenessWatchdog,
    timers: Timers<SessionTimer>,
    viewport: Viewport,
    effect_on: bool,
    display: D,
}

impl<D: CardDisplay> CardSession<D> {
    /// Check the host, preload every frame, then arm the motion pipeline.
    ///
    /// Unsupported hosts never preload; a failed preload never arms anything.
    #[tracing::instrument(skip_all, fields(frames = cfg.frames_count))]
    pub fn launch(
        cfg: &CardConfig,
        caps: HostCapabilities,
        source: &dyn FrameSource,
        viewport: Viewport,
        mut display: D,
        now: Millis,
    ) -> Launch<D> {
        let cache = match Self::prepare(cfg, caps, source) {
            Ok(cache) => cache,
            Err(error) => {
                tracing::warn!(%error, "card launch aborted");
                if let Some(status) = StatusMessage::for_error(&error) {
                    display.show_status(&status);
                }
                if error.is_fatal() {
                    display.set_effect(false);
                }
                return Launch::Aborted { error, display };
            }
        };
        Launch::Armed(Self::arm(cfg, cache, viewport, display, now))
    }

    fn prepare(
        cfg: &CardConfig,
        caps: HostCapabilities,
        source: &dyn FrameSource,
    ) -> Result<FrameCache, LenticardError> {
        if !caps.motion_events {
            return Err(LenticardError::DeviceUnsupported);
        }
        cfg.validate()?;
        FrameCache::preload(cfg, source)
    }

    /// Arm a session over an already preloaded cache.
    pub fn arm(
        cfg: &CardConfig,
        cache: FrameCache,
        viewport: Viewport,
        display: D,
        now: Millis,
    ) -> Self {
        let watchdog = LivenessWatchdog::arm(now, cfg.grace());
        let mut timers = Timers::new();
        timers.schedule(watchdog.deadline(), SessionTimer::Watchdog);
        tracing::info!(frames = cache.len(), ?viewport, "motion pipeline armed");
        Self {
            cache,
            gate: TransitionGate::new(cfg.cooldown()),
            watchdog,
            timers,
            viewport,
            effect_on: false,
            display,
        }
    }

    /// Dispatch one host callback.
    pub fn handle(&mut self, now: Millis, event: HostEvent) -> Option<SampleOutcome> {
        match event {
            HostEvent::Motion(sample) => return Some(self.on_motion(now, &sample)),
            HostEvent::FrameLoaded(ticket) => self.on_frame_loaded(now, ticket),
            HostEvent::FrameLoadFailed { ticket, reason } => {
                self.on_frame_load_failed(now, ticket, &reason)
            }
            HostEvent::Resize(viewport) => self.on_resize(now, viewport),
            HostEvent::Tap => self.on_tap(now),
        }
        None
    }

    /// Feed one motion sample through resolver, mapper and gate.
    pub fn on_motion(&mut self, now: Millis, sample: &MotionSample) -> SampleOutcome {
        self.advance(now);

        if !sample.is_valid() {
            tracing::debug!("motion sample without gravity dropped");
            return SampleOutcome::NoGravity;
        }
        if self.watchdog.observe_valid_sample() {
            tracing::info!(at = now.0, "first motion sample");
        }
        if !self.gate.is_idle() {
            return SampleOutcome::Busy;
        }
        if self.cache.is_empty() {
            return SampleOutcome::Rejected(MapReject::EmptyCache);
        }
        let tilt = match resolve_tilt(sample, self.viewport) {
            Ok(tilt) => tilt,
            Err(TiltReject::NoGravity) => return SampleOutcome::NoGravity,
            Err(TiltReject::NonFinite) => {
                tracing::debug!("non-finite tilt treated as odd");
                return SampleOutcome::Rejected(MapReject::OddTilt);
            }
        };

        let index = match select_frame(tilt, self.cache.len(), self.gate.last_displayed()) {
            Ok(index) => index,
            Err(reject) => return SampleOutcome::Rejected(reject),
        };
        let Some(frame) = self.cache.get(index) else {
            return SampleOutcome::Rejected(MapReject::EmptyCache);
        };
        let Some(ticket) = self.gate.admit(index) else {
            return SampleOutcome::Busy;
        };

        tracing::debug!(tilt = tilt.0, index = index.0, ticket = ticket.0, "transition admitted");
        self.display.load_frame(ticket, index, frame);
        SampleOutcome::Admitted { ticket, index }
    }

    /// Candidate image is ready: present it and start the cooldown.
    pub fn on_frame_loaded(&mut self, now: Millis, ticket: Ticket) {
        self.advance(now);

        let Some((index, until)) = self.gate.load_completed(ticket, now) else {
            tracing::debug!(ticket = ticket.0, "stale frame load ignored");
            return;
        };
        if let Some(frame) = self.cache.get(index) {
            self.display.present_frame(index, frame);
        }
        if !self.effect_on {
            self.display.set_effect(true);
            self.effect_on = true;
        }
        self.timers.schedule(until, SessionTimer::Cooldown(ticket));
        tracing::info!(index = index.0, cooldown_until = until.0, "frame presented");
    }

    /// Candidate image failed: release the gate without a cooldown.
    pub fn on_frame_load_failed(&mut self, now: Millis, ticket: Ticket, reason: &str) {
        self.advance(now);

        let err = LenticardError::transition_load(reason);
        if self.gate.load_failed(ticket) {
            tracing::warn!(%err, ticket = ticket.0, "gate released after failed load");
        } else {
            tracing::debug!(%err, ticket = ticket.0, "stale load failure ignored");
        }
    }

    pub fn on_resize(&mut self, now: Millis, viewport: Viewport) {
        self.advance(now);
        self.viewport = viewport;
    }

    pub fn on_tap(&mut self, now: Millis) {
        self.advance(now);
        self.display.request_fullscreen();
    }

    /// Fire every timer due at or before `now`.
    pub fn advance(&mut self, now: Millis) {
        for task in self.timers.pop_due(now) {
            match task {
                SessionTimer::Cooldown(ticket) => {
                    if self.gate.cooldown_elapsed(ticket, now) {
                        tracing::debug!(ticket = ticket.0, "cooldown elapsed");
                    }
                }
                SessionTimer::Watchdog => match self.watchdog.expire(now) {
                    WatchdogVerdict::NoSignal => {
                        tracing::warn!(error = %LenticardError::NoMotionSignal, "no motion signal");
                        self.display.show_status(&StatusMessage::MotionSignalTimeout);
                    }
                    WatchdogVerdict::Alive => tracing::debug!("motion signal confirmed"),
                    WatchdogVerdict::Pending => {}
                },
            }
        }
    }

    /// Earliest pending timer, for hosts that sleep between events.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    pub fn gate_state(&self) -> TransitionState {
        self.gate.state()
    }

    pub fn last_displayed(&self) -> Option<FrameIndex> {
        self.gate.last_displayed()
    }

    pub fn motion_seen(&self) -> bool {
        self.watchdog.signal_seen()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn cache(&self) -> &FrameCache {
        &self.cache
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/card.rs"]
mod tests;
