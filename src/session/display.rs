use crate::{
    assets::cache::CachedFrame,
    foundation::{core::FrameIndex, error::LenticardError},
    gate::transition::Ticket,
};

/// The three mutually exclusive messages the status area can show.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StatusMessage {
    DeviceUnsupported,
    AssetLoadFailure { asset: String },
    MotionSignalTimeout,
}

impl StatusMessage {
    /// Status for an error that reaches the user, if any.
    pub fn for_error(err: &LenticardError) -> Option<Self> {
        match err {
            LenticardError::DeviceUnsupported => Some(Self::DeviceUnsupported),
            LenticardError::AssetPreload { asset, .. } => Some(Self::AssetLoadFailure {
                asset: asset.clone(),
            }),
            LenticardError::NoMotionSignal => Some(Self::MotionSignalTimeout),
            _ => None,
        }
    }
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeviceUnsupported => write!(f, "{}", LenticardError::DeviceUnsupported),
            Self::AssetLoadFailure { asset } => write!(f, "Cannot load \"{asset}\""),
            Self::MotionSignalTimeout => write!(f, "{}", LenticardError::NoMotionSignal),
        }
    }
}

/// Visual surface driven by a card session.
///
/// `load_frame` starts an asynchronous image load; the host reports the outcome back to
/// the session with the same ticket.
pub trait CardDisplay {
    /// Begin loading `frame` for the admitted transition `ticket`.
    fn load_frame(&mut self, ticket: Ticket, index: FrameIndex, frame: &CachedFrame);
    /// Swap the surface background to a loaded frame.
    fn present_frame(&mut self, index: FrameIndex, frame: &CachedFrame);
    /// Toggle the lenticular visual effect.
    fn set_effect(&mut self, on: bool);
    /// Write a message to the status area.
    fn show_status(&mut self, status: &StatusMessage);
    /// Ask the host to enter fullscreen presentation.
    fn request_fullscreen(&mut self);
}

/// Every call a [`RecordingDisplay`] received, in order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DisplayEvent {
    LoadRequested { ticket: Ticket, index: FrameIndex },
    Presented { index: FrameIndex, name: String },
    Effect(bool),
    Status(StatusMessage),
    Fullscreen,
}

/// In-memory display for tests, replay and headless use.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    events: Vec<DisplayEvent>,
    pending_loads: Vec<(Ticket, FrameIndex)>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[DisplayEvent] {
        &self.events
    }

    /// Drain load requests not yet handed to the host.
    pub fn take_load_requests(&mut self) -> Vec<(Ticket, FrameIndex)> {
        std::mem::take(&mut self.pending_loads)
    }

    pub fn presented(&self) -> Vec<FrameIndex> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DisplayEvent::Presented { index, .. } => Some(*index),
                _ => None,
            })
            .collect()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.events.iter().rev().find_map(|e| match e {
            DisplayEvent::Status(s) => Some(s),
            _ => None,
        })
    }

    pub fn effect_on(&self) -> bool {
        self.events
            .iter()
            .rev()
            .find_map(|e| match e {
                DisplayEvent::Effect(on) => Some(*on),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl CardDisplay for RecordingDisplay {
    fn load_frame(&mut self, ticket: Ticket, index: FrameIndex, _frame: &CachedFrame) {
        self.pending_loads.push((ticket, index));
        self.events.push(DisplayEvent::LoadRequested { ticket, index });
    }

    fn present_frame(&mut self, index: FrameIndex, frame: &CachedFrame) {
        self.events.push(DisplayEvent::Presented {
            index,
            name: frame.name.clone(),
        });
    }

    fn set_effect(&mut self, on: bool) {
        self.events.push(DisplayEvent::Effect(on));
    }

    fn show_status(&mut self, status: &StatusMessage) {
        self.events.push(DisplayEvent::Status(status.clone()));
    }

    fn request_fullscreen(&mut self) {
        self.events.push(DisplayEvent::Fullscreen);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/display.rs"]
mod tests;
