use std::sync::Arc;

use super::*;

fn frame(name: &str) -> CachedFrame {
    CachedFrame {
        name: name.to_owned(),
        width: 1,
        height: 1,
        jpeg: Arc::new(vec![]),
    }
}

#[test]
fn status_text_matches_user_messages() {
    assert_eq!(
        StatusMessage::DeviceUnsupported.to_string(),
        "Device not supported! :("
    );
    assert_eq!(
        StatusMessage::AssetLoadFailure {
            asset: "frame-2.jpg".to_owned()
        }
        .to_string(),
        "Cannot load \"frame-2.jpg\""
    );
    assert_eq!(
        StatusMessage::MotionSignalTimeout.to_string(),
        "Something went wrong..."
    );
}

#[test]
fn only_user_facing_errors_map_to_status() {
    let err = LenticardError::asset_preload("frame-4.jpg", anyhow::anyhow!("x"));
    assert_eq!(
        StatusMessage::for_error(&err),
        Some(StatusMessage::AssetLoadFailure {
            asset: "frame-4.jpg".to_owned()
        })
    );
    assert_eq!(
        StatusMessage::for_error(&LenticardError::transition_load("x")),
        None
    );
}

#[test]
fn recording_display_tracks_state() {
    let mut d = RecordingDisplay::new();
    assert!(!d.effect_on());
    d.load_frame(Ticket(1), FrameIndex(2), &frame("frame-3.jpg"));
    d.present_frame(FrameIndex(2), &frame("frame-3.jpg"));
    d.set_effect(true);
    d.request_fullscreen();

    assert_eq!(d.take_load_requests(), vec![(Ticket(1), FrameIndex(2))]);
    assert!(d.take_load_requests().is_empty());
    assert_eq!(d.presented(), vec![FrameIndex(2)]);
    assert!(d.effect_on());
    assert_eq!(d.status(), None);
    assert_eq!(d.events().last(), Some(&DisplayEvent::Fullscreen));
}
