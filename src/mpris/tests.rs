use super::*;
use crate::playlist::MediaRef;
use std::sync::mpsc;

fn make_track() -> Track {
    Track {
        name: "Test Title".to_string(),
        artist: "Test Artist".to_string(),
        artwork: MediaRef::from_bytes("/tmp/art/cover.png", vec![1u8]),
        audio: MediaRef::from_bytes("/tmp/music/test.mp3", vec![1u8]),
    }
}

fn handle() -> (MprisHandle, Arc<Mutex<SharedState>>) {
    let state = Arc::new(Mutex::new(SharedState::default()));
    (
        MprisHandle {
            state: state.clone(),
        },
        state,
    )
}

#[test]
fn trackid_and_title_come_from_the_same_loaded_track() {
    let (handle, state) = handle();
    let track = make_track();
    handle.set_track_metadata(Some((3, &track)), None);

    let s = state.lock().unwrap();
    assert_eq!(
        s.track_id.as_ref().map(|p| p.as_str()),
        Some("/org/playdeck/track/3")
    );
    assert_eq!(s.title.as_deref(), Some("Test Title"));
    assert_eq!(s.length_micros, None);
}

#[test]
fn set_track_metadata_sets_and_clears_shared_state() {
    let (handle, state) = handle();
    let track = make_track();
    handle.set_track_metadata(Some((7, &track)), Some(Duration::from_micros(1_234_567)));

    {
        let s = state.lock().unwrap();
        assert_eq!(s.title.as_deref(), Some("Test Title"));
        assert_eq!(s.artist.as_deref(), Some("Test Artist"));
        assert_eq!(s.art_url.as_deref(), Some("file:///tmp/art/cover.png"));
        assert_eq!(s.length_micros, Some(1_234_567));
        assert_eq!(
            s.track_id.as_ref().map(|p| p.as_str()),
            Some("/org/playdeck/track/7")
        );
    }

    handle.set_track_metadata(None, Some(Duration::from_secs(5)));
    {
        let s = state.lock().unwrap();
        assert_eq!(s.title, None);
        assert_eq!(s.artist, None);
        assert_eq!(s.art_url, None);
        assert_eq!(s.length_micros, None);
        assert!(s.track_id.is_none());
    }
}

#[test]
fn playback_status_maps_state() {
    let (handle, state) = handle();
    let (tx, _rx) = mpsc::channel::<ControlCmd>();
    let iface = PlayerIface { tx, state };

    assert_eq!(iface.playback_status(), "Stopped");
    handle.set_playback(PlaybackState::Playing);
    assert_eq!(iface.playback_status(), "Playing");
    handle.set_playback(PlaybackState::Paused);
    assert_eq!(iface.playback_status(), "Paused");
}

#[test]
fn metadata_includes_expected_keys_when_present() {
    let (handle, state) = handle();
    let (tx, _rx) = mpsc::channel::<ControlCmd>();
    let iface = PlayerIface { tx, state };

    assert!(iface.metadata().is_empty());

    handle.set_track_metadata(Some((0, &make_track())), Some(Duration::from_secs(3)));
    let map = iface.metadata();
    for k in [
        "mpris:trackid",
        "xesam:title",
        "xesam:artist",
        "mpris:artUrl",
        "mpris:length",
    ] {
        assert!(map.contains_key(k), "missing key: {k}");
    }
}

#[test]
fn methods_forward_commands() {
    let (_handle, state) = handle();
    let (tx, rx) = mpsc::channel::<ControlCmd>();
    let iface = PlayerIface { tx, state };

    iface.play_pause();
    iface.stop();
    iface.next();
    iface.previous();
    let got: Vec<_> = rx.try_iter().collect();
    assert_eq!(
        got,
        [
            ControlCmd::PlayPause,
            ControlCmd::Stop,
            ControlCmd::Next,
            ControlCmd::Prev
        ]
    );
}
