use super::*;
use crate::audio::Playback;
use crate::audio::fake::FakePlayback;
use crate::config::NavigationPolicy;
use crate::error::{PlaylistError, TrackField};
use crate::playlist::{MediaRef, MediaSource, TrackFields};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

fn media(path: &str) -> MediaRef {
    MediaRef::from_bytes(path, vec![7u8; 4])
}

fn fields(name: &str) -> TrackFields {
    TrackFields {
        name: name.into(),
        artist: format!("{name} artist"),
        artwork: Some(MediaSource::Loaded(media(&format!("/tmp/{name}.png")))),
        audio: Some(MediaSource::Loaded(media(&format!("/tmp/{name}.mp3")))),
    }
}

fn controller_with(names: &[&str]) -> Controller<FakePlayback> {
    let mut c = Controller::new(FakePlayback::default());
    for n in names {
        c.add(fields(n)).unwrap();
    }
    c
}

fn names(c: &Controller<FakePlayback>) -> Vec<String> {
    c.playlist().tracks().iter().map(|t| t.name.clone()).collect()
}

#[test]
fn adds_preserve_order_and_leave_selection_alone() {
    let mut c = controller_with(&["a", "b"]);
    c.select(1).unwrap();
    c.add(fields("c")).unwrap();
    assert_eq!(names(&c), vec!["a", "b", "c"]);
    assert_eq!(c.selection(), Some(1));
}

#[test]
fn add_with_missing_field_changes_nothing() {
    let mut c = controller_with(&["a"]);
    c.select(0).unwrap();
    let bad = TrackFields {
        artist: String::new(),
        ..fields("b")
    };
    assert!(matches!(
        c.add(bad),
        Err(PlaylistError::Validation {
            field: TrackField::Artist
        })
    ));
    assert_eq!(names(&c), vec!["a"]);
    assert_eq!(c.selection(), Some(0));
}

#[test]
fn edit_without_selection_is_rejected() {
    let mut c = controller_with(&["a", "b"]);
    let err = c.edit(fields("z")).unwrap_err();
    assert!(matches!(err, PlaylistError::NoSelection { action: "edit" }));
    assert_eq!(err.to_string(), "Select a track to edit.");
    assert_eq!(names(&c), vec!["a", "b"]);
}

#[test]
fn edit_replaces_in_place_without_reloading_player() {
    let mut c = controller_with(&["a", "b", "c"]);
    c.select(1).unwrap();
    assert_eq!(c.player().loads, 1);

    c.edit(fields("z")).unwrap();
    assert_eq!(names(&c), vec!["a", "z", "c"]);
    assert_eq!(c.selection(), Some(1));
    assert_eq!(c.player().loads, 1);
    assert_eq!(c.now_showing().unwrap().name, "b");
    assert!(!c.player().is_paused());
}

#[test]
fn edit_with_missing_field_changes_nothing() {
    let mut c = controller_with(&["a"]);
    c.select(0).unwrap();
    let bad = TrackFields {
        audio: None,
        ..fields("z")
    };
    assert!(matches!(c.edit(bad), Err(PlaylistError::Validation { .. })));
    assert_eq!(names(&c), vec!["a"]);
    assert_eq!(c.selection(), Some(0));
}

#[test]
fn remove_shifts_and_clears_selection() {
    let mut c = controller_with(&["a", "b", "c", "d"]);
    c.select(1).unwrap();
    let removed = c.remove().unwrap();
    assert_eq!(removed.name, "b");
    assert_eq!(names(&c), vec!["a", "c", "d"]);
    assert_eq!(c.selection(), None);
    assert_eq!(c.now_playing_text(), "No track selected");
}

#[test]
fn remove_last_selected_does_not_dangle() {
    let mut c = controller_with(&["a", "b"]);
    c.select(1).unwrap();
    c.remove().unwrap();
    assert_eq!(c.selection(), None);
    c.select(0).unwrap();
    c.remove().unwrap();
    assert!(c.playlist().is_empty());
    assert_eq!(c.selection(), None);
}

#[test]
fn remove_without_selection_is_rejected() {
    let mut c = controller_with(&["a"]);
    let err = c.remove().unwrap_err();
    assert_eq!(err.to_string(), "Select a track to delete.");
    assert_eq!(c.playlist().len(), 1);
}

#[test]
fn select_loads_plays_and_reports_position() {
    let mut c = controller_with(&["a", "b", "c"]);
    c.select(2).unwrap();
    assert_eq!(c.now_playing_text(), "Playing 3 of 3");
    assert_eq!(c.playback_state(), PlaybackState::Playing);
    assert_eq!(
        c.player().source.as_ref().unwrap().path(),
        std::path::Path::new("/tmp/c.mp3")
    );
    assert_eq!(c.now_showing().unwrap().artist, "c artist");
}

#[test]
fn select_out_of_range_is_rejected() {
    let mut c = controller_with(&["a"]);
    assert!(matches!(c.select(1), Err(PlaylistError::IndexOutOfRange(1))));
    assert_eq!(c.selection(), None);
    assert_eq!(c.player().loads, 0);
}

#[test]
fn next_and_previous_wrap() {
    let mut c = controller_with(&["a", "b", "c"]);
    c.select(2).unwrap();
    c.next().unwrap();
    assert_eq!(c.selection(), Some(0));
    c.previous().unwrap();
    assert_eq!(c.selection(), Some(2));
    c.previous().unwrap();
    assert_eq!(c.selection(), Some(1));
}

#[test]
fn navigation_without_selection_starts_at_edges() {
    let mut c = controller_with(&["a", "b", "c"]);
    c.next().unwrap();
    assert_eq!(c.selection(), Some(0));

    let mut c = controller_with(&["a", "b", "c"]);
    c.previous().unwrap();
    assert_eq!(c.selection(), Some(2));
}

#[test]
fn navigation_without_selection_can_be_rejected() {
    let mut c = controller_with(&["a", "b"]).with_policy(NavigationPolicy::Reject);
    assert!(matches!(c.next(), Err(PlaylistError::NoSelection { .. })));
    assert!(matches!(c.previous(), Err(PlaylistError::NoSelection { .. })));
    assert_eq!(c.selection(), None);
    assert_eq!(c.player().loads, 0);
}

#[test]
fn navigation_on_empty_playlist_fails() {
    let mut c = controller_with(&[]);
    assert!(matches!(c.next(), Err(PlaylistError::EmptyPlaylist)));
    assert!(matches!(c.previous(), Err(PlaylistError::EmptyPlaylist)));
}

#[test]
fn random_never_repeats_and_pulses() {
    let mut c = controller_with(&["a", "b", "c", "d"]).with_random_pulse(Duration::from_secs(1));
    let mut rng = StdRng::seed_from_u64(3);
    let t0 = Instant::now();

    c.select(0).unwrap();
    for _ in 0..100 {
        let before = c.selection();
        c.random_with(&mut rng, t0).unwrap();
        assert_ne!(c.selection(), before);
    }
    assert!(c.is_random_pulsing(t0));
    assert!(c.is_random_pulsing(t0 + Duration::from_millis(999)));
    assert!(!c.is_random_pulsing(t0 + Duration::from_secs(1)));
}

#[test]
fn random_single_track_and_empty() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut c = controller_with(&["only"]);
    c.select(0).unwrap();
    c.random_with(&mut rng, Instant::now()).unwrap();
    assert_eq!(c.selection(), Some(0));

    let mut empty = controller_with(&[]);
    let err = empty.random_with(&mut rng, Instant::now()).unwrap_err();
    assert_eq!(err.to_string(), "No tracks available to play.");
    assert!(!empty.is_random_pulsing(Instant::now()));
}

#[test]
fn repeat_requires_a_loaded_track() {
    let mut c = controller_with(&["a"]);
    let err = c.repeat().unwrap_err();
    assert_eq!(err.to_string(), "No track is currently playing.");

    c.select(0).unwrap();
    c.player.position = Duration::from_secs(42);
    c.toggle_play_pause();
    c.repeat().unwrap();
    assert_eq!(c.player().position, Duration::ZERO);
    assert!(!c.player().is_paused());
    assert_eq!(c.selection(), Some(0));
}

#[test]
fn repeat_still_works_after_the_track_was_deleted() {
    let mut c = controller_with(&["a"]);
    c.select(0).unwrap();
    c.remove().unwrap();
    assert!(c.repeat().is_ok());
}

#[test]
fn toggle_play_pause_flips_state() {
    let mut c = controller_with(&["a"]);
    c.toggle_play_pause();
    assert_eq!(c.playback_state(), PlaybackState::Stopped);

    c.select(0).unwrap();
    c.toggle_play_pause();
    assert_eq!(c.playback_state(), PlaybackState::Paused);
    c.toggle_play_pause();
    assert_eq!(c.playback_state(), PlaybackState::Playing);
}

#[test]
fn seek_uses_fraction_of_duration() {
    let mut c = controller_with(&["a"]);
    c.select(0).unwrap();

    c.seek(50.0);
    assert_eq!(c.player().position, Duration::ZERO);

    c.player.duration = Some(Duration::from_secs(200));
    c.seek(25.0);
    assert_eq!(c.player().position, Duration::from_secs(50));
    c.seek(150.0);
    assert_eq!(c.player().position, Duration::from_secs(200));
}

#[test]
fn set_volume_scales_percent() {
    let mut c = controller_with(&[]);
    c.set_volume(40.0);
    assert!((c.player().volume - 0.4).abs() < f32::EPSILON);
    assert_eq!(c.volume_percent(), 40);
    c.set_volume(250.0);
    assert_eq!(c.volume_percent(), 100);
}

#[test]
fn position_display_formats_and_keeps_indicator_when_unknown() {
    let mut c = controller_with(&["a"]);
    c.select(0).unwrap();
    c.player.duration = Some(Duration::from_secs_f64(125.4));
    c.player.position = Duration::from_secs(65);
    c.on_playback_position_changed();

    let d = c.time_display();
    assert_eq!(d.current, "1:05");
    assert_eq!(d.total, "2:05");
    assert!((d.seek_percent - 65.0 / 125.4 * 100.0).abs() < 1e-9);
    assert!((d.seek_percent - 51.8).abs() < 0.1);

    c.player.duration = None;
    c.on_playback_position_changed();
    let d = c.time_display();
    assert_eq!(d.current, "0:00");
    assert_eq!(d.total, "0:00");
    assert!((d.seek_percent - 51.8).abs() < 0.1);
}

#[test]
fn selecting_a_track_resets_clocks_without_waiting_for_the_player() {
    let mut c = controller_with(&["a", "b"]);
    c.select(0).unwrap();
    c.player.duration = Some(Duration::from_secs(200));
    c.player.position = Duration::from_secs(65);
    c.on_playback_position_changed();
    assert_eq!(c.time_display().current, "1:05");
    assert_eq!(c.time_display().total, "3:20");

    // Undecodable source: no duration ever arrives for it.
    c.select(1).unwrap();
    assert_eq!(c.player.duration, None);
    let d = c.time_display();
    assert_eq!(d.current, "0:00");
    assert_eq!(d.total, "0:00");
}

#[test]
fn loaded_track_and_id_survive_edit_and_remove() {
    let mut c = controller_with(&["a", "b"]);
    assert!(c.loaded().is_none());

    c.select(0).unwrap();
    let (first, _) = c.loaded().unwrap();
    c.select(1).unwrap();
    let (id, track) = c.loaded().unwrap();
    assert_ne!(id, first);
    assert_eq!(track.name, "b");

    c.edit(fields("b2")).unwrap();
    c.remove().unwrap();
    assert_eq!(c.selection(), None);
    let (after, track) = c.loaded().unwrap();
    assert_eq!(after, id);
    assert_eq!(track.name, "b");
}

#[test]
fn format_clock_truncates() {
    assert_eq!(format_clock(Duration::from_secs(0)), "0:00");
    assert_eq!(format_clock(Duration::from_millis(59_999)), "0:59");
    assert_eq!(format_clock(Duration::from_secs(600)), "10:00");
    assert_eq!(format_clock(Duration::from_secs(3725)), "62:05");
}
