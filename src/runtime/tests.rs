use super::event_loop::handle_control_cmd;
use crate::app::App;
use crate::audio::fake::FakePlayback;
use crate::controller::{Controller, PlaybackState};
use crate::mpris::ControlCmd;
use crate::playlist::{MediaRef, MediaSource, TrackFields};

fn app_with(names: &[&str]) -> App<FakePlayback> {
    let mut c = Controller::new(FakePlayback::default());
    for n in names {
        c.add(TrackFields {
            name: (*n).into(),
            artist: "someone".into(),
            artwork: Some(MediaSource::Loaded(MediaRef::from_bytes(
                format!("/tmp/{n}.png"),
                vec![1u8],
            ))),
            audio: Some(MediaSource::Loaded(MediaRef::from_bytes(
                format!("/tmp/{n}.mp3"),
                vec![1u8],
            ))),
        })
        .unwrap();
    }
    App::new(c)
}

#[test]
fn remote_next_and_prev_move_selection() {
    let mut app = app_with(&["a", "b"]);
    assert!(!handle_control_cmd(ControlCmd::Next, &mut app));
    assert_eq!(app.controller.selection(), Some(0));
    assert!(!handle_control_cmd(ControlCmd::Next, &mut app));
    assert_eq!(app.controller.selection(), Some(1));
    assert_eq!(app.cursor(), 1);
    assert!(!handle_control_cmd(ControlCmd::Prev, &mut app));
    assert_eq!(app.controller.selection(), Some(0));
}

#[test]
fn remote_track_changes_are_dropped_while_form_is_open() {
    let mut app = app_with(&["a", "b"]);
    app.select_cursor();
    app.edit_prompt();

    handle_control_cmd(ControlCmd::Next, &mut app);
    handle_control_cmd(ControlCmd::Prev, &mut app);
    assert_eq!(app.controller.selection(), Some(0));

    app.form_mut().unwrap().name = "a-renamed".into();
    app.save();
    assert!(app.notice().is_none(), "{:?}", app.notice());
    let names: Vec<_> = app
        .controller
        .playlist()
        .tracks()
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(names, ["a-renamed", "b"]);
}

#[test]
fn remote_track_changes_are_dropped_while_notice_is_open() {
    let mut app = app_with(&["a", "b"]);
    app.remove();
    assert_eq!(app.notice(), Some("Select a track to delete."));

    handle_control_cmd(ControlCmd::Next, &mut app);
    assert_eq!(app.controller.selection(), None);

    app.dismiss_notice();
    handle_control_cmd(ControlCmd::Next, &mut app);
    assert_eq!(app.controller.selection(), Some(0));
}

#[test]
fn remote_transport_and_quit() {
    let mut app = app_with(&["a"]);
    app.select_cursor();
    assert_eq!(app.controller.playback_state(), PlaybackState::Playing);
    handle_control_cmd(ControlCmd::Pause, &mut app);
    assert_eq!(app.controller.playback_state(), PlaybackState::Paused);
    handle_control_cmd(ControlCmd::Pause, &mut app);
    assert_eq!(app.controller.playback_state(), PlaybackState::Paused);
    handle_control_cmd(ControlCmd::Play, &mut app);
    assert_eq!(app.controller.playback_state(), PlaybackState::Playing);
    assert!(handle_control_cmd(ControlCmd::Quit, &mut app));
}
