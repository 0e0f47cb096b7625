use std::time::Duration;

use crate::app::App;
use crate::audio::Playback;
use crate::controller::PlaybackState;
use crate::mpris::MprisHandle;

/// What MPRIS was last told, so it is only updated on change.
#[derive(Debug, Default, PartialEq)]
pub struct MprisSnapshot {
    loaded: Option<u64>,
    title: Option<String>,
    length: Option<Duration>,
    playback: PlaybackState,
}

impl MprisSnapshot {
    pub fn of<P: Playback>(app: &App<P>) -> Self {
        let ctl = &app.controller;
        Self {
            loaded: ctl.loaded().map(|(id, _)| id),
            title: ctl.loaded().map(|(_, t)| t.name.clone()),
            length: ctl.player().duration(),
            playback: ctl.playback_state(),
        }
    }
}

pub fn update_mpris<P: Playback>(mpris: &MprisHandle, app: &App<P>) {
    let ctl = &app.controller;
    mpris.set_track_metadata(ctl.loaded(), ctl.player().duration());
    mpris.set_playback(ctl.playback_state());
}
