//! MPRIS remote control over the D-Bus session bus.
//!
//! The service runs on its own thread and forwards method calls as
//! `ControlCmd`s; the event loop publishes state back through `MprisHandle`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, mpsc::Sender};
use std::time::Duration;

use async_io::{Timer, block_on};
use tracing::{info, warn};
use zbus::{Connection, interface};
use zvariant::{ObjectPath, OwnedObjectPath, OwnedValue, Value};

use crate::controller::PlaybackState;
use crate::playlist::Track;

pub const BUS_NAME: &str = "org.mpris.MediaPlayer2.playdeck";
const OBJECT_PATH: &str = "/org/mpris/MediaPlayer2";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlCmd {
    Quit,
    Play,
    Pause,
    PlayPause,
    /// Treated as pause; there is no separate stopped-with-source state.
    Stop,
    Next,
    Prev,
}

#[derive(Debug, Default)]
struct SharedState {
    playback: PlaybackState,
    track_id: Option<OwnedObjectPath>,
    title: Option<String>,
    artist: Option<String>,
    art_url: Option<String>,
    length_micros: Option<i64>,
}

pub struct MprisHandle {
    state: Arc<Mutex<SharedState>>,
}

impl MprisHandle {
    pub fn set_playback(&self, playback: PlaybackState) {
        if let Ok(mut s) = self.state.lock() {
            s.playback = playback;
        }
    }

    /// Publish the loaded track, or clear everything with `None`.
    pub fn set_track_metadata(&self, loaded: Option<(u64, &Track)>, length: Option<Duration>) {
        let Ok(mut s) = self.state.lock() else {
            return;
        };
        let track = loaded.map(|(_, t)| t);
        s.track_id = loaded
            .and_then(|(id, _)| ObjectPath::try_from(format!("/org/playdeck/track/{id}")).ok())
            .map(OwnedObjectPath::from);
        s.title = track.map(|t| t.name.clone());
        s.artist = track.map(|t| t.artist.clone());
        s.art_url = track.map(|t| format!("file://{}", t.artwork.path().display()));
        s.length_micros = track
            .and(length)
            .and_then(|d| i64::try_from(d.as_micros()).ok());
    }
}

struct RootIface {
    tx: Sender<ControlCmd>,
}

#[interface(name = "org.mpris.MediaPlayer2")]
impl RootIface {
    fn raise(&self) {}

    fn quit(&self) {
        let _ = self.tx.send(ControlCmd::Quit);
    }

    #[zbus(property)]
    fn can_quit(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_raise(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn has_track_list(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn identity(&self) -> &str {
        "playdeck"
    }

    #[zbus(property)]
    fn supported_uri_schemes(&self) -> Vec<String> {
        vec![]
    }

    #[zbus(property)]
    fn supported_mime_types(&self) -> Vec<String> {
        vec![]
    }
}

struct PlayerIface {
    tx: Sender<ControlCmd>,
    state: Arc<Mutex<SharedState>>,
}

#[interface(name = "org.mpris.MediaPlayer2.Player")]
impl PlayerIface {
    fn next(&self) {
        let _ = self.tx.send(ControlCmd::Next);
    }

    fn previous(&self) {
        let _ = self.tx.send(ControlCmd::Prev);
    }

    fn play(&self) {
        let _ = self.tx.send(ControlCmd::Play);
    }

    fn pause(&self) {
        let _ = self.tx.send(ControlCmd::Pause);
    }

    fn play_pause(&self) {
        let _ = self.tx.send(ControlCmd::PlayPause);
    }

    fn stop(&self) {
        let _ = self.tx.send(ControlCmd::Stop);
    }

    #[zbus(property)]
    fn playback_status(&self) -> &str {
        let Ok(s) = self.state.lock() else {
            return "Stopped";
        };
        match s.playback {
            PlaybackState::Stopped => "Stopped",
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
        }
    }

    #[zbus(property)]
    fn can_control(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_play(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_pause(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_next(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_previous(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn metadata(&self) -> HashMap<String, OwnedValue> {
        let mut map = HashMap::new();
        let Ok(s) = self.state.lock() else {
            return map;
        };

        if let Some(id) = &s.track_id {
            insert(&mut map, "mpris:trackid", Value::from(id.clone().into_inner()));
        }
        if let Some(title) = &s.title {
            insert(&mut map, "xesam:title", Value::from(title.clone()));
        }
        if let Some(artist) = &s.artist {
            insert(&mut map, "xesam:artist", Value::from(vec![artist.clone()]));
        }
        if let Some(url) = &s.art_url {
            insert(&mut map, "mpris:artUrl", Value::from(url.clone()));
        }
        if let Some(len) = s.length_micros {
            insert(&mut map, "mpris:length", Value::from(len));
        }
        map
    }
}

fn insert(map: &mut HashMap<String, OwnedValue>, key: &str, value: Value<'_>) {
    match OwnedValue::try_from(value) {
        Ok(v) => {
            map.insert(key.to_string(), v);
        }
        Err(e) => warn!("MPRIS: cannot encode {key}: {e}"),
    }
}

pub fn spawn_mpris(tx: Sender<ControlCmd>) -> MprisHandle {
    let state = Arc::new(Mutex::new(SharedState::default()));

    let state_for_thread = state.clone();
    std::thread::spawn(move || {
        block_on(async move {
            let connection = match Connection::session().await {
                Ok(c) => c,
                Err(e) => {
                    warn!("MPRIS: failed to connect to session bus: {e}");
                    return;
                }
            };

            if let Err(e) = connection.request_name(BUS_NAME).await {
                warn!("MPRIS: failed to acquire name: {e}");
                return;
            }

            let object_server = connection.object_server();

            if let Err(e) = object_server
                .at(OBJECT_PATH, RootIface { tx: tx.clone() })
                .await
            {
                warn!("MPRIS: failed to register root iface: {e}");
                return;
            }

            if let Err(e) = object_server
                .at(
                    OBJECT_PATH,
                    PlayerIface {
                        tx,
                        state: state_for_thread,
                    },
                )
                .await
            {
                warn!("MPRIS: failed to register player iface: {e}");
                return;
            }

            info!("MPRIS: serving {BUS_NAME}");
            loop {
                Timer::after(Duration::from_secs(3600)).await;
            }
        });
    });

    MprisHandle { state }
}

#[cfg(test)]
mod tests;
