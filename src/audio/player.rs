use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::AudioSettings;
use crate::playlist::MediaRef;

use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, Playback, PlaybackEvent, PlaybackHandle, PlaybackInfo};

/// Handle to the audio thread.
///
/// State changes requested through `Playback` are written to the shared
/// `PlaybackInfo` immediately, so queries right after a command see its
/// effect; the audio thread then catches up and keeps position current.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    playback: PlaybackHandle,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    pub fn new(audio_settings: &AudioSettings, events: Sender<PlaybackEvent>) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let playback_info: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo::default()));

        let audio_handle = spawn_audio_thread(
            rx,
            playback_info.clone(),
            events,
            Duration::from_millis(audio_settings.tick_ms.max(1)),
        );

        let player = Self::with_channel(tx, playback_info);
        if let Ok(mut j) = player.join.lock() {
            *j = Some(audio_handle);
        }
        player
    }

    pub(super) fn with_channel(tx: Sender<AudioCmd>, playback: PlaybackHandle) -> Self {
        Self {
            tx,
            playback,
            join: Mutex::new(None),
        }
    }

    pub fn send(&self, cmd: AudioCmd) -> Result<(), mpsc::SendError<AudioCmd>> {
        self.tx.send(cmd)
    }

    /// Stop playback and wait for the audio thread to exit.
    pub fn quit(&self) {
        let _ = self.send(AudioCmd::Quit);

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }

    fn read<T>(&self, f: impl FnOnce(&PlaybackInfo) -> T, fallback: T) -> T {
        self.playback.lock().map(|info| f(&info)).unwrap_or(fallback)
    }

    fn write(&self, f: impl FnOnce(&mut PlaybackInfo)) {
        if let Ok(mut info) = self.playback.lock() {
            f(&mut info);
        }
    }
}

impl Playback for AudioPlayer {
    fn load(&mut self, source: &MediaRef) {
        self.write(|info| {
            info.loaded = true;
            info.paused = true;
            info.position = Duration::ZERO;
            info.duration = None;
        });
        let _ = self.send(AudioCmd::Load(source.clone()));
    }

    fn play(&mut self) {
        if !self.has_source() {
            return;
        }
        self.write(|info| info.paused = false);
        let _ = self.send(AudioCmd::Play);
    }

    fn pause(&mut self) {
        if !self.has_source() {
            return;
        }
        self.write(|info| info.paused = true);
        let _ = self.send(AudioCmd::Pause);
    }

    fn is_paused(&self) -> bool {
        self.read(|info| info.paused, true)
    }

    fn has_source(&self) -> bool {
        self.read(|info| info.loaded, false)
    }

    fn current_time(&self) -> Duration {
        self.read(|info| info.position, Duration::ZERO)
    }

    fn set_current_time(&mut self, position: Duration) {
        if !self.has_source() {
            return;
        }
        let position = match self.duration() {
            Some(total) => position.min(total),
            None => position,
        };
        self.write(|info| info.position = position);
        let _ = self.send(AudioCmd::Seek(position));
    }

    fn duration(&self) -> Option<Duration> {
        self.read(|info| info.duration, None)
    }

    fn volume(&self) -> f32 {
        self.read(|info| info.volume, 1.0)
    }

    fn set_volume(&mut self, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        self.write(|info| info.volume = volume);
        let _ = self.send(AudioCmd::SetVolume(volume));
    }
}
