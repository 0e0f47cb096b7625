//! In-memory `Playback` used by unit tests.

use std::time::Duration;

use crate::playlist::MediaRef;

use super::types::Playback;

/// Records what the controller asked for without touching an audio device.
#[derive(Debug, Default)]
pub struct FakePlayback {
    pub source: Option<MediaRef>,
    pub paused: bool,
    pub position: Duration,
    pub duration: Option<Duration>,
    pub volume: f32,
    pub loads: usize,
}

impl Playback for FakePlayback {
    fn load(&mut self, source: &MediaRef) {
        self.source = Some(source.clone());
        self.paused = true;
        self.position = Duration::ZERO;
        self.duration = None;
        self.loads += 1;
    }
    fn play(&mut self) {
        if self.source.is_some() {
            self.paused = false;
        }
    }
    fn pause(&mut self) {
        if self.source.is_some() {
            self.paused = true;
        }
    }
    fn is_paused(&self) -> bool {
        self.source.is_none() || self.paused
    }
    fn has_source(&self) -> bool {
        self.source.is_some()
    }
    fn current_time(&self) -> Duration {
        self.position
    }
    fn set_current_time(&mut self, position: Duration) {
        self.position = match self.duration {
            Some(total) => position.min(total),
            None => position,
        };
    }
    fn duration(&self) -> Option<Duration> {
        self.duration
    }
    fn volume(&self) -> f32 {
        self.volume
    }
    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }
}
