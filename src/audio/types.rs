//! Audio-related small types and handles.
//!
//! This module defines the `Playback` trait, the commands sent to the audio
//! thread, the events it sends back and the shared playback snapshot.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::playlist::MediaRef;

/// The playback primitive the playlist controller drives.
///
/// Mirrors a media element: a single loaded source, a paused flag, a
/// position that can be read and set, an optional duration and a volume.
pub trait Playback {
    /// Replace the current source. Playback is paused at position zero.
    fn load(&mut self, source: &MediaRef);
    fn play(&mut self);
    fn pause(&mut self);
    fn is_paused(&self) -> bool;
    /// Whether any source has been loaded.
    fn has_source(&self) -> bool;
    fn current_time(&self) -> Duration;
    fn set_current_time(&mut self, position: Duration);
    /// Total length of the source, `None` until it is known.
    fn duration(&self) -> Option<Duration>;
    /// Volume in `0.0..=1.0`.
    fn volume(&self) -> f32;
    fn set_volume(&mut self, volume: f32);
}

#[derive(Debug)]
pub enum AudioCmd {
    /// Decode `MediaRef` into a fresh, paused sink.
    Load(MediaRef),
    /// Resume (or restart, if the source ended) playback.
    Play,
    /// Pause playback.
    Pause,
    /// Jump to an absolute position.
    Seek(Duration),
    /// Set the output volume (`0.0..=1.0`).
    SetVolume(f32),
    /// Stop and exit the audio thread.
    Quit,
}

/// Notifications from the audio thread.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// A source was loaded; its duration is known, or will stay unknown.
    MetadataLoaded,
    /// The playback position moved.
    TimeUpdate,
    /// The source played to the end; the player is now paused.
    Ended,
}

/// Runtime playback information shared with the UI.
#[derive(Debug, Clone)]
pub struct PlaybackInfo {
    /// Whether a source has been loaded.
    pub loaded: bool,
    pub paused: bool,
    pub position: Duration,
    pub duration: Option<Duration>,
    pub volume: f32,
}

impl Default for PlaybackInfo {
    fn default() -> Self {
        Self {
            loaded: false,
            paused: true,
            position: Duration::ZERO,
            duration: None,
            volume: 1.0,
        }
    }
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
