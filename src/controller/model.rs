//! Controller state and operations.
//!
//! Every fallible operation validates first and mutates after, so an `Err`
//! always means nothing changed.

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info};

use crate::audio::Playback;
use crate::config::NavigationPolicy;
use crate::error::{PlaylistError, Result};
use crate::playlist::{Playlist, Track, TrackFields, next_index, previous_index, random_index};

use super::display::TimeDisplay;

/// The playback state as shown to the user and to MPRIS.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Owns the playlist and selection and drives a `Playback` implementation.
pub struct Controller<P: Playback> {
    playlist: Playlist,
    selection: Option<usize>,
    /// Track whose metadata the header shows; captured at select time.
    now_showing: Option<Track>,
    /// Bumped on every select; identifies the loaded track.
    loads: u64,
    pub(super) player: P,
    display: TimeDisplay,
    policy: NavigationPolicy,
    random_pulse: Duration,
    pulse_until: Option<Instant>,
}

impl<P: Playback> Controller<P> {
    pub fn new(player: P) -> Self {
        Self {
            playlist: Playlist::new(),
            selection: None,
            now_showing: None,
            loads: 0,
            player,
            display: TimeDisplay::default(),
            policy: NavigationPolicy::default(),
            random_pulse: Duration::from_millis(1000),
            pulse_until: None,
        }
    }

    pub fn with_policy(mut self, policy: NavigationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_random_pulse(mut self, pulse: Duration) -> Self {
        self.random_pulse = pulse;
        self
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn selected_track(&self) -> Option<&Track> {
        self.selection.and_then(|i| self.playlist.get(i))
    }

    pub fn now_showing(&self) -> Option<&Track> {
        self.now_showing.as_ref()
    }

    /// The loaded track with an id that is stable until the next select.
    /// Edits and deletes do not change either.
    pub fn loaded(&self) -> Option<(u64, &Track)> {
        self.now_showing.as_ref().map(|t| (self.loads, t))
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn time_display(&self) -> &TimeDisplay {
        &self.display
    }

    /// Append a new track. Selection is left as it was.
    pub fn add(&mut self, fields: TrackFields) -> Result<&Track> {
        let track = fields.into_track()?;
        info!(
            "adding track '{}' by '{}' ({} audio bytes)",
            track.name,
            track.artist,
            track.audio.byte_len()
        );
        let index = self.playlist.push(track);
        Ok(&self.playlist.tracks()[index])
    }

    /// Replace the selected track. The live player is not reloaded.
    pub fn edit(&mut self, fields: TrackFields) -> Result<&Track> {
        let index = self
            .selection
            .ok_or(PlaylistError::NoSelection { action: "edit" })?;
        let track = fields.into_track()?;
        info!("editing track {} -> '{}' by '{}'", index, track.name, track.artist);
        self.playlist
            .replace(index, track)
            .ok_or(PlaylistError::IndexOutOfRange(index))?;
        Ok(&self.playlist.tracks()[index])
    }

    /// Remove the selected track and clear the selection.
    pub fn remove(&mut self) -> Result<Track> {
        let index = self
            .selection
            .ok_or(PlaylistError::NoSelection { action: "delete" })?;
        let removed = self
            .playlist
            .remove(index)
            .ok_or(PlaylistError::IndexOutOfRange(index))?;
        self.selection = None;
        info!("removed track {} '{}'", index, removed.name);
        debug!("audio handles still live: {}", removed.audio.handle_count());
        Ok(removed)
    }

    /// Select `index`, load its audio and start playing.
    pub fn select(&mut self, index: usize) -> Result<()> {
        let track = self
            .playlist
            .get(index)
            .ok_or(PlaylistError::IndexOutOfRange(index))?
            .clone();

        debug!("selecting track {index}");
        self.selection = Some(index);
        self.player.load(&track.audio);
        self.player.play();
        self.now_showing = Some(track);
        self.loads += 1;
        self.on_playback_position_changed();
        Ok(())
    }

    pub fn next(&mut self) -> Result<()> {
        let current = self.navigation_start("play next")?;
        let index = next_index(current, self.playlist.len()).ok_or(PlaylistError::EmptyPlaylist)?;
        self.select(index)
    }

    pub fn previous(&mut self) -> Result<()> {
        let current = self.navigation_start("play previous")?;
        let index =
            previous_index(current, self.playlist.len()).ok_or(PlaylistError::EmptyPlaylist)?;
        self.select(index)
    }

    fn navigation_start(&self, action: &'static str) -> Result<Option<usize>> {
        if self.playlist.is_empty() {
            return Err(PlaylistError::EmptyPlaylist);
        }
        match (self.selection, self.policy) {
            (None, NavigationPolicy::Reject) => Err(PlaylistError::NoSelection { action }),
            (current, _) => Ok(current),
        }
    }

    /// Select a random track other than the current one.
    pub fn random(&mut self) -> Result<()> {
        self.random_with(&mut rand::rng(), Instant::now())
    }

    pub fn random_with<R: Rng + ?Sized>(&mut self, rng: &mut R, now: Instant) -> Result<()> {
        let index = random_index(self.selection, self.playlist.len(), rng)
            .ok_or(PlaylistError::EmptyPlaylist)?;
        self.pulse_until = Some(now + self.random_pulse);
        self.select(index)
    }

    /// Whether the random control should still be highlighted at `now`.
    pub fn is_random_pulsing(&self, now: Instant) -> bool {
        self.pulse_until.is_some_and(|until| now < until)
    }

    /// Restart the loaded track from the beginning.
    pub fn repeat(&mut self) -> Result<()> {
        if !self.player.has_source() {
            return Err(PlaylistError::NoTrackLoaded);
        }
        self.player.set_current_time(Duration::ZERO);
        self.player.play();
        Ok(())
    }

    pub fn toggle_play_pause(&mut self) {
        if self.player.is_paused() {
            self.player.play();
        } else {
            self.player.pause();
        }
    }

    /// Seek to `percent` (0–100) of the track. No-op until the duration is known.
    pub fn seek(&mut self, percent: f64) {
        let Some(total) = self.player.duration().filter(|d| !d.is_zero()) else {
            return;
        };
        let fraction = percent.clamp(0.0, 100.0) / 100.0;
        self.player.set_current_time(total.mul_f64(fraction));
    }

    /// Set the volume from a 0–100 percentage.
    pub fn set_volume(&mut self, percent: f64) {
        self.player.set_volume((percent.clamp(0.0, 100.0) / 100.0) as f32);
    }

    pub fn volume_percent(&self) -> u8 {
        (self.player.volume() * 100.0).round().clamp(0.0, 100.0) as u8
    }

    /// Refresh the time strings and seek indicator from the player.
    pub fn on_playback_position_changed(&mut self) {
        self.display
            .update(self.player.current_time(), self.player.duration());
    }

    pub fn playback_state(&self) -> PlaybackState {
        if !self.player.has_source() {
            PlaybackState::Stopped
        } else if self.player.is_paused() {
            PlaybackState::Paused
        } else {
            PlaybackState::Playing
        }
    }

    /// "Playing {n} of {len}" for the selection, or "No track selected".
    pub fn now_playing_text(&self) -> String {
        match self.selection {
            Some(i) if !self.playlist.is_empty() => {
                format!("Playing {} of {}", i + 1, self.playlist.len())
            }
            _ => "No track selected".to_string(),
        }
    }
}
