use crate::error::{PlaylistError, Result, TrackField};

use super::media::{MediaRef, MediaSource};

/// One playlist entry. Replaced wholesale on edit, never mutated.
#[derive(Debug, Clone)]
pub struct Track {
    pub name: String,
    pub artist: String,
    pub artwork: MediaRef,
    pub audio: MediaRef,
}

/// Raw input from the add/edit form.
#[derive(Debug, Clone, Default)]
pub struct TrackFields {
    pub name: String,
    pub artist: String,
    pub artwork: Option<MediaSource>,
    pub audio: Option<MediaSource>,
}

impl TrackFields {
    /// Check that every field is present, before any file is touched.
    pub fn validate(&self) -> Result<()> {
        let missing = if self.name.trim().is_empty() {
            Some(TrackField::Name)
        } else if self.artist.trim().is_empty() {
            Some(TrackField::Artist)
        } else if self.artwork.is_none() {
            Some(TrackField::Artwork)
        } else if self.audio.is_none() {
            Some(TrackField::Audio)
        } else {
            None
        };

        match missing {
            Some(field) => Err(PlaylistError::Validation { field }),
            None => Ok(()),
        }
    }

    /// Validate and load the media, producing a `Track`.
    pub fn into_track(self) -> Result<Track> {
        self.validate()?;
        let TrackFields {
            name,
            artist,
            artwork,
            audio,
        } = self;

        let artwork = artwork
            .ok_or(PlaylistError::Validation {
                field: TrackField::Artwork,
            })?
            .resolve(TrackField::Artwork)?;
        let audio = audio
            .ok_or(PlaylistError::Validation {
                field: TrackField::Audio,
            })?
            .resolve(TrackField::Audio)?;

        Ok(Track {
            name,
            artist,
            artwork,
            audio,
        })
    }
}

/// Ordered track list; insertion order is display and playback order.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Append `track`, returning its index.
    pub fn push(&mut self, track: Track) -> usize {
        self.tracks.push(track);
        self.tracks.len() - 1
    }

    /// Replace the track at `index`, returning the old one.
    pub fn replace(&mut self, index: usize, track: Track) -> Option<Track> {
        self.tracks
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, track))
    }

    /// Remove the track at `index`; later tracks shift down by one.
    pub fn remove(&mut self, index: usize) -> Option<Track> {
        if index < self.tracks.len() {
            Some(self.tracks.remove(index))
        } else {
            None
        }
    }
}
