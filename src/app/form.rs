//! The add/edit track form.

use std::path::{Path, PathBuf};

use crate::error::TrackField;
use crate::playlist::{MediaRef, MediaSource, Track, TrackFields};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

/// Text input state for one track.
#[derive(Debug, Clone)]
pub struct TrackForm {
    pub mode: FormMode,
    pub name: String,
    pub artist: String,
    pub artwork: String,
    pub audio: String,
    pub focus: TrackField,
    /// Playlist index the edit form was opened for.
    target: Option<usize>,
    /// Media of the track being edited, reused when its path is left alone.
    existing: Option<(MediaRef, MediaRef)>,
}

impl TrackForm {
    pub fn add() -> Self {
        Self {
            mode: FormMode::Add,
            name: String::new(),
            artist: String::new(),
            artwork: String::new(),
            audio: String::new(),
            focus: TrackField::Name,
            target: None,
            existing: None,
        }
    }

    /// Prefill from `track` at `index`, showing the paths its media was read
    /// from.
    pub fn edit(index: usize, track: &Track) -> Self {
        Self {
            mode: FormMode::Edit,
            name: track.name.clone(),
            artist: track.artist.clone(),
            artwork: track.artwork.path().display().to_string(),
            audio: track.audio.path().display().to_string(),
            focus: TrackField::Name,
            target: Some(index),
            existing: Some((track.artwork.clone(), track.audio.clone())),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => " add track ",
            FormMode::Edit => " edit track ",
        }
    }

    /// The index an edit form writes to; `None` in add mode.
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn value(&self, field: TrackField) -> &str {
        match field {
            TrackField::Name => &self.name,
            TrackField::Artist => &self.artist,
            TrackField::Artwork => &self.artwork,
            TrackField::Audio => &self.audio,
        }
    }

    fn value_mut(&mut self, field: TrackField) -> &mut String {
        match field {
            TrackField::Name => &mut self.name,
            TrackField::Artist => &mut self.artist,
            TrackField::Artwork => &mut self.artwork,
            TrackField::Audio => &mut self.audio,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.value_mut(self.focus).push(c);
    }

    pub fn pop_char(&mut self) {
        self.value_mut(self.focus).pop();
    }

    /// Move focus to the next field, wrapping.
    pub fn focus_next(&mut self) {
        let i = field_pos(self.focus);
        self.focus = TrackField::ALL[(i + 1) % TrackField::ALL.len()];
    }

    /// Move focus to the previous field, wrapping.
    pub fn focus_prev(&mut self) {
        let n = TrackField::ALL.len();
        let i = field_pos(self.focus);
        self.focus = TrackField::ALL[(i + n - 1) % n];
    }

    /// Convert the text inputs into `TrackFields` for the controller.
    ///
    /// Blank paths become missing fields. A path equal to the edited track's
    /// keeps the already loaded handle instead of re-reading the file.
    pub fn to_fields(&self) -> TrackFields {
        let (old_art, old_audio) = match &self.existing {
            Some((art, audio)) => (Some(art), Some(audio)),
            None => (None, None),
        };
        TrackFields {
            name: self.name.clone(),
            artist: self.artist.clone(),
            artwork: media_source(&self.artwork, old_art),
            audio: media_source(&self.audio, old_audio),
        }
    }
}

fn field_pos(field: TrackField) -> usize {
    TrackField::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or(0)
}

fn media_source(input: &str, existing: Option<&MediaRef>) -> Option<MediaSource> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let path = Path::new(input);
    match existing {
        Some(m) if m.path() == path => Some(MediaSource::Loaded(m.clone())),
        _ => Some(MediaSource::Path(PathBuf::from(input))),
    }
}
