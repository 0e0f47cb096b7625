//! Error types for playlist and playback control.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by playlist controller operations.
///
/// Every variant is fully recovered where it is raised: the operation that
/// failed leaves the playlist and selection untouched.
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// A required track field was left empty.
    #[error("All fields are required.")]
    Validation { field: TrackField },

    /// The action needs a selected track and there is none.
    #[error("Select a track to {action}.")]
    NoSelection { action: &'static str },

    /// The playlist has no tracks.
    #[error("No tracks available to play.")]
    EmptyPlaylist,

    /// Nothing has been loaded into the player yet.
    #[error("No track is currently playing.")]
    NoTrackLoaded,

    /// Selection index outside `0..len`.
    #[error("Track {0} does not exist.")]
    IndexOutOfRange(usize),

    /// A media file could not be read.
    #[error("Could not read {}: {source}", path.display())]
    Media {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The fields of the add/edit form, in display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TrackField {
    Name,
    Artist,
    Artwork,
    Audio,
}

impl TrackField {
    pub const ALL: [TrackField; 4] = [
        TrackField::Name,
        TrackField::Artist,
        TrackField::Artwork,
        TrackField::Audio,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TrackField::Name => "Name",
            TrackField::Artist => "Artist",
            TrackField::Artwork => "Artwork",
            TrackField::Audio => "Audio file",
        }
    }
}

pub type Result<T> = std::result::Result<T, PlaylistError>;
