//! Reference-counted handles to user-supplied media bytes.
//!
//! A `MediaRef` is created once from a file and then shared between the
//! playlist and the player. The bytes live as long as any clone does.

use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{PlaylistError, Result, TrackField};

struct MediaBlob {
    path: PathBuf,
    bytes: Box<[u8]>,
}

/// Shared, immutable handle to the contents of a media file.
#[derive(Clone)]
pub struct MediaRef(Arc<MediaBlob>);

impl MediaRef {
    /// Read `path` into memory. Empty files count as a missing field.
    pub fn open(path: &Path, field: TrackField) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| PlaylistError::Media {
            path: path.to_path_buf(),
            source,
        })?;
        if bytes.is_empty() {
            return Err(PlaylistError::Validation { field });
        }
        Ok(Self::from_bytes(path, bytes))
    }

    pub fn from_bytes(path: impl Into<PathBuf>, bytes: impl Into<Box<[u8]>>) -> Self {
        Self(Arc::new(MediaBlob {
            path: path.into(),
            bytes: bytes.into(),
        }))
    }

    /// Path the bytes were read from.
    pub fn path(&self) -> &Path {
        &self.0.path
    }

    /// File name for display, falling back to the full path.
    pub fn label(&self) -> String {
        self.0
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| self.0.path.display().to_string())
    }

    pub fn byte_len(&self) -> usize {
        self.0.bytes.len()
    }

    /// A seekable reader over the shared bytes; keeps the handle alive.
    pub fn reader(&self) -> Cursor<MediaRef> {
        Cursor::new(self.clone())
    }

    /// Number of live clones of this handle.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    pub fn same_as(&self, other: &MediaRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl AsRef<[u8]> for MediaRef {
    fn as_ref(&self) -> &[u8] {
        &self.0.bytes
    }
}

impl fmt::Debug for MediaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaRef")
            .field("path", &self.0.path)
            .field("len", &self.0.bytes.len())
            .finish()
    }
}

/// Where a form field's media comes from.
#[derive(Debug, Clone)]
pub enum MediaSource {
    /// A file still to be read.
    Path(PathBuf),
    /// A handle that is already loaded (kept across an edit).
    Loaded(MediaRef),
}

impl MediaSource {
    /// Turn the source into a loaded handle, reading the file if needed.
    pub fn resolve(self, field: TrackField) -> Result<MediaRef> {
        match self {
            MediaSource::Path(p) => MediaRef::open(&p, field),
            MediaSource::Loaded(m) => Ok(m),
        }
    }
}
