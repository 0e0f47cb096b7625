//! Playlist module: track records, media handles and navigation policy.
//!
//! `Playlist` is the ordered list the controller mutates; the helpers in
//! `navigation` compute the next selection without touching any state.

mod media;
mod model;
mod navigation;

pub use media::*;
pub use model::*;
pub use navigation::*;
