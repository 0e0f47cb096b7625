//! The playlist controller: owns the playlist and selection and drives the
//! playback primitive.
//!
//! `Controller` is generic over `audio::Playback`, so the same code runs
//! against the rodio player and against the in-memory fake used in tests.

mod display;
mod model;

pub use display::*;
pub use model::*;

#[cfg(test)]
mod tests;
