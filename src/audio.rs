//! Audio playback: the `Playback` trait the controller drives and the
//! `rodio`-backed `AudioPlayer` that implements it on a dedicated thread.

mod player;
mod probe;
mod sink;
mod thread;
mod types;

#[cfg(test)]
pub mod fake;

pub use player::AudioPlayer;
pub use types::*;
