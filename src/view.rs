//! Declarative view: a snapshot of everything the TUI shows.
//!
//! `render` is a pure function of the app state and the clock, so each
//! frame rebuilds the `View` from scratch and `ui::draw` only paints it.

mod model;
mod render;

pub use model::*;
pub use render::render;
