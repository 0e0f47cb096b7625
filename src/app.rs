//! Application module: the controller wrapped with TUI state.
//!
//! `App` lives in `app::model`; the add/edit form it opens lives in
//! `app::form`.

mod form;
mod model;

pub use form::*;
pub use model::*;
