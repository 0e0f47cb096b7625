//! Configuration loader and schema types.
//!
//! Settings are layered: environment over an optional TOML file over struct
//! defaults.

mod load;
mod schema;

pub use load::{default_config_path, default_log_path, resolve_config_path};
pub use schema::*;
