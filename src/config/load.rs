use std::{env, path::PathBuf};

use super::schema::Settings;

/// `Settings::load` reads an optional config file, then environment variables
/// prefixed `PLAYDECK__`, over struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("PLAYDECK")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Range checks the deserializer cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.audio.initial_volume > 100 {
            return Err("audio.initial_volume must be <= 100".to_string());
        }
        if self.audio.tick_ms == 0 {
            return Err("audio.tick_ms must be >= 1".to_string());
        }
        if !(1..=100).contains(&self.controls.seek_step_percent) {
            return Err("controls.seek_step_percent must be in 1..=100".to_string());
        }
        if !(1..=100).contains(&self.controls.volume_step_percent) {
            return Err("controls.volume_step_percent must be in 1..=100".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `PLAYDECK_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("PLAYDECK_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// `$XDG_CONFIG_HOME/playdeck/config.toml`, or `~/.config/playdeck/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config").map(|d| d.join("playdeck").join("config.toml"))
}

/// `$XDG_STATE_HOME/playdeck/playdeck.log`, or `~/.local/state/playdeck/playdeck.log`.
pub fn default_log_path() -> Option<PathBuf> {
    xdg_dir("XDG_STATE_HOME", ".local/state").map(|d| d.join("playdeck").join("playdeck.log"))
}

fn xdg_dir(var: &str, home_fallback: &str) -> Option<PathBuf> {
    if let Some(xdg) = env::var_os(var) {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(home_fallback))
    }
}
