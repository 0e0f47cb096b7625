use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/playdeck/config.toml` or `~/.config/playdeck/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `PLAYDECK__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub controls: ControlsSettings,
    pub playlist: PlaylistSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Volume applied at startup, in percent.
    pub initial_volume: u8,
    /// How often the audio thread reports playback position (milliseconds).
    pub tick_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            initial_volume: 100,
            tick_ms: 250,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// How long the random control stays highlighted after use (milliseconds).
    pub random_pulse_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ playdeck ~ ".to_string(),
            random_pulse_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Seek distance for `H` / `L`, in percent of the track.
    pub seek_step_percent: u8,
    /// Volume change for `-` / `+`, in percent.
    pub volume_step_percent: u8,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            seek_step_percent: 5,
            volume_step_percent: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// What next/previous do when no track is selected.
    pub navigation_without_selection: NavigationPolicy,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationPolicy {
    /// `next` selects the first track, `previous` the last.
    #[default]
    #[serde(alias = "start_at_edge", alias = "edge")]
    StartAtEdge,
    /// Refuse with a "select a track" notice.
    Reject,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `tracing` filter directive, e.g. `info` or `playdeck=debug`.
    pub level: String,
    /// Log file; defaults to the XDG state directory.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
