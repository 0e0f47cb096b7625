use std::time::Instant;

use crate::app::App;
use crate::audio::Playback;
use crate::config::{ControlsSettings, UiSettings};
use crate::error::TrackField;

use super::model::{FormField, FormView, NowShowing, Row, View};

const CONTROLS: [(&str, &str); 11] = [
    ("j/k", "up/down"),
    ("gg/G", "top/bottom"),
    ("enter", "play selected"),
    ("space/p", "play/pause"),
    ("h/l", "prev/next"),
    ("s", "random"),
    ("r", "repeat"),
    ("a", "add"),
    ("e", "edit"),
    ("d", "delete"),
    ("q", "quit"),
];

/// Controls help line, including the configured step sizes.
fn controls_text(controls: &ControlsSettings) -> String {
    let mut parts: Vec<String> = CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect();
    parts.insert(
        5,
        format!("[H/L] seek -/+{}%", controls.seek_step_percent),
    );
    parts.insert(
        6,
        format!("[-/+] volume -/+{}%", controls.volume_step_percent),
    );
    parts.join(" | ")
}

/// Build the `View` for `app` as of `now`.
pub fn render<P: Playback>(
    app: &App<P>,
    ui: &UiSettings,
    controls: &ControlsSettings,
    now: Instant,
) -> View {
    let ctl = &app.controller;
    let playlist = ctl.playlist();
    let selection = ctl.selection();

    let rows = playlist
        .tracks()
        .iter()
        .enumerate()
        .map(|(i, t)| Row {
            number: i + 1,
            name: t.name.clone(),
            artist: t.artist.clone(),
            selected: selection == Some(i),
        })
        .collect();

    let now_showing = ctl
        .now_showing()
        .map(|t| NowShowing {
            name: t.name.clone(),
            artist: t.artist.clone(),
            artwork: t.artwork.label(),
        })
        .unwrap_or_default();

    let times = ctl.time_display();

    let form = app.form().map(|f| FormView {
        title: f.title(),
        fields: TrackField::ALL
            .iter()
            .map(|&field| FormField {
                label: field.label(),
                value: f.value(field).to_string(),
                focused: f.focus == field,
            })
            .collect(),
    });

    View {
        header: ui.header_text.clone(),
        now_showing,
        now_playing: ctl.now_playing_text(),
        rows,
        cursor: (!playlist.is_empty()).then(|| app.cursor().min(playlist.len() - 1)),
        current_time: times.current.clone(),
        total_time: times.total.clone(),
        seek_percent: times.seek_percent,
        volume: ctl.volume_percent(),
        state: ctl.playback_state(),
        random_active: ctl.is_random_pulsing(now),
        controls: controls_text(controls),
        form,
        notice: app.notice().map(str::to_string),
    }
}
