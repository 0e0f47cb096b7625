use crate::controller::PlaybackState;

/// One line of the playlist.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// 1-based position.
    pub number: usize,
    pub name: String,
    pub artist: String,
    /// This row is the controller's selection.
    pub selected: bool,
}

/// Header block describing the track loaded at select time.
#[derive(Debug, Clone, PartialEq)]
pub struct NowShowing {
    pub name: String,
    pub artist: String,
    pub artwork: String,
}

impl Default for NowShowing {
    fn default() -> Self {
        Self {
            name: "No track".to_string(),
            artist: "-".to_string(),
            artwork: "-".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub title: &'static str,
    pub fields: Vec<FormField>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub header: String,
    pub now_showing: NowShowing,
    pub now_playing: String,
    pub rows: Vec<Row>,
    /// Row under the list cursor, `None` when the list is empty.
    pub cursor: Option<usize>,
    pub current_time: String,
    pub total_time: String,
    pub seek_percent: f64,
    pub volume: u8,
    pub state: PlaybackState,
    /// The random control is still lit from a recent press.
    pub random_active: bool,
    pub controls: String,
    pub form: Option<FormView>,
    pub notice: Option<String>,
}

impl View {
    /// Play/pause glyph for the transport line.
    pub fn play_icon(&self) -> &'static str {
        match self.state {
            PlaybackState::Playing => "⏸",
            PlaybackState::Paused | PlaybackState::Stopped => "▶",
        }
    }
}
