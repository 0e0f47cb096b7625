use std::sync::mpsc;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::app::App;
use crate::audio::{AudioPlayer, PlaybackEvent};
use crate::controller::Controller;
use crate::mpris::ControlCmd;

mod event_loop;
mod logging;
mod mpris_sync;
mod settings;

#[cfg(test)]
mod tests;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    logging::init_logging(&settings.log);
    info!("starting playdeck");

    let (playback_tx, playback_rx) = mpsc::channel::<PlaybackEvent>();
    let audio_player = AudioPlayer::new(&settings.audio, playback_tx);
    let mut controller = Controller::new(audio_player)
        .with_policy(settings.playlist.navigation_without_selection)
        .with_random_pulse(Duration::from_millis(settings.ui.random_pulse_ms));
    controller.set_volume(f64::from(settings.audio.initial_volume));
    let mut app = App::new(controller);

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx);

    mpris_sync::update_mpris(&mpris, &app);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = event_loop::EventLoopState::default();
    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut app,
        &mpris,
        &control_rx,
        &playback_rx,
        &mut state,
    );

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.controller.player().quit();
    info!("playdeck exited");

    run_result
}
