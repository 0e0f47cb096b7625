use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::app::{App, TrackForm};
use crate::audio::{AudioPlayer, Playback, PlaybackEvent};
use crate::config;
use crate::controller::PlaybackState;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::runtime::mpris_sync::{MprisSnapshot, update_mpris};
use crate::{ui, view};

/// State tracked by the runtime event loop across iterations.
#[derive(Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
    /// What MPRIS was last told.
    pub last_mpris: MprisSnapshot,
}

/// Main terminal event loop: handles input, UI drawing, playback events and
/// MPRIS. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<AudioPlayer>,
    mpris: &MprisHandle,
    control_rx: &mpsc::Receiver<ControlCmd>,
    playback_rx: &mpsc::Receiver<PlaybackEvent>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        for ev in playback_rx.try_iter() {
            if ev == PlaybackEvent::Ended {
                debug!("track ended");
            }
            app.controller.on_playback_position_changed();
        }

        let snapshot = MprisSnapshot::of(app);
        if snapshot != state.last_mpris {
            update_mpris(mpris, app);
            state.last_mpris = snapshot;
        }

        let frame = view::render(app, &settings.ui, &settings.controls, Instant::now());
        terminal.draw(|f| ui::draw(f, &frame))?;

        while let Ok(cmd) = control_rx.try_recv() {
            if handle_control_cmd(cmd, app) {
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, state) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply a remote command. Returns `true` on quit.
/// Track changes are dropped while a form or notice is open.
pub(super) fn handle_control_cmd<P: Playback>(cmd: ControlCmd, app: &mut App<P>) -> bool {
    debug!("mpris command {cmd:?}");
    let playback = app.controller.playback_state();
    match cmd {
        ControlCmd::Quit => return true,
        ControlCmd::Play => {
            if playback == PlaybackState::Paused {
                app.controller.toggle_play_pause();
            }
        }
        ControlCmd::Pause | ControlCmd::Stop => {
            if playback == PlaybackState::Playing {
                app.controller.toggle_play_pause();
            }
        }
        ControlCmd::PlayPause => app.controller.toggle_play_pause(),
        ControlCmd::Next | ControlCmd::Prev if app.is_modal() => {
            debug!("dropping {cmd:?} while a form or notice is open");
        }
        ControlCmd::Next => app.next(),
        ControlCmd::Prev => app.previous(),
    }
    false
}

/// Handle one key press. Returns `true` on quit.
fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App<AudioPlayer>,
    state: &mut EventLoopState,
) -> bool {
    // A notice blocks everything until dismissed.
    if app.notice().is_some() {
        state.pending_gg = false;
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_notice();
        }
        return false;
    }

    if app.form().is_some() {
        state.pending_gg = false;
        match key.code {
            KeyCode::Esc => app.close_form(),
            KeyCode::Enter => app.save(),
            code => {
                if let Some(form) = app.form_mut() {
                    edit_form(form, code);
                }
            }
        }
        return false;
    }

    if key.code != KeyCode::Char('g') {
        state.pending_gg = false;
    }

    let seek_step = f64::from(settings.controls.seek_step_percent);
    let volume_step = f64::from(settings.controls.volume_step_percent);

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.cursor_top();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => app.cursor_bottom(),
        KeyCode::Char('j') | KeyCode::Down => app.cursor_next(),
        KeyCode::Char('k') | KeyCode::Up => app.cursor_prev(),
        KeyCode::Enter => app.select_cursor(),
        KeyCode::Char('p') | KeyCode::Char(' ') => app.controller.toggle_play_pause(),
        KeyCode::Char('l') => app.next(),
        KeyCode::Char('h') => app.previous(),
        KeyCode::Char('s') => app.random(),
        KeyCode::Char('r') => app.repeat(),
        KeyCode::Char('L') => app.seek_by(seek_step),
        KeyCode::Char('H') => app.seek_by(-seek_step),
        KeyCode::Char('+') | KeyCode::Char('=') => app.volume_by(volume_step),
        KeyCode::Char('-') => app.volume_by(-volume_step),
        KeyCode::Char('a') => app.add_prompt(),
        KeyCode::Char('e') => app.edit_prompt(),
        KeyCode::Char('d') => app.remove(),
        _ => {}
    }

    false
}

fn edit_form(form: &mut TrackForm, code: KeyCode) {
    match code {
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Backspace => form.pop_char(),
        KeyCode::Char(c) if !c.is_control() => form.push_char(c),
        _ => {}
    }
}
