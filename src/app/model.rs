//! Application model: the controller plus the TUI-only state around it.
//!
//! `App` owns the list cursor, the open track form and the pending notice.
//! Controller errors never escape it: `report` turns them into a notice.

use tracing::debug;

use crate::audio::Playback;
use crate::controller::Controller;
use crate::error::{PlaylistError, Result};

use super::form::{FormMode, TrackForm};

/// The main application model.
pub struct App<P: Playback> {
    pub controller: Controller<P>,
    cursor: usize,
    form: Option<TrackForm>,
    notice: Option<String>,
}

impl<P: Playback> App<P> {
    pub fn new(controller: Controller<P>) -> Self {
        Self {
            controller,
            cursor: 0,
            form: None,
            notice: None,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn form(&self) -> Option<&TrackForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut TrackForm> {
        self.form.as_mut()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// A form or notice is open and owns the input.
    pub fn is_modal(&self) -> bool {
        self.form.is_some() || self.notice.is_some()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Show `err` as a blocking notice.
    pub fn show_error(&mut self, err: &PlaylistError) {
        debug!("notice: {err}");
        if let (PlaylistError::Validation { field }, Some(form)) = (err, self.form.as_mut()) {
            form.focus = *field;
        }
        self.notice = Some(err.to_string());
    }

    /// Pass `result` through, turning an error into a notice.
    pub fn report<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                self.show_error(&e);
                None
            }
        }
    }

    /// Move the cursor down, wrapping to the top.
    pub fn cursor_next(&mut self) {
        let len = self.controller.playlist().len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    /// Move the cursor up, wrapping to the bottom.
    pub fn cursor_prev(&mut self) {
        let len = self.controller.playlist().len();
        if len > 0 {
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    pub fn cursor_top(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_bottom(&mut self) {
        self.cursor = self.controller.playlist().len().saturating_sub(1);
    }

    /// Select the track under the cursor.
    pub fn select_cursor(&mut self) {
        if self.controller.playlist().is_empty() {
            self.show_error(&PlaylistError::EmptyPlaylist);
            return;
        }
        let result = self.controller.select(self.cursor);
        self.report(result);
    }

    pub fn next(&mut self) {
        let result = self.controller.next();
        self.navigated(result);
    }

    pub fn previous(&mut self) {
        let result = self.controller.previous();
        self.navigated(result);
    }

    pub fn random(&mut self) {
        let result = self.controller.random();
        self.navigated(result);
    }

    pub fn repeat(&mut self) {
        let result = self.controller.repeat();
        self.report(result);
    }

    /// Remove the selected track.
    pub fn remove(&mut self) {
        let result = self.controller.remove();
        if self.report(result).is_some() {
            self.clamp_cursor();
        }
    }

    /// Move the seek position by `delta` percent of the track.
    pub fn seek_by(&mut self, delta: f64) {
        let player = self.controller.player();
        let Some(total) = player.duration().filter(|d| !d.is_zero()) else {
            return;
        };
        let percent = player.current_time().as_secs_f64() / total.as_secs_f64() * 100.0;
        self.controller.seek(percent + delta);
        self.controller.on_playback_position_changed();
    }

    /// Change the volume by `delta` percentage points.
    pub fn volume_by(&mut self, delta: f64) {
        let percent = f64::from(self.controller.volume_percent()) + delta;
        self.controller.set_volume(percent);
    }

    /// Open an empty form in add mode. The selection is kept.
    pub fn add_prompt(&mut self) {
        self.form = Some(TrackForm::add());
    }

    /// Open the form prefilled with the selected track.
    pub fn edit_prompt(&mut self) {
        let selected = self
            .controller
            .selection()
            .zip(self.controller.selected_track());
        match selected {
            Some((index, track)) => self.form = Some(TrackForm::edit(index, track)),
            None => self.show_error(&PlaylistError::NoSelection { action: "edit" }),
        }
    }

    /// Commit the open form. On error the form stays open behind the notice.
    ///
    /// An edit form whose track is no longer the selection is closed
    /// unsaved.
    pub fn save(&mut self) {
        let Some(form) = self.form.as_ref() else {
            return;
        };
        if form.mode == FormMode::Edit && form.target() != self.controller.selection() {
            debug!(
                "edit target {:?} is not the selection {:?}",
                form.target(),
                self.controller.selection()
            );
            self.form = None;
            self.show_error(&PlaylistError::NoSelection { action: "edit" });
            return;
        }
        let fields = form.to_fields();
        let result = match form.mode {
            FormMode::Add => self.controller.add(fields).map(|_| ()),
            FormMode::Edit => self.controller.edit(fields).map(|_| ()),
        };
        if self.report(result).is_some() {
            self.form = None;
        }
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    fn navigated(&mut self, result: Result<()>) {
        if self.report(result).is_some() {
            if let Some(i) = self.controller.selection() {
                self.cursor = i;
            }
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.controller.playlist().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}
