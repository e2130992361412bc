use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::clipboard;
use crate::config::{Config, ExportConfig};
use crate::export::export_winner_card;
use crate::registry::Registry;
use crate::ui::events::AppEvent;
use crate::ui::export::{ExportIntent, ExportReducer, ExportState};
use crate::ui::mvi::Reducer;
use crate::ui::selection::{
    SelectionEngine, SelectionState, ShuffleSettings, ShuffleTick, TickSink,
};

/// Which entry form receives typed text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryMode {
    Single,
    Bulk,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    entry_mode: EntryMode,
    single_input: String,
    bulk_input: String,
    registry: Registry,
    /// Participant under the list cursor.
    cursor: usize,
    /// Owns the shuffle timer; dropping the app cancels it.
    engine: SelectionEngine,
    /// State of the card export (MVI pattern).
    export: ExportState,
    export_config: ExportConfig,
    /// Id of the most recently started export job.
    export_job: u64,
    /// Transient one-line message (clipboard result, bulk add count).
    notice: Option<String>,
    runtime: Handle,
    events: mpsc::Sender<AppEvent>,
}

impl App {
    pub fn new(
        config: &Config,
        registry: Registry,
        runtime: Handle,
        events: mpsc::Sender<AppEvent>,
    ) -> Self {
        let tick_tx = events.clone();
        let sink: TickSink = Arc::new(move |tick| tick_tx.send(AppEvent::ShuffleTick(tick)).is_ok());
        let engine = SelectionEngine::new(
            ShuffleSettings::from(&config.picker),
            runtime.clone(),
            sink,
        );

        Self {
            should_quit: false,
            entry_mode: EntryMode::Single,
            single_input: String::new(),
            bulk_input: String::new(),
            registry,
            cursor: 0,
            engine,
            export: ExportState::default(),
            export_config: config.export.clone(),
            export_job: 0,
            notice: None,
            runtime,
            events,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn selection(&self) -> &SelectionState {
        self.engine.state()
    }

    pub fn engine(&self) -> &SelectionEngine {
        &self.engine
    }

    pub fn export_state(&self) -> &ExportState {
        &self.export
    }

    pub fn entry_mode(&self) -> EntryMode {
        self.entry_mode
    }

    pub fn single_input(&self) -> &str {
        &self.single_input
    }

    pub fn bulk_input(&self) -> &str {
        &self.bulk_input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Picking is offered only with participants and no shuffle running.
    pub fn can_pick(&self) -> bool {
        !self.registry.is_empty() && !self.engine.state().is_shuffling()
    }

    // ========================================================================
    // Entry forms
    // ========================================================================

    pub fn toggle_entry_mode(&mut self) {
        self.entry_mode = match self.entry_mode {
            EntryMode::Single => EntryMode::Bulk,
            EntryMode::Bulk => EntryMode::Single,
        };
    }

    pub fn insert_char(&mut self, ch: char) {
        self.active_input().push(ch);
    }

    /// Pasted text. The single-name field has no line breaks.
    pub fn insert_str(&mut self, text: &str) {
        match self.entry_mode {
            EntryMode::Single => {
                let flattened = text.replace(['\r', '\n'], " ");
                self.single_input.push_str(&flattened);
            }
            EntryMode::Bulk => self.bulk_input.push_str(&text.replace("\r\n", "\n")),
        }
    }

    pub fn insert_newline(&mut self) {
        if self.entry_mode == EntryMode::Bulk {
            self.bulk_input.push('\n');
        }
    }

    pub fn backspace(&mut self) {
        self.active_input().pop();
    }

    /// Add the single-name field. The field is kept when it was blank.
    pub fn submit_single(&mut self) -> bool {
        if !self.registry.add_one(&self.single_input) {
            return false;
        }
        self.single_input.clear();
        self.notice = None;
        true
    }

    /// Add every line of the bulk field.
    pub fn submit_bulk(&mut self) -> usize {
        let added = self.registry.add_bulk(&self.bulk_input);
        if added > 0 {
            self.bulk_input.clear();
            self.notice = Some(format!("Added {added} participants"));
            tracing::debug!(added, "bulk names added");
        }
        added
    }

    // ========================================================================
    // Participant list
    // ========================================================================

    pub fn move_cursor(&mut self, delta: i32) {
        let count = self.registry.count();
        if count == 0 {
            self.cursor = 0;
            return;
        }
        let current = self.cursor.min(count - 1);
        self.cursor = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            current.saturating_add(delta as usize).min(count - 1)
        };
    }

    pub fn remove_selected(&mut self) -> Option<String> {
        let removed = self.registry.remove_at(self.cursor);
        self.clamp_cursor();
        removed
    }

    /// Empty the registry and drop any shuffle or winner that referenced it.
    pub fn clear_all(&mut self) {
        let had_names = !self.registry.is_empty();
        self.registry.clear();
        self.cursor = 0;
        self.engine.reset();
        dispatch_mvi!(self, export, ExportReducer, ExportIntent::Dismiss);
        self.notice = None;
        if had_names {
            tracing::info!("participants cleared");
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn pick(&mut self) -> bool {
        if !self.engine.pick(&self.registry) {
            return false;
        }
        dispatch_mvi!(self, export, ExportReducer, ExportIntent::Dismiss);
        self.notice = None;
        true
    }

    /// "Pick again": back to idle, registry untouched.
    pub fn reset_selection(&mut self) {
        self.engine.reset();
        dispatch_mvi!(self, export, ExportReducer, ExportIntent::Dismiss);
        self.notice = None;
    }

    pub fn on_shuffle_tick(&mut self, tick: ShuffleTick) {
        self.engine.on_tick(tick);
    }

    pub fn on_tick(&mut self) {
        if self.export.is_in_progress() {
            dispatch_mvi!(self, export, ExportReducer, ExportIntent::AnimationTick);
        }
    }

    // ========================================================================
    // Sharing
    // ========================================================================

    /// Render the winner card on a blocking worker.
    ///
    /// The outcome always comes back as `AppEvent::ExportFinished`, even if
    /// the worker panics, so the spinner is always cleared.
    pub fn request_export(&mut self) -> bool {
        if self.export.is_in_progress() {
            return false;
        }
        let Some(record) = self.engine.winner().cloned() else {
            return false;
        };

        self.export_job = self.export_job.wrapping_add(1);
        let job = self.export_job;
        dispatch_mvi!(self, export, ExportReducer, ExportIntent::Start { job });
        let config = self.export_config.clone();
        let events = self.events.clone();
        self.runtime.spawn_blocking(move || {
            let mut outcome = scopeguard::guard(
                Err("Export interrupted".to_string()),
                move |outcome| {
                    let _ = events.send(AppEvent::ExportFinished { job, outcome });
                },
            );
            *outcome = export_winner_card(&record, &config).map_err(|err| err.to_string());
        });
        true
    }

    /// Outcome of export `job`. Outcomes of superseded jobs are dropped.
    pub fn on_export_finished(&mut self, job: u64, outcome: Result<PathBuf, String>) {
        let intent = match outcome {
            Ok(path) => ExportIntent::Finished { job, path },
            Err(message) => {
                tracing::warn!(job, error = %message, "winner card export failed");
                ExportIntent::Failed { job, message }
            }
        };
        dispatch_mvi!(self, export, ExportReducer, intent);
    }

    pub fn copy_announcement(&mut self) -> bool {
        let Some(record) = self.engine.winner() else {
            return false;
        };
        match clipboard::copy_text(&record.announcement()) {
            Ok(()) => {
                self.notice = Some("Copied announcement to clipboard".to_string());
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "clipboard copy failed");
                self.notice = Some(err.to_string());
                false
            }
        }
    }

    fn active_input(&mut self) -> &mut String {
        match self.entry_mode {
            EntryMode::Single => &mut self.single_input,
            EntryMode::Bulk => &mut self.bulk_input,
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.registry.count().saturating_sub(1));
    }
}
