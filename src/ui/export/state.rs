//! State of the winner card export.

use std::path::PathBuf;

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExportState {
    /// Nothing to report.
    #[default]
    Idle,

    /// Card is being rendered in the background.
    InProgress {
        /// Job whose outcome this state waits for.
        job: u64,
        /// Animation tick for spinner.
        animation_tick: u8,
    },

    /// Card written.
    Saved { path: PathBuf },

    /// Export failed; the message is shown until dismissed.
    Failed { error: String },
}

impl UiState for ExportState {}

impl ExportState {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::InProgress { .. })
    }

    /// Job currently rendering, if any.
    pub fn active_job(&self) -> Option<u64> {
        match self {
            Self::InProgress { job, .. } => Some(*job),
            _ => None,
        }
    }

    pub fn saved_path(&self) -> Option<&PathBuf> {
        match self {
            Self::Saved { path } => Some(path),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }
}
