//! Intents for the winner card export.

use std::path::PathBuf;

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ExportIntent {
    /// Background export `job` started.
    Start { job: u64 },

    /// Animation tick (for spinner updates).
    AnimationTick,

    /// Export `job` wrote the card.
    Finished { job: u64, path: PathBuf },

    /// Export `job` failed.
    Failed { job: u64, message: String },

    /// Forget the last result (winner reset or cleared).
    Dismiss,
}

impl Intent for ExportIntent {}
