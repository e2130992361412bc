//! State for the winner selection.

use chrono::NaiveDate;

use crate::ui::mvi::UiState;

/// The drawn winner and the day they were drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinnerRecord {
    pub name: String,
    pub date: NaiveDate,
}

impl WinnerRecord {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
        }
    }

    /// Long-form date, e.g. `October 17, 2026`.
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    /// One-line announcement used for the clipboard and headless output.
    pub fn announcement(&self) -> String {
        format!("{} won the giveaway on {}", self.name, self.display_date())
    }
}

/// Selection state machine.
///
/// `Idle` → `Shuffling` on a pick, `Shuffling` → `Resolved` once the tick
/// budget is spent, and back to `Idle` on reset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// No shuffle running and no winner.
    #[default]
    Idle,

    /// Cosmetic flicker before the real draw.
    Shuffling {
        /// Name sampled on the latest tick. `None` until the first tick.
        displayed: Option<String>,
        /// Ticks received so far in this cycle.
        ticks: u32,
    },

    /// Winner committed.
    Resolved(WinnerRecord),
}

impl UiState for SelectionState {}

impl SelectionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_shuffling(&self) -> bool {
        matches!(self, Self::Shuffling { .. })
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Name currently flickering on screen, if any.
    pub fn displayed(&self) -> Option<&str> {
        match self {
            Self::Shuffling { displayed, .. } => displayed.as_deref(),
            _ => None,
        }
    }

    pub fn ticks(&self) -> u32 {
        match self {
            Self::Shuffling { ticks, .. } => *ticks,
            _ => 0,
        }
    }

    pub fn winner(&self) -> Option<&WinnerRecord> {
        match self {
            Self::Resolved(record) => Some(record),
            _ => None,
        }
    }
}
