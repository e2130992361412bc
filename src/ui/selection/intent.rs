//! Intents for the winner selection.

use crate::ui::mvi::Intent;

use super::state::WinnerRecord;

#[derive(Debug, Clone)]
pub enum SelectionIntent {
    /// A pick was accepted; start the shuffle.
    Start,

    /// Shuffle timer fired with a freshly sampled name.
    Tick { sample: String },

    /// Tick budget spent; commit the independently drawn winner.
    Resolve { winner: WinnerRecord },

    /// Back to idle from any state.
    Reset,
}

impl Intent for SelectionIntent {}
