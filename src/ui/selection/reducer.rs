use crate::ui::mvi::Reducer;

use super::intent::SelectionIntent;
use super::state::SelectionState;

pub struct SelectionReducer;

impl Reducer for SelectionReducer {
    type State = SelectionState;
    type Intent = SelectionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SelectionIntent::Start => match state {
                // Never restart a running shuffle.
                shuffling @ SelectionState::Shuffling { .. } => shuffling,
                _ => SelectionState::Shuffling {
                    displayed: None,
                    ticks: 0,
                },
            },

            SelectionIntent::Tick { sample } => match state {
                SelectionState::Shuffling { ticks, .. } => SelectionState::Shuffling {
                    displayed: Some(sample),
                    ticks: ticks.saturating_add(1),
                },
                other => other,
            },

            SelectionIntent::Resolve { winner } => match state {
                SelectionState::Shuffling { .. } => SelectionState::Resolved(winner),
                other => other,
            },

            SelectionIntent::Reset => SelectionState::Idle,
        }
    }
}
