//! Reducer for the winner card export.
//!
//! Every way out of `InProgress` goes through `Finished`, `Failed` or
//! `Dismiss`, so the spinner cannot outlive the job that started it.
//! Outcomes carry the job id; only the job being waited on may end it.

use crate::ui::mvi::Reducer;

use super::intent::ExportIntent;
use super::state::ExportState;

pub struct ExportReducer;

impl Reducer for ExportReducer {
    type State = ExportState;
    type Intent = ExportIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ExportIntent::Start { job } => match state {
                running @ ExportState::InProgress { .. } => running,
                _ => ExportState::InProgress {
                    job,
                    animation_tick: 0,
                },
            },

            ExportIntent::AnimationTick => match state {
                ExportState::InProgress {
                    job,
                    animation_tick,
                } => ExportState::InProgress {
                    job,
                    animation_tick: animation_tick.wrapping_add(1),
                },
                other => other,
            },

            // Results of dismissed or superseded jobs belong to a winner that is gone.
            ExportIntent::Finished { job, path } => match state {
                ExportState::InProgress { job: active, .. } if active == job => {
                    ExportState::Saved { path }
                }
                other => other,
            },

            ExportIntent::Failed { job, message } => match state {
                ExportState::InProgress { job: active, .. } if active == job => {
                    ExportState::Failed { error: message }
                }
                other => other,
            },

            ExportIntent::Dismiss => ExportState::Idle,
        }
    }
}
