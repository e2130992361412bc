//! Winner selection feature module.
//!
//! - `state.rs` - selection state and the winner record
//! - `intent.rs` - start / tick / resolve / reset
//! - `reducer.rs` - state transitions
//! - `timer.rs` - cancel-on-drop shuffle timer
//! - `engine.rs` - owns timer, snapshot and random source
//! - `panel.rs` - winner panel rendering

mod engine;
mod intent;
mod panel;
mod reducer;
mod state;
mod timer;

pub use engine::{SelectionEngine, ShuffleSettings};
pub use intent::SelectionIntent;
pub use panel::render_winner_panel;
pub use reducer::SelectionReducer;
pub use state::{SelectionState, WinnerRecord};
pub use timer::{ShuffleTick, ShuffleTimer, TickSink};
