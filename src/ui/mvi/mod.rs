//! Model-View-Intent primitives shared by the picker's stateful panels.
//!
//! ```text
//! key / timer / export event ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Reducers never touch resources. Timers, random draws and background
//! jobs live with the owner of the state and enter the reducer as intent
//! payloads.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
