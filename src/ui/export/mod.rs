//! Winner card export status.
//!
//! The rendering itself lives in `crate::export`; this module tracks the
//! background job so the UI can show a spinner and the outcome.

mod intent;
mod reducer;
mod state;

pub use intent::ExportIntent;
pub use reducer::ExportReducer;
pub use state::ExportState;
