//! UI state marker trait.

/// Snapshot of a panel, complete enough to render it.
///
/// `Default` is the resting state a reducer starts from, and is what
/// `std::mem::take` leaves behind while an intent is being reduced.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
