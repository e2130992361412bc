//! Intent marker trait.

/// Something that happened: a key press, a shuffle tick, a finished export.
///
/// Intents carry every value the reducer needs, including the outcome of
/// random draws, so reducing stays deterministic.
pub trait Intent: Send + 'static {}
