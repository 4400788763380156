//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User gestures (key presses, clicks, wheel scrolls)
/// - Frame ticks carrying the current timestamp
/// - Expired timers (settle delay, page transition)
pub trait Intent: Send + 'static {}
