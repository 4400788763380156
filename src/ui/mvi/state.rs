//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are replaced wholesale on every dispatch, so they must be
/// `Default` (the placeholder left behind by `std::mem::take`) and
/// `PartialEq` (tests compare whole states to prove a no-op).
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
