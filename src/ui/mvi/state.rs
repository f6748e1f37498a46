/// Marker trait for UI state.
///
/// `Default` is the initial state and lets `App` take the current value
/// out with `std::mem::take` before reducing it.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
