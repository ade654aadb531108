/// Marker trait for UI state.
///
/// `Default` lets the owner `mem::take` the state into the reducer, and
/// `PartialEq` lets tests compare whole states.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
