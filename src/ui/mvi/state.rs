/// Marker trait for view state.
///
/// `Default` is the freshly mounted view; `PartialEq` lets tests compare
/// whole states.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
