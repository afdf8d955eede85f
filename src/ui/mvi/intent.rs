/// Marker trait for intents: edits, focus moves, submissions.
pub trait Intent: Send + 'static {}
