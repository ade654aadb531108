/// Marker trait for intents: edits, focus moves, submissions and their results.
pub trait Intent: Send + 'static {}
