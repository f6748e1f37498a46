/// Marker trait for intents: key presses translated into UI actions.
pub trait Intent: Send + 'static {}
