//! Base trait for intents (commands) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Commands queued by the driver (initialize, generate)
/// - User actions (the quit key)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
