//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Completed API calls (success or failure)
/// - Session events (login, logout, token verification)
/// - View acknowledgements and navigation
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
