//! Model-View-Intent (MVI) primitives.
//!
//! The store applies every state change through a reducer, so the
//! transitions stay pure and testable without a network.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Gateway ──→ Intent ──→ Reducer ──→ State ──→ View
//!    ↑                                                     │
//!    └─────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Snapshot of everything a view renders
//! - **Intent**: Outcome of an action (API response, user acknowledgement)
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
