//! The transition seam shared by every store.

use super::intent::Intent;
use super::state::UiState;

/// Folds one outcome into a snapshot.
///
/// Gateway calls and token writes happen before dispatch; `reduce` only sees
/// their result, so replaying the same outcomes yields the same snapshot.
pub trait Reducer {
    type State: UiState;

    /// Outcome vocabulary this reducer accepts.
    type Intent: Intent;

    /// Produce the next snapshot. Fields the outcome does not mention carry over.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
