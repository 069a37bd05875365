//! Session/data store: the single source of truth the views render.

mod confirm;
mod handle;
mod intent;
pub mod messages;
mod reducer;
mod state;

pub use confirm::{AssumeYes, Confirm};
pub use handle::Store;
pub use intent::StoreIntent;
pub use reducer::StoreReducer;
pub use state::{Notification, StoreState};
