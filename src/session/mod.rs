//! Session token persistence.

mod token_store;

pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore, TokenStoreError};
